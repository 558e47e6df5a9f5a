//! # eclipse-to-intellij
//!
//! Migrates Eclipse project library references into an IntelliJ IDEA global
//! library table (`applicationLibraries.xml`).
//!
//! ## Architecture
//!
//! - **convert**: Jar extraction from `.classpath` text and existence checks under a root directory
//! - **library_xml**: `applicationLibraries.xml` serialization
//! - **report**: Missing-jar and settings summaries written to `report.log`
//! - **settings**: JSON persistence of the last used inputs
//! - **form**: Editable inputs with load/reset/override operations
//! - **discover**: Locating the most recently used JetBrains IDE settings folder
//! - **generate**: The end-to-end Generate action
//! - **cli** / **config**: Command-line surface and path resolution
//! - **error**: Conversion error kinds

pub mod cli;
pub mod config;
pub mod convert;
pub mod discover;
pub mod error;
pub mod form;
pub mod generate;
pub mod library_xml;
pub mod report;
pub mod settings;
