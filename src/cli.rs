use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::form::FormOverrides;

#[derive(Debug, Clone, Parser)]
#[command(name = "eclipse-to-intellij", version)]
#[command(about = "Convert an Eclipse .classpath into an IntelliJ applicationLibraries.xml")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    #[arg(long, global = true, value_name = "FILE")]
    pub report: Option<PathBuf>,

    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Generate the library table from a classpath file
    Generate(GenerateArgs),
    /// Inspect or delete the saved settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Print the applicationLibraries.xml of the most recently used IDE
    Discover,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[arg(short = 'e', long = "env-var", value_name = "NAME")]
    pub environment_variable: Option<String>,

    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root_directory: Option<PathBuf>,

    #[arg(short = 'c', long = "classpath", value_name = "FILE")]
    pub classpath_file: Option<PathBuf>,

    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub application_libraries_file: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl GenerateArgs {
    pub fn overrides(&self) -> FormOverrides {
        FormOverrides {
            environment_variable: self.environment_variable.clone(),
            root_directory: self.root_directory.clone(),
            classpath_file: self.classpath_file.clone(),
            application_libraries_file: self.application_libraries_file.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum SettingsAction {
    Show,
    Delete,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
