//! Classpath-to-library-table conversion core.
//!
//! Jar references are pulled out of the raw `.classpath` text with a pattern match,
//! not an XML parse, and checked for existence under a root directory.

use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::ConvertError;

const JAR_PATH_PATTERN: &str = r#"path="(/Libs[^"]+\.jar)"#;

/// A `/Libs/...jar` reference taken verbatim from a classpath `path` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClasspathEntry(String);

impl ClasspathEntry {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path relative to the root directory, without leading separators.
    pub fn relative_path(&self) -> &str {
        self.0.trim_start_matches(['/', '\\'])
    }

    /// Last path segment with the `.jar` suffix removed.
    pub fn library_name(&self) -> &str {
        let file_name = self.0.rsplit(['/', '\\']).next().unwrap_or(&self.0);
        file_name.strip_suffix(".jar").unwrap_or(file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryRecord {
    pub name: String,
    pub classes_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub records: Vec<LibraryRecord>,
    pub missing: Vec<String>,
}

/// Inputs the converter needs besides the classpath text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub root_directory: PathBuf,
    pub environment_variable: String,
}

impl ConversionConfig {
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !self.root_directory.exists() {
            return Err(ConvertError::ConfigurationMissing {
                root: self.root_directory.clone(),
            });
        }
        Ok(())
    }

    pub fn convert(&self, classpath_text: &str) -> ConversionResult {
        let entries = extract_jar_paths(classpath_text);
        build_library_table(&entries, &self.root_directory, &self.environment_variable)
    }
}

fn jar_path_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(JAR_PATH_PATTERN).expect("jar path pattern is valid"))
}

pub fn extract_jar_paths(classpath_text: &str) -> Vec<ClasspathEntry> {
    jar_path_regex()
        .captures_iter(classpath_text)
        .filter_map(|c| c.get(1))
        .map(|m| ClasspathEntry::new(m.as_str()))
        .collect()
}

pub fn classes_url(environment_variable: &str, entry: &ClasspathEntry) -> String {
    format!("jar://${environment_variable}$/{}!/", entry.as_str())
}

pub fn build_library_table(
    entries: &[ClasspathEntry],
    root_directory: &Path,
    environment_variable: &str,
) -> ConversionResult {
    let mut result = ConversionResult::default();

    for entry in entries {
        let full_path = root_directory.join(entry.relative_path());
        if full_path.exists() {
            result.records.push(LibraryRecord {
                name: entry.library_name().to_string(),
                classes_url: classes_url(environment_variable, entry),
            });
        } else {
            let normalized = full_path.to_string_lossy().replace('\\', "/");
            log::debug!("jar not found: {normalized}");
            result.missing.push(normalized);
        }
    }

    result
}

pub fn read_classpath(path: &Path) -> Result<String, ConvertError> {
    std::fs::read_to_string(path).map_err(|source| ConvertError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })
}
