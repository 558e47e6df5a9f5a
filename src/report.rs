use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::form::Form;

pub const MISSING_JARS_HEADER: &str = "***** MISSING JARS *****";
pub const SETTINGS_HEADER: &str = "***** SETTINGS *****";

pub fn serialize_missing_report(missing: &[String]) -> String {
    let mut out = String::new();
    out.push_str(MISSING_JARS_HEADER);
    out.push('\n');
    for path in missing {
        out.push_str(path);
        out.push('\n');
    }
    out
}

pub fn serialize_settings_report(form: &Form) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(SETTINGS_HEADER);
    out.push('\n');
    out.push_str(&format!("Environment variable: {}\n", form.environment_variable));
    out.push_str(&format!("Root directory: {}\n", form.root_directory.display()));
    out.push_str(&format!("Classpath file: {}\n", form.classpath_file.display()));
    out.push_str(&format!(
        "Application Libraries file: {}\n",
        form.application_libraries_file.display()
    ));
    out
}

/// The `report.log` written next to the settings file. The caller decides
/// whether a block replaces the log or is appended to it.
#[derive(Debug, Clone)]
pub struct ReportLog {
    path: PathBuf,
}

impl ReportLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn clear(&self) -> Result<(), ConvertError> {
        if self.path.is_file() {
            std::fs::remove_file(&self.path).map_err(|source| self.unwritable(source))?;
        }
        Ok(())
    }

    pub fn overwrite(&self, content: &str) -> Result<(), ConvertError> {
        self.ensure_parent()?;
        std::fs::write(&self.path, content).map_err(|source| self.unwritable(source))
    }

    pub fn append(&self, content: &str) -> Result<(), ConvertError> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.unwritable(source))?;
        file.write_all(content.as_bytes())
            .map_err(|source| self.unwritable(source))
    }

    fn ensure_parent(&self) -> Result<(), ConvertError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| self.unwritable(source))?;
        }
        Ok(())
    }

    fn unwritable(&self, source: std::io::Error) -> ConvertError {
        ConvertError::DestinationUnwritable {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "eclipse_to_intellij_report_{}_{}",
            std::process::id(),
            nanos
        ))
        .join(name)
    }

    #[test]
    fn missing_report_lists_paths_under_header() {
        let report = serialize_missing_report(&["/r/Libs/a.jar".to_string(), "/r/Libs/b.jar".to_string()]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines, vec![MISSING_JARS_HEADER, "/r/Libs/a.jar", "/r/Libs/b.jar"]);
    }

    #[test]
    fn settings_report_names_every_field() {
        let form = Form {
            environment_variable: "JAVA_MODULE".to_string(),
            root_directory: PathBuf::from("/work"),
            classpath_file: PathBuf::from("/work/.classpath"),
            application_libraries_file: PathBuf::from("/idea/options/applicationLibraries.xml"),
        };
        let report = serialize_settings_report(&form);
        assert!(report.contains(SETTINGS_HEADER));
        assert!(report.contains("Environment variable: JAVA_MODULE\n"));
        assert!(report.contains("Root directory: /work\n"));
        assert!(report.contains("Classpath file: /work/.classpath\n"));
        assert!(report.contains("Application Libraries file: /idea/options/applicationLibraries.xml\n"));
    }

    #[test]
    fn overwrite_replaces_and_append_extends() -> anyhow::Result<()> {
        let path = temp_path("report.log");
        let log = ReportLog::new(path.clone());

        log.append("old\n")?;
        log.overwrite("fresh\n")?;
        log.append("more\n")?;
        assert_eq!(std::fs::read_to_string(&path)?, "fresh\nmore\n");

        log.clear()?;
        assert!(!path.exists());
        log.clear()?;

        if let Some(parent) = path.parent() {
            let _ = std::fs::remove_dir_all(parent);
        }
        Ok(())
    }
}
