use serde::Serialize;
use std::path::PathBuf;

use crate::convert::ConversionConfig;
use crate::discover::{APPLICATION_LIBRARIES_FILE, discover_application_libraries};
use crate::settings::Settings;

pub const DEFAULT_ENVIRONMENT_VARIABLE: &str = "JAVA_MODULE";
pub const CLASSPATH_FILE: &str = ".classpath";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub classpath_file: PathBuf,
    pub application_libraries_file: PathBuf,
}

impl Defaults {
    /// `.classpath` in the working directory, and the library table of the most
    /// recently used IDE (or `applicationLibraries.xml` locally when none is found).
    pub fn detect() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        let application_libraries_file = match discover_application_libraries() {
            Ok(path) => path,
            Err(err) => {
                log::info!("IDE discovery failed ({err:#}), defaulting to working directory");
                cwd.join(APPLICATION_LIBRARIES_FILE)
            }
        };
        Self {
            classpath_file: cwd.join(CLASSPATH_FILE),
            application_libraries_file,
        }
    }
}

/// Values supplied on the command line; `None` leaves the form field alone.
#[derive(Debug, Clone, Default)]
pub struct FormOverrides {
    pub environment_variable: Option<String>,
    pub root_directory: Option<PathBuf>,
    pub classpath_file: Option<PathBuf>,
    pub application_libraries_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Form {
    pub environment_variable: String,
    pub root_directory: PathBuf,
    pub classpath_file: PathBuf,
    pub application_libraries_file: PathBuf,
}

impl Form {
    pub fn load(settings: &Settings, defaults: &Defaults) -> Self {
        Self {
            environment_variable: settings
                .environment_variable
                .clone()
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT_VARIABLE.to_string()),
            root_directory: settings.root_directory.clone().unwrap_or_default(),
            classpath_file: settings
                .classpath_file
                .clone()
                .unwrap_or_else(|| defaults.classpath_file.clone()),
            application_libraries_file: settings
                .application_libraries_file
                .clone()
                .unwrap_or_else(|| defaults.application_libraries_file.clone()),
        }
    }

    pub fn defaults(defaults: &Defaults) -> Self {
        Self::load(&Settings::default(), defaults)
    }

    pub fn reset(&mut self, defaults: &Defaults) {
        *self = Self::defaults(defaults);
    }

    pub fn apply(&mut self, overrides: FormOverrides) {
        if let Some(v) = overrides.environment_variable {
            self.environment_variable = v;
        }
        if let Some(v) = overrides.root_directory {
            self.root_directory = v;
        }
        if let Some(v) = overrides.classpath_file {
            self.classpath_file = v;
        }
        if let Some(v) = overrides.application_libraries_file {
            self.application_libraries_file = v;
        }
    }

    pub fn fill_blanks(&mut self, defaults: &Defaults) {
        if is_blank(&self.classpath_file) {
            self.classpath_file = defaults.classpath_file.clone();
        }
        if is_blank(&self.application_libraries_file) {
            self.application_libraries_file = defaults.application_libraries_file.clone();
        }
    }

    pub fn to_settings(&self) -> Settings {
        Settings {
            environment_variable: Some(self.environment_variable.clone()),
            root_directory: Some(self.root_directory.clone()),
            classpath_file: Some(self.classpath_file.clone()),
            application_libraries_file: Some(self.application_libraries_file.clone()),
        }
    }

    pub fn conversion_config(&self) -> ConversionConfig {
        ConversionConfig {
            root_directory: self.root_directory.clone(),
            environment_variable: self.environment_variable.clone(),
        }
    }
}

fn is_blank(path: &std::path::Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Defaults {
        Defaults {
            classpath_file: PathBuf::from("/cwd/.classpath"),
            application_libraries_file: PathBuf::from("/cwd/applicationLibraries.xml"),
        }
    }

    #[test]
    fn load_falls_back_to_defaults_for_unset_keys() {
        let settings = Settings {
            root_directory: Some(PathBuf::from("/work")),
            ..Settings::default()
        };
        let form = Form::load(&settings, &defaults());
        assert_eq!(form.environment_variable, DEFAULT_ENVIRONMENT_VARIABLE);
        assert_eq!(form.root_directory, PathBuf::from("/work"));
        assert_eq!(form.classpath_file, PathBuf::from("/cwd/.classpath"));
        assert_eq!(form.application_libraries_file, PathBuf::from("/cwd/applicationLibraries.xml"));
    }

    #[test]
    fn overrides_then_blank_fill_then_reset() {
        let mut form = Form::defaults(&defaults());
        form.apply(FormOverrides {
            environment_variable: Some("LIBS".to_string()),
            root_directory: Some(PathBuf::from("/repo")),
            classpath_file: Some(PathBuf::from("  ")),
            application_libraries_file: None,
        });
        form.fill_blanks(&defaults());

        assert_eq!(form.environment_variable, "LIBS");
        assert_eq!(form.root_directory, PathBuf::from("/repo"));
        assert_eq!(form.classpath_file, PathBuf::from("/cwd/.classpath"));

        let round = Form::load(&form.to_settings(), &defaults());
        assert_eq!(round, form);

        form.reset(&defaults());
        assert_eq!(form, Form::defaults(&defaults()));
        assert_eq!(form.root_directory, PathBuf::new());
    }

    #[test]
    fn conversion_config_carries_root_and_token() {
        let mut form = Form::defaults(&defaults());
        form.root_directory = PathBuf::from("/repo");
        let config = form.conversion_config();
        assert_eq!(config.root_directory, PathBuf::from("/repo"));
        assert_eq!(config.environment_variable, "JAVA_MODULE");
    }
}
