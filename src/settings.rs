//! Persisted user inputs, stored as pretty-printed JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_directory: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classpath_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_libraries_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!("no settings file at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {}", self.path.display()))?;
        let settings = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse settings file: {}", self.path.display()))?;
        log::info!("loaded settings from {}", self.path.display());
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write settings file: {}", self.path.display()))?;
        log::info!("saved settings to {}", self.path.display());
        Ok(())
    }

    /// Returns whether a settings file was actually removed.
    pub fn delete(&self) -> Result<bool> {
        if !self.path.is_file() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove settings file: {}", self.path.display()))?;
        log::info!("deleted settings file {}", self.path.display());
        Ok(true)
    }
}
