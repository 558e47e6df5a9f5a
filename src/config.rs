use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

pub const HOME_ENV: &str = "ECLIPSE_TO_INTELLIJ_HOME";
pub const SETTINGS_FILE: &str = "settings.json";
pub const REPORT_FILE: &str = "report.log";

pub fn resolve_settings_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(p) = cli.settings.clone() {
        return Ok(p);
    }
    Ok(app_home()?.join(SETTINGS_FILE))
}

pub fn resolve_report_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(p) = cli.report.clone() {
        return Ok(p);
    }
    Ok(app_home()?.join(REPORT_FILE))
}

pub fn working_dir() -> Result<PathBuf> {
    env::current_dir().context("Failed to resolve current directory")
}

fn app_home() -> Result<PathBuf> {
    if let Ok(p) = env::var(HOME_ENV)
        && !p.trim().is_empty()
    {
        return Ok(PathBuf::from(p));
    }

    let base = dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow::anyhow!("Failed to resolve data directory"))?;
    Ok(base.join("eclipse-to-intellij"))
}
