use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const APPLICATION_LIBRARIES_FILE: &str = "applicationLibraries.xml";

/// JetBrains per-user settings folder, e.g. `%APPDATA%\JetBrains` on Windows.
pub fn jetbrains_settings_root() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
    Ok(base.join("JetBrains"))
}

pub fn discover_application_libraries() -> Result<PathBuf> {
    let root = jetbrains_settings_root()?;
    let ide_dir = latest_modified_dir(&root)?;
    let path = ide_dir.join("options").join(APPLICATION_LIBRARIES_FILE);
    log::info!("discovered IDE library table at {}", path.display());
    Ok(path)
}

pub fn latest_modified_dir(dir: &Path) -> Result<PathBuf> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("IDE settings folder not found: {}", dir.display()))?;

    let candidates = entries.filter_map(|entry| {
        let entry = entry.ok()?;
        let meta = std::fs::metadata(entry.path()).ok()?;
        if !meta.is_dir() {
            return None;
        }
        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        Some((entry.path(), modified))
    });

    pick_latest(candidates)
        .with_context(|| format!("No IDE version folder found in {}", dir.display()))
}

/// Ties keep the first candidate seen.
pub fn pick_latest<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = (PathBuf, SystemTime)>,
{
    let mut best: Option<(PathBuf, SystemTime)> = None;
    for (path, modified) in candidates {
        if best.as_ref().is_none_or(|(_, best_time)| modified > *best_time) {
            best = Some((path, modified));
        }
    }
    best.map(|(path, _)| path)
}
