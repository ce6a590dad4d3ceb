//! Settings storage in the user's data directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::StoredSettings;

/// Get the settings file path.
pub fn settings_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "mahasiswa").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("settings.json"))
}

/// Save settings to disk.
pub fn save(settings: &StoredSettings) -> Result<()> {
    let path = settings_path()?;
    let json = serde_json::to_string_pretty(settings)?;

    fs::write(&path, json).context("Failed to write settings file")?;

    Ok(())
}

/// Load settings from disk, if any were saved.
pub fn load() -> Result<Option<StoredSettings>> {
    let path = settings_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read settings file")?;
    let settings = serde_json::from_str(&json).context("Invalid settings file")?;

    Ok(Some(settings))
}

/// Remove stored settings. Returns whether a file was removed.
pub fn clear() -> Result<bool> {
    let path = settings_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove settings file")?;

    Ok(true)
}
