//! Backend settings: stored defaults plus command-line overrides.

pub mod storage;
mod types;

pub use types::{DEFAULT_BASE_URL, SettingSource, Settings, StoredSettings};

use std::time::Duration;

use anyhow::{Context, Result};

use mahasiswa_core::BaseUrl;

/// Resolve the effective settings.
///
/// The base URL comes from the `--base-url` flag or `MAHASISWA_BASE_URL`
/// first, then the stored settings file, then [`DEFAULT_BASE_URL`].
pub fn resolve(override_url: Option<&str>) -> Result<Settings> {
    let stored = storage::load()?.unwrap_or_default();
    resolve_with(override_url, stored)
}

pub(crate) fn resolve_with(override_url: Option<&str>, stored: StoredSettings) -> Result<Settings> {
    let (raw, source) = match (override_url, stored.base_url.as_deref()) {
        (Some(url), _) => (url.to_string(), SettingSource::CommandLine),
        (None, Some(url)) => (url.to_string(), SettingSource::Stored),
        (None, None) => (DEFAULT_BASE_URL.to_string(), SettingSource::Default),
    };

    let base_url = BaseUrl::new(&raw).with_context(|| format!("Invalid base URL ({})", source))?;

    Ok(Settings {
        base_url,
        source,
        timeout: stored.timeout_secs.map(Duration::from_secs),
    })
}
