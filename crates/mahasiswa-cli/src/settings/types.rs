//! Settings types.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use mahasiswa_core::BaseUrl;

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost/umyTI/";

/// Settings as persisted in `settings.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Where the effective base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    CommandLine,
    Stored,
    Default,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingSource::CommandLine => write!(f, "command line or environment"),
            SettingSource::Stored => write!(f, "stored settings"),
            SettingSource::Default => write!(f, "default"),
        }
    }
}

/// Effective settings after resolution.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: BaseUrl,
    pub source: SettingSource,
    pub timeout: Option<Duration>,
}
