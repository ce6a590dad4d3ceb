//! Backend base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};
use crate::types::Nim;

/// Collection path segment of the REST backend.
const COLLECTION: &str = "mahasiswa";

/// A validated backend base URL.
///
/// Network URLs (`http://`, `https://`) point at the REST backend; every
/// endpoint is resolved relative to them. File URLs (`file:///path`) select
/// the filesystem-backed repository used for offline work and tests.
///
/// # Example
///
/// ```
/// use mahasiswa_core::{BaseUrl, Nim};
///
/// let base = BaseUrl::new("http://10.0.2.2:80/umyTI/").unwrap();
/// assert_eq!(base.collection_url().as_str(), "http://10.0.2.2/umyTI/mahasiswa");
///
/// let nim = Nim::new("2021001").unwrap();
/// assert_eq!(
///     base.record_url(&nim).as_str(),
///     "http://10.0.2.2/umyTI/mahasiswa/2021001"
/// );
///
/// let local = BaseUrl::new("file:///tmp/mahasiswa").unwrap();
/// assert!(local.is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or uses an unsupported scheme.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: drop a trailing slash on non-root paths
        let normalized = if url.path().len() > 1 && url.path().ends_with('/') {
            let mut u = url.clone();
            let path = u.path().trim_end_matches('/').to_string();
            u.set_path(&path);
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the URL of the record collection (`<base>/mahasiswa`).
    pub fn collection_url(&self) -> Url {
        self.endpoint(&[COLLECTION])
    }

    /// Returns the URL of a single record (`<base>/mahasiswa/<nim>`).
    ///
    /// The NIM is percent-encoded as one path segment.
    pub fn record_url(&self, nim: &Nim) -> Url {
        self.endpoint(&[COLLECTION, nim.as_str()])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        // Validated at construction: network and file URLs can be a base.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns true if this selects the filesystem-backed repository.
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    /// Returns true if this is a network backend (http:// or https:// URL).
    pub fn is_network(&self) -> bool {
        let scheme = self.0.scheme();
        scheme == "http" || scheme == "https"
    }

    /// Returns the filesystem path for file:// URLs.
    ///
    /// Returns `None` for non-file URLs.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.is_local() {
            self.0.to_file_path().ok()
        } else {
            None
        }
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        match url.scheme() {
            "file" => {
                if url.path().is_empty() || url.path() == "/" {
                    return Err(InvalidInputError::BaseUrl {
                        value: original.to_string(),
                        reason: "file:// URL must have a path".to_string(),
                    }
                    .into());
                }
                Ok(())
            }
            "http" | "https" => {
                if url.host_str().is_none() {
                    return Err(InvalidInputError::BaseUrl {
                        value: original.to_string(),
                        reason: "must have a host".to_string(),
                    }
                    .into());
                }
                Ok(())
            }
            other => Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }
            .into()),
        }
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
