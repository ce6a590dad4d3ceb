//! Student ID (NIM) type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated student identification number.
///
/// The NIM is the sole lookup, update and delete key for a record. Only basic
/// shape is checked here; uniqueness is the backend's business.
///
/// [`Nim::new`] validates client-side input. Values deserialized from a
/// backend response are kept verbatim, so a record is always addressed by
/// exactly the key the backend served.
///
/// # Example
///
/// ```
/// use mahasiswa_core::Nim;
///
/// let nim = Nim::new(" 2021001 ").unwrap();
/// assert_eq!(nim.as_str(), "2021001");
/// assert!(Nim::new("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct Nim(String);

impl Nim {
    /// Create a new NIM, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or contains control characters.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(InvalidInputError::Nim {
                value: raw.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if trimmed.chars().any(char::is_control) {
            return Err(InvalidInputError::Nim {
                value: raw.to_string(),
                reason: "must not contain control characters".to_string(),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the NIM as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Nim {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Nim {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Nim> for String {
    fn from(nim: Nim) -> Self {
        nim.0
    }
}

impl<'de> Deserialize<'de> for Nim {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

impl AsRef<str> for Nim {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
