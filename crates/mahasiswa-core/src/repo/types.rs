//! Student record type.

use serde::{Deserialize, Serialize};

use crate::types::Nim;

/// A student record.
///
/// Field names follow the backend's JSON keys through serde renames.
/// Unknown keys in a response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mahasiswa {
    /// Student ID; the only lookup, update and delete key.
    pub nim: Nim,

    /// Full name.
    #[serde(rename = "nama")]
    pub name: String,

    /// Home address.
    #[serde(rename = "alamat")]
    pub address: String,

    /// Gender, as free text.
    #[serde(rename = "jenisKelamin")]
    pub gender: String,

    /// Class or section.
    #[serde(rename = "kelas")]
    pub class: String,

    /// Enrollment year, as the backend sends it.
    #[serde(rename = "angkatan")]
    pub year: String,
}
