//! Form draft: the edit buffer behind the insert and update screens.

use serde::{Deserialize, Serialize};

use mahasiswa_core::{Mahasiswa, Nim, Result};

/// Unvalidated form input for one record.
///
/// Every field is raw text as typed. Nothing is checked until the draft is
/// turned into a [`Mahasiswa`] on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MahasiswaDraft {
    pub nim: String,
    pub name: String,
    pub address: String,
    pub gender: String,
    pub class: String,
    pub year: String,
}

impl MahasiswaDraft {
    /// Build the record to submit.
    ///
    /// # Errors
    ///
    /// Returns an input error if the NIM field is not a valid NIM.
    pub fn to_record(&self) -> Result<Mahasiswa> {
        Ok(Mahasiswa {
            nim: Nim::new(&self.nim)?,
            name: self.name.clone(),
            address: self.address.clone(),
            gender: self.gender.clone(),
            class: self.class.clone(),
            year: self.year.clone(),
        })
    }
}

impl From<&Mahasiswa> for MahasiswaDraft {
    fn from(record: &Mahasiswa) -> Self {
        Self {
            nim: record.nim.to_string(),
            name: record.name.clone(),
            address: record.address.clone(),
            gender: record.gender.clone(),
            class: record.class.clone(),
            year: record.year.clone(),
        }
    }
}

impl From<Mahasiswa> for MahasiswaDraft {
    fn from(record: Mahasiswa) -> Self {
        Self {
            nim: record.nim.into(),
            name: record.name,
            address: record.address,
            gender: record.gender,
            class: record.class,
            year: record.year,
        }
    }
}
