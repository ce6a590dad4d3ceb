//! File-backed repository implementation.

use async_trait::async_trait;
use tracing::debug;

use mahasiswa_core::error::{Error, InvalidInputError};
use mahasiswa_core::repo::Mahasiswa;
use mahasiswa_core::traits::MahasiswaRepository;
use mahasiswa_core::types::{BaseUrl, Nim};
use mahasiswa_core::Result;

use crate::store::FileStore;

/// Filesystem-backed repository, selected by a `file://` base URL.
///
/// Mirrors the REST backend's semantics (duplicate NIM on create is a
/// validation failure, unknown NIM is not-found) so the view models behave
/// the same against either backend.
#[derive(Debug, Clone)]
pub struct FileRepository {
    store: FileStore,
}

impl FileRepository {
    /// Create a repository rooted at the directory a `file://` URL names.
    pub fn new(url: BaseUrl) -> Result<Self> {
        let root = url.to_file_path().ok_or_else(|| {
            Error::InvalidInput(InvalidInputError::BaseUrl {
                value: url.to_string(),
                reason: "file repository needs a file:// URL".to_string(),
            })
        })?;

        Ok(Self {
            store: FileStore::new(root),
        })
    }
}

#[async_trait]
impl MahasiswaRepository for FileRepository {
    async fn list_records(&self) -> Result<Vec<Mahasiswa>> {
        debug!(root = %self.store.root().display(), "Listing mahasiswa from file store");
        self.store.list()
    }

    async fn get_record(&self, nim: &Nim) -> Result<Mahasiswa> {
        self.store.get(nim)
    }

    async fn create_record(&self, record: &Mahasiswa) -> Result<()> {
        self.store.create(record)
    }

    async fn update_record(&self, nim: &Nim, record: &Mahasiswa) -> Result<()> {
        self.store.update(nim, record)
    }

    async fn delete_record(&self, nim: &Nim) -> Result<()> {
        self.store.delete(nim)
    }
}
