//! Repository trait.

use async_trait::async_trait;

use crate::Result;
use crate::repo::Mahasiswa;
use crate::types::Nim;

/// CRUD access to student records.
///
/// Each call is exactly one round trip to the backend. Implementations do not
/// retry, cache, or keep state between calls, so they are safe to share
/// across tasks behind an `Arc`.
#[async_trait]
pub trait MahasiswaRepository: Send + Sync {
    /// Fetch all records, in the order the backend returns them.
    async fn list_records(&self) -> Result<Vec<Mahasiswa>>;

    /// Fetch one record by student ID.
    async fn get_record(&self, nim: &Nim) -> Result<Mahasiswa>;

    /// Submit a new record.
    async fn create_record(&self, record: &Mahasiswa) -> Result<()>;

    /// Replace the fields of an existing record.
    async fn update_record(&self, nim: &Nim, record: &Mahasiswa) -> Result<()>;

    /// Remove a record.
    async fn delete_record(&self, nim: &Nim) -> Result<()>;
}
