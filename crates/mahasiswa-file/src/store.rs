//! Filesystem storage for the file-backed repository.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument};

use mahasiswa_core::Result;
use mahasiswa_core::error::{Error, ProtocolError, ValidationError};
use mahasiswa_core::repo::Mahasiswa;
use mahasiswa_core::types::Nim;

/// One JSON file per record under `<root>/mahasiswa/`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

/// Exclusive lock held for the duration of a mutation.
struct StoreLock(File);

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.0.unlock();
    }
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the records directory.
    fn records_dir(&self) -> PathBuf {
        self.root.join("mahasiswa")
    }

    /// Get the lock file path.
    fn lock_path(&self) -> PathBuf {
        self.root.join("mahasiswa.lock")
    }

    /// Convert a NIM into a filesystem-safe file stem.
    fn file_stem(nim: &Nim) -> String {
        let mut out = String::with_capacity(nim.as_str().len());
        for b in nim.as_str().bytes() {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.' {
                out.push(b as char);
            } else {
                out.push_str(&format!("%{:02X}", b));
            }
        }
        out
    }

    /// Get the path for a specific record.
    fn record_path(&self, nim: &Nim) -> PathBuf {
        self.records_dir()
            .join(format!("{}.json", Self::file_stem(nim)))
    }

    fn lock(&self) -> Result<StoreLock> {
        fs::create_dir_all(&self.root)?;

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;

        file.lock_exclusive()?;
        Ok(StoreLock(file))
    }

    fn read_record(path: &Path) -> Result<Mahasiswa> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            Error::Protocol(ProtocolError::malformed(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })
    }

    fn write_record(&self, record: &Mahasiswa) -> Result<()> {
        let path = self.record_path(&record.nim);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(record)
            .map_err(|e| Error::Protocol(ProtocolError::from(e)))?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// All records, sorted by NIM.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<Mahasiswa>> {
        let dir = self.records_dir();

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                records.push(Self::read_record(&path)?);
            }
        }

        records.sort_by(|a, b| a.nim.cmp(&b.nim));
        Ok(records)
    }

    #[instrument(skip(self))]
    pub fn get(&self, nim: &Nim) -> Result<Mahasiswa> {
        let path = self.record_path(nim);

        if !path.exists() {
            return Err(Error::not_found(nim));
        }

        Self::read_record(&path)
    }

    #[instrument(skip(self, record), fields(nim = %record.nim))]
    pub fn create(&self, record: &Mahasiswa) -> Result<()> {
        let _lock = self.lock()?;

        if self.record_path(&record.nim).exists() {
            return Err(ValidationError::new(
                None,
                Some(format!("nim {} already exists", record.nim)),
            )
            .into());
        }

        self.write_record(record)?;
        debug!("Created record");
        Ok(())
    }

    #[instrument(skip(self, record))]
    pub fn update(&self, nim: &Nim, record: &Mahasiswa) -> Result<()> {
        if &record.nim != nim {
            return Err(ValidationError::new(
                None,
                Some(format!(
                    "nim in body ({}) does not match target ({})",
                    record.nim, nim
                )),
            )
            .into());
        }

        let _lock = self.lock()?;

        if !self.record_path(nim).exists() {
            return Err(Error::not_found(nim));
        }

        self.write_record(record)?;
        debug!("Updated record");
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn delete(&self, nim: &Nim) -> Result<()> {
        let _lock = self.lock()?;
        let path = self.record_path(nim);

        if !path.exists() {
            return Err(Error::not_found(nim));
        }

        fs::remove_file(&path)?;
        debug!("Deleted record");
        Ok(())
    }
}
