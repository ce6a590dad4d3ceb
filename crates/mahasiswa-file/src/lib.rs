//! mahasiswa-file - Filesystem-backed repository implementation.

mod repository;
mod store;

pub use repository::FileRepository;
pub use store::FileStore;
