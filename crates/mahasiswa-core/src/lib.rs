//! mahasiswa-core - Core types and the repository contract.

pub mod error;
pub mod repo;
pub mod traits;
pub mod types;

pub use error::Error;
pub use repo::Mahasiswa;
pub use traits::MahasiswaRepository;
pub use types::{BaseUrl, Nim};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
