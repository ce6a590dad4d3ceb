//! Record types exchanged with the backend.
//!
//! The operations on these types are methods on
//! [`MahasiswaRepository`](crate::MahasiswaRepository).

mod types;

pub use types::Mahasiswa;
