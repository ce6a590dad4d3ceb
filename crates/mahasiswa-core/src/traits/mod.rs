//! Core traits for data access.

mod repository;

pub use repository::MahasiswaRepository;
