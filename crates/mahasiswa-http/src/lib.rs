//! mahasiswa-http - REST-backed repository implementation.

mod client;
mod config;
mod repository;

pub use client::RestClient;
pub use config::ClientConfig;
pub use repository::HttpRepository;
