//! Core client types.
//!
//! These types enforce their invariants at construction time, so an invalid
//! student ID or base URL never reaches a repository.

mod base_url;
mod nim;

pub use base_url::BaseUrl;
pub use nim::Nim;
