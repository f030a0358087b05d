//! Storage backends for MicroUrl records.

pub mod memory;

pub use memory::InMemoryRepository;
pub use microurl_core::{ReadRepository, Repository, StorageError, UrlRecord};
