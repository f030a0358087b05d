use crate::error::StorageError;
use crate::id::UrlId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

type Result<T> = std::result::Result<T, StorageError>;

/// A stored URL record.
///
/// Records order lexicographically by original URL, then short URL, then
/// click count.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The URL that was shortened.
    pub original_url: String,
    /// The full short URL, derived from the identifier the record is stored under.
    pub short_url: String,
    /// Number of successful clicks.
    pub clicks: u64,
}

impl UrlRecord {
    /// Creates a record with no clicks.
    pub fn new(original_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_url: short_url.into(),
            clicks: 0,
        }
    }
}

/// A read-only view of a repository.
///
/// Reads never change any record, click counters included.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the record stored under `id`.
    /// Returns `None` if the identifier does not exist.
    async fn find(&self, id: UrlId) -> Result<Option<UrlRecord>>;

    /// Checks whether a record is stored under `id`.
    async fn contains(&self, id: UrlId) -> Result<bool>;

    /// Returns a point-in-time copy of every stored record, in no particular order.
    async fn snapshot(&self) -> Result<Vec<(UrlId, UrlRecord)>>;

    /// Number of stored records.
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores `record` under `id`, replacing any existing record.
    async fn insert(&self, id: UrlId, record: UrlRecord) -> Result<()>;

    /// Stores `record` under `id` only if the identifier is free.
    /// Returns `Err(Conflict)` and leaves the existing record untouched otherwise.
    async fn insert_new(&self, id: UrlId, record: UrlRecord) -> Result<()>;

    /// Atomically increments the click counter of the record under `id` and
    /// returns the record as it is right after that increment.
    ///
    /// Returns `None` without mutating anything if the identifier does not exist.
    async fn find_and_increment(&self, id: UrlId) -> Result<Option<UrlRecord>>;
}
