use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use microurl_core::{ReadRepository, Repository, StorageError, UrlId, UrlRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

type Result<T> = std::result::Result<T, StorageError>;

/// In-memory storage slot for a URL record.
///
/// The click counter is atomic so it can be bumped under a shard read lock.
#[derive(Debug)]
struct Slot {
    original_url: String,
    short_url: String,
    clicks: AtomicU64,
}

impl Slot {
    fn from_record(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_url,
            clicks: AtomicU64::new(record.clicks),
        }
    }

    fn to_record(&self, clicks: u64) -> UrlRecord {
        UrlRecord {
            original_url: self.original_url.clone(),
            short_url: self.short_url.clone(),
            clicks,
        }
    }

    fn read(&self) -> UrlRecord {
        self.to_record(self.clicks.load(Ordering::SeqCst))
    }

    /// Counts one click. The counter saturates at `u64::MAX` instead of wrapping.
    fn click(&self) -> UrlRecord {
        let previous = self
            .clicks
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_add(1)))
            .unwrap_or_else(|current| current);
        self.to_record(previous.saturating_add(1))
    }
}

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap shards its locks, so operations on identifiers in different
/// shards never block each other. Every operation holds a shard lock only
/// for the duration of a single map access.
///
/// Clicks are counted while holding the shard's read lock. Replacing a
/// record needs the write lock on the same shard, so an increment can never
/// be lost to, or land on, a record inserted concurrently under the same id.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<UrlId, Slot>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// The single key lookup behind both reads and click increments.
    fn with_slot<T>(&self, id: UrlId, access: impl FnOnce(&Slot) -> T) -> Option<T> {
        let slot = self.storage.get(&id);
        if slot.is_none() {
            trace!(id = %id, "identifier not stored");
        }
        slot.map(|slot| access(slot.value()))
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find(&self, id: UrlId) -> Result<Option<UrlRecord>> {
        Ok(self.with_slot(id, Slot::read))
    }

    async fn contains(&self, id: UrlId) -> Result<bool> {
        Ok(self.storage.contains_key(&id))
    }

    async fn snapshot(&self) -> Result<Vec<(UrlId, UrlRecord)>> {
        Ok(self
            .storage
            .iter()
            .map(|entry| (*entry.key(), entry.value().read()))
            .collect())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.storage.len())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, id: UrlId, record: UrlRecord) -> Result<()> {
        self.storage.insert(id, Slot::from_record(record));
        Ok(())
    }

    async fn insert_new(&self, id: UrlId, record: UrlRecord) -> Result<()> {
        match self.storage.entry(id) {
            Entry::Occupied(_) => Err(StorageError::Conflict(id)),
            Entry::Vacant(vacant) => {
                vacant.insert(Slot::from_record(record));
                Ok(())
            }
        }
    }

    async fn find_and_increment(&self, id: UrlId) -> Result<Option<UrlRecord>> {
        Ok(self.with_slot(id, Slot::click))
    }
}
