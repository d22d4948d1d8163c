use async_trait::async_trait;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use jiff::Timestamp;
use minilink_core::repository::Result;
use minilink_core::{NewUrl, ReadRepository, Repository, ShortCode, StorageError, UrlRecord};

/// In-memory storage entry for a URL mapping.
///
/// The short code itself is the map key, so it is not duplicated here.
#[derive(Debug, Clone)]
struct Entry {
    original_url: String,
    short_url: String,
    clicks: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Entry {
    fn into_record(self, code: &str) -> UrlRecord {
        UrlRecord {
            original_url: self.original_url,
            short_code: ShortCode::new_unchecked(code),
            short_url: self.short_url,
            clicks: self.clicks,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// In-memory implementation of the [`Repository`] trait using DashMap.
///
/// DashMap provides better concurrency than `RwLock<HashMap>` because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. The short-code uniqueness constraint is
/// enforced through an atomic entry-based check-and-insert.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, Entry>,
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

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| entry.clone().into_record(code.as_str())))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.storage.contains_key(code.as_str()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, new: NewUrl) -> Result<UrlRecord> {
        let now = Timestamp::now();
        let entry = Entry {
            original_url: new.original_url,
            short_url: new.short_url,
            clicks: 0,
            created_at: now,
            updated_at: now,
        };

        // Entry-based check-and-insert keeps the uniqueness constraint
        // atomic under concurrent writers to the same code.
        match self.storage.entry(new.short_code.as_str().to_owned()) {
            MapEntry::Occupied(_) => Err(StorageError::Conflict(new.short_code.to_string())),
            MapEntry::Vacant(slot) => {
                let record = entry.clone().into_record(new.short_code.as_str());
                slot.insert(entry);
                Ok(record)
            }
        }
    }

    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlRecord>> {
        Ok(self
            .storage
            .iter()
            .find(|entry| entry.value().original_url == url)
            .map(|entry| entry.value().clone().into_record(entry.key())))
    }

    async fn increment_clicks(&self, code: &ShortCode) -> Result<()> {
        if let Some(mut entry) = self.storage.get_mut(code.as_str()) {
            entry.clicks += 1;
            entry.updated_at = Timestamp::now();
        }
        Ok(())
    }
}
