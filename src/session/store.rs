//! Session record store with a visitor cap and idle expiry.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};

use super::cache::IdleMap;

/// In-memory [`SessionStore`] that forgets records after `idle` without a
/// request and holds at most `capacity` of them.
#[derive(Debug, Clone)]
pub struct VisitorSessionStore {
    records: Arc<IdleMap<Id, Record>>,
}

impl VisitorSessionStore {
    pub fn new(capacity: usize, idle: Duration) -> Self {
        Self {
            records: Arc::new(IdleMap::new(capacity, idle)),
        }
    }

    /// Drop idle records, returning how many went.
    pub fn cleanup_expired(&self) -> usize {
        self.records.cleanup_expired()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl SessionStore for VisitorSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while !self.records.try_insert(record.id, record.clone()) {
            record.id = Id::default();
        }
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.records.insert(record.id, record.clone());
        Ok(())
    }

    async fn load(&self, id: &Id) -> session_store::Result<Option<Record>> {
        let now = OffsetDateTime::now_utc();
        Ok(self
            .records
            .get(id)
            .filter(|record| record.expiry_date > now))
    }

    async fn delete(&self, id: &Id) -> session_store::Result<()> {
        self.records.remove(id);
        Ok(())
    }
}
