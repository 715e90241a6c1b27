use std::sync::RwLock;

use abook_types::{AddressDraft, AddressEntry, AddressId};
use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::traits::AddressStore;

/// In-memory, insertion-ordered address store.
///
/// Records live in a `Vec` behind a single `RwLock`, and the id counter
/// sits inside the same lock so the whole read-counter/construct/append
/// sequence is one critical section. Readers take the shared lock and
/// clone records out. The store is volatile: contents do not survive a
/// restart.
pub struct InMemoryAddressStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    entries: Vec<AddressEntry>,
    next_id: AddressId,
}

impl InMemoryAddressStore {
    /// Create a new empty store. The first record gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                entries: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").entries.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").entries.is_empty()
    }
}

impl Default for InMemoryAddressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressStore for InMemoryAddressStore {
    fn list(&self) -> Vec<AddressEntry> {
        self.inner.read().expect("lock poisoned").entries.clone()
    }

    fn create(&self, draft: &AddressDraft) -> AddressEntry {
        let mut inner = self.inner.write().expect("lock poisoned");
        let id = inner.next_id;
        inner.next_id += 1;
        let now = Utc::now();
        let entry = AddressEntry {
            id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone_number: draft.phone_number,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        inner.entries.push(entry.clone());
        tracing::debug!(id, "created address record");
        entry
    }

    fn find(&self, id: AddressId) -> StoreResult<AddressEntry> {
        self.inner
            .read()
            .expect("lock poisoned")
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: AddressId, draft: &AddressDraft) -> StoreResult<AddressEntry> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let entry = inner
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(StoreError::NotFound(id))?;
        entry.first_name = draft.first_name.clone();
        entry.last_name = draft.last_name.clone();
        entry.email = draft.email.clone();
        entry.phone_number = draft.phone_number;
        entry.updated_at = Utc::now();
        let updated = entry.clone();
        tracing::debug!(id, "updated address record");
        Ok(updated)
    }

    fn delete(&self, id: AddressId) -> StoreResult<()> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let index = inner
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let deleted_at = Utc::now();
        let mut removed = inner.entries.remove(index);
        removed.deleted_at = Some(deleted_at);
        // The record is dropped, not tombstoned; the audit trail is the log line.
        tracing::debug!(id = removed.id, %deleted_at, "deleted address record");
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryAddressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAddressStore")
            .field("record_count", &self.len())
            .finish()
    }
}
