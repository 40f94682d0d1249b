//! Generic in-memory record collection.
//!
//! A collection is an insertion-ordered list of records plus the counter that
//! issues their ids. Both live behind one lock so that id assignment and
//! read-modify-write updates cannot interleave.
//!
//! ## Id counter
//!
//! `next_id` only ever increases. Deleting a record leaves a gap; the deleted
//! id is never handed out again.

use crate::{Result as StoreErrorResult, StoreError};

use dash_core::{Record, RecordId};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use tokio::sync::RwLock;

pub struct Collection<T: Record> {
    inner: RwLock<CollectionInner<T>>,
}

struct CollectionInner<T> {
    records: Vec<T>,
    next_id: RecordId,
}

impl<T: Record> CollectionInner<T> {
    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn issue_id(&mut self) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    /// Empty collection issuing ids from 1
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Collection pre-populated with fixture records. The counter starts one
    /// past the highest seeded id.
    pub fn seeded(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Record::id).max().map_or(1, |max| max + 1);

        Self {
            inner: RwLock::new(CollectionInner { records, next_id }),
        }
    }

    /// All records in insertion order
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.records.clone()
    }

    /// All records mapped through `f`, in insertion order
    pub async fn list_as<V>(&self, f: impl Fn(&T) -> V) -> Vec<V> {
        self.inner.read().await.records.iter().map(f).collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }

    #[track_caller]
    pub fn get(&self, id: RecordId) -> impl Future<Output = StoreErrorResult<T>> + Send + '_ {
        let location = ErrorLocation::from(Location::caller());
        async move {
            let inner = self.inner.read().await;
            inner
                .records
                .iter()
                .find(|r| r.id() == id)
                .cloned()
                .ok_or(StoreError::NotFound {
                    entity: T::ENTITY,
                    id,
                    location,
                })
        }
    }

    /// Append a new record built from `draft` with a freshly issued id
    pub async fn create(&self, draft: T::Draft) -> T {
        let mut inner = self.inner.write().await;
        let id = inner.issue_id();
        let record = T::from_draft(id, draft);
        inner.records.push(record.clone());
        debug!("{} {} created ({} total)", T::ENTITY, id, inner.records.len());
        record
    }

    /// Append every draft in order, each with its own fresh id. Existing
    /// records are left untouched. Returns the whole collection as it stands
    /// right after the append, taken under the same write guard.
    pub async fn create_many(&self, drafts: Vec<T::Draft>) -> Vec<T> {
        let mut inner = self.inner.write().await;
        let count = drafts.len();

        for draft in drafts {
            let id = inner.issue_id();
            inner.records.push(T::from_draft(id, draft));
        }

        debug!(
            "{} x{} created ({} total)",
            T::ENTITY,
            count,
            inner.records.len()
        );
        inner.records.clone()
    }

    /// Merge `patch` into the record with `id`
    #[track_caller]
    pub fn update(
        &self,
        id: RecordId,
        patch: T::Patch,
    ) -> impl Future<Output = StoreErrorResult<T>> + Send + '_ {
        let location = ErrorLocation::from(Location::caller());
        async move {
            let mut inner = self.inner.write().await;
            let index = inner.position(id).ok_or(StoreError::NotFound {
                entity: T::ENTITY,
                id,
                location,
            })?;

            let record = &mut inner.records[index];
            record.apply_patch(patch);
            debug_assert_eq!(record.id(), id);

            Ok(record.clone())
        }
    }

    /// Remove the record with `id`. The id is not reused.
    #[track_caller]
    pub fn delete(&self, id: RecordId) -> impl Future<Output = StoreErrorResult<()>> + Send + '_ {
        let location = ErrorLocation::from(Location::caller());
        async move {
            let mut inner = self.inner.write().await;
            let index = inner.position(id).ok_or(StoreError::NotFound {
                entity: T::ENTITY,
                id,
                location,
            })?;

            inner.records.remove(index);
            debug!("{} {} deleted ({} left)", T::ENTITY, id, inner.records.len());
            Ok(())
        }
    }
}
