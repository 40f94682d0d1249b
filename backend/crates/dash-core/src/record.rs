//! Records held by an in-memory collection.
//!
//! Every resource collection (users, files, presets, shapes) stores values
//! implementing [`Record`]. The collection owns id assignment; a record only
//! knows how to build itself from a creation payload and how to merge an
//! update payload into its own fields.

/// Collection-assigned record identifier
pub type RecordId = i64;

pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in error messages (e.g., "User", "File")
    const ENTITY: &'static str;

    /// Payload accepted on create
    type Draft: Send;

    /// Payload accepted on update
    type Patch: Send;

    fn id(&self) -> RecordId;

    /// Build a new record from a creation payload and a freshly issued id
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Merge an update payload into this record. Must never change the id.
    fn apply_patch(&mut self, patch: Self::Patch);
}
