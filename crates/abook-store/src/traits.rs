use abook_types::{AddressDraft, AddressEntry, AddressId};

use crate::error::StoreResult;

/// Owning collection of address records.
///
/// All implementations must satisfy these invariants:
/// - Every `id` in the store is unique at all times.
/// - An `id` is assigned exactly once, at creation, and never reused:
///   deleting the highest-numbered record must not allow its id to be
///   handed out again.
/// - Records are kept in insertion order and `list` reflects it.
/// - Mutations are serialized against each other; a reader never
///   observes a partially mutated sequence.
/// - The store performs no field validation. Callers are responsible
///   for running the validator before `create` or `update`.
pub trait AddressStore: Send + Sync {
    /// Snapshot of all records in insertion order. Never fails.
    fn list(&self) -> Vec<AddressEntry>;

    /// Assign the next id, stamp the creation timestamps, append the
    /// record, and return the stored copy.
    fn create(&self, draft: &AddressDraft) -> AddressEntry;

    /// Look up the record with this id.
    ///
    /// Returns `Err(StoreError::NotFound)` if no record matches.
    fn find(&self, id: AddressId) -> StoreResult<AddressEntry>;

    /// Overwrite the caller-supplied fields of the record with this id
    /// and refresh its `updated_at`. The id itself never changes.
    fn update(&self, id: AddressId, draft: &AddressDraft) -> StoreResult<AddressEntry>;

    /// Remove the record with this id from the sequence.
    fn delete(&self, id: AddressId) -> StoreResult<()>;
}
