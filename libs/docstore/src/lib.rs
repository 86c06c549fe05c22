//! Typed document-table abstraction.
//!
//! A [`Table`] stores documents of one kind, keyed by an opaque `Uuid`, with
//! equality lookups over a fixed set of named indexes. Backends are expected
//! to serialize writers per document (last-write-wins at patch granularity);
//! reads are not isolated from concurrent writes.
//!
//! The crate ships one backend, [`memory::MemTable`], used by tests and by
//! embedders that do not need durability.

pub mod memory;

mod errors;
pub use errors::StoreError;

use async_trait::async_trait;
use uuid::Uuid;

/// A document that can live in a [`Table`].
///
/// `Patch` is the partial-update type for the document: one `Option` per
/// mutable field, where `None` leaves the stored value unchanged. Absent
/// fields are therefore dropped before the write, never overwritten.
pub trait Document: Clone + Send + Sync + 'static {
    type Patch: Send;

    fn id(&self) -> Uuid;

    /// Merge a patch into this document, field by field.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// `(index name, key)` pairs this document currently contributes to.
    /// Must be recomputed after every patch so backends can re-index.
    fn index_entries(&self) -> Vec<(&'static str, String)>;
}

/// One document table: insert / get / patch / delete plus indexed queries.
///
/// Object-safe so services can hold `Arc<dyn Table<D>>` and swap backends.
#[async_trait]
pub trait Table<D: Document>: Send + Sync {
    /// Insert a fully-formed document. The caller assigns the id.
    async fn insert(&self, doc: D) -> Result<Uuid, StoreError>;

    /// Load by id; `Ok(None)` when the id does not resolve.
    async fn get(&self, id: Uuid) -> Result<Option<D>, StoreError>;

    /// Apply a partial update in one atomic call and return the updated
    /// document. Fails with [`StoreError::NotFound`] for unknown ids.
    async fn patch(&self, id: Uuid, patch: D::Patch) -> Result<D, StoreError>;

    /// Hard delete. Fails with [`StoreError::NotFound`] for unknown ids.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Every document in the table, in no particular order.
    async fn query_all(&self) -> Result<Vec<D>, StoreError>;

    /// Documents whose `index` key equals `key`, in no particular order.
    async fn query_by_index(&self, index: &str, key: &str) -> Result<Vec<D>, StoreError>;
}
