//! In-memory table backend.
//!
//! Documents live in a `HashMap` behind a `parking_lot::RwLock`; equality
//! indexes are maintained eagerly on every write. Writers take the write
//! lock, so per-document serialization falls out of the locking.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::{Document, StoreError, Table};

/// In-memory [`Table`] with a fixed set of equality indexes.
pub struct MemTable<D: Document> {
    inner: RwLock<Inner<D>>,
}

struct Inner<D> {
    docs: HashMap<Uuid, D>,
    indexes: HashMap<&'static str, HashMap<String, BTreeSet<Uuid>>>,
}

impl<D: Document> MemTable<D> {
    /// Create a table with the given index names.
    ///
    /// Queries against a name not listed here fail with
    /// [`StoreError::UnknownIndex`]; index entries a document reports for an
    /// undeclared name are ignored.
    pub fn new(indexes: &[&'static str]) -> Self {
        let indexes = indexes.iter().map(|name| (*name, HashMap::new())).collect();
        Self {
            inner: RwLock::new(Inner {
                docs: HashMap::new(),
                indexes,
            }),
        }
    }

    fn index_doc(inner: &mut Inner<D>, doc: &D) {
        for (name, key) in doc.index_entries() {
            if let Some(buckets) = inner.indexes.get_mut(name) {
                buckets.entry(key).or_default().insert(doc.id());
            }
        }
    }

    fn unindex_doc(inner: &mut Inner<D>, doc: &D) {
        for (name, key) in doc.index_entries() {
            if let Some(buckets) = inner.indexes.get_mut(name) {
                if let Some(ids) = buckets.get_mut(&key) {
                    ids.remove(&doc.id());
                    if ids.is_empty() {
                        buckets.remove(&key);
                    }
                }
            }
        }
    }
}

impl<D: Document> Default for MemTable<D> {
    fn default() -> Self {
        Self::new(&[])
    }
}

#[async_trait]
impl<D: Document> Table<D> for MemTable<D> {
    async fn insert(&self, doc: D) -> Result<Uuid, StoreError> {
        let mut inner = self.inner.write();
        let id = doc.id();
        // Re-inserting an id replaces the document; drop its old entries.
        if let Some(old) = inner.docs.remove(&id) {
            Self::unindex_doc(&mut inner, &old);
        }
        Self::index_doc(&mut inner, &doc);
        inner.docs.insert(id, doc);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Option<D>, StoreError> {
        Ok(self.inner.read().docs.get(&id).cloned())
    }

    async fn patch(&self, id: Uuid, patch: D::Patch) -> Result<D, StoreError> {
        let mut inner = self.inner.write();
        let mut doc = inner
            .docs
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))?;
        Self::unindex_doc(&mut inner, &doc);
        doc.apply_patch(patch);
        Self::index_doc(&mut inner, &doc);
        inner.docs.insert(id, doc.clone());
        Ok(doc)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let doc = inner
            .docs
            .remove(&id)
            .ok_or_else(|| StoreError::not_found(id))?;
        Self::unindex_doc(&mut inner, &doc);
        Ok(())
    }

    async fn query_all(&self) -> Result<Vec<D>, StoreError> {
        Ok(self.inner.read().docs.values().cloned().collect())
    }

    async fn query_by_index(&self, index: &str, key: &str) -> Result<Vec<D>, StoreError> {
        let inner = self.inner.read();
        let buckets = inner
            .indexes
            .get(index)
            .ok_or_else(|| StoreError::unknown_index(index))?;
        let Some(ids) = buckets.get(key) else {
            return Ok(Vec::new());
        };
        Ok(ids
            .iter()
            .filter_map(|id| inner.docs.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: Uuid,
        author: String,
        label: String,
    }

    #[derive(Default)]
    struct NotePatch {
        author: Option<String>,
        label: Option<String>,
    }

    impl Document for Note {
        type Patch = NotePatch;

        fn id(&self) -> Uuid {
            self.id
        }

        fn apply_patch(&mut self, patch: NotePatch) {
            if let Some(author) = patch.author {
                self.author = author;
            }
            if let Some(label) = patch.label {
                self.label = label;
            }
        }

        fn index_entries(&self) -> Vec<(&'static str, String)> {
            vec![
                ("by_author", self.author.clone()),
                ("by_label", self.label.clone()),
            ]
        }
    }

    fn table() -> MemTable<Note> {
        MemTable::new(&["by_author", "by_label"])
    }

    fn note(author: &str, label: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            author: author.to_string(),
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_and_get_round_trip() {
        let t = table();
        let n = note("ada", "draft");
        let id = t.insert(n.clone()).await.unwrap();
        assert_eq!(id, n.id);
        assert_eq!(t.get(id).await.unwrap(), Some(n));
        assert_eq!(t.get(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn patch_updates_only_supplied_fields_and_reindexes() {
        let t = table();
        let n = note("ada", "draft");
        t.insert(n.clone()).await.unwrap();

        let updated = t
            .patch(
                n.id,
                NotePatch {
                    label: Some("final".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.author, "ada");
        assert_eq!(updated.label, "final");

        let by_old = t.query_by_index("by_label", "draft").await.unwrap();
        assert!(by_old.is_empty());
        let by_new = t.query_by_index("by_label", "final").await.unwrap();
        assert_eq!(by_new.len(), 1);
    }

    #[tokio::test]
    async fn patch_unknown_id_fails_not_found() {
        let t = table();
        let err = t.patch(Uuid::new_v4(), NotePatch::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_document_and_index_entries() {
        let t = table();
        let n = note("ada", "draft");
        t.insert(n.clone()).await.unwrap();
        t.delete(n.id).await.unwrap();

        assert_eq!(t.get(n.id).await.unwrap(), None);
        assert!(t.query_by_index("by_author", "ada").await.unwrap().is_empty());
        assert!(matches!(
            t.delete(n.id).await.unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn query_by_index_groups_by_key() {
        let t = table();
        t.insert(note("ada", "draft")).await.unwrap();
        t.insert(note("ada", "final")).await.unwrap();
        t.insert(note("grace", "draft")).await.unwrap();

        assert_eq!(t.query_by_index("by_author", "ada").await.unwrap().len(), 2);
        assert_eq!(t.query_by_index("by_label", "draft").await.unwrap().len(), 2);
        assert!(t.query_by_index("by_author", "kay").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn query_unknown_index_is_an_error() {
        let t = table();
        let err = t.query_by_index("by_title", "x").await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownIndex { .. }));
    }

    #[tokio::test]
    async fn query_all_returns_every_document() {
        let t = table();
        for i in 0..5 {
            t.insert(note("ada", &format!("l{i}"))).await.unwrap();
        }
        assert_eq!(t.query_all().await.unwrap().len(), 5);
    }
}
