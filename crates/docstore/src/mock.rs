//! Mock Document Store Implementation
//!
//! In-memory collections with sequential ids (`doc-1`, `doc-2`, ...) and
//! programmable failures, shared via `Arc` so tests can flip behavior after
//! handing the store to its consumer.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{DocStoreError, Document, DocumentStore, SortDirection};

/// Failure switches and latency for the mock store
#[derive(Debug, Default)]
pub struct MockDocStoreBehavior {
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub fail_deletes: AtomicBool,
    pub delay_ms: AtomicU64,
}

impl MockDocStoreBehavior {
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, AtomicOrdering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, AtomicOrdering::SeqCst);
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, AtomicOrdering::SeqCst);
    }

    /// Artificial latency applied to every call
    pub fn set_delay_ms(&self, delay: u64) {
        self.delay_ms.store(delay, AtomicOrdering::SeqCst);
    }

    pub fn reset(&self) {
        self.set_fail_reads(false);
        self.set_fail_writes(false);
        self.set_fail_deletes(false);
        self.set_delay_ms(0);
    }
}

/// Mock document store for tests and local development
#[derive(Debug, Clone, Default)]
pub struct MockDocumentStore {
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
    next_id: Arc<AtomicU64>,
    behavior: Arc<MockDocStoreBehavior>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared behavior handle for configuring failures
    pub fn behavior(&self) -> &Arc<MockDocStoreBehavior> {
        &self.behavior
    }

    /// Snapshot of a collection in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    async fn simulate_latency(&self) {
        let delay = self.behavior.delay_ms.load(AtomicOrdering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<Document>>>, DocStoreError> {
        self.collections
            .lock()
            .map_err(|e| DocStoreError::Request(format!("collections lock poisoned: {e}")))
    }
}

/// Orders numbers numerically and strings lexically; documents missing the
/// field sort after those that have it.
fn compare_field(a: &Document, b: &Document, field: &str) -> Ordering {
    match (a.data.get(field), b.data.get(field)) {
        (Some(x), Some(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => x
                .as_str()
                .unwrap_or_default()
                .cmp(y.as_str().unwrap_or_default()),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait::async_trait]
impl DocumentStore for MockDocumentStore {
    async fn insert(
        &self,
        collection: &str,
        data: serde_json::Value,
    ) -> Result<String, DocStoreError> {
        self.simulate_latency().await;
        if self.behavior.fail_writes.load(AtomicOrdering::SeqCst) {
            return Err(DocStoreError::Request("mock write failure".to_string()));
        }
        if !data.is_object() {
            return Err(DocStoreError::Decode(
                "document body must be an object".to_string(),
            ));
        }

        let id = format!("doc-{}", self.next_id.fetch_add(1, AtomicOrdering::SeqCst) + 1);
        tracing::debug!(collection, id = %id, "Mock document store: inserting document");
        self.lock()?
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                data,
            });
        Ok(id)
    }

    async fn list_ordered(
        &self,
        collection: &str,
        field: &str,
        direction: SortDirection,
    ) -> Result<Vec<Document>, DocStoreError> {
        self.simulate_latency().await;
        if self.behavior.fail_reads.load(AtomicOrdering::SeqCst) {
            return Err(DocStoreError::Request("mock read failure".to_string()));
        }

        let mut documents = self.lock()?.get(collection).cloned().unwrap_or_default();
        documents.sort_by(|a, b| {
            let ordering = compare_field(a, b, field);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        Ok(documents)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocStoreError> {
        self.simulate_latency().await;
        if self.behavior.fail_deletes.load(AtomicOrdering::SeqCst) {
            return Err(DocStoreError::Request("mock delete failure".to_string()));
        }

        tracing::debug!(collection, id, "Mock document store: deleting document");
        if let Some(documents) = self.lock()?.get_mut(collection) {
            documents.retain(|doc| doc.id != id);
        }
        Ok(())
    }
}
