//! Artifact store
//!
//! Single point of truth for the inventory collection. Each store instance
//! selects one backend when it is initialized:
//! - `Cloud`: a remote document collection reached through a `CloudConnector`
//! - `Local`: a JSON list kept under one key of the local key-value store
//!
//! The selection only changes through [`ArtifactStore::reinitialize`], which
//! `save_cloud_config` and `clear_cloud_config` call after persisting. Remote
//! faults never escape: reads fall back to local data, writes and deletes
//! report failure.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use vibeforge_common::kv::{KeyValueStore, KvError};
use vibeforge_docstore::{
    CloudConfig, DocStoreError, DocumentStore, DocumentStoreFactory, SortDirection,
};

use crate::domain::entities::{DuplicateReason, InventoryItem};

pub const INVENTORY_KEY: &str = "vibe_inventory";
pub const CLOUD_CONFIG_KEY: &str = "vibe_cloud_config";
pub const ADMIN_PASSWORD_KEY: &str = "vibe_admin_password";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Remote collection holding inventory documents
pub const COLLECTION: &str = "inventory";
const ORDER_FIELD: &str = "dateCreated";

const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("remote backend error: {0}")]
    Remote(#[from] DocStoreError),

    #[error("remote backend timed out after {0:?}")]
    Timeout(Duration),

    #[error("local storage error: {0}")]
    Local(#[from] KvError),

    #[error("stored data is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Builds a remote connection from persisted credentials.
pub trait CloudConnector: Send + Sync {
    fn connect(&self, config: &CloudConfig) -> Result<Arc<dyn DocumentStore>, DocStoreError>;
}

impl CloudConnector for DocumentStoreFactory {
    fn connect(&self, config: &CloudConfig) -> Result<Arc<dyn DocumentStore>, DocStoreError> {
        DocumentStoreFactory::connect(self, config)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// Upper bound for each remote call
    pub remote_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }
}

#[derive(Clone)]
enum Backend {
    Local,
    Cloud(Arc<dyn DocumentStore>),
}

/// Result of [`ArtifactStore::save_item`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Carries the id the item is stored under. On the cloud backend this is
    /// the remote document id, not the caller's.
    Saved(String),
    Duplicate(DuplicateReason),
    /// The backend write failed; the cause was logged
    Failed,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

pub struct ArtifactStore {
    kv: Arc<dyn KeyValueStore>,
    connector: Arc<dyn CloudConnector>,
    backend: RwLock<Backend>,
    /// Serializes duplicate-check + write, and deletes
    write_lock: Mutex<()>,
    options: StoreOptions,
}

impl ArtifactStore {
    /// Create a store and select its backend from the persisted cloud config.
    ///
    /// Never fails: missing, unparseable or unusable config leaves the store
    /// on the local backend.
    pub async fn init(
        kv: Arc<dyn KeyValueStore>,
        connector: Arc<dyn CloudConnector>,
        options: StoreOptions,
    ) -> Self {
        let store = Self {
            kv,
            connector,
            backend: RwLock::new(Backend::Local),
            write_lock: Mutex::new(()),
            options,
        };
        store.reinitialize().await;
        store
    }

    /// Re-read the persisted cloud config and reselect the backend.
    pub async fn reinitialize(&self) {
        // Held across the config read so concurrent reinitializations apply
        // in the order they read, and no write straddles two backends
        let _guard = self.write_lock.lock().await;
        let backend = self.select_backend();
        *self.backend.write().await = backend;
    }

    fn select_backend(&self) -> Backend {
        let raw = match self.kv.get(CLOUD_CONFIG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("No cloud config stored, using local inventory");
                return Backend::Local;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read cloud config, using local inventory");
                return Backend::Local;
            }
        };

        let config: CloudConfig = match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Stored cloud config is malformed, using local inventory");
                return Backend::Local;
            }
        };

        match self.connector.connect(&config) {
            Ok(remote) => {
                tracing::info!(project_id = %config.project_id, "Connected to cloud inventory");
                Backend::Cloud(remote)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to init cloud connection, using local inventory");
                Backend::Local
            }
        }
    }

    async fn backend(&self) -> Backend {
        self.backend.read().await.clone()
    }

    pub async fn is_cloud_active(&self) -> bool {
        matches!(self.backend().await, Backend::Cloud(_))
    }

    async fn remote<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, DocStoreError>>,
    {
        match tokio::time::timeout(self.options.remote_timeout, call).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::Timeout(self.options.remote_timeout)),
        }
    }

    // ---- Local backend ----

    fn local_items(&self) -> Result<Vec<InventoryItem>, StoreError> {
        match self.kv.get(INVENTORY_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn local_items_or_empty(&self) -> Vec<InventoryItem> {
        self.local_items().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to read local inventory");
            Vec::new()
        })
    }

    fn write_local_items(&self, items: &[InventoryItem]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        self.kv.set(INVENTORY_KEY, &raw)?;
        Ok(())
    }

    // ---- Cloud backend ----

    async fn cloud_items(
        &self,
        remote: &Arc<dyn DocumentStore>,
    ) -> Result<Vec<InventoryItem>, StoreError> {
        let documents = self
            .remote(remote.list_ordered(COLLECTION, ORDER_FIELD, SortDirection::Descending))
            .await?;

        documents
            .into_iter()
            .map(|doc| {
                let mut item: InventoryItem = serde_json::from_value(doc.data)?;
                // The document id is what delete_item needs
                item.id = doc.id;
                Ok(item)
            })
            .collect()
    }

    // ---- Public operations ----

    /// Every saved item, newest first.
    ///
    /// Local data is returned in stored order (newest first because saves
    /// prepend). A failed cloud read returns the local contents instead.
    pub async fn get_items(&self) -> Vec<InventoryItem> {
        match self.backend().await {
            Backend::Cloud(remote) => match self.cloud_items(&remote).await {
                Ok(items) => items,
                Err(e) => {
                    tracing::error!(error = %e, "Cloud fetch failed, falling back to local inventory");
                    self.local_items_or_empty()
                }
            },
            Backend::Local => self.local_items_or_empty(),
        }
    }

    /// Save a new item unless it duplicates an existing one by id, or by
    /// name within the same category.
    pub async fn save_item(&self, item: InventoryItem) -> SaveOutcome {
        let _guard = self.write_lock.lock().await;

        let current = self.get_items().await;
        if let Some(reason) = item.find_duplicate(&current) {
            tracing::warn!(id = %item.id, name = %item.name, %reason, "Duplicate item prevented");
            return SaveOutcome::Duplicate(reason);
        }

        match self.backend().await {
            Backend::Cloud(remote) => {
                let data = match serde_json::to_value(&item) {
                    Ok(data) => data,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to encode item for cloud save");
                        return SaveOutcome::Failed;
                    }
                };
                match self.remote(remote.insert(COLLECTION, data)).await {
                    Ok(document_id) => {
                        tracing::info!(id = %item.id, %document_id, "Item saved to cloud inventory");
                        SaveOutcome::Saved(document_id)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Cloud save failed");
                        SaveOutcome::Failed
                    }
                }
            }
            Backend::Local => {
                let id = item.id.clone();
                let result = self.local_items().and_then(|mut items| {
                    items.insert(0, item);
                    self.write_local_items(&items)
                });
                match result {
                    Ok(()) => {
                        tracing::info!(%id, "Item saved to local inventory");
                        SaveOutcome::Saved(id)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Local save failed");
                        SaveOutcome::Failed
                    }
                }
            }
        }
    }

    /// Delete by id. On the local backend a missing id is a successful no-op.
    pub async fn delete_item(&self, id: &str) -> bool {
        let _guard = self.write_lock.lock().await;

        match self.backend().await {
            Backend::Cloud(remote) => match self.remote(remote.delete(COLLECTION, id)).await {
                Ok(()) => {
                    tracing::info!(id, "Item deleted from cloud inventory");
                    true
                }
                Err(e) => {
                    tracing::error!(error = %e, id, "Cloud delete failed");
                    false
                }
            },
            Backend::Local => {
                let result = self.local_items().and_then(|mut items| {
                    items.retain(|i| i.id != id);
                    self.write_local_items(&items)
                });
                match result {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::error!(error = %e, id, "Local delete failed");
                        false
                    }
                }
            }
        }
    }

    // ---- Cloud configuration ----

    /// Persist credentials and switch to the cloud backend if they work.
    pub async fn save_cloud_config(&self, config: &CloudConfig) -> Result<(), StoreError> {
        let raw = serde_json::to_string(config)?;
        self.kv.set(CLOUD_CONFIG_KEY, &raw)?;
        self.reinitialize().await;
        Ok(())
    }

    /// Forget credentials and return to the local backend.
    pub async fn clear_cloud_config(&self) -> Result<(), StoreError> {
        self.kv.remove(CLOUD_CONFIG_KEY)?;
        self.reinitialize().await;
        Ok(())
    }

    /// The persisted credentials, if present and parseable.
    pub fn cloud_config(&self) -> Option<CloudConfig> {
        let raw = self.kv.get(CLOUD_CONFIG_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    // ---- Admin passphrase ----

    /// Stored passphrase, or the default when none (or an empty one) is stored.
    pub fn admin_password(&self) -> Result<String, StoreError> {
        Ok(self
            .kv
            .get(ADMIN_PASSWORD_KEY)?
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()))
    }

    /// Overwrite the passphrase. Strength rules belong to the caller.
    pub fn set_admin_password(&self, password: &str) -> Result<(), StoreError> {
        self.kv.set(ADMIN_PASSWORD_KEY, password)?;
        Ok(())
    }

    /// Plain-text comparison against the stored passphrase.
    pub fn verify_admin_password(&self, candidate: &str) -> Result<bool, StoreError> {
        Ok(self.admin_password()? == candidate)
    }
}
