//! VibeForge Document Store
//!
//! Client side of the remote document collection used as the cloud inventory backend:
//! - Firestore REST API integration for production
//! - Programmable mock document store for testing and development
//! - Connection built from a user-supplied `CloudConfig` credential blob

pub mod codec;
pub mod firestore;
pub mod mock;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";
const DEFAULT_DATABASE: &str = "(default)";

#[derive(Error, Debug)]
pub enum DocStoreError {
    #[error("Document store configuration error: {0}")]
    Configuration(String),

    #[error("Document store request error: {0}")]
    Request(String),

    #[error("Document store response error: {0}")]
    Response(String),

    #[error("Document decode error: {0}")]
    Decode(String),
}

/// Connection descriptor for the remote backend, as entered in the admin panel.
///
/// Treated as inert data: stored and handed to the client unmodified.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudConfig {
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    pub project_id: String,
    #[serde(default)]
    pub storage_bucket: String,
    #[serde(default)]
    pub messaging_sender_id: String,
    #[serde(default)]
    pub app_id: String,
}

impl std::fmt::Debug for CloudConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudConfig")
            .field("api_key", &"[REDACTED]")
            .field("auth_domain", &self.auth_domain)
            .field("project_id", &self.project_id)
            .field("storage_bucket", &self.storage_bucket)
            .field("messaging_sender_id", &self.messaging_sender_id)
            .field("app_id", &self.app_id)
            .finish()
    }
}

/// A stored document: the backend-assigned id plus its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Process-level document store settings (which provider, where it lives).
#[derive(Debug, Clone)]
pub struct DocStoreConfig {
    /// Document store provider (firestore, mock)
    pub provider: String,
    /// Base URL of the Firestore REST API
    pub base_url: String,
    /// Firestore database id
    pub database: String,
}

impl Default for DocStoreConfig {
    fn default() -> Self {
        Self {
            provider: "firestore".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl DocStoreConfig {
    /// Create document store config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("DOCSTORE_PROVIDER").unwrap_or(defaults.provider),
            base_url: std::env::var("DOCSTORE_BASE_URL").unwrap_or(defaults.base_url),
            database: std::env::var("FIRESTORE_DATABASE_ID").unwrap_or(defaults.database),
        }
    }
}

/// Remote document collection operations consumed by the inventory.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document; the backend generates and returns its id.
    async fn insert(&self, collection: &str, data: serde_json::Value)
        -> Result<String, DocStoreError>;

    /// Every document in the collection, ordered by `field`.
    async fn list_ordered(
        &self,
        collection: &str,
        field: &str,
        direction: SortDirection,
    ) -> Result<Vec<Document>, DocStoreError>;

    /// Delete a document by id.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocStoreError>;
}

/// Factory for creating DocumentStore connections.
#[derive(Debug, Clone, Default)]
pub struct DocumentStoreFactory {
    config: DocStoreConfig,
}

impl DocumentStoreFactory {
    pub fn new(config: DocStoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DocStoreConfig {
        &self.config
    }

    /// Build a connection for the given credentials.
    pub fn connect(&self, cloud: &CloudConfig) -> Result<Arc<dyn DocumentStore>, DocStoreError> {
        match self.config.provider.as_str() {
            "firestore" => {
                if cloud.project_id.trim().is_empty() {
                    return Err(DocStoreError::Configuration(
                        "projectId is required for Firestore".to_string(),
                    ));
                }
                if cloud.api_key.trim().is_empty() {
                    return Err(DocStoreError::Configuration(
                        "apiKey is required for Firestore".to_string(),
                    ));
                }
                tracing::info!(project_id = %cloud.project_id, "Creating Firestore document store");
                Ok(Arc::new(firestore::FirestoreClient::new(&self.config, cloud)))
            }
            "mock" => {
                tracing::info!("Creating mock document store");
                Ok(Arc::new(mock::MockDocumentStore::new()))
            }
            provider => Err(DocStoreError::Configuration(format!(
                "Unknown document store provider: {}. Supported providers: firestore, mock",
                provider
            ))),
        }
    }
}
