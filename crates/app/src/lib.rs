//! VibeForge application composition root
//!
//! Composes the inventory and studio routers into a single application.

use std::sync::Arc;

use axum::Router;
use vibeforge_common::{Config, FileKeyValueStore, KeyValueStore};
use vibeforge_docstore::{DocStoreConfig, DocumentStoreFactory};
use vibeforge_genai::{GenAiConfig, GenerationService, GenerationServiceFactory};
use vibeforge_inventory::{ArtifactStore, CloudConnector, InventoryState, StoreOptions};
use vibeforge_studio::{CreditLedger, Studio, StudioState};

/// Everything the routers need, already constructed
pub struct AppServices {
    pub kv: Arc<dyn KeyValueStore>,
    pub connector: Arc<dyn CloudConnector>,
    pub generator: Arc<dyn GenerationService>,
    pub store_options: StoreOptions,
}

impl AppServices {
    /// Build services from configuration and the provider environment variables
    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let kv = FileKeyValueStore::open(&config.data_dir).map_err(|e| {
            anyhow::anyhow!(
                "Failed to open data directory {}: {}",
                config.data_dir.display(),
                e
            )
        })?;

        let docstore_config = DocStoreConfig::from_env();
        tracing::info!(provider = %docstore_config.provider, "Document store configured");

        let generator = GenerationServiceFactory::create(GenAiConfig::from_env())?;

        Ok(Self {
            kv: Arc::new(kv),
            connector: Arc::new(DocumentStoreFactory::new(docstore_config)),
            generator: Arc::from(generator),
            store_options: StoreOptions {
                remote_timeout: config.remote_timeout(),
            },
        })
    }
}

/// Create the main application router from configuration
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let services = AppServices::from_config(config)?;
    Ok(build_router(services).await)
}

/// Compose domain routers over prebuilt services
pub async fn build_router(services: AppServices) -> Router {
    let store = Arc::new(
        ArtifactStore::init(
            services.kv.clone(),
            services.connector,
            services.store_options,
        )
        .await,
    );

    let studio = Studio::new(
        Arc::new(CreditLedger::new(services.kv)),
        services.generator,
        store.clone(),
    );

    let inventory_state = InventoryState { store };
    let studio_state = StudioState {
        studio: Arc::new(studio),
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "VibeForge API v0.0.1-SNAPSHOT" }),
        )
        .merge(vibeforge_inventory::routes().with_state(inventory_state))
        .merge(vibeforge_studio::routes().with_state(studio_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
