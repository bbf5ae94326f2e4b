//! Repository layer for the Inventory domain

pub mod store;

pub use store::{
    ArtifactStore, CloudConnector, SaveOutcome, StoreError, StoreOptions, ADMIN_PASSWORD_KEY,
    CLOUD_CONFIG_KEY, COLLECTION, DEFAULT_ADMIN_PASSWORD, INVENTORY_KEY,
};
