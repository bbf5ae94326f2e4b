//! Inventory domain: saved artifacts, the dual-backend artifact store, admin surface

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{total_value, truncate_chars, ArtifactKind, DuplicateReason, InventoryItem};

// Re-export repository types
pub use repository::{
    ArtifactStore, CloudConnector, SaveOutcome, StoreError, StoreOptions, DEFAULT_ADMIN_PASSWORD,
};

// Re-export API types
pub use api::routes;
pub use api::InventoryState;
