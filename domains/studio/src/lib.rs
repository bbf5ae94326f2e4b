//! Studio domain: credit ledger, generation workflows, studio HTTP API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{GeneratedImage, SaveReport, Tier, UserCredits};
pub use domain::error::StudioError;
pub use domain::workflows::Studio;

// Re-export repository types
pub use repository::CreditLedger;

// Re-export API types
pub use api::routes;
pub use api::StudioState;
