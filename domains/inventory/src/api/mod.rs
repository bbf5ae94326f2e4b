//! API layer for the Inventory domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::{AdminAccess, InventoryState};
pub use routes::routes;
