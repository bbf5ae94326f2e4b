//! Route definitions for Inventory domain API

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{admin, inventory};
use super::middleware::InventoryState;

/// Create inventory routes
fn inventory_routes() -> Router<InventoryState> {
    Router::new()
        .route(
            "/v1/inventory",
            get(inventory::list_items).post(inventory::save_item),
        )
        .route("/v1/inventory/{id}", delete(inventory::delete_item))
}

/// Create admin routes
fn admin_routes() -> Router<InventoryState> {
    Router::new()
        .route("/v1/admin/login", post(admin::login))
        .route("/v1/admin/password", put(admin::change_password))
        .route("/v1/admin/status", get(admin::status))
        .route(
            "/v1/admin/cloud-config",
            put(admin::save_cloud_config).delete(admin::clear_cloud_config),
        )
}

/// Create all Inventory domain API routes
pub fn routes() -> Router<InventoryState> {
    Router::new()
        .merge(inventory_routes())
        .merge(admin_routes())
}
