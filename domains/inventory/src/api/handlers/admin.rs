//! Admin dashboard API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use vibeforge_common::{Error, Result, ValidatedJson};
use vibeforge_docstore::CloudConfig;
use validator::Validate;

use crate::api::middleware::{AdminAccess, InventoryState};
use crate::domain::entities::total_value;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
}

/// Request for changing the admin passphrase
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 4, message = "Password too short"))]
    pub password: String,
}

/// Dashboard summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub cloud_active: bool,
    pub item_count: usize,
    pub total_value: f64,
}

/// Check a passphrase without performing any admin action
pub async fn login(
    State(state): State<InventoryState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let accepted = state
        .store
        .verify_admin_password(&req.password)
        .map_err(|e| Error::Internal(e.to_string()))?;

    if !accepted {
        return Err(Error::Authentication("Invalid admin password".to_string()));
    }
    Ok(Json(LoginResponse { ok: true }))
}

pub async fn change_password(
    _admin: AdminAccess,
    State(state): State<InventoryState>,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> Result<StatusCode> {
    state
        .store
        .set_admin_password(&req.password)
        .map_err(|e| Error::Internal(e.to_string()))?;

    tracing::info!("Admin password updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn status(
    _admin: AdminAccess,
    State(state): State<InventoryState>,
) -> Json<StatusResponse> {
    let items = state.store.get_items().await;

    Json(StatusResponse {
        cloud_active: state.store.is_cloud_active().await,
        item_count: items.len(),
        total_value: total_value(&items),
    })
}

/// Persist cloud credentials and reselect the backend
pub async fn save_cloud_config(
    _admin: AdminAccess,
    State(state): State<InventoryState>,
    Json(config): Json<CloudConfig>,
) -> Result<StatusCode> {
    state
        .store
        .save_cloud_config(&config)
        .await
        .map_err(|e| Error::Internal(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Forget cloud credentials and return to local storage
pub async fn clear_cloud_config(
    _admin: AdminAccess,
    State(state): State<InventoryState>,
) -> Result<StatusCode> {
    state
        .store
        .clear_cloud_config()
        .await
        .map_err(|e| Error::Internal(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}
