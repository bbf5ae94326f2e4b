//! Inventory API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use vibeforge_common::{Error, Result, ValidatedJson};
use validator::Validate;

use crate::api::middleware::{AdminAccess, InventoryState};
use crate::domain::entities::{ArtifactKind, InventoryItem};
use crate::repository::SaveOutcome;

/// Request for saving an item to the inventory
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveItemRequest {
    #[validate(length(min = 1, message = "Item id must not be empty"))]
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ArtifactKind,

    pub category: String,

    #[validate(length(min = 1, message = "Item name must not be empty"))]
    pub name: String,

    pub content: serde_json::Value,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub date_created: i64,
}

impl From<SaveItemRequest> for InventoryItem {
    fn from(req: SaveItemRequest) -> Self {
        Self {
            id: req.id,
            kind: req.kind,
            category: req.category,
            name: req.name,
            content: req.content,
            price: req.price,
            date_created: req.date_created,
        }
    }
}

/// List every saved item, newest first
pub async fn list_items(State(state): State<InventoryState>) -> Json<Vec<InventoryItem>> {
    Json(state.store.get_items().await)
}

/// Save an item unless it duplicates an existing one.
///
/// The response carries the id the item was stored under, which is the one
/// delete accepts.
pub async fn save_item(
    State(state): State<InventoryState>,
    ValidatedJson(req): ValidatedJson<SaveItemRequest>,
) -> Result<(StatusCode, Json<InventoryItem>)> {
    let mut item: InventoryItem = req.into();

    match state.store.save_item(item.clone()).await {
        SaveOutcome::Saved(stored_id) => {
            item.id = stored_id;
            Ok((StatusCode::CREATED, Json(item)))
        }
        SaveOutcome::Duplicate(reason) => Err(Error::Conflict(reason.to_string())),
        SaveOutcome::Failed => Err(Error::Upstream("Failed to save item".to_string())),
    }
}

/// Delete an item by id (admin only)
pub async fn delete_item(
    _admin: AdminAccess,
    State(state): State<InventoryState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.store.delete_item(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::Upstream(format!("Failed to delete item {id}")))
    }
}
