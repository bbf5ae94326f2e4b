//! Domain entities for the Inventory domain
//!
//! An inventory item is a generated artifact the user chose to keep. Items
//! are never updated in place: they are created once and later deleted.

use serde::{Deserialize, Serialize};

/// Artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Image,
    Code,
    Employee,
    Palette,
    Api,
    Tool,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Image => write!(f, "image"),
            ArtifactKind::Code => write!(f, "code"),
            ArtifactKind::Employee => write!(f, "employee"),
            ArtifactKind::Palette => write!(f, "palette"),
            ArtifactKind::Api => write!(f, "api"),
            ArtifactKind::Tool => write!(f, "tool"),
        }
    }
}

/// Inventory item, serialized with the camelCase field names of the persisted format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Caller-supplied on save; replaced by the document id when read from the cloud
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub category: String,
    pub name: String,
    /// Payload whose shape depends on `kind` (data URL, source text, schema object, ...)
    pub content: serde_json::Value,
    pub price: f64,
    /// Epoch milliseconds
    pub date_created: i64,
}

/// Which uniqueness rule a rejected save collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateReason {
    /// An item with the same id already exists
    Id,
    /// An item with the same name exists in the same category
    NameInCategory,
}

impl std::fmt::Display for DuplicateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicateReason::Id => write!(f, "an item with this id already exists"),
            DuplicateReason::NameInCategory => {
                write!(f, "an item with this name already exists in the category")
            }
        }
    }
}

impl InventoryItem {
    /// Check `self` against an existing collection. Id collisions win over
    /// name collisions when both apply.
    pub fn find_duplicate(&self, existing: &[InventoryItem]) -> Option<DuplicateReason> {
        if existing.iter().any(|i| i.id == self.id) {
            return Some(DuplicateReason::Id);
        }
        if existing
            .iter()
            .any(|i| i.name == self.name && i.category == self.category)
        {
            return Some(DuplicateReason::NameInCategory);
        }
        None
    }
}

/// Sum of item prices, as shown on the admin dashboard.
pub fn total_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(|i| i.price).sum()
}

/// First `max` characters of `text` (not bytes).
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
