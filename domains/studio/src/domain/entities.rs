//! Domain entities for the Studio domain
//!
//! Credits gate every generator. Generated results are kept in memory by the
//! caller and only become inventory items when packaged with the helpers here.

use serde::{Deserialize, Serialize};
use vibeforge_genai::{ApiSchema, AspectRatio, ImageResolution};
use vibeforge_inventory::{truncate_chars, ArtifactKind, InventoryItem, SaveOutcome};

pub const IMAGE_PRICE: f64 = 1.00;
pub const CODE_PRICE: f64 = 0.50;
pub const API_PRICE: f64 = 0.10;

const IMAGE_NAME_CHARS: usize = 30;
const CODE_NAME_CHARS: usize = 20;

/// Credit tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// "Pro" credits, spent on image generation
    Tier1,
    /// "Basic" credits, spent on every other generator
    Tier2,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Tier1 => "Pro",
            Tier::Tier2 => "Basic",
        }
    }

    /// Displayed price of one purchase, in dollars
    pub fn purchase_price(&self) -> f64 {
        match self {
            Tier::Tier1 => 5.00,
            Tier::Tier2 => 0.99,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Tier1 => write!(f, "tier1"),
            Tier::Tier2 => write!(f, "tier2"),
        }
    }
}

/// Credit balances per tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredits {
    pub tier1: u32,
    pub tier2: u32,
}

impl Default for UserCredits {
    fn default() -> Self {
        Self { tier1: 2, tier2: 3 }
    }
}

impl UserCredits {
    pub fn get(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Tier1 => self.tier1,
            Tier::Tier2 => self.tier2,
        }
    }

    fn slot(&mut self, tier: Tier) -> &mut u32 {
        match tier {
            Tier::Tier1 => &mut self.tier1,
            Tier::Tier2 => &mut self.tier2,
        }
    }

    pub fn add(&mut self, tier: Tier, amount: u32) {
        let slot = self.slot(tier);
        *slot = slot.saturating_add(amount);
    }

    /// Take one credit. Returns false, leaving the balance untouched, at zero.
    pub fn take_one(&mut self, tier: Tier) -> bool {
        let slot = self.slot(tier);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

/// An image produced by the studio, not yet saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: String,
    /// `data:image/...;base64,` URL
    pub data_url: String,
    pub prompt: String,
    /// Studio tab the image was generated from
    pub category: String,
    pub aspect_ratio: AspectRatio,
    pub resolution: ImageResolution,
    /// Epoch milliseconds
    pub timestamp: i64,
}

/// Inventory result reported back to callers that asked for a save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveReport {
    Saved,
    Duplicate,
    Failed,
}

impl From<SaveOutcome> for SaveReport {
    fn from(outcome: SaveOutcome) -> Self {
        match outcome {
            SaveOutcome::Saved(_) => SaveReport::Saved,
            SaveOutcome::Duplicate(_) => SaveReport::Duplicate,
            SaveOutcome::Failed => SaveReport::Failed,
        }
    }
}

pub fn image_item(image: &GeneratedImage) -> InventoryItem {
    InventoryItem {
        id: image.id.clone(),
        kind: ArtifactKind::Image,
        category: image.category.clone(),
        name: truncate_chars(&image.prompt, IMAGE_NAME_CHARS).to_string(),
        content: serde_json::Value::String(image.data_url.clone()),
        price: IMAGE_PRICE,
        date_created: image.timestamp,
    }
}

/// Code file named `"{description prefix}.{file_type}"`, filed under its type
pub fn code_item(
    id: String,
    file_type: &str,
    description: &str,
    code: &str,
    date_created: i64,
) -> InventoryItem {
    InventoryItem {
        id,
        kind: ArtifactKind::Code,
        category: file_type.to_string(),
        name: format!("{}.{}", truncate_chars(description, CODE_NAME_CHARS), file_type),
        content: serde_json::Value::String(code.to_string()),
        price: CODE_PRICE,
        date_created,
    }
}

pub fn api_item(
    id: String,
    schema: &ApiSchema,
    date_created: i64,
) -> Result<InventoryItem, serde_json::Error> {
    Ok(InventoryItem {
        id,
        kind: ArtifactKind::Api,
        category: "api".to_string(),
        name: format!("{} {}", schema.method, schema.endpoint),
        content: serde_json::to_value(schema)?,
        price: API_PRICE,
        date_created,
    })
}
