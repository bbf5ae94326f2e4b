//! Studio workflows
//!
//! Each generator charges one credit before calling the model. Only image
//! generation (tier 1) refunds on failure. API-schema generation degrades to
//! a placeholder schema instead of failing.

use std::sync::Arc;

use vibeforge_genai::styling::strip_code_fences;
use vibeforge_genai::{
    AiEmployee, AiTool, ApiSchema, ColorPalette, EmployeeKind, GenerationService, ImageRequest,
};
use vibeforge_inventory::ArtifactStore;

use super::entities::{api_item, code_item, image_item, GeneratedImage, SaveReport, Tier};
use super::error::StudioError;
use crate::repository::CreditLedger;

pub struct Studio {
    ledger: Arc<CreditLedger>,
    generator: Arc<dyn GenerationService>,
    store: Arc<ArtifactStore>,
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn new_item_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn require_prompt(prompt: &str) -> Result<(), StudioError> {
    if prompt.trim().is_empty() {
        return Err(StudioError::EmptyPrompt);
    }
    Ok(())
}

impl Studio {
    pub fn new(
        ledger: Arc<CreditLedger>,
        generator: Arc<dyn GenerationService>,
        store: Arc<ArtifactStore>,
    ) -> Self {
        Self {
            ledger,
            generator,
            store,
        }
    }

    pub fn ledger(&self) -> &CreditLedger {
        &self.ledger
    }

    /// Generate an image from the studio tab `category`, spending one tier-1 credit.
    pub async fn generate_image(
        &self,
        request: ImageRequest,
        category: &str,
    ) -> Result<GeneratedImage, StudioError> {
        require_prompt(&request.prompt)?;
        self.ledger.deduct(Tier::Tier1).await?;

        let prompt = request.prompt.clone();
        let aspect_ratio = request.aspect_ratio;
        let resolution = request.resolution;

        let data_url = match self.generator.generate_image(request).await {
            Ok(data_url) => data_url,
            Err(e) => {
                tracing::error!(error = %e, "Image generation failed, refunding credit");
                if let Err(refund_err) = self.ledger.refund(Tier::Tier1).await {
                    tracing::error!(error = %refund_err, "Failed to refund credit");
                }
                return Err(e.into());
            }
        };

        let timestamp = now_millis();
        Ok(GeneratedImage {
            id: new_item_id(),
            data_url,
            prompt,
            category: category.to_string(),
            aspect_ratio,
            resolution,
            timestamp,
        })
    }

    /// Generate one source file; any surrounding markdown fence is removed.
    pub async fn generate_code(
        &self,
        file_type: &str,
        description: &str,
    ) -> Result<String, StudioError> {
        require_prompt(description)?;
        self.ledger.deduct(Tier::Tier2).await?;

        let raw = self.generator.generate_code(file_type, description).await?;
        Ok(strip_code_fences(&raw))
    }

    pub async fn generate_palettes(&self, vibe: &str) -> Result<Vec<ColorPalette>, StudioError> {
        require_prompt(vibe)?;
        self.ledger.deduct(Tier::Tier2).await?;
        Ok(self.generator.generate_palettes(vibe).await?)
    }

    /// An empty prompt is allowed: each kind has a default role.
    pub async fn generate_employees(
        &self,
        prompt: &str,
        count: u32,
        kind: EmployeeKind,
    ) -> Result<Vec<AiEmployee>, StudioError> {
        self.ledger.deduct(Tier::Tier2).await?;
        Ok(self
            .generator
            .generate_employees(prompt, count, kind)
            .await?)
    }

    pub async fn generate_tools(&self, category: &str) -> Result<Vec<AiTool>, StudioError> {
        self.ledger.deduct(Tier::Tier2).await?;
        Ok(self.generator.generate_tools(category).await?)
    }

    /// Never fails on the model side: a failed call yields `ApiSchema::fallback()`.
    pub async fn generate_api_schema(&self, description: &str) -> Result<ApiSchema, StudioError> {
        require_prompt(description)?;
        self.ledger.deduct(Tier::Tier2).await?;

        match self.generator.generate_api_schema(description).await {
            Ok(schema) => Ok(schema),
            Err(e) => {
                tracing::warn!(error = %e, "API schema generation failed, using placeholder");
                Ok(ApiSchema::fallback())
            }
        }
    }

    // ---- Packaging into the inventory ----

    pub async fn save_image(&self, image: &GeneratedImage) -> SaveReport {
        self.store.save_item(image_item(image)).await.into()
    }

    pub async fn save_code(&self, file_type: &str, description: &str, code: &str) -> SaveReport {
        let item = code_item(new_item_id(), file_type, description, code, now_millis());
        self.store.save_item(item).await.into()
    }

    pub async fn save_api_schema(&self, schema: &ApiSchema) -> SaveReport {
        match api_item(new_item_id(), schema, now_millis()) {
            Ok(item) => self.store.save_item(item).await.into(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to package API schema");
                SaveReport::Failed
            }
        }
    }
}
