//! Generation API handlers
//!
//! Image, code and API-schema requests accept `save: true` to package the
//! result into the inventory in the same call.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use vibeforge_common::{Result, ValidatedJson};
use vibeforge_genai::{
    AiEmployee, AiTool, ApiSchema, AspectRatio, ColorPalette, EmployeeKind, ImageRequest,
    ImageResolution, VibeSettings,
};
use validator::Validate;

use crate::api::middleware::StudioState;
use crate::domain::entities::{GeneratedImage, SaveReport};

const DEFAULT_CATEGORY: &str = "vibe";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_employee_count() -> u32 {
    3
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    #[validate(length(min = 1, max = 4000))]
    pub prompt: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub resolution: ImageResolution,
    pub reference_image: Option<String>,
    #[serde(default)]
    pub settings: VibeSettings,
    /// Studio tab the image belongs to
    #[serde(default = "default_category")]
    #[validate(length(min = 1, max = 64))]
    pub category: String,
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateImageResponse {
    pub image: GeneratedImage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<SaveReport>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeRequest {
    /// File extension without the dot
    #[validate(length(min = 1, max = 16))]
    pub file_type: String,
    #[validate(length(min = 1, max = 4000))]
    pub description: String,
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateCodeResponse {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<SaveReport>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GeneratePalettesRequest {
    #[validate(length(min = 1, max = 1000))]
    pub vibe: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateEmployeesRequest {
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub prompt: String,
    #[serde(default = "default_employee_count")]
    #[validate(range(min = 1, max = 12))]
    pub count: u32,
    #[serde(default, rename = "type")]
    pub kind: EmployeeKind,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateToolsRequest {
    #[validate(length(min = 1, max = 200))]
    pub category: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateApiSchemaRequest {
    #[validate(length(min = 1, max = 4000))]
    pub description: String,
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateApiSchemaResponse {
    pub schema: ApiSchema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<SaveReport>,
}

pub async fn generate_image(
    State(state): State<StudioState>,
    ValidatedJson(req): ValidatedJson<GenerateImageRequest>,
) -> Result<Json<GenerateImageResponse>> {
    let request = ImageRequest {
        prompt: req.prompt,
        aspect_ratio: req.aspect_ratio,
        resolution: req.resolution,
        reference_image: req.reference_image,
        settings: req.settings,
    };
    let image = state.studio.generate_image(request, &req.category).await?;

    let inventory = if req.save {
        Some(state.studio.save_image(&image).await)
    } else {
        None
    };
    Ok(Json(GenerateImageResponse { image, inventory }))
}

pub async fn generate_code(
    State(state): State<StudioState>,
    ValidatedJson(req): ValidatedJson<GenerateCodeRequest>,
) -> Result<Json<GenerateCodeResponse>> {
    let code = state
        .studio
        .generate_code(&req.file_type, &req.description)
        .await?;

    let inventory = if req.save {
        Some(
            state
                .studio
                .save_code(&req.file_type, &req.description, &code)
                .await,
        )
    } else {
        None
    };
    Ok(Json(GenerateCodeResponse { code, inventory }))
}

pub async fn generate_palettes(
    State(state): State<StudioState>,
    ValidatedJson(req): ValidatedJson<GeneratePalettesRequest>,
) -> Result<Json<Vec<ColorPalette>>> {
    Ok(Json(state.studio.generate_palettes(&req.vibe).await?))
}

pub async fn generate_employees(
    State(state): State<StudioState>,
    ValidatedJson(req): ValidatedJson<GenerateEmployeesRequest>,
) -> Result<Json<Vec<AiEmployee>>> {
    Ok(Json(
        state
            .studio
            .generate_employees(&req.prompt, req.count, req.kind)
            .await?,
    ))
}

pub async fn generate_tools(
    State(state): State<StudioState>,
    ValidatedJson(req): ValidatedJson<GenerateToolsRequest>,
) -> Result<Json<Vec<AiTool>>> {
    Ok(Json(state.studio.generate_tools(&req.category).await?))
}

pub async fn generate_api_schema(
    State(state): State<StudioState>,
    ValidatedJson(req): ValidatedJson<GenerateApiSchemaRequest>,
) -> Result<Json<GenerateApiSchemaResponse>> {
    let schema = state.studio.generate_api_schema(&req.description).await?;

    // The placeholder schema is not worth keeping
    let inventory = if req.save && !schema.is_fallback() {
        Some(state.studio.save_api_schema(&schema).await)
    } else {
        None
    };
    Ok(Json(GenerateApiSchemaResponse { schema, inventory }))
}
