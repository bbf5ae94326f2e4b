//! VibeForge Generative-AI Service
//!
//! Provides the generation capability behind every studio tool:
//! - Request and result types (images, tools, employees, palettes, API schemas, code)
//! - Prompt construction and slider-driven prompt styling
//! - Mock generation service for testing and development

pub mod mock;
pub mod prompts;
pub mod styling;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenAiError {
    #[error("Generation configuration error: {0}")]
    Configuration(String),

    #[error("Generation request error: {0}")]
    Request(String),

    #[error("Generation response error: {0}")]
    Response(String),

    #[error("No image data returned from the model")]
    NoImage,

    #[error("API key is invalid or expired")]
    InvalidApiKey,
}

/// Output aspect ratio for image generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "2:3")]
    Portrait2x3,
    #[serde(rename = "3:2")]
    Landscape3x2,
    #[serde(rename = "3:4")]
    Portrait3x4,
    #[serde(rename = "4:3")]
    Landscape4x3,
    #[serde(rename = "9:16")]
    Portrait9x16,
    #[serde(rename = "16:9")]
    Landscape16x9,
    #[serde(rename = "21:9")]
    Cinematic21x9,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait2x3 => "2:3",
            AspectRatio::Landscape3x2 => "3:2",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait9x16 => "9:16",
            AspectRatio::Landscape16x9 => "16:9",
            AspectRatio::Cinematic21x9 => "21:9",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output resolution for image generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageResolution {
    #[default]
    #[serde(rename = "1K")]
    Res1K,
    #[serde(rename = "2K")]
    Res2K,
    #[serde(rename = "4K")]
    Res4K,
}

/// Style sliders, each 0-100 with 50 as neutral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeSettings {
    pub saturation: u8,
    pub contrast: u8,
    pub brightness: u8,
    pub style_intensity: u8,
    pub hue: u8,
    pub vibrance: u8,
    pub sharpness: u8,
}

impl Default for VibeSettings {
    fn default() -> Self {
        Self {
            saturation: 50,
            contrast: 50,
            brightness: 50,
            style_intensity: 50,
            hue: 50,
            vibrance: 50,
            sharpness: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub prompt: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub resolution: ImageResolution,
    /// Base64 image (optionally a data URL) to remix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_image: Option<String>,
    #[serde(default)]
    pub settings: VibeSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiTool {
    pub name: String,
    pub description: String,
    pub collaboration_type: String,
    pub icon_emoji: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeKind {
    #[default]
    Employee,
    Agent,
    Friend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiEmployee {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub top_skills: Vec<String>,
    pub critical_deficiency: String,
    pub avatar_emoji: String,
    pub salary_expectation: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EmployeeKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub name: String,
    pub description: String,
    /// Hex codes
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSchema {
    pub name: String,
    pub method: String,
    pub endpoint: String,
    pub description: String,
    pub parameters: BTreeMap<String, String>,
    pub response_snippet: String,
}

impl ApiSchema {
    /// Placeholder returned when schema generation fails.
    pub fn fallback() -> Self {
        Self {
            name: "Error".to_string(),
            method: "GET".to_string(),
            endpoint: "/error".to_string(),
            description: "Failed to parse".to_string(),
            parameters: BTreeMap::new(),
            response_snippet: "{}".to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

/// Generation service configuration
#[derive(Clone)]
pub struct GenAiConfig {
    /// Generation provider (mock)
    pub provider: String,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for GenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl GenAiConfig {
    /// Create generation config from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("GENAI_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            api_key: std::env::var("GENAI_API_KEY").ok(),
        }
    }
}

/// Generative-AI capability consumed by the studio
#[async_trait::async_trait]
pub trait GenerationService: Send + Sync {
    /// Returns a `data:image/png;base64,...` URL.
    async fn generate_image(&self, request: ImageRequest) -> Result<String, GenAiError>;

    async fn generate_tools(&self, category: &str) -> Result<Vec<AiTool>, GenAiError>;

    async fn generate_employees(
        &self,
        prompt: &str,
        count: u32,
        kind: EmployeeKind,
    ) -> Result<Vec<AiEmployee>, GenAiError>;

    async fn generate_palettes(&self, vibe: &str) -> Result<Vec<ColorPalette>, GenAiError>;

    async fn generate_api_schema(&self, description: &str) -> Result<ApiSchema, GenAiError>;

    /// Raw source text for a single file of the given extension.
    async fn generate_code(&self, file_type: &str, description: &str)
        -> Result<String, GenAiError>;
}

/// Factory for creating GenerationService implementations
pub struct GenerationServiceFactory;

impl GenerationServiceFactory {
    pub fn create(config: GenAiConfig) -> Result<Box<dyn GenerationService>, GenAiError> {
        match config.provider.as_str() {
            "gemini" => {
                tracing::info!("Creating Gemini generation service");
                Err(GenAiError::Configuration(
                    "Gemini provider not yet implemented. Use 'mock' provider.".to_string(),
                ))
            }
            "mock" => {
                tracing::info!("Creating mock generation service");
                Ok(Box::new(mock::MockGenerationService::new()))
            }
            provider => Err(GenAiError::Configuration(format!(
                "Unknown generation provider: {}. Supported providers: gemini, mock",
                provider
            ))),
        }
    }
}
