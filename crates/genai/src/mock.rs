//! Mock Generation Service Implementation
//!
//! Returns deterministic results derived from the request and records the
//! instruction text each call would have sent. Failures can be switched on
//! to exercise refund and fallback paths.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use base64::Engine;

use crate::prompts;
use crate::styling::{image_prompt, strip_data_url_prefix};
use crate::{
    AiEmployee, AiTool, ApiSchema, ColorPalette, EmployeeKind, GenAiError, GenerationService,
    ImageRequest,
};

/// Mock generation service
#[derive(Debug, Clone, Default)]
pub struct MockGenerationService {
    fail: Arc<AtomicBool>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a request error
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Instruction text recorded so far, oldest first
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, prompt: String) -> Result<(), GenAiError> {
        tracing::info!("Mock generation service processing request");
        self.prompts
            .lock()
            .map_err(|e| GenAiError::Request(format!("prompts lock poisoned: {e}")))?
            .push(prompt);
        if self.fail.load(Ordering::SeqCst) {
            return Err(GenAiError::Request("mock generation failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl GenerationService for MockGenerationService {
    async fn generate_image(&self, request: ImageRequest) -> Result<String, GenAiError> {
        let text = image_prompt(&request);
        self.record(text.clone())?;

        let mut payload = text.into_bytes();
        if let Some(reference) = request.reference_image.as_deref() {
            payload.extend_from_slice(strip_data_url_prefix(reference).as_bytes());
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(payload);
        Ok(format!("data:image/png;base64,{encoded}"))
    }

    async fn generate_tools(&self, category: &str) -> Result<Vec<AiTool>, GenAiError> {
        self.record(prompts::tools_prompt(category))?;
        Ok((1..=3)
            .map(|i| AiTool {
                name: format!("{category} tool {i}"),
                description: format!("Mock {category} utility #{i}"),
                collaboration_type: "autonomous".to_string(),
                icon_emoji: "🛠️".to_string(),
            })
            .collect())
    }

    async fn generate_employees(
        &self,
        prompt: &str,
        count: u32,
        kind: EmployeeKind,
    ) -> Result<Vec<AiEmployee>, GenAiError> {
        self.record(prompts::employees_prompt(prompt, count, kind))?;
        let role = if prompt.trim().is_empty() {
            "General Staff"
        } else {
            prompt.trim()
        };
        Ok((1..=count)
            .map(|i| AiEmployee {
                name: format!("Mock Persona {i}"),
                role: role.to_string(),
                bio: format!("Synthetic profile #{i}"),
                top_skills: vec!["prompting".to_string(), "vibing".to_string()],
                critical_deficiency: "Does not exist".to_string(),
                avatar_emoji: "🤖".to_string(),
                salary_expectation: "$0".to_string(),
                kind: Some(kind),
            })
            .collect())
    }

    async fn generate_palettes(&self, vibe: &str) -> Result<Vec<ColorPalette>, GenAiError> {
        self.record(prompts::palettes_prompt(vibe))?;
        let swatches = [
            ["#0F172A", "#1E293B", "#334155", "#64748B", "#E2E8F0"],
            ["#FF6B6B", "#FFD93D", "#6BCB77", "#4D96FF", "#F7F7F7"],
            ["#2D1B69", "#8E2DE2", "#F72585", "#FFBE0B", "#FFFFFF"],
        ];
        Ok(swatches
            .iter()
            .enumerate()
            .map(|(i, colors)| ColorPalette {
                name: format!("{vibe} #{}", i + 1),
                description: format!("Mock palette for {vibe}"),
                colors: colors.iter().map(|c| c.to_string()).collect(),
            })
            .collect())
    }

    async fn generate_api_schema(&self, description: &str) -> Result<ApiSchema, GenAiError> {
        self.record(prompts::api_schema_prompt(description))?;
        let slug: String = description
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        let mut parameters = BTreeMap::new();
        parameters.insert("id".to_string(), "string".to_string());
        Ok(ApiSchema {
            name: description.to_string(),
            method: "GET".to_string(),
            endpoint: format!("/api/{slug}"),
            description: format!("Mock endpoint for {description}"),
            parameters,
            response_snippet: r#"{"ok": true}"#.to_string(),
        })
    }

    async fn generate_code(
        &self,
        file_type: &str,
        description: &str,
    ) -> Result<String, GenAiError> {
        self.record(prompts::code_prompt(file_type, description))?;
        // Wrapped in a fence the way chat models tend to answer
        Ok(format!("```{file_type}\n// {description}\n```"))
    }
}
