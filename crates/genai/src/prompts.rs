//! Instruction text for each generator.

use crate::EmployeeKind;

pub fn tools_prompt(category: &str) -> String {
    format!(
        "Generate 3 specialized, futuristic AI tools for the category: \"{category}\". \
         Context: Vibe Coding environment. \
         Dev Tools should be for debugging/coding. \
         Agent Tools should be utilities for autonomous agents. \
         Warehouse tools are general virtual equipment."
    )
}

/// An empty `prompt` falls back to a per-kind default role.
pub fn employees_prompt(prompt: &str, count: u32, kind: EmployeeKind) -> String {
    let prompt = prompt.trim();
    match kind {
        EmployeeKind::Friend => format!(
            "Generate {count} eccentric, weird, and funny AI personalities for a \
             \"Speed Friending\" event. They should have strange hobbies and distinct vibes."
        ),
        EmployeeKind::Agent => {
            let task = if prompt.is_empty() { "Data Processing" } else { prompt };
            format!(
                "Generate {count} autonomous AI Agents designed for high-volume business tasks \
                 (e.g., \"{task}\"). They should be efficient, slightly robotic but capable."
            )
        }
        EmployeeKind::Employee => {
            let role = if prompt.is_empty() { "General Staff" } else { prompt };
            format!(
                "Create {count} AI employee profiles for a job application with the role: \
                 \"{role}\". They should have unique skills and distinct flaws."
            )
        }
    }
}

pub fn palettes_prompt(vibe: &str) -> String {
    format!("Generate 3 distinct color palettes based on the vibe: \"{vibe}\". Return hex codes.")
}

pub fn api_schema_prompt(description: &str) -> String {
    format!(
        "Design a REST API endpoint schema for: \"{description}\". Return a single Schema object."
    )
}

pub fn code_prompt(file_type: &str, description: &str) -> String {
    format!(
        "Write a single, high-quality .{file_type} file for the following request: \
         \"{description}\". Return ONLY the raw code content. \
         Do NOT use markdown code blocks (like ```). \
         Do NOT include explanations unless they are code comments."
    )
}
