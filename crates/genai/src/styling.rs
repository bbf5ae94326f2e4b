//! Prompt styling and payload cleanup
//!
//! Sliders outside the 40-60 neutral band append descriptive phrases to the
//! image prompt; the helpers below also normalize model input and output.

use std::sync::LazyLock;

use regex::Regex;

use crate::{ImageRequest, VibeSettings};

const LOW: u8 = 40;
const HIGH: u8 = 60;

static DATA_URL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:image/(png|jpeg|jpg|webp);base64,").expect("data URL regex is valid")
});

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[a-z]*\n").expect("leading fence regex is valid"));

static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n```$").expect("trailing fence regex is valid"));

/// (value, phrase when low, phrase when high), in output order
fn slider_phrases(settings: &VibeSettings) -> [(u8, &'static str, &'static str); 7] {
    [
        (
            settings.saturation,
            "desaturated, muted colors",
            "vibrant, highly saturated colors",
        ),
        (
            settings.contrast,
            "low contrast, soft lighting, hazy",
            "high contrast, dramatic lighting, sharp shadows",
        ),
        (
            settings.brightness,
            "dimly lit, dark atmosphere, moody",
            "brightly lit, overexposed, radiant",
        ),
        (
            settings.style_intensity,
            "realistic, subtle style, photorealistic",
            "stylized, artistic, abstract interpretation",
        ),
        (
            settings.hue,
            "cool tones, blue/green shift",
            "warm tones, red/orange shift",
        ),
        (
            settings.vibrance,
            "washed out, vintage feel",
            "neon, electric, popping colors",
        ),
        (
            settings.sharpness,
            "soft focus, blur, dreamy, ethereal",
            "ultra-sharp, 8k detail, crisp edges",
        ),
    ]
}

/// Append stylistic requirements derived from the sliders.
pub fn style_prompt(prompt: &str, settings: &VibeSettings) -> String {
    let adjustments: Vec<&str> = slider_phrases(settings)
        .into_iter()
        .filter_map(|(value, low, high)| {
            if value < LOW {
                Some(low)
            } else if value > HIGH {
                Some(high)
            } else {
                None
            }
        })
        .collect();

    if adjustments.is_empty() {
        prompt.to_string()
    } else {
        format!(
            "{}. \n\nStylistic requirements: {}.",
            prompt,
            adjustments.join(", ")
        )
    }
}

/// Text part sent to the image model, accounting for a reference image.
pub fn image_prompt(request: &ImageRequest) -> String {
    let styled = style_prompt(&request.prompt, &request.settings);
    if request.reference_image.is_some() {
        format!("Create a new image based on this reference with the vibe: {styled}")
    } else {
        styled
    }
}

/// Strip a `data:image/...;base64,` prefix, leaving raw base64.
pub fn strip_data_url_prefix(image: &str) -> &str {
    match DATA_URL_PREFIX.find(image) {
        Some(m) => &image[m.end()..],
        None => image,
    }
}

/// Remove one surrounding markdown code fence, if the model added it anyway.
pub fn strip_code_fences(text: &str) -> String {
    let without_leading = LEADING_FENCE.replace(text, "");
    TRAILING_FENCE.replace(&without_leading, "").into_owned()
}
