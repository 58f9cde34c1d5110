use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps a style identifier to the natural-language descriptor appended to the
/// generation prompt. Unknown ids resolve to nothing and shaping proceeds
/// without a style hint.
///
/// Built once and injected into the studio so the shaping logic stays free of
/// module-level state.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    styles: HashMap<String, String>,
}

impl StyleCatalog {
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn with_style(mut self, id: impl Into<String>, descriptor: impl Into<String>) -> Self {
        self.styles.insert(id.into(), descriptor.into());
        self
    }

    pub fn descriptor(&self, id: &str) -> Option<&str> {
        self.styles.get(id).map(String::as_str)
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        default_styles()
            .into_iter()
            .fold(Self::empty(), |catalog, style| {
                catalog.with_style(style.id, style.prompt)
            })
    }
}

/// A selectable style, served to the UI and seeded into the default
/// `StyleCatalog`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleInfo {
    pub id: String,
    pub name: String,
    pub prompt: String,
}

pub fn default_styles() -> Vec<StyleInfo> {
    let style = |id: &str, name: &str, prompt: &str| StyleInfo {
        id: id.to_string(),
        name: name.to_string(),
        prompt: prompt.to_string(),
    };

    vec![
        style(
            "photorealistic",
            "Photorealistic",
            "photorealistic, 8k, highly detailed, professional photography, raw photo, realistic textures",
        ),
        style(
            "anime",
            "Anime",
            "anime style, vivid colors, expressive features, clean lines, cell shaded",
        ),
        style(
            "chibi",
            "Chibi",
            "chibi style, cute, small proportions, simplified details, toy-like aesthetic",
        ),
        style(
            "3d-render",
            "3D Render",
            "3d render, high quality, octane render, cinematic lighting, material realism",
        ),
        style(
            "painting",
            "Painting",
            "artistic painting, visible brushstrokes, canvas texture, oil painting style",
        ),
        style(
            "flat",
            "Flat Illustration",
            "flat illustration, minimalist, vector art, graphic design style",
        ),
    ]
}

/// A user-selectable studio feature, served to the UI as read-only metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub requires_face_ref: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSample {
    pub id: String,
    pub category: String,
    pub title: String,
    pub content: String,
}

fn feature(id: &str, name: &str, description: &str, kind: &str, requires_face_ref: bool) -> FeatureInfo {
    FeatureInfo {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind: kind.to_string(),
        requires_face_ref,
    }
}

pub fn default_features() -> Vec<FeatureInfo> {
    vec![
        feature("txt2img", "Free generation", "Turn text into artwork.", "text-to-image", false),
        feature("product", "Product shots", "Professional backgrounds for product photos.", "image-to-image", false),
        feature("avatar", "Flag avatar", "Patriotic flag-themed profile pictures.", "text-to-image", false),
        feature("analyze", "Image analysis", "Describe and answer questions about an image.", "analysis", false),
        feature("try-on", "Virtual try-on", "Try outfits while keeping the same face.", "face-consistency", true),
        feature("chibi", "Chibi character", "Turn a portrait into a cute chibi.", "face-consistency", true),
        feature("realism", "Make it real", "Turn drawings into photorealistic images.", "face-consistency", true),
        feature("restore", "Photo restoration", "Sharpen and colorize old photos.", "image-to-image", false),
        feature("backlight", "Backlit portrait", "Artistic backlighting effects.", "face-consistency", true),
        feature("style-swap", "Style swap", "Apply a different artistic style.", "face-consistency", true),
        feature("arch", "Architecture", "Architectural and interior design concepts.", "text-to-image", false),
        feature("baby", "Baby concepts", "Cute concepts that keep the child's face.", "face-consistency", true),
        feature("3d-model", "3D model", "3D-style assets from a description.", "text-to-image", false),
    ]
}

pub fn default_prompt_samples() -> Vec<PromptSample> {
    let sample = |id: &str, category: &str, title: &str, content: &str| PromptSample {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    };

    vec![
        sample(
            "p1",
            "Portrait",
            "Cyberpunk Girl",
            "Cyberpunk woman with neon tattoos, cinematic lighting, purple and blue atmosphere",
        ),
        sample(
            "p2",
            "Product",
            "Luxury Watch",
            "Luxury watch on a dark marble surface, water droplets, macro photography, elegant lighting",
        ),
        sample(
            "p3",
            "Architecture",
            "Eco Mansion",
            "Modern eco-friendly mansion in the forest, glass walls, waterfall, sunlight through trees",
        ),
        sample(
            "p4",
            "Chibi",
            "Chibi Samurai",
            "Cute chibi samurai holding a tiny katana, traditional armor, blossoming cherry trees",
        ),
        sample(
            "p5",
            "Anime",
            "Sky Castle",
            "Ghibli style flying castle in the clouds, blue sky, lush greenery, nostalgic",
        ),
    ]
}
