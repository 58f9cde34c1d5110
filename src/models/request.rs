use serde::{Deserialize, Serialize};

/// What the browser submits for one generation or analysis call.
///
/// `feature_id` is deliberately not validated against a closed set: any value
/// other than `analyze` takes the generation path, so new UI features work
/// without a gateway change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub feature_id: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub face_ref: Option<String>,
    #[serde(default)]
    pub source_img: Option<String>,
    #[serde(default)]
    pub options: GenerationOptions,
}

impl GenerationRequest {
    /// The face reference, if one was actually supplied. The UI sends an
    /// empty string when no file was chosen.
    pub fn face_ref(&self) -> Option<&str> {
        self.face_ref.as_deref().filter(|s| !s.is_empty())
    }

    pub fn source_img(&self) -> Option<&str> {
        self.source_img.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            aspect_ratio: None,
            resolution: None,
            style: None,
        }
    }
}

impl GenerationOptions {
    pub fn aspect_ratio(&self) -> &str {
        self.aspect_ratio.as_deref().unwrap_or("1:1")
    }

    pub fn resolution(&self) -> &str {
        self.resolution.as_deref().unwrap_or("1024x1024")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_request() {
        let json = r#"{
            "feature_id": "try-on",
            "prompt": "a red dress",
            "face_ref": "data:image/png;base64,abc",
            "source_img": "",
            "options": {"aspectRatio": "9:16", "resolution": "768x768", "style": "anime"}
        }"#;
        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.feature_id, "try-on");
        assert_eq!(request.face_ref(), Some("data:image/png;base64,abc"));
        assert_eq!(request.source_img(), None);
        assert_eq!(request.options.aspect_ratio(), "9:16");
        assert_eq!(request.options.style.as_deref(), Some("anime"));
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let request: GenerationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.feature_id, "");
        assert_eq!(request.prompt, "");
        assert_eq!(request.face_ref(), None);
        assert_eq!(request.options.aspect_ratio(), "1:1");
        assert_eq!(request.options.resolution(), "1024x1024");
    }
}
