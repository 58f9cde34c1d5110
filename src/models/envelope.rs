use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The uniform response shape returned to the browser. Exactly one of `data`
/// and `error` is populated, and `success` tracks which.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResultData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn ok(data: ResultData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Payload of a successful call. `image_base64` is the canonical field for
/// generated images (a full data URI); `image_url` is accepted as a
/// deprecated alias when deserializing older clients' payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultData {
    #[serde(skip_serializing_if = "Option::is_none", alias = "image_url")]
    pub image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_text: Option<String>,
    pub request_id: String,
}

impl ResultData {
    pub fn image(data_uri: impl Into<String>) -> Self {
        Self {
            image_base64: Some(data_uri.into()),
            analysis_text: None,
            request_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn analysis(text: impl Into<String>) -> Self {
        Self {
            image_base64: None,
            analysis_text: Some(text.into()),
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_omits_error() {
        let envelope = GenerationResult::ok(ResultData::analysis("a red square"));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["analysis_text"], "a red square");
        assert!(json.get("error").is_none());
        assert!(json["data"].get("image_base64").is_none());
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let envelope = GenerationResult::err("quota exceeded");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "quota exceeded");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_image_url_accepted_as_alias() {
        let json = r#"{
            "success": true,
            "data": {"image_url": "data:image/png;base64,abc", "request_id": "r1"}
        }"#;
        let envelope: GenerationResult = serde_json::from_str(json).unwrap();
        let data = envelope.data.unwrap();
        assert_eq!(data.image_base64.as_deref(), Some("data:image/png;base64,abc"));
    }

    #[test]
    fn test_result_data_carries_request_id() {
        let data = ResultData::image("data:image/png;base64,abc");
        assert!(!data.request_id.is_empty());
        assert!(data.analysis_text.is_none());
    }
}
