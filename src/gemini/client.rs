use crate::{
    error::{Result, StudioError},
    models::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part},
};
use async_trait::async_trait;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Thin client for the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(StudioError::ConfigError(
                "Gemini API key is required".into(),
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint: GEMINI_ENDPOINT.to_string(),
        })
    }

    /// Overrides the API base URL. Used to point the client at a local mock.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn truncate_body(body: &str) -> &str {
        // Provider error bodies can be large and may echo request content.
        let end = body
            .char_indices()
            .map(|(i, _)| i)
            .find(|&i| i >= 500)
            .unwrap_or(body.len());
        &body[..end]
    }
}

#[async_trait]
impl super::ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        parts: Vec<Part>,
        config: Option<GenerationConfig>,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/{}:generateContent", self.endpoint, model);
        let body = GenerateContentRequest::new(parts, config);

        log::info!("Invoking model: {}", model);
        log::debug!(
            "generateContent request payload: {}",
            serde_json::to_string(&body)
                .map_err(|e| StudioError::SerializationError(e.to_string()))?
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| StudioError::ProviderError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Gemini API error {}: {}", status, Self::truncate_body(&body));
            return Err(StudioError::ProviderError(format!(
                "Gemini API error {}: {}",
                status,
                Self::truncate_body(&body)
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| StudioError::ProviderError(format!("Invalid provider response: {}", e)))
    }
}
