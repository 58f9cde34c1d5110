use std::env;

pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-2.5-flash-latest";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Gateway configuration. The API key is the only hard requirement; the
/// server refuses generation requests (without calling the provider) when it
/// is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub api_key: Option<String>,
    pub analysis_model: Option<String>,
    pub image_model: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            api_key: None,
            analysis_model: None,
            image_model: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());
        // Either variable may carry the credential; first non-empty wins.
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| env::var("API_KEY").ok().filter(|key| !key.is_empty()));
        let analysis_model = env::var("GEMINI_ANALYSIS_MODEL").ok();
        let image_model = env::var("GEMINI_IMAGE_MODEL").ok();

        Config {
            port,
            api_key,
            analysis_model,
            image_model,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_models(
        mut self,
        analysis_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        self.analysis_model = Some(analysis_model.into());
        self.image_model = Some(image_model.into());
        self
    }

    pub fn analysis_model(&self) -> &str {
        self.analysis_model
            .as_deref()
            .unwrap_or(DEFAULT_ANALYSIS_MODEL)
    }

    pub fn image_model(&self) -> &str {
        self.image_model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_port(8080)
            .with_api_key("key")
            .with_models("flash", "flash-image");
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.analysis_model(), "flash");
        assert_eq!(config.image_model(), "flash-image");
    }

    #[test]
    fn test_model_defaults() {
        let config = Config::new();
        assert_eq!(config.analysis_model(), DEFAULT_ANALYSIS_MODEL);
        assert_eq!(config.image_model(), DEFAULT_IMAGE_MODEL);
    }
}
