use crate::{
    catalog::{
        default_features, default_prompt_samples, default_styles, FeatureInfo, PromptSample,
        StyleCatalog, StyleInfo,
    },
    config::Config,
    error::Result,
    gemini::{ContentGenerator, GeminiClient},
    studio::Studio,
};

/// Shared, immutable application state. `studio` is `None` when no API key is
/// configured; generation requests are then refused without ever touching the
/// provider.
pub struct AppState<G> {
    pub studio: Option<Studio<G>>,
    pub features: Vec<FeatureInfo>,
    pub styles: Vec<StyleInfo>,
    pub prompts: Vec<PromptSample>,
}

impl<G: ContentGenerator> AppState<G> {
    pub fn with_studio(studio: Option<Studio<G>>) -> Self {
        Self {
            studio,
            features: default_features(),
            styles: default_styles(),
            prompts: default_prompt_samples(),
        }
    }
}

impl AppState<GeminiClient> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let studio = match &config.api_key {
            Some(key) => {
                let client = GeminiClient::new(key.as_str())?;
                Some(Studio::new(
                    client,
                    StyleCatalog::default(),
                    config.analysis_model(),
                    config.image_model(),
                ))
            }
            None => {
                log::warn!("No Gemini API key configured, generation requests will be refused");
                None
            }
        };

        Ok(Self::with_studio(studio))
    }
}
