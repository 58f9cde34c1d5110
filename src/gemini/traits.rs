use crate::{
    error::Result,
    models::{GenerateContentResponse, GenerationConfig, Part},
};
use async_trait::async_trait;

/// Capability interface over the provider's content-generation call.
///
/// The studio's shaping logic only ever talks to this trait, so it can be
/// exercised against an in-memory stub without a live network call.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        parts: Vec<Part>,
        config: Option<GenerationConfig>,
    ) -> Result<GenerateContentResponse>;
}
