use crate::{
    catalog::StyleCatalog,
    datauri::DataUri,
    error::{Result, StudioError},
    gemini::ContentGenerator,
    models::{GenerationConfig, GenerationRequest, Part, ResultData},
};

/// Feature id that selects the analysis branch; every other id generates.
pub const ANALYZE_FEATURE: &str = "analyze";

/// Instruction used when the analysis branch receives no prompt.
pub const DEFAULT_ANALYSIS_PROMPT: &str = "Describe the content of this image in detail.";

/// Fallback error when an image-generation response carries no image and no
/// explanatory text.
pub const NO_IMAGE_MESSAGE: &str =
    "The model returned no image, possibly a safety-policy refusal.";

/// Shapes a `GenerationRequest` into a provider call and normalizes the reply.
///
/// Holds no per-request state; one instance serves every request.
pub struct Studio<G> {
    generator: G,
    styles: StyleCatalog,
    analysis_model: String,
    image_model: String,
}

impl<G: ContentGenerator> Studio<G> {
    pub fn new(
        generator: G,
        styles: StyleCatalog,
        analysis_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            styles,
            analysis_model: analysis_model.into(),
            image_model: image_model.into(),
        }
    }

    pub async fn handle(&self, request: &GenerationRequest) -> Result<ResultData> {
        if request.feature_id == ANALYZE_FEATURE {
            self.analyze(request).await
        } else {
            self.generate(request).await
        }
    }

    async fn analyze(&self, request: &GenerationRequest) -> Result<ResultData> {
        let mut parts = Vec::new();

        // At most one input image: the source image wins, the face reference
        // is a fallback for users who uploaded into the wrong slot.
        let image = request
            .source_img()
            .or_else(|| request.face_ref())
            .and_then(DataUri::parse);
        if let Some(uri) = image {
            parts.push(Part::inline_data(uri.mime_type, uri.data));
        }

        parts.push(Part::text(analysis_instruction(&request.prompt)));

        let response = self
            .generator
            .generate_content(&self.analysis_model, parts, None)
            .await?;

        // An empty answer is still an answer; pass it through.
        Ok(ResultData::analysis(response.text().unwrap_or_default()))
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<ResultData> {
        let mut prompt = request.prompt.clone();

        if let Some(descriptor) = request
            .options
            .style
            .as_deref()
            .and_then(|id| self.styles.descriptor(id))
        {
            prompt.push_str(&format!(", style: {}", descriptor));
        }

        // Inline hints duplicate the structured config in case the model
        // ignores it.
        prompt.push_str(&format!(
            ", aspect ratio {}, high resolution {}",
            request.options.aspect_ratio(),
            request.options.resolution()
        ));

        let mut parts = Vec::new();

        // Face reference takes precedence over a plain source image; a
        // malformed data URI degrades to pure text-to-image.
        if let Some(uri) = request.face_ref().and_then(DataUri::parse) {
            parts.push(Part::inline_data(uri.mime_type, uri.data));
            prompt = face_preservation_prompt(&prompt);
        } else if let Some(uri) = request.source_img().and_then(DataUri::parse) {
            parts.push(Part::inline_data(uri.mime_type, uri.data));
            prompt = edit_prompt(&prompt);
        }

        parts.push(Part::text(prompt));

        let config = GenerationConfig::with_aspect_ratio(request.options.aspect_ratio());
        let response = self
            .generator
            .generate_content(&self.image_model, parts, Some(config))
            .await?;

        match response.inline_data() {
            Some(inline) => {
                let mime_type = if inline.mime_type.is_empty() {
                    "image/png"
                } else {
                    inline.mime_type.as_str()
                };
                let uri = DataUri::new(mime_type, inline.data.clone());
                Ok(ResultData::image(uri.to_string()))
            }
            None => {
                // The model either refused or answered in prose; surface
                // whatever text it produced as the error.
                let message = response
                    .text()
                    .filter(|t| !t.is_empty())
                    .unwrap_or(NO_IMAGE_MESSAGE);
                Err(StudioError::NoImage(message.to_string()))
            }
        }
    }
}

pub fn analysis_instruction(prompt: &str) -> String {
    if prompt.is_empty() {
        DEFAULT_ANALYSIS_PROMPT.to_string()
    } else {
        format!(
            "Analyze this image in detail and answer the following question: {}",
            prompt
        )
    }
}

fn face_preservation_prompt(prompt: &str) -> String {
    format!(
        "(Input Image contains the REFERENCE FACE). Task: Create a new image based on the prompt: \"{}\". \
         CRITICAL: You MUST preserve the facial identity, facial features, and skin tone of the person \
         in the input image exactly. Blend the face naturally into the new context and outfit.",
        prompt
    )
}

fn edit_prompt(prompt: &str) -> String {
    format!(
        "(Input Image provided). Modify the provided image based on this prompt: \"{}\".",
        prompt
    )
}
