use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Provider error: {0}")]
    ProviderError(String),
    #[error("{0}")]
    NoImage(String),
}

impl StudioError {
    /// HTTP status the error maps to when surfaced through the envelope.
    pub fn status_code(&self) -> u16 {
        match self {
            StudioError::BadRequest(_) => 400,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(StudioError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(StudioError::ConfigError("x".into()).status_code(), 500);
        assert_eq!(StudioError::ProviderError("x".into()).status_code(), 500);
        assert_eq!(StudioError::NoImage("x".into()).status_code(), 500);
    }

    #[test]
    fn test_no_image_displays_message_verbatim() {
        let err = StudioError::NoImage("the model declined".into());
        assert_eq!(err.to_string(), "the model declined");
    }
}
