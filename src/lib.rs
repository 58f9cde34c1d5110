//! GenStudio — HTTP gateway for a browser creative studio.
//!
//! The browser picks a feature (free generation, image editing,
//! face-consistent restyling, image analysis), sends a prompt plus optional
//! reference images as data URIs, and this gateway shapes the request into a
//! Gemini `generateContent` call, injects the server-side API key and
//! normalizes the reply into a uniform `{ success, data, error }` envelope.

pub mod catalog;
pub mod config;
pub mod datauri;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod server;
pub mod studio;

pub use catalog::StyleCatalog;
pub use config::Config;
pub use datauri::DataUri;
pub use error::{Result, StudioError};
pub use gemini::{ContentGenerator, GeminiClient};
pub use models::{GenerationRequest, GenerationResult, ResultData};
pub use studio::Studio;
