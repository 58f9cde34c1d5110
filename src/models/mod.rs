pub mod envelope;
pub mod gemini;
pub mod request;

pub use envelope::*;
pub use gemini::*;
pub use request::*;
