pub mod client;
pub mod error;
pub mod extract;
pub mod types;

// Re-export commonly used types
pub use client::GeminiClient;
pub use error::{GeminiError, Result};
pub use extract::extract_json_payload;
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
