use thiserror::Error;

/// Errors produced while talking to the generative-language API.
///
/// The `Display` strings double as the user-facing error messages that the
/// HTTP layer relays in its response body, so their wording is part of the
/// API contract.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// The API answered with a non-success HTTP status. The response body is
    /// not inspected in this case.
    #[error("API request failed with status code {0}")]
    UpstreamStatus(u16),

    /// The request never completed: connection failure, DNS failure, or the
    /// client-side timeout. Never retried.
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered successfully but the completion could not be decoded:
    /// either the response envelope is missing expected keys, or the text the
    /// model produced is not valid JSON.
    #[error("Failed to parse AI response: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, GeminiError>;
