use gemini_client::{GeminiClient, GeminiError, extract_json_payload};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::models::RecommendationRequest;
use crate::prompt::build_prompt;

/// Everything that can go wrong between receiving a request and producing a
/// recommendation list. The HTTP layer turns each variant into an in-band
/// error body; nothing here becomes a non-200 response.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error(transparent)]
    Gemini(#[from] GeminiError),

    /// The completion parsed as JSON but the top-level `recommendations`
    /// array is missing.
    #[error("Invalid response format from AI")]
    InvalidFormat,
}

/// Fetch car recommendations for a request.
///
/// Linear pipeline: render the prompt, call the model once, slice the JSON
/// payload out of the completion, parse it, and check that `recommendations`
/// is an array. On success the parsed object is returned unchanged; the
/// individual entries the model produced are passed through without per-field
/// validation.
pub async fn fetch_recommendations(
    client: &GeminiClient,
    request: &RecommendationRequest,
) -> Result<Value, RecommendationError> {
    let prompt = build_prompt(request);
    let completion = client.generate_content(&prompt).await?;

    let payload = extract_json_payload(&completion);
    let parsed: Value = serde_json::from_str(payload)
        .map_err(|e| GeminiError::Parse(e.to_string()))?;

    match parsed.get("recommendations") {
        Some(Value::Array(entries)) => {
            info!(count = entries.len(), "model returned recommendations");
            Ok(parsed)
        }
        _ => Err(RecommendationError::InvalidFormat),
    }
}
