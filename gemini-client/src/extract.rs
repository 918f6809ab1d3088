/// Marker the model emits when it wraps JSON in a fenced code block.
const FENCE_MARKER: &str = "```json";

/// Locate the JSON payload inside a model completion.
///
/// Models sometimes wrap the requested JSON object in a markdown code fence
/// despite being told not to. If the fence marker appears anywhere in the
/// text, the candidate payload is the substring from the first `{` to the
/// last `}` of the whole text, not just the fenced region. If no braces are
/// found in that branch the candidate is empty and will fail JSON parsing
/// downstream. Without the marker, the entire trimmed text is the candidate.
///
/// The heuristic is deliberately unsophisticated: an unrelated brace outside
/// the fence shifts the slice, so this lives in its own function where it can
/// be pinned by tests against adversarial completions.
pub fn extract_json_payload(text: &str) -> &str {
    if text.contains(FENCE_MARKER) {
        match (text.find('{'), text.rfind('}')) {
            (Some(start), Some(end)) if start <= end => &text[start..=end],
            _ => "",
        }
    } else {
        text.trim()
    }
}
