use serde::Deserialize;

fn default_budget() -> String {
    "50000".to_string()
}

/// Car-shopping preferences as posted by the frontend.
///
/// Every field is optional on the wire: `budget` falls back to `"50000"`,
/// everything else to empty. An absent or empty field never fails the
/// request, it just loosens the prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub car_type: String,
    #[serde(default = "default_budget")]
    pub budget: String,
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub transmission: String,
    #[serde(default)]
    pub car_brand: String,
    /// Advanced filters. Collected from the request but not yet woven into
    /// the prompt text; kept so the endpoint accepts them without error.
    #[serde(flatten)]
    pub advanced: AdvancedParams,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvancedParams {
    #[serde(default)]
    pub seats: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub drivetrain: String,
    #[serde(default)]
    pub features: Vec<String>,
}
