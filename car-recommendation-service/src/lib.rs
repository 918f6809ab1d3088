pub mod models;
pub mod prompt;
pub mod recommender;
pub mod service;

pub use models::{AdvancedParams, RecommendationRequest};
pub use recommender::{RecommendationError, fetch_recommendations};
pub use service::{AppState, create_app};
