use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::{get, post},
};
use gemini_client::GeminiClient;
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error, info, warn};

use crate::models::RecommendationRequest;
use crate::recommender::fetch_recommendations;

#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/get-car-recommendations", post(recommend_cars))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

async fn health_check() -> &'static str {
    "OK"
}

/// Every failure is reported in-band with this shape; the HTTP status stays 200
/// and callers check for the `error` key.
fn error_result(message: &str) -> Value {
    json!({
        "error": message,
        "recommendations": []
    })
}

async fn recommend_cars(
    State(state): State<AppState>,
    body: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Json<Value> {
    // A body the extractor cannot decode maps to the catch-all server error,
    // still delivered as a 200 JSON body.
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("rejected request body: {}", rejection.body_text());
            return Json(error_result(&format!(
                "Server error: {}",
                rejection.body_text()
            )));
        }
    };

    info!(
        car_type = %request.car_type,
        budget = %request.budget,
        fuel_type = %request.fuel_type,
        transmission = %request.transmission,
        car_brand = %request.car_brand,
        "received car recommendation request"
    );
    debug!(
        advanced = ?request.advanced,
        "advanced filters accepted but not included in the prompt"
    );

    match fetch_recommendations(&state.gemini, &request).await {
        Ok(result) => Json(result),
        Err(e) => {
            error!("recommendation fetch failed: {}", e);
            Json(error_result(&e.to_string()))
        }
    }
}
