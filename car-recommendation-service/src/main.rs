use car_recommendation_service::{AppState, create_app};
use gemini_client::GeminiClient;
use tokio::net::TcpListener;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // The API key is injected at process start and never hard-coded.
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Error: GEMINI_API_KEY environment variable is required");
            std::process::exit(1);
        }
    };

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or(5000);

    let state = AppState {
        gemini: GeminiClient::new(api_key)?,
    };
    let app = create_app(state);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    let addr = listener.local_addr()?;

    info!("Car recommendation service listening on {}", addr);
    info!("Health check endpoint: http://{}/health", addr);
    info!(
        "Recommendation endpoint: POST http://{}/get-car-recommendations",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
