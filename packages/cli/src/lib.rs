use axum::http::Method;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod config;

pub use config::{Config, ConfigError};

use taskhub_ai::Summarizer;
use taskhub_api::{create_router, AppState};

#[cfg(test)]
mod tests;

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env()?;

    println!("🚀 Starting Task Manager API server...");
    println!("📡 Server will run on http://localhost:{}", config.port);

    let pool = taskhub_storage::connect(&config.database_path).await?;

    let summarizer = match &config.openai_model {
        Some(model) => Summarizer::with_model(config.openai_api_key.clone(), model.clone()),
        None => Summarizer::new(config.openai_api_key.clone()),
    };

    let state = AppState::new(pool, summarizer);

    // The service accepts cross-origin requests from any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Create the router with CORS
    let app = create_router(state).layer(cors);

    // Create socket address
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    println!("✅ Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
