use ca_gemini::{GeminiClient, RetryPolicy, RetryingGenerator};
use ca_server::logger::{self, LogSink};
use ca_server::{AppState, build_router};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ca_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let sink = LogSink::from_config(&config.logging)?;
    logger::initialize(config.logging.level, sink)?;

    info!("Starting ca-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Gemini client wrapped with rate limit retries
    let client = GeminiClient::new(&config.gemini)?;
    let policy = RetryPolicy::from(&config.retry);
    info!(
        "Gemini model {} (max {} attempts per request)",
        client.model(),
        policy.max_attempts
    );
    let generator = RetryingGenerator::new(client, policy);

    let app = build_router(AppState::new(Arc::new(generator)));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
