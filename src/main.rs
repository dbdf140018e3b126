use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use trochlear_site::config::Config;
use trochlear_site::server::{self, AppState, Submitter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trochlear_site=info".parse()?),
        )
        .init();

    info!("Starting Trochlear site");

    // Load configuration from environment
    let config = Config::from_env();

    let submitter = Submitter::from_config(&config);
    match &submitter {
        Submitter::Relay { endpoint, .. } => {
            info!("Contact form relays to {}", endpoint);
        }
        Submitter::Mailto { address } => {
            info!("No form endpoint configured, falling back to mailto:{}", address);
        }
    }

    let state = Arc::new(AppState { submitter });
    let app = server::build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
