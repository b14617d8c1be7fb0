use anyhow::Result;
use knowledge_api::{ApiConfig, ApiServer};
use knowledge_core::Retriever;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "knowledge_service=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Knowledge Retrieval Service...");

    // Load environment variables
    dotenv::dotenv().ok();

    let config = ApiConfig::from_env()?;
    let retriever = Arc::new(Retriever::new());

    let server = ApiServer::new(config, retriever);

    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
