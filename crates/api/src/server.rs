use crate::{
    middleware::{
        cors_layer, rate_limiting_middleware, request_id_middleware, request_logging_middleware,
        timeout_layer, RateLimiter,
    },
    routes::{create_routes, not_found_handler},
    ApiConfig,
};
use axum::Router;
use knowledge_core::Retriever;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct ApiServer {
    config: ApiConfig,
    retriever: Arc<Retriever>,
    rate_limiter: Arc<RateLimiter>,
}

impl ApiServer {
    pub fn new(config: ApiConfig, retriever: Arc<Retriever>) -> Self {
        let rate_limiter = Arc::new(RateLimiter::new(
            config.rate_limit_requests_per_minute,
            Duration::from_secs(60),
        ));

        Self {
            config,
            retriever,
            rate_limiter,
        }
    }

    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app = self.create_app();
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;

        info!("Starting knowledge service on {}", addr);
        info!("CORS origins: {:?}", self.config.cors_origins);
        info!(
            "Rate limit: {} requests/minute",
            self.config.rate_limit_requests_per_minute
        );

        self.start_background_tasks();

        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("Knowledge service listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Knowledge service stopped");
        Ok(())
    }

    pub fn create_app(&self) -> Router {
        create_routes(self.retriever.clone())
            // Fallback for unmatched routes
            .fallback(not_found_handler)
            .layer(
                ServiceBuilder::new()
                    // Outermost layers (applied last)
                    .layer(TraceLayer::new_for_http())
                    .layer(timeout_layer())
                    .layer(cors_layer(&self.config))
                    // Request tracking and logging
                    .layer(axum::middleware::from_fn(request_id_middleware))
                    .layer(axum::middleware::from_fn(request_logging_middleware))
                    // Throttling
                    .layer(axum::middleware::from_fn_with_state(
                        self.rate_limiter.clone(),
                        rate_limiting_middleware,
                    )),
            )
    }

    fn start_background_tasks(&self) {
        let rate_limiter = self.rate_limiter.clone();

        // Rate limiter cleanup task
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(300));
            loop {
                interval.tick().await;
                rate_limiter.cleanup_old_entries();
            }
        });

        info!("Background tasks started");
    }

    pub fn get_config(&self) -> &ApiConfig {
        &self.config
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        },
    }
}
