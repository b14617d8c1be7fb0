use crate::{error::ApiError, ApiConfig};
use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

// CORS configuration, mirroring what the frontend expects
pub fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: AllowOrigin = if config.cors_origins.contains(&"*".to_string()) {
        Any.into()
    } else {
        config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>()
            .into()
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .max_age(Duration::from_secs(3600))
}

// Logs every request on the way in and its status and latency on the way out
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let client = client_address(&request);
    let start = Instant::now();

    info!("Incoming request: {} {} from {}", method, uri, client);

    let response = next.run(request).await;

    info!(
        "Outgoing response: {} {} - {} - {:?}",
        method,
        uri,
        response.status(),
        start.elapsed()
    );

    response
}

// Attaches a fresh x-request-id to the request and echoes it on the response
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        request
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), value.clone());

        let mut response = next.run(request).await;
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), value);
        return response;
    }

    next.run(request).await
}

/// Fixed-window rate limiter keyed by client address.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    requests: Arc<Mutex<HashMap<String, Vec<Instant>>>>,
    max_requests: u32,
    window_duration: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window_duration: Duration) -> Self {
        Self {
            requests: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window_duration,
        }
    }

    /// Records a request for `client_id` and reports whether it is still
    /// inside the window's budget.
    pub fn check_rate_limit(&self, client_id: &str) -> bool {
        let mut requests = self.requests.lock().unwrap();
        let now = Instant::now();

        let client_requests = requests.entry(client_id.to_string()).or_default();
        client_requests.retain(|&seen| now.duration_since(seen) < self.window_duration);

        if client_requests.len() < self.max_requests as usize {
            client_requests.push(now);
            true
        } else {
            false
        }
    }

    /// Drops clients whose whole history has aged out of the window.
    pub fn cleanup_old_entries(&self) {
        let mut requests = self.requests.lock().unwrap();
        let now = Instant::now();

        requests.retain(|_, client_requests| {
            client_requests.retain(|&seen| now.duration_since(seen) < self.window_duration);
            !client_requests.is_empty()
        });
    }
}

pub async fn rate_limiting_middleware(
    State(rate_limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client_id = client_address(&request);

    if rate_limiter.check_rate_limit(&client_id) {
        Ok(next.run(request).await)
    } else {
        warn!("Rate limit exceeded for client: {}", client_id);
        Err(ApiError::RateLimit)
    }
}

// Client address resolution for logging and rate limiting. Behind a proxy
// the forwarded headers carry the real address.
fn client_address(request: &Request) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .or_else(|| {
            request
                .headers()
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
        })
        .unwrap_or("unknown")
        .to_string()
}

// Timeout middleware
pub fn timeout_layer() -> tower_http::timeout::TimeoutLayer {
    tower_http::timeout::TimeoutLayer::new(Duration::from_secs(30))
}
