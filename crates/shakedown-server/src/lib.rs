//! Shakedown Web Server
//!
//! Axum-based REST API over the gear optimization engine.
//!
//! - Restrictive CORS policy unless origins are configured
//! - Request size limits (gear list length)
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{error, info};

use shakedown_core::{LighterpackClient, RecommendationEngine};

mod handlers;

/// Default cap on gear list length
pub const DEFAULT_MAX_ITEMS: usize = 500;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Longest gear list accepted by any endpoint
    pub max_items: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub config: ServerConfig,
    pub engine: RecommendationEngine,
    pub lighterpack: LighterpackClient,
}

/// Success envelope around every payload
#[derive(Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Create the application router
pub fn create_router(static_dir: Option<&str>, config: ServerConfig) -> Router {
    create_router_with_options(static_dir, config, LighterpackClient::new())
}

/// Create the application router with a specific Lighterpack client (for testing)
pub fn create_router_with_options(
    static_dir: Option<&str>,
    config: ServerConfig,
    lighterpack: LighterpackClient,
) -> Router {
    let state = Arc::new(AppState {
        config: config.clone(),
        engine: RecommendationEngine::new(),
        lighterpack,
    });

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/shakedown", post(handlers::create_shakedown))
        .route("/price-estimate", post(handlers::estimate_single_price))
        .route("/recommendations", post(handlers::create_starter_list))
        .route("/lighterpack/import", post(handlers::import_lighterpack));

    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    // Serve the web UI if a build directory is provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if config.allowed_origins.is_empty() {
        info!("CORS: same-origin only (set SHAKEDOWN_ALLOWED_ORIGINS to allow others)");
    } else {
        info!("CORS: allowing {}", config.allowed_origins.join(", "));
    }
    info!("Accepting gear lists of up to {} items", config.max_items);

    let app = create_router(static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    /// Per-field problems, for validation failures
    errors: Vec<String>,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            errors: vec![],
            internal: None,
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation errors".to_string(),
            errors,
            internal: None,
        }
    }

    /// Map a core error to a client-facing response
    pub fn from_core(err: shakedown_core::Error) -> Self {
        use shakedown_core::Error;

        match err {
            Error::Validation(errors) => Self::validation(errors),
            Error::Import(message) => Self::bad_request(&message),
            // The list host answered, but not with a list
            Error::Http(e) if e.status().is_some() => Self::bad_request(
                "Unable to fetch Lighterpack page. Please check the URL and try again.",
            ),
            Error::Csv(_) => Self::bad_request("Unable to read the Lighterpack list export"),
            other => Self::from(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let mut body = serde_json::json!({
            "success": false,
            "error": self.message,
        });
        if !self.errors.is_empty() {
            body["errors"] = serde_json::json!(self.errors);
        }

        (self.status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            errors: vec![],
            // Keep full error for logging
            internal: Some(err),
        }
    }
}

#[cfg(test)]
mod tests;
