//! Retirement income tax calculator API.
//!
//! Serves the JSON endpoint `POST /calc-tax`, the HTML calculator form at `/`
//! and a health check. All calculation happens in [`tax_core`].

pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod logging;
pub mod pages;
pub mod utils;

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use config::ServerConfig;

fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

/// Builds the application router.
///
/// # Errors
///
/// Fails if the configured CORS origin is not a valid header value.
pub fn create_router(config: &ServerConfig) -> Result<Router> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid allowed origin '{}'", config.allowed_origin))?;

    Ok(Router::new()
        .route("/", get(handlers::show_form).post(handlers::submit_form))
        .route("/calc-tax", post(handlers::calc_tax))
        .route("/health", get(handlers::health))
        .layer(cors_layer(origin))
        .layer(TraceLayer::new_for_http()))
}
