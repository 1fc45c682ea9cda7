//! Vision Text Server
//!
//! A small HTTP service that accepts an uploaded PDF or image and returns
//! the text extracted from it. PDF parsing is delegated to `pdf-extract`
//! and image OCR to Tesseract; this crate is the dispatch and HTTP glue
//! in between.
//!
//! # Modules
//!
//! - `config`: immutable runtime configuration read from the environment
//! - `error`: the request error taxonomy and its HTTP mapping
//! - `extract`: MIME dispatch plus the PDF and image extraction paths
//! - `routes`: HTTP endpoints

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use config::Config;

/// Build the application router.
///
/// Cross-origin access is limited to the configured origins for GET and
/// POST with `Content-Type`/`Authorization` headers.
pub fn app(config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::extract::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
