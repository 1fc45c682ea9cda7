//! Liveness and smoke-check endpoints
//!
//! Both endpoints answer plain text, unlike the rest of the API.

use axum::{routing::get, Router};

/// GET /
pub async fn root() -> &'static str {
    "Backend API is running!"
}

/// GET /api/test
pub async fn api_test() -> &'static str {
    "API test endpoint is working!"
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/test", get(api_test))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn liveness_messages_are_stable() {
        assert_eq!(root().await, "Backend API is running!");
        assert_eq!(api_test().await, "API test endpoint is working!");
    }
}
