//! Status endpoint for the game server.
//!
//! Answers every method with the same fixed JSON literal. Load balancers and
//! orchestrators use it to check that the process is up and serving HTTP.

use axum::response::IntoResponse;
use http::header::CONTENT_TYPE;

/// Fixed body returned by the status endpoint
pub const STATUS_BODY: &str = r#"{"ok":true}"#;

/// Status handler.
///
/// Ignores method, headers, query string and request body.
pub async fn status() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], STATUS_BODY)
}
