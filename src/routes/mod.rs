//! HTTP route table.
//!
//! A single route is registered: `/status`, for every method. Anything else
//! falls through to the router's default 404.

pub mod status;

use axum::{middleware, routing::any, Router};

use crate::config::STATUS_PATH;
use crate::middleware::request_id_layer;

/// Creates the Axum router with the status route.
pub fn create_router() -> Router {
    let status_routes = Router::new().route(STATUS_PATH, any(status::status));

    Router::new()
        .merge(status_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
