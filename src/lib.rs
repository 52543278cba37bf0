//! Game server status service.
//!
//! Listens on the port named by `GAME_PORT` (default 30000) and answers
//! `/status` with a fixed `{"ok":true}` body.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::ServerError;
pub use crate::http::start_server;
pub use routes::create_router;
