//! HTTP server module.
//!
//! Binds the listener from `ServerConfig` and runs the accept loop until the
//! process is killed. There is no TLS and no graceful shutdown.

mod server;

pub use server::{bind_listener, serve, start_server};
