//! HTTP server startup logic.

use std::io;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Bind the TCP listener for the configured port on all interfaces.
///
/// Binds a dual-stack IPv6 socket, falling back to IPv4 only when the host
/// has no IPv6 support. The port text is not validated beforehand; a
/// non-numeric or out-of-range value fails here like any other bind error.
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let source = match TcpListener::bind(config.bind_addr()).await {
        Ok(listener) => return Ok(listener),
        Err(e) => e,
    };

    if !is_address_family_error(&source) {
        return Err(ServerError::Bind {
            addr: config.listen_addr(),
            source,
        });
    }

    tracing::debug!(error = %source, "IPv6 bind failed, retrying on IPv4");
    TcpListener::bind(config.fallback_bind_addr())
        .await
        .map_err(|_| ServerError::Bind {
            addr: config.listen_addr(),
            source,
        })
}

/// Errors that mean the IPv6 socket itself is unavailable, as opposed to
/// a bad or busy port.
fn is_address_family_error(err: &io::Error) -> bool {
    !matches!(
        err.kind(),
        io::ErrorKind::AddrInUse | io::ErrorKind::InvalidInput | io::ErrorKind::PermissionDenied
    )
}

/// Serve `app` on an already bound listener. Only returns on error.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Start the HTTP server based on configuration.
///
/// This function blocks for the lifetime of the process.
pub async fn start_server(app: Router, config: &ServerConfig) -> Result<(), ServerError> {
    let listener = bind_listener(config).await?;
    tracing::info!(
        port = %config.port,
        "Game server listening on {}",
        config.listen_addr()
    );

    serve(listener, app).await
}
