//! Configuration constants and environment resolution.
//!
//! The only runtime setting is the listening port, taken from `GAME_PORT`.
//! `ServerConfig` is resolved once at startup and never changes afterwards.

use std::ffi::OsString;

// =============================================================================
// Environment
// =============================================================================

/// Environment variable holding the TCP port to listen on
pub const PORT_ENV_VAR: &str = "GAME_PORT";

/// Port used when `GAME_PORT` is unset or empty
pub const DEFAULT_PORT: &str = "30000";

/// Host the listener binds to (all interfaces, dual-stack)
pub const BIND_HOST: &str = "[::]";

/// Host used when the platform cannot open an IPv6 socket
pub const FALLBACK_BIND_HOST: &str = "0.0.0.0";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "game_server=info";

// =============================================================================
// Routes
// =============================================================================

/// Path served by the status handler
pub const STATUS_PATH: &str = "/status";

/// Server configuration resolved from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port text as configured (lossily decoded if not UTF-8). Not
    /// validated here; a bad value surfaces as a bind failure.
    pub port: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Only an unset or empty `GAME_PORT` falls back to [`DEFAULT_PORT`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        match lookup(PORT_ENV_VAR) {
            Some(port) if !port.is_empty() => Self {
                port: port.to_string_lossy().into_owned(),
            },
            _ => Self::default(),
        }
    }

    /// Listen address in `:<port>` form, used for logging.
    pub fn listen_addr(&self) -> String {
        format!(":{}", self.port)
    }

    /// Address handed to the socket bind call.
    pub fn bind_addr(&self) -> String {
        format!("{}{}", BIND_HOST, self.listen_addr())
    }

    /// IPv4-only address tried when [`bind_addr`](Self::bind_addr) is
    /// unsupported by the host.
    pub fn fallback_bind_addr(&self) -> String {
        format!("{}{}", FALLBACK_BIND_HOST, self.listen_addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_port(value: Option<&'static str>) -> impl Fn(&str) -> Option<OsString> {
        move |key: &str| {
            assert_eq!(key, PORT_ENV_VAR);
            value.map(OsString::from)
        }
    }

    #[test]
    fn test_unset_port_uses_default() {
        let config = ServerConfig::from_lookup(lookup_port(None));
        assert_eq!(config.port, "30000");
        assert_eq!(config.listen_addr(), ":30000");
    }

    #[test]
    fn test_empty_port_uses_default() {
        let config = ServerConfig::from_lookup(lookup_port(Some("")));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_port_override() {
        let config = ServerConfig::from_lookup(lookup_port(Some("8080")));
        assert_eq!(config.listen_addr(), ":8080");
        assert_eq!(config.bind_addr(), "[::]:8080");
        assert_eq!(config.fallback_bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port_passed_through() {
        let config = ServerConfig::from_lookup(lookup_port(Some("not-a-number")));
        assert_eq!(config.listen_addr(), ":not-a-number");
        assert_eq!(config.bind_addr(), "[::]:not-a-number");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_port_passed_through() {
        use std::os::unix::ffi::OsStringExt;

        let config =
            ServerConfig::from_lookup(|_: &str| Some(OsString::from_vec(b"80\xff".to_vec())));
        assert_ne!(config, ServerConfig::default());
        assert_eq!(config.port, "80\u{FFFD}");
    }
}
