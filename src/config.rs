use std::net::{Ipv4Addr, SocketAddr};

/// Default maximum bracket nesting accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Default maximum number of values per domain and tuples per request.
pub const DEFAULT_MAX_TUPLES: usize = 1_000_000;

/// Limits and policies applied to every computation.
///
/// ## Usage
///
/// `EngineConfig` is built once at startup and shared read-only by every
/// connection. [`EngineConfig::default`] gives the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum bracket nesting depth of a single expression.
    pub max_depth:          usize,
    /// Maximum length of a single domain and of a tuple list.
    pub max_tuples:         usize,
    /// Abort the request on the first malformed expression instead of
    /// skipping it.
    pub strict_expressions: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_depth:          DEFAULT_MAX_DEPTH,
               max_tuples:         DEFAULT_MAX_TUPLES,
               strict_expressions: false, }
    }
}

/// Settings of the TCP service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to listen on; `0` asks the OS for a free one.
    pub port:    u16,
    /// Number of connection workers; `None` uses one per available CPU.
    pub threads: Option<usize>,
    /// Limits applied to each computation.
    pub engine:  EngineConfig,
}

impl ServerConfig {
    /// Creates a configuration listening on `port` with default limits.
    #[must_use]
    pub fn new(port: u16) -> Self {
        Self { port,
               threads: None,
               engine: EngineConfig::default() }
    }

    /// Returns the address the listener binds to (all interfaces).
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
