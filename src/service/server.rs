use std::{
    io::{self, BufReader},
    net::{SocketAddr, TcpListener, TcpStream},
    sync::Arc,
};

use crate::{
    config::{EngineConfig, ServerConfig},
    service::{session::serve, stats::Stats},
};

/// Errors raised while starting the service.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listening socket could not be opened.
    #[error("Cannot listen on {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr:   SocketAddr,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// A worker count of zero was requested.
    #[error("Worker threads must be >= 1 when set")]
    InvalidThreads,
    /// The worker pool could not be created.
    #[error("Cannot build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// A bound TCP service.
///
/// Every accepted connection is served on a worker of a shared pool, so
/// several clients are handled concurrently while the statistics stay
/// global.
///
/// ## Usage
///
/// ```no_run
/// use tuplecalc::{config::ServerConfig, service::server::Server};
///
/// let server = Server::bind(&ServerConfig::new(9000)).unwrap();
/// server.run();
/// ```
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    pool:     rayon::ThreadPool,
    stats:    Arc<Stats>,
    engine:   EngineConfig,
}

impl Server {
    /// Opens the listening socket and the worker pool.
    ///
    /// # Errors
    /// Returns [`ServerError::Bind`] if the port cannot be opened and
    /// [`ServerError::InvalidThreads`] or [`ServerError::Pool`] if the
    /// worker pool cannot be built.
    pub fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let pool = build_thread_pool(config.threads)?;
        let addr = config.bind_addr();
        let listener = TcpListener::bind(addr).map_err(|source| ServerError::Bind { addr, source })?;

        Ok(Self { listener,
                  pool,
                  stats: Arc::new(Stats::new()),
                  engine: config.engine })
    }

    /// Returns the address actually bound, useful when the port was `0`.
    ///
    /// # Errors
    /// Propagates the socket error.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Returns the statistics shared by all connections.
    #[must_use]
    pub fn stats(&self) -> Arc<Stats> {
        Arc::clone(&self.stats)
    }

    /// Accepts connections forever.
    ///
    /// Accept failures are logged and do not stop the loop.
    pub fn run(&self) {
        match self.local_addr() {
            Ok(addr) => tracing::info!(%addr, threads = self.pool.current_num_threads(), "listening"),
            Err(e) => tracing::warn!(error = %e, "cannot read local address"),
        }

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let stats = Arc::clone(&self.stats);
                    let engine = self.engine;
                    self.pool.spawn(move || handle_client(&stream, &stats, &engine));
                },
                Err(e) => tracing::error!(error = %e, "failed to accept connection"),
            }
        }
    }
}

fn handle_client(stream: &TcpStream, stats: &Stats, engine: &EngineConfig) {
    let peer = stream.peer_addr().map_or_else(|_| "unknown".to_string(), |addr| addr.to_string());
    let span = tracing::info_span!("client", %peer);
    let _guard = span.enter();

    tracing::info!("connected");
    match serve(BufReader::new(stream), stream, stats, engine) {
        Ok(()) => tracing::info!("disconnected"),
        Err(e) => tracing::warn!(error = %e, "connection closed with error"),
    }
}

fn build_thread_pool(threads: Option<usize>) -> Result<rayon::ThreadPool, ServerError> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ServerError::InvalidThreads);
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("tuplecalc-worker-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threads_is_rejected() {
        assert!(matches!(build_thread_pool(Some(0)), Err(ServerError::InvalidThreads)));
    }

    #[test]
    fn explicit_thread_count_is_honored() {
        let pool = build_thread_pool(Some(2)).unwrap();
        assert_eq!(pool.current_num_threads(), 2);
    }
}
