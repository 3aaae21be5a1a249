use clap::Parser;
use tracing::Level;
use tuplecalc::{
    config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TUPLES, EngineConfig, ServerConfig},
    service::server::Server,
};

/// tuplecalc serves batch evaluations of arithmetic expressions over
/// variable domains on a line-oriented TCP protocol.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Port to listen on.
    port: u16,

    /// Number of connection worker threads (defaults to one per CPU).
    #[arg(long)]
    threads: Option<usize>,

    /// Maximum bracket nesting depth of an expression.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum number of values per domain and tuples per request.
    #[arg(long, default_value_t = DEFAULT_MAX_TUPLES)]
    max_tuples: usize,

    /// Fail the request on the first malformed expression instead of
    /// skipping it.
    #[arg(long)]
    strict: bool,

    /// Increases log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = ServerConfig { port:    args.port,
                                threads: args.threads,
                                engine:  EngineConfig { max_depth:          args.max_depth,
                                                        max_tuples:         args.max_tuples,
                                                        strict_expressions: args.strict, }, };

    let server = Server::bind(&config).unwrap_or_else(|e| {
                                          tracing::error!(error = %e, "failed to start");
                                          std::process::exit(1);
                                      });

    server.run();
}
