/// Line protocol.
///
/// Decodes request lines into typed requests and renders responses, including
/// the handling time suffix.
pub mod protocol;
/// Request statistics shared by all connections.
pub mod stats;
/// Computation pipeline.
///
/// Runs one computation request through domain parsing, tuple generation,
/// expression parsing and reduction, applying the configured limits and the
/// malformed-expression policy.
pub mod compute;
/// Per-connection request loop.
pub mod session;
/// TCP listener and worker pool.
pub mod server;
