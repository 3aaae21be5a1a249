/// Represents all errors that can occur while decoding a request line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The line does not have three `;`-separated parts.
    #[error("Invalid computation request format")]
    InvalidFormat,
    /// The first part is not `<Computation>_<Values>`.
    #[error("Invalid computation type format")]
    InvalidKindFormat,
    /// The computation kind is not MIN, MAX, AVG or COUNT.
    #[error("Invalid computation type: {kind}")]
    UnknownComputation {
        /// The rejected kind.
        kind: String,
    },
    /// The line starts with `STAT_` but names no known statistic.
    #[error("Invalid STAT request")]
    UnknownStat,
}
