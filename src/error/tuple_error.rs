/// Represents all errors that can occur while building tuples.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TupleError {
    /// The mode string is neither `GRID` nor `LIST`.
    #[error("Unsupported ValuesKind type: {mode}")]
    UnsupportedMode {
        /// The rejected mode string.
        mode: String,
    },
    /// Zip mode was requested over domains of different lengths.
    #[error("Lists do not have the same length")]
    LengthMismatch,
    /// The cross product would exceed the configured size.
    #[error("Too many tuples: limit is {limit}")]
    TooManyTuples {
        /// The configured maximum tuple count.
        limit: usize,
    },
}
