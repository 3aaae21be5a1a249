/// Represents all errors that can occur while parsing variable domains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A record did not split into exactly `name:start:step:end`.
    #[error("Invalid variable format: {record}")]
    InvalidFormat {
        /// The whole offending record.
        record: String,
    },
    /// One of the numeric fields is not a finite number.
    #[error("Invalid numeric value for variable: {name}")]
    InvalidNumber {
        /// The variable whose record is malformed.
        name: String,
    },
    /// The step is zero or negative.
    #[error("Step must be greater than 0 for variable: {name}")]
    NonPositiveStep {
        /// The variable whose step is invalid.
        name: String,
    },
    /// The same variable is declared twice.
    #[error("Duplicate variable: {name}")]
    DuplicateVariable {
        /// The repeated name.
        name: String,
    },
    /// The generated sequence would exceed the configured size.
    #[error("Too many values for variable {name}: limit is {limit}")]
    TooManyValues {
        /// The variable whose domain is too long.
        name:  String,
        /// The configured maximum length.
        limit: usize,
    },
}
