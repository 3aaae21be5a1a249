/// Represents all errors that can occur during evaluation and reduction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// An expression references a name that the tuple does not bind.
    #[error("Variable not found: {name}")]
    UnknownVariable {
        /// The unbound name.
        name: String,
    },
    /// A reduction was requested over an empty tuple list.
    #[error("The tuple list cannot be empty")]
    EmptyTuples,
    /// A value-producing reduction was requested without expressions.
    #[error("No valid expression to compute {kind}")]
    NoExpressions {
        /// The requested computation kind.
        kind: String,
    },
}
