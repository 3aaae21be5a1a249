/// Expression syntax errors.
///
/// Raised while recognizing a single expression text. Every variant carries
/// the byte offset (in the whitespace-stripped text) where recognition
/// failed, together with the offending character or the missing
/// expectation.
pub mod syntax_error;
/// Variable domain errors.
///
/// Raised while splitting a domain specification into
/// `name:start:step:end` records and generating their value sequences.
pub mod domain_error;
/// Tuple generation errors.
///
/// Covers unsupported generation modes, zip-mode length mismatches and
/// cross products that exceed the configured size.
pub mod tuple_error;
/// Evaluation and reduction errors.
///
/// Contains everything that can fail once expressions and tuples exist:
/// unbound variables and reductions over empty inputs.
pub mod eval_error;
/// Protocol request errors.
///
/// Raised by the service layer when a request line does not have the shape
/// of a computation or statistics request.
pub mod request_error;

pub use domain_error::DomainError;
pub use eval_error::EvalError;
pub use request_error::RequestError;
pub use syntax_error::SyntaxError;
pub use tuple_error::TupleError;

/// The family an [`Error`] belongs to.
///
/// Callers use the kind to decide how to react (for instance, whether a
/// malformed expression may be skipped) without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed expression text.
    Syntax,
    /// Malformed variable domain record.
    DomainSpec,
    /// Unsupported tuple mode or incompatible domains.
    TupleMode,
    /// A variable could not be resolved while evaluating.
    Evaluation,
    /// A reduction was requested over nothing.
    EmptyInput,
    /// The request line itself is malformed.
    Request,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Syntax => "Syntax",
            Self::DomainSpec => "DomainSpec",
            Self::TupleMode => "TupleMode",
            Self::Evaluation => "Evaluation",
            Self::EmptyInput => "EmptyInput",
            Self::Request => "Request",
        };
        write!(f, "{name}")
    }
}

/// Any error produced while serving a computation.
///
/// The message is the one of the wrapped error; [`Error::kind`] gives the
/// family.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// See [`SyntaxError`].
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// See [`DomainError`].
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// See [`TupleError`].
    #[error(transparent)]
    Tuple(#[from] TupleError),
    /// See [`EvalError`].
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// See [`RequestError`].
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl Error {
    /// Returns the family of this error.
    ///
    /// # Example
    /// ```
    /// use tuplecalc::error::{Error, ErrorKind, EvalError};
    ///
    /// let err = Error::from(EvalError::EmptyTuples);
    /// assert_eq!(err.kind(), ErrorKind::EmptyInput);
    ///
    /// let err = Error::from(EvalError::UnknownVariable { name: "z".to_string() });
    /// assert_eq!(err.kind(), ErrorKind::Evaluation);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Domain(_) => ErrorKind::DomainSpec,
            Self::Tuple(_) => ErrorKind::TupleMode,
            Self::Eval(EvalError::UnknownVariable { .. }) => ErrorKind::Evaluation,
            Self::Eval(EvalError::EmptyTuples | EvalError::NoExpressions { .. }) => {
                ErrorKind::EmptyInput
            },
            Self::Request(_) => ErrorKind::Request,
        }
    }
}
