/// Represents all errors that can occur while parsing one expression.
///
/// Positions are byte offsets into the expression text after whitespace has
/// been removed, which is the text the parser actually walks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// No constant, variable or opening bracket starts at the cursor.
    #[error("Unexpected char at {position}: '{found}'")]
    UnexpectedChar {
        /// Offset of the offending character.
        position: usize,
        /// The offending character.
        found:    char,
    },
    /// The text ended where more input was required.
    #[error("Unexpected end of input at {position}: expected {expected}")]
    UnexpectedEnd {
        /// Offset of the end of the text.
        position: usize,
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A left operand was not followed by an operator symbol.
    #[error("Unexpected char at {position} instead of operator: '{found}'")]
    MissingOperator {
        /// Offset where the operator was expected.
        position: usize,
        /// The character found instead.
        found:    char,
    },
    /// An operator-position symbol is not one of `+ - * / ^`.
    #[error("Unknown operator at {position}: '{symbol}'")]
    UnknownOperator {
        /// Offset of the symbol.
        position: usize,
        /// The unrecognized symbol.
        symbol:   String,
    },
    /// A right operand was not followed by `)`.
    #[error("Unexpected char at {position} instead of closed bracket: '{found}'")]
    MissingClosingBracket {
        /// Offset where `)` was expected.
        position: usize,
        /// The character found instead.
        found:    char,
    },
    /// A complete expression was followed by more text.
    #[error("Unexpected trailing input at {position}: '{rest}'")]
    TrailingInput {
        /// Offset of the first unconsumed character.
        position: usize,
        /// The unconsumed text.
        rest:     String,
    },
    /// Brackets are nested deeper than the configured limit.
    #[error("Nesting too deep at {position}: limit is {limit}")]
    NestingTooDeep {
        /// Offset of the bracket that crossed the limit.
        position: usize,
        /// The configured maximum depth.
        limit:    usize,
    },
}

impl SyntaxError {
    /// Returns the offset the error is localized at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedChar { position, .. }
            | Self::UnexpectedEnd { position, .. }
            | Self::MissingOperator { position, .. }
            | Self::UnknownOperator { position, .. }
            | Self::MissingClosingBracket { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}
