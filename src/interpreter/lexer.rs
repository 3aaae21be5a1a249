use logos::Logos;

/// Represents the kind of a lexical token in expression text.
///
/// The lexer runs over text from which whitespace has already been removed,
/// so there is no skip rule: any character belongs to some token class.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+\.[0-9]+")]
    #[regex(r"[0-9]+")]
    Constant,
    /// Variable names such as `x` or `x1`.
    #[regex(r"[a-z][a-z0-9]*")]
    Variable,
    /// Any single character in operator position.
    ///
    /// The class is deliberately wider than the operator table so that an
    /// unsupported symbol such as `%` is reported as an unknown operator
    /// instead of a missing one. A side effect is that a dangling `.` after
    /// digits is read as an operator, so `(1.+2)` fails on the `+` that
    /// follows it.
    #[regex(r"[^0-9a-z()]")]
    Operator,
    /// `(`
    #[token("(")]
    OpenBracket,
    /// `)`
    #[token(")")]
    ClosedBracket,
}

impl Token {
    /// Describes the token kind for error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Variable => "variable",
            Self::Operator => "operator",
            Self::OpenBracket => "'('",
            Self::ClosedBracket => "')'",
        }
    }
}

/// A half-open `[start, end)` byte range into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end:   usize,
}

impl Span {
    /// Returns the slice of `source` covered by the span.
    #[must_use]
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}

/// Finds the next token of `kind` at or after `from`.
///
/// The search is not anchored: the first token of the requested kind
/// anywhere in the rest of `source` is returned. Callers that need the token
/// to start exactly at `from` must compare [`Span::start`] themselves.
///
/// # Parameters
/// - `kind`: The token kind to look for.
/// - `source`: Whitespace-free text to scan.
/// - `from`: Byte offset to start scanning at.
///
/// # Returns
/// The span of the first matching token, or `None` if the rest of the text
/// holds no token of that kind.
///
/// # Example
/// ```
/// use tuplecalc::interpreter::lexer::{Span, Token, next_token};
///
/// let source = "(x1+2.5)";
/// assert_eq!(next_token(Token::Variable, source, 0), Some(Span { start: 1, end: 3 }));
/// assert_eq!(next_token(Token::Constant, source, 0), Some(Span { start: 4, end: 7 }));
/// assert_eq!(next_token(Token::OpenBracket, source, 1), None);
/// ```
#[must_use]
pub fn next_token(kind: Token, source: &str, from: usize) -> Option<Span> {
    let rest = source.get(from..)?;

    Token::lexer(rest).spanned()
                      .find_map(|(token, range)| match token {
                          Ok(found) if found == kind => Some(Span { start: from + range.start,
                                                                    end:   from + range.end, }),
                          _ => None,
                      })
}
