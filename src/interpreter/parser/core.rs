use crate::{
    ast::{BinaryOperator, Expr},
    config::DEFAULT_MAX_DEPTH,
    error::SyntaxError,
    interpreter::lexer::{Span, Token, next_token},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a single expression with the default nesting limit.
///
/// Whitespace is removed before parsing, so `( x + 1 )` and `(x+1)` are the
/// same expression. Error positions refer to the text without whitespace.
///
/// Grammar:
/// ```text
///     expr     := constant | variable | "(" expr operator expr ")"
///     constant := [0-9]+ ("." [0-9]+)?
///     variable := [a-z] [a-z0-9]*
///     operator := "+" | "-" | "*" | "/" | "^"
/// ```
///
/// # Errors
/// Returns a [`SyntaxError`] if the text is not exactly one expression.
///
/// # Example
/// ```
/// use tuplecalc::{
///     ast::{BinaryOperator, Expr},
///     error::SyntaxError,
///     interpreter::parser::core::parse_expression,
/// };
///
/// let expr = parse_expression("(x + 2)").unwrap();
/// assert_eq!(expr,
///            Expr::binary(Expr::Variable { name: "x".to_string() },
///                         BinaryOperator::Add,
///                         Expr::Constant { value: 2.0 }));
///
/// let err = parse_expression("(x2)").unwrap_err();
/// assert_eq!(err, SyntaxError::MissingOperator { position: 3, found: ')' });
/// ```
pub fn parse_expression(text: &str) -> ParseResult<Expr> {
    parse_expression_with_depth(text, DEFAULT_MAX_DEPTH)
}

/// Parses a single expression, rejecting nesting deeper than `max_depth`
/// brackets.
///
/// # Errors
/// Returns a [`SyntaxError`] if the text is not exactly one expression or
/// if it nests more than `max_depth` brackets.
///
/// # Example
/// ```
/// use tuplecalc::{error::SyntaxError, interpreter::parser::core::parse_expression_with_depth};
///
/// assert!(parse_expression_with_depth("((1+2)*3)", 2).is_ok());
///
/// let err = parse_expression_with_depth("(((1+2)*3)-4)", 2).unwrap_err();
/// assert_eq!(err, SyntaxError::NestingTooDeep { position: 2, limit: 2 });
/// ```
pub fn parse_expression_with_depth(text: &str, max_depth: usize) -> ParseResult<Expr> {
    let source: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parser = Parser { source: &source,
                              cursor: 0,
                              depth: 0,
                              max_depth };

    let expr = parser.parse()?;

    if parser.cursor < source.len() {
        return Err(SyntaxError::TrailingInput { position: parser.cursor,
                                                rest:     source[parser.cursor..].to_string(), });
    }

    Ok(expr)
}

/// Cursor state for one parse call.
struct Parser<'a> {
    source:    &'a str,
    cursor:    usize,
    depth:     usize,
    max_depth: usize,
}

impl Parser<'_> {
    /// Parses one expression starting at the cursor.
    ///
    /// Alternatives are tried in order: constant, variable, bracketed
    /// operation. Each alternative only applies when its token starts exactly
    /// at the cursor.
    fn parse(&mut self) -> ParseResult<Expr> {
        if let Some(span) = self.anchored(Token::Constant) {
            self.cursor = span.end;
            let value = span.slice(self.source)
                            .parse()
                            .map_err(|_| self.unexpected_at(span.start, Token::Constant))?;
            return Ok(Expr::Constant { value });
        }

        if let Some(span) = self.anchored(Token::Variable) {
            self.cursor = span.end;
            return Ok(Expr::Variable { name: span.slice(self.source).to_string() });
        }

        if let Some(span) = self.anchored(Token::OpenBracket) {
            return self.parse_operation(span);
        }

        Err(self.unexpected_at(self.cursor, Token::Constant))
    }

    /// Parses `expr operator expr ")"` after an opening bracket.
    fn parse_operation(&mut self, open: Span) -> ParseResult<Expr> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep { position: open.start,
                                                     limit:    self.max_depth, });
        }
        self.cursor = open.end;
        self.depth += 1;

        let left = self.parse()?;

        let operator = self.expect(Token::Operator)?;
        self.cursor = operator.end;

        let right = self.parse()?;

        let close = self.expect(Token::ClosedBracket)?;
        self.cursor = close.end;
        self.depth -= 1;

        let symbol = operator.slice(self.source);
        let op = BinaryOperator::from_symbol(symbol).ok_or_else(|| {
                     SyntaxError::UnknownOperator { position: operator.start,
                                                    symbol:   symbol.to_string(), }
                 })?;

        Ok(Expr::binary(left, op, right))
    }

    /// Finds a token of `kind` and keeps it only if it starts at the cursor.
    fn anchored(&self, kind: Token) -> Option<Span> {
        next_token(kind, self.source, self.cursor).filter(|span| span.start == self.cursor)
    }

    /// Like [`Self::anchored`], but reports what was found instead.
    fn expect(&self, kind: Token) -> ParseResult<Span> {
        self.anchored(kind)
            .ok_or_else(|| self.unexpected_at(self.cursor, kind))
    }

    /// Builds the error for a missing `expected` token at `position`.
    fn unexpected_at(&self, position: usize, expected: Token) -> SyntaxError {
        let Some(found) = self.source[position..].chars().next() else {
            let expected = match expected {
                Token::Constant | Token::Variable | Token::OpenBracket => "expression",
                other => other.describe(),
            };
            return SyntaxError::UnexpectedEnd { position, expected };
        };

        match expected {
            Token::Operator => SyntaxError::MissingOperator { position, found },
            Token::ClosedBracket => SyntaxError::MissingClosingBracket { position, found },
            Token::Constant | Token::Variable | Token::OpenBracket => {
                SyntaxError::UnexpectedChar { position, found }
            },
        }
    }
}
