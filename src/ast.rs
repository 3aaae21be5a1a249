/// Represents a binary operator.
///
/// Each operator is bound to the single character used to write it and to
/// the numeric function applied when it is evaluated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Returns the symbol the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Resolves an operator from its symbol.
    ///
    /// Only an exact one-character match resolves; anything else yields
    /// `None`.
    ///
    /// # Example
    /// ```
    /// use tuplecalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("^"), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_symbol("%"), None);
    /// assert_eq!(BinaryOperator::from_symbol("++"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Arithmetic follows IEEE 754: dividing by zero yields an infinity or
    /// NaN rather than an error.
    ///
    /// # Example
    /// ```
    /// use tuplecalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing one expression.
///
/// Operator nodes own exactly two operands, so a malformed arity cannot be
/// represented. Trees are built once by the parser and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Constant {
        /// The literal value.
        value: f64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Returns the nesting depth of the tree; leaves have depth 0.
    ///
    /// ## Example
    /// ```
    /// use tuplecalc::ast::{BinaryOperator, Expr};
    ///
    /// let x = Expr::Variable { name: "x".to_string() };
    /// let sum = Expr::binary(x.clone(), BinaryOperator::Add, Expr::Constant { value: 1.0 });
    /// assert_eq!(x.depth(), 0);
    /// assert_eq!(sum.depth(), 1);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Constant { .. } | Self::Variable { .. } => 0,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Prints the expression back in its fully parenthesized form.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left}{op}{right})"),
        }
    }
}
