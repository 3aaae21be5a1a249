use crate::{ast::Expr, error::EvalError, values::tuple::Tuple};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression against one tuple.
///
/// Constants yield their value, variables the value the tuple binds them to,
/// and operations apply their operator to both evaluated operands.
///
/// # Errors
/// Returns [`EvalError::UnknownVariable`] if the expression references a name
/// the tuple does not bind.
///
/// # Example
/// ```
/// use tuplecalc::{
///     error::EvalError,
///     interpreter::{evaluator::core::eval_expr, parser::core::parse_expression},
///     values::tuple::Tuple,
/// };
///
/// let tuple: Tuple = [("x", 3.0)].into_iter().collect();
///
/// let expr = parse_expression("((x+1)*2)").unwrap();
/// assert_eq!(eval_expr(&expr, &tuple).unwrap(), 8.0);
///
/// let expr = parse_expression("(x+z)").unwrap();
/// assert_eq!(eval_expr(&expr, &tuple).unwrap_err(),
///            EvalError::UnknownVariable { name: "z".to_string() });
/// ```
pub fn eval_expr(expr: &Expr, tuple: &Tuple) -> EvalResult<f64> {
    match expr {
        Expr::Constant { value } => Ok(*value),
        Expr::Variable { name } => {
            tuple.get(name)
                 .ok_or_else(|| EvalError::UnknownVariable { name: name.clone() })
        },
        Expr::BinaryOp { left, op, right } => {
            let left = eval_expr(left, tuple)?;
            let right = eval_expr(right, tuple)?;
            Ok(op.apply(left, right))
        },
    }
}
