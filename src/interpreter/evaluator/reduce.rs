use std::str::FromStr;

use crate::{
    ast::Expr,
    error::{EvalError, RequestError},
    interpreter::evaluator::core::{EvalResult, eval_expr},
    values::tuple::Tuple,
};

/// The aggregate a computation reduces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputationKind {
    /// Smallest value over all tuples and expressions.
    Min,
    /// Largest value over all tuples and expressions.
    Max,
    /// Sum of all values divided by the number of tuples.
    Avg,
    /// Number of tuples.
    Count,
}

impl FromStr for ComputationKind {
    type Err = RequestError;

    /// Parses `MIN`, `MAX`, `AVG` or `COUNT`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MIN" => Ok(Self::Min),
            "MAX" => Ok(Self::Max),
            "AVG" => Ok(Self::Avg),
            "COUNT" => Ok(Self::Count),
            _ => Err(RequestError::UnknownComputation { kind: s.to_string() }),
        }
    }
}

impl std::fmt::Display for ComputationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Avg => "AVG",
            Self::Count => "COUNT",
        };
        write!(f, "{name}")
    }
}

/// Reduces every `(tuple, expression)` value to one number.
///
/// - `Min`/`Max` fold with the numeric minimum/maximum, seeded with the
///   largest/smallest finite `f64`. A NaN value makes the result NaN.
/// - `Avg` sums every value and divides by the number of tuples, so each
///   tuple contributes the sum of its expressions.
/// - `Count` returns the number of tuples without evaluating anything.
///
/// The first evaluation failure aborts the reduction.
///
/// # Errors
/// - [`EvalError::EmptyTuples`] if `tuples` is empty, whatever the kind.
/// - [`EvalError::NoExpressions`] if `expressions` is empty and the kind
///   needs values.
/// - [`EvalError::UnknownVariable`] from any evaluation.
///
/// # Example
/// ```
/// use tuplecalc::{
///     interpreter::{
///         evaluator::reduce::{ComputationKind, evaluate},
///         parser::core::parse_expression,
///     },
///     values::tuple::Tuple,
/// };
///
/// let tuples: Vec<Tuple> = [0.0, 1.0, 2.0].into_iter()
///                                         .map(|x| [("x", x)].into_iter().collect())
///                                         .collect();
/// let exprs = vec![parse_expression("x").unwrap(), parse_expression("(x*2)").unwrap()];
///
/// assert_eq!(evaluate(ComputationKind::Max, &exprs, &tuples).unwrap(), 4.0);
/// // (0 + 0) + (1 + 2) + (2 + 4) over 3 tuples.
/// assert_eq!(evaluate(ComputationKind::Avg, &exprs, &tuples).unwrap(), 3.0);
/// assert_eq!(evaluate(ComputationKind::Count, &[], &tuples).unwrap(), 3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn evaluate(kind: ComputationKind, expressions: &[Expr], tuples: &[Tuple]) -> EvalResult<f64> {
    if tuples.is_empty() {
        return Err(EvalError::EmptyTuples);
    }
    let tuple_count = tuples.len() as f64;

    if kind != ComputationKind::Count && expressions.is_empty() {
        return Err(EvalError::NoExpressions { kind: kind.to_string() });
    }

    match kind {
        ComputationKind::Min => fold_values(expressions, tuples, f64::MAX, nan_min),
        ComputationKind::Max => fold_values(expressions, tuples, f64::MIN, nan_max),
        ComputationKind::Avg => {
            Ok(fold_values(expressions, tuples, 0.0, |acc, value| acc + value)? / tuple_count)
        },
        ComputationKind::Count => Ok(tuple_count),
    }
}

/// Folds the value of every expression against every tuple, tuple-major.
fn fold_values(expressions: &[Expr],
               tuples: &[Tuple],
               seed: f64,
               combine: impl Fn(f64, f64) -> f64)
               -> EvalResult<f64> {
    tuples.iter().try_fold(seed, |acc, tuple| {
                     expressions.iter().try_fold(acc, |acc, expr| {
                                           Ok(combine(acc, eval_expr(expr, tuple)?))
                                       })
                 })
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}
