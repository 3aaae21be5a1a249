use crate::{
    ast::Expr,
    config::EngineConfig,
    error::{Error, SyntaxError},
    interpreter::{evaluator::reduce::evaluate, parser::core::parse_expression_with_depth},
    service::protocol::ComputeRequest,
    values::{domain::parse_domains_with_limit, tuple::build_tuples_with_limit},
};

/// Runs one computation request.
///
/// Domains are parsed first, then tuples are generated, then expressions
/// are parsed, and finally every expression is reduced over every tuple.
/// The first failure of any stage is returned.
///
/// # Errors
/// Returns the [`Error`] of the first failing stage.
///
/// # Example
/// ```
/// use tuplecalc::{
///     config::EngineConfig,
///     service::{compute::compute, protocol::ComputeRequest},
/// };
///
/// let request = ComputeRequest { computation: "AVG".parse().unwrap(),
///                                values:      "LIST".parse().unwrap(),
///                                domains:     "x:0:1:2,y:0:1:2".to_string(),
///                                expressions: "(x*y)".to_string(), };
///
/// let avg = compute(&request, &EngineConfig::default()).unwrap();
/// assert!((avg - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub fn compute(request: &ComputeRequest, config: &EngineConfig) -> Result<f64, Error> {
    let domains = parse_domains_with_limit(&request.domains, config.max_tuples)?;
    let tuples = build_tuples_with_limit(&domains, request.values, config.max_tuples)?;
    let expressions = parse_expression_list(&request.expressions, config)?;

    Ok(evaluate(request.computation, &expressions, &tuples)?)
}

/// Parses a comma-separated list of expressions.
///
/// Unless `config.strict_expressions` is set, a malformed expression is
/// logged and left out while the others are kept.
///
/// # Errors
/// In strict mode, returns the [`SyntaxError`] of the first malformed
/// expression.
///
/// # Example
/// ```
/// use tuplecalc::{config::EngineConfig, service::compute::parse_expression_list};
///
/// let lenient = EngineConfig::default();
/// let strict = EngineConfig { strict_expressions: true,
///                             ..EngineConfig::default() };
///
/// assert_eq!(parse_expression_list("x,(x+,(x*2)", &lenient).unwrap().len(), 2);
/// assert!(parse_expression_list("x,(x+,(x*2)", &strict).is_err());
/// ```
pub fn parse_expression_list(text: &str, config: &EngineConfig) -> Result<Vec<Expr>, SyntaxError> {
    let mut expressions = Vec::new();

    for source in text.split(',') {
        match parse_expression_with_depth(source, config.max_depth) {
            Ok(expr) => expressions.push(expr),
            Err(e) if config.strict_expressions => return Err(e),
            Err(e) => tracing::warn!(expression = source, error = %e, "skipping malformed expression"),
        }
    }

    Ok(expressions)
}
