//! # tuplecalc
//!
//! tuplecalc evaluates batches of fully parenthesized arithmetic expressions
//! over generated variable assignments and reduces the results to a single
//! number (minimum, maximum, average or count). The engine is exposed both
//! as a library and as a line-oriented TCP service.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{config::EngineConfig, error::Error, service::protocol::ComputeRequest};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` tree and the `BinaryOperator` set. Trees
/// are built by the parser, immutable afterwards, and walked by the
/// evaluator once per tuple.
pub mod ast;
/// Engine and server settings.
///
/// Holds the limits applied to every computation (nesting depth, domain and
/// tuple sizes), the malformed-expression policy, and the listening
/// parameters of the service.
pub mod config;
/// Provides unified error types for every stage.
///
/// This module defines one error enum per stage (expression syntax, domain
/// specification, tuple generation, evaluation, request decoding) and the
/// crate-wide [`error::Error`] that wraps them.
///
/// # Responsibilities
/// - Carries positions and offending text for precise syntax reports.
/// - Classifies every failure into an [`error::ErrorKind`].
/// - Renders the human-readable messages sent back to clients.
pub mod error;
/// Turns expression text into values.
///
/// This module ties together the lexer, the parser and the evaluator.
///
/// # Responsibilities
/// - Recognizes tokens at precise offsets.
/// - Builds expression trees from the strict parenthesized grammar.
/// - Evaluates trees against tuples and reduces the results.
pub mod interpreter;
/// Line-protocol service.
///
/// Decodes request lines, runs computations, keeps request statistics and
/// serves TCP clients concurrently.
pub mod service;
/// General utilities for safe numeric conversion.
pub mod util;
/// Variable domains and tuple generation.
pub mod values;

/// Runs a single computation from its four textual parts.
///
/// `computation` is one of `MIN`, `MAX`, `AVG`, `COUNT` and `values` one of
/// `GRID`, `LIST` (both case-insensitive). `domains` is a comma-separated
/// list of `name:start:step:end` records and `expressions` a comma-separated
/// list of fully parenthesized expressions. Default limits apply and
/// malformed expressions are skipped.
///
/// # Errors
/// Returns an error if a kind is unknown, a domain record is malformed, the
/// tuples cannot be built, a variable is unbound, or the reduction has
/// nothing to work on.
///
/// # Examples
/// ```
/// use tuplecalc::compute;
///
/// // Maximum of x*x over x in {0, 1, 2}.
/// assert_eq!(compute("MAX", "GRID", "x:0:1:2", "(x*x)").unwrap(), 4.0);
///
/// // Count of a 2x2 cross product with two expressions.
/// assert_eq!(compute("COUNT", "GRID", "x:0:1:1,y:0:1:1", "x,y").unwrap(), 8.0);
///
/// // An unbound variable fails the whole request.
/// assert!(compute("MIN", "GRID", "x:0:1:2", "(y+1)").is_err());
/// ```
pub fn compute(computation: &str,
               values: &str,
               domains: &str,
               expressions: &str)
               -> Result<f64, Error> {
    let request = ComputeRequest { computation: computation.parse()?,
                                   values:      values.parse()?,
                                   domains:     domains.to_string(),
                                   expressions: expressions.to_string(), };

    service::compute::compute(&request, &EngineConfig::default())
}
