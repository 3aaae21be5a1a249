/// The evaluator module computes results from parsed expressions.
///
/// The evaluator walks an expression tree against one tuple of variable
/// bindings and folds the values of many `(tuple, expression)` pairs into a
/// single aggregate.
///
/// # Responsibilities
/// - Evaluates constants, variable references and binary operations.
/// - Reduces values to a minimum, maximum, average or count.
/// - Reports unbound variables and empty inputs.
pub mod evaluator;
/// The lexer module recognizes tokens in expression text.
///
/// The lexer finds the next token of a requested kind (constant, variable,
/// operator, bracket) anywhere after a given offset. Deciding whether the
/// token starts where the parser expects it is left to the parser.
pub mod lexer;
/// The parser module builds expression trees.
///
/// The parser consumes anchored tokens to recognize the fully parenthesized,
/// strictly binary expression grammar and reports precisely located syntax
/// errors.
pub mod parser;
