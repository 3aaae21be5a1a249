/// Variable domains.
///
/// Turns a `name:start:step:end` specification into an ordered mapping from
/// variable name to its arithmetic sequence of candidate values.
pub mod domain;
/// Tuple generation.
///
/// Combines domains into variable assignments, either as a full cross
/// product (`GRID`) or element by element (`LIST`).
pub mod tuple;
