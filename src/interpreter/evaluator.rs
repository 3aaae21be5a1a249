/// Core evaluation logic.
///
/// Evaluates one expression tree against one tuple of variable bindings.
pub mod core;

/// Aggregate reductions.
///
/// Evaluates every expression against every tuple and folds the values into
/// a minimum, maximum, average or count.
pub mod reduce;
