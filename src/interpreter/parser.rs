/// Core expression parsing.
///
/// Contains the recursive-descent parser for the fully parenthesized
/// grammar, the cursor handling that anchors tokens, and the depth limit.
pub mod core;
