/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// string concatenation, ordering, equality and the comma operator.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator, its entry point and the dispatch over expression
/// node kinds.
pub mod core;
