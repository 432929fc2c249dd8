/// Parser state and entry point.
///
/// Holds the token cursor and its primitives, the top-level `parse` entry
/// that turns a failure into a logged diagnostic, and the statement-boundary
/// resynchronization hook.
pub mod core;

/// Binary precedence levels.
///
/// Implements the shared left-associative fold and the comma, equality,
/// comparison, term and factor levels built on it.
pub mod binary;

/// Unary and primary expressions.
///
/// Handles prefix operators, literals and parenthesized groups.
pub mod unary;
