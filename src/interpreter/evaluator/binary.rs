/// Dispatch of binary operators to their handlers.
pub mod core;

/// Arithmetic on numbers and concatenation of strings.
pub mod scalar;

/// Ordering and equality comparisons.
pub mod comparison;
