/// Represents all errors that can occur during evaluation.
///
/// Every variant names the operator token it was raised for.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// An arithmetic or relational operator received a non-number operand.
    #[error("[line {line}] Operator '{operator}': Operands do not hold the same type, expected two numbers.")]
    ExpectedNumbers {
        /// The operator lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Unary negation received a non-number operand.
    #[error("[line {line}] Operator '{operator}': Operand must be a number.")]
    ExpectedNumber {
        /// The operator lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `+` received something other than two numbers or two strings.
    #[error("[line {line}] Operator '{operator}': Addition on something other than two numbers or two strings not allowed.")]
    InvalidAddition {
        /// The operator lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The tree holds a token that is not an operator in that position.
    #[error("[line {line}] Operator '{operator}': Unsupported {arity} operator.")]
    UnsupportedOperator {
        /// The operator lexeme.
        operator: String,
        /// `unary` or `binary`.
        arity:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl RuntimeError {
    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedNumbers { line, .. }
            | Self::ExpectedNumber { line, .. }
            | Self::InvalidAddition { line, .. }
            | Self::UnsupportedOperator { line, .. } => *line,
        }
    }
}
