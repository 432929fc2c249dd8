/// Lexical errors.
///
/// Errors reported while scanning: characters outside the lexical grammar
/// and strings that run to the end of the input. They never abort a scan.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the expression tree:
/// missing operands, missing closing delimiters and leftover tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// operands of the wrong type for an operator.
pub mod runtime_error;

pub use lexical_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that stops the pipeline.
///
/// Lexical errors are absent on purpose: they are reported and scanning
/// carries on, so the parser is the first stage that can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The token stream did not form an expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was well formed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The process exit status for this failure: 65 when the input does not
    /// parse, 70 when evaluation fails.
    ///
    /// # Example
    /// ```
    /// use lox_expr::run;
    ///
    /// assert_eq!(run("(1 + 2").unwrap_err().exit_code(), 65);
    /// assert_eq!(run("-\"a\"").unwrap_err().exit_code(), 70);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) => 65,
            Self::Runtime(_) => 70,
        }
    }
}
