use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur during parsing.
///
/// `location` is the printable position of the offending token, `at end` or
/// `at '<lexeme>'`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No expression starts at the current token.
    #[error("[line {line}] Error {location}: Expected expression.")]
    ExpectedExpression {
        /// Where the parser was looking for an expression.
        location: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A specific token was required but another one was found.
    #[error("[line {line}] Error {location}: Expected {expected} {context}, found {found}.")]
    ExpectedToken {
        /// The category that was required.
        expected: TokenKind,
        /// The category actually encountered.
        found:    TokenKind,
        /// What the required token was supposed to follow or close.
        context:  &'static str,
        /// Where the token was missing.
        location: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token stream handed to the parser does not end with `Eof`.
    #[error("[line {line}] Error: Token stream does not end with Eof.")]
    MissingEof {
        /// The line of the last token, or 1 for an empty stream.
        line: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("[line {line}] Error {location}: Unexpected tokens after expression.")]
    UnexpectedTrailingTokens {
        /// Where the leftover input starts.
        location: String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedExpression { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::MissingEof { line } => *line,
        }
    }
}
