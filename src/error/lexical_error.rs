/// Represents the problems the lexer reports while scanning.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// A character that starts no token.
    #[error("[line {line}] Error: Unexpected character '{lexeme}'.")]
    UnexpectedCharacter {
        /// The offending input.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A string literal without its closing quote.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// The source line where the input ended.
        line: usize,
    },
}

impl LexicalError {
    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}
