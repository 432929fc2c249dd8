use crate::interpreter::lexer::TokenKind;

/// The literal payload carried by string and number tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The text between the quotes of a string literal.
    String(String),
    /// The value of a number literal.
    Number(f64),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{n:.1}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A scanned token.
///
/// Tokens are created by the lexer and never mutated afterwards; the parser
/// clones the operator tokens it keeps in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The syntactic category.
    pub kind:    TokenKind,
    /// The exact source text the token was scanned from.
    pub lexeme:  String,
    /// The literal payload, present for strings and numbers only.
    pub literal: Option<Literal>,
    /// The source line (1-based).
    pub line:    usize,
}

impl Token {
    /// Creates a token without a literal payload.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::{lexer::TokenKind, token::Token};
    ///
    /// let plus = Token::new(TokenKind::Plus, "+", 3);
    ///
    /// assert_eq!(plus.line, 3);
    /// assert!(plus.literal.is_none());
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.to_string(),
               literal: None,
               line }
    }

    /// Describes where the token sits, for diagnostics: `at end` for the
    /// final token, `at '<lexeme>'` otherwise.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::{lexer::TokenKind, token::Token};
    ///
    /// assert_eq!(Token::new(TokenKind::Star, "*", 1).location(), "at '*'");
    /// assert_eq!(Token::new(TokenKind::Eof, "", 1).location(), "at end");
    /// ```
    #[must_use]
    pub fn location(&self) -> String {
        if self.kind == TokenKind::Eof {
            "at end".to_string()
        } else {
            format!("at '{}'", self.lexeme)
        }
    }
}

/// Renders the token as `Kind lexeme literal`, with `null` standing in for a
/// missing literal.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {literal}", self.kind, self.lexeme),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}
