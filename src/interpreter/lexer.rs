use logos::Logos;

use crate::{
    error::LexicalError,
    interpreter::token::{Literal, Token},
};

/// The syntactic category of a lexical token.
///
/// The lexical grammar lives in the `logos` attributes on this enum. Every
/// variant is a plain tag; the lexeme, line and literal payload of a scanned
/// token live on [`Token`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,

    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// Identifier tokens such as `foo` or `_bar2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literal tokens. Strings may span several lines.
    #[regex(r#""[^"]*""#, |lex| {
        lex.extras.line += count_newlines(lex.slice());
        TokenKind::String
    })]
    String,
    /// Number literal tokens such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// End of input. Never produced by the generated lexer, appended once by
    /// [`Lexer::tokenize`].
    Eof,
    /// Placeholder for input that could not be scanned. The generated lexer
    /// only produces it for a string that runs to the end of the input;
    /// unexpected characters are mapped to it by [`Lexer::tokenize`].
    #[regex(r#""[^"]*"#, |lex| {
        lex.extras.line += count_newlines(lex.slice());
        TokenKind::Error
    })]
    Error,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line feeds.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns `true` for the reserved words that begin a statement.
    ///
    /// Statement boundaries are where the parser resynchronizes after a
    /// syntax error.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::lexer::TokenKind;
    ///
    /// assert!(TokenKind::Var.starts_statement());
    /// assert!(!TokenKind::Nil.starts_statement());
    /// ```
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

fn count_newlines(slice: &str) -> usize {
    slice.chars().filter(|&c| c == '\n').count()
}

/// The output of a single scan: every token, ending in exactly one `Eof`,
/// plus the lexical errors that were reported along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Tokenized {
    /// The token stream.
    pub tokens: Vec<Token>,
    /// Every lexical error, in source order.
    pub errors: Vec<LexicalError>,
}

/// Single-use scanner over one source buffer.
///
/// Wraps the `logos` generated lexer, turns its items into [`Token`]s and
/// keeps going after unexpected input.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras::default()) }
    }

    /// Scans the whole source.
    ///
    /// Lexical errors are logged and collected; an `Error` token takes the
    /// place of the offending input and scanning continues. The returned
    /// stream always ends with a single `Eof` token.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let scanned = Lexer::new("1 @ 2").tokenize();
    /// let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
    ///
    /// assert_eq!(kinds,
    ///            [TokenKind::Number, TokenKind::Error, TokenKind::Number, TokenKind::Eof]);
    /// assert_eq!(scanned.errors.len(), 1);
    /// ```
    #[must_use]
    pub fn tokenize(mut self) -> Tokenized {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while let Some(item) = self.inner.next() {
            let lexeme = self.inner.slice();
            let line = self.inner.extras.line;

            let token = match item {
                Ok(TokenKind::Error) => {
                    errors.push(LexicalError::UnterminatedString { line });
                    Token::new(TokenKind::Error, lexeme, line)
                },
                Ok(kind) => scan_literal(kind, lexeme, line),
                Err(()) => {
                    errors.push(LexicalError::UnexpectedCharacter { lexeme: lexeme.to_string(),
                                                                    line });
                    Token::new(TokenKind::Error, lexeme, line)
                },
            };
            tokens.push(token);
        }

        for error in &errors {
            log::error!("{error}");
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.inner.extras.line));
        log::trace!("scanned {} tokens", tokens.len());

        Tokenized { tokens, errors }
    }
}

/// Builds a token for a successfully matched lexeme, attaching the literal
/// payload for strings and numbers.
fn scan_literal(kind: TokenKind, lexeme: &str, line: usize) -> Token {
    let literal = match kind {
        TokenKind::String => Some(Literal::String(lexeme[1..lexeme.len() - 1].to_string())),
        // The number regex only admits digits with an optional fraction.
        TokenKind::Number => lexeme.parse().ok().map(Literal::Number),
        _ => None,
    };

    Token { kind,
            lexeme: lexeme.to_string(),
            literal,
            line }
}

/// Scans `source` and returns its token stream.
///
/// Lexical errors are logged and otherwise dropped; use [`Lexer::tokenize`]
/// to inspect them.
///
/// # Example
/// ```
/// use lox_expr::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("!=");
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::BangEqual);
/// assert_eq!(tokens[1].kind, TokenKind::Eof);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize().tokens
}
