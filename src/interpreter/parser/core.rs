use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::TokenKind, token::Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a borrowed token stream.
///
/// The only state is the cursor into `tokens`. The stream must end with an
/// `Eof` token, as every stream produced by the lexer does; the cursor never
/// moves past it.
pub struct Parser<'t> {
    tokens:  &'t [Token],
    current: usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser positioned at the first token.
    ///
    /// # Errors
    /// Returns `MissingEof` if `tokens` is empty or does not end with an
    /// `Eof` token. Streams produced by the lexer always do.
    ///
    /// # Example
    /// ```
    /// use lox_expr::{error::ParseError, interpreter::{lexer::tokenize, parser::core::Parser}};
    ///
    /// let tokens = tokenize("1 + 2");
    /// assert!(Parser::new(&tokens).is_ok());
    /// assert!(matches!(Parser::new(&tokens[..1]), Err(ParseError::MissingEof { line: 1 })));
    /// ```
    pub fn new(tokens: &'t [Token]) -> ParseResult<Self> {
        match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => Ok(Self { tokens, current: 0 }),
            last => Err(ParseError::MissingEof { line: last.map_or(1, |t| t.line) }),
        }
    }

    /// Parses the whole token stream as a single expression.
    ///
    /// This is the boundary where parse failures leave the parser: the error
    /// is logged and returned, and no partial tree is produced. Tokens left
    /// over after a complete expression are an error too.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::{lexer::tokenize, parser::core::Parser};
    ///
    /// let tokens = tokenize("1 + 2 * 3");
    /// let expr = Parser::new(&tokens)?.parse()?;
    ///
    /// assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
    ///
    /// let tokens = tokenize("(1 + 2");
    /// assert!(Parser::new(&tokens)?.parse().is_err());
    /// # Ok::<(), lox_expr::error::ParseError>(())
    /// ```
    pub fn parse(&mut self) -> ParseResult<Expr> {
        let result = match self.expression() {
            Ok(_) if !self.is_at_end() => {
                Err(self.error_at_current(|location, line| {
                            ParseError::UnexpectedTrailingTokens { location, line }
                        }))
            },
            other => other,
        };

        match &result {
            Ok(expr) => log::debug!("parsed {expr}"),
            Err(e) => log::error!("Failed parsing. {e}"),
        }

        result
    }

    /// Parses a full expression.
    ///
    /// This is the entry point of the grammar. It begins at the
    /// lowest-precedence level, the comma operator, and recursively descends
    /// through the precedence hierarchy.
    ///
    /// Grammar: `expression := comma`
    pub fn expression(&mut self) -> ParseResult<Expr> {
        self.comma()
    }

    /// Discards tokens until the cursor sits on a statement boundary: just
    /// after a `;`, or on a keyword that begins a statement, or at the end.
    ///
    /// Expressions never call this; it is the recovery point for a statement
    /// grammar layered on top.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::{lexer::{TokenKind, tokenize}, parser::core::Parser};
    ///
    /// let tokens = tokenize("1 + ; var");
    /// let mut parser = Parser::new(&tokens)?;
    /// parser.synchronize();
    ///
    /// assert_eq!(parser.peek().kind, TokenKind::Var);
    /// # Ok::<(), lox_expr::error::ParseError>(())
    /// ```
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon || self.peek().kind.starts_statement()
            {
                return;
            }

            self.advance();
        }
    }

    /// The token under the cursor.
    #[must_use]
    pub fn peek(&self) -> &'t Token {
        &self.tokens[self.current]
    }

    /// The most recently consumed token. Before anything has been consumed
    /// this is the first token.
    #[must_use]
    pub fn previous(&self) -> &'t Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Returns `true` once the cursor reaches `Eof`.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes the current token, unless it is `Eof`, and returns it.
    pub fn advance(&mut self) -> &'t Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Returns `true` if the current token has the given kind. `Eof` never
    /// matches.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if its kind is one of `kinds`.
    pub fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a token of the given kind or fails with an error naming the
    /// expected kind and the token actually found.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  context: &'static str)
                                                  -> ParseResult<&'t Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        let found = self.peek().kind;
        Err(self.error_at_current(|location, line| ParseError::ExpectedToken { expected: kind,
                                                                             found,
                                                                             context,
                                                                             location,
                                                                             line }))
    }

    /// Builds an error positioned at the current token.
    pub(in crate::interpreter::parser) fn error_at_current(&self,
                                                           build: impl FnOnce(String, usize)
                                                                 -> ParseError)
                                                           -> ParseError {
        let token = self.peek();
        log::debug!("parse error at {token}");
        build(token.location(), token.line)
    }
}
