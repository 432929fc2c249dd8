use crate::{
    ast::Expr,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Operators of the comma level.
pub const COMMA_OPERATORS: &[TokenKind] = &[TokenKind::Comma];
/// Operators of the equality level.
pub const EQUALITY_OPERATORS: &[TokenKind] = &[TokenKind::BangEqual, TokenKind::EqualEqual];
/// Operators of the comparison level.
pub const COMPARISON_OPERATORS: &[TokenKind] = &[TokenKind::Greater,
                                                 TokenKind::GreaterEqual,
                                                 TokenKind::Less,
                                                 TokenKind::LessEqual];
/// Operators of the term level.
pub const TERM_OPERATORS: &[TokenKind] = &[TokenKind::Minus, TokenKind::Plus];
/// Operators of the factor level.
pub const FACTOR_OPERATORS: &[TokenKind] = &[TokenKind::Slash, TokenKind::Star];

impl<'t> Parser<'t> {
    /// Parses one left-associative binary precedence level.
    ///
    /// Parses an operand with `operand`, then, while the current token is one
    /// of `operators`, consumes it, parses another operand and folds both
    /// sides into a new `Expr::Binary`. Every binary level of the grammar is
    /// an instance of this rule:
    ///
    /// ```text
    ///     level := operand ( operator operand )*
    /// ```
    ///
    /// # Parameters
    /// - `operand`: Parser for the next-higher precedence level.
    /// - `operators`: Token kinds that belong to this level.
    ///
    /// # Returns
    /// The folded expression, or the first error from an operand.
    pub fn fold_binary(&mut self,
                       operand: fn(&mut Self) -> ParseResult<Expr>,
                       operators: &[TokenKind])
                       -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while self.matches(operators) {
            let operator = self.previous().clone();
            let right = operand(self)?;
            left = Expr::binary(left, operator, right);
        }

        Ok(left)
    }

    /// Parses comma-separated expressions. The value of the whole sequence
    /// is that of its right-most operand.
    ///
    /// Grammar: `comma := equality ("," equality)*`
    pub fn comma(&mut self) -> ParseResult<Expr> {
        self.fold_binary(Self::equality, COMMA_OPERATORS)
    }

    /// Parses equality and inequality.
    ///
    /// Grammar: `equality := comparison (("!=" | "==") comparison)*`
    pub fn equality(&mut self) -> ParseResult<Expr> {
        self.fold_binary(Self::comparison, EQUALITY_OPERATORS)
    }

    /// Parses the ordering operators.
    ///
    /// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
    pub fn comparison(&mut self) -> ParseResult<Expr> {
        self.fold_binary(Self::term, COMPARISON_OPERATORS)
    }

    /// Parses addition and subtraction.
    ///
    /// Grammar: `term := factor (("-" | "+") factor)*`
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::{lexer::tokenize, parser::core::Parser};
    ///
    /// let tokens = tokenize("1 - 2 - 3");
    /// let expr = Parser::new(&tokens)?.term()?;
    ///
    /// // Left-associative: (1 - 2) - 3.
    /// assert_eq!(expr.to_string(), "(- (- 1 2) 3)");
    /// # Ok::<(), lox_expr::error::ParseError>(())
    /// ```
    pub fn term(&mut self) -> ParseResult<Expr> {
        self.fold_binary(Self::factor, TERM_OPERATORS)
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `factor := unary (("/" | "*") unary)*`
    pub fn factor(&mut self) -> ParseResult<Expr> {
        self.fold_binary(Self::unary, FACTOR_OPERATORS)
    }
}
