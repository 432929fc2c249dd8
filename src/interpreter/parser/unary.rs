use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        token::Token,
        value::core::Value,
    },
};

impl<'t> Parser<'t> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `-`  (numeric negation)
    /// - `!`  (logical not)
    ///
    /// Unary operators are right-associative, so an input like `!-x` is parsed
    /// as `!( -x )`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("-" | "!") unary
    ///            | primary
    /// ```
    pub fn unary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::unary(operator, right));
        }

        self.primary()
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER | STRING | "true" | "false" | "nil"
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `ExpectedExpression` if no primary expression starts here.
    /// - `ExpectedToken` if a group is missing its closing `)`.
    pub fn primary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::False]) {
            return Ok(Expr::literal(false));
        }
        if self.matches(&[TokenKind::True]) {
            return Ok(Expr::literal(true));
        }
        if self.matches(&[TokenKind::Nil]) {
            return Ok(Expr::literal(Value::Null));
        }
        if self.matches(&[TokenKind::Number, TokenKind::String]) {
            return Ok(Expr::literal(literal_value(self.previous())));
        }
        if self.matches(&[TokenKind::LeftParen]) {
            let expression = self.expression()?;
            self.consume(TokenKind::RightParen, "after expression")?;
            return Ok(Expr::grouping(expression));
        }

        Err(self.error_at_current(|location, line| {
                    ParseError::ExpectedExpression { location, line }
                }))
    }
}

/// Transcribes the literal payload of a string or number token into a
/// runtime value. A token without a payload becomes `nil`.
fn literal_value(token: &Token) -> Value {
    token.literal.as_ref().map_or(Value::Null, Value::from)
}
