use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::TokenKind,
        token::Token,
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a unary operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `-`: numeric negation, the operand must be a number.
    /// - `!`: negation of the operand's truthiness, defined for every value.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::{
    ///     evaluator::core::Evaluator, lexer::TokenKind, token::Token, value::core::Value,
    /// };
    ///
    /// let minus = Token::new(TokenKind::Minus, "-", 1);
    /// let bang = Token::new(TokenKind::Bang, "!", 1);
    ///
    /// assert_eq!(Evaluator::eval_unary(&minus, &Value::Number(5.0)).unwrap(),
    ///            Value::Number(-5.0));
    /// assert_eq!(Evaluator::eval_unary(&bang, &Value::Null).unwrap(),
    ///            Value::Boolean(true));
    /// assert!(Evaluator::eval_unary(&minus, &Value::from("5")).is_err());
    /// ```
    pub fn eval_unary(operator: &Token, right: &Value) -> EvalResult<Value> {
        match operator.kind {
            TokenKind::Minus => match right {
                Value::Number(n) => Ok(Value::Number(-*n)),
                _ => Err(RuntimeError::ExpectedNumber { operator: operator.lexeme.clone(),
                                                        line:     operator.line, }),
            },
            TokenKind::Bang => Ok(Value::Boolean(!right.is_truthy())),
            _ => Err(RuntimeError::UnsupportedOperator { operator: operator.lexeme.clone(),
                                                         arity:    "unary",
                                                         line:     operator.line, }),
        }
    }
}
