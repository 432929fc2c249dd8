use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::TokenKind,
        token::Token,
        value::core::Value,
    },
};

/// Unpacks two number operands, or fails with an error naming the operator.
pub(in crate::interpreter::evaluator) fn number_operands(operator: &Token,
                                                         left: &Value,
                                                         right: &Value)
                                                         -> EvalResult<(f64, f64)> {
    match (left.as_number(), right.as_number()) {
        (Some(l), Some(r)) => Ok((l, r)),
        _ => Err(RuntimeError::ExpectedNumbers { operator: operator.lexeme.clone(),
                                                 line:     operator.line, }),
    }
}

impl Evaluator {
    /// Evaluates `-`, `*` or `/` on two numbers.
    ///
    /// Division follows IEEE-754: dividing by zero yields an infinity or
    /// `NaN`, not an error.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::{
    ///     evaluator::core::Evaluator, lexer::TokenKind, token::Token, value::core::Value,
    /// };
    ///
    /// let slash = Token::new(TokenKind::Slash, "/", 1);
    /// let result = Evaluator::eval_arithmetic(&slash, &Value::Number(1.0), &Value::Number(0.0));
    ///
    /// assert_eq!(result.unwrap(), Value::Number(f64::INFINITY));
    /// ```
    pub fn eval_arithmetic(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        let (left, right) = number_operands(operator, left, right)?;

        Ok(Value::Number(match operator.kind {
                             TokenKind::Minus => left - right,
                             TokenKind::Star => left * right,
                             TokenKind::Slash => left / right,
                             _ => unreachable!("eval_arithmetic used with {}", operator.kind),
                         }))
    }

    /// Evaluates `+`: numbers are added and strings are concatenated. Any
    /// other pairing of operand types is an error.
    pub fn eval_addition(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::String(l), Value::String(r)) => Ok(Value::String(l + &r)),
            _ => Err(RuntimeError::InvalidAddition { operator: operator.lexeme.clone(),
                                                     line:     operator.line, }),
        }
    }
}
