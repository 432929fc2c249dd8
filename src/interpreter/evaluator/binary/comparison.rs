use crate::interpreter::{
    evaluator::{
        binary::scalar::number_operands,
        core::{EvalResult, Evaluator},
    },
    lexer::TokenKind,
    token::Token,
    value::core::Value,
};

impl Evaluator {
    /// Evaluates an ordering comparison of the form `Number <op> Number`.
    ///
    /// Both operands must be numbers; the result is a boolean.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::{
    ///     evaluator::core::Evaluator, lexer::TokenKind, token::Token, value::core::Value,
    /// };
    ///
    /// let less = Token::new(TokenKind::Less, "<", 1);
    ///
    /// assert_eq!(Evaluator::eval_comparison(&less, &Value::Number(3.0), &Value::Number(5.0))
    ///                .unwrap(),
    ///            Value::Boolean(true));
    /// assert!(Evaluator::eval_comparison(&less, &Value::Null, &Value::Number(5.0)).is_err());
    /// ```
    pub fn eval_comparison(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        let (left, right) = number_operands(operator, left, right)?;

        Ok(Value::Boolean(match operator.kind {
                              TokenKind::Greater => left > right,
                              TokenKind::GreaterEqual => left >= right,
                              TokenKind::Less => left < right,
                              TokenKind::LessEqual => left <= right,
                              _ => unreachable!("eval_comparison used with {}", operator.kind),
                          }))
    }

    /// Evaluates `==` or `!=` using structural equality. Never fails:
    /// operands of different types are simply unequal.
    #[must_use]
    pub fn eval_equality(operator: &Token, left: &Value, right: &Value) -> Value {
        let is_equal = left.is_equal(right);

        Value::Boolean(match operator.kind {
                           TokenKind::EqualEqual => is_equal,
                           TokenKind::BangEqual => !is_equal,
                           _ => unreachable!("eval_equality used with {}", operator.kind),
                       })
    }
}
