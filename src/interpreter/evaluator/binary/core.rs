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
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// Routes the operation by operator kind. Arithmetic goes to
    /// `eval_arithmetic`, `+` to `eval_addition`, the ordering operators to
    /// `eval_comparison` and `==`/`!=` to `eval_equality`. The comma operator
    /// yields its right operand.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::{
    ///     evaluator::core::Evaluator, lexer::TokenKind, token::Token, value::core::Value,
    /// };
    ///
    /// let plus = Token::new(TokenKind::Plus, "+", 1);
    /// let result = Evaluator::eval_binary(&plus, Value::Number(3.0), Value::Number(4.0));
    ///
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
        use TokenKind::{
            BangEqual, Comma, EqualEqual, Greater, GreaterEqual, Less, LessEqual, Minus, Plus,
            Slash, Star,
        };

        match operator.kind {
            Minus | Slash | Star => Self::eval_arithmetic(operator, &left, &right),
            Plus => Self::eval_addition(operator, left, right),
            Greater | GreaterEqual | Less | LessEqual => {
                Self::eval_comparison(operator, &left, &right)
            },
            EqualEqual | BangEqual => Ok(Self::eval_equality(operator, &left, &right)),
            Comma => Ok(right),
            _ => Err(RuntimeError::UnsupportedOperator { operator: operator.lexeme.clone(),
                                                         arity:    "binary",
                                                         line:     operator.line, }),
        }
    }
}
