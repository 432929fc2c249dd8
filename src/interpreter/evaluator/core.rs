use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Tree-walking evaluator.
///
/// The evaluator holds no state between calls: every evaluation only borrows
/// the tree it walks, so evaluating the same tree twice yields the same value.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an expression tree and returns its value.
    ///
    /// This is the boundary where runtime errors leave the evaluator: a
    /// failure is logged and returned to the caller.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::{
    ///     evaluator::core::Evaluator, lexer::tokenize, parser::core::Parser, value::core::Value,
    /// };
    ///
    /// let tokens = tokenize("(1 + 2) * 3");
    /// let expr = Parser::new(&tokens).and_then(|mut parser| parser.parse()).unwrap();
    ///
    /// assert_eq!(Evaluator::new().evaluate(&expr).unwrap(), Value::Number(9.0));
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        let result = self.eval(expr);

        match &result {
            Ok(value) => log::debug!("evaluated {expr} to {value}"),
            Err(e) => log::error!("Runtime error: {e}"),
        }

        result
    }

    /// Evaluates an expression without logging failures.
    ///
    /// The evaluator dispatches on the expression variant. Binary operands are
    /// evaluated left first, then right.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(value.clone()),
            Expr::Grouping { expression } => self.eval(expression),
            Expr::Unary { operator, right } => {
                let right = self.eval(right)?;
                Self::eval_unary(operator, &right)
            },
            Expr::Binary { left,
                           operator,
                           right, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(operator, left, right)
            },
        }
    }
}
