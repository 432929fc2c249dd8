use crate::interpreter::{token::Token, value::core::Value};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// The set of node kinds is closed: every consumer matches on all four
/// variants. Each node owns its children exclusively, so a tree is acyclic and
/// is dropped top-down with its root.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation (addition, comparison, comma, etc.).
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A prefix operation (`-x` or `!x`).
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// A literal value, already converted to its runtime form.
    Literal {
        /// The constant value.
        value: Value,
    },
    /// A parenthesized expression.
    Grouping {
        /// The expression between the parentheses.
        expression: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(operator: Token, right: Self) -> Self {
        Self::Unary { operator,
                      right: Box::new(right) }
    }

    /// Builds a literal node.
    ///
    /// # Example
    /// ```
    /// use lox_expr::{ast::Expr, interpreter::value::core::Value};
    ///
    /// assert_eq!(Expr::literal(1.5),
    ///            Expr::Literal { value: Value::Number(1.5) });
    /// ```
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Builds a grouping node.
    #[must_use]
    pub fn grouping(expression: Self) -> Self {
        Self::Grouping { expression: Box::new(expression) }
    }

    /// Gets the line number of the first operator token in the tree, if
    /// there is one. Literals carry no position.
    ///
    /// ## Example
    /// ```
    /// use lox_expr::{ast::Expr, interpreter::{lexer::TokenKind, token::Token}};
    ///
    /// let minus = Token::new(TokenKind::Minus, "-", 4);
    /// let expr = Expr::unary(minus, Expr::literal(1.0));
    ///
    /// assert_eq!(expr.line_number(), Some(4));
    /// assert_eq!(Expr::literal(true).line_number(), None);
    /// ```
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Binary { operator, .. } | Self::Unary { operator, .. } => Some(operator.line),
            Self::Grouping { expression } => expression.line_number(),
            Self::Literal { .. } => None,
        }
    }
}

/// Prints the tree in fully parenthesized prefix form, e.g.
/// `(+ 1 (group (* 2 3)))`. String literals are quoted so they stay apart
/// from other tokens.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary { left,
                           operator,
                           right, } => write!(f, "({} {left} {right})", operator.lexeme),
            Self::Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
            Self::Literal { value: Value::String(s) } => write!(f, "{s:?}"),
            Self::Literal { value } => write!(f, "{value}"),
            Self::Grouping { expression } => write!(f, "(group {expression})"),
        }
    }
}
