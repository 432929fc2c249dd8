use crate::interpreter::token::Literal;

/// Represents a runtime value in the interpreter.
///
/// A value always holds exactly one of the four variants. There is no
/// separate integer type: every number is an `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value.
    String(String),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by `true`/`false` literals, comparison operators and `!`.
    Boolean(bool),
    /// The absence of a value, written `nil`.
    Null,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&Literal> for Value {
    fn from(lit: &Literal) -> Self {
        match lit {
            Literal::String(s) => s.as_str().into(),
            Literal::Number(n) => (*n).into(),
        }
    }
}

impl Value {
    /// Maps the value to a boolean for logical contexts.
    ///
    /// `false` and `nil` are falsy. Everything else is truthy, including `0`
    /// and the empty string.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Null => false,
            Self::String(_) | Self::Number(_) => true,
        }
    }

    /// Structural equality used by `==` and `!=`.
    ///
    /// Two values are equal only when they hold the same variant with equal
    /// payloads; `nil` equals only `nil`. Comparing different variants is
    /// never an error, just `false`. Numbers compare by IEEE-754 rules, so
    /// `NaN` is not equal to itself.
    ///
    /// # Example
    /// ```
    /// use lox_expr::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(2.0).is_equal(&Value::Number(2.0)));
    /// assert!(Value::Null.is_equal(&Value::Null));
    /// assert!(!Value::Number(2.0).is_equal(&Value::from("2")));
    /// assert!(!Value::Null.is_equal(&Value::Boolean(false)));
    /// ```
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }

    /// Returns the number held by the value, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            // `-0` keeps its sign, like the float formatter does.
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e16 => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "nil"),
        }
    }
}
