//! Comment text expressions.
//!
//! A comment is usually a string literal, but `NULL`, numbers and string
//! concatenation are accepted too. The expression is folded to a single
//! literal before its string value is taken.

use std::fmt;

use crate::render::escape_string;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Value {
    /// String form of the value; `None` for NULL.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::Text(s) => Some(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Text(s) => f.write_str(&escape_string(s)),
            other => f.write_str(&other.as_string().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Value),
    Concat(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn null() -> Self {
        Expression::Literal(Value::Null)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Expression::Literal(Value::Text(s.into()))
    }

    /// Comment text from an optional string, `None` meaning NULL.
    pub fn from_text(text: Option<String>) -> Self {
        text.map(Expression::text).unwrap_or_else(Expression::null)
    }

    pub fn concat(self, other: Expression) -> Self {
        Expression::Concat(Box::new(self), Box::new(other))
    }

    /// Fold the expression to a literal.
    pub fn optimize(self) -> Expression {
        Expression::Literal(self.value())
    }

    /// Evaluate the expression. NULL absorbs concatenation.
    pub fn value(self) -> Value {
        match self {
            Expression::Literal(value) => value,
            Expression::Concat(left, right) => match (left.value(), right.value()) {
                (Value::Null, _) | (_, Value::Null) => Value::Null,
                (l, r) => Value::Text(format!(
                    "{}{}",
                    l.as_string().unwrap_or_default(),
                    r.as_string().unwrap_or_default()
                )),
            },
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{value}"),
            Expression::Concat(left, right) => write!(f, "{left} || {right}"),
        }
    }
}
