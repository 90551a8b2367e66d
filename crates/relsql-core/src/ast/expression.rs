//! Expression tree types.

use serde::{Deserialize, Serialize};

use super::error::ExpressionError;
use super::relation::Table;

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// NULL literal.
    Null,
    /// Integer literal.
    Integer(i64),
    /// String literal.
    String(String),
    /// Boolean literal.
    Boolean(bool),
}

/// A reference to an attribute as resolved by the binding layer.
///
/// When `error` is `None` the producer guarantees that `name` is present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeReference {
    /// Qualified name of the owning relation, if any.
    #[serde(default)]
    pub qualifier: Option<String>,
    /// Resolved column name.
    #[serde(default)]
    pub name: Option<String>,
    /// Resolution failure reported upstream.
    #[serde(default)]
    pub error: Option<ExpressionError>,
}

impl AttributeReference {
    /// Creates an unqualified, successfully resolved reference.
    #[must_use]
    pub fn resolved(name: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            name: Some(name.into()),
            error: None,
        }
    }

    /// Creates a reference qualified with its owning relation.
    #[must_use]
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            name: Some(name.into()),
            error: None,
        }
    }

    /// Creates a reference that failed to resolve.
    #[must_use]
    pub fn failed(error: ExpressionError) -> Self {
        Self {
            qualifier: None,
            name: None,
            error: Some(error),
        }
    }
}

/// A scalar expression.
///
/// Operators are carried as symbols and resolved against a
/// [`Dialect`](crate::dialect::Dialect) at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A binary expression.
    Binary {
        /// Operator symbol.
        op: String,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A unary expression.
    Unary {
        /// Operator symbol.
        op: String,
        /// Operand.
        operand: Box<Expr>,
    },

    /// A function call.
    Function {
        /// The function name.
        name: String,
        /// The arguments, in call order.
        #[serde(default)]
        args: Vec<Expr>,
    },

    /// A raw column of a known table.
    Column {
        /// Column name.
        name: String,
        /// The owning table.
        table: Table,
    },

    /// A bound attribute reference.
    Attribute(AttributeReference),

    /// An aliased expression (`expr AS name`).
    Alias {
        /// The alias.
        name: String,
        /// The aliased expression.
        expr: Box<Expr>,
    },

    /// A named parameter that has not been bound.
    Parameter(String),

    /// A node that failed to build upstream.
    Error(ExpressionError),
}

impl Expr {
    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates a new integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a new string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a raw column reference.
    #[must_use]
    pub fn column(table: &Table, name: impl Into<String>) -> Self {
        Self::Column {
            name: name.into(),
            table: table.clone(),
        }
    }

    /// Creates an unqualified attribute reference.
    #[must_use]
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::Attribute(AttributeReference::resolved(name))
    }

    /// Creates a qualified attribute reference.
    #[must_use]
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Attribute(AttributeReference::qualified(qualifier, name))
    }

    /// Creates a function call.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Function {
            name: name.into(),
            args,
        }
    }

    /// Creates an unbound parameter.
    #[must_use]
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: impl Into<String>, right: Self) -> Self {
        Self::Binary {
            op: op.into(),
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Creates a unary expression applying `op` to `self`.
    #[must_use]
    pub fn unary(self, op: impl Into<String>) -> Self {
        Self::Unary {
            op: op.into(),
            operand: Box::new(self),
        }
    }

    /// Wraps `self` in an alias.
    #[must_use]
    pub fn alias(self, name: impl Into<String>) -> Self {
        Self::Alias {
            name: name.into(),
            expr: Box::new(self),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary("=", right)
    }

    /// Creates an addition.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, right: Self) -> Self {
        self.binary("+", right)
    }

    /// Creates a subtraction.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, right: Self) -> Self {
        self.binary("-", right)
    }

    /// Creates a multiplication.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, right: Self) -> Self {
        self.binary("*", right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary("and", right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary("or", right)
    }
}

impl From<ExpressionError> for Expr {
    fn from(error: ExpressionError) -> Self {
        Self::Error(error)
    }
}
