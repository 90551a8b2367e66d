//! SQL dialect support.
//!
//! A dialect decides how operator symbols found in a tree are written in SQL
//! and how tightly binary operators bind. The compiler only asks two
//! questions of it: [`Dialect::binary_operator`] and
//! [`Dialect::unary_operator`].

mod generic;
mod postgres;
mod sqlite;
mod table;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub use generic::GenericDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;
pub use table::{DialectConfigError, Layered, OperatorTable};

/// How an operator is written, and how tightly it binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorInfo {
    /// SQL text of the operator.
    pub text: Cow<'static, str>,
    /// Binding strength of a binary operator; higher binds tighter.
    /// Unused for unary operators.
    #[serde(default)]
    pub precedence: u8,
}

impl OperatorInfo {
    /// Describes a binary operator.
    #[must_use]
    pub fn binary(text: impl Into<Cow<'static, str>>, precedence: u8) -> Self {
        Self {
            text: text.into(),
            precedence,
        }
    }

    /// Describes a unary operator.
    #[must_use]
    pub fn unary(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            precedence: 0,
        }
    }
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &str;

    /// Looks up a binary operator by symbol.
    fn binary_operator(&self, symbol: &str) -> Option<OperatorInfo>;

    /// Looks up a unary operator by symbol.
    fn unary_operator(&self, symbol: &str) -> Option<OperatorInfo>;
}

impl<D: Dialect + ?Sized> Dialect for &D {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn binary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        (**self).binary_operator(symbol)
    }

    fn unary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        (**self).unary_operator(symbol)
    }
}

impl<D: Dialect + ?Sized> Dialect for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn binary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        (**self).binary_operator(symbol)
    }

    fn unary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        (**self).unary_operator(symbol)
    }
}

/// A static operator table: `(symbol, text, precedence)`.
pub(crate) type StaticOperators = &'static [(&'static str, &'static str, u8)];

/// Finds `symbol` in a static table. Keyword symbols match case-insensitively.
pub(crate) fn lookup(table: StaticOperators, symbol: &str) -> Option<OperatorInfo> {
    table
        .iter()
        .find(|(candidate, _, _)| candidate.eq_ignore_ascii_case(symbol))
        .map(|&(_, text, precedence)| OperatorInfo {
            text: Cow::Borrowed(text),
            precedence,
        })
}

/// Returns a built-in dialect by name.
///
/// Known names are `generic` (also `default`, `ansi`), `sqlite`, and
/// `postgres` (also `postgresql`).
#[must_use]
pub fn dialect_by_name(name: &str) -> Option<Box<dyn Dialect>> {
    match name.to_ascii_lowercase().as_str() {
        "generic" | "default" | "ansi" => Some(Box::new(GenericDialect::new())),
        "sqlite" => Some(Box::new(SqliteDialect::new())),
        "postgres" | "postgresql" => Some(Box::new(PostgresDialect::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_by_name() {
        assert_eq!(dialect_by_name("generic").unwrap().name(), "generic");
        assert_eq!(dialect_by_name("SQLite").unwrap().name(), "sqlite");
        assert_eq!(dialect_by_name("postgresql").unwrap().name(), "postgres");
        assert!(dialect_by_name("oracle").is_none());
    }

    #[test]
    fn test_boxed_dialect_delegates() {
        let dialect: Box<dyn Dialect> = Box::new(GenericDialect::new());
        assert_eq!(
            dialect.binary_operator("*"),
            Some(OperatorInfo::binary("*", 9))
        );
        assert_eq!(dialect.unary_operator("not"), Some(OperatorInfo::unary("NOT")));
    }
}
