//! PostgreSQL dialect.
//!
//! Operators without a dedicated level (`||`, regex matches, bitwise) share
//! the "any other operator" level between additive and pattern matching. See
//! <https://www.postgresql.org/docs/current/sql-syntax-lexical.html#SQL-PRECEDENCE>.

use super::{Dialect, OperatorInfo, StaticOperators, lookup};

const BINARY: StaticOperators = &[
    ("or", "OR", 1),
    ("and", "AND", 2),
    ("=", "=", 3),
    ("!=", "<>", 3),
    ("<>", "<>", 3),
    ("<", "<", 3),
    ("<=", "<=", 3),
    (">", ">", 3),
    (">=", ">=", 3),
    ("like", "LIKE", 4),
    ("ilike", "ILIKE", 4),
    ("similar to", "SIMILAR TO", 4),
    ("||", "||", 5),
    ("~", "~", 5),
    ("~*", "~*", 5),
    ("!~", "!~", 5),
    ("!~*", "!~*", 5),
    ("&", "&", 5),
    ("|", "|", 5),
    ("#", "#", 5),
    ("<<", "<<", 5),
    (">>", ">>", 5),
    ("+", "+", 8),
    ("-", "-", 8),
    ("*", "*", 9),
    ("/", "/", 9),
    ("%", "%", 9),
    ("^", "^", 10),
];

const UNARY: StaticOperators = &[("-", "-", 0), ("+", "+", 0), ("not", "NOT", 0), ("~", "~", 0)];

/// PostgreSQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
    }

    fn binary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        lookup(BINARY, symbol)
    }

    fn unary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        lookup(UNARY, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_dialect() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.name(), "postgres");
        assert_eq!(dialect.binary_operator("ilike").unwrap().text, "ILIKE");
        assert_eq!(dialect.binary_operator("!=").unwrap().text, "<>");
        assert!(dialect.binary_operator("glob").is_none());
    }

    #[test]
    fn test_concat_below_additive() {
        let dialect = PostgresDialect::new();
        let concat = dialect.binary_operator("||").unwrap().precedence;
        let add = dialect.binary_operator("+").unwrap().precedence;
        assert!(concat < add);
    }
}
