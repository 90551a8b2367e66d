//! SQLite dialect.
//!
//! SQLite ranks `||` above multiplication, puts the bitwise operators on a
//! single level, and splits relational comparisons from equality tests. See
//! <https://www.sqlite.org/lang_expr.html#operators_and_parse_affecting_attributes>.

use super::{Dialect, OperatorInfo, StaticOperators, lookup};

const BINARY: StaticOperators = &[
    ("or", "OR", 1),
    ("and", "AND", 2),
    ("=", "=", 3),
    ("==", "==", 3),
    ("!=", "!=", 3),
    ("<>", "<>", 3),
    ("is", "IS", 3),
    ("is not", "IS NOT", 3),
    ("like", "LIKE", 3),
    ("glob", "GLOB", 3),
    ("match", "MATCH", 3),
    ("regexp", "REGEXP", 3),
    ("<", "<", 4),
    ("<=", "<=", 4),
    (">", ">", 4),
    (">=", ">=", 4),
    ("&", "&", 7),
    ("|", "|", 7),
    ("<<", "<<", 7),
    (">>", ">>", 7),
    ("+", "+", 8),
    ("-", "-", 8),
    ("*", "*", 9),
    ("/", "/", 9),
    ("%", "%", 9),
    ("||", "||", 10),
];

const UNARY: StaticOperators = &[("-", "-", 0), ("+", "+", 0), ("not", "NOT", 0), ("~", "~", 0)];

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn binary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        lookup(BINARY, symbol)
    }

    fn unary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        lookup(UNARY, symbol)
    }
}
