//! Generic SQL dialect.

use super::{Dialect, OperatorInfo, StaticOperators, lookup};

const BINARY: StaticOperators = &[
    ("or", "OR", 1),
    ("and", "AND", 2),
    ("=", "=", 3),
    ("!=", "!=", 3),
    ("<>", "<>", 3),
    ("<", "<", 3),
    ("<=", "<=", 3),
    (">", ">", 3),
    (">=", ">=", 3),
    ("like", "LIKE", 4),
    ("|", "|", 5),
    ("&", "&", 6),
    ("<<", "<<", 7),
    (">>", ">>", 7),
    ("+", "+", 8),
    ("-", "-", 8),
    ("||", "||", 8),
    ("*", "*", 9),
    ("/", "/", 9),
    ("%", "%", 9),
];

const UNARY: StaticOperators = &[("-", "-", 0), ("+", "+", 0), ("not", "NOT", 0), ("~", "~", 0)];

/// A generic SQL dialect using ANSI SQL operators.
///
/// This is the dialect used when none is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &str {
        "generic"
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
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.binary_operator("and").unwrap().text, "AND");
        assert_eq!(dialect.binary_operator("AND").unwrap().text, "AND");
        assert!(dialect.binary_operator("glob").is_none());
        assert!(dialect.unary_operator("*").is_none());
    }

    #[test]
    fn test_precedence_order() {
        let dialect = GenericDialect::new();
        let prec = |op: &str| dialect.binary_operator(op).unwrap().precedence;

        assert!(prec("*") > prec("+"));
        assert!(prec("+") > prec("="));
        assert!(prec("=") > prec("and"));
        assert!(prec("and") > prec("or"));
    }
}
