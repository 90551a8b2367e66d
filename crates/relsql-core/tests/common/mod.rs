#![allow(dead_code)]

use relsql_core::dialect::OperatorTable;
use relsql_core::{Compiler, CompilerError, Dialect, Expr, Relation};

pub fn sql(expr: &Expr) -> String {
    Compiler::new()
        .expression_to_sql(expr)
        .unwrap_or_else(|e| panic!("Failed to compile: {expr:?}\nErrors:\n{e}"))
}

pub fn sql_with<D: Dialect>(dialect: D, expr: &Expr) -> String {
    Compiler::with_dialect(dialect)
        .expression_to_sql(expr)
        .unwrap_or_else(|e| panic!("Failed to compile: {expr:?}\nErrors:\n{e}"))
}

pub fn relation_sql(relation: &Relation) -> String {
    Compiler::new()
        .relation_to_sql(relation)
        .unwrap_or_else(|e| panic!("Failed to compile: {relation:?}\nErrors:\n{e}"))
}

pub fn expr_errors(expr: &Expr) -> Vec<CompilerError> {
    Compiler::new()
        .expression_to_sql(expr)
        .expect_err(&format!("Expected compile errors for: {expr:?}"))
        .into_vec()
}

pub fn relation_errors(relation: &Relation) -> Vec<CompilerError> {
    Compiler::new()
        .relation_to_sql(relation)
        .expect_err(&format!("Expected compile errors for: {relation:?}"))
        .into_vec()
}

/// A two-level dialect: `*` binds tighter than `+` and `-`.
pub fn arithmetic() -> OperatorTable {
    OperatorTable::new("arithmetic")
        .with_binary("+", "+", 1)
        .with_binary("-", "-", 1)
        .with_binary("*", "*", 2)
}

pub fn attr(name: &str) -> Expr {
    Expr::attribute(name)
}
