//! Expression compilation.

use tracing::debug;

use super::Compiler;
use crate::ast::{AttributeReference, Expr, Literal};
use crate::dialect::Dialect;
use crate::error::CompilerError;
use crate::fragment::SqlFragment;

impl<D: Dialect> Compiler<D> {
    /// Compiles a scalar expression.
    pub fn compile_expression(&self, expr: &Expr) -> SqlFragment {
        match expr {
            Expr::Literal(literal) => compile_literal(literal),
            Expr::Binary { op, left, right } => self.compile_binary(op, left, right),
            Expr::Unary { op, operand } => self.compile_unary(op, operand),
            Expr::Function { name, args } => {
                SqlFragment::text(name.as_str()) + self.compile_expressions(args, Some(("(", ")")))
            }
            // TODO: route table and column names through an identifier formatter once
            // quoting rules live in the dialect.
            Expr::Column { name, table } => SqlFragment::text(format!("{}.{name}", table.name)),
            Expr::Attribute(reference) => compile_attribute(reference),
            Expr::Alias { name, expr } => self.compile_expression(expr) + " AS " + name.as_str(),
            Expr::Parameter(name) => {
                debug!(parameter = %name, "parameter binding requested");
                SqlFragment::fail(CompilerError::unsupported("parameter binding"))
            }
            Expr::Error(error) => SqlFragment::fail(error.clone().into()),
        }
    }

    /// Compiles a list of expressions separated by `", "`, optionally
    /// surrounded by `wrap.0` and `wrap.1`.
    pub fn compile_expressions(&self, exprs: &[Expr], wrap: Option<(&str, &str)>) -> SqlFragment {
        let list = SqlFragment::join(exprs.iter().map(|expr| self.compile_expression(expr)), ", ");
        match wrap {
            Some((left, right)) => list.wrap(left, right),
            None => list,
        }
    }

    fn compile_binary(&self, op: &str, left: &Expr, right: &Expr) -> SqlFragment {
        let left_sql = self.compile_expression(left);
        let right_sql = self.compile_expression(right);

        let Some(info) = self.dialect.binary_operator(op) else {
            debug!(symbol = op, dialect = self.dialect.name(), "unknown binary operator");
            let error = SqlFragment::fail(CompilerError::UnknownBinaryOperator(op.to_string()));
            return left_sql + error + right_sql;
        };

        // Only the left operand is checked. A looser operator on the right keeps
        // its text unparenthesized.
        let wrap = match left {
            Expr::Binary { op: left_op, .. } => self
                .dialect
                .binary_operator(left_op)
                .is_some_and(|left_info| info.precedence > left_info.precedence),
            _ => false,
        };

        left_sql.wrap_if("(", ")", wrap) + SqlFragment::text(format!(" {} ", info.text)) + right_sql
    }

    fn compile_unary(&self, op: &str, operand: &Expr) -> SqlFragment {
        // The operand is never parenthesized, even when it is a binary expression.
        let operand_sql = self.compile_expression(operand);

        match self.dialect.unary_operator(op) {
            Some(info) => SqlFragment::text(format!("{} ", info.text)) + operand_sql,
            None => {
                debug!(symbol = op, dialect = self.dialect.name(), "unknown unary operator");
                SqlFragment::fail(CompilerError::UnknownUnaryOperator(op.to_string())) + operand_sql
            }
        }
    }
}

fn compile_literal(literal: &Literal) -> SqlFragment {
    match literal {
        Literal::Null => SqlFragment::text("NULL"),
        Literal::Integer(value) => SqlFragment::text(value.to_string()),
        Literal::Boolean(true) => SqlFragment::text("true"),
        Literal::Boolean(false) => SqlFragment::text("false"),
        // Only quotes are escaped.
        Literal::String(value) => SqlFragment::text(format!("'{}'", value.replace('\'', "''"))),
    }
}

fn compile_attribute(reference: &AttributeReference) -> SqlFragment {
    if let Some(error) = &reference.error {
        return SqlFragment::fail(error.clone().into());
    }

    match (&reference.qualifier, &reference.name) {
        (Some(qualifier), Some(name)) => SqlFragment::text(format!("{qualifier}.{name}")),
        (None, Some(name)) => SqlFragment::text(name.as_str()),
        (_, None) => SqlFragment::fail(CompilerError::internal(
            "attribute reference has neither a name nor an error",
        )),
    }
}
