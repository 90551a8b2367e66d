//! Compilation of trees into SQL text.
//!
//! [`Compiler`] walks [`Expr`] and [`Relation`] trees and produces a
//! [`SqlFragment`](crate::fragment::SqlFragment). Every error found anywhere
//! in a tree is reported, not just the first one.
//!
//! ```rust
//! use relsql_core::{Compiler, Expr, JoinType, Relation};
//!
//! let sql = Compiler::new().relation_to_sql(
//!     &Relation::table("x").join(
//!         JoinType::Inner,
//!         Relation::table("y"),
//!         Some(Expr::qualified("x", "a").eq(Expr::qualified("y", "a"))),
//!     ),
//! );
//! assert_eq!(sql.unwrap(), "x JOIN y ON x.a = y.a");
//! ```

mod expression;
mod relation;

use crate::ast::{Expr, Relation};
use crate::dialect::{Dialect, GenericDialect};
use crate::error::CompilerErrors;

/// Compiles expression and relation trees for one dialect.
///
/// The compiler holds no state besides its dialect, so one instance can be
/// reused for any number of trees and shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Compiler<D = GenericDialect> {
    dialect: D,
}

impl Compiler {
    /// Creates a compiler for the generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dialect: GenericDialect::new(),
        }
    }
}

impl<D: Dialect> Compiler<D> {
    /// Creates a compiler for `dialect`.
    #[must_use]
    pub const fn with_dialect(dialect: D) -> Self {
        Self { dialect }
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Compiles an expression to SQL text.
    ///
    /// # Errors
    ///
    /// Returns every error found in the expression.
    pub fn expression_to_sql(&self, expr: &Expr) -> Result<String, CompilerErrors> {
        self.compile_expression(expr).into_result()
    }

    /// Compiles a relation to a SQL statement or clause.
    ///
    /// # Errors
    ///
    /// Returns every error found in the relation.
    pub fn relation_to_sql(&self, relation: &Relation) -> Result<String, CompilerErrors> {
        self.compile_relation(relation).into_result()
    }
}
