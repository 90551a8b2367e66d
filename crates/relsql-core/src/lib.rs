//! # relsql-core
//!
//! Compiles expression trees and relational-algebra trees into SQL text for a
//! given dialect.
//!
//! This crate provides:
//! - Tree types for scalar expressions and relations ([`ast`])
//! - Pluggable operator tables with precedence ([`dialect`])
//! - A compiler that parenthesizes by precedence and reports every error it
//!   finds, not just the first ([`compiler`])
//!
//! ## Compiling a query
//!
//! ```rust
//! use relsql_core::{Compiler, Expr, Relation};
//!
//! let query = Relation::table("orders")
//!     .select(Expr::attribute("total").binary(">", Expr::integer(100)))
//!     .project(vec![Expr::attribute("id"), Expr::attribute("total")]);
//!
//! let sql = Compiler::new().relation_to_sql(&query).unwrap();
//! assert_eq!(sql, "SELECT id, total FROM orders WHERE total > 100");
//! ```
//!
//! ## Error accumulation
//!
//! Failures are values, merged across the whole tree:
//!
//! ```rust
//! use relsql_core::{Compiler, CompilerError, Expr};
//!
//! let list = vec![
//!     Expr::attribute("a"),
//!     Expr::integer(1).binary("<=>", Expr::integer(2)),
//!     Expr::attribute("b"),
//!     Expr::integer(3).binary("===", Expr::integer(4)),
//! ];
//! let errors = Compiler::new()
//!     .compile_expressions(&list, None)
//!     .into_result()
//!     .unwrap_err();
//!
//! assert_eq!(
//!     errors.into_vec(),
//!     vec![
//!         CompilerError::UnknownBinaryOperator("<=>".into()),
//!         CompilerError::UnknownBinaryOperator("===".into()),
//!     ]
//! );
//! ```

pub mod ast;
pub mod compiler;
pub mod dialect;
pub mod error;
pub mod fragment;

pub use ast::{
    AttributeReference, Expr, ExpressionError, GroupingElement, JoinType, Literal, Relation, Table,
};
pub use compiler::Compiler;
pub use dialect::{Dialect, GenericDialect, OperatorInfo, OperatorTable};
pub use error::{CompilerError, CompilerErrors};
pub use fragment::SqlFragment;
