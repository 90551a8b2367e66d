//! Expression and relational-algebra trees consumed by the compiler.
//!
//! Trees are built and validated by the binding layer. The compiler only
//! reads them.

mod error;
mod expression;
mod relation;

pub use error::ExpressionError;
pub use expression::{AttributeReference, Expr, Literal};
pub use relation::{GroupingElement, JoinType, Relation, Table};
