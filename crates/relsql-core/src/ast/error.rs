//! Errors produced upstream by the tree-building layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error recorded in a tree by the schema/binding layer.
///
/// The compiler never creates these; it only carries them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionError {
    /// No attribute with this name is visible.
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    /// More than one visible attribute has this name.
    #[error("ambiguous attribute '{0}'")]
    AmbiguousAttribute(String),

    /// No relation with this name is known.
    #[error("unknown relation '{0}'")]
    UnknownRelation(String),

    /// Any other binding failure.
    #[error("{0}")]
    Other(String),
}
