//! Compilation errors.

use thiserror::Error;

use crate::ast::ExpressionError;

/// An error found while compiling a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilerError {
    /// The dialect has no binary operator with this symbol.
    #[error("unknown binary operator '{0}'")]
    UnknownBinaryOperator(String),

    /// The dialect has no unary operator with this symbol.
    #[error("unknown unary operator '{0}'")]
    UnknownUnaryOperator(String),

    /// An error carried in the tree by the binding layer.
    #[error("expression error: {0}")]
    Expression(#[from] ExpressionError),

    /// A broken invariant in the input tree.
    #[error("internal error: {0}")]
    Internal(String),

    /// A construct the compiler does not support.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),
}

impl CompilerError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Creates an unsupported-feature error.
    #[must_use]
    pub fn unsupported(feature: impl Into<String>) -> Self {
        Self::UnsupportedFeature(feature.into())
    }
}

/// Every error found in one compilation, in the order they were found.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n"))]
pub struct CompilerErrors(Vec<CompilerError>);

impl CompilerErrors {
    /// Wraps a single error.
    #[must_use]
    pub fn one(error: CompilerError) -> Self {
        Self(vec![error])
    }

    /// Wraps a list of errors. Returns `None` if the list is empty.
    #[must_use]
    pub fn from_vec(errors: Vec<CompilerError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Appends the errors of `other`, keeping their order.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns the first error.
    #[must_use]
    pub fn first(&self) -> &CompilerError {
        &self.0[0]
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, CompilerError> {
        self.0.iter()
    }

    /// Returns the errors as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<CompilerError> {
        self.0
    }
}

impl From<CompilerError> for CompilerErrors {
    fn from(error: CompilerError) -> Self {
        Self::one(error)
    }
}

impl<'a> IntoIterator for &'a CompilerErrors {
    type Item = &'a CompilerError;
    type IntoIter = std::slice::Iter<'a, CompilerError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for CompilerErrors {
    type Item = CompilerError;
    type IntoIter = std::vec::IntoIter<CompilerError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
