//! Accumulating SQL text.
//!
//! A [`SqlFragment`] is either a piece of SQL text or the non-empty list of
//! errors that prevented producing it. Concatenating fragments keeps the
//! errors of *both* sides, so compiling a whole tree reports every failure
//! in it instead of stopping at the first one.
//!
//! ```rust
//! use relsql_core::fragment::SqlFragment;
//! use relsql_core::CompilerError;
//!
//! let ok = SqlFragment::text("a") + ", " + SqlFragment::text("b");
//! assert_eq!(ok.as_str(), Some("a, b"));
//!
//! let failed = SqlFragment::fail(CompilerError::internal("x"))
//!     + SqlFragment::text("b")
//!     + SqlFragment::fail(CompilerError::internal("y"));
//! assert_eq!(failed.errors().map(|e| e.len()), Some(2));
//! ```

use std::ops::{Add, AddAssign};

use crate::error::{CompilerError, CompilerErrors};

/// SQL text or the errors found while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct SqlFragment(Result<String, CompilerErrors>);

impl SqlFragment {
    /// Creates a successful fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Self(Ok(text.into()))
    }

    /// Creates a failed fragment with a single error.
    pub fn fail(error: CompilerError) -> Self {
        Self(Err(CompilerErrors::one(error)))
    }

    /// Creates a failed fragment from an error list.
    pub const fn fail_all(errors: CompilerErrors) -> Self {
        Self(Err(errors))
    }

    /// Concatenates two fragments.
    ///
    /// Two texts are appended. If either side failed the result fails with
    /// the errors of the left side followed by those of the right side.
    pub fn combine(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Ok(mut left), Ok(right)) => {
                left.push_str(&right);
                Self(Ok(left))
            }
            (Ok(_), Err(errors)) | (Err(errors), Ok(_)) => Self(Err(errors)),
            (Err(mut left), Err(right)) => {
                left.extend(right);
                Self(Err(left))
            }
        }
    }

    /// Concatenates `items`, putting `separator` between adjacent items.
    pub fn join<I>(items: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut out = Self::default();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                out += separator;
            }
            out += item;
        }
        out
    }

    /// Surrounds the text with `left` and `right` when `condition` holds.
    ///
    /// A failed fragment is returned unchanged.
    pub fn wrap_if(self, left: &str, right: &str, condition: bool) -> Self {
        match self.0 {
            Ok(text) if condition => Self(Ok(format!("{left}{text}{right}"))),
            other => Self(other),
        }
    }

    /// Surrounds the text with `left` and `right`.
    pub fn wrap(self, left: &str, right: &str) -> Self {
        self.wrap_if(left, right, true)
    }

    /// Surrounds the text with single spaces.
    pub fn pad(self) -> Self {
        self.wrap(" ", " ")
    }

    /// Keeps this fragment's text but takes on the errors of `other`.
    ///
    /// Used for sub-trees that must be valid but are not rendered.
    pub fn check(self, other: Self) -> Self {
        match other.0 {
            Ok(_) => self,
            Err(errors) => self.combine(Self(Err(errors))),
        }
    }

    /// Returns `true` if the fragment holds text.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    /// Returns the text, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref().ok()
    }

    /// Returns the errors, if any.
    #[must_use]
    pub const fn errors(&self) -> Option<&CompilerErrors> {
        match &self.0 {
            Ok(_) => None,
            Err(errors) => Some(errors),
        }
    }

    /// Converts into a plain `Result`.
    ///
    /// # Errors
    ///
    /// Returns every error collected in this fragment.
    pub fn into_result(self) -> Result<String, CompilerErrors> {
        self.0
    }
}

impl Default for SqlFragment {
    fn default() -> Self {
        Self(Ok(String::new()))
    }
}

impl From<&str> for SqlFragment {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for SqlFragment {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<CompilerError> for SqlFragment {
    fn from(error: CompilerError) -> Self {
        Self::fail(error)
    }
}

impl From<SqlFragment> for Result<String, CompilerErrors> {
    fn from(fragment: SqlFragment) -> Self {
        fragment.0
    }
}

impl Add for SqlFragment {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl Add<&str> for SqlFragment {
    type Output = Self;

    fn add(mut self, rhs: &str) -> Self {
        if let Ok(text) = &mut self.0 {
            text.push_str(rhs);
        }
        self
    }
}

impl Add<SqlFragment> for &str {
    type Output = SqlFragment;

    fn add(self, rhs: SqlFragment) -> SqlFragment {
        SqlFragment::text(self).combine(rhs)
    }
}

impl AddAssign for SqlFragment {
    fn add_assign(&mut self, rhs: Self) {
        let lhs = std::mem::take(self);
        *self = lhs.combine(rhs);
    }
}

impl AddAssign<&str> for SqlFragment {
    fn add_assign(&mut self, rhs: &str) {
        if let Ok(text) = &mut self.0 {
            text.push_str(rhs);
        }
    }
}

impl FromIterator<SqlFragment> for SqlFragment {
    fn from_iter<I: IntoIterator<Item = SqlFragment>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::combine)
    }
}
