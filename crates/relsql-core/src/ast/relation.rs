//! Relational-algebra tree types.

use serde::{Deserialize, Serialize};

use super::error::ExpressionError;
use super::expression::Expr;

/// A named base table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Column names. Not used when rendering.
    #[serde(default)]
    pub columns: Vec<String>,
}

impl Table {
    /// Creates a table without a known schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Creates a table with the given column names.
    #[must_use]
    pub fn with_columns<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
    /// Inner join.
    #[default]
    Inner,
    /// LEFT OUTER JOIN.
    LeftOuter,
    /// RIGHT OUTER JOIN.
    RightOuter,
    /// FULL OUTER JOIN.
    FullOuter,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "JOIN",
            Self::LeftOuter => "LEFT OUTER JOIN",
            Self::RightOuter => "RIGHT OUTER JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
        }
    }
}

/// One element of a GROUP BY clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingElement {
    /// A plain grouping expression.
    Expr(Expr),
    /// `GROUPING SETS ((a, b), (c))`.
    GroupingSets(Vec<Vec<Expr>>),
    /// `CUBE (a, b)`.
    Cube(Vec<Expr>),
    /// `ROLLUP (a, b)`.
    Rollup(Vec<Expr>),
}

/// A relational-algebra node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// The empty relation. Marks statements that have no source.
    #[default]
    None,

    /// A base table.
    Table(Table),

    /// A renamed relation (`relation AS name`).
    Rename {
        /// The alias.
        name: String,
        /// The renamed relation.
        relation: Box<Relation>,
    },

    /// A projection (`SELECT ...`).
    Projection {
        /// The select list.
        select_list: Vec<Expr>,
        /// The source relation.
        #[serde(default)]
        relation: Box<Relation>,
    },

    /// A selection (`... WHERE predicate`).
    Selection {
        /// The filter predicate.
        predicate: Expr,
        /// The filtered relation.
        relation: Box<Relation>,
    },

    /// A join of two relations.
    Join {
        /// The kind of join.
        #[serde(default)]
        join_type: JoinType,
        /// Left side of the join.
        left: Box<Relation>,
        /// Right side of the join.
        right: Box<Relation>,
        /// The join condition.
        #[serde(default)]
        predicate: Option<Expr>,
    },

    /// A grouping with aggregates.
    Group {
        /// GROUP BY elements.
        group: Vec<GroupingElement>,
        /// Aggregate expressions.
        #[serde(default)]
        aggregates: Vec<Expr>,
        /// The grouped relation.
        relation: Box<Relation>,
    },

    /// A node that failed to build upstream.
    Error {
        /// The upstream error.
        error: ExpressionError,
        /// The relation the error occurred within.
        relation: Box<Relation>,
    },
}

impl Relation {
    /// Creates the empty relation.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a base table relation.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table(Table::new(name))
    }

    /// Returns `true` for the empty relation.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns a short name for the kind of node, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Table(_) => "table",
            Self::Rename { .. } => "rename",
            Self::Projection { .. } => "projection",
            Self::Selection { .. } => "selection",
            Self::Join { .. } => "join",
            Self::Group { .. } => "group",
            Self::Error { .. } => "error",
        }
    }

    /// Renames this relation.
    #[must_use]
    pub fn rename(self, name: impl Into<String>) -> Self {
        Self::Rename {
            name: name.into(),
            relation: Box::new(self),
        }
    }

    /// Projects this relation onto `select_list`.
    #[must_use]
    pub fn project(self, select_list: Vec<Expr>) -> Self {
        Self::Projection {
            select_list,
            relation: Box::new(self),
        }
    }

    /// Filters this relation by `predicate`.
    #[must_use]
    pub fn select(self, predicate: Expr) -> Self {
        Self::Selection {
            predicate,
            relation: Box::new(self),
        }
    }

    /// Joins this relation with `right`.
    #[must_use]
    pub fn join(self, join_type: JoinType, right: Self, predicate: Option<Expr>) -> Self {
        Self::Join {
            join_type,
            left: Box::new(self),
            right: Box::new(right),
            predicate,
        }
    }

    /// Groups this relation.
    #[must_use]
    pub fn group_by(self, group: Vec<GroupingElement>, aggregates: Vec<Expr>) -> Self {
        Self::Group {
            group,
            aggregates,
            relation: Box::new(self),
        }
    }
}

impl From<Table> for Relation {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}
