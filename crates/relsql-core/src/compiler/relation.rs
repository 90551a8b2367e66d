//! Relation compilation.

use tracing::trace;

use super::Compiler;
use crate::ast::{GroupingElement, Relation};
use crate::dialect::Dialect;
use crate::error::CompilerError;
use crate::fragment::SqlFragment;

impl<D: Dialect> Compiler<D> {
    /// Compiles a relation into a SQL statement or clause.
    pub fn compile_relation(&self, relation: &Relation) -> SqlFragment {
        trace!(kind = relation.kind(), "compiling relation");

        match relation {
            Relation::None => {
                SqlFragment::fail(CompilerError::internal("cannot compile the empty relation"))
            }
            Relation::Table(table) => SqlFragment::text(table.name.as_str()),
            Relation::Rename { name, relation } => {
                self.compile_relation(relation) + " AS " + name.as_str()
            }
            Relation::Projection {
                select_list,
                relation,
            } => {
                let mut out = "SELECT " + self.compile_expressions(select_list, None);
                if !relation.is_none() {
                    out += " FROM ";
                    out += self.compile_relation(relation);
                }
                out
            }
            Relation::Selection {
                predicate,
                relation,
            } => self.compile_relation(relation) + " WHERE " + self.compile_expression(predicate),
            Relation::Join {
                join_type,
                left,
                right,
                predicate,
            } => {
                let mut out = self.compile_relation(left)
                    + SqlFragment::text(join_type.as_str()).pad()
                    + self.compile_relation(right);
                if let Some(predicate) = predicate {
                    out += " ON ";
                    out += self.compile_expression(predicate);
                }
                out
            }
            Relation::Group {
                group,
                aggregates,
                relation,
            } => {
                let elements = group
                    .iter()
                    .map(|element| self.compile_grouping_element(element));
                let mut out = "GROUP BY " + SqlFragment::join(elements, ", ");

                // Only the clause is rendered; the rest still has to compile.
                out = out.check(self.compile_expressions(aggregates, None));
                if !relation.is_none() {
                    out = out.check(self.compile_relation(relation));
                }
                out
            }
            // The enclosing relation is not reported.
            Relation::Error { error, .. } => SqlFragment::fail(error.clone().into()),
        }
    }

    fn compile_grouping_element(&self, element: &GroupingElement) -> SqlFragment {
        match element {
            GroupingElement::Expr(expr) => self.compile_expression(expr),
            GroupingElement::GroupingSets(sets) => {
                let sets = sets
                    .iter()
                    .map(|set| self.compile_expressions(set, Some(("(", ")"))));
                "GROUPING SETS " + SqlFragment::join(sets, ", ").wrap("(", ")")
            }
            GroupingElement::Cube(exprs) => "CUBE " + self.compile_expressions(exprs, Some(("(", ")"))),
            GroupingElement::Rollup(exprs) => {
                "ROLLUP " + self.compile_expressions(exprs, Some(("(", ")")))
            }
        }
    }
}
