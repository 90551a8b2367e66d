//! Tests for relation compilation.

mod common;
use common::*;

use relsql_core::{
    CompilerError, Expr, ExpressionError, GroupingElement, JoinType, Relation, Table,
};

#[test]
fn projection_without_source_omits_from() {
    let rel = Relation::none().project(vec![Expr::integer(1), Expr::string("x")]);
    assert_eq!(relation_sql(&rel), "SELECT 1, 'x'");
}

#[test]
fn projection_with_source() {
    let rel = Relation::table("users").project(vec![attr("id")]);
    assert_eq!(relation_sql(&rel), "SELECT id FROM users");
}

#[test]
fn projection_over_selection() {
    let rel = Relation::table("users")
        .select(attr("active").eq(Expr::boolean(true)))
        .project(vec![attr("id"), attr("email")]);
    assert_eq!(
        relation_sql(&rel),
        "SELECT id, email FROM users WHERE active = true"
    );
}

#[test]
fn inner_join_with_predicate() {
    let rel = Relation::table("x").join(
        JoinType::Inner,
        Relation::table("y"),
        Some(Expr::qualified("x", "a").eq(Expr::qualified("y", "a"))),
    );
    assert_eq!(relation_sql(&rel), "x JOIN y ON x.a = y.a");
}

#[test]
fn join_without_predicate() {
    let rel = Relation::table("x").join(JoinType::FullOuter, Relation::table("y"), None);
    assert_eq!(relation_sql(&rel), "x FULL OUTER JOIN y");
}

#[test]
fn join_of_renamed_tables() {
    let users = Table::with_columns("users", ["id"]);
    let orders = Table::with_columns("orders", ["user_id"]);
    let rel = Relation::from(users)
        .rename("u")
        .join(
            JoinType::LeftOuter,
            Relation::from(orders).rename("o"),
            Some(Expr::qualified("u", "id").eq(Expr::qualified("o", "user_id"))),
        )
        .project(vec![Expr::qualified("u", "id")]);
    assert_eq!(
        relation_sql(&rel),
        "SELECT u.id FROM users AS u LEFT OUTER JOIN orders AS o ON u.id = o.user_id"
    );
}

#[test]
fn group_by_plain_expressions() {
    let rel = Relation::table("sales").group_by(
        vec![
            GroupingElement::Expr(attr("region")),
            GroupingElement::Expr(attr("year")),
        ],
        vec![Expr::function("sum", vec![attr("amount")])],
    );
    assert_eq!(relation_sql(&rel), "GROUP BY region, year");
}

#[test]
fn group_by_grouping_sets() {
    let rel = Relation::table("sales").group_by(
        vec![GroupingElement::GroupingSets(vec![
            vec![attr("region"), attr("year")],
            vec![attr("region")],
            vec![],
        ])],
        vec![],
    );
    assert_eq!(
        relation_sql(&rel),
        "GROUP BY GROUPING SETS ((region, year), (region), ())"
    );
}

#[test]
fn group_by_cube_and_rollup() {
    let rel = Relation::table("sales").group_by(
        vec![
            GroupingElement::Cube(vec![attr("a"), attr("b")]),
            GroupingElement::Rollup(vec![attr("c"), attr("d")]),
        ],
        vec![],
    );
    assert_eq!(relation_sql(&rel), "GROUP BY CUBE (a, b), ROLLUP (c, d)");
}

#[test]
fn errors_from_both_join_sides() {
    let broken = |name: &str| Relation::Error {
        error: ExpressionError::UnknownRelation(name.into()),
        relation: Box::new(Relation::table(name)),
    };
    let rel = broken("left").join(
        JoinType::Inner,
        broken("right"),
        Some(Expr::parameter("p")),
    );
    assert_eq!(
        relation_errors(&rel),
        [
            CompilerError::Expression(ExpressionError::UnknownRelation("left".into())),
            CompilerError::Expression(ExpressionError::UnknownRelation("right".into())),
            CompilerError::UnsupportedFeature("parameter binding".into()),
        ]
    );
}

#[test]
fn selection_over_none_is_internal_error() {
    let rel = Relation::none().select(Expr::boolean(true));
    assert!(matches!(
        relation_errors(&rel).as_slice(),
        [CompilerError::Internal(_)]
    ));
}

#[test]
fn errors_in_select_list_and_source() {
    let rel = Relation::table("t")
        .select(attr("a").binary("<=>", Expr::integer(1)))
        .project(vec![Expr::Attribute(Default::default())]);
    let errors = relation_errors(&rel);
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], CompilerError::Internal(_)));
    assert_eq!(errors[1], CompilerError::UnknownBinaryOperator("<=>".into()));
}
