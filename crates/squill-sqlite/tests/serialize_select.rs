//! SELECT serialization: clause layout, joins, expression forms, bind
//! ordering across clauses, and the recursion guard.

mod common;
use common::*;

use squill_core::Value;
use squill_sqlite::query::{
    CommonTableExpression, Direction, Expr, FunctionCall, JoinClause, OrderBy, ResultColumn,
    Select, TableRef, WithClause,
};
use squill_sqlite::{SerializeError, SqliteSerializer, MAX_DEPTH};

fn select_from(table: &str) -> Select {
    let mut select = Select::new();
    select.columns = vec![ResultColumn::Wildcard];
    select.from = Some(TableRef::table(table));
    select
}

#[test]
fn select_star() {
    let (sql, binds) = serialize_select(&select_from("users"));
    assert_eq!(sql, r#"SELECT * FROM "users""#);
    assert!(binds.is_empty());
}

#[test]
fn select_columns_and_where() {
    let mut select = select_from("users");
    select.columns = vec![ResultColumn::column("id"), ResultColumn::column("name")];
    select.predicate = Some(col("active").eq(int(1)).and(col("name").like(text("A%"))));
    let (sql, binds) = serialize_select(&select);
    assert_eq!(
        sql,
        r#"SELECT "id", "name" FROM "users" WHERE "active" = ? AND "name" LIKE ?"#
    );
    assert_eq!(
        binds,
        vec![Value::Integer(1), Value::Text(String::from("A%"))]
    );
}

#[test]
fn select_distinct_with_alias() {
    let mut select = select_from("users");
    select.distinct = true;
    select.columns = vec![ResultColumn::aliased(col("name"), "n")];
    let (sql, _) = serialize_select(&select);
    assert_eq!(sql, r#"SELECT DISTINCT "name" AS "n" FROM "users""#);
}

#[test]
fn select_with_join() {
    let mut select = select_from("users");
    select.from = Some(TableRef::table("users").join(JoinClause::inner(
        TableRef::table("orders"),
        Expr::qualified_column("orders", "user_id").eq(Expr::qualified_column("users", "id")),
    )));
    let (sql, _) = serialize_select(&select);
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" INNER JOIN "orders" ON "orders"."user_id" = "users"."id""#
    );
}

#[test]
fn select_join_using() {
    let mut select = select_from("users");
    select.from = Some(TableRef::table("users").join(JoinClause {
        join_type: squill_sqlite::query::JoinType::Left,
        table: TableRef::table("orders"),
        on: None,
        using: vec![String::from("user_id")],
    }));
    let (sql, _) = serialize_select(&select);
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" LEFT JOIN "orders" USING ("user_id")"#
    );
}

#[test]
fn select_group_by_having_order_limit() {
    let mut select = select_from("orders");
    select.columns = vec![
        ResultColumn::column("user_id"),
        ResultColumn::aliased(Expr::Function(FunctionCall::wildcard("COUNT")), "n"),
    ];
    select.group_by = vec![col("user_id")];
    select.having = Some(Expr::Function(FunctionCall::wildcard("COUNT")).gt(int(5)));
    select.order_by = vec![OrderBy::directed(col("n"), Direction::Desc)];
    select.limit = Some(int(10));
    select.offset = Some(int(20));
    let (sql, binds) = serialize_select(&select);
    assert_eq!(
        sql,
        r#"SELECT "user_id", COUNT(*) AS "n" FROM "orders" GROUP BY "user_id" HAVING COUNT(*) > ? ORDER BY "n" DESC LIMIT ? OFFSET ?"#
    );
    assert_eq!(
        binds,
        vec![Value::Integer(5), Value::Integer(10), Value::Integer(20)]
    );
}

#[test]
fn select_from_subquery() {
    let inner = select_from("raw");
    let mut select = Select::new();
    select.columns = vec![ResultColumn::Wildcard];
    select.from = Some(TableRef::Subquery {
        query: Box::new(inner),
        alias: String::from("r"),
    });
    let (sql, _) = serialize_select(&select);
    assert_eq!(sql, r#"SELECT * FROM (SELECT * FROM "raw") AS "r""#);
}

#[test]
fn select_in_list_and_between() {
    let mut select = select_from("t");
    select.predicate = Some(
        col("a")
            .in_list(vec![int(1), int(2)])
            .and(col("b").between(int(3), int(4))),
    );
    let (sql, binds) = serialize_select(&select);
    assert_eq!(
        sql,
        r#"SELECT * FROM "t" WHERE "a" IN (?, ?) AND "b" BETWEEN ? AND ?"#
    );
    assert_eq!(binds.len(), 4);
}

#[test]
fn select_in_subquery() {
    let mut sub = Select::new();
    sub.columns = vec![ResultColumn::column("id")];
    sub.from = Some(TableRef::table("banned"));
    let mut select = select_from("users");
    select.predicate = Some(col("id").in_select(sub));
    let (sql, _) = serialize_select(&select);
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "id" IN (SELECT "id" FROM "banned")"#
    );
}

#[test]
fn select_exists_and_is_null() {
    let mut sub = Select::new();
    sub.columns = vec![ResultColumn::expr(int(1))];
    sub.from = Some(TableRef::table("orders"));
    let mut select = select_from("users");
    select.predicate = Some(
        Expr::Exists {
            select: Box::new(sub),
            negated: false,
        }
        .and(col("deleted_at").is_null()),
    );
    let (sql, binds) = serialize_select(&select);
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE EXISTS (SELECT ? FROM "orders") AND "deleted_at" IS NULL"#
    );
    assert_eq!(binds, vec![Value::Integer(1)]);
}

#[test]
fn select_case_expression() {
    let mut select = select_from("t");
    select.columns = vec![ResultColumn::expr(Expr::Case {
        operand: None,
        when_clauses: vec![(col("a").gt(int(0)), text("pos"))],
        else_clause: Some(Box::new(text("neg"))),
    })];
    let (sql, binds) = serialize_select(&select);
    assert_eq!(
        sql,
        r#"SELECT CASE WHEN "a" > ? THEN ? ELSE ? END FROM "t""#
    );
    assert_eq!(binds.len(), 3);
}

#[test]
fn select_collate_in_order_by() {
    let mut select = select_from("t");
    select.order_by = vec![OrderBy::new(col("name").collate("NOCASE"))];
    let (sql, _) = serialize_select(&select);
    assert_eq!(sql, r#"SELECT * FROM "t" ORDER BY "name" COLLATE NOCASE"#);
}

#[test]
fn with_recursive_cte() {
    let mut body = Select::new();
    body.columns = vec![ResultColumn::expr(int(1))];
    let mut cte = CommonTableExpression::new("cnt", body);
    cte.columns = vec![String::from("x")];
    let mut select = Select::new();
    select.with = Some(WithClause {
        recursive: true,
        ctes: vec![cte],
    });
    select.columns = vec![ResultColumn::Wildcard];
    select.from = Some(TableRef::table("cnt"));
    let (sql, _) = serialize_select(&select);
    assert_eq!(
        sql,
        r#"WITH RECURSIVE "cnt" ("x") AS (SELECT ?) SELECT * FROM "cnt""#
    );
}

#[test]
fn precedence_parenthesizes_or_under_and() {
    let mut select = select_from("t");
    select.predicate = Some(
        col("a")
            .eq(int(1))
            .or(col("b").eq(int(2)))
            .and(col("c").eq(int(3))),
    );
    let (sql, _) = serialize_select(&select);
    assert_eq!(
        sql,
        r#"SELECT * FROM "t" WHERE ("a" = ? OR "b" = ?) AND "c" = ?"#
    );
}

#[test]
fn arithmetic_precedence_is_preserved() {
    let mut select = select_from("t");
    select.columns = vec![ResultColumn::expr(
        col("a").binary(
            squill_sqlite::query::BinaryOp::Mul,
            col("b").binary(squill_sqlite::query::BinaryOp::Add, col("c")),
        ),
    )];
    let (sql, _) = serialize_select(&select);
    assert_eq!(sql, r#"SELECT "a" * ("b" + "c") FROM "t""#);
}

#[test]
fn empty_result_columns_fail_fast() {
    let select = Select::new();
    let err = SqliteSerializer::new()
        .serialize_select(&select)
        .expect_err("empty SELECT must not serialize");
    assert_eq!(
        err,
        SerializeError::MalformedStatement("SELECT requires at least one result column")
    );
}

#[test]
fn pathological_nesting_is_rejected() {
    let mut expr = int(0);
    for _ in 0..=MAX_DEPTH {
        expr = expr.paren();
    }
    let mut select = Select::new();
    select.columns = vec![ResultColumn::expr(expr)];
    let err = SqliteSerializer::new()
        .serialize_select(&select)
        .expect_err("unbounded nesting must be rejected");
    assert_eq!(err, SerializeError::TooDeeplyNested { limit: MAX_DEPTH });
}

#[test]
fn bind_order_spans_all_clauses() {
    let mut select = select_from("t");
    select.predicate = Some(col("a").eq(int(1)));
    select.having = Some(col("b").gt(int(2)));
    select.group_by = vec![col("b")];
    select.limit = Some(int(3));
    let (sql, binds) = serialize_select(&select);
    assert_placeholders(&sql, &binds);
    assert_eq!(
        binds,
        vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
    );
}
