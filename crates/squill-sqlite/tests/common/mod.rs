#![allow(dead_code)]

use squill_core::Value;
use squill_sqlite::query::{Delete, Expr, Insert, Select, Statement, Update};
use squill_sqlite::{SerializeError, SqliteSerializer};

pub fn int(v: i64) -> Expr {
    Expr::value(v)
}

pub fn real(v: f64) -> Expr {
    Expr::value(v)
}

pub fn text(v: &str) -> Expr {
    Expr::value(v)
}

pub fn col(name: &str) -> Expr {
    Expr::column(name)
}

pub fn serialize(statement: &Statement) -> (String, Vec<Value>) {
    SqliteSerializer::new()
        .serialize(statement)
        .unwrap_or_else(|e| panic!("failed to serialize: {e}"))
}

pub fn serialize_insert(insert: &Insert) -> (String, Vec<Value>) {
    let out = SqliteSerializer::new()
        .serialize_insert(insert)
        .unwrap_or_else(|e| panic!("failed to serialize: {e}"));
    assert_well_formed(&out.0);
    out
}

pub fn serialize_select(select: &Select) -> (String, Vec<Value>) {
    let out = SqliteSerializer::new()
        .serialize_select(select)
        .unwrap_or_else(|e| panic!("failed to serialize: {e}"));
    assert_well_formed(&out.0);
    out
}

pub fn serialize_update(update: &Update) -> (String, Vec<Value>) {
    let out = SqliteSerializer::new()
        .serialize_update(update)
        .unwrap_or_else(|e| panic!("failed to serialize: {e}"));
    assert_well_formed(&out.0);
    out
}

pub fn serialize_delete(delete: &Delete) -> (String, Vec<Value>) {
    let out = SqliteSerializer::new()
        .serialize_delete(delete)
        .unwrap_or_else(|e| panic!("failed to serialize: {e}"));
    assert_well_formed(&out.0);
    out
}

pub fn insert_err(insert: &Insert) -> SerializeError {
    SqliteSerializer::new()
        .serialize_insert(insert)
        .expect_err("expected a serialization error")
}

/// Checks the whitespace contract: no leading or trailing whitespace and no
/// doubled internal spaces, whichever optional clauses are present.
pub fn assert_well_formed(sql: &str) {
    assert_eq!(sql, sql.trim(), "leading/trailing whitespace in: {sql}");
    assert!(!sql.contains("  "), "doubled space in: {sql}");
}

/// Checks that placeholder count matches the bind count, the textual half
/// of the positional bind-order contract.
pub fn assert_placeholders(sql: &str, binds: &[Value]) {
    let placeholders = sql.matches('?').count();
    assert_eq!(
        placeholders,
        binds.len(),
        "placeholder/bind mismatch in: {sql}"
    );
}
