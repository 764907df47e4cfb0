//! Table DDL serialization: CREATE TABLE bodies and constraints, the
//! inline-literal rule for DDL, ALTER TABLE forms, and DROP TABLE.

mod common;
use common::*;

use squill_sqlite::query::{
    AlterTable, AlterTableOperation, ColumnConstraint, ColumnDefinition, ConflictResolution,
    CreateTable, CreateTableSource, DropTable, Expr, ForeignKeyAction, ForeignKeyReference,
    ResultColumn, Select, TableConstraint, TableName, TableRef, TypeName,
};
use squill_sqlite::{SerializeError, SqliteSerializer};

fn serialize_create(create: &CreateTable) -> String {
    let (sql, binds) = SqliteSerializer::new()
        .serialize_create_table(create)
        .unwrap_or_else(|e| panic!("failed to serialize: {e}"));
    assert!(binds.is_empty(), "DDL must not produce binds");
    assert_well_formed(&sql);
    sql
}

#[test]
fn create_table_basic() {
    let create = CreateTable::new(
        TableName::new("users"),
        vec![
            ColumnDefinition::new("id", TypeName::integer())
                .constraint(ColumnConstraint::primary_key_autoincrement()),
            ColumnDefinition::new("name", TypeName::text())
                .constraint(ColumnConstraint::not_null()),
        ],
    );
    assert_eq!(
        serialize_create(&create),
        r#"CREATE TABLE "users" ("id" INTEGER PRIMARY KEY AUTOINCREMENT, "name" TEXT NOT NULL)"#
    );
}

#[test]
fn create_table_if_not_exists_temporary() {
    let create = CreateTable::new(
        TableName::new("scratch"),
        vec![ColumnDefinition::new("v", TypeName::blob())],
    )
    .temporary()
    .if_not_exists();
    assert_eq!(
        serialize_create(&create),
        r#"CREATE TEMPORARY TABLE IF NOT EXISTS "scratch" ("v" BLOB)"#
    );
}

#[test]
fn create_table_default_renders_inline() {
    let create = CreateTable::new(
        TableName::new("t"),
        vec![
            ColumnDefinition::new("state", TypeName::text())
                .constraint(ColumnConstraint::Default(text("new"))),
            ColumnDefinition::new("n", TypeName::integer())
                .constraint(ColumnConstraint::Default(int(0))),
        ],
    );
    assert_eq!(
        serialize_create(&create),
        r#"CREATE TABLE "t" ("state" TEXT DEFAULT 'new', "n" INTEGER DEFAULT 0)"#
    );
}

#[test]
fn create_table_check_and_collate() {
    let create = CreateTable::new(
        TableName::new("t"),
        vec![
            ColumnDefinition::new("age", TypeName::integer())
                .constraint(ColumnConstraint::Check(col("age").gt_eq(int(0)))),
            ColumnDefinition::new("name", TypeName::text())
                .constraint(ColumnConstraint::Collate(String::from("NOCASE"))),
        ],
    );
    assert_eq!(
        serialize_create(&create),
        r#"CREATE TABLE "t" ("age" INTEGER CHECK ("age" >= 0), "name" TEXT COLLATE NOCASE)"#
    );
}

#[test]
fn create_table_not_null_on_conflict() {
    let create = CreateTable::new(
        TableName::new("t"),
        vec![ColumnDefinition::new("a", TypeName::integer()).constraint(
            ColumnConstraint::NotNull {
                conflict: Some(ConflictResolution::Rollback),
            },
        )],
    );
    assert_eq!(
        serialize_create(&create),
        r#"CREATE TABLE "t" ("a" INTEGER NOT NULL ON CONFLICT ROLLBACK)"#
    );
}

#[test]
fn create_table_foreign_key_column_constraint() {
    let create = CreateTable::new(
        TableName::new("orders"),
        vec![ColumnDefinition::new("user_id", TypeName::integer()).constraint(
            ColumnConstraint::References(
                ForeignKeyReference::new("users")
                    .columns(vec![String::from("id")])
                    .on_delete(ForeignKeyAction::Cascade),
            ),
        )],
    );
    assert_eq!(
        serialize_create(&create),
        r#"CREATE TABLE "orders" ("user_id" INTEGER REFERENCES "users" ("id") ON DELETE CASCADE)"#
    );
}

#[test]
fn create_table_table_constraints_and_without_rowid() {
    let create = CreateTable {
        temporary: false,
        if_not_exists: false,
        table: TableName::new("pairs"),
        source: CreateTableSource::Columns {
            columns: vec![
                ColumnDefinition::new("a", TypeName::integer()),
                ColumnDefinition::new("b", TypeName::integer()),
            ],
            constraints: vec![TableConstraint::PrimaryKey {
                columns: vec![String::from("a"), String::from("b")],
                conflict: None,
            }],
            without_rowid: true,
        },
    };
    assert_eq!(
        serialize_create(&create),
        r#"CREATE TABLE "pairs" ("a" INTEGER, "b" INTEGER, PRIMARY KEY ("a", "b")) WITHOUT ROWID"#
    );
}

#[test]
fn create_table_as_select() {
    let mut select = Select::new();
    select.columns = vec![ResultColumn::Wildcard];
    select.from = Some(TableRef::table("users"));
    let create = CreateTable::as_select(TableName::new("users_copy"), select);
    assert_eq!(
        serialize_create(&create),
        r#"CREATE TABLE "users_copy" AS SELECT * FROM "users""#
    );
}

#[test]
fn create_table_varchar_arguments() {
    let create = CreateTable::new(
        TableName::new("t"),
        vec![ColumnDefinition::new(
            "name",
            TypeName {
                name: String::from("VARCHAR"),
                arguments: vec![255],
            },
        )],
    );
    assert_eq!(
        serialize_create(&create),
        r#"CREATE TABLE "t" ("name" VARCHAR(255))"#
    );
}

#[test]
fn create_table_computed_default_is_parenthesized() {
    let create = CreateTable::new(
        TableName::new("t"),
        vec![ColumnDefinition::new("a", TypeName::integer()).constraint(
            ColumnConstraint::Default(Expr::Function(
                squill_sqlite::query::FunctionCall::new("abs", vec![int(-1)]),
            )),
        )],
    );
    assert_eq!(
        serialize_create(&create),
        r#"CREATE TABLE "t" ("a" INTEGER DEFAULT (abs(-1)))"#
    );
}

#[test]
fn create_table_without_columns_fails_fast() {
    let create = CreateTable::new(TableName::new("t"), Vec::new());
    let err = SqliteSerializer::new()
        .serialize_create_table(&create)
        .expect_err("CREATE TABLE with no columns must not serialize");
    assert_eq!(
        err,
        SerializeError::MalformedStatement("CREATE TABLE requires at least one column")
    );
}

#[test]
fn alter_table_rename() {
    let alter = AlterTable {
        table: TableName::new("users"),
        operation: AlterTableOperation::RenameTo(String::from("people")),
    };
    let (sql, _) = SqliteSerializer::new().serialize_alter_table(&alter).unwrap();
    assert_eq!(sql, r#"ALTER TABLE "users" RENAME TO "people""#);
}

#[test]
fn alter_table_rename_column() {
    let alter = AlterTable {
        table: TableName::new("users"),
        operation: AlterTableOperation::RenameColumn {
            old: String::from("name"),
            new: String::from("full_name"),
        },
    };
    let (sql, _) = SqliteSerializer::new().serialize_alter_table(&alter).unwrap();
    assert_eq!(
        sql,
        r#"ALTER TABLE "users" RENAME COLUMN "name" TO "full_name""#
    );
}

#[test]
fn alter_table_add_column_with_inline_default() {
    let alter = AlterTable {
        table: TableName::new("users"),
        operation: AlterTableOperation::AddColumn(
            ColumnDefinition::new("active", TypeName::integer())
                .constraint(ColumnConstraint::Default(int(1))),
        ),
    };
    let (sql, binds) = SqliteSerializer::new().serialize_alter_table(&alter).unwrap();
    assert_eq!(
        sql,
        r#"ALTER TABLE "users" ADD COLUMN "active" INTEGER DEFAULT 1"#
    );
    assert!(binds.is_empty());
}

#[test]
fn alter_table_drop_column() {
    let alter = AlterTable {
        table: TableName::new("users"),
        operation: AlterTableOperation::DropColumn(String::from("legacy")),
    };
    let (sql, _) = SqliteSerializer::new().serialize_alter_table(&alter).unwrap();
    assert_eq!(sql, r#"ALTER TABLE "users" DROP COLUMN "legacy""#);
}

#[test]
fn drop_table() {
    let drop = DropTable::new(TableName::new("users"));
    let (sql, binds) = SqliteSerializer::new().serialize_drop_table(&drop).unwrap();
    assert_eq!(sql, r#"DROP TABLE "users""#);
    assert!(binds.is_empty());
}

#[test]
fn drop_table_if_exists() {
    let drop = DropTable::new(TableName::new("users")).if_exists();
    let (sql, _) = SqliteSerializer::new().serialize_drop_table(&drop).unwrap();
    assert_eq!(sql, r#"DROP TABLE IF EXISTS "users""#);
}
