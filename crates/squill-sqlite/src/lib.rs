//! # squill-sqlite
//!
//! A typed AST for SQLite statements and a deterministic serializer that
//! lowers any statement tree into SQL text plus an ordered bind-parameter
//! list.
//!
//! # Design
//!
//! - **AST first**: statements are plain immutable values under [`query`].
//!   Construction never fails; well-formedness is checked once, by the
//!   serializer, which fails fast with [`SerializeError`] instead of
//!   handing the database invalid SQL.
//! - **Positional binds**: every literal value in a tree is extracted into
//!   the bind list in order of appearance and replaced by a `?`
//!   placeholder, so the text never embeds user data. The Nth placeholder
//!   always matches the Nth bind.
//! - **SQLite dialect**: the statement shapes unique to SQLite are covered,
//!   including [UPSERT] (`ON CONFLICT ... DO ...`, 3.24.0+) with partial
//!   index targets, `INSERT OR <MODE>` [conflict resolution],
//!   `DEFAULT VALUES`, [RETURNING] (3.35.0+), and SQLite's deliberately
//!   small [ALTER TABLE].
//!
//! [UPSERT]: https://www.sqlite.org/lang_upsert.html
//! [conflict resolution]: https://www.sqlite.org/lang_conflict.html
//! [RETURNING]: https://www.sqlite.org/lang_returning.html
//! [ALTER TABLE]: https://www.sqlite.org/lang_altertable.html
//!
//! # Example
//!
//! ```rust
//! use squill_core::Value;
//! use squill_sqlite::query::{Expr, Insert, InsertSource, TableName};
//! use squill_sqlite::SqliteSerializer;
//!
//! let mut insert = Insert::new(TableName::new("users"));
//! insert.columns = vec![String::from("id"), String::from("name")];
//! insert.source = InsertSource::Values(vec![vec![
//!     Expr::value(1_i64),
//!     Expr::value("Alice"),
//! ]]);
//!
//! let mut serializer = SqliteSerializer::new();
//! let (sql, binds) = serializer.serialize_insert(&insert).unwrap();
//!
//! assert_eq!(sql, r#"INSERT INTO "users" ("id", "name") VALUES (?, ?)"#);
//! assert_eq!(
//!     binds,
//!     vec![Value::Integer(1), Value::Text(String::from("Alice"))]
//! );
//! ```

mod dialect;
mod error;
pub mod query;
pub mod serializer;

pub use dialect::SqliteDialect;
pub use error::SerializeError;
pub use serializer::{Serialized, SqliteSerializer, MAX_DEPTH};
