//! SQLite statement AST types.
//!
//! Every type here is a plain immutable value: construction never validates
//! beyond what the type system enforces, and malformed combinations (an
//! empty `VALUES` row list, an empty `SET`) are caught once, by the
//! serializer. Parents own their children by value, so a statement tree is
//! always acyclic and dropped as a unit.

mod delete;
mod expression;
mod insert;
mod schema;
mod select;
mod update;

pub use delete::Delete;
pub use expression::{
    BinaryOp, ColumnName, Expr, FunctionArgs, FunctionCall, InSource, UnaryOp,
};
pub use insert::{
    ConflictAction, IndexedColumn, IndexedColumnValue, IndexedColumns, Insert, InsertSource,
    OnConflict,
};
pub use schema::{
    AlterTable, AlterTableOperation, ColumnConstraint, ColumnDefinition, CreateTable,
    CreateTableSource, DropTable, ForeignKeyAction, ForeignKeyReference, TableConstraint,
    TypeName,
};
pub use select::{JoinClause, JoinType, NullOrdering, OrderBy, ResultColumn, Select, TableRef};
pub use update::Update;

/// A SQLite statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// SELECT statement.
    Select(Select),
    /// INSERT statement.
    Insert(Insert),
    /// UPDATE statement.
    Update(Update),
    /// DELETE statement.
    Delete(Delete),
    /// CREATE TABLE statement.
    CreateTable(CreateTable),
    /// ALTER TABLE statement.
    AlterTable(AlterTable),
    /// DROP TABLE statement.
    DropTable(DropTable),
}

/// A table name with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName {
    /// The table name.
    pub name: String,
    /// Alias (optional).
    pub alias: Option<String>,
}

impl TableName {
    /// Creates a table name without an alias.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Adds an alias to this table name.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Sort direction for ORDER BY and indexed columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl Direction {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Statement-level conflict-resolution algorithm (`INSERT OR REPLACE`,
/// `UPDATE OR IGNORE`, ...).
///
/// Distinct from the row-level [`OnConflict`] upsert clause: this picks one
/// of SQLite's five conflict-resolution algorithms for the whole statement.
///
/// See <https://www.sqlite.org/lang_conflict.html>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResolution {
    /// Abort the statement and roll back the enclosing transaction.
    Rollback,
    /// Abort and back out changes of this statement only (SQLite's default).
    Abort,
    /// Stop, keeping changes of prior rows of this statement.
    Fail,
    /// Skip the conflicting row and continue.
    Ignore,
    /// Delete the conflicting rows, then proceed.
    Replace,
}

impl ConflictResolution {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rollback => "ROLLBACK",
            Self::Abort => "ABORT",
            Self::Fail => "FAIL",
            Self::Ignore => "IGNORE",
            Self::Replace => "REPLACE",
        }
    }
}

/// A WITH clause introducing common table expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct WithClause {
    /// Whether the CTEs may be recursive.
    pub recursive: bool,
    /// The common table expressions, in declaration order.
    pub ctes: Vec<CommonTableExpression>,
}

impl WithClause {
    /// Creates a non-recursive WITH clause.
    #[must_use]
    pub const fn new(ctes: Vec<CommonTableExpression>) -> Self {
        Self {
            recursive: false,
            ctes,
        }
    }
}

/// A single common table expression: `name (columns) AS (select)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpression {
    /// The CTE name.
    pub name: String,
    /// Explicit column names (optional).
    pub columns: Vec<String>,
    /// The defining query.
    pub select: Select,
}

impl CommonTableExpression {
    /// Creates a CTE without an explicit column list.
    #[must_use]
    pub fn new(name: impl Into<String>, select: Select) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            select,
        }
    }
}

/// A SET clause: assignments plus an optional trailing WHERE.
///
/// Shared by UPDATE and by the upsert `DO UPDATE` action; in the latter the
/// predicate restricts which conflicting rows are updated.
#[derive(Debug, Clone, PartialEq)]
pub struct SetValues {
    /// The assignments, in declaration order.
    pub assignments: Vec<Assignment>,
    /// Optional WHERE restricting the update.
    pub predicate: Option<Expr>,
}

impl SetValues {
    /// Creates a SET clause without a predicate.
    #[must_use]
    pub const fn new(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            predicate: None,
        }
    }
}

/// One assignment in a SET clause.
///
/// SQLite allows the left-hand side to be a single column or a
/// parenthesized column group: `a = expr` or `(a, b) = (expr)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The assigned column or column group.
    pub columns: Vec<String>,
    /// The value expression.
    pub value: Expr,
}

impl Assignment {
    /// Creates a single-column assignment.
    #[must_use]
    pub fn new(column: impl Into<String>, value: Expr) -> Self {
        Self {
            columns: vec![column.into()],
            value,
        }
    }

    /// Creates a column-group assignment: `(a, b) = (...)`.
    #[must_use]
    pub fn group(columns: Vec<String>, value: Expr) -> Self {
        Self { columns, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_keywords() {
        assert_eq!(Direction::Asc.as_str(), "ASC");
        assert_eq!(Direction::Desc.as_str(), "DESC");
        assert_eq!(Direction::default(), Direction::Asc);
    }

    #[test]
    fn conflict_resolution_keywords() {
        assert_eq!(ConflictResolution::Rollback.as_str(), "ROLLBACK");
        assert_eq!(ConflictResolution::Abort.as_str(), "ABORT");
        assert_eq!(ConflictResolution::Fail.as_str(), "FAIL");
        assert_eq!(ConflictResolution::Ignore.as_str(), "IGNORE");
        assert_eq!(ConflictResolution::Replace.as_str(), "REPLACE");
    }

    #[test]
    fn table_name_alias() {
        let t = TableName::new("users").alias("u");
        assert_eq!(t.name, "users");
        assert_eq!(t.alias.as_deref(), Some("u"));
    }
}
