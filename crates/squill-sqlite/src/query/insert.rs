//! INSERT statement AST types, including the UPSERT clause.
//!
//! See <https://www.sqlite.org/lang_insert.html> and
//! <https://www.sqlite.org/lang_upsert.html>.

use super::expression::Expr;
use super::select::{ResultColumn, Select};
use super::{ConflictResolution, Direction, SetValues, TableName, WithClause};

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Leading WITH clause (optional).
    pub with: Option<WithClause>,
    /// Statement-level conflict resolution: `INSERT OR <MODE>` (optional).
    pub conflict_resolution: Option<ConflictResolution>,
    /// The target table.
    pub table: TableName,
    /// Column names. Empty means "all columns in table order" and omits the
    /// parenthesized list from the output entirely.
    pub columns: Vec<String>,
    /// The row source.
    pub source: InsertSource,
    /// UPSERT clause (optional).
    pub upsert: Option<OnConflict>,
    /// RETURNING columns (SQLite 3.35.0+). Empty means no RETURNING clause.
    pub returning: Vec<ResultColumn>,
}

impl Insert {
    /// Creates an INSERT into `table` with defaults for every other field:
    /// no WITH, no conflict resolution, no explicit columns,
    /// `DEFAULT VALUES` as the source, no upsert, no RETURNING.
    #[must_use]
    pub fn new(table: TableName) -> Self {
        Self {
            with: None,
            conflict_resolution: None,
            table,
            columns: Vec::new(),
            source: InsertSource::DefaultValues,
            upsert: None,
            returning: Vec::new(),
        }
    }
}

/// Source of rows for an INSERT.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InsertSource {
    /// `VALUES (...), (...)`. Must contain at least one non-empty row at
    /// serialization time.
    Values(Vec<Vec<Expr>>),
    /// `INSERT INTO ... SELECT ...`.
    Select(Box<Select>),
    /// `DEFAULT VALUES`.
    #[default]
    DefaultValues,
}

/// An UPSERT clause: `ON CONFLICT [target] DO <action>`.
#[derive(Debug, Clone, PartialEq)]
pub struct OnConflict {
    /// The conflict target. When absent the clause matches any conflict.
    pub target: Option<IndexedColumns>,
    /// The action to take.
    pub action: ConflictAction,
}

impl OnConflict {
    /// Creates an untargeted `ON CONFLICT DO NOTHING` clause.
    #[must_use]
    pub const fn do_nothing() -> Self {
        Self {
            target: None,
            action: ConflictAction::DoNothing,
        }
    }

    /// Creates an untargeted `ON CONFLICT DO UPDATE` clause.
    #[must_use]
    pub const fn do_update(set: SetValues) -> Self {
        Self {
            target: None,
            action: ConflictAction::DoUpdate(set),
        }
    }

    /// Restricts the clause to a conflict target.
    #[must_use]
    pub fn target(mut self, target: IndexedColumns) -> Self {
        self.target = Some(target);
        self
    }
}

/// The conflict target: the indexed columns of the unique index the upsert
/// applies to, plus the partial-index predicate when targeting a partial
/// index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedColumns {
    /// The indexed columns, in index order.
    pub columns: Vec<IndexedColumn>,
    /// Partial-index WHERE predicate (optional).
    pub predicate: Option<Expr>,
}

impl IndexedColumns {
    /// Creates a conflict target over plain named columns.
    #[must_use]
    pub fn named(names: Vec<String>) -> Self {
        Self {
            columns: names.into_iter().map(IndexedColumn::named).collect(),
            predicate: None,
        }
    }

    /// Adds a partial-index predicate.
    #[must_use]
    pub fn predicate(mut self, predicate: Expr) -> Self {
        self.predicate = Some(predicate);
        self
    }
}

/// One column of a conflict target, with optional collation and direction,
/// matching the indexed-column grammar of CREATE INDEX.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedColumn {
    /// A plain column name or a computed index expression.
    pub value: IndexedColumnValue,
    /// Collation name (optional).
    pub collate: Option<String>,
    /// Sort direction (optional).
    pub direction: Option<Direction>,
}

impl IndexedColumn {
    /// Creates an indexed column over a plain name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            value: IndexedColumnValue::Column(name.into()),
            collate: None,
            direction: None,
        }
    }

    /// Creates an indexed column over an index expression.
    #[must_use]
    pub fn computed(expr: Expr) -> Self {
        Self {
            value: IndexedColumnValue::Expr(expr),
            collate: None,
            direction: None,
        }
    }
}

/// The value of an indexed column: a name or an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexedColumnValue {
    /// A plain column name.
    Column(String),
    /// A computed index expression.
    Expr(Expr),
}

/// The action of an UPSERT clause.
#[derive(Debug, Clone, PartialEq)]
pub enum ConflictAction {
    /// `DO NOTHING`.
    DoNothing,
    /// `DO UPDATE SET ...`. The SET clause must be non-empty at
    /// serialization time.
    DoUpdate(SetValues),
}
