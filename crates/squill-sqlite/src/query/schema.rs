//! Table DDL AST types: CREATE TABLE, ALTER TABLE, DROP TABLE.
//!
//! SQLite's ALTER TABLE is deliberately small: only RENAME TO,
//! RENAME COLUMN, ADD COLUMN, and DROP COLUMN (3.35.0+) exist.
//!
//! See <https://www.sqlite.org/lang_createtable.html> and
//! <https://www.sqlite.org/lang_altertable.html>.

use super::expression::Expr;
use super::select::Select;
use super::{ConflictResolution, Direction, TableName};

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Whether the table is TEMPORARY.
    pub temporary: bool,
    /// Whether IF NOT EXISTS was requested.
    pub if_not_exists: bool,
    /// The table name.
    pub table: TableName,
    /// Column definitions or a defining query.
    pub source: CreateTableSource,
}

impl CreateTable {
    /// Creates a plain CREATE TABLE with the given column definitions.
    #[must_use]
    pub fn new(table: TableName, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            temporary: false,
            if_not_exists: false,
            table,
            source: CreateTableSource::Columns {
                columns,
                constraints: Vec::new(),
                without_rowid: false,
            },
        }
    }

    /// Creates a CREATE TABLE ... AS SELECT.
    #[must_use]
    pub fn as_select(table: TableName, select: Select) -> Self {
        Self {
            temporary: false,
            if_not_exists: false,
            table,
            source: CreateTableSource::Select(Box::new(select)),
        }
    }

    /// Marks the statement IF NOT EXISTS.
    #[must_use]
    pub const fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Marks the table TEMPORARY.
    #[must_use]
    pub const fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }
}

/// The body of a CREATE TABLE.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateTableSource {
    /// Explicit column definitions. Must be non-empty at serialization time.
    Columns {
        /// The column definitions.
        columns: Vec<ColumnDefinition>,
        /// Table-level constraints.
        constraints: Vec<TableConstraint>,
        /// Whether WITHOUT ROWID was requested.
        without_rowid: bool,
    },
    /// `AS SELECT ...`.
    Select(Box<Select>),
}

/// A column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// The column name.
    pub name: String,
    /// The declared type (optional; SQLite columns may be typeless).
    pub type_name: Option<TypeName>,
    /// Column constraints, in declaration order.
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    /// Creates a column definition with a declared type and no constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: TypeName) -> Self {
        Self {
            name: name.into(),
            type_name: Some(type_name),
            constraints: Vec::new(),
        }
    }

    /// Appends a constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// A declared type name, e.g. `INTEGER` or `VARCHAR(255)`.
///
/// SQLite treats type names as free-form and derives an affinity from them,
/// so the name is an arbitrary string rather than a closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    /// The type name.
    pub name: String,
    /// Numeric arguments, e.g. `(255)` or `(10, 2)`.
    pub arguments: Vec<i64>,
}

impl TypeName {
    /// Creates a type name without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// `INTEGER`.
    #[must_use]
    pub fn integer() -> Self {
        Self::new("INTEGER")
    }

    /// `TEXT`.
    #[must_use]
    pub fn text() -> Self {
        Self::new("TEXT")
    }

    /// `REAL`.
    #[must_use]
    pub fn real() -> Self {
        Self::new("REAL")
    }

    /// `BLOB`.
    #[must_use]
    pub fn blob() -> Self {
        Self::new("BLOB")
    }
}

/// A column constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraint {
    /// PRIMARY KEY, optionally directed, with an optional ON CONFLICT
    /// algorithm and optional AUTOINCREMENT.
    PrimaryKey {
        /// Sort direction (optional).
        direction: Option<Direction>,
        /// ON CONFLICT algorithm (optional).
        conflict: Option<ConflictResolution>,
        /// Whether AUTOINCREMENT was requested.
        autoincrement: bool,
    },
    /// NOT NULL with an optional ON CONFLICT algorithm.
    NotNull {
        /// ON CONFLICT algorithm (optional).
        conflict: Option<ConflictResolution>,
    },
    /// UNIQUE with an optional ON CONFLICT algorithm.
    Unique {
        /// ON CONFLICT algorithm (optional).
        conflict: Option<ConflictResolution>,
    },
    /// CHECK (expr).
    Check(Expr),
    /// DEFAULT value. Rendered inline: SQLite forbids bind parameters here.
    Default(Expr),
    /// COLLATE name.
    Collate(String),
    /// REFERENCES foreign-key clause.
    References(ForeignKeyReference),
}

impl ColumnConstraint {
    /// A plain PRIMARY KEY constraint.
    #[must_use]
    pub const fn primary_key() -> Self {
        Self::PrimaryKey {
            direction: None,
            conflict: None,
            autoincrement: false,
        }
    }

    /// A PRIMARY KEY AUTOINCREMENT constraint.
    #[must_use]
    pub const fn primary_key_autoincrement() -> Self {
        Self::PrimaryKey {
            direction: None,
            conflict: None,
            autoincrement: true,
        }
    }

    /// A plain NOT NULL constraint.
    #[must_use]
    pub const fn not_null() -> Self {
        Self::NotNull { conflict: None }
    }

    /// A plain UNIQUE constraint.
    #[must_use]
    pub const fn unique() -> Self {
        Self::Unique { conflict: None }
    }
}

/// A table-level constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraint {
    /// PRIMARY KEY (columns).
    PrimaryKey {
        /// The key columns.
        columns: Vec<String>,
        /// ON CONFLICT algorithm (optional).
        conflict: Option<ConflictResolution>,
    },
    /// UNIQUE (columns).
    Unique {
        /// The unique columns.
        columns: Vec<String>,
        /// ON CONFLICT algorithm (optional).
        conflict: Option<ConflictResolution>,
    },
    /// CHECK (expr).
    Check(Expr),
    /// FOREIGN KEY (columns) REFERENCES ...
    ForeignKey {
        /// The referencing columns.
        columns: Vec<String>,
        /// The referenced table and columns.
        reference: ForeignKeyReference,
    },
}

/// A REFERENCES clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyReference {
    /// The referenced table.
    pub table: String,
    /// The referenced columns (optional; empty references the primary key).
    pub columns: Vec<String>,
    /// ON DELETE action (optional).
    pub on_delete: Option<ForeignKeyAction>,
    /// ON UPDATE action (optional).
    pub on_update: Option<ForeignKeyAction>,
}

impl ForeignKeyReference {
    /// Creates a reference to a table's primary key.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            on_delete: None,
            on_update: None,
        }
    }

    /// Sets the referenced columns.
    #[must_use]
    pub fn columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the ON DELETE action.
    #[must_use]
    pub const fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.on_delete = Some(action);
        self
    }
}

/// A foreign-key ON DELETE / ON UPDATE action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyAction {
    /// SET NULL.
    SetNull,
    /// SET DEFAULT.
    SetDefault,
    /// CASCADE.
    Cascade,
    /// RESTRICT.
    Restrict,
    /// NO ACTION.
    NoAction,
}

impl ForeignKeyAction {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
            Self::Cascade => "CASCADE",
            Self::Restrict => "RESTRICT",
            Self::NoAction => "NO ACTION",
        }
    }
}

/// An ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    /// The table being altered.
    pub table: TableName,
    /// The alteration to perform.
    pub operation: AlterTableOperation,
}

/// The four table alterations SQLite supports.
#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableOperation {
    /// RENAME TO new-name.
    RenameTo(String),
    /// RENAME COLUMN old TO new.
    RenameColumn {
        /// The current column name.
        old: String,
        /// The new column name.
        new: String,
    },
    /// ADD COLUMN definition.
    AddColumn(ColumnDefinition),
    /// DROP COLUMN name (SQLite 3.35.0+).
    DropColumn(String),
}

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    /// The table to drop.
    pub table: TableName,
    /// Whether IF EXISTS was requested.
    pub if_exists: bool,
}

impl DropTable {
    /// Creates a plain DROP TABLE.
    #[must_use]
    pub fn new(table: TableName) -> Self {
        Self {
            table,
            if_exists: false,
        }
    }

    /// Marks the statement IF EXISTS.
    #[must_use]
    pub const fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}
