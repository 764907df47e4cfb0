//! SELECT statement AST types.

use super::expression::Expr;
use super::{Direction, TableName, WithClause};

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    /// Leading WITH clause (optional).
    pub with: Option<WithClause>,
    /// Whether to select DISTINCT values.
    pub distinct: bool,
    /// The result columns. Must be non-empty at serialization time.
    pub columns: Vec<ResultColumn>,
    /// The FROM clause (optional).
    pub from: Option<TableRef>,
    /// The WHERE clause (optional).
    pub predicate: Option<Expr>,
    /// GROUP BY expressions.
    pub group_by: Vec<Expr>,
    /// HAVING clause (optional).
    pub having: Option<Expr>,
    /// ORDER BY terms.
    pub order_by: Vec<OrderBy>,
    /// LIMIT expression (optional).
    pub limit: Option<Expr>,
    /// OFFSET expression (optional; only meaningful with a LIMIT).
    pub offset: Option<Expr>,
}

impl Select {
    /// Creates an empty SELECT statement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// A result column in the SELECT list.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultColumn {
    /// `*`.
    Wildcard,
    /// `table.*`.
    TableWildcard(String),
    /// An expression with an optional alias.
    Expr {
        /// The expression.
        expr: Expr,
        /// Column alias (optional).
        alias: Option<String>,
    },
}

impl ResultColumn {
    /// Creates an expression column without an alias.
    #[must_use]
    pub const fn expr(expr: Expr) -> Self {
        Self::Expr { expr, alias: None }
    }

    /// Creates an expression column with an alias.
    #[must_use]
    pub fn aliased(expr: Expr, alias: impl Into<String>) -> Self {
        Self::Expr {
            expr,
            alias: Some(alias.into()),
        }
    }

    /// Creates a plain named-column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::expr(Expr::column(name))
    }
}

/// A table reference in the FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// A table name.
    Table(TableName),
    /// An aliased subquery.
    Subquery {
        /// The subquery.
        query: Box<Select>,
        /// Alias (required for subqueries).
        alias: String,
    },
    /// A joined table.
    Join {
        /// Left side of the join.
        left: Box<TableRef>,
        /// The join clause.
        join: Box<JoinClause>,
    },
}

impl TableRef {
    /// Creates a simple table reference.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table(TableName::new(name))
    }

    /// Joins another table reference onto this one.
    #[must_use]
    pub fn join(self, join: JoinClause) -> Self {
        Self::Join {
            left: Box::new(self),
            join: Box::new(join),
        }
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN.
    Inner,
    /// LEFT OUTER JOIN.
    Left,
    /// RIGHT OUTER JOIN (SQLite 3.39.0+).
    Right,
    /// FULL OUTER JOIN (SQLite 3.39.0+).
    Full,
    /// CROSS JOIN.
    Cross,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    /// The type of join.
    pub join_type: JoinType,
    /// The table to join.
    pub table: TableRef,
    /// The join condition (for non-CROSS joins).
    pub on: Option<Expr>,
    /// USING columns (alternative to ON).
    pub using: Vec<String>,
}

impl JoinClause {
    /// Creates an INNER JOIN with an ON condition.
    #[must_use]
    pub fn inner(table: TableRef, on: Expr) -> Self {
        Self {
            join_type: JoinType::Inner,
            table,
            on: Some(on),
            using: Vec::new(),
        }
    }

    /// Creates a LEFT JOIN with an ON condition.
    #[must_use]
    pub fn left(table: TableRef, on: Expr) -> Self {
        Self {
            join_type: JoinType::Left,
            table,
            on: Some(on),
            using: Vec::new(),
        }
    }
}

/// Null ordering for an ORDER BY term (SQLite 3.30.0+).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// An ORDER BY term.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction; omitted from the output when `None` (SQLite then
    /// defaults to ASC).
    pub direction: Option<Direction>,
    /// Null ordering (optional).
    pub nulls: Option<NullOrdering>,
}

impl OrderBy {
    /// Creates an ORDER BY term with no explicit direction.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self {
            expr,
            direction: None,
            nulls: None,
        }
    }

    /// Creates an ORDER BY term with an explicit direction.
    #[must_use]
    pub const fn directed(expr: Expr, direction: Direction) -> Self {
        Self {
            expr,
            direction: Some(direction),
            nulls: None,
        }
    }
}
