//! DELETE statement AST types.

use super::expression::Expr;
use super::select::ResultColumn;
use super::{TableName, WithClause};

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Leading WITH clause (optional).
    pub with: Option<WithClause>,
    /// The target table.
    pub table: TableName,
    /// The WHERE clause (optional; absence deletes every row).
    pub predicate: Option<Expr>,
    /// RETURNING columns (SQLite 3.35.0+). Empty means no RETURNING clause.
    pub returning: Vec<ResultColumn>,
}

impl Delete {
    /// Creates a DELETE from `table` with no WHERE clause.
    #[must_use]
    pub fn new(table: TableName) -> Self {
        Self {
            with: None,
            table,
            predicate: None,
            returning: Vec::new(),
        }
    }

    /// Adds a WHERE clause.
    #[must_use]
    pub fn predicate(mut self, predicate: Expr) -> Self {
        self.predicate = Some(predicate);
        self
    }
}
