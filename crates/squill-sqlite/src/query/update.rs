//! UPDATE statement AST types.

use super::select::ResultColumn;
use super::{ConflictResolution, SetValues, TableName, WithClause};

/// An UPDATE statement.
///
/// The WHERE clause lives on the [`SetValues`] it carries, matching the
/// shape shared with the upsert `DO UPDATE` action.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Leading WITH clause (optional).
    pub with: Option<WithClause>,
    /// Statement-level conflict resolution: `UPDATE OR <MODE>` (optional).
    pub conflict_resolution: Option<ConflictResolution>,
    /// The target table.
    pub table: TableName,
    /// The SET clause with its optional trailing WHERE. Must contain at
    /// least one assignment at serialization time.
    pub set: SetValues,
    /// RETURNING columns (SQLite 3.35.0+). Empty means no RETURNING clause.
    pub returning: Vec<ResultColumn>,
}

impl Update {
    /// Creates an UPDATE of `table` with the given SET clause and defaults
    /// for every other field.
    #[must_use]
    pub fn new(table: TableName, set: SetValues) -> Self {
        Self {
            with: None,
            conflict_resolution: None,
            table,
            set,
            returning: Vec::new(),
        }
    }
}
