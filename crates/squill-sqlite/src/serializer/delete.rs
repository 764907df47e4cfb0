//! DELETE serialization.

use squill_core::value::Value;

use super::SqliteSerializer;
use crate::error::SerializeError;
use crate::query::Delete;

impl SqliteSerializer {
    /// Serializes a DELETE statement fragment.
    pub(crate) fn delete(
        &mut self,
        delete: &Delete,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = Vec::with_capacity(6);
        if let Some(with) = &delete.with {
            sql.push(self.with_clause(with, binds)?);
        }
        sql.push(String::from("DELETE FROM"));
        sql.push(self.table_name(&delete.table));
        if let Some(predicate) = &delete.predicate {
            sql.push(String::from("WHERE"));
            sql.push(self.expression(predicate, binds)?);
        }
        if let Some(returning) = self.returning(&delete.returning, binds)? {
            sql.push(returning);
        }
        Ok(sql.join(" "))
    }
}
