//! UPDATE serialization.

use squill_core::value::Value;

use super::SqliteSerializer;
use crate::error::SerializeError;
use crate::query::Update;

impl SqliteSerializer {
    /// Serializes an UPDATE statement fragment.
    pub(crate) fn update(
        &mut self,
        update: &Update,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = Vec::with_capacity(6);
        if let Some(with) = &update.with {
            sql.push(self.with_clause(with, binds)?);
        }
        sql.push(String::from("UPDATE"));
        if let Some(mode) = update.conflict_resolution {
            sql.push(String::from("OR"));
            sql.push(String::from(mode.as_str()));
        }
        sql.push(self.table_name(&update.table));
        sql.push(self.set_values(&update.set, binds)?);
        if let Some(returning) = self.returning(&update.returning, binds)? {
            sql.push(returning);
        }
        Ok(sql.join(" "))
    }
}
