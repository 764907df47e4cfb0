//! INSERT serialization, including the UPSERT clause.

use squill_core::value::Value;

use super::SqliteSerializer;
use crate::error::SerializeError;
use crate::query::{
    ConflictAction, Expr, IndexedColumn, IndexedColumnValue, IndexedColumns, Insert, InsertSource,
    OnConflict,
};

impl SqliteSerializer {
    /// Serializes an INSERT statement fragment.
    pub(crate) fn insert(
        &mut self,
        insert: &Insert,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = Vec::with_capacity(8);
        if let Some(with) = &insert.with {
            sql.push(self.with_clause(with, binds)?);
        }
        sql.push(String::from("INSERT"));
        if let Some(mode) = insert.conflict_resolution {
            sql.push(String::from("OR"));
            sql.push(String::from(mode.as_str()));
        }
        sql.push(String::from("INTO"));
        sql.push(self.table_name(&insert.table));
        if !insert.columns.is_empty() {
            sql.push(self.column_list(&insert.columns));
        }
        sql.push(self.insert_source(&insert.source, binds)?);
        if let Some(upsert) = &insert.upsert {
            sql.push(self.on_conflict(upsert, binds)?);
        }
        if let Some(returning) = self.returning(&insert.returning, binds)? {
            sql.push(returning);
        }
        Ok(sql.join(" "))
    }

    fn insert_source(
        &mut self,
        source: &InsertSource,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        match source {
            InsertSource::DefaultValues => Ok(String::from("DEFAULT VALUES")),
            InsertSource::Select(select) => self.select(select, binds),
            InsertSource::Values(rows) => {
                if rows.is_empty() {
                    return Err(SerializeError::MalformedStatement(
                        "VALUES requires at least one row",
                    ));
                }
                let mut rendered = Vec::with_capacity(rows.len());
                for row in rows {
                    rendered.push(self.values_row(row, binds)?);
                }
                Ok(format!("VALUES {}", rendered.join(", ")))
            }
        }
    }

    fn values_row(
        &mut self,
        row: &[Expr],
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        if row.is_empty() {
            return Err(SerializeError::MalformedStatement(
                "VALUES row requires at least one expression",
            ));
        }
        let list = self.expression_list(row, binds)?;
        Ok(format!("({list})"))
    }

    fn on_conflict(
        &mut self,
        upsert: &OnConflict,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = vec![String::from("ON CONFLICT")];
        if let Some(target) = &upsert.target {
            sql.push(self.indexed_columns(target, binds)?);
        }
        sql.push(String::from("DO"));
        sql.push(self.conflict_action(&upsert.action, binds)?);
        Ok(sql.join(" "))
    }

    fn conflict_action(
        &mut self,
        action: &ConflictAction,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        match action {
            ConflictAction::DoNothing => Ok(String::from("NOTHING")),
            ConflictAction::DoUpdate(set) => {
                let set = self.set_values(set, binds)?;
                Ok(format!("UPDATE {set}"))
            }
        }
    }

    fn indexed_columns(
        &mut self,
        target: &IndexedColumns,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        if target.columns.is_empty() {
            return Err(SerializeError::MalformedStatement(
                "conflict target requires at least one indexed column",
            ));
        }
        let mut sql = Vec::with_capacity(3);
        let mut columns = Vec::with_capacity(target.columns.len());
        for column in &target.columns {
            columns.push(self.indexed_column(column, binds)?);
        }
        sql.push(format!("({})", columns.join(", ")));
        if let Some(predicate) = &target.predicate {
            sql.push(String::from("WHERE"));
            sql.push(self.expression(predicate, binds)?);
        }
        Ok(sql.join(" "))
    }

    fn indexed_column(
        &mut self,
        column: &IndexedColumn,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = Vec::with_capacity(4);
        match &column.value {
            IndexedColumnValue::Column(name) => sql.push(self.ident(name)),
            IndexedColumnValue::Expr(expr) => sql.push(self.expression(expr, binds)?),
        }
        if let Some(collate) = &column.collate {
            sql.push(String::from("COLLATE"));
            sql.push(collate.clone());
        }
        if let Some(direction) = column.direction {
            sql.push(String::from(direction.as_str()));
        }
        Ok(sql.join(" "))
    }
}
