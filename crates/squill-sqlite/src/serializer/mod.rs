//! Recursive-descent serializer lowering statement trees to SQLite SQL.
//!
//! The serializer walks a statement tree top-down, collecting one string
//! fragment per clause and joining the fragments of each node with single
//! spaces. The join is the only place whitespace policy lives, which is what
//! keeps the output free of doubled or missing spaces no matter which
//! optional clauses are present.
//!
//! Whenever the walk reaches a bound value it appends the value to the
//! caller-visible bind list and emits the dialect's positional placeholder
//! instead. The Nth placeholder in the returned text therefore always
//! corresponds to the Nth element of the returned binds; that ordering
//! invariant is the contract drivers rely on.

mod delete;
mod expression;
mod insert;
mod schema;
mod select;
mod update;

use squill_core::dialect::Dialect;
use squill_core::value::Value;

use crate::dialect::SqliteDialect;
use crate::error::SerializeError;
use crate::query::{
    AlterTable, Assignment, CommonTableExpression, CreateTable, Delete, DropTable, Insert,
    ResultColumn, Select, SetValues, Statement, TableName, Update, WithClause,
};

/// Maximum combined expression and subquery nesting depth.
///
/// Statement trees are caller-constructed and may nest without bound; the
/// serializer refuses anything deeper than this with
/// [`SerializeError::TooDeeplyNested`] rather than risking stack exhaustion.
pub const MAX_DEPTH: usize = 128;

/// Result of one serialization: the SQL text and the bind parameters in
/// order of appearance.
pub type Serialized = (String, Vec<Value>);

/// A serializer lowering SQLite statement trees to SQL text plus an ordered
/// bind-parameter list.
///
/// Each entry point resets the per-call state and allocates a fresh bind
/// list, so a serializer may be reused across statements. Serialization is
/// deterministic: the same tree always yields the same text and binds.
#[derive(Debug, Default)]
pub struct SqliteSerializer {
    dialect: SqliteDialect,
    depth: usize,
    inline_literals: bool,
}

impl SqliteSerializer {
    /// Creates a new serializer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dialect: SqliteDialect::new(),
            depth: 0,
            inline_literals: false,
        }
    }

    /// Serializes any statement.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::MalformedStatement`] for trees that cannot
    /// render as valid SQL, or [`SerializeError::TooDeeplyNested`] past
    /// [`MAX_DEPTH`].
    pub fn serialize(&mut self, statement: &Statement) -> Result<Serialized, SerializeError> {
        match statement {
            Statement::Select(s) => self.serialize_select(s),
            Statement::Insert(i) => self.serialize_insert(i),
            Statement::Update(u) => self.serialize_update(u),
            Statement::Delete(d) => self.serialize_delete(d),
            Statement::CreateTable(c) => self.serialize_create_table(c),
            Statement::AlterTable(a) => self.serialize_alter_table(a),
            Statement::DropTable(d) => self.serialize_drop_table(d),
        }
    }

    /// Serializes a SELECT statement.
    ///
    /// # Errors
    ///
    /// See [`SqliteSerializer::serialize`].
    pub fn serialize_select(&mut self, select: &Select) -> Result<Serialized, SerializeError> {
        self.reset(false);
        let mut binds = Vec::new();
        let sql = self.select(select, &mut binds)?;
        tracing::trace!(kind = "SELECT", binds = binds.len(), "serialized statement");
        Ok((sql, binds))
    }

    /// Serializes an INSERT statement.
    ///
    /// # Errors
    ///
    /// See [`SqliteSerializer::serialize`].
    pub fn serialize_insert(&mut self, insert: &Insert) -> Result<Serialized, SerializeError> {
        self.reset(false);
        let mut binds = Vec::new();
        let sql = self.insert(insert, &mut binds)?;
        tracing::trace!(kind = "INSERT", binds = binds.len(), "serialized statement");
        Ok((sql, binds))
    }

    /// Serializes an UPDATE statement.
    ///
    /// # Errors
    ///
    /// See [`SqliteSerializer::serialize`].
    pub fn serialize_update(&mut self, update: &Update) -> Result<Serialized, SerializeError> {
        self.reset(false);
        let mut binds = Vec::new();
        let sql = self.update(update, &mut binds)?;
        tracing::trace!(kind = "UPDATE", binds = binds.len(), "serialized statement");
        Ok((sql, binds))
    }

    /// Serializes a DELETE statement.
    ///
    /// # Errors
    ///
    /// See [`SqliteSerializer::serialize`].
    pub fn serialize_delete(&mut self, delete: &Delete) -> Result<Serialized, SerializeError> {
        self.reset(false);
        let mut binds = Vec::new();
        let sql = self.delete(delete, &mut binds)?;
        tracing::trace!(kind = "DELETE", binds = binds.len(), "serialized statement");
        Ok((sql, binds))
    }

    /// Serializes a CREATE TABLE statement.
    ///
    /// DDL is serialized in inline-literal mode because SQLite does not
    /// accept bind parameters in table definitions; the returned bind list
    /// is always empty.
    ///
    /// # Errors
    ///
    /// See [`SqliteSerializer::serialize`].
    pub fn serialize_create_table(
        &mut self,
        create: &CreateTable,
    ) -> Result<Serialized, SerializeError> {
        self.reset(true);
        let mut binds = Vec::new();
        let sql = self.create_table(create, &mut binds)?;
        tracing::trace!(kind = "CREATE TABLE", "serialized statement");
        Ok((sql, binds))
    }

    /// Serializes an ALTER TABLE statement. Inline-literal mode, as for
    /// CREATE TABLE.
    ///
    /// # Errors
    ///
    /// See [`SqliteSerializer::serialize`].
    pub fn serialize_alter_table(
        &mut self,
        alter: &AlterTable,
    ) -> Result<Serialized, SerializeError> {
        self.reset(true);
        let mut binds = Vec::new();
        let sql = self.alter_table(alter, &mut binds)?;
        tracing::trace!(kind = "ALTER TABLE", "serialized statement");
        Ok((sql, binds))
    }

    /// Serializes a DROP TABLE statement.
    ///
    /// # Errors
    ///
    /// See [`SqliteSerializer::serialize`].
    pub fn serialize_drop_table(
        &mut self,
        drop: &DropTable,
    ) -> Result<Serialized, SerializeError> {
        self.reset(true);
        let sql = self.drop_table(drop);
        tracing::trace!(kind = "DROP TABLE", "serialized statement");
        Ok((sql, Vec::new()))
    }

    fn reset(&mut self, inline_literals: bool) {
        self.depth = 0;
        self.inline_literals = inline_literals;
    }

    // ---- shared fragments -------------------------------------------------

    /// Quotes an identifier per the dialect.
    pub(crate) fn ident(&self, name: &str) -> String {
        self.dialect.quote_identifier(name)
    }

    /// Emits a bound value: a placeholder in bind mode, an escaped literal
    /// in inline mode (DDL).
    pub(crate) fn bound_value(&self, value: &Value, binds: &mut Vec<Value>) -> String {
        if self.inline_literals {
            value.to_inline_sql()
        } else {
            binds.push(value.clone());
            String::from(self.dialect.placeholder())
        }
    }

    pub(crate) fn descend(&mut self) -> Result<(), SerializeError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(SerializeError::TooDeeplyNested { limit: MAX_DEPTH });
        }
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn table_name(&self, table: &TableName) -> String {
        table.alias.as_ref().map_or_else(
            || self.ident(&table.name),
            |alias| format!("{} AS {}", self.ident(&table.name), self.ident(alias)),
        )
    }

    /// Renders a parenthesized, comma-joined, quoted column list.
    pub(crate) fn column_list(&self, columns: &[String]) -> String {
        let quoted: Vec<String> = columns.iter().map(|c| self.ident(c)).collect();
        format!("({})", quoted.join(", "))
    }

    pub(crate) fn with_clause(
        &mut self,
        with: &WithClause,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        if with.ctes.is_empty() {
            return Err(SerializeError::MalformedStatement(
                "WITH clause requires at least one common table expression",
            ));
        }
        let mut sql = vec![String::from("WITH")];
        if with.recursive {
            sql.push(String::from("RECURSIVE"));
        }
        let mut ctes = Vec::with_capacity(with.ctes.len());
        for cte in &with.ctes {
            ctes.push(self.common_table_expression(cte, binds)?);
        }
        sql.push(ctes.join(", "));
        Ok(sql.join(" "))
    }

    fn common_table_expression(
        &mut self,
        cte: &CommonTableExpression,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = vec![self.ident(&cte.name)];
        if !cte.columns.is_empty() {
            sql.push(self.column_list(&cte.columns));
        }
        sql.push(String::from("AS"));
        self.descend()?;
        let body = self.select(&cte.select, binds)?;
        self.ascend();
        sql.push(format!("({body})"));
        Ok(sql.join(" "))
    }

    pub(crate) fn set_values(
        &mut self,
        set: &SetValues,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        if set.assignments.is_empty() {
            return Err(SerializeError::MalformedStatement(
                "SET clause requires at least one assignment",
            ));
        }
        let mut sql = vec![String::from("SET")];
        let mut assignments = Vec::with_capacity(set.assignments.len());
        for assignment in &set.assignments {
            assignments.push(self.assignment(assignment, binds)?);
        }
        sql.push(assignments.join(", "));
        if let Some(predicate) = &set.predicate {
            sql.push(String::from("WHERE"));
            sql.push(self.expression(predicate, binds)?);
        }
        Ok(sql.join(" "))
    }

    fn assignment(
        &mut self,
        assignment: &Assignment,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        if assignment.columns.is_empty() {
            return Err(SerializeError::MalformedStatement(
                "assignment requires at least one column",
            ));
        }
        let target = if assignment.columns.len() == 1 {
            self.ident(&assignment.columns[0])
        } else {
            self.column_list(&assignment.columns)
        };
        let value = self.expression(&assignment.value, binds)?;
        Ok(format!("{target} = {value}"))
    }

    /// Renders a RETURNING clause, or `None` when no columns are requested.
    pub(crate) fn returning(
        &mut self,
        columns: &[ResultColumn],
        binds: &mut Vec<Value>,
    ) -> Result<Option<String>, SerializeError> {
        if columns.is_empty() {
            return Ok(None);
        }
        let mut rendered = Vec::with_capacity(columns.len());
        for column in columns {
            rendered.push(self.result_column(column, binds)?);
        }
        Ok(Some(format!("RETURNING {}", rendered.join(", "))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_with_alias() {
        let s = SqliteSerializer::new();
        assert_eq!(s.table_name(&TableName::new("users")), "\"users\"");
        assert_eq!(
            s.table_name(&TableName::new("users").alias("u")),
            "\"users\" AS \"u\""
        );
    }

    #[test]
    fn column_list_is_quoted_and_joined() {
        let s = SqliteSerializer::new();
        let cols = vec![String::from("a"), String::from("b")];
        assert_eq!(s.column_list(&cols), "(\"a\", \"b\")");
    }

    #[test]
    fn bound_value_appends_in_bind_mode() {
        let s = SqliteSerializer::new();
        let mut binds = Vec::new();
        let token = s.bound_value(&Value::Integer(7), &mut binds);
        assert_eq!(token, "?");
        assert_eq!(binds, vec![Value::Integer(7)]);
    }

    #[test]
    fn bound_value_inlines_in_ddl_mode() {
        let mut s = SqliteSerializer::new();
        s.reset(true);
        let mut binds = Vec::new();
        let token = s.bound_value(&Value::Text(String::from("x")), &mut binds);
        assert_eq!(token, "'x'");
        assert!(binds.is_empty());
    }
}
