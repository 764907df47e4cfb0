//! SELECT serialization.

use squill_core::value::Value;

use super::SqliteSerializer;
use crate::error::SerializeError;
use crate::query::{JoinClause, OrderBy, ResultColumn, Select, TableRef};

impl SqliteSerializer {
    /// Serializes a SELECT statement fragment.
    pub(crate) fn select(
        &mut self,
        select: &Select,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        if select.columns.is_empty() {
            return Err(SerializeError::MalformedStatement(
                "SELECT requires at least one result column",
            ));
        }
        let mut sql = Vec::with_capacity(12);
        if let Some(with) = &select.with {
            sql.push(self.with_clause(with, binds)?);
        }
        sql.push(String::from("SELECT"));
        if select.distinct {
            sql.push(String::from("DISTINCT"));
        }
        let mut columns = Vec::with_capacity(select.columns.len());
        for column in &select.columns {
            columns.push(self.result_column(column, binds)?);
        }
        sql.push(columns.join(", "));
        if let Some(from) = &select.from {
            sql.push(String::from("FROM"));
            sql.push(self.table_ref(from, binds)?);
        }
        if let Some(predicate) = &select.predicate {
            sql.push(String::from("WHERE"));
            sql.push(self.expression(predicate, binds)?);
        }
        if !select.group_by.is_empty() {
            sql.push(String::from("GROUP BY"));
            sql.push(self.expression_list(&select.group_by, binds)?);
        }
        if let Some(having) = &select.having {
            sql.push(String::from("HAVING"));
            sql.push(self.expression(having, binds)?);
        }
        if !select.order_by.is_empty() {
            sql.push(String::from("ORDER BY"));
            let mut terms = Vec::with_capacity(select.order_by.len());
            for term in &select.order_by {
                terms.push(self.order_by(term, binds)?);
            }
            sql.push(terms.join(", "));
        }
        if let Some(limit) = &select.limit {
            sql.push(String::from("LIMIT"));
            sql.push(self.expression(limit, binds)?);
            if let Some(offset) = &select.offset {
                sql.push(String::from("OFFSET"));
                sql.push(self.expression(offset, binds)?);
            }
        }
        Ok(sql.join(" "))
    }

    pub(crate) fn result_column(
        &mut self,
        column: &ResultColumn,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        match column {
            ResultColumn::Wildcard => Ok(String::from("*")),
            ResultColumn::TableWildcard(table) => Ok(format!("{}.*", self.ident(table))),
            ResultColumn::Expr { expr, alias } => {
                let rendered = self.expression(expr, binds)?;
                Ok(match alias {
                    Some(alias) => format!("{rendered} AS {}", self.ident(alias)),
                    None => rendered,
                })
            }
        }
    }

    fn table_ref(
        &mut self,
        table: &TableRef,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        match table {
            TableRef::Table(name) => Ok(self.table_name(name)),
            TableRef::Subquery { query, alias } => {
                self.descend()?;
                let sub = self.select(query, binds)?;
                self.ascend();
                Ok(format!("({sub}) AS {}", self.ident(alias)))
            }
            TableRef::Join { left, join } => {
                let left = self.table_ref(left, binds)?;
                let join = self.join_clause(join, binds)?;
                Ok(format!("{left} {join}"))
            }
        }
    }

    fn join_clause(
        &mut self,
        join: &JoinClause,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = vec![
            String::from(join.join_type.as_str()),
            self.table_ref(&join.table, binds)?,
        ];
        if let Some(on) = &join.on {
            sql.push(String::from("ON"));
            sql.push(self.expression(on, binds)?);
        } else if !join.using.is_empty() {
            sql.push(String::from("USING"));
            sql.push(self.column_list(&join.using));
        }
        Ok(sql.join(" "))
    }

    fn order_by(
        &mut self,
        term: &OrderBy,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = vec![self.expression(&term.expr, binds)?];
        if let Some(direction) = term.direction {
            sql.push(String::from(direction.as_str()));
        }
        if let Some(nulls) = term.nulls {
            sql.push(String::from(nulls.as_str()));
        }
        Ok(sql.join(" "))
    }
}
