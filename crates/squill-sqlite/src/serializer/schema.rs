//! Table DDL serialization.
//!
//! DDL runs in inline-literal mode: SQLite rejects bind parameters inside
//! table definitions, so DEFAULT and CHECK values render as escaped
//! literals and the bind list stays empty.

use squill_core::value::Value;

use super::SqliteSerializer;
use crate::error::SerializeError;
use crate::query::{
    AlterTable, AlterTableOperation, ColumnConstraint, ColumnDefinition, CreateTable,
    CreateTableSource, DropTable, Expr, ForeignKeyReference, TableConstraint, TypeName,
};

impl SqliteSerializer {
    /// Serializes a CREATE TABLE statement fragment.
    pub(crate) fn create_table(
        &mut self,
        create: &CreateTable,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = vec![String::from("CREATE")];
        if create.temporary {
            sql.push(String::from("TEMPORARY"));
        }
        sql.push(String::from("TABLE"));
        if create.if_not_exists {
            sql.push(String::from("IF NOT EXISTS"));
        }
        sql.push(self.table_name(&create.table));
        match &create.source {
            CreateTableSource::Select(select) => {
                sql.push(String::from("AS"));
                sql.push(self.select(select, binds)?);
            }
            CreateTableSource::Columns {
                columns,
                constraints,
                without_rowid,
            } => {
                if columns.is_empty() {
                    return Err(SerializeError::MalformedStatement(
                        "CREATE TABLE requires at least one column",
                    ));
                }
                let mut items = Vec::with_capacity(columns.len() + constraints.len());
                for column in columns {
                    items.push(self.column_definition(column, binds)?);
                }
                for constraint in constraints {
                    items.push(self.table_constraint(constraint, binds)?);
                }
                sql.push(format!("({})", items.join(", ")));
                if *without_rowid {
                    sql.push(String::from("WITHOUT ROWID"));
                }
            }
        }
        Ok(sql.join(" "))
    }

    /// Serializes an ALTER TABLE statement fragment.
    pub(crate) fn alter_table(
        &mut self,
        alter: &AlterTable,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = vec![String::from("ALTER TABLE"), self.table_name(&alter.table)];
        match &alter.operation {
            AlterTableOperation::RenameTo(name) => {
                sql.push(String::from("RENAME TO"));
                sql.push(self.ident(name));
            }
            AlterTableOperation::RenameColumn { old, new } => {
                sql.push(String::from("RENAME COLUMN"));
                sql.push(self.ident(old));
                sql.push(String::from("TO"));
                sql.push(self.ident(new));
            }
            AlterTableOperation::AddColumn(column) => {
                sql.push(String::from("ADD COLUMN"));
                sql.push(self.column_definition(column, binds)?);
            }
            AlterTableOperation::DropColumn(name) => {
                sql.push(String::from("DROP COLUMN"));
                sql.push(self.ident(name));
            }
        }
        Ok(sql.join(" "))
    }

    /// Serializes a DROP TABLE statement fragment.
    pub(crate) fn drop_table(&self, drop: &DropTable) -> String {
        let mut sql = vec![String::from("DROP TABLE")];
        if drop.if_exists {
            sql.push(String::from("IF EXISTS"));
        }
        sql.push(self.table_name(&drop.table));
        sql.join(" ")
    }

    /// Renders a declared type name, e.g. `VARCHAR(255)`.
    pub(crate) fn type_name(type_name: &TypeName) -> String {
        if type_name.arguments.is_empty() {
            type_name.name.clone()
        } else {
            let args: Vec<String> = type_name.arguments.iter().map(ToString::to_string).collect();
            format!("{}({})", type_name.name, args.join(", "))
        }
    }

    fn column_definition(
        &mut self,
        column: &ColumnDefinition,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut sql = Vec::with_capacity(2 + column.constraints.len());
        sql.push(self.ident(&column.name));
        if let Some(type_name) = &column.type_name {
            sql.push(Self::type_name(type_name));
        }
        for constraint in &column.constraints {
            sql.push(self.column_constraint(constraint, binds)?);
        }
        Ok(sql.join(" "))
    }

    fn column_constraint(
        &mut self,
        constraint: &ColumnConstraint,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        match constraint {
            ColumnConstraint::PrimaryKey {
                direction,
                conflict,
                autoincrement,
            } => {
                let mut sql = vec![String::from("PRIMARY KEY")];
                if let Some(direction) = direction {
                    sql.push(String::from(direction.as_str()));
                }
                if let Some(conflict) = conflict {
                    sql.push(format!("ON CONFLICT {}", conflict.as_str()));
                }
                if *autoincrement {
                    sql.push(String::from("AUTOINCREMENT"));
                }
                Ok(sql.join(" "))
            }
            ColumnConstraint::NotNull { conflict } => {
                let mut sql = vec![String::from("NOT NULL")];
                if let Some(conflict) = conflict {
                    sql.push(format!("ON CONFLICT {}", conflict.as_str()));
                }
                Ok(sql.join(" "))
            }
            ColumnConstraint::Unique { conflict } => {
                let mut sql = vec![String::from("UNIQUE")];
                if let Some(conflict) = conflict {
                    sql.push(format!("ON CONFLICT {}", conflict.as_str()));
                }
                Ok(sql.join(" "))
            }
            ColumnConstraint::Check(expr) => {
                let rendered = self.expression(expr, binds)?;
                Ok(format!("CHECK ({rendered})"))
            }
            ColumnConstraint::Default(expr) => {
                let rendered = self.expression(expr, binds)?;
                // Only literals may appear bare after DEFAULT; anything else
                // requires parentheses per the CREATE TABLE grammar.
                if matches!(expr, Expr::Value(_)) {
                    Ok(format!("DEFAULT {rendered}"))
                } else {
                    Ok(format!("DEFAULT ({rendered})"))
                }
            }
            ColumnConstraint::Collate(name) => Ok(format!("COLLATE {name}")),
            ColumnConstraint::References(reference) => Ok(self.foreign_key_reference(reference)),
        }
    }

    fn table_constraint(
        &mut self,
        constraint: &TableConstraint,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        match constraint {
            TableConstraint::PrimaryKey { columns, conflict } => {
                let mut sql = vec![format!("PRIMARY KEY {}", self.column_list(columns))];
                if let Some(conflict) = conflict {
                    sql.push(format!("ON CONFLICT {}", conflict.as_str()));
                }
                Ok(sql.join(" "))
            }
            TableConstraint::Unique { columns, conflict } => {
                let mut sql = vec![format!("UNIQUE {}", self.column_list(columns))];
                if let Some(conflict) = conflict {
                    sql.push(format!("ON CONFLICT {}", conflict.as_str()));
                }
                Ok(sql.join(" "))
            }
            TableConstraint::Check(expr) => {
                let rendered = self.expression(expr, binds)?;
                Ok(format!("CHECK ({rendered})"))
            }
            TableConstraint::ForeignKey { columns, reference } => {
                let reference = self.foreign_key_reference(reference);
                Ok(format!(
                    "FOREIGN KEY {} {reference}",
                    self.column_list(columns)
                ))
            }
        }
    }

    fn foreign_key_reference(&self, reference: &ForeignKeyReference) -> String {
        let mut sql = vec![String::from("REFERENCES"), self.ident(&reference.table)];
        if !reference.columns.is_empty() {
            sql.push(self.column_list(&reference.columns));
        }
        if let Some(action) = reference.on_delete {
            sql.push(format!("ON DELETE {}", action.as_str()));
        }
        if let Some(action) = reference.on_update {
            sql.push(format!("ON UPDATE {}", action.as_str()));
        }
        sql.join(" ")
    }
}
