//! Expression serialization.
//!
//! This is where bind-parameter extraction happens: every [`Expr::Value`]
//! reached during the walk appends to the bind list and emits a placeholder.
//! Binary operands are parenthesized only when the operand's binding power
//! would otherwise regroup the expression.

use squill_core::value::Value;

use super::SqliteSerializer;
use crate::error::SerializeError;
use crate::query::{BinaryOp, ColumnName, Expr, FunctionArgs, FunctionCall, InSource, UnaryOp};

impl SqliteSerializer {
    /// Serializes one expression fragment.
    pub(crate) fn expression(
        &mut self,
        expr: &Expr,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        self.descend()?;
        let sql = match expr {
            Expr::Value(value) => self.bound_value(value, binds),
            Expr::Column(column) => self.column_name(column),
            Expr::Unary { op, operand } => {
                let inner = self.guarded(operand, binds)?;
                match op {
                    UnaryOp::Not => format!("NOT {inner}"),
                    UnaryOp::Neg | UnaryOp::BitNot => format!("{}{inner}", op.as_str()),
                }
            }
            Expr::Binary { left, op, right } => {
                let lhs = self.operand(left, *op, false, binds)?;
                let rhs = self.operand(right, *op, true, binds)?;
                format!("{lhs} {} {rhs}", op.as_str())
            }
            Expr::Function(function) => self.function(function, binds)?,
            Expr::IsNull { expr, negated } => {
                let inner = self.guarded(expr, binds)?;
                if *negated {
                    format!("{inner} IS NOT NULL")
                } else {
                    format!("{inner} IS NULL")
                }
            }
            Expr::In {
                expr,
                source,
                negated,
            } => {
                let inner = self.guarded(expr, binds)?;
                let keyword = if *negated { "NOT IN" } else { "IN" };
                let rhs = match source {
                    InSource::List(list) => self.expression_list(list, binds)?,
                    InSource::Select(select) => {
                        self.descend()?;
                        let sub = self.select(select, binds)?;
                        self.ascend();
                        sub
                    }
                };
                format!("{inner} {keyword} ({rhs})")
            }
            Expr::Between {
                expr,
                low,
                high,
                negated,
            } => {
                let inner = self.guarded(expr, binds)?;
                let low = self.guarded(low, binds)?;
                let high = self.guarded(high, binds)?;
                let keyword = if *negated { "NOT BETWEEN" } else { "BETWEEN" };
                format!("{inner} {keyword} {low} AND {high}")
            }
            Expr::Case {
                operand,
                when_clauses,
                else_clause,
            } => self.case(operand.as_deref(), when_clauses, else_clause.as_deref(), binds)?,
            Expr::Cast { expr, type_name } => {
                let inner = self.expression(expr, binds)?;
                format!("CAST({inner} AS {})", Self::type_name(type_name))
            }
            Expr::Collate { expr, collation } => {
                let inner = self.guarded(expr, binds)?;
                format!("{inner} COLLATE {collation}")
            }
            Expr::Exists { select, negated } => {
                self.descend()?;
                let sub = self.select(select, binds)?;
                self.ascend();
                if *negated {
                    format!("NOT EXISTS ({sub})")
                } else {
                    format!("EXISTS ({sub})")
                }
            }
            Expr::Subquery(select) => {
                self.descend()?;
                let sub = self.select(select, binds)?;
                self.ascend();
                format!("({sub})")
            }
            Expr::Paren(inner) => {
                let inner = self.expression(inner, binds)?;
                format!("({inner})")
            }
        };
        self.ascend();
        Ok(sql)
    }

    /// Serializes a comma-joined expression list (function arguments,
    /// IN lists, VALUES rows).
    pub(crate) fn expression_list(
        &mut self,
        list: &[Expr],
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let mut rendered = Vec::with_capacity(list.len());
        for expr in list {
            rendered.push(self.expression(expr, binds)?);
        }
        Ok(rendered.join(", "))
    }

    pub(crate) fn column_name(&self, column: &ColumnName) -> String {
        column.table.as_ref().map_or_else(
            || self.ident(&column.name),
            |table| format!("{}.{}", self.ident(table), self.ident(&column.name)),
        )
    }

    /// Renders a binary operand, parenthesizing it when its binding power is
    /// lower than the parent operator's (or equal, for the right operand, to
    /// preserve left associativity).
    fn operand(
        &mut self,
        child: &Expr,
        parent: BinaryOp,
        is_right: bool,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let rendered = self.expression(child, binds)?;
        let needs_parens = match child {
            Expr::Binary { op, .. } => {
                let child_power = op.precedence();
                let parent_power = parent.precedence();
                child_power < parent_power || (child_power == parent_power && is_right)
            }
            _ => false,
        };
        if needs_parens {
            Ok(format!("({rendered})"))
        } else {
            Ok(rendered)
        }
    }

    /// Renders a sub-expression of a postfix or ternary form (IS NULL, IN,
    /// BETWEEN, COLLATE), parenthesizing binary expressions wholesale since
    /// those forms bind tighter than any binary operator.
    fn guarded(
        &mut self,
        expr: &Expr,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let rendered = self.expression(expr, binds)?;
        if matches!(expr, Expr::Binary { .. }) {
            Ok(format!("({rendered})"))
        } else {
            Ok(rendered)
        }
    }

    fn function(
        &mut self,
        function: &FunctionCall,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        let args = match &function.args {
            FunctionArgs::Wildcard => String::from("*"),
            FunctionArgs::List { distinct, args } => {
                let list = self.expression_list(args, binds)?;
                if *distinct {
                    format!("DISTINCT {list}")
                } else {
                    list
                }
            }
        };
        Ok(format!("{}({args})", function.name))
    }

    fn case(
        &mut self,
        operand: Option<&Expr>,
        when_clauses: &[(Expr, Expr)],
        else_clause: Option<&Expr>,
        binds: &mut Vec<Value>,
    ) -> Result<String, SerializeError> {
        if when_clauses.is_empty() {
            return Err(SerializeError::MalformedStatement(
                "CASE requires at least one WHEN clause",
            ));
        }
        let mut sql = vec![String::from("CASE")];
        if let Some(operand) = operand {
            sql.push(self.expression(operand, binds)?);
        }
        for (when, then) in when_clauses {
            sql.push(String::from("WHEN"));
            sql.push(self.expression(when, binds)?);
            sql.push(String::from("THEN"));
            sql.push(self.expression(then, binds)?);
        }
        if let Some(else_clause) = else_clause {
            sql.push(String::from("ELSE"));
            sql.push(self.expression(else_clause, binds)?);
        }
        sql.push(String::from("END"));
        Ok(sql.join(" "))
    }
}
