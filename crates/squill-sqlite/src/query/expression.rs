//! Expression AST types.
//!
//! [`Expr::Value`] is the only node that produces a bind parameter during
//! serialization; every other variant lowers to SQL text.

use squill_core::value::{ToValue, Value};

use super::schema::TypeName;
use super::select::Select;

/// A column reference, optionally qualified with a table name or alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnName {
    /// Table name or alias (optional).
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnName {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Is,
    IsNot,

    // Logical
    And,
    Or,

    // String
    Concat,
    Like,
    Glob,

    // Bitwise
    BitAnd,
    BitOr,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Concat => "||",
            Self::Like => "LIKE",
            Self::Glob => "GLOB",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
        }
    }

    /// Returns the binding power of the operator (higher = binds tighter),
    /// following SQLite's operator table. The serializer uses this to
    /// parenthesize operands only where grouping would otherwise be lost.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Eq | Self::NotEq | Self::Is | Self::IsNot | Self::Like | Self::Glob => 3,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 4,
            Self::BitAnd | Self::BitOr | Self::ShiftLeft | Self::ShiftRight => 5,
            Self::Add | Self::Sub => 6,
            Self::Mul | Self::Div | Self::Mod => 7,
            Self::Concat => 8,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Negation (-).
    Neg,
    /// Logical NOT.
    Not,
    /// Bitwise NOT (~).
    BitNot,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "NOT",
            Self::BitNot => "~",
        }
    }
}

/// Arguments to a function call.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionArgs {
    /// `*`, as in `COUNT(*)`.
    Wildcard,
    /// An explicit argument list, optionally DISTINCT.
    List {
        /// Whether DISTINCT was specified.
        distinct: bool,
        /// The argument expressions.
        args: Vec<Expr>,
    },
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The function name.
    pub name: String,
    /// The arguments.
    pub args: FunctionArgs,
}

impl FunctionCall {
    /// Creates a function call with an argument list.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args: FunctionArgs::List {
                distinct: false,
                args,
            },
        }
    }

    /// Creates a `name(*)` call.
    #[must_use]
    pub fn wildcard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: FunctionArgs::Wildcard,
        }
    }
}

/// The right-hand side of an IN expression.
#[derive(Debug, Clone, PartialEq)]
pub enum InSource {
    /// A parenthesized expression list.
    List(Vec<Expr>),
    /// A subquery.
    Select(Box<Select>),
}

/// A SQLite expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bound value; serializes to a placeholder and appends to the
    /// bind list.
    Value(Value),

    /// A column reference.
    Column(ColumnName),

    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A function call.
    Function(FunctionCall),

    /// IS [NOT] NULL.
    IsNull {
        /// The expression to check.
        expr: Box<Expr>,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },

    /// [NOT] IN (list) or [NOT] IN (subquery).
    In {
        /// The expression to check.
        expr: Box<Expr>,
        /// The list or subquery.
        source: InSource,
        /// Whether this is NOT IN.
        negated: bool,
    },

    /// [NOT] BETWEEN low AND high.
    Between {
        /// The expression to check.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
        /// Whether this is NOT BETWEEN.
        negated: bool,
    },

    /// CASE expression.
    Case {
        /// The operand (if any).
        operand: Option<Box<Expr>>,
        /// WHEN/THEN pairs.
        when_clauses: Vec<(Expr, Expr)>,
        /// ELSE clause.
        else_clause: Option<Box<Expr>>,
    },

    /// CAST(expr AS type).
    Cast {
        /// Expression to cast.
        expr: Box<Expr>,
        /// Target type name.
        type_name: TypeName,
    },

    /// expr COLLATE name.
    Collate {
        /// The collated expression.
        expr: Box<Expr>,
        /// Collation name.
        collation: String,
    },

    /// [NOT] EXISTS (subquery).
    Exists {
        /// The subquery.
        select: Box<Select>,
        /// Whether this is NOT EXISTS.
        negated: bool,
    },

    /// A scalar subquery.
    Subquery(Box<Select>),

    /// An explicitly parenthesized expression.
    Paren(Box<Expr>),
}

impl Expr {
    /// Creates a bound-value expression.
    #[must_use]
    pub fn value(value: impl ToValue) -> Self {
        Self::Value(value.to_value())
    }

    /// Creates a NULL value expression.
    #[must_use]
    pub const fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Creates an unqualified column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColumnName::new(name))
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column(ColumnName::qualified(table, name))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, right: Self) -> Self {
        self.binary(BinaryOp::NotEq, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, right: Self) -> Self {
        self.binary(BinaryOp::LtEq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, right: Self) -> Self {
        self.binary(BinaryOp::GtEq, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: Self) -> Self {
        self.binary(BinaryOp::Like, pattern)
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: true,
        }
    }

    /// Creates an IN (list) expression.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        Self::In {
            expr: Box::new(self),
            source: InSource::List(list),
            negated: false,
        }
    }

    /// Creates an IN (subquery) expression.
    #[must_use]
    pub fn in_select(self, select: Select) -> Self {
        Self::In {
            expr: Box::new(self),
            source: InSource::Select(Box::new(select)),
            negated: false,
        }
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: Self, high: Self) -> Self {
        Self::Between {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
            negated: false,
        }
    }

    /// Creates a COLLATE expression.
    #[must_use]
    pub fn collate(self, collation: impl Into<String>) -> Self {
        Self::Collate {
            expr: Box::new(self),
            collation: collation.into(),
        }
    }

    /// Wraps the expression in explicit parentheses.
    #[must_use]
    pub fn paren(self) -> Self {
        Self::Paren(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_keywords() {
        assert_eq!(BinaryOp::Concat.as_str(), "||");
        assert_eq!(BinaryOp::IsNot.as_str(), "IS NOT");
        assert_eq!(UnaryOp::Not.as_str(), "NOT");
    }

    #[test]
    fn precedence_orders_logical_below_comparison() {
        assert!(BinaryOp::Or.precedence() < BinaryOp::And.precedence());
        assert!(BinaryOp::And.precedence() < BinaryOp::Eq.precedence());
        assert!(BinaryOp::Add.precedence() < BinaryOp::Mul.precedence());
    }

    #[test]
    fn combinators_build_expected_tree() {
        let e = Expr::column("a").eq(Expr::value(1_i64));
        match e {
            Expr::Binary { op, .. } => assert_eq!(op, BinaryOp::Eq),
            other => panic!("expected binary expression, got {other:?}"),
        }
    }
}
