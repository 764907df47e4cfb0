//! Database values and bind-parameter handling.
//!
//! A [`Value`] is one of the five storage classes a SQLite-family database
//! understands. Serializers extract these from statement trees into an
//! ordered bind list instead of splicing them into the SQL text, which is
//! what keeps the emitted text injection-safe.

/// A database value, sent to the driver as a bind parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL.
    Null,
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit IEEE float.
    Real(f64),
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Blob(Vec<u8>),
}

impl Value {
    /// Renders the value as an inline SQL literal, escaped.
    ///
    /// Bind parameters are the normal transport for values; this form exists
    /// for the few grammar positions where SQLite forbids placeholders, such
    /// as `DEFAULT` clauses in `CREATE TABLE`.
    #[must_use]
    pub fn to_inline_sql(&self) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Integer(n) => format!("{n}"),
            Self::Real(r) => format!("{r}"),
            Self::Text(s) => {
                // Single quotes are escaped by doubling them.
                let escaped = s.replace('\'', "''");
                format!("'{escaped}'")
            }
            Self::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{byte:02X}")).collect();
                format!("X'{hex}'")
            }
        }
    }

    /// Returns the storage-class name, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Real(_) => "REAL",
            Self::Text(_) => "TEXT",
            Self::Blob(_) => "BLOB",
        }
    }
}

/// Trait for types that can be converted into a [`Value`].
pub trait ToValue {
    /// Converts the value into a [`Value`].
    fn to_value(self) -> Value;
}

impl ToValue for Value {
    fn to_value(self) -> Value {
        self
    }
}

impl ToValue for bool {
    /// SQLite has no boolean storage class; booleans are stored as 0 or 1.
    fn to_value(self) -> Value {
        Value::Integer(i64::from(self))
    }
}

impl ToValue for i64 {
    fn to_value(self) -> Value {
        Value::Integer(self)
    }
}

impl ToValue for i32 {
    fn to_value(self) -> Value {
        Value::Integer(i64::from(self))
    }
}

impl ToValue for i16 {
    fn to_value(self) -> Value {
        Value::Integer(i64::from(self))
    }
}

impl ToValue for i8 {
    fn to_value(self) -> Value {
        Value::Integer(i64::from(self))
    }
}

impl ToValue for u32 {
    fn to_value(self) -> Value {
        Value::Integer(i64::from(self))
    }
}

impl ToValue for u16 {
    fn to_value(self) -> Value {
        Value::Integer(i64::from(self))
    }
}

impl ToValue for u8 {
    fn to_value(self) -> Value {
        Value::Integer(i64::from(self))
    }
}

impl ToValue for f64 {
    fn to_value(self) -> Value {
        Value::Real(self)
    }
}

impl ToValue for f32 {
    fn to_value(self) -> Value {
        Value::Real(f64::from(self))
    }
}

impl ToValue for String {
    fn to_value(self) -> Value {
        Value::Text(self)
    }
}

impl ToValue for &str {
    fn to_value(self) -> Value {
        Value::Text(String::from(self))
    }
}

impl ToValue for Vec<u8> {
    fn to_value(self) -> Value {
        Value::Blob(self)
    }
}

impl ToValue for &[u8] {
    fn to_value(self) -> Value {
        Value::Blob(self.to_vec())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(self) -> Value {
        self.map_or(Value::Null, ToValue::to_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_null_and_numbers() {
        assert_eq!(Value::Null.to_inline_sql(), "NULL");
        assert_eq!(Value::Integer(-42).to_inline_sql(), "-42");
        assert_eq!(Value::Real(1.5).to_inline_sql(), "1.5");
    }

    #[test]
    fn inline_text_escapes_quotes() {
        let v = Value::Text(String::from("it's"));
        assert_eq!(v.to_inline_sql(), "'it''s'");
    }

    #[test]
    fn inline_blob_is_hex() {
        let v = Value::Blob(vec![0xDE, 0xAD, 0x01]);
        assert_eq!(v.to_inline_sql(), "X'DEAD01'");
    }

    #[test]
    fn bool_converts_to_integer() {
        assert_eq!(true.to_value(), Value::Integer(1));
        assert_eq!(false.to_value(), Value::Integer(0));
    }

    #[test]
    fn option_converts_to_null() {
        assert_eq!(None::<i64>.to_value(), Value::Null);
        assert_eq!(Some(7_i64).to_value(), Value::Integer(7));
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Text(String::new()).type_name(), "TEXT");
        assert_eq!(Value::Blob(vec![]).type_name(), "BLOB");
    }
}
