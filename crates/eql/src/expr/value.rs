//! Literal values rendered inline.

use crate::error::{EqlError, EqlResult};
use serde::{Deserialize, Serialize};

/// A host value wrapped as an expression leaf.
///
/// Values render as SQL literals and never contribute arguments. Use
/// [`raw`](super::raw) with [`RawExpr::bind`](super::RawExpr::bind) when a
/// value should travel as a positional argument instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// SQL `NULL`. Note that `col = NULL` is never true; test for null with
    /// `raw("col IS NULL")` instead of comparing against this value.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Render this value as a SQL literal.
    pub fn to_sql_literal(&self) -> EqlResult<String> {
        match self {
            Value::Null => Ok("NULL".to_string()),
            Value::Bool(true) => Ok("TRUE".to_string()),
            Value::Bool(false) => Ok("FALSE".to_string()),
            Value::Int(v) => Ok(v.to_string()),
            Value::Float(v) if v.is_finite() => Ok(v.to_string()),
            Value::Float(v) => Err(EqlError::unsupported_value(format!(
                "non-finite float {v} has no SQL literal"
            ))),
            Value::Text(s) => Ok(format!("'{}'", s.replace('\'', "''"))),
        }
    }
}

macro_rules! impl_value_from {
    ($variant:ident as $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

impl_value_from!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
impl_value_from!(Float as f64: f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(Value::Null.to_sql_literal().unwrap(), "NULL");
        assert_eq!(Value::from(true).to_sql_literal().unwrap(), "TRUE");
        assert_eq!(Value::from(5i32).to_sql_literal().unwrap(), "5");
        assert_eq!(Value::from(-7i64).to_sql_literal().unwrap(), "-7");
        assert_eq!(Value::from(1.5f64).to_sql_literal().unwrap(), "1.5");
    }

    #[test]
    fn text_quotes_are_doubled() {
        let v = Value::from("O'Brien");
        assert_eq!(v.to_sql_literal().unwrap(), "'O''Brien'");
    }

    #[test]
    fn none_is_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Text("a".to_string()));
    }

    #[test]
    fn non_finite_float_fails() {
        let err = Value::Float(f64::NAN).to_sql_literal().unwrap_err();
        assert!(err.is_unsupported_value());
        assert!(Value::Float(f64::INFINITY).to_sql_literal().is_err());
    }

    #[test]
    fn serde_round_trip_keeps_variant() {
        let json = serde_json::to_string(&Value::Int(3)).unwrap();
        assert_eq!(json, r#"{"Int":3}"#);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Int(3));
    }
}
