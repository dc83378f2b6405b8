//! Literal values carried by constant nodes.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A literal value, either scalar or a collection of values.
///
/// The [`Display`](fmt::Display) rendering is the literal text that term
/// extraction splits on whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Calendar date, rendered as `YYYY-MM-DD`.
    Date(NaiveDate),
    Collection(Vec<ConstantValue>),
}

impl ConstantValue {
    /// Get the contained values if this is a collection.
    pub fn as_collection(&self) -> Option<&[ConstantValue]> {
        match self {
            ConstantValue::Collection(values) => Some(values),
            _ => None,
        }
    }

    /// Create a collection constant from anything convertible to values.
    pub fn collection<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ConstantValue>,
    {
        ConstantValue::Collection(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Text(text) => f.write_str(text),
            ConstantValue::Integer(value) => write!(f, "{value}"),
            ConstantValue::Float(value) => write!(f, "{value}"),
            ConstantValue::Boolean(value) => write!(f, "{value}"),
            ConstantValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            ConstantValue::Collection(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::Text(value.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        ConstantValue::Text(value)
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Integer(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        ConstantValue::Integer(i64::from(value))
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        ConstantValue::Float(value)
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Boolean(value)
    }
}

impl From<NaiveDate> for ConstantValue {
    fn from(value: NaiveDate) -> Self {
        ConstantValue::Date(value)
    }
}

impl<V: Into<ConstantValue>> From<Vec<V>> for ConstantValue {
    fn from(values: Vec<V>) -> Self {
        ConstantValue::collection(values)
    }
}
