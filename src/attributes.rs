use chrono::{DateTime, Utc};
use derive_more::From;
use serde::Serialize;

use crate::{validation, Error, Result};

/// Value of a custom user attribute.
///
/// Conveniently implements `From` conversions for strings, signed integers, floats, booleans and
/// UTC dates. `Option<T>` converts to [`AttributeValue::Null`] when empty, so optional values can
/// be passed as-is.
///
/// ```
/// # use batch_user::AttributeValue;
/// let name: AttributeValue = "john_doe".into();
/// let age: AttributeValue = 42.into();
/// let score: AttributeValue = 0.75.into();
/// let premium: AttributeValue = true.into();
/// let removed: AttributeValue = None::<String>.into();
/// assert_eq!(removed, AttributeValue::Null);
/// ```
#[derive(Debug, Serialize, PartialEq, From, Clone)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A string of at most 64 characters. Can be empty.
    String(String),
    /// An integer.
    Integer(i64),
    /// A finite floating-point number.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// A date. Timezones are not supported, so dates are UTC.
    Date(DateTime<Utc>),
    /// Absence of value. Setting it removes the attribute.
    Null,
}

impl AttributeValue {
    /// Check the value against the attribute limits.
    ///
    /// # Errors
    ///
    /// - [`Error::AttributeValueTooLong`] for strings longer than 64 characters.
    /// - [`Error::NonFiniteNumber`] for NaN and infinite floats.
    pub fn validate(&self) -> Result<()> {
        match self {
            AttributeValue::String(s) => validation::validate_string_value(s),
            AttributeValue::Float(f) if !f.is_finite() => Err(Error::NonFiniteNumber),
            _ => Ok(()),
        }
    }

    /// Returns `true` for [`AttributeValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::String(_) => "string",
            AttributeValue::Integer(_) => "integer",
            AttributeValue::Float(_) => "float",
            AttributeValue::Boolean(_) => "boolean",
            AttributeValue::Date(_) => "date",
            AttributeValue::Null => "null",
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}

impl TryFrom<u64> for AttributeValue {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        i64::try_from(value)
            .map(AttributeValue::Integer)
            .map_err(|_| Error::IntegerOutOfRange)
    }
}

/// Conversion for untyped values coming from a JSON bridge. Arrays and objects are not valid
/// attribute values.
impl TryFrom<serde_json::Value> for AttributeValue {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(AttributeValue::Null),
            Value::Bool(b) => Ok(AttributeValue::Boolean(b)),
            Value::String(s) => Ok(AttributeValue::String(s)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(AttributeValue::Integer(i))
                } else if n.is_u64() {
                    Err(Error::IntegerOutOfRange)
                } else {
                    n.as_f64()
                        .map(AttributeValue::Float)
                        .ok_or(Error::NonFiniteNumber)
                }
            }
            Value::Array(_) => Err(Error::UnsupportedAttributeType("array")),
            Value::Object(_) => Err(Error::UnsupportedAttributeType("object")),
        }
    }
}
