#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

use crate::error::BindError;

/// A dynamically-typed value as exchanged with a database driver.
///
/// This is the currency of the scan/bind protocol: a driver produces a
/// `SqlValue` for each column it reads, and accepts one for each
/// parameter it binds. `Null` is the driver-level marker for SQL NULL.
///
/// The variant set is deliberately small: 64-bit integers and floats,
/// text, raw bytes, booleans, and (with the `chrono` feature) UTC
/// timestamps. Narrower Rust types are reached through coercion, not
/// through extra variants.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    #[cfg(feature = "chrono")]
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Driver-level name of this value's type, as used in coercion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Int(_) => "int64",
            SqlValue::Float(_) => "float64",
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
            #[cfg(feature = "chrono")]
            SqlValue::Timestamp(_) => "timestamp",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(v: &[u8]) -> Self {
        SqlValue::Bytes(v.to_owned())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

#[cfg(feature = "chrono")]
impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(v)
    }
}

/// Conversion of a Rust value into a driver value: the bind direction.
///
/// The built-in implementations never fail except when an unsigned value
/// does not fit the driver's signed 64-bit integer; the `Result` exists
/// mainly for custom types with their own failure modes.
pub trait ToSqlValue {
    fn to_sql_value(&self) -> Result<SqlValue, BindError>;
}

macro_rules! int_to_sql_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToSqlValue for $t {
                fn to_sql_value(&self) -> Result<SqlValue, BindError> {
                    Ok(SqlValue::Int(*self as i64))
                }
            }
        )*
    };
}

int_to_sql_value!(i8, i16, i32, i64, isize, u8, u16, u32);

macro_rules! wide_uint_to_sql_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToSqlValue for $t {
                fn to_sql_value(&self) -> Result<SqlValue, BindError> {
                    i64::try_from(*self).map(SqlValue::Int).map_err(|_| {
                        BindError::new(
                            stringify!($t),
                            format!("{} does not fit a signed 64-bit integer", self),
                        )
                    })
                }
            }
        )*
    };
}

wide_uint_to_sql_value!(u64, u128, usize);

impl ToSqlValue for i128 {
    fn to_sql_value(&self) -> Result<SqlValue, BindError> {
        i64::try_from(*self).map(SqlValue::Int).map_err(|_| {
            BindError::new("i128", format!("{} does not fit a signed 64-bit integer", self))
        })
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(&self) -> Result<SqlValue, BindError> {
        Ok(SqlValue::Float(f64::from(*self)))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(&self) -> Result<SqlValue, BindError> {
        Ok(SqlValue::Float(*self))
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(&self) -> Result<SqlValue, BindError> {
        Ok(SqlValue::Bool(*self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(&self) -> Result<SqlValue, BindError> {
        Ok(SqlValue::Text(self.clone()))
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(&self) -> Result<SqlValue, BindError> {
        Ok(SqlValue::Text((*self).to_owned()))
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(&self) -> Result<SqlValue, BindError> {
        Ok(SqlValue::Bytes(self.clone()))
    }
}

#[cfg(feature = "chrono")]
impl ToSqlValue for DateTime<Utc> {
    fn to_sql_value(&self) -> Result<SqlValue, BindError> {
        Ok(SqlValue::Timestamp(*self))
    }
}

impl ToSqlValue for std::time::Duration {
    fn to_sql_value(&self) -> Result<SqlValue, BindError> {
        i64::try_from(self.as_nanos()).map(SqlValue::Int).map_err(|_| {
            BindError::new(
                "Duration",
                "nanosecond count does not fit a signed 64-bit integer",
            )
        })
    }
}
