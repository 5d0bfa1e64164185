use std::fmt;
use std::str::FromStr;

use crate::error::CoercionError;
use crate::value::SqlValue;

/// Conversion of a driver value into a statically-typed destination: the
/// scan direction.
///
/// The implementations below form the fixed coercion table. Implementing
/// this trait is also the extension point for custom destinations: a type
/// with its own conversion rules takes full control of the incoming
/// driver value.
pub trait FromSqlValue: Sized {
    fn from_sql(src: SqlValue) -> Result<Self, CoercionError>;
}

fn parse_text<T>(s: &str, src: &'static str, dst: &'static str) -> Result<T, CoercionError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    s.parse::<T>()
        .map_err(|err| CoercionError::invalid(src, dst, err.to_string()))
}

fn utf8<'a>(bytes: &'a [u8], dst: &'static str) -> Result<&'a str, CoercionError> {
    std::str::from_utf8(bytes).map_err(|err| CoercionError::invalid("bytes", dst, err.to_string()))
}

/// The boolean literal set accepted on the text path.
fn parse_bool_literal(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

// Integer destinations accept the driver's 64-bit integer (narrowing
// silently truncates) and text or bytes that parse as an integer.
// Floats are not accepted.
macro_rules! int_from_sql_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromSqlValue for $t {
                fn from_sql(src: SqlValue) -> Result<Self, CoercionError> {
                    match src {
                        SqlValue::Int(i) => Ok(i as $t),
                        SqlValue::Text(s) => parse_text(&s, "text", stringify!($t)),
                        SqlValue::Bytes(b) => {
                            let s = utf8(&b, stringify!($t))?;
                            parse_text(s, "bytes", stringify!($t))
                        }
                        other => Err(CoercionError::unsupported(
                            other.type_name(),
                            stringify!($t),
                        )),
                    }
                }
            }
        )*
    };
}

int_from_sql_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_from_sql_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromSqlValue for $t {
                fn from_sql(src: SqlValue) -> Result<Self, CoercionError> {
                    match src {
                        SqlValue::Float(x) => Ok(x as $t),
                        SqlValue::Int(i) => Ok(i as $t),
                        SqlValue::Text(s) => parse_text(&s, "text", stringify!($t)),
                        SqlValue::Bytes(b) => {
                            let s = utf8(&b, stringify!($t))?;
                            parse_text(s, "bytes", stringify!($t))
                        }
                        other => Err(CoercionError::unsupported(
                            other.type_name(),
                            stringify!($t),
                        )),
                    }
                }
            }
        )*
    };
}

float_from_sql_value!(f32, f64);

impl FromSqlValue for bool {
    fn from_sql(src: SqlValue) -> Result<Self, CoercionError> {
        match src {
            SqlValue::Bool(b) => Ok(b),
            SqlValue::Text(s) => parse_bool_literal(&s).ok_or_else(|| {
                CoercionError::invalid("text", "bool", format!("{:?} is not a boolean literal", s))
            }),
            SqlValue::Bytes(b) => {
                let s = utf8(&b, "bool")?;
                parse_bool_literal(s).ok_or_else(|| {
                    CoercionError::invalid(
                        "bytes",
                        "bool",
                        format!("{:?} is not a boolean literal", s),
                    )
                })
            }
            other => Err(CoercionError::unsupported(other.type_name(), "bool")),
        }
    }
}

impl FromSqlValue for String {
    fn from_sql(src: SqlValue) -> Result<Self, CoercionError> {
        match src {
            SqlValue::Text(s) => Ok(s),
            SqlValue::Bytes(b) => String::from_utf8(b)
                .map_err(|err| CoercionError::invalid("bytes", "String", err.to_string())),
            #[cfg(feature = "chrono")]
            SqlValue::Timestamp(t) => Ok(t.to_rfc3339()),
            other => Err(CoercionError::unsupported(other.type_name(), "String")),
        }
    }
}

impl FromSqlValue for Vec<u8> {
    fn from_sql(src: SqlValue) -> Result<Self, CoercionError> {
        match src {
            SqlValue::Bytes(b) => Ok(b),
            SqlValue::Text(s) => Ok(s.into_bytes()),
            #[cfg(feature = "chrono")]
            SqlValue::Timestamp(t) => Ok(t.to_rfc3339().into_bytes()),
            other => Err(CoercionError::unsupported(other.type_name(), "Vec<u8>")),
        }
    }
}

#[cfg(feature = "chrono")]
impl FromSqlValue for chrono::DateTime<chrono::Utc> {
    fn from_sql(src: SqlValue) -> Result<Self, CoercionError> {
        match src {
            SqlValue::Timestamp(t) => Ok(t),
            other => Err(CoercionError::unsupported(
                other.type_name(),
                "DateTime<Utc>",
            )),
        }
    }
}

// A duration is integer-kinded at the driver level: a nanosecond count.
// Driver integers are signed, durations are not; negative counts are
// rejected rather than wrapped.
impl FromSqlValue for std::time::Duration {
    fn from_sql(src: SqlValue) -> Result<Self, CoercionError> {
        fn from_nanos(n: i64, src: &'static str) -> Result<std::time::Duration, CoercionError> {
            u64::try_from(n)
                .map(std::time::Duration::from_nanos)
                .map_err(|_| CoercionError::invalid(src, "Duration", "negative nanosecond count"))
        }

        match src {
            SqlValue::Int(n) => from_nanos(n, "int64"),
            SqlValue::Text(s) => {
                let n = parse_text::<i64>(&s, "text", "Duration")?;
                from_nanos(n, "text")
            }
            SqlValue::Bytes(b) => {
                let s = utf8(&b, "Duration")?;
                let n = parse_text::<i64>(s, "bytes", "Duration")?;
                from_nanos(n, "bytes")
            }
            other => Err(CoercionError::unsupported(other.type_name(), "Duration")),
        }
    }
}
