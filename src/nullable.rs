use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cell::SqlNull;
use crate::coerce::FromSqlValue;
use crate::equal::SemanticEq;
use crate::error::{BindError, CoercionError, DecodeError, EncodeError};
use crate::value::{SqlValue, ToSqlValue};

/// The JSON null literal, compared byte-exact on decode.
const NULL_BYTES: &[u8] = b"null";

/// A value that may be null.
///
/// `Nullable<V>` is a plain value type: the `Default` wrapper is a
/// ready-to-use null, copies never share state, and every failure path
/// resets the wrapper to null, so a null wrapper always reports
/// `V::default()` from [`value_or_zero`](Self::value_or_zero).
///
/// There is no way to mark a wrapper valid or null in place; the only
/// state changes replace the whole wrapper ([`scan`](Self::scan),
/// [`from_json`](Self::from_json), plain assignment).
///
/// Structural `==` (from `#[derive(PartialEq)]`) and
/// [`equal`](Self::equal) are different relations: `==` compares stored
/// state field by field, while `equal` additionally consults the inner
/// type's [`SemanticEq`] capability. Prefer `equal` for domain
/// comparisons.
///
/// Inner types holding shared references (`Rc`, …) undermine the
/// no-shared-state guarantee, since copies alias the same backing data.
/// Plain data payloads are recommended.
///
/// # Example
/// ```
/// use nullity::{Nullable, SqlValue};
///
/// let mut age = Nullable::<i64>::null();
/// assert!(age.is_null());
///
/// age.scan(SqlValue::Int(42)).unwrap();
/// assert_eq!(age.value_or_zero(), 42);
///
/// age.scan(SqlValue::Null).unwrap();
/// assert!(age.is_null());
/// assert_eq!(age.value_or_zero(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nullable<V> {
    cell: SqlNull<V>,
}

impl<V> Nullable<V> {
    /// A null wrapper holding the default value.
    pub fn null() -> Self
    where
        V: Default,
    {
        Nullable {
            cell: SqlNull::default(),
        }
    }

    /// Build from an optional value; `None` becomes the null wrapper.
    ///
    /// The value is moved in, so the wrapper never aliases the caller's
    /// storage.
    pub fn from_option(opt: Option<V>) -> Self
    where
        V: Default,
    {
        match opt {
            Some(v) => Nullable::from(v),
            None => Nullable::null(),
        }
    }

    pub fn is_null(&self) -> bool {
        !self.cell.valid
    }

    /// The stored value, or `V::default()` when null.
    pub fn value_or_zero(&self) -> V
    where
        V: Default + Clone,
    {
        if self.is_null() {
            V::default()
        } else {
            self.cell.value.clone()
        }
    }

    /// An owned copy of the value; `None` when null.
    ///
    /// Each call returns an independent copy, so mutating one result
    /// never affects another result or the wrapper itself.
    pub fn to_option(&self) -> Option<V>
    where
        V: Clone,
    {
        if self.is_null() {
            None
        } else {
            Some(self.cell.value.clone())
        }
    }

    /// Borrow the value; `None` when null.
    pub fn as_ref(&self) -> Option<&V> {
        if self.is_null() {
            None
        } else {
            Some(&self.cell.value)
        }
    }

    /// Consume the wrapper into an optional value.
    pub fn into_option(self) -> Option<V> {
        if self.cell.valid {
            Some(self.cell.value)
        } else {
            None
        }
    }

    /// Read a driver value, replacing the wrapper's whole state.
    ///
    /// A coercion failure resets the wrapper to null before the error is
    /// returned, so the wrapper is never left partially populated.
    pub fn scan(&mut self, src: SqlValue) -> Result<(), CoercionError>
    where
        V: FromSqlValue + Default,
    {
        if let Err(err) = self.cell.scan(src) {
            *self = Nullable::null();
            return Err(err);
        }
        if self.is_null() {
            // a null scan must leave exactly the canonical zero state
            *self = Nullable::null();
        }
        Ok(())
    }

    /// The driver value for binding: `Null` when null, otherwise the
    /// inner value's own encoding.
    pub fn value(&self) -> Result<SqlValue, BindError>
    where
        V: ToSqlValue,
    {
        self.cell.value()
    }

    /// Decode a JSON document, replacing the wrapper's whole state.
    ///
    /// The 4-byte literal `null` nulls the wrapper out. Anything else is
    /// decoded as a `V`; a decode failure resets the wrapper to null and
    /// surfaces the engine's error. The literal check is byte-exact, so
    /// the JSON string `"null"` decodes as a string, not as null.
    pub fn from_json(&mut self, data: &[u8]) -> Result<(), DecodeError>
    where
        V: DeserializeOwned + Default,
    {
        if data == NULL_BYTES {
            *self = Nullable::null();
            return Ok(());
        }
        match serde_json::from_slice::<V>(data) {
            Ok(v) => {
                *self = Nullable::from(v);
                Ok(())
            }
            Err(err) => {
                *self = Nullable::null();
                Err(DecodeError::new(err))
            }
        }
    }

    /// Encode to JSON: the `null` literal when null, otherwise the inner
    /// value. Only the inner value's own encoding can fail.
    pub fn to_json(&self) -> Result<Vec<u8>, EncodeError>
    where
        V: Serialize,
    {
        match self.as_ref() {
            None => Ok(NULL_BYTES.to_vec()),
            Some(v) => serde_json::to_vec(v).map_err(EncodeError::new),
        }
    }

    /// Domain equality over nullable values.
    ///
    /// Two wrappers are `equal` when both are null, or when both are
    /// non-null and the inner values are structurally `==` or equal under
    /// the inner type's [`SemanticEq`] capability. A null and a non-null
    /// wrapper are never `equal`.
    ///
    /// Wrappers that differ under `==` may still be `equal`, so domain
    /// code should compare with this method rather than `==`.
    pub fn equal(&self, other: &Self) -> bool
    where
        V: SemanticEq,
    {
        match (self.as_ref(), other.as_ref()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b || a.semantic_eq(b),
            _ => false,
        }
    }
}

impl<V> From<V> for Nullable<V> {
    fn from(v: V) -> Self {
        Nullable {
            cell: SqlNull {
                value: v,
                valid: true,
            },
        }
    }
}

impl<V> From<Nullable<V>> for Option<V> {
    fn from(n: Nullable<V>) -> Self {
        n.into_option()
    }
}

impl<V: SemanticEq> SemanticEq for Nullable<V> {
    fn semantic_eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<V: Serialize> Serialize for Nullable<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_ref().serialize(serializer)
    }
}

impl<'de, V> Deserialize<'de> for Nullable<V>
where
    V: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<V>::deserialize(deserializer).map(Nullable::from_option)
    }
}
