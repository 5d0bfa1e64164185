//! # nullity — nullable values for SQL and JSON
//!
//! `nullity` provides [`Nullable<V>`], a generic container that is either
//! null or a present value, and that round-trips transparently through a
//! database driver's scan/bind protocol and through JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use nullity::{Nullable, SqlValue};
//! use serde::Deserialize;
//!
//! // A ready-to-use null: no constructor call needed.
//! let mut score = Nullable::<i64>::default();
//! assert!(score.is_null());
//! assert_eq!(score.value_or_zero(), 0);
//!
//! // Read a driver value.
//! score.scan(SqlValue::Int(42)).unwrap();
//! assert_eq!(score.to_option(), Some(42));
//!
//! // Nullable fields inside JSON documents.
//! #[derive(Deserialize)]
//! struct Player {
//!     #[serde(default)]
//!     nickname: Nullable<String>,
//! }
//!
//! let p: Player = serde_json::from_str(r#"{"nickname": "ada"}"#).unwrap();
//! assert_eq!(p.nickname.value_or_zero(), "ada");
//!
//! let p: Player = serde_json::from_str("{}").unwrap();
//! assert!(p.nickname.is_null());
//! ```
//!
//! The wrapper keeps one guarantee above all: a null wrapper always holds
//! `V::default()`, even after a failed scan or decode. Compare wrappers
//! with [`Nullable::equal`] rather than `==` when the inner type's domain
//! equality is coarser than structural equality (see [`SemanticEq`]).

pub mod cell;
pub mod coerce;
#[cfg(feature = "diesel")]
pub mod diesel_support;
pub mod equal;
pub mod error;
pub mod nullable;
pub mod value;

pub use cell::SqlNull;
pub use coerce::FromSqlValue;
pub use equal::SemanticEq;
pub use error::{BindError, CoercionError, DecodeError, DecodeErrorKind, EncodeError};
pub use nullable::Nullable;
pub use value::{SqlValue, ToSqlValue};

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Create a non-null wrapper holding `v`.
pub fn from<V>(v: V) -> Nullable<V> {
    Nullable::from(v)
}

/// Create a wrapper from an optional value; `None` becomes null.
pub fn from_option<V: Default>(opt: Option<V>) -> Nullable<V> {
    Nullable::from_option(opt)
}

/// Create a null wrapper.
pub fn null<V: Default>() -> Nullable<V> {
    Nullable::null()
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Common imports for working with `nullity`.
pub mod prelude {
    pub use crate::cell::SqlNull;
    pub use crate::coerce::FromSqlValue;
    pub use crate::equal::SemanticEq;
    pub use crate::error::{BindError, CoercionError, DecodeError, DecodeErrorKind, EncodeError};
    pub use crate::nullable::Nullable;
    pub use crate::value::{SqlValue, ToSqlValue};
}
