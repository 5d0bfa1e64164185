//! Diesel integration: maps [`Nullable<V>`] onto Diesel's nullable SQL
//! types by delegating to `V`'s own `ToSql`/`FromSql` implementations.
//! A database NULL loads as the null wrapper; a null wrapper binds as
//! NULL.
//!
//! Requires the `diesel` cargo feature. These impls cover reading rows
//! (`Queryable`/`QueryableByName` fields) and binding with
//! `sql_query(..).bind::<Nullable<ST>, _>(..)`.
//!
//! ```ignore
//! use nullity::Nullable;
//!
//! #[derive(diesel::QueryableByName)]
//! struct Row {
//!     #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
//!     nickname: Nullable<String>,
//! }
//! ```

use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::{self, is_nullable, SqlType};

use crate::nullable::Nullable;

impl<V, ST, DB> FromSql<sql_types::Nullable<ST>, DB> for Nullable<V>
where
    DB: Backend,
    ST: SqlType<IsNull = is_nullable::NotNull>,
    V: FromSql<ST, DB> + Default,
{
    fn from_sql(bytes: <DB as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        V::from_sql(bytes).map(Nullable::from)
    }

    fn from_nullable_sql(bytes: Option<<DB as Backend>::RawValue<'_>>) -> deserialize::Result<Self> {
        match bytes {
            Some(bytes) => V::from_sql(bytes).map(Nullable::from),
            None => Ok(Nullable::null()),
        }
    }
}

impl<V, ST, DB> ToSql<sql_types::Nullable<ST>, DB> for Nullable<V>
where
    DB: Backend,
    ST: SqlType<IsNull = is_nullable::NotNull>,
    V: ToSql<ST, DB>,
{
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, DB>) -> serialize::Result {
        match self.as_ref() {
            Some(v) => v.to_sql(out),
            None => Ok(IsNull::Yes),
        }
    }
}
