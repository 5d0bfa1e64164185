use crate::coerce::FromSqlValue;
use crate::error::{BindError, CoercionError};
use crate::value::{SqlValue, ToSqlValue};

/// The minimal nullable cell: a value plus a validity flag.
///
/// `SqlNull` is the low-level scan destination. It does not maintain the
/// null-implies-default invariant on its own: a failed scan leaves the
/// cell marked valid with its previous value. [`Nullable`] wraps a cell
/// and restores the invariant on every failure path.
///
/// [`Nullable`]: crate::nullable::Nullable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SqlNull<V> {
    pub value: V,
    pub valid: bool,
}

impl<V> SqlNull<V> {
    /// Read a driver value into the cell.
    ///
    /// `Null` clears the cell to its default state. Any other value marks
    /// the cell valid before coercion runs, so a coercion failure leaves
    /// `valid == true` with the previous value in place.
    pub fn scan(&mut self, src: SqlValue) -> Result<(), CoercionError>
    where
        V: FromSqlValue + Default,
    {
        if src.is_null() {
            self.value = V::default();
            self.valid = false;
            return Ok(());
        }
        self.valid = true;
        self.value = V::from_sql(src)?;
        Ok(())
    }

    /// Produce the driver value for binding: `Null` when the cell is not
    /// valid, otherwise the stored value's own encoding.
    pub fn value(&self) -> Result<SqlValue, BindError>
    where
        V: ToSqlValue,
    {
        if !self.valid {
            return Ok(SqlValue::Null);
        }
        self.value.to_sql_value()
    }
}
