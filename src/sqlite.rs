//! The rusqlite side of the driver boundary.
//!
//! Reading goes `ValueRef` → [`DriverValue`] (through [`Scalar::convert`]) →
//! the kind's scan. Writing goes the other way and always produces an owned
//! SQLite value.

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use tracing::trace;

use crate::datatype::Scalar;
use crate::driver::DriverValue;
use crate::presence::Nillable;

// matches how rusqlite's chrono support writes DateTime values
const TIMESTAMP_FORMAT: &str = "%F %T%.f%:z";

impl From<ValueRef<'_>> for DriverValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => DriverValue::Null,
            ValueRef::Integer(i) => DriverValue::Int(i),
            ValueRef::Real(f) => DriverValue::Float(f),
            ValueRef::Text(t) => match std::str::from_utf8(t) {
                Ok(s) => DriverValue::Text(s.to_string()),
                Err(_) => DriverValue::Bytes(t.to_vec()),
            },
            ValueRef::Blob(b) => DriverValue::Bytes(b.to_vec()),
        }
    }
}

impl DriverValue {
    pub fn to_sql_value(&self) -> rusqlite::Result<Value> {
        Ok(match self {
            DriverValue::Null => Value::Null,
            DriverValue::Bool(b) => Value::Integer(i64::from(*b)),
            DriverValue::Int(i) => Value::Integer(*i),
            DriverValue::Uint(u) => Value::Integer(
                i64::try_from(*u).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?,
            ),
            DriverValue::Float(f) => Value::Real(*f),
            DriverValue::Bytes(b) => Value::Blob(b.clone()),
            DriverValue::Text(s) => Value::Text(s.clone()),
            DriverValue::Date(d) => Value::Text(d.format("%F").to_string()),
            DriverValue::Timestamp(t) => Value::Text(t.format(TIMESTAMP_FORMAT).to_string()),
            DriverValue::Uuid(u) => Value::Blob(u.as_bytes().to_vec()),
        })
    }
}

impl ToSql for DriverValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(self.to_sql_value()?))
    }
}

impl<T: Scalar> ToSql for Nillable<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(self.driver_value().to_sql_value()?))
    }
}

impl<T: Scalar> FromSql for Nillable<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = T::convert(value);
        trace!(data_type = T::DATA_TYPE, shape = raw.shape(), "reading column");
        Ok(Nillable::from_driver(raw)?)
    }
}
