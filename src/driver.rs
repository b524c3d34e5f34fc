//! The values a database access layer hands to, and takes from, the scalars.
//!
//! Drivers report one logical column type in several physical shapes
//! (an integer column may come back as `int64`, `float64`, text or bytes).
//! [`DriverValue`] enumerates every shape the boundary can produce so each
//! kind's scan is an exhaustive match.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::error::NillableError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DriverValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bytes(Vec<u8>),
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<FixedOffset>),
    Uuid(uuid::Uuid),
}

impl DriverValue {
    pub fn shape(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Bool(_) => "bool",
            DriverValue::Int(_) => "int64",
            DriverValue::Uint(_) => "uint64",
            DriverValue::Float(_) => "float64",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Text(_) => "string",
            DriverValue::Date(_) => "date",
            DriverValue::Timestamp(_) => "timestamp",
            DriverValue::Uuid(_) => "uuid",
        }
    }
    /// The error for a shape the target kind does not accept.
    pub fn rejected(&self, data_type: &'static str) -> NillableError {
        NillableError::Scan {
            value: self.to_string(),
            shape: self.shape(),
            data_type,
        }
    }
}

impl fmt::Display for DriverValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DriverValue::Null => write!(f, "nil"),
            DriverValue::Bool(b) => write!(f, "{}", b),
            DriverValue::Int(i) => write!(f, "{}", i),
            DriverValue::Uint(u) => write!(f, "{}", u),
            DriverValue::Float(x) => write!(f, "{}", x),
            DriverValue::Bytes(b) => write!(f, "{:?}", b),
            DriverValue::Text(s) => write!(f, "{:?}", s),
            DriverValue::Date(d) => write!(f, "{}", d),
            DriverValue::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
            DriverValue::Uuid(u) => write!(f, "{}", u),
        }
    }
}

macro_rules! from_native {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$native> for DriverValue {
                fn from(v: $native) -> Self {
                    DriverValue::$variant(v.into())
                }
            }
        )*
    };
}

from_native! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => Uint,
    u64 => Uint,
    f32 => Float,
    f64 => Float,
    String => Text,
    Vec<u8> => Bytes,
    NaiveDate => Date,
    DateTime<FixedOffset> => Timestamp,
    uuid::Uuid => Uuid,
}

impl From<&str> for DriverValue {
    fn from(v: &str) -> Self {
        DriverValue::Text(v.to_string())
    }
}
impl From<&[u8]> for DriverValue {
    fn from(v: &[u8]) -> Self {
        DriverValue::Bytes(v.to_vec())
    }
}
impl From<DateTime<Utc>> for DriverValue {
    fn from(v: DateTime<Utc>) -> Self {
        DriverValue::Timestamp(v.fixed_offset())
    }
}
impl<V: Into<DriverValue>> From<Option<V>> for DriverValue {
    fn from(v: Option<V>) -> Self {
        match v {
            Some(v) => v.into(),
            None => DriverValue::Null,
        }
    }
}

// ------------- Extended driver types --------------
// Nullable structs of a driver's extended type system, carrying their own
// validity flag. The adapters on `Time` and `Uuid` trust that flag as-is.

/// A `timestamp` (without time zone) column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullTimestamp {
    pub time: NaiveDateTime,
    pub valid: bool,
}

/// A `timestamptz` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullTimestamptz {
    pub time: DateTime<Utc>,
    pub valid: bool,
}

/// A `uuid` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullUuid {
    pub bytes: uuid::Uuid,
    pub valid: bool,
}
