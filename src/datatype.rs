// used for the driver boundary
use rusqlite::types::ValueRef;
// used for the JSON boundary
use serde_json::{Number, Value};

// used to print out readable forms of a data type
use std::fmt;

use crate::driver::DriverValue;
use crate::error::{NillableError, Result};
use crate::numeric::{self, Integer};

/// A payload type that can sit inside a [`crate::Nillable`].
///
/// Implementations own the per-kind rules: which driver shapes are accepted
/// and how they are coerced, which JSON shape is expected, and the canonical
/// text form. Absence is handled by the wrapper; none of these methods ever
/// sees a null.
pub trait Scalar: Clone + Default + PartialEq + fmt::Debug {
    const DATA_TYPE: &'static str;

    /// Coerces a non-null driver value.
    fn scan(raw: DriverValue) -> Result<Self>;
    fn driver_value(&self) -> DriverValue;
    /// Decodes a non-null JSON value. No cross-type coercion happens here.
    fn decode_json(value: Value) -> Result<Self>;
    fn encode_json(&self) -> Result<Value>;
    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result;

    /// Maps a raw SQLite value into the driver's value space. Kinds whose
    /// native type SQLite stores as text override this.
    fn convert(value: ValueRef<'_>) -> DriverValue {
        DriverValue::from(value)
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch(expected: &str, value: &Value) -> NillableError {
    NillableError::Decode(format!(
        "expected a JSON {}, found {} {}",
        expected,
        json_type(value),
        value
    ))
}

/// Text or bytes as UTF-8, for kinds that parse either one.
pub(crate) fn textual(raw: &DriverValue) -> Option<&str> {
    match raw {
        DriverValue::Text(s) => Some(s.as_str()),
        DriverValue::Bytes(b) => std::str::from_utf8(b).ok(),
        _ => None,
    }
}

// ------------- Data Types --------------
impl Scalar for bool {
    const DATA_TYPE: &'static str = "bool";
    fn scan(raw: DriverValue) -> Result<bool> {
        match raw {
            DriverValue::Bool(b) => Ok(b),
            DriverValue::Int(i) => Ok(i != 0),
            DriverValue::Uint(u) => Ok(u != 0),
            DriverValue::Float(f) => Ok(f != 0.0),
            other => Err(other.rejected(Self::DATA_TYPE)),
        }
    }
    fn driver_value(&self) -> DriverValue {
        DriverValue::Bool(*self)
    }
    fn decode_json(value: Value) -> Result<bool> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("boolean", &other)),
        }
    }
    fn encode_json(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn scan_integer<I: Integer>(raw: DriverValue, data_type: &'static str) -> Result<I> {
    match raw {
        DriverValue::Int(i) => numeric::from_integer(i),
        DriverValue::Uint(u) => numeric::from_integer(u),
        DriverValue::Float(f) => numeric::from_float(f),
        DriverValue::Bool(b) => numeric::from_bool(b),
        DriverValue::Text(_) | DriverValue::Bytes(_) => match textual(&raw).and_then(numeric::from_text::<I>) {
            Some(parsed) => parsed,
            None => Err(raw.rejected(data_type)),
        },
        other => Err(other.rejected(data_type)),
    }
}

fn decode_integer<I: Integer>(value: Value) -> Result<I> {
    match value {
        Value::Number(n) => numeric::from_json_number(&n),
        other => Err(mismatch("number", &other)),
    }
}

macro_rules! integer_scalar {
    ($($int:ty => $to_driver:expr),* $(,)?) => {
        $(
            impl Scalar for $int {
                const DATA_TYPE: &'static str = <$int as Integer>::NAME;
                fn scan(raw: DriverValue) -> Result<$int> {
                    scan_integer(raw, Self::DATA_TYPE)
                }
                fn driver_value(&self) -> DriverValue {
                    $to_driver(*self)
                }
                fn decode_json(value: Value) -> Result<$int> {
                    decode_integer(value)
                }
                fn encode_json(&self) -> Result<Value> {
                    Ok(Value::Number(Number::from(*self)))
                }
                fn render(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

// drivers exchange integers as int64; a uint32 always fits
integer_scalar! {
    i32 => |v: i32| DriverValue::Int(i64::from(v)),
    i64 => DriverValue::Int,
    u32 => |v: u32| DriverValue::Int(i64::from(v)),
}

impl Scalar for f64 {
    const DATA_TYPE: &'static str = "float64";
    fn scan(raw: DriverValue) -> Result<f64> {
        match raw {
            DriverValue::Float(f) => Ok(f),
            DriverValue::Int(i) => Ok(i as f64),
            DriverValue::Uint(u) => Ok(u as f64),
            DriverValue::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
            DriverValue::Text(_) | DriverValue::Bytes(_) => {
                match textual(&raw).and_then(|s| s.parse::<f64>().ok()) {
                    Some(f) => Ok(f),
                    None => Err(raw.rejected(Self::DATA_TYPE)),
                }
            }
            other => Err(other.rejected(Self::DATA_TYPE)),
        }
    }
    fn driver_value(&self) -> DriverValue {
        DriverValue::Float(*self)
    }
    fn decode_json(value: Value) -> Result<f64> {
        match &value {
            Value::Number(n) => n.as_f64().ok_or_else(|| mismatch("number", &value)),
            _ => Err(mismatch("number", &value)),
        }
    }
    fn encode_json(&self) -> Result<Value> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| NillableError::Range {
                value: self.to_string(),
                target: "a JSON number".to_string(),
            })
    }
    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Scalar for String {
    const DATA_TYPE: &'static str = "string";
    fn scan(raw: DriverValue) -> Result<String> {
        match raw {
            DriverValue::Text(s) => Ok(s),
            DriverValue::Bytes(b) => String::from_utf8(b)
                .map_err(|e| DriverValue::Bytes(e.into_bytes()).rejected(Self::DATA_TYPE)),
            other => Err(other.rejected(Self::DATA_TYPE)),
        }
    }
    fn driver_value(&self) -> DriverValue {
        DriverValue::Text(self.clone())
    }
    fn decode_json(value: Value) -> Result<String> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch("string", &other)),
        }
    }
    fn encode_json(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self)
    }
}
