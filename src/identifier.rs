//! UUIDs, accepted from drivers as raw bytes, text or a native value.

use serde_json::Value;

use std::fmt;

use crate::datatype::{mismatch, Scalar};
use crate::driver::{DriverValue, NullUuid};
use crate::error::{NillableError, Result};
use crate::presence::Nillable;

pub type Uuid = Nillable<uuid::Uuid>;

fn parse_error(value: impl Into<String>, e: uuid::Error) -> NillableError {
    NillableError::Parse {
        data_type: <uuid::Uuid as Scalar>::DATA_TYPE,
        value: value.into(),
        message: e.to_string(),
    }
}

impl Scalar for uuid::Uuid {
    const DATA_TYPE: &'static str = "uuid";
    fn scan(raw: DriverValue) -> Result<uuid::Uuid> {
        match raw {
            DriverValue::Uuid(u) => Ok(u),
            DriverValue::Bytes(b) => uuid::Uuid::from_slice(&b).map_err(|e| parse_error(format!("{:?}", b), e)),
            DriverValue::Text(s) => uuid::Uuid::parse_str(&s).map_err(|e| parse_error(s.clone(), e)),
            other => Err(other.rejected(Self::DATA_TYPE)),
        }
    }
    fn driver_value(&self) -> DriverValue {
        DriverValue::Uuid(*self)
    }
    fn decode_json(value: Value) -> Result<uuid::Uuid> {
        match value {
            Value::String(s) => uuid::Uuid::parse_str(&s).map_err(|_| NillableError::Format {
                data_type: Self::DATA_TYPE,
                value: s,
            }),
            other => Err(mismatch("string", &other)),
        }
    }
    fn encode_json(&self) -> Result<Value> {
        Ok(Value::String(self.hyphenated().to_string()))
    }
    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hyphenated())
    }
}

impl Nillable<uuid::Uuid> {
    /// Reads a driver's extended UUID column, trusting its validity flag.
    pub fn scan_uuid(&mut self, src: NullUuid) {
        *self = if src.valid { Nillable::Value(src.bytes) } else { Nillable::Null };
    }

    pub fn uuid_value(&self) -> NullUuid {
        match self {
            Nillable::Value(u) => NullUuid { bytes: *u, valid: true },
            _ => NullUuid::default(),
        }
    }
}

/// Parses a list of UUID strings, stopping at the first malformed one.
pub fn parse_uuids<S: AsRef<str>>(ids: &[S]) -> Result<Vec<uuid::Uuid>> {
    ids.iter()
        .map(|id| uuid::Uuid::parse_str(id.as_ref()).map_err(|e| parse_error(id.as_ref(), e)))
        .collect()
}
