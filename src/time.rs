//! Timestamps with their offset passed through untouched.

use chrono::{DateTime, FixedOffset, NaiveTime, SecondsFormat, Utc};
use rusqlite::types::{FromSql, ValueRef};
use serde_json::Value;

use std::fmt;

use crate::datatype::{mismatch, Scalar};
use crate::driver::{DriverValue, NullTimestamp, NullTimestamptz};
use crate::error::{NillableError, Result};
use crate::presence::Nillable;

pub type Time = Nillable<DateTime<FixedOffset>>;

impl Scalar for DateTime<FixedOffset> {
    const DATA_TYPE: &'static str = "time";
    fn scan(raw: DriverValue) -> Result<Self> {
        match raw {
            DriverValue::Timestamp(t) => Ok(t),
            // a bare date is midnight UTC
            DriverValue::Date(d) => Ok(d.and_time(NaiveTime::MIN).and_utc().fixed_offset()),
            other => Err(other.rejected(Self::DATA_TYPE)),
        }
    }
    fn driver_value(&self) -> DriverValue {
        DriverValue::Timestamp(*self)
    }
    fn decode_json(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => DateTime::parse_from_rfc3339(&s).map_err(|_| NillableError::Format {
                data_type: Self::DATA_TYPE,
                value: s,
            }),
            other => Err(mismatch("string", &other)),
        }
    }
    fn encode_json(&self) -> Result<Value> {
        Ok(Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, false)))
    }
    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }
    fn convert(value: ValueRef<'_>) -> DriverValue {
        if let ValueRef::Text(_) = value {
            if let Ok(t) = DateTime::<FixedOffset>::column_result(value) {
                return DriverValue::Timestamp(t);
            }
            if let Ok(t) = DateTime::<Utc>::column_result(value) {
                return DriverValue::Timestamp(t.fixed_offset());
            }
        }
        DriverValue::from(value)
    }
}

// Adapters for the two timestamp columns of a driver's extended type
// system. The driver's validity flag is trusted as-is.
impl Nillable<DateTime<FixedOffset>> {
    pub fn scan_timestamp(&mut self, src: NullTimestamp) {
        *self = if src.valid {
            Nillable::Value(src.time.and_utc().fixed_offset())
        } else {
            Nillable::Null
        };
    }

    pub fn scan_timestamptz(&mut self, src: NullTimestamptz) {
        *self = if src.valid {
            Nillable::Value(src.time.fixed_offset())
        } else {
            Nillable::Null
        };
    }

    /// The wall-clock reading, without its offset.
    pub fn timestamp_value(&self) -> NullTimestamp {
        match self {
            Nillable::Value(t) => NullTimestamp { time: t.naive_local(), valid: true },
            _ => NullTimestamp::default(),
        }
    }

    pub fn timestamptz_value(&self) -> NullTimestamptz {
        match self {
            Nillable::Value(t) => NullTimestamptz { time: t.with_timezone(&Utc), valid: true },
            _ => NullTimestamptz::default(),
        }
    }
}
