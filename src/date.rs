//! Calendar dates kept in their ISO text form.
//!
//! A [`Date`] stores the text it was given. JSON decoding checks the
//! leading `YYYY-MM-DD`; arithmetic and comparison parse strictly.

use chrono::{Local, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use rusqlite::types::{FromSql, ValueRef};
use serde_json::Value;

use std::fmt;
use std::ops;

use crate::datatype::{mismatch, Scalar};
use crate::driver::DriverValue;
use crate::error::{NillableError, Result};
use crate::presence::Nillable;
use crate::Int64;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    // only the prefix is checked, so "2000-12-3456789" passes
    static ref DATE_PATTERN: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap();
    // chrono alone takes "2023-5-2" and "+2023-05-02"
    static ref STRICT_DATE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

pub type Date = Nillable<IsoDate>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoDate(String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn naive_date(&self) -> Result<NaiveDate> {
        let parse_error = |message: String| NillableError::Parse {
            data_type: <Self as Scalar>::DATA_TYPE,
            value: self.0.clone(),
            message,
        };
        if !STRICT_DATE.is_match(&self.0) {
            return Err(parse_error(format!("expected {}", DATE_FORMAT)));
        }
        NaiveDate::parse_from_str(&self.0, DATE_FORMAT).map_err(|e| parse_error(e.to_string()))
    }
}
impl From<&str> for IsoDate {
    fn from(s: &str) -> Self {
        IsoDate(s.to_string())
    }
}
impl From<String> for IsoDate {
    fn from(s: String) -> Self {
        IsoDate(s)
    }
}
impl From<NaiveDate> for IsoDate {
    fn from(d: NaiveDate) -> Self {
        IsoDate(d.format(DATE_FORMAT).to_string())
    }
}
impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
impl ops::Deref for IsoDate {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Scalar for IsoDate {
    const DATA_TYPE: &'static str = "date";
    /// Only native temporal values are accepted; text, even well-formed
    /// date text, is rejected.
    fn scan(raw: DriverValue) -> Result<IsoDate> {
        match raw {
            DriverValue::Date(d) => Ok(IsoDate::from(d)),
            DriverValue::Timestamp(t) => Ok(IsoDate(t.format(DATE_FORMAT).to_string())),
            other => Err(other.rejected(Self::DATA_TYPE)),
        }
    }
    fn driver_value(&self) -> DriverValue {
        DriverValue::Text(self.0.clone())
    }
    fn decode_json(value: Value) -> Result<IsoDate> {
        match value {
            Value::String(s) if DATE_PATTERN.is_match(&s) => Ok(IsoDate(s)),
            Value::String(s) => Err(NillableError::Format {
                data_type: Self::DATA_TYPE,
                value: s,
            }),
            other => Err(mismatch("string", &other)),
        }
    }
    fn encode_json(&self) -> Result<Value> {
        Ok(Value::String(self.0.clone()))
    }
    fn render(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
    /// SQLite keeps dates as text; the driver layer hands back a native
    /// date or timestamp whenever the text is one.
    fn convert(value: ValueRef<'_>) -> DriverValue {
        match value {
            ValueRef::Text(_) => {
                if let Ok(d) = NaiveDate::column_result(value) {
                    DriverValue::Date(d)
                } else if let Ok(t) = NaiveDateTime::column_result(value) {
                    DriverValue::Timestamp(t.and_utc().fixed_offset())
                } else {
                    DriverValue::from(value)
                }
            }
            _ => DriverValue::from(value),
        }
    }
}

impl Nillable<IsoDate> {
    /// The parsed date. Fails on a nil date as well as on malformed text.
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        match self {
            Nillable::Value(d) => d.naive_date(),
            _ => Err(NillableError::Parse {
                data_type: IsoDate::DATA_TYPE,
                value: String::new(),
                message: "nil date".to_string(),
            }),
        }
    }

    /// Whole days elapsed since local midnight of this date. A nil date
    /// yields a nil count.
    pub fn days_ago(&self) -> Result<Int64> {
        self.days_ago_from(Local::now().naive_local())
    }

    /// [`days_ago`](Self::days_ago) against an explicit local wall clock.
    pub fn days_ago_from(&self, now: NaiveDateTime) -> Result<Int64> {
        let date = match self {
            Nillable::Value(d) => d.naive_date()?,
            _ => return Ok(Int64::nil()),
        };
        let elapsed = now - date.and_time(chrono::NaiveTime::MIN);
        Ok(Int64::new(elapsed.num_hours() / 24))
    }

    pub fn before(&self, other: &Date) -> Result<bool> {
        Ok(self.to_naive_date()? < other.to_naive_date()?)
    }

    pub fn after(&self, other: &Date) -> Result<bool> {
        Ok(self.to_naive_date()? > other.to_naive_date()?)
    }
}
