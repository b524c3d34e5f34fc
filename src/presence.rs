//! The three-state wrapper shared by every kind.

use std::fmt;

use tracing::debug;

use crate::datatype::Scalar;
use crate::driver::DriverValue;
use crate::error::Result;

/// A scalar that may be absent, in one of two distinct ways.
///
/// * `Uninitialized` is what [`Default`] produces: the value was never set by
///   a constructor, a JSON decode or a driver scan.
/// * `Null` is an explicit absence (JSON `null`, SQL `NULL`, [`Nillable::nil`]).
/// * `Value` holds a meaningful payload.
///
/// Both absent states report [`is_nil`](Nillable::is_nil) and both encode to
/// JSON `null`; only [`is_initialized`](Nillable::is_initialized) tells them
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nillable<T> {
    #[default]
    Uninitialized,
    Null,
    Value(T),
}

impl<T> Nillable<T> {
    pub fn new(value: T) -> Self {
        Nillable::Value(value)
    }
    pub fn nil() -> Self {
        Nillable::Null
    }
    pub fn is_nil(&self) -> bool {
        !matches!(self, Nillable::Value(_))
    }
    pub fn is_initialized(&self) -> bool {
        !matches!(self, Nillable::Uninitialized)
    }
    /// Whether the JSON encoding of this instance is `null`.
    pub fn encodes_null(&self) -> bool {
        !self.is_initialized() || self.is_nil()
    }
    pub fn value(&self) -> Option<&T> {
        match self {
            Nillable::Value(v) => Some(v),
            _ => None,
        }
    }
    pub fn into_option(self) -> Option<T> {
        match self {
            Nillable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Scalar> Nillable<T> {
    /// The payload, or the zero value of `T` when absent.
    pub fn get(&self) -> T {
        self.value().cloned().unwrap_or_default()
    }

    /// Reads a driver value, applying the kind's coercion rules.
    pub fn from_driver(raw: impl Into<DriverValue>) -> Result<Self> {
        match raw.into() {
            DriverValue::Null => Ok(Nillable::Null),
            raw => {
                let shape = raw.shape();
                T::scan(raw).map(Nillable::Value).inspect_err(|e| {
                    debug!(data_type = T::DATA_TYPE, shape, error = %e, "driver value rejected");
                })
            }
        }
    }

    /// Overwrites `self` from a driver value. Left untouched on error.
    pub fn scan(&mut self, raw: impl Into<DriverValue>) -> Result<()> {
        *self = Self::from_driver(raw)?;
        Ok(())
    }

    /// The value handed to a driver: `Null` whenever absent.
    pub fn driver_value(&self) -> DriverValue {
        match self {
            Nillable::Value(v) => v.driver_value(),
            _ => DriverValue::Null,
        }
    }

    pub fn data_type(&self) -> &'static str {
        T::DATA_TYPE
    }
}

impl<T> From<Option<T>> for Nillable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nillable::Value(v),
            None => Nillable::Null,
        }
    }
}

/// Absent values render as the zero value of the payload, never as a
/// sentinel such as `nil`.
impl<T: Scalar> fmt::Display for Nillable<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Nillable::Value(v) => v.render(f),
            _ => T::default().render(f),
        }
    }
}
