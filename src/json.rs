//! JSON encoding: absent values are `null`, present ones the kind's native
//! JSON scalar.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use crate::datatype::Scalar;
use crate::error::Result;
use crate::presence::Nillable;

impl<T: Scalar> Nillable<T> {
    fn from_json_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Nillable::Null),
            value => T::decode_json(value).map(Nillable::Value).inspect_err(|e| {
                trace!(data_type = T::DATA_TYPE, error = %e, "JSON value rejected");
            }),
        }
    }

    fn to_json_value(&self) -> Result<Value> {
        match self {
            Nillable::Value(v) => v.encode_json(),
            _ => Ok(Value::Null),
        }
    }

    /// Decodes JSON text. `null` yields the nil state.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Self::from_json_value(serde_json::from_slice(bytes)?)
    }

    /// Encodes to JSON text; `null` unless a value is present.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_json_value()?)?)
    }
}

impl<T: Scalar> Serialize for Nillable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.encodes_null() {
            return serializer.serialize_none();
        }
        self.to_json_value()
            .map_err(<S::Error as ser::Error>::custom)?
            .serialize(serializer)
    }
}

impl<'de, T: Scalar> Deserialize<'de> for Nillable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(value).map_err(<D::Error as de::Error>::custom)
    }
}
