//! Nillable – scalars that tell "null" apart from "never set".
//!
//! JSON has `null`, SQL has `NULL`, and a Rust struct built with
//! [`Default`] has fields nobody ever assigned. This crate folds all three
//! into one value type, [`Nillable<T>`], with three states:
//!
//! * `Uninitialized` – the [`Default`] state, never touched by a constructor,
//!   a JSON decode or a driver scan.
//! * `Null` – an explicit absence.
//! * `Value(T)` – a meaningful payload.
//!
//! ## Kinds
//! One alias per scalar kind, each an instantiation of [`Nillable`]:
//! [`Bool`], [`Int32`], [`Int64`] (also [`Int`]), [`Uint32`], [`Float`], [`Text`],
//! [`Date`], [`Time`] and [`Uuid`]. The per-kind rules live in the
//! [`datatype::Scalar`] implementation of the payload type.
//!
//! ## Boundaries
//! * JSON – [`Nillable::from_json`] / [`Nillable::to_json`] and serde.
//!   Absent values encode as `null`; decoding never coerces across JSON types.
//! * Database drivers – [`Nillable::from_driver`] / [`Nillable::driver_value`]
//!   over the closed [`driver::DriverValue`] sum, and rusqlite's `ToSql` /
//!   `FromSql`. Scanning is permissive: an integer column may arrive as an
//!   integer, a float, a bool, text or bytes, and is range checked against
//!   the target width (see [`numeric`]).
//!
//! ## Quick Start
//! ```
//! use nillable::{Int32, Text};
//! let n = Int32::from_driver(2147483647.0).unwrap();
//! assert_eq!(n.get(), i32::MAX);
//! assert!(Int32::from_driver(2147483648.0).unwrap_err().is_range());
//! assert_eq!(Text::nil().to_json().unwrap(), b"null");
//! assert_eq!(Text::default().to_json().unwrap(), b"null");
//! ```

pub mod datatype;
pub mod date;
pub mod driver;
pub mod error;
pub mod identifier;
pub mod json;
pub mod numeric;
pub mod presence;
pub mod sqlite;
pub mod time;

pub use date::{Date, IsoDate};
pub use driver::{DriverValue, NullTimestamp, NullTimestamptz, NullUuid};
pub use error::{NillableError, Result};
pub use identifier::{parse_uuids, Uuid};
pub use presence::Nillable;
pub use time::Time;

pub type Bool = Nillable<bool>;
pub type Int32 = Nillable<i32>;
pub type Int64 = Nillable<i64>;
pub type Int = Int64;
pub type Uint32 = Nillable<u32>;
pub type Float = Nillable<f64>;
pub type Text = Nillable<String>;
