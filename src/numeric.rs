//! Range and integrality checks shared by every integer kind.
//!
//! All conversions funnel through `i128`, which holds every value of the
//! supported widths, so one routine serves signed and unsigned targets of
//! any width.

use std::fmt;

use crate::error::{NillableError, Result};

/// An integer payload width the coercions can target.
pub trait Integer: Copy + fmt::Display + TryFrom<i128> + Into<i128> {
    const BITS: u32;
    const SIGNED: bool;
    const NAME: &'static str;

    fn describe() -> String {
        let signedness = if Self::SIGNED { "signed" } else { "unsigned" };
        format!("{} ({}-bit {})", Self::NAME, Self::BITS, signedness)
    }
}

impl Integer for i32 {
    const BITS: u32 = 32;
    const SIGNED: bool = true;
    const NAME: &'static str = "int32";
}
impl Integer for i64 {
    const BITS: u32 = 64;
    const SIGNED: bool = true;
    const NAME: &'static str = "int64";
}
impl Integer for u32 {
    const BITS: u32 = 32;
    const SIGNED: bool = false;
    const NAME: &'static str = "uint32";
}

fn out_of_range<I: Integer>(value: impl fmt::Display) -> NillableError {
    NillableError::Range { value: value.to_string(), target: I::describe() }
}

/// Narrows any integer into the target width.
pub fn from_integer<I: Integer>(value: impl Into<i128>) -> Result<I> {
    let wide = value.into();
    I::try_from(wide).map_err(|_| out_of_range::<I>(wide))
}

/// Converts a float that must already be integral and must fit the target.
pub fn from_float<I: Integer>(value: f64) -> Result<I> {
    if !value.is_finite() || value.trunc() != value {
        return Err(out_of_range::<I>(value));
    }
    // saturates beyond i128, which no supported width can hold anyway
    let wide = value as i128;
    I::try_from(wide).map_err(|_| out_of_range::<I>(value))
}

pub fn from_bool<I: Integer>(value: bool) -> Result<I> {
    from_integer(i128::from(value))
}

/// Parses decimal text. Integer literals are taken exactly; anything else
/// goes through `f64` and the integrality check. `None` means the text is
/// not a number at all.
pub fn from_text<I: Integer>(text: &str) -> Option<Result<I>> {
    if let Ok(wide) = text.parse::<i128>() {
        return Some(from_integer(wide));
    }
    text.parse::<f64>().ok().map(from_float::<I>)
}

/// Converts a JSON number without losing precision on large integers.
pub fn from_json_number<I: Integer>(number: &serde_json::Number) -> Result<I> {
    if let Some(i) = number.as_i64() {
        from_integer(i)
    } else if let Some(u) = number.as_u64() {
        from_integer(u)
    } else {
        match number.as_f64() {
            Some(f) => from_float(f),
            None => Err(out_of_range::<I>(number)),
        }
    }
}
