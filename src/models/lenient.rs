//! Lenient deserialization of monetary fields.
//!
//! Input records come from external CRUD collaborators and may carry numbers,
//! numeric strings, `null`, empty strings or garbage. Every monetary field is
//! read through [`decimal`], which coerces anything that is not a number to zero.
//! Magnitudes above [`MAX_AMOUNT`] are coerced to zero as well.

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// The largest accepted magnitude, 10^15.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientDecimal {
    Number(Decimal),
    Other(IgnoredAny),
}

/// Deserializes a decimal, falling back to zero for anything unparseable.
///
/// Use together with `#[serde(default)]` so that missing fields are zero too.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientDecimal::deserialize(deserializer)? {
        LenientDecimal::Number(value) if value.abs() <= MAX_AMOUNT => value,
        LenientDecimal::Number(_) | LenientDecimal::Other(_) => Decimal::ZERO,
    })
}
