//! Lenient integer coercion for set values.
//!
//! `reps` and `weight` arrive from form inputs and may be numbers, numeric
//! strings, empty strings or missing. A value that cannot be read as an
//! integer becomes `0` instead of failing the request.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read `value` as an `i32`, falling back to `0`.
///
/// - integers pass through when they fit in `i32`
/// - floats truncate toward zero
/// - strings parse their leading integer (`"12kg"` is 12, `" 8"` is 8)
/// - everything else, and anything out of `i32` range, is 0
pub fn lenient_int(value: &Value) -> i32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).unwrap_or(0)
            } else {
                n.as_f64()
                    .map(f64::trunc)
                    .filter(|f| *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
                    .map_or(0, |f| f as i32)
            }
        }
        Value::String(s) => leading_int(s).unwrap_or(0),
        _ => 0,
    }
}

/// Parse the integer prefix of `s`: optional whitespace, optional sign,
/// then decimal digits up to the first non-digit.
fn leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).ok()
}

/// `deserialize_with` adapter for [`lenient_int`]. Pair with
/// `#[serde(default)]` so a missing field also reads as 0.
pub fn deserialize_lenient_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_int(&value))
}
