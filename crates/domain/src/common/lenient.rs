//! Lenient readers for numeric fields of stored documents.
//!
//! Stored and imported records come from an editor that never validated its
//! number boxes, so a stat may arrive as `"12"`, `12.5`, `-3` or `null`.
//! These helpers turn any JSON value into a usable integer instead of failing
//! the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::value_objects::parse_int_lenient;

/// Reads any JSON value as an integer, truncating floats toward zero.
///
/// Numeric strings use the same leading-integer rule as form input. Anything
/// else reads as 0.
pub fn coerce_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => parse_int_lenient(s),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

/// Reads any JSON value as a non-negative integer; negatives clamp to 0.
pub fn coerce_non_negative(value: &Value) -> u32 {
    clamp_non_negative(coerce_i64(value))
}

/// Clamps a signed integer into the `u32` range, negatives to 0.
pub fn clamp_non_negative(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// `deserialize_with` adapter for non-negative fields.
pub fn non_negative<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_non_negative(&value))
}

/// `deserialize_with` adapter for signed integer fields.
pub fn signed<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_i64(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(coerce_i64(&json!(14)), 14);
        assert_eq!(coerce_i64(&json!(-3)), -3);
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(coerce_i64(&json!(12.9)), 12);
        assert_eq!(coerce_i64(&json!(-2.5)), -2);
    }

    #[test]
    fn strings_use_leading_integer() {
        assert_eq!(coerce_i64(&json!("17")), 17);
        assert_eq!(coerce_i64(&json!("9kg")), 9);
        assert_eq!(coerce_i64(&json!("abc")), 0);
    }

    #[test]
    fn non_numeric_values_read_as_zero() {
        assert_eq!(coerce_i64(&json!(null)), 0);
        assert_eq!(coerce_i64(&json!(true)), 0);
        assert_eq!(coerce_i64(&json!([1])), 0);
    }

    #[test]
    fn negatives_clamp_for_non_negative_fields() {
        assert_eq!(coerce_non_negative(&json!(-8)), 0);
        assert_eq!(coerce_non_negative(&json!("-8")), 0);
        assert_eq!(coerce_non_negative(&json!(6)), 6);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(clamp_non_negative(i64::MAX), u32::MAX);
    }
}
