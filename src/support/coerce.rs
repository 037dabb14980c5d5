//! Loose scalar coercion
//!
//! Upstream payloads are not strict about scalar types: ids arrive as numbers
//! or numeric strings, flags as booleans or `0`/`1`. These helpers coerce a
//! decoded value to the type a model field expects instead of rejecting it.

use serde_json::Value;

/// Coerce to an integer
///
/// Floats truncate toward zero, strings use their leading integer prefix
/// (`"12abc"` is 12, `"abc"` is 0), booleans map to 0/1, everything else is 0.
pub fn int_value(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|n| i64::try_from(n).unwrap_or(i64::MAX)))
            .or_else(|| number.as_f64().map(truncate))
            .unwrap_or(0),
        Value::String(text) => leading_int(text),
        Value::Bool(flag) => i64::from(*flag),
        _ => 0,
    }
}

/// Coerce to a string; `null` becomes empty, containers are JSON-encoded
pub fn string_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        other => other.to_string(),
    }
}

/// Whether a value counts as blank: `null`, `false`, zero, `""`, `"0"`,
/// or an empty array/object
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(record) => record.is_empty(),
    }
}

fn truncate(float: f64) -> i64 {
    if float.is_finite() {
        // saturating cast
        float.trunc() as i64
    } else {
        0
    }
}

fn leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    if negative { -magnitude } else { magnitude }
}
