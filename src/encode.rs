//! Purpose: Total value-to-tree encoding, mirroring the decoder set.
//! Exports: `boolean`, `integer`, `float`, `string`, `null`, `array`,
//! `object`, `dict`, `optional`, `or_null`, `iso_date`.
//! Role: External collaborator of the decoder core; the core never calls it.
//! Invariants: Every function is total; values to encode are assumed valid
//! and there is no failure channel.
//! Invariants: Dates render as millisecond-precision, `Z`-suffixed UTC.

use serde_json::{Map, Value};
use time::{OffsetDateTime, UtcOffset};

pub fn boolean(value: bool) -> Value {
    Value::Bool(value)
}

pub fn integer(value: i64) -> Value {
    Value::from(value)
}

/// Encodes a float. Non-finite values are not representable in the tree
/// model and encode as `null`.
pub fn float(value: f64) -> Value {
    Value::from(value)
}

pub fn string(value: impl Into<String>) -> Value {
    Value::String(value.into())
}

pub fn null() -> Value {
    Value::Null
}

/// Encodes a slice element-wise into an array.
pub fn array<T>(items: &[T], encode_item: impl Fn(&T) -> Value) -> Value {
    Value::Array(items.iter().map(encode_item).collect())
}

/// Builds an object from an explicit field list, preserving field order.
pub fn object(fields: impl IntoIterator<Item = (String, Value)>) -> Value {
    Value::Object(fields.into_iter().collect::<Map<String, Value>>())
}

/// Encodes a string-keyed mapping into an object, one entry per key.
pub fn dict<'a, S, T, I>(entries: I, encode_value: impl Fn(&T) -> Value) -> Value
where
    S: Into<String>,
    T: 'a,
    I: IntoIterator<Item = (S, &'a T)>,
{
    Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.into(), encode_value(value)))
            .collect(),
    )
}

/// Absent-as-null: `None` encodes as `null`, `Some` via `encode_some`.
pub fn optional<T>(value: &Option<T>, encode_some: impl Fn(&T) -> Value) -> Value {
    match value {
        Some(inner) => encode_some(inner),
        None => Value::Null,
    }
}

/// Discard-error-as-null: `Err` encodes as `null`, the error is dropped.
pub fn or_null<T, E>(value: &Result<T, E>, encode_ok: impl Fn(&T) -> Value) -> Value {
    match value {
        Ok(inner) => encode_ok(inner),
        Err(_) => Value::Null,
    }
}

/// Encodes a timestamp as an ISO-8601 string with millisecond precision,
/// normalized to UTC with a `Z` suffix. Sub-millisecond digits are dropped.
pub fn iso_date(timestamp: OffsetDateTime) -> Value {
    let utc = timestamp.to_offset(UtcOffset::UTC);
    Value::String(format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second(),
        utc.millisecond()
    ))
}
