//! Operations on whole records, plus the freeze wrapper and word assembly.

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::{RecordError, RecordResult};

/// An insertion-ordered JSON object.
pub type Record = Map<String, Value>;

/// Copy every top-level entry of `record` into a new record, in the same
/// order.
#[must_use]
pub fn shallow_copy(record: &Record) -> Record {
    record.clone()
}

/// Fold `records` left to right into one record. When a key is already
/// present, numbers are added and strings are concatenated.
///
/// # Errors
///
/// [`RecordError::MergeMismatch`] when the two values under a key are not
/// both numbers or both strings, or a float sum is not finite.
pub fn merge_records(records: &[Record]) -> RecordResult<Record> {
    let mut merged = Record::new();

    for record in records {
        for (key, value) in record {
            let combined = match merged.get(key) {
                None => value.clone(),
                Some(existing) => add_values(existing, value).ok_or_else(|| {
                    RecordError::MergeMismatch { key: key.clone() }
                })?,
            };
            let _ = merged.insert(key.clone(), combined);
        }
    }

    Ok(merged)
}

fn add_values(existing: &Value, incoming: &Value) -> Option<Value> {
    match (existing, incoming) {
        (Value::Number(a), Value::Number(b)) => add_numbers(a, b).map(Value::Number),
        (Value::String(a), Value::String(b)) => Some(Value::String(format!("{a}{b}"))),
        _ => None,
    }
}

fn add_numbers(a: &Number, b: &Number) -> Option<Number> {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        if let Some(sum) = a.checked_add(b) {
            return Some(Number::from(sum));
        }
    }
    Number::from_f64(a.as_f64()? + b.as_f64()?)
}

/// Remove each of `keys` whose value is truthy. Keys holding `false`, `0`,
/// `""` or `null` are left in place.
#[must_use]
pub fn remove_properties(mut record: Record, keys: &[&str]) -> Record {
    for key in keys {
        if record.get(*key).is_some_and(is_truthy) {
            let _ = record.shift_remove(*key);
        }
    }
    record
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether both records hold the same entries in the same insertion order.
#[must_use]
pub fn compare_records(a: &Record, b: &Record) -> bool {
    a.len() == b.len() && a.iter().eq(b.iter())
}

/// Whether `record` has no entries.
#[must_use]
pub fn is_empty_record(record: &Record) -> bool {
    record.is_empty()
}

/// A value that can only be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Frozen<T>(T);

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// Wrap `value` so that only shared access remains.
#[must_use]
pub const fn make_immutable<T>(value: T) -> Frozen<T> {
    Frozen(value)
}

/// Place each letter at each of its positions and join the result.
///
/// Later entries overwrite earlier ones at the same position; positions no
/// letter claims are skipped.
#[must_use]
pub fn make_word<I, P>(letters: I) -> String
where
    I: IntoIterator<Item = (char, P)>,
    P: AsRef<[usize]>,
{
    let mut slots: BTreeMap<usize, char> = BTreeMap::new();

    for (letter, positions) in letters {
        for &position in positions.as_ref() {
            let _ = slots.insert(position, letter);
        }
    }

    slots.into_values().collect()
}
