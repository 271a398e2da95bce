//! Purpose: Define the `Decoder` type, its primitive decoders, and combinators.
//! Exports: `Decoder`, `boolean`, `integer`, `float`, `string`, `null`,
//! `succeed`, `fail`, `field`, `index`, `array`, `list`, `one_of`,
//! `nullable`, `maybe`, `lazy`.
//! Role: The combinator algebra; everything else in the crate builds on it.
//! Invariants: Decoders are pure values; running one never mutates the input tree.
//! Invariants: Failure messages are plain strings; no combinator aggregates
//! multiple failures, each adopts a fixed documented tie-break.

use serde_json::Value;
use std::collections::LinkedList;
use std::sync::{Arc, OnceLock};

/// A reusable recipe for turning a JSON tree value into a typed `T`.
///
/// A decoder is nothing more than a shared closure from `&Value` to
/// `Result<T, String>`. Construction composes closures; no input is
/// inspected until [`Decoder::decode`] is called with a concrete tree.
/// Cloning is cheap (an `Arc` bump) and decoders are freely shareable
/// across threads.
pub struct Decoder<T> {
    run: Arc<dyn Fn(&Value) -> Result<T, String> + Send + Sync>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: 'static> Decoder<T> {
    /// Wraps a raw decode function. The building block for every primitive.
    pub fn new(run: impl Fn(&Value) -> Result<T, String> + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(run) }
    }

    /// Runs the decoder against a tree value.
    pub fn decode(&self, value: &Value) -> Result<T, String> {
        (self.run)(value)
    }

    /// Transforms the decoded value with a pure function. Failures pass
    /// through untouched and `f` is never called on them.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Decoder<U> {
        Decoder::new(move |value| self.decode(value).map(&f))
    }

    /// Monadic sequencing: on success, `f` picks a follow-up decoder which is
    /// re-run against the *same original tree value*, not the extracted one.
    /// This is what lets a continuation branch on a discriminant field and
    /// then decode the whole object again with a variant-specific decoder.
    /// On failure, short-circuits without calling `f`.
    pub fn and_then<U: 'static>(
        self,
        f: impl Fn(T) -> Decoder<U> + Send + Sync + 'static,
    ) -> Decoder<U> {
        Decoder::new(move |value| {
            let first = self.decode(value)?;
            f(first).decode(value)
        })
    }

    /// The validator template: keep the decoded value when `predicate` holds,
    /// otherwise fail with `message`. Equivalent to `and_then` into
    /// `succeed`-or-`fail`, without requiring `T: Clone`.
    pub fn check(
        self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Decoder<T> {
        let message = message.into();
        Decoder::new(move |value| {
            let decoded = self.decode(value)?;
            if predicate(&decoded) {
                Ok(decoded)
            } else {
                Err(message.clone())
            }
        })
    }
}

impl<F: 'static> Decoder<F> {
    /// Applicative combination: runs `self` (a decoder of a function) and
    /// `arg` against the same tree value, combining only if both succeed.
    ///
    /// Tie-break is left-biased: when `self` fails its message wins, even if
    /// `arg` would fail too; `arg` is not run in that case. No aggregation.
    pub fn apply<A, B>(self, arg: Decoder<A>) -> Decoder<B>
    where
        F: Fn(A) -> B + Send + Sync,
        A: 'static,
        B: 'static,
    {
        Decoder::new(move |value| {
            let f = self.decode(value)?;
            let a = arg.decode(value)?;
            Ok(f(a))
        })
    }

    /// Record sugar: applies a decoder for a mandatory object field to a
    /// partially-applied constructor decoder. `required(key, d)` is exactly
    /// `apply(field(key, d))`.
    pub fn required<A, B>(self, key: impl Into<String>, decoder: Decoder<A>) -> Decoder<B>
    where
        F: Fn(A) -> B + Send + Sync,
        A: 'static,
        B: 'static,
    {
        self.apply(field(key, decoder))
    }

    /// Record sugar for a field that may be missing or malformed:
    /// `optional(key, d)` is exactly `apply(maybe(field(key, d)))`.
    pub fn optional<A, B>(self, key: impl Into<String>, decoder: Decoder<A>) -> Decoder<B>
    where
        F: Fn(Option<A>) -> B + Send + Sync,
        A: 'static,
        B: 'static,
    {
        self.apply(maybe(field(key, decoder)))
    }
}

fn expected(kind: &str, value: &Value) -> String {
    format!("{kind} expected, got {value}")
}

/// Decodes a JSON boolean.
pub fn boolean() -> Decoder<bool> {
    Decoder::new(|value| match value {
        Value::Bool(b) => Ok(*b),
        other => Err(expected("Boolean", other)),
    })
}

/// Decodes a JSON number that is finite and has no fractional part.
///
/// JSON has a single numeric kind, so integer-ness is a constraint on the
/// number rather than a separate tag: `1.0` decodes as `1`, `1.1` fails.
pub fn integer() -> Decoder<i64> {
    Decoder::new(|value| match value {
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                return Ok(n);
            }
            match number.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && in_i64_range(f) => Ok(f as i64),
                _ => Err(expected("Integer", value)),
            }
        }
        other => Err(expected("Integer", other)),
    })
}

// `i64::MAX as f64` rounds up to 2^63, which is not representable; the
// strict upper bound excludes exactly that value.
fn in_i64_range(f: f64) -> bool {
    f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Decodes any finite JSON number as `f64`.
pub fn float() -> Decoder<f64> {
    Decoder::new(|value| match value {
        Value::Number(number) => match number.as_f64() {
            Some(f) if f.is_finite() => Ok(f),
            _ => Err(expected("Float", value)),
        },
        other => Err(expected("Float", other)),
    })
}

/// Decodes a JSON string.
pub fn string() -> Decoder<String> {
    Decoder::new(|value| match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(expected("String", other)),
    })
}

/// Decodes JSON `null`, succeeding with the caller-supplied stand-in value.
pub fn null<T: Clone + Send + Sync + 'static>(stand_in: T) -> Decoder<T> {
    Decoder::new(move |value| match value {
        Value::Null => Ok(stand_in.clone()),
        other => Err(format!("null value expected got {other}")),
    })
}

/// Always succeeds with `value`, ignoring the input tree entirely.
pub fn succeed<T: Clone + Send + Sync + 'static>(value: T) -> Decoder<T> {
    Decoder::new(move |_| Ok(value.clone()))
}

/// Always fails with `message`, ignoring the input tree entirely.
pub fn fail<T: 'static>(message: impl Into<String>) -> Decoder<T> {
    let message = message.into();
    Decoder::new(move |_| Err(message.clone()))
}

/// Decodes the value under `key` in an object. Key lookup, not positional;
/// insertion order is irrelevant.
pub fn field<T: 'static>(key: impl Into<String>, decoder: Decoder<T>) -> Decoder<T> {
    let key = key.into();
    Decoder::new(move |value| match value {
        Value::Object(map) => match map.get(&key) {
            Some(inner) => decoder.decode(inner),
            None => Err(format!("Object has no attribute {key}")),
        },
        other => Err(format!("Object expected, got {other}")),
    })
}

/// Decodes the element at position `i` in an array.
pub fn index<T: 'static>(i: usize, decoder: Decoder<T>) -> Decoder<T> {
    Decoder::new(move |value| match value {
        Value::Array(items) => match items.get(i) {
            Some(inner) => decoder.decode(inner),
            None => Err(format!("Index {i} out of bound")),
        },
        other => Err(format!("Array expected, got {other}")),
    })
}

/// Decodes every element of an array with `decoder`, in order, fail-fast:
/// the first element failure aborts the decode and its message is the
/// result. No partial collection is ever returned.
pub fn array<T: 'static>(decoder: Decoder<T>) -> Decoder<Vec<T>> {
    Decoder::new(move |value| match value {
        Value::Array(items) => items.iter().map(|item| decoder.decode(item)).collect(),
        other => Err(format!("Array expected got {other}")),
    })
}

/// Like [`array`] but targeting a linked list. A thin adapter over the array
/// decoder; identical behavior, lower-performance container for large inputs.
pub fn list<T: 'static>(decoder: Decoder<T>) -> Decoder<LinkedList<T>> {
    Decoder::new(move |value| match value {
        Value::Array(items) => items.iter().map(|item| decoder.decode(item)).collect(),
        other => Err(format!("List expected got {other}")),
    })
}

/// Tries each decoder in order against the same tree value and returns the
/// first success; earlier decoders pre-empt later ones even when both would
/// succeed. When every branch fails the per-branch messages are discarded
/// and the generic fallback is returned instead.
pub fn one_of<T: 'static>(decoders: Vec<Decoder<T>>) -> Decoder<T> {
    Decoder::new(move |value| {
        for decoder in &decoders {
            if let Ok(decoded) = decoder.decode(value) {
                return Ok(decoded);
            }
        }
        Err("oneOf found no matching decoder".to_string())
    })
}

/// Decodes explicit `null` as `None` and anything else via `decoder` as
/// `Some`. A failing `decoder` surfaces the generic `one_of` fallback; a
/// missing field is still an error (see [`maybe`] for that).
pub fn nullable<T: 'static>(decoder: Decoder<T>) -> Decoder<Option<T>> {
    let absent = Decoder::new(|value| match value {
        Value::Null => Ok(None),
        other => Err(format!("null value expected got {other}")),
    });
    one_of(vec![absent, decoder.map(Some)])
}

/// Degrades any failure of `decoder` to `None` instead of propagating it.
/// Behaves as `one_of([decoder.map(Some), succeed(None)])`: the fallback
/// branch never fails, so neither does `maybe`.
pub fn maybe<T: 'static>(decoder: Decoder<T>) -> Decoder<Option<T>> {
    Decoder::new(move |value| Ok(decoder.decode(value).ok()))
}

/// Defers decoder construction until the first decode call, memoizing the
/// result. Required for self-referential or mutually-referential schemas,
/// where evaluating the combinator tree eagerly would recurse forever
/// before any input exists. Forcing is idempotent: the thunk runs at most
/// once per `lazy` decoder.
pub fn lazy<T: 'static>(thunk: impl Fn() -> Decoder<T> + Send + Sync + 'static) -> Decoder<T> {
    let forced: OnceLock<Decoder<T>> = OnceLock::new();
    Decoder::new(move |value| forced.get_or_init(&thunk).decode(value))
}
