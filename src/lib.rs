//! Purpose: Composable JSON decoders, encoders, and validators.
//! Exports: `decode` (primitives and combinators), `validate` (range, length,
//! pattern, and date checks), `encode` (total value-to-tree mapping), `Error`.
//! Role: Public, additive-only surface; the JSON parser stays internal.
//! Invariants: Decoders are pure values; running one has no side effects.
//! Invariants: Callers only ever see the two-tier `Error` from entry points.
//!
//! A decoder describes the shape a payload must have and the typed value to
//! extract from it. Small primitive decoders compose into larger ones, and
//! nothing runs until the result is applied to concrete input:
//!
//! ```
//! use decant::decode::{self, Decoder};
//!
//! #[derive(Debug, PartialEq)]
//! struct User { name: String, age: i64 }
//!
//! let user: Decoder<User> =
//!     decode::succeed(|name: String| move |age: i64| User { name: name.clone(), age })
//!         .required("name", decode::string())
//!         .required("age", decode::integer());
//!
//! let decoded = user.decode_str(r#"{"name":"ada","age":36}"#).unwrap();
//! assert_eq!(decoded, User { name: "ada".to_string(), age: 36 });
//! ```

pub mod core;
pub mod encode;
mod json;
pub mod validate;

/// Primitive decoders and combinators.
pub use crate::core::decoder as decode;
pub use crate::core::decoder::Decoder;
pub use crate::core::error::Error;
