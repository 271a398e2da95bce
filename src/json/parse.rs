//! Purpose: Provide the internal text-to-tree parse entrypoint.
//! Exports: `from_str`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Parsing is strict; trailing garbage after the value is an error.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde_json::Value;

pub(crate) fn from_str(input: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(input)
}
