//! Purpose: Provide the entry points that execute a decoder against input.
//! Exports: `Decoder::decode_str`, `Decoder::decode_value`,
//! `Decoder::decode_serialize`.
//! Role: Runner boundary translating parse and decode failures into `Error`.
//! Invariants: Inner decoder failure strings always surface as `Error::Type`.
//! Invariants: No host-level failure escapes the boundary as a panic.

use crate::core::decoder::Decoder;
use crate::core::error::Error;
use crate::json;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

impl<T: 'static> Decoder<T> {
    /// Parses `input` as JSON text and runs the decoder against the result.
    ///
    /// Malformed text yields [`Error::Parse`]; a well-formed tree that does
    /// not satisfy the decoder yields [`Error::Type`] carrying the decoder's
    /// failure message.
    pub fn decode_str(&self, input: &str) -> Result<T, Error> {
        trace!(len = input.len(), "decoding JSON text");
        let value = json::parse::from_str(input).map_err(|err| {
            debug!(error = %err, "input is not valid JSON");
            Error::Parse(err.to_string())
        })?;
        self.decode_value(&value)
    }

    /// Runs the decoder against an already-parsed tree value.
    pub fn decode_value(&self, value: &Value) -> Result<T, Error> {
        self.decode(value).map_err(|message| {
            debug!(%message, "tree did not satisfy decoder");
            Error::Type(message)
        })
    }

    /// Best-effort entry point for arbitrary host values: converts `host`
    /// into a tree via serde and decodes that. Conversion can fail for
    /// values the tree model cannot represent (non-finite floats, non-string
    /// map keys); such failures surface as [`Error::Parse`] rather than
    /// escaping the boundary.
    pub fn decode_serialize<S: Serialize>(&self, host: &S) -> Result<T, Error> {
        let value = serde_json::to_value(host).map_err(|err| {
            debug!(error = %err, "host value is not representable as a tree");
            Error::Parse(err.to_string())
        })?;
        self.decode_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::decoder::{field, integer, string};
    use crate::core::error::Error;
    use serde::Serialize;
    use serde_json::json;

    #[test]
    fn decode_str_wraps_decoder_failure_as_type_error() {
        assert_eq!(integer().decode_str("1"), Ok(1));
        assert_eq!(
            integer().decode_str("1.1"),
            Err(Error::Type("Integer expected, got 1.1".to_string()))
        );
    }

    #[test]
    fn decode_str_maps_malformed_text_to_parse_error() {
        let err = integer().decode_str("invalid json").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn decode_value_skips_the_parse_step() {
        let tree = json!({"name": "ada"});
        assert_eq!(
            field("name", string()).decode_value(&tree),
            Ok("ada".to_string())
        );
        assert_eq!(
            field("age", integer()).decode_value(&tree),
            Err(Error::Type("Object has no attribute age".to_string()))
        );
    }

    #[test]
    fn decode_serialize_round_trips_host_structs() {
        #[derive(Serialize)]
        struct Host {
            count: i64,
        }
        assert_eq!(
            field("count", integer()).decode_serialize(&Host { count: 3 }),
            Ok(3)
        );
    }

    #[test]
    fn decode_serialize_reports_unrepresentable_hosts_as_parse_error() {
        use std::collections::BTreeMap;
        let mut weird: BTreeMap<Vec<u8>, i64> = BTreeMap::new();
        weird.insert(vec![1, 2], 3);
        let err = integer().decode_serialize(&weird).unwrap_err();
        assert!(err.is_parse());
    }
}
