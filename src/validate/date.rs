//! Purpose: ISO-8601 date decoding on top of the string primitive.
//! Exports: `iso_date`.
//! Role: Composes `string` with an RFC3339 parse attempt.
//! Invariants: Every parse failure collapses to the single documented
//! message; no parser error ever propagates to the caller.

use crate::core::decoder::{Decoder, fail, string, succeed};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Decodes an RFC3339/ISO-8601 timestamp string into an [`OffsetDateTime`].
///
/// Accepts offsets other than `Z`; the decoded value retains the parsed
/// offset. Anything the parser rejects fails with `"Not a valid ISO date"`.
pub fn iso_date() -> Decoder<OffsetDateTime> {
    string().and_then(|raw| match OffsetDateTime::parse(&raw, &Rfc3339) {
        Ok(parsed) => succeed(parsed),
        Err(_) => fail("Not a valid ISO date"),
    })
}

#[cfg(test)]
mod tests {
    use super::iso_date;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn parses_millisecond_utc_timestamps() {
        let decoded = iso_date().decode(&json!("2023-04-05T06:07:08.123Z"));
        assert_eq!(decoded, Ok(datetime!(2023-04-05 06:07:08.123 UTC)));
    }

    #[test]
    fn parses_whole_second_timestamps() {
        let decoded = iso_date().decode(&json!("2023-04-05T06:07:08Z"));
        assert_eq!(decoded, Ok(datetime!(2023-04-05 06:07:08 UTC)));
    }

    #[test]
    fn any_parse_failure_uses_the_single_message() {
        for bad in ["not a date", "2023-13-01T00:00:00Z", "2023-04-05", ""] {
            assert_eq!(
                iso_date().decode(&json!(bad)),
                Err("Not a valid ISO date".to_string()),
                "should reject {bad:?}"
            );
        }
    }

    #[test]
    fn non_string_input_reports_the_string_primitive_failure() {
        assert_eq!(
            iso_date().decode(&json!(20230405)),
            Err("String expected, got 20230405".to_string())
        );
    }
}
