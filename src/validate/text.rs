//! Purpose: Length and pattern validators for decoded strings.
//! Exports: `not_empty`, `length`, `min_length`, `max_length`, `matches`,
//! `email` on `Decoder<String>`.
//! Role: String constraints; lengths count characters, not bytes.

use crate::core::decoder::Decoder;
use crate::validate::message_or;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
    })
}

impl Decoder<String> {
    /// Requires a non-empty string.
    pub fn not_empty(self, message: Option<String>) -> Decoder<String> {
        let message = message_or(message, || "String must not be empty".to_string());
        self.check(|v| !v.is_empty(), message)
    }

    /// Requires exactly `n` characters.
    pub fn length(self, n: usize, message: Option<String>) -> Decoder<String> {
        let message = message_or(message, || {
            format!("String must be exactly {n} characters long")
        });
        self.check(move |v| v.chars().count() == n, message)
    }

    /// Requires at least `n` characters.
    pub fn min_length(self, n: usize, message: Option<String>) -> Decoder<String> {
        let message = message_or(message, || {
            format!("String must be at least {n} characters long")
        });
        self.check(move |v| v.chars().count() >= n, message)
    }

    /// Requires at most `n` characters.
    pub fn max_length(self, n: usize, message: Option<String>) -> Decoder<String> {
        let message = message_or(message, || {
            format!("String must be at most {n} characters long")
        });
        self.check(move |v| v.chars().count() <= n, message)
    }

    /// Requires the string to match `pattern`.
    pub fn matches(self, pattern: Regex, message: Option<String>) -> Decoder<String> {
        let message = message_or(message, || {
            "String does not match the expected pattern".to_string()
        });
        self.check(move |v| pattern.is_match(v), message)
    }

    /// Requires a plausible email address shape: one `@`, no whitespace, a
    /// dotted domain. Not a full RFC 5322 check.
    pub fn email(self, message: Option<String>) -> Decoder<String> {
        let message = message_or(message, || "Not a valid email".to_string());
        self.check(|v| email_pattern().is_match(v), message)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::decoder::string;
    use regex::Regex;
    use serde_json::json;

    #[test]
    fn not_empty_rejects_empty_string() {
        assert_eq!(
            string().not_empty(None).decode(&json!("")),
            Err("String must not be empty".to_string())
        );
        assert_eq!(
            string().not_empty(None).decode(&json!("x")),
            Ok("x".to_string())
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // Four characters, twelve bytes.
        let input = json!("çàéè");
        assert_eq!(
            string().length(4, None).decode(&input),
            Ok("çàéè".to_string())
        );
        assert_eq!(
            string().max_length(3, None).decode(&input),
            Err("String must be at most 3 characters long".to_string())
        );
        assert_eq!(
            string().min_length(5, None).decode(&input),
            Err("String must be at least 5 characters long".to_string())
        );
    }

    #[test]
    fn matches_applies_caller_pattern_and_message() {
        let hex = Regex::new(r"^[0-9a-f]+$").expect("pattern");
        assert_eq!(
            string()
                .matches(hex.clone(), None)
                .decode(&json!("deadbeef")),
            Ok("deadbeef".to_string())
        );
        assert_eq!(
            string()
                .matches(hex, Some("not hex".to_string()))
                .decode(&json!("xyz")),
            Err("not hex".to_string())
        );
    }

    #[test]
    fn email_accepts_plausible_addresses_only() {
        assert_eq!(
            string().email(None).decode(&json!("ada@example.com")),
            Ok("ada@example.com".to_string())
        );
        for bad in ["not-an-email", "a b@example.com", "a@b", "@example.com"] {
            assert_eq!(
                string().email(None).decode(&json!(bad)),
                Err("Not a valid email".to_string()),
                "should reject {bad}"
            );
        }
    }
}
