//! Purpose: Range validators for decoded integers and floats.
//! Exports: `min`, `max`, `positive`, `negative` on `Decoder<i64>` and
//! `Decoder<f64>`.
//! Role: Numeric constraints on values the base decoders already accepted.

use crate::core::decoder::Decoder;
use crate::validate::message_or;

impl Decoder<i64> {
    /// Requires the decoded integer to be at least `bound`.
    pub fn min(self, bound: i64, message: Option<String>) -> Decoder<i64> {
        let message = message_or(message, || format!("Value must be at least {bound}"));
        self.check(move |v| *v >= bound, message)
    }

    /// Requires the decoded integer to be at most `bound`.
    pub fn max(self, bound: i64, message: Option<String>) -> Decoder<i64> {
        let message = message_or(message, || format!("Value must be at most {bound}"));
        self.check(move |v| *v <= bound, message)
    }

    /// Requires the decoded integer to be strictly positive.
    pub fn positive(self, message: Option<String>) -> Decoder<i64> {
        let message = message_or(message, || "Value must be positive".to_string());
        self.check(|v| *v > 0, message)
    }

    /// Requires the decoded integer to be strictly negative.
    pub fn negative(self, message: Option<String>) -> Decoder<i64> {
        let message = message_or(message, || "Value must be negative".to_string());
        self.check(|v| *v < 0, message)
    }
}

impl Decoder<f64> {
    /// Requires the decoded float to be at least `bound`.
    pub fn min(self, bound: f64, message: Option<String>) -> Decoder<f64> {
        let message = message_or(message, || format!("Value must be at least {bound}"));
        self.check(move |v| *v >= bound, message)
    }

    /// Requires the decoded float to be at most `bound`.
    pub fn max(self, bound: f64, message: Option<String>) -> Decoder<f64> {
        let message = message_or(message, || format!("Value must be at most {bound}"));
        self.check(move |v| *v <= bound, message)
    }

    /// Requires the decoded float to be strictly positive.
    pub fn positive(self, message: Option<String>) -> Decoder<f64> {
        let message = message_or(message, || "Value must be positive".to_string());
        self.check(|v| *v > 0.0, message)
    }

    /// Requires the decoded float to be strictly negative.
    pub fn negative(self, message: Option<String>) -> Decoder<f64> {
        let message = message_or(message, || "Value must be negative".to_string());
        self.check(|v| *v < 0.0, message)
    }
}
