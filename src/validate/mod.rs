//! Purpose: Validator extensions layered on the decoder core.
//! Exports: range/length/pattern methods on decoded numbers, strings, and
//! sequences, plus the `iso_date` decoder.
//! Role: Convenience layer; everything here is a thin call-site of
//! `Decoder::check`, which is itself flatMap into succeed-or-fail.
//! Invariants: Every validator's default message is overridable by the caller.
//! Invariants: Validators never touch the raw tree; they constrain the value
//! an underlying decoder already produced.

mod date;
mod number;
mod seq;
mod text;

pub use date::iso_date;

pub(crate) fn message_or(message: Option<String>, default: impl FnOnce() -> String) -> String {
    message.unwrap_or_else(default)
}
