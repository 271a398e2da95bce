//! Purpose: Model the two-tier error surface exposed by the runner.
//! Exports: `Error`.
//! Role: The only error type callers of the entry points ever see.
//! Invariants: `Parse` means the input text was not valid JSON at all;
//! `Type` means the tree was well-formed but did not satisfy the decoder.
//! Invariants: Inner decoder failure strings are always wrapped as `Type`.

use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input could not be turned into a tree value. Carries the parser's
    /// own diagnostic text.
    Parse(String),
    /// The tree parsed fine but the decoder rejected its shape or content.
    Type(String),
}

impl Error {
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Error::Type(_))
    }

    /// The underlying diagnostic message, whichever tier produced it.
    pub fn message(&self) -> &str {
        match self {
            Error::Parse(message) | Error::Type(message) => message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(message) => write!(f, "ParseError: {message}"),
            Error::Type(message) => write!(f, "TypeError: {message}"),
        }
    }
}

impl StdError for Error {}
