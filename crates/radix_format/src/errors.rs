//! Errors produced while parsing field text.

use thiserror::Error;

/// Why a piece of field text could not be turned into an integer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("empty input")]
    Empty,

    #[error("`{text}` is not a valid base-{radix} number")]
    InvalidDigits { text: String, radix: u32 },

    #[error("`{text}` does not fit in 64 bits")]
    OutOfRange { text: String },

    #[error("unknown field `{0}` (expected decimal, hex, binary or ascii)")]
    UnknownField(String),

    #[error("the {0} field has no numeric base")]
    NotNumeric(&'static str),
}

pub type FormatResult<T> = Result<T, FormatError>;
