//! Text to integer.
//!
//! The `try_*` functions report why parsing failed. The plain variants are
//! the sentinel form the UI layer consumes: `None` means "invalid" and is
//! never coerced to zero.

use std::num::IntErrorKind;

use crate::errors::{FormatError, FormatResult};
use crate::field::Field;

/// Map a std parse error onto [`FormatError`], keeping the offending text.
fn classify(kind: &IntErrorKind, text: &str, radix: u32) -> FormatError {
    match kind {
        IntErrorKind::Empty => FormatError::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FormatError::OutOfRange {
            text: text.to_string(),
        },
        _ => FormatError::InvalidDigits {
            text: text.to_string(),
            radix,
        },
    }
}

/// Reinterpret a 64-bit pattern as a signed value.
#[allow(
    clippy::cast_possible_wrap,
    reason = "hex and binary text is read as a raw two's complement bit pattern"
)]
#[inline]
fn from_bit_pattern(bits: u64) -> i64 {
    bits as i64
}

/// Parse unsigned digits of `radix` as a 64-bit pattern.
///
/// Sign characters are rejected here; std's parser would otherwise accept
/// a leading `+`.
fn parse_bit_pattern(digits: &str, original: &str, radix: u32) -> FormatResult<i64> {
    if digits.is_empty() {
        return Err(FormatError::Empty);
    }
    if digits.starts_with(['+', '-']) {
        return Err(FormatError::InvalidDigits {
            text: original.to_string(),
            radix,
        });
    }
    u64::from_str_radix(digits, radix)
        .map(from_bit_pattern)
        .map_err(|e| classify(e.kind(), original, radix))
}

pub fn try_parse_decimal(text: &str) -> FormatResult<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|e| classify(e.kind(), trimmed, 10))
}

/// Hex digits with or without a `0x`/`0X` prefix, any letter case.
pub fn try_parse_hex(text: &str) -> FormatResult<i64> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    parse_bit_pattern(digits, trimmed, 16)
}

pub fn try_parse_binary(text: &str) -> FormatResult<i64> {
    let trimmed = text.trim();
    parse_bit_pattern(trimmed, trimmed, 2)
}

/// Parse `text` in the base of `field`.
pub fn try_parse_in(field: Field, text: &str) -> FormatResult<i64> {
    match field {
        Field::Decimal => try_parse_decimal(text),
        Field::Hex => try_parse_hex(text),
        Field::Binary => try_parse_binary(text),
        Field::Ascii => Err(FormatError::NotNumeric(field.name())),
    }
}

fn sentinel(field: Field, result: FormatResult<i64>) -> Option<i64> {
    result
        .map_err(|error| tracing::trace!(%field, %error, "rejected field text"))
        .ok()
}

pub fn parse_decimal(text: &str) -> Option<i64> {
    sentinel(Field::Decimal, try_parse_decimal(text))
}

pub fn parse_hex(text: &str) -> Option<i64> {
    sentinel(Field::Hex, try_parse_hex(text))
}

pub fn parse_binary(text: &str) -> Option<i64> {
    sentinel(Field::Binary, try_parse_binary(text))
}

pub fn parse_in(field: Field, text: &str) -> Option<i64> {
    sentinel(field, try_parse_in(field, text))
}
