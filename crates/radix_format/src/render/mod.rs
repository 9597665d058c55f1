//! Integer to text.
//!
//! Negative values render as 64-bit two's complement: Rust's `{:X}` and
//! `{:b}` already format signed integers that way, so `-1` becomes
//! `0xFFFFFFFFFFFFFFFF` and 64 one-bits.

use crate::values::NumberValues;

/// Prefix every rendered hex value carries.
pub const HEX_PREFIX: &str = "0x";

/// Smallest multiple of 8 that can hold `bits` binary digits.
///
/// A zero-digit string still occupies one byte.
#[inline]
pub const fn padded_bit_width(bits: usize) -> usize {
    if bits == 0 {
        8
    } else {
        bits.div_ceil(8) * 8
    }
}

/// Normalize a hex digit string: drop a `0x`/`0X` prefix, uppercase, pad to
/// an even digit count of at least two, and prepend `0x`.
pub fn pad_hex(digits: &str) -> String {
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits)
        .to_ascii_uppercase();

    let mut out = String::with_capacity(HEX_PREFIX.len() + digits.len() + 2);
    out.push_str(HEX_PREFIX);
    if digits.is_empty() {
        out.push_str("00");
    } else {
        if digits.len() % 2 == 1 {
            out.push('0');
        }
        out.push_str(&digits);
    }
    out
}

/// Left-pad a binary digit string to the next multiple of 8.
pub fn pad_binary(bits: &str) -> String {
    format!("{bits:0>width$}", width = padded_bit_width(bits.len()))
}

pub fn format_decimal(n: i64) -> String {
    n.to_string()
}

/// `0x` + even-length uppercase hex, minimum two digits.
pub fn format_hex(n: i64) -> String {
    pad_hex(&format!("{n:X}"))
}

/// Binary digits padded to a whole number of bytes.
pub fn format_binary(n: i64) -> String {
    pad_binary(&format!("{n:b}"))
}

/// The character whose code point is `n`, if there is one.
pub fn format_ascii(n: i64) -> Option<char> {
    u32::try_from(n).ok().and_then(char::from_u32)
}

/// Render `n` into all four fields.
///
/// A value with no character rendering leaves `ascii` empty; the numeric
/// fields are always filled.
pub fn convert(n: i64) -> NumberValues {
    NumberValues {
        decimal: format_decimal(n),
        hex: format_hex(n),
        binary: format_binary(n),
        ascii: format_ascii(n).map(String::from).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests;
