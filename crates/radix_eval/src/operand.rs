//! Operand text to integer, and the byte-aligned width helpers the
//! bitwise operators share.

use crate::errors::{integer_overflow, invalid_operand, EvalError, EvalResult};

pub(crate) fn check_radix(radix: u32) -> EvalResult<u32> {
    match radix {
        2 | 10 | 16 => Ok(radix),
        _ => Err(EvalError::UnsupportedRadix(radix)),
    }
}

/// Digits of an operand with the optional hex prefix removed.
fn digits(text: &str, radix: u32) -> &str {
    if radix == 16 {
        text.strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text)
    } else {
        text
    }
}

/// Whether `text` is an unsigned operand written in `radix`.
///
/// `radix` must already have passed [`check_radix`].
pub(crate) fn is_operand_text(text: &str, radix: u32) -> bool {
    let digits = digits(text.trim(), radix);
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

/// Parse one operand.
///
/// Operands carry no sign; a leading `-` is handled by the reducer. Hex and
/// binary operands are 64-bit patterns, so `FFFFFFFFFFFFFFFF` is `-1`;
/// decimal operands must fit in `i64`.
pub(crate) fn parse_operand(text: &str, radix: u32) -> EvalResult {
    let trimmed = text.trim();
    if !is_operand_text(trimmed, radix) {
        return Err(invalid_operand(trimmed, radix));
    }
    let bits = u64::from_str_radix(digits(trimmed, radix), radix)
        .map_err(|_| integer_overflow("operand"))?;
    if radix == 10 {
        i64::try_from(bits).map_err(|_| integer_overflow("operand"))
    } else {
        Ok(from_bits(bits))
    }
}

#[allow(
    clippy::cast_possible_wrap,
    reason = "hex and binary operands are raw two's complement patterns"
)]
#[inline]
pub(crate) fn from_bits(bits: u64) -> i64 {
    bits as i64
}

#[allow(
    clippy::cast_sign_loss,
    reason = "negative values are handled as their two's complement pattern"
)]
#[inline]
pub(crate) fn to_bits(value: i64) -> u64 {
    value as u64
}

/// Length of the plain binary rendering of `value`: at least one digit,
/// and all 64 for negative values.
pub(crate) fn binary_len(value: i64) -> u32 {
    u64::BITS
        .saturating_sub(to_bits(value).leading_zeros())
        .max(1)
}

/// Round a bit count up to whole bytes.
pub(crate) fn byte_aligned(bits: u32) -> u32 {
    bits.div_ceil(8).saturating_mul(8)
}

/// All-ones mask covering the low `width` bits.
pub(crate) fn low_mask(width: u32) -> u64 {
    1u64.checked_shl(width).map_or(u64::MAX, |v| v.wrapping_sub(1))
}
