//! Unary NOT.

use crate::operand::{binary_len, byte_aligned, from_bits, low_mask, to_bits};

/// Complement over the operand's byte-aligned width, not the full 64 bits.
///
/// `~0` is `255` and `~255` is `0`; `~256` works on 16 bits. Callers that
/// want a wider complement have to pad the operand themselves. Negative
/// values already span 64 bits and get the native complement.
pub fn evaluate_not(value: i64) -> i64 {
    let width = byte_aligned(binary_len(value));
    from_bits(!to_bits(value) & low_mask(width))
}
