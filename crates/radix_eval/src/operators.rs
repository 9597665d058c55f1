//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operator set is fixed, so a `match` keeps
//! every case visible and exhaustive.

use crate::errors::{
    division_by_zero, integer_overflow, modulo_by_zero, shift_out_of_range, EvalResult,
};
use crate::operand::{binary_len, byte_aligned, from_bits, low_mask, to_bits};
use crate::token::BinaryOp;

/// Checked arithmetic where the only error case is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.ok_or_else(|| integer_overflow(op_name))
}

/// Floor division: rounds toward negative infinity, so `-7 / 2 == -4`.
fn floor_div(a: i64, b: i64) -> EvalResult {
    if b == 0 {
        return Err(division_by_zero());
    }
    let quotient = checked_arith(a.checked_div(b), "division")?;
    let remainder = checked_arith(a.checked_rem(b), "division")?;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        checked_arith(quotient.checked_sub(1), "division")
    } else {
        Ok(quotient)
    }
}

/// Native remainder: takes the sign of the dividend, so `-7 % 2 == -1`.
fn remainder(a: i64, b: i64) -> EvalResult {
    if b == 0 {
        return Err(modulo_by_zero());
    }
    checked_arith(a.checked_rem(b), "remainder")
}

/// Bitwise operation over equal, byte-aligned widths.
///
/// Both operands are taken at the width of the longer binary rendering,
/// rounded up to whole bytes, and the result is cut to that width. `5 & 3`
/// and `3 & 5` therefore agree regardless of operand order.
fn bitwise(a: i64, b: i64, op: BinaryOp) -> i64 {
    let width = byte_aligned(binary_len(a).max(binary_len(b)));
    let (lhs, rhs) = (to_bits(a), to_bits(b));
    let bits = match op {
        BinaryOp::BitAnd => lhs & rhs,
        BinaryOp::BitOr => lhs | rhs,
        _ => lhs ^ rhs,
    };
    from_bits(bits & low_mask(width))
}

fn shift_amount(amount: i64) -> EvalResult<u32> {
    u32::try_from(amount)
        .ok()
        .filter(|&n| n < u64::BITS)
        .ok_or_else(|| shift_out_of_range(amount))
}

/// Apply `op` to the accumulator and the next operand.
pub fn evaluate_binary(left: i64, right: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(left.checked_add(right), "addition"),
        BinaryOp::Sub => checked_arith(left.checked_sub(right), "subtraction"),
        BinaryOp::Mul => checked_arith(left.checked_mul(right), "multiplication"),
        BinaryOp::Div => floor_div(left, right),
        BinaryOp::Mod => remainder(left, right),
        BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor => Ok(bitwise(left, right, op)),
        // Bits shifted past the top are dropped, as native `<<` does.
        BinaryOp::Shl => Ok(left.wrapping_shl(shift_amount(right)?)),
        BinaryOp::Shr => Ok(left >> shift_amount(right)?),
    }
}
