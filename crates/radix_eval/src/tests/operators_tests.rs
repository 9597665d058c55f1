//! Tests for binary operator implementations.

use crate::errors::EvalError;
use crate::operators::evaluate_binary;
use crate::token::BinaryOp;

#[test]
fn test_int_operations() {
    assert_eq!(evaluate_binary(2, 3, BinaryOp::Add), Ok(5));
    assert_eq!(evaluate_binary(5, 3, BinaryOp::Sub), Ok(2));
    assert_eq!(evaluate_binary(2, 3, BinaryOp::Mul), Ok(6));
    assert_eq!(evaluate_binary(7, 2, BinaryOp::Div), Ok(3));
    assert_eq!(evaluate_binary(7, 2, BinaryOp::Mod), Ok(1));
}

#[test]
fn test_division_floors() {
    assert_eq!(evaluate_binary(-7, 2, BinaryOp::Div), Ok(-4));
    assert_eq!(evaluate_binary(7, -2, BinaryOp::Div), Ok(-4));
    assert_eq!(evaluate_binary(-7, -2, BinaryOp::Div), Ok(3));
    assert_eq!(evaluate_binary(-8, 2, BinaryOp::Div), Ok(-4));
}

#[test]
fn test_modulo_takes_dividend_sign() {
    assert_eq!(evaluate_binary(-7, 2, BinaryOp::Mod), Ok(-1));
    assert_eq!(evaluate_binary(7, -2, BinaryOp::Mod), Ok(1));
    assert_eq!(evaluate_binary(-7, -2, BinaryOp::Mod), Ok(-1));
    assert_eq!(evaluate_binary(-8, 2, BinaryOp::Mod), Ok(0));
}

#[test]
fn test_modulo_overflow() {
    assert_eq!(
        evaluate_binary(i64::MIN, -1, BinaryOp::Mod),
        Err(EvalError::Overflow("remainder"))
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        evaluate_binary(1, 0, BinaryOp::Div),
        Err(EvalError::DivisionByZero)
    );
    assert_eq!(
        evaluate_binary(1, 0, BinaryOp::Mod),
        Err(EvalError::ModuloByZero)
    );
}

#[test]
fn test_overflow_is_an_error() {
    assert_eq!(
        evaluate_binary(i64::MAX, 1, BinaryOp::Add),
        Err(EvalError::Overflow("addition"))
    );
    assert_eq!(
        evaluate_binary(i64::MIN, -1, BinaryOp::Div),
        Err(EvalError::Overflow("division"))
    );
}

#[test]
fn test_bitwise_on_byte_aligned_operands() {
    assert_eq!(evaluate_binary(5, 3, BinaryOp::BitAnd), Ok(1));
    assert_eq!(evaluate_binary(3, 5, BinaryOp::BitAnd), Ok(1));
    assert_eq!(evaluate_binary(255, 1, BinaryOp::BitAnd), Ok(1));
    assert_eq!(evaluate_binary(0x0F, 0xF0, BinaryOp::BitOr), Ok(0xFF));
    assert_eq!(evaluate_binary(0x1FF, 0x0F, BinaryOp::BitXor), Ok(0x1F0));
}

#[test]
fn test_bitwise_negative_operands_use_full_width() {
    assert_eq!(evaluate_binary(-1, 0xFF, BinaryOp::BitAnd), Ok(0xFF));
    assert_eq!(evaluate_binary(-1, 1, BinaryOp::BitXor), Ok(-2));
}

#[test]
fn test_shifts() {
    assert_eq!(evaluate_binary(1, 4, BinaryOp::Shl), Ok(16));
    assert_eq!(evaluate_binary(256, 4, BinaryOp::Shr), Ok(16));
    assert_eq!(evaluate_binary(-16, 2, BinaryOp::Shr), Ok(-4));
}

#[test]
fn test_shift_amount_out_of_range() {
    assert_eq!(
        evaluate_binary(1, 64, BinaryOp::Shl),
        Err(EvalError::ShiftOutOfRange(64))
    );
    assert_eq!(
        evaluate_binary(1, -1, BinaryOp::Shr),
        Err(EvalError::ShiftOutOfRange(-1))
    );
}
