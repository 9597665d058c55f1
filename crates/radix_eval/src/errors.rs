//! Centralized error type and constructors for the evaluator.
//!
//! Every failure is recovered inside the crate: [`crate::evaluate`] turns
//! any `EvalError` into `None`. The error values exist so the driver and
//! the logs can say *why* an expression was rejected.

use thiserror::Error;

use crate::token::BinaryOp;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("no operator in expression")]
    NoOperator,

    #[error("base {0} is not supported (expected 2, 10 or 16)")]
    UnsupportedRadix(u32),

    #[error("`{text}` is not a base-{radix} operand")]
    InvalidOperand { text: String, radix: u32 },

    #[error("operator `{0}` has no right-hand operand")]
    MissingOperand(BinaryOp),

    #[error("unexpected operator `{0}`")]
    UnexpectedOperator(BinaryOp),

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("integer overflow in {0}")]
    Overflow(&'static str),

    #[error("shift amount {0} out of range (0-63)")]
    ShiftOutOfRange(i64),
}

pub type EvalResult<T = i64> = Result<T, EvalError>;

#[cold]
pub fn invalid_operand(text: &str, radix: u32) -> EvalError {
    EvalError::InvalidOperand {
        text: text.to_string(),
        radix,
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::ModuloByZero
}

#[cold]
pub fn integer_overflow(op_name: &'static str) -> EvalError {
    EvalError::Overflow(op_name)
}

#[cold]
pub fn shift_out_of_range(amount: i64) -> EvalError {
    EvalError::ShiftOutOfRange(amount)
}
