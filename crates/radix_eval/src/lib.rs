//! Radix Eval - arithmetic/bitwise expressions typed into a converter field.
//!
//! The evaluator is a single left-to-right pass over a flat token stream.
//! There is no precedence and no parentheses; the grammar stays small
//! enough that a typed-as-you-go expression like `0x1F & F0` can be
//! evaluated on every keystroke.
//!
//! # Architecture
//!
//! - `token`: splits text into operands and single-character operators
//! - `expression`: recognizes the three accepted shapes and reduces them
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `evaluate_not`: byte-aligned complement
//!
//! # Contract
//!
//! [`evaluate`] never panics and never reports an error to its caller: any
//! rejected input, invalid operand, division by zero or overflow yields
//! `None`. [`try_evaluate`] exposes the [`EvalError`] for diagnostics.

pub mod errors;
mod expression;
mod operand;
mod operators;
mod token;
mod unary_operators;

pub use errors::{EvalError, EvalResult};
pub use expression::{
    evaluate, is_complete_expression, parse_expression, try_evaluate, Expression, Operand,
};
pub use operators::evaluate_binary;
pub use token::{has_operator, tokenize, BinaryOp, Token, OPERATOR_CHARS};
pub use unary_operators::evaluate_not;

#[cfg(test)]
mod tests;
