//! Evaluator tests, one file per implementation module.

mod operators_tests;
mod unary_operators_tests;
