//! Tests for the byte-aligned complement.

use crate::unary_operators::evaluate_not;

#[test]
fn zero_complements_to_one_byte_of_ones() {
    assert_eq!(evaluate_not(0), 255);
}

#[test]
fn width_follows_operand_length() {
    assert_eq!(evaluate_not(5), 0b1111_1010);
    assert_eq!(evaluate_not(255), 0);
    assert_eq!(evaluate_not(256), 0xFEFF);
}

#[test]
fn negative_operands_use_native_complement() {
    assert_eq!(evaluate_not(-1), 0);
    assert_eq!(evaluate_not(i64::MIN), i64::MAX);
}
