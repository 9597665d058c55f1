use super::*;
use pretty_assertions::assert_eq;

// === Hex ===

#[test]
fn hex_pads_odd_digit_counts() {
    assert_eq!(format_hex(0), "0x00");
    assert_eq!(format_hex(10), "0x0A");
    assert_eq!(format_hex(255), "0xFF");
    assert_eq!(format_hex(256), "0x0100");
    assert_eq!(format_hex(0xABCDE), "0x0ABCDE");
}

#[test]
fn pad_hex_strips_prefix_and_uppercases() {
    assert_eq!(pad_hex("0xa"), "0x0A");
    assert_eq!(pad_hex("0Xbeef"), "0xBEEF");
    assert_eq!(pad_hex(""), "0x00");
    assert_eq!(pad_hex("0x"), "0x00");
}

#[test]
fn negative_hex_is_64_bit_twos_complement() {
    assert_eq!(format_hex(-1), "0xFFFFFFFFFFFFFFFF");
    assert_eq!(format_hex(i64::MIN), "0x8000000000000000");
}

// === Binary ===

#[test]
fn binary_pads_to_whole_bytes() {
    assert_eq!(format_binary(0), "00000000");
    assert_eq!(format_binary(5), "00000101");
    assert_eq!(format_binary(255), "11111111");
    assert_eq!(format_binary(256), "0000000100000000");
}

#[test]
fn padded_width_rounds_up() {
    assert_eq!(padded_bit_width(0), 8);
    assert_eq!(padded_bit_width(1), 8);
    assert_eq!(padded_bit_width(8), 8);
    assert_eq!(padded_bit_width(9), 16);
    assert_eq!(padded_bit_width(64), 64);
}

#[test]
fn negative_binary_is_64_bits() {
    assert_eq!(format_binary(-1), "1".repeat(64));
}

// === ASCII ===

#[test]
fn ascii_maps_code_points() {
    assert_eq!(format_ascii(65), Some('A'));
    assert_eq!(format_ascii(0x1F600), Some('\u{1F600}'));
}

#[test]
fn ascii_rejects_non_scalar_values() {
    assert_eq!(format_ascii(-1), None);
    assert_eq!(format_ascii(0xD800), None);
    assert_eq!(format_ascii(0x11_0000), None);
}

// === convert ===

#[test]
fn convert_fills_all_fields() {
    assert_eq!(convert(65), NumberValues::new("65", "0x41", "01000001", "A"));
}

#[test]
fn convert_leaves_ascii_blank_without_a_character() {
    let values = convert(-2);
    assert_eq!(values.decimal, "-2");
    assert_eq!(values.ascii, "");
}

// === Property tests ===

mod proptest_padding {
    use super::super::{format_binary, format_hex, HEX_PREFIX};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn hex_digit_count_is_even_and_at_least_two(n in any::<i64>()) {
            let hex = format_hex(n);
            prop_assert!(hex.starts_with(HEX_PREFIX));
            let digits = hex.len() - HEX_PREFIX.len();
            prop_assert!(digits >= 2);
            prop_assert_eq!(digits % 2, 0);
        }

        #[test]
        fn binary_length_is_a_multiple_of_eight(n in any::<i64>()) {
            let bin = format_binary(n);
            prop_assert!(!bin.is_empty());
            prop_assert_eq!(bin.len() % 8, 0);
        }
    }
}
