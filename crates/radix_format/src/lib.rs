//! Radix Format - canonical text forms of a single integer.
//!
//! Converts an `i64` to the four representations the converter keeps in
//! sync (decimal, hex, binary, ASCII) and parses the numeric ones back.
//!
//! # Conventions
//!
//! - Hex is `0x` + uppercase digits, left-padded to an even digit count
//!   (minimum two).
//! - Binary is left-padded to the next multiple of 8 bits.
//! - Negative values render as 64-bit two's complement in hex and binary,
//!   and the hex/binary parsers read a full 64-bit pattern back as the same
//!   negative value, so every `i64` round-trips.
//! - ASCII is the character whose code point is the value; values that are
//!   not Unicode scalar values have no ASCII rendering (empty field).
//!
//! # Multi-value fields
//!
//! [`convert_field`] is the single handler behind every input field: it
//! splits space-separated input, parses each part in the field's base and
//! renders the other three fields.

mod errors;
mod field;
mod multi;
mod parse;
mod render;
mod values;

pub use errors::{FormatError, FormatResult};
pub use field::Field;
pub use multi::{convert_field, format_calculation_result};
pub use parse::{
    parse_binary, parse_decimal, parse_hex, parse_in, try_parse_binary, try_parse_decimal,
    try_parse_hex, try_parse_in,
};
pub use render::{
    convert, format_ascii, format_binary, format_decimal, format_hex, pad_binary, pad_hex,
    padded_bit_width, HEX_PREFIX,
};
pub use values::NumberValues;
