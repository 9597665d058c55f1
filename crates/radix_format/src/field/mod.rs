//! The four synchronized fields.

use std::fmt;
use std::str::FromStr;

use crate::errors::FormatError;

/// One of the four text fields the converter keeps in sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Field {
    Decimal,
    Hex,
    Binary,
    Ascii,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Decimal, Field::Hex, Field::Binary, Field::Ascii];

    /// Numeric base the field's text is written in. `None` for ASCII.
    pub const fn radix(self) -> Option<u32> {
        match self {
            Field::Decimal => Some(10),
            Field::Hex => Some(16),
            Field::Binary => Some(2),
            Field::Ascii => None,
        }
    }

    /// Inverse of [`Field::radix`].
    pub const fn from_radix(radix: u32) -> Option<Field> {
        match radix {
            10 => Some(Field::Decimal),
            16 => Some(Field::Hex),
            2 => Some(Field::Binary),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Decimal => "decimal",
            Field::Hex => "hex",
            Field::Binary => "binary",
            Field::Ascii => "ascii",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" | "dec" => Ok(Field::Decimal),
            "hex" => Ok(Field::Hex),
            "binary" | "bin" => Ok(Field::Binary),
            "ascii" => Ok(Field::Ascii),
            _ => Err(FormatError::UnknownField(s.to_string())),
        }
    }
}
