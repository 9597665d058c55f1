//! The four-field value record.

use crate::field::Field;

/// Text of all four fields at one moment.
///
/// Built fresh on every input change and never mutated afterwards; the
/// `with_*` helpers return a new instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberValues {
    pub decimal: String,
    pub hex: String,
    pub binary: String,
    pub ascii: String,
}

impl NumberValues {
    pub fn new(
        decimal: impl Into<String>,
        hex: impl Into<String>,
        binary: impl Into<String>,
        ascii: impl Into<String>,
    ) -> Self {
        NumberValues {
            decimal: decimal.into(),
            hex: hex.into(),
            binary: binary.into(),
            ascii: ascii.into(),
        }
    }

    /// All four fields blank.
    pub fn empty() -> Self {
        NumberValues::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Decimal => &self.decimal,
            Field::Hex => &self.hex,
            Field::Binary => &self.binary,
            Field::Ascii => &self.ascii,
        }
    }

    /// Copy of `self` with `field` replaced by `text`.
    #[must_use]
    pub fn with_field(&self, field: Field, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        let text = text.into();
        match field {
            Field::Decimal => next.decimal = text,
            Field::Hex => next.hex = text,
            Field::Binary => next.binary = text,
            Field::Ascii => next.ascii = text,
        }
        next
    }

    /// Only `field` set, the other three blank.
    pub fn only(field: Field, text: impl Into<String>) -> Self {
        NumberValues::empty().with_field(field, text)
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}
