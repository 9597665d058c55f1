//! Cross-field position mapping.
//!
//! Given the hovered field and offset, each target field gets the range
//! that represents the same value (or the same nibble):
//!
//! | Source  | decimal        | hex              | binary            | ascii       |
//! |---------|----------------|------------------|-------------------|-------------|
//! | decimal | hovered group  | aligned group    | aligned group     | whole field |
//! | hex     | aligned group  | hovered digit    | digit's 4 bits    | whole field |
//! | binary  | aligned group  | nibble's digit   | hovered nibble    | whole field |
//! | ascii   | whole field    | whole field      | whole field       | hovered char|
//!
//! "Aligned" means the group with the same ordinal in the target field, and
//! inside a calculated line the operand with the same ordinal; if the
//! target has fewer of either there is no range. A pointer on an operator
//! maps no hex digit or nibble. An ASCII character cannot
//! be mapped back to a sub-range of a multi-value numeric field, so hovering
//! ASCII highlights the numeric fields whole.
//!
//! Every failed lookup produces an empty list for that target only.

use radix_format::{Field, NumberValues, HEX_PREFIX};

use crate::group::{aligned_group, find_number_group_at_position, NumberGroup};
use crate::info::{HighlightInfo, HighlightRange};

/// Bits per hex digit.
const NIBBLE: usize = 4;

/// Length of a leading `0x`/`0X` in a hex group, in characters.
fn hex_prefix_len(group: &NumberGroup<'_>) -> usize {
    let prefix = group.text.get(..HEX_PREFIX.len());
    if prefix.is_some_and(|p| p.eq_ignore_ascii_case(HEX_PREFIX)) {
        HEX_PREFIX.len()
    } else {
        0
    }
}

fn whole_group(group: &NumberGroup<'_>) -> HighlightRange {
    HighlightRange::new(group.start, group.end)
}

/// The group of `text` aligned with `hovered`, highlighted whole.
fn aligned_range(text: &str, hovered: &NumberGroup<'_>) -> Option<HighlightRange> {
    aligned_group(text, hovered).map(|group| whole_group(&group))
}

/// Bits `[nibble * 4, nibble * 4 + 4)` of a binary group, clipped to it.
fn nibble_bits(group: &NumberGroup<'_>, nibble: usize) -> Option<HighlightRange> {
    let first_bit = nibble * NIBBLE;
    (first_bit < group.len()).then(|| {
        let last_bit = (first_bit + NIBBLE).min(group.len());
        HighlightRange::new(group.start + first_bit, group.start + last_bit)
    })
}

/// Hex digit number `nibble` of a hex group, after any prefix.
fn hex_digit(group: &NumberGroup<'_>, nibble: usize) -> Option<HighlightRange> {
    let prefix = hex_prefix_len(group);
    let digits = group.len().saturating_sub(prefix);
    (nibble < digits).then(|| {
        let at = group.start + prefix + nibble;
        HighlightRange::new(at, at + 1)
    })
}

fn from_ascii(values: &NumberValues, position: usize, target: Field) -> Option<HighlightRange> {
    match target {
        Field::Ascii => (position < values.ascii.chars().count())
            .then(|| HighlightRange::new(position, position + 1)),
        _ => HighlightRange::whole(values.get(target)),
    }
}

fn from_decimal(values: &NumberValues, position: usize, target: Field) -> Option<HighlightRange> {
    let group = find_number_group_at_position(&values.decimal, position)?;
    match target {
        Field::Decimal => Some(whole_group(&group)),
        Field::Hex | Field::Binary => aligned_range(values.get(target), &group),
        Field::Ascii => HighlightRange::whole(&values.ascii),
    }
}

fn from_hex(values: &NumberValues, position: usize, target: Field) -> Option<HighlightRange> {
    let group = find_number_group_at_position(&values.hex, position)?;
    if group.is_whole_expression() {
        return None;
    }
    let prefix = hex_prefix_len(&group);
    let offset = position - group.start;
    if offset < prefix {
        return None;
    }
    let digit_index = offset - prefix;

    match target {
        Field::Hex => Some(HighlightRange::new(position, position + 1)),
        Field::Binary => {
            let binary = aligned_group(&values.binary, &group)?;
            nibble_bits(&binary, digit_index)
        }
        Field::Decimal => aligned_range(&values.decimal, &group),
        Field::Ascii => HighlightRange::whole(&values.ascii),
    }
}

fn from_binary(values: &NumberValues, position: usize, target: Field) -> Option<HighlightRange> {
    let group = find_number_group_at_position(&values.binary, position)?;
    if group.is_whole_expression() {
        return None;
    }
    let nibble = (position - group.start) / NIBBLE;

    match target {
        Field::Binary => nibble_bits(&group, nibble),
        Field::Hex => {
            let hex = aligned_group(&values.hex, &group)?;
            hex_digit(&hex, nibble)
        }
        Field::Decimal => aligned_range(&values.decimal, &group),
        Field::Ascii => HighlightRange::whole(&values.ascii),
    }
}

/// Highlight ranges for `target` while `highlight` is hovered.
///
/// No hover means no highlights.
#[tracing::instrument(level = "trace", skip(values), ret)]
pub fn get_highlights(
    values: &NumberValues,
    highlight: Option<&HighlightInfo>,
    target: Field,
) -> Vec<HighlightRange> {
    let Some(&HighlightInfo { source, position }) = highlight else {
        return Vec::new();
    };

    let range = match source {
        Field::Ascii => from_ascii(values, position, target),
        Field::Decimal => from_decimal(values, position, target),
        Field::Hex => from_hex(values, position, target),
        Field::Binary => from_binary(values, position, target),
    };

    range.into_iter().collect()
}
