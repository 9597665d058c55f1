//! Space-separated multi-value fields.
//!
//! Every input field goes through [`convert_field`]; there is no per-field
//! handler. The source field always keeps the user's raw text.

use crate::field::Field;
use crate::parse::parse_in;
use crate::render::convert;
use crate::values::NumberValues;

/// Separator between values in the numeric fields.
const GROUP_SEPARATOR: &str = " ";

fn joined<'a>(items: impl Iterator<Item = &'a str>, sep: &str) -> String {
    items.collect::<Vec<_>>().join(sep)
}

/// Join per-value renderings into one `NumberValues`.
///
/// Numeric fields are space separated; ASCII characters are concatenated.
fn join(conversions: &[NumberValues]) -> NumberValues {
    NumberValues {
        decimal: joined(conversions.iter().map(|v| v.decimal.as_str()), GROUP_SEPARATOR),
        hex: joined(conversions.iter().map(|v| v.hex.as_str()), GROUP_SEPARATOR),
        binary: joined(conversions.iter().map(|v| v.binary.as_str()), GROUP_SEPARATOR),
        ascii: joined(conversions.iter().map(|v| v.ascii.as_str()), ""),
    }
}

/// Convert the raw text of one field into all four fields.
///
/// Returns `None` when the text holds at least one part but none of them
/// parse; the caller should keep its previous values for the other fields.
#[tracing::instrument(level = "trace")]
pub fn convert_field(field: Field, text: &str) -> Option<NumberValues> {
    if text.trim().is_empty() {
        return Some(NumberValues::only(field, text));
    }

    let conversions: Vec<NumberValues> = match field {
        Field::Ascii => text
            .chars()
            .map(|c| convert(i64::from(u32::from(c))))
            .collect(),
        _ => text
            .split(' ')
            .filter(|part| !part.trim().is_empty())
            .filter_map(|part| parse_in(field, part))
            .map(convert)
            .collect(),
    };

    if conversions.is_empty() {
        tracing::debug!(%field, "no part of the input parsed");
        return None;
    }

    Some(join(&conversions).with_field(field, text))
}

/// Append `=<result>` to each numeric field of `input`.
///
/// Trailing whitespace of the input is dropped first. The ASCII field shows
/// only the result.
pub fn format_calculation_result(input: &NumberValues, result: &NumberValues) -> NumberValues {
    NumberValues {
        decimal: format!("{}={}", input.decimal.trim_end(), result.decimal),
        hex: format!("{}={}", input.hex.trim_end(), result.hex),
        binary: format!("{}={}", input.binary.trim_end(), result.binary),
        ascii: result.ascii.clone(),
    }
}
