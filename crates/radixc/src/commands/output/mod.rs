//! Rendering session state for the terminal or as JSON.

use std::io::Write;

use radix_format::{Field, NumberValues};
use radix_highlight::HighlightRange;
use serde::Serialize;

use super::{CliError, OutputFormat};

/// Width of the `field:` column in text output.
const LABEL_WIDTH: usize = 9;

#[derive(Serialize)]
struct FieldHighlights<'a> {
    field: Field,
    text: &'a str,
    ranges: &'a [HighlightRange],
}

fn label(field: Field) -> String {
    format!("{}:", field.name())
}

pub(super) fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub(super) fn write_values(
    out: &mut impl Write,
    values: &NumberValues,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(out, values),
        OutputFormat::Text => {
            for field in Field::ALL {
                writeln!(out, "{:<LABEL_WIDTH$}{}", label(field), values.get(field))?;
            }
            Ok(())
        }
    }
}

/// Carets under the highlighted characters of one field.
fn marker_line(ranges: &[HighlightRange]) -> String {
    let mut line = String::new();
    for range in ranges {
        let column = line.chars().count();
        line.push_str(&" ".repeat(range.start.saturating_sub(column)));
        line.push_str(&"^".repeat(range.end.saturating_sub(range.start)));
    }
    line
}

pub(super) fn write_highlights(
    out: &mut impl Write,
    values: &NumberValues,
    highlights: &[Vec<HighlightRange>; 4],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let report: Vec<FieldHighlights<'_>> = Field::ALL
                .iter()
                .zip(highlights)
                .map(|(&field, ranges)| FieldHighlights {
                    field,
                    text: values.get(field),
                    ranges,
                })
                .collect();
            write_json(out, &report)
        }
        OutputFormat::Text => {
            for (field, ranges) in Field::ALL.into_iter().zip(highlights) {
                writeln!(out, "{:<LABEL_WIDTH$}{}", label(field), values.get(field))?;
                if !ranges.is_empty() {
                    writeln!(out, "{:<LABEL_WIDTH$}{}", "", marker_line(ranges))?;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
