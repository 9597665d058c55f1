//! The `highlight` command: hover one position and show every field's range.

use std::io::Write;

use crate::Session;

use super::output::write_highlights;
use super::{parse_field, parse_position, CliError, CliOptions};

const USAGE: &str = "radix highlight <field> <position> <text...>";

pub fn run_highlight(
    args: &[String],
    options: &CliOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let [field, position, text @ ..] = args else {
        return Err(CliError::Usage(USAGE));
    };
    if text.is_empty() {
        return Err(CliError::Usage(USAGE));
    }

    let field = parse_field(field)?;
    let position = parse_position(position)?;

    let mut session = Session::new();
    session.input(field, &text.join(" "));
    session.hover(field, position);
    write_highlights(out, session.values(), &session.all_highlights(), options.format)
}
