//! The `convert` command: one field's text into all four.

use std::io::Write;

use crate::Session;

use super::output::write_values;
use super::{parse_field, CliError, CliOptions};

const USAGE: &str = "radix convert <field> <text...>";

/// `args` is `<field> <text...>`; the text parts are rejoined with single
/// spaces, so multi-value input can be passed unquoted.
pub fn run_convert(
    args: &[String],
    options: &CliOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let [field, text @ ..] = args else {
        return Err(CliError::Usage(USAGE));
    };
    if text.is_empty() {
        return Err(CliError::Usage(USAGE));
    }

    let field = parse_field(field)?;
    let mut session = Session::new();
    session.input(field, &text.join(" "));
    write_values(out, session.values(), options.format)
}
