//! The `eval` command: evaluate one expression and print the result.

use std::io::Write;

use radix_format::{convert, Field, NumberValues};
use serde::Serialize;

use super::output::write_json;
use super::{parse_base, CliError, CliOptions, OutputFormat};

const USAGE: &str = "radix eval <base> <expr...>";

#[derive(Serialize)]
struct EvalReport<'a> {
    expression: &'a str,
    base: u32,
    result: i64,
    values: NumberValues,
}

/// Print the value of `<expr...>` in `<base>`.
///
/// A rejected expression is an error carrying the evaluator's reason.
pub fn run_eval(
    args: &[String],
    options: &CliOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let [base, expression @ ..] = args else {
        return Err(CliError::Usage(USAGE));
    };
    if expression.is_empty() {
        return Err(CliError::Usage(USAGE));
    }

    let base = parse_base(base)?;
    let expression = expression.join(" ");
    let result = radix_eval::try_evaluate(&expression, base)?;
    let values = convert(result);

    match options.format {
        OutputFormat::Json => write_json(
            out,
            &EvalReport {
                expression: &expression,
                base,
                result,
                values,
            },
        ),
        OutputFormat::Text => {
            let field = Field::from_radix(base).unwrap_or(Field::Decimal);
            writeln!(out, "{}", values.get(field))?;
            Ok(())
        }
    }
}
