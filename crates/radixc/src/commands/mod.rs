//! Command handlers for the `radix` CLI.
//!
//! Each submodule implements one command. Handlers write to the supplied
//! writer instead of stdout so they can be driven from tests; `main.rs`
//! owns the process exit code.

use std::str::FromStr;

use radix_eval::EvalError;
use radix_format::{Field, FormatError};
use thiserror::Error;

mod convert;
mod eval;
mod highlight;
mod output;
mod repl;

pub use convert::run_convert;
pub use eval::run_eval;
pub use highlight::run_highlight;
pub use repl::run_repl;

/// How command results are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned `field: text` lines.
    #[default]
    Text,
    /// One JSON document per result.
    Json,
}

/// Flags shared by every command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub format: OutputFormat,
}

impl CliOptions {
    /// Split `--flags` from positional arguments.
    ///
    /// Only arguments starting with `--` are flags, so a negative number
    /// like `-5` stays positional.
    pub fn parse(args: &[String]) -> Result<(CliOptions, Vec<String>), CliError> {
        let mut options = CliOptions::default();
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--json" => options.format = OutputFormat::Json,
                "--text" => options.format = OutputFormat::Text,
                flag if flag.starts_with("--") => {
                    return Err(CliError::UnknownFlag(flag.to_string()));
                }
                _ => positional.push(arg.clone()),
            }
        }

        Ok((options, positional))
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown flag `{0}`")]
    UnknownFlag(String),

    #[error(transparent)]
    Field(#[from] FormatError),

    #[error("`{0}` is not a character position")]
    Position(String),

    #[error("`{0}` is not a base (expected 2, 10, 16, decimal, hex or binary)")]
    Base(String),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub(crate) fn parse_field(text: &str) -> Result<Field, CliError> {
    Ok(Field::from_str(text)?)
}

pub(crate) fn parse_position(text: &str) -> Result<usize, CliError> {
    text.trim()
        .parse()
        .map_err(|_| CliError::Position(text.to_string()))
}

/// A numeric base given as `2`/`10`/`16` or as a field name.
pub(crate) fn parse_base(text: &str) -> Result<u32, CliError> {
    let field = match text.trim().parse::<u32>() {
        Ok(radix) => Field::from_radix(radix),
        Err(_) => Field::from_str(text).ok(),
    };
    field
        .and_then(Field::radix)
        .ok_or_else(|| CliError::Base(text.to_string()))
}

#[cfg(test)]
mod tests;
