//! The `repl` command: drive one session from line input.
//!
//! ```text
//! decimal: 10 20      set a field and print all four
//! hover hex 7         hover a position and print the highlights
//! leave               end the hover
//! clear               blank every field
//! quit
//! ```
//!
//! A bad line prints `error: ...` and the loop continues.

use std::io::{BufRead, Write};

use crate::session::InputOutcome;
use crate::Session;

use super::output::{write_highlights, write_values};
use super::{parse_field, parse_position, CliError, CliOptions};

const HOVER_USAGE: &str = "hover <field> <position>";

enum Line<'a> {
    Blank,
    Quit,
    Clear,
    Leave,
    Hover(&'a str, &'a str),
    BadHover,
    Input(&'a str, &'a str),
    Unknown,
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    match trimmed {
        "" => return Line::Blank,
        "quit" | "exit" => return Line::Quit,
        "clear" => return Line::Clear,
        "leave" => return Line::Leave,
        _ => {}
    }

    if let Some(rest) = trimmed.strip_prefix("hover ") {
        let mut parts = rest.split_whitespace();
        return match (parts.next(), parts.next(), parts.next()) {
            (Some(field), Some(position), None) => Line::Hover(field, position),
            _ => Line::BadHover,
        };
    }

    match line.split_once(':') {
        Some((field, text)) => Line::Input(field, text.strip_prefix(' ').unwrap_or(text)),
        None => Line::Unknown,
    }
}

fn apply(
    session: &mut Session,
    line: &Line<'_>,
    options: &CliOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match *line {
        Line::Blank | Line::Quit => Ok(()),
        Line::Clear => {
            session.clear();
            write_values(out, session.values(), options.format)
        }
        Line::Leave => {
            session.leave();
            Ok(())
        }
        Line::BadHover => Err(CliError::Usage(HOVER_USAGE)),
        Line::Hover(field, position) => {
            session.hover(parse_field(field)?, parse_position(position)?);
            write_highlights(out, session.values(), &session.all_highlights(), options.format)
        }
        Line::Input(field, text) => {
            let outcome = session.input(parse_field(field)?, text);
            write_values(out, session.values(), options.format)?;
            match outcome {
                InputOutcome::Failed(error) => Err(error.into()),
                _ => Ok(()),
            }
        }
        Line::Unknown => Err(CliError::Usage("<field>: <text>")),
    }
}

/// Run until `quit` or end of input.
pub fn run_repl(
    input: impl BufRead,
    options: &CliOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut session = Session::new();
    for line in input.lines() {
        let line = line?;
        let parsed = classify(&line);
        if matches!(parsed, Line::Quit) {
            break;
        }
        if let Err(error) = apply(&mut session, &parsed, options, out) {
            writeln!(out, "error: {error}")?;
        }
    }
    Ok(())
}
