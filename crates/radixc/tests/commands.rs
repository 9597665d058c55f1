// Test code uses unwrap for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used)]

//! End-to-end tests for the `radix` commands, driven through the library
//! with in-memory output.

use pretty_assertions::assert_eq;
use radixc::commands::{
    run_convert, run_eval, run_highlight, run_repl, CliError, CliOptions, OutputFormat,
};

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn text() -> CliOptions {
    CliOptions::default()
}

fn json() -> CliOptions {
    CliOptions {
        format: OutputFormat::Json,
    }
}

fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// === convert ===

#[test]
fn convert_multi_value_decimal() {
    let printed = output(|out| run_convert(&args(&["decimal", "72", "105"]), &text(), out));
    assert_eq!(
        printed,
        "decimal: 72 105\nhex:     0x48 0x69\nbinary:  01001000 01101001\nascii:   Hi\n"
    );
}

#[test]
fn convert_expression_in_hex() {
    let printed = output(|out| run_convert(&args(&["hex", "0x0F", "&", "0x3C"]), &text(), out));
    assert_eq!(
        printed,
        "decimal: 15&60=12\nhex:     0x0F & 0x3C=0x0C\nbinary:  00001111&00111100=00001100\nascii:   \u{c}\n"
    );
}

#[test]
fn convert_as_json() {
    let printed = output(|out| run_convert(&args(&["ascii", "A"]), &json(), out));
    let value: serde_json::Value = serde_json::from_str(&printed).unwrap();
    assert_eq!(value["decimal"], "65");
    assert_eq!(value["hex"], "0x41");
    assert_eq!(value["binary"], "01000001");
    assert_eq!(value["ascii"], "A");
}

#[test]
fn convert_needs_field_and_text() {
    let mut out = Vec::new();
    let err = run_convert(&args(&["hex"]), &text(), &mut out).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
}

// === eval ===

#[test]
fn eval_prints_result_in_base() {
    assert_eq!(output(|out| run_eval(&args(&["10", "2+3*4"]), &text(), out)), "20\n");
    assert_eq!(output(|out| run_eval(&args(&["hex", "~0"]), &text(), out)), "0xFF\n");
    assert_eq!(output(|out| run_eval(&args(&["2", "1", "<<", "11"]), &text(), out)), "00001000\n");
}

#[test]
fn eval_reports_reason() {
    let mut out = Vec::new();
    let err = run_eval(&args(&["10", "5/0"]), &text(), &mut out).unwrap_err();
    assert_eq!(err.to_string(), "division by zero");
    assert!(out.is_empty());

    let err = run_eval(&args(&["10", "42"]), &text(), &mut out).unwrap_err();
    assert_eq!(err.to_string(), "no operator in expression");
}

#[test]
fn eval_as_json() {
    let printed = output(|out| run_eval(&args(&["10", "-7/2"]), &json(), out));
    let value: serde_json::Value = serde_json::from_str(&printed).unwrap();
    assert_eq!(value["result"], -4);
    assert_eq!(value["base"], 10);
    assert_eq!(value["expression"], "-7/2");
}

// === highlight ===

#[test]
fn highlight_hex_digit() {
    let printed = output(|out| run_highlight(&args(&["hex", "7", "0x41", "0x42"]), &text(), out));
    let expected = [
        "decimal: 65 66",
        "            ^^",
        "hex:     0x41 0x42",
        "                ^",
        "binary:  01000001 01000010",
        "                  ^^^^",
        "ascii:   AB",
        "         ^^",
    ];
    assert_eq!(printed.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn highlight_as_json() {
    let printed = output(|out| run_highlight(&args(&["decimal", "0", "65"]), &json(), out));
    let value: serde_json::Value = serde_json::from_str(&printed).unwrap();
    assert_eq!(value[1]["field"], "hex");
    assert_eq!(value[1]["ranges"][0]["start"], 0);
    assert_eq!(value[1]["ranges"][0]["end"], 4);
    assert_eq!(value[3]["ranges"][0]["color"], "#ff3399");
}

// === repl ===

#[test]
fn repl_session() {
    let script = "decimal: 65 66\nhover decimal 3\nbogus\ndecimal: 4/0\nquit\ndecimal: 1\n";
    let printed = output(|out| run_repl(script.as_bytes(), &text(), out));
    let lines: Vec<&str> = printed.lines().collect();

    assert_eq!(lines[0], "decimal: 65 66");
    assert_eq!(lines[1], "hex:     0x41 0x42");
    assert!(lines.contains(&"                  ^^^^^^^^"));
    assert!(printed.contains("error: usage: <field>: <text>"));
    assert!(printed.contains("decimal: 4/0"));
    assert!(printed.ends_with("error: division by zero\n"));
}
