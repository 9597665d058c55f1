use super::*;
use pretty_assertions::assert_eq;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn flags_are_separated_from_positionals() {
    let (options, rest) = CliOptions::parse(&args(&["hex", "--json", "0x41"])).unwrap();
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(rest, args(&["hex", "0x41"]));
}

#[test]
fn single_dash_arguments_stay_positional() {
    let (options, rest) = CliOptions::parse(&args(&["decimal", "-5"])).unwrap();
    assert_eq!(options, CliOptions::default());
    assert_eq!(rest, args(&["decimal", "-5"]));
}

#[test]
fn unknown_flag_is_rejected() {
    let err = CliOptions::parse(&args(&["--yaml"])).unwrap_err();
    assert_eq!(err.to_string(), "unknown flag `--yaml`");
}

#[test]
fn bases_by_number_or_name() {
    assert_eq!(parse_base("16").unwrap(), 16);
    assert_eq!(parse_base("bin").unwrap(), 2);
    assert_eq!(parse_base("decimal").unwrap(), 10);
    assert!(matches!(parse_base("8"), Err(CliError::Base(_))));
    assert!(matches!(parse_base("ascii"), Err(CliError::Base(_))));
}

#[test]
fn positions_are_non_negative_integers() {
    assert_eq!(parse_position("7").unwrap(), 7);
    assert!(matches!(parse_position("-1"), Err(CliError::Position(_))));
}

#[test]
fn unknown_field_reports_expected_names() {
    let err = parse_field("octal").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown field `octal` (expected decimal, hex, binary or ascii)"
    );
}
