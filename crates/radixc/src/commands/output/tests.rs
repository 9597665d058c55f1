use super::*;
use pretty_assertions::assert_eq;

#[test]
fn markers_sit_under_the_range() {
    assert_eq!(marker_line(&[HighlightRange::new(3, 5)]), "   ^^");
    assert_eq!(marker_line(&[]), "");
}

#[test]
fn text_values_are_aligned() {
    let mut out = Vec::new();
    let values = NumberValues::new("65", "0x41", "01000001", "A");
    write_values(&mut out, &values, OutputFormat::Text).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "decimal: 65\nhex:     0x41\nbinary:  01000001\nascii:   A\n"
    );
}
