//! Hover input and highlight output types.

use radix_format::Field;

/// Color of every highlight range.
pub const HIGHLIGHT_COLOR: &str = "#ff3399";

/// The field under the pointer and the character offset within its text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightInfo {
    pub source: Field,
    pub position: usize,
}

impl HighlightInfo {
    pub fn new(source: Field, position: usize) -> Self {
        HighlightInfo { source, position }
    }
}

/// Half-open `[start, end)` character range to emphasize in a target field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
    pub color: &'static str,
}

impl HighlightRange {
    pub fn new(start: usize, end: usize) -> Self {
        HighlightRange {
            start,
            end,
            color: HIGHLIGHT_COLOR,
        }
    }

    /// Range covering all of `text`, or nothing when `text` is empty.
    pub(crate) fn whole(text: &str) -> Option<Self> {
        let len = text.chars().count();
        (len > 0).then(|| HighlightRange::new(0, len))
    }
}
