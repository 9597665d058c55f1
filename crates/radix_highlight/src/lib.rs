//! Radix Highlight - links a hovered position across the converter fields.
//!
//! While the pointer rests on a character of one field, every field gets
//! the range that represents the same value: the aligned group for decimal,
//! the matching hex digit and four-bit nibble between hex and binary, and
//! the whole field where no finer mapping exists (ASCII).
//!
//! Failures never surface as errors: a position on a separator, inside the
//! `0x` prefix, or past the end of the text simply yields no ranges.

mod engine;
mod group;
mod hover;
mod info;

pub use engine::get_highlights;
pub use group::{
    aligned_group, all_groups, find_number_group_at_position, group_at_index, NumberGroup,
};
pub use hover::HoverState;
pub use info::{HighlightInfo, HighlightRange, HIGHLIGHT_COLOR};
