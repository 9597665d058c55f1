//! Hover lifecycle.
//!
//! The pointer is either over a field (active, with a [`HighlightInfo`]) or
//! not (idle). Editing any field drops back to idle: stale offsets into old
//! text would map to the wrong characters.

use radix_format::{Field, NumberValues};

use crate::engine::get_highlights;
use crate::info::{HighlightInfo, HighlightRange};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    active: Option<HighlightInfo>,
}

impl HoverState {
    pub fn new() -> Self {
        HoverState::default()
    }

    /// Enter (or move within) the active state.
    pub fn pointer_moved(&mut self, source: Field, position: usize) {
        tracing::trace!(%source, position, "pointer moved");
        self.active = Some(HighlightInfo::new(source, position));
    }

    pub fn pointer_left(&mut self) {
        self.active = None;
    }

    pub fn input_edited(&mut self) {
        if self.active.take().is_some() {
            tracing::trace!("hover cleared by edit");
        }
    }

    pub fn info(&self) -> Option<&HighlightInfo> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn highlights(&self, values: &NumberValues, target: Field) -> Vec<HighlightRange> {
        get_highlights(values, self.info(), target)
    }

    /// Ranges for every field, in [`Field::ALL`] order.
    pub fn all_highlights(&self, values: &NumberValues) -> [Vec<HighlightRange>; 4] {
        Field::ALL.map(|target| self.highlights(values, target))
    }
}
