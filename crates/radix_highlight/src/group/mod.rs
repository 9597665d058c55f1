//! Space-separated value groups inside one field.
//!
//! All offsets are character offsets into the field text, matching the
//! positions a text widget reports on hover.

/// Characters that split an expression group into operand tokens: the
/// operators plus the `=` that precedes a calculated result.
const OPERATOR_CHARS: [char; 12] = ['+', '-', '*', '/', '%', '&', '|', '^', '~', '<', '>', '='];

/// One value within a field, as a half-open `[start, end)` character range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberGroup<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// Ordinal among the non-empty groups of the field.
    pub group_index: usize,
    /// Ordinal among the operands of an expression group, when the group
    /// was narrowed to one of them.
    pub operand_index: Option<usize>,
}

impl<'a> NumberGroup<'a> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// An expression group taken whole, i.e. the pointer is on an operator.
    pub fn is_whole_expression(&self) -> bool {
        self.operand_index.is_none() && self.text.contains(OPERATOR_CHARS)
    }

    fn narrow(&self, run: &Run, operand_index: usize) -> NumberGroup<'a> {
        NumberGroup {
            text: &self.text[run.byte_start..run.byte_end],
            start: self.start + run.start,
            end: self.start + run.end,
            group_index: self.group_index,
            operand_index: Some(operand_index),
        }
    }
}

/// A maximal run of operator or operand characters inside one group.
/// `start`/`end` are character offsets, `byte_*` index the group text.
struct Run {
    start: usize,
    end: usize,
    byte_start: usize,
    byte_end: usize,
    operator: bool,
}

/// Iterate the non-empty space-separated parts with their start offsets.
fn parts(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split(' ')
        .scan(0usize, |offset, part| {
            let start = *offset;
            *offset = start + part.chars().count() + 1;
            Some((start, part))
        })
        .filter(|(_, part)| !part.is_empty())
}

fn is_operator(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

fn runs(part: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for (index, (byte, c)) in part.char_indices().enumerate() {
        let operator = is_operator(c);
        let byte_end = byte + c.len_utf8();
        match runs.last_mut() {
            Some(run) if run.operator == operator => {
                run.end = index + 1;
                run.byte_end = byte_end;
            }
            _ => runs.push(Run {
                start: index,
                end: index + 1,
                byte_start: byte,
                byte_end,
                operator,
            }),
        }
    }
    runs
}

fn operands(part: &str) -> impl Iterator<Item = Run> {
    runs(part).into_iter().filter(|run| !run.operator)
}

fn whole(group_index: usize, start: usize, part: &str) -> NumberGroup<'_> {
    NumberGroup {
        text: part,
        start,
        end: start + part.chars().count(),
        group_index,
        operand_index: None,
    }
}

/// Find the group containing `position`.
///
/// When the group is an expression like `12+34`, the result is narrowed to
/// the operand under the pointer; `group_index` still names the whole
/// space-separated group. Positions on a separator or past the end have no
/// group.
pub fn find_number_group_at_position(text: &str, position: usize) -> Option<NumberGroup<'_>> {
    parts(text)
        .enumerate()
        .map(|(group_index, (start, part))| whole(group_index, start, part))
        .find(|group| (group.start..group.end).contains(&position))
        .map(|group| {
            let relative = position - group.start;
            operands(group.text)
                .enumerate()
                .find(|(_, run)| (run.start..run.end).contains(&relative))
                .filter(|_| group.text.contains(OPERATOR_CHARS))
                .map_or(group, |(operand_index, run)| group.narrow(&run, operand_index))
        })
}

/// Every non-empty group of `text`, in order.
pub fn all_groups(text: &str) -> Vec<NumberGroup<'_>> {
    parts(text)
        .enumerate()
        .map(|(group_index, (start, part))| whole(group_index, start, part))
        .collect()
}

/// The group at `group_index`, for lookups aligned with another field.
pub fn group_at_index(text: &str, group_index: usize) -> Option<NumberGroup<'_>> {
    all_groups(text).into_iter().nth(group_index)
}

/// The group of `text` that corresponds to `other`, a group found in
/// another field. An operand of an expression maps to the operand with the
/// same ordinal in the aligned group.
pub fn aligned_group<'a>(text: &'a str, other: &NumberGroup<'_>) -> Option<NumberGroup<'a>> {
    let group = group_at_index(text, other.group_index)?;
    match other.operand_index {
        None => Some(group),
        Some(ordinal) => operands(group.text)
            .nth(ordinal)
            .map(|run| group.narrow(&run, ordinal)),
    }
}
