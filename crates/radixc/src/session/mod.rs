//! One converter window: the four field texts plus the hover state.
//!
//! Every edit replaces [`NumberValues`] wholesale and drops the hover, so
//! highlight offsets always refer to the text currently shown.

use radix_eval::{has_operator, is_complete_expression, parse_expression, EvalError, Expression};
use radix_format::{
    convert, convert_field, format_binary, format_calculation_result, format_decimal, format_hex,
    parse_in, Field, NumberValues,
};
use radix_highlight::{HighlightInfo, HighlightRange, HoverState};

/// Separates an evaluated expression from its displayed result.
const RESULT_MARKER: char = '=';

/// What an edit did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Plain values (or blank text) converted into every field.
    Converted,
    /// No value parsed; only the edited field changed.
    Unparsed,
    /// An expression was evaluated to this value.
    Calculated(i64),
    /// An expression is still being typed; only the edited field changed.
    Pending,
    /// A complete expression could not be computed; only the edited field
    /// changed.
    Failed(EvalError),
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    values: NumberValues,
    hover: HoverState,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn values(&self) -> &NumberValues {
        &self.values
    }

    pub fn hover_info(&self) -> Option<&HighlightInfo> {
        self.hover.info()
    }

    /// Apply the new text of `field`.
    ///
    /// Text with an operator that does not read as a plain value is an
    /// expression; a previous `=result` suffix is ignored so an evaluated
    /// line can be edited in place.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn input(&mut self, field: Field, text: &str) -> InputOutcome {
        self.hover.input_edited();
        let outcome = match field.radix() {
            Some(radix) if is_expression_input(field, text) => self.calculate(field, radix, text),
            _ => self.convert(field, text),
        };
        tracing::debug!(?outcome, "input applied");
        outcome
    }

    pub fn clear(&mut self) {
        self.values = NumberValues::empty();
        self.hover.pointer_left();
    }

    pub fn hover(&mut self, field: Field, position: usize) {
        self.hover.pointer_moved(field, position);
    }

    pub fn leave(&mut self) {
        self.hover.pointer_left();
    }

    pub fn highlights(&self, target: Field) -> Vec<HighlightRange> {
        self.hover.highlights(&self.values, target)
    }

    /// Highlights of every field, in [`Field::ALL`] order.
    pub fn all_highlights(&self) -> [Vec<HighlightRange>; 4] {
        self.hover.all_highlights(&self.values)
    }

    fn convert(&mut self, field: Field, text: &str) -> InputOutcome {
        match convert_field(field, text) {
            Some(values) => {
                self.values = values;
                InputOutcome::Converted
            }
            None => {
                self.values = self.values.with_field(field, text);
                InputOutcome::Unparsed
            }
        }
    }

    fn calculate(&mut self, field: Field, radix: u32, text: &str) -> InputOutcome {
        let expression = without_result(text);
        if !is_complete_expression(expression, radix) {
            self.values = self.values.with_field(field, text);
            return InputOutcome::Pending;
        }

        let calculated = parse_expression(expression, radix).and_then(|parsed| {
            let value = parsed.evaluate()?;
            Ok((translate(&parsed, field, expression), value))
        });

        match calculated {
            Ok((translated, value)) => {
                self.values = format_calculation_result(&translated, &convert(value));
                InputOutcome::Calculated(value)
            }
            Err(error) => {
                self.values = self.values.with_field(field, text);
                InputOutcome::Failed(error)
            }
        }
    }
}

fn without_result(text: &str) -> &str {
    text.split_once(RESULT_MARKER).map_or(text, |(expression, _)| expression)
}

fn is_expression_input(field: Field, text: &str) -> bool {
    let text = without_result(text).trim();
    has_operator(text) && parse_in(field, text).is_none()
}

/// The expression written in every numeric base; `source` keeps the
/// user's text.
fn translate(expression: &Expression<'_>, source: Field, raw: &str) -> NumberValues {
    NumberValues::new(
        expression.render(format_decimal),
        expression.render(format_hex),
        expression.render(format_binary),
        "",
    )
    .with_field(source, raw)
}
