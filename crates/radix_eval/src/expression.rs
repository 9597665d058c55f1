//! Expression forms and the single-pass reducer.
//!
//! Three shapes are accepted, tried in this order:
//!
//! 1. `~<operand>`: byte-aligned complement.
//! 2. `<operand> << <operand>` / `<operand> >> <operand>`: one shift, no
//!    chaining.
//! 3. A flat stream `operand (op operand)*` reduced strictly left to right.
//!    There is no precedence: `2+3*4` is `20`. A leading `-` negates the
//!    first operand.

use crate::errors::{integer_overflow, invalid_operand, EvalError, EvalResult};
use crate::operand::{check_radix, is_operand_text, parse_operand};
use crate::operators::evaluate_binary;
use crate::token::{has_operator, tokenize, BinaryOp, Token};
use crate::unary_operators::evaluate_not;

/// An operand as typed, with its parsed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operand<'a> {
    pub text: &'a str,
    pub value: i64,
}

impl<'a> Operand<'a> {
    fn parse(text: &'a str, radix: u32) -> EvalResult<Self> {
        Ok(Operand {
            text: text.trim(),
            value: parse_operand(text, radix)?,
        })
    }
}

/// A parsed expression, ready to evaluate or to re-render in another base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression<'a> {
    Not(Operand<'a>),
    Shift {
        left: Operand<'a>,
        op: BinaryOp,
        right: Operand<'a>,
    },
    Chain {
        negated: bool,
        first: Operand<'a>,
        rest: Vec<(BinaryOp, Operand<'a>)>,
    },
}

impl Expression<'_> {
    pub fn evaluate(&self) -> EvalResult {
        match self {
            Expression::Not(operand) => Ok(evaluate_not(operand.value)),
            Expression::Shift { left, op, right } => evaluate_binary(left.value, right.value, *op),
            Expression::Chain {
                negated,
                first,
                rest,
            } => {
                let start = if *negated {
                    first
                        .value
                        .checked_neg()
                        .ok_or_else(|| integer_overflow("negation"))?
                } else {
                    first.value
                };
                rest.iter().try_fold(start, |acc, (op, operand)| {
                    evaluate_binary(acc, operand.value, *op)
                })
            }
        }
    }

    /// Rebuild the expression text with each operand rendered by `render`.
    ///
    /// Operators are written without surrounding whitespace.
    pub fn render(&self, mut render: impl FnMut(i64) -> String) -> String {
        match self {
            Expression::Not(operand) => format!("~{}", render(operand.value)),
            Expression::Shift { left, op, right } => {
                format!("{}{op}{}", render(left.value), render(right.value))
            }
            Expression::Chain {
                negated,
                first,
                rest,
            } => {
                let mut out = String::new();
                if *negated {
                    out.push_str(BinaryOp::Sub.symbol());
                }
                out.push_str(&render(first.value));
                for (op, operand) in rest {
                    out.push_str(op.symbol());
                    out.push_str(&render(operand.value));
                }
                out
            }
        }
    }
}

/// Split `text` around a single `<<`/`>>` with a bare operand on each side.
fn split_shift(text: &str, radix: u32) -> Option<(&str, BinaryOp, &str)> {
    let (idx, op) = [("<<", BinaryOp::Shl), (">>", BinaryOp::Shr)]
        .into_iter()
        .filter_map(|(symbol, op)| text.find(symbol).map(|idx| (idx, op)))
        .min_by_key(|&(idx, _)| idx)?;
    let (left, right) = (&text[..idx], &text[idx + 2..]);
    (is_operand_text(left, radix) && is_operand_text(right, radix)).then_some((left, op, right))
}

fn parse_chain<'a>(text: &'a str, radix: u32) -> EvalResult<Expression<'a>> {
    let mut tokens = tokenize(text).into_iter();

    let (negated, first) = match tokens.next() {
        Some(Token::Operand(first)) => (false, Operand::parse(first, radix)?),
        Some(Token::Operator(BinaryOp::Sub)) => match tokens.next() {
            Some(Token::Operand(first)) => (true, Operand::parse(first, radix)?),
            Some(Token::Operator(op)) => return Err(EvalError::UnexpectedOperator(op)),
            None => return Err(EvalError::MissingOperand(BinaryOp::Sub)),
        },
        Some(Token::Operator(op)) => return Err(EvalError::UnexpectedOperator(op)),
        None => return Err(EvalError::NoOperator),
    };

    let mut rest = Vec::new();
    while let Some(token) = tokens.next() {
        let op = match token {
            Token::Operator(op) => op,
            Token::Operand(text) => return Err(invalid_operand(text, radix)),
        };
        match tokens.next() {
            Some(Token::Operand(text)) => rest.push((op, Operand::parse(text, radix)?)),
            Some(Token::Operator(next)) => return Err(EvalError::UnexpectedOperator(next)),
            None => return Err(EvalError::MissingOperand(op)),
        }
    }

    Ok(Expression::Chain {
        negated,
        first,
        rest,
    })
}

/// Parse `text` as an expression in `radix` (2, 10 or 16).
pub fn parse_expression(text: &str, radix: u32) -> EvalResult<Expression<'_>> {
    let radix = check_radix(radix)?;
    let text = text.trim();
    if !has_operator(text) {
        return Err(EvalError::NoOperator);
    }

    if let Some(operand) = text.strip_prefix('~') {
        return Ok(Expression::Not(Operand::parse(operand, radix)?));
    }

    if let Some((left, op, right)) = split_shift(text, radix) {
        return Ok(Expression::Shift {
            left: Operand::parse(left, radix)?,
            op,
            right: Operand::parse(right, radix)?,
        });
    }

    parse_chain(text, radix)
}

/// Evaluate `expression`, reporting why it was rejected.
pub fn try_evaluate(expression: &str, radix: u32) -> EvalResult {
    parse_expression(expression, radix)?.evaluate()
}

/// Evaluate `expression` in `radix`; `None` for anything that is not a
/// well-formed, computable expression.
///
/// Plain numbers without an operator are rejected too: the caller converts
/// those directly.
#[tracing::instrument(level = "trace", ret)]
pub fn evaluate(expression: &str, radix: u32) -> Option<i64> {
    try_evaluate(expression, radix)
        .map_err(|error| tracing::trace!(%error, "expression rejected"))
        .ok()
}

/// Whether live input looks finished enough to evaluate.
///
/// True when the text has an operator, ends in a digit of `radix`, and
/// parses as one of the accepted shapes. Division by zero still counts as
/// complete; it fails at evaluation.
pub fn is_complete_expression(text: &str, radix: u32) -> bool {
    let text = text.trim();
    check_radix(radix).is_ok()
        && has_operator(text)
        && text.chars().last().is_some_and(|c| c.is_digit(radix))
        && parse_expression(text, radix).is_ok()
}
