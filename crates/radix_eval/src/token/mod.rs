//! Flat token stream for live-typed expressions.
//!
//! Input is split on the single-character binary operators, keeping the
//! operators as tokens. Operand text is trimmed and empty operands are
//! dropped, so `"5 + 3"` and `"5+3"` produce the same stream. No numeric
//! value is resolved here; operands stay as borrowed text.

use std::fmt;

/// Every character that marks input as an expression rather than a plain
/// number. `<` and `>` only form operators as `<<`/`>>`.
pub const OPERATOR_CHARS: [char; 11] = ['+', '-', '*', '/', '%', '&', '|', '^', '~', '<', '>'];

/// Binary operators of the flat stream, plus the two shifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl BinaryOp {
    /// Operator for a splitting character. Shifts are two characters and
    /// never come from here.
    pub const fn from_char(c: char) -> Option<BinaryOp> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '%' => Some(BinaryOp::Mod),
            '&' => Some(BinaryOp::BitAnd),
            '|' => Some(BinaryOp::BitOr),
            '^' => Some(BinaryOp::BitXor),
            _ => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }

    pub const fn is_bitwise(self) -> bool {
        matches!(self, BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One element of the flat stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Operand(&'a str),
    Operator(BinaryOp),
}

/// Whether `text` contains any operator character at all.
pub fn has_operator(text: &str) -> bool {
    text.contains(OPERATOR_CHARS)
}

/// Split `text` on the single-character operators, keeping them.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut operand_start = 0;

    for (idx, c) in text.char_indices() {
        if let Some(op) = BinaryOp::from_char(c) {
            push_operand(&mut tokens, &text[operand_start..idx]);
            tokens.push(Token::Operator(op));
            operand_start = idx + c.len_utf8();
        }
    }
    push_operand(&mut tokens, &text[operand_start..]);

    tokens
}

fn push_operand<'a>(tokens: &mut Vec<Token<'a>>, raw: &'a str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        tokens.push(Token::Operand(trimmed));
    }
}
