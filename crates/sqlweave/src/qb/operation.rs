//! Flat operation stream produced by rendering.

use crate::qb::param::Value;
use std::borrow::Cow;

/// One rendered token: literal SQL text or a parameter to bind.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Literal(Cow<'static, str>),
    Param(Value),
}

impl Operation {
    /// Create a literal token.
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Operation::Literal(text.into())
    }

    /// Create a parameter token.
    pub fn param(value: impl Into<Value>) -> Self {
        Operation::Param(value.into())
    }

    /// Whether this is a literal ending in whitespace.
    fn ends_with_space(&self) -> bool {
        matches!(self, Operation::Literal(text) if text.ends_with(' '))
    }
}

/// Join rendered sequences with `separator`.
///
/// Empty sequences are dropped before joining. With `wrap` the result is
/// enclosed in parentheses, even when nothing survived.
pub fn join<I>(sequences: I, separator: &'static str, wrap: bool) -> Vec<Operation>
where
    I: IntoIterator<Item = Vec<Operation>>,
{
    let mut out = Vec::new();
    if wrap {
        out.push(Operation::literal("("));
    }

    let mut first = true;
    for seq in sequences {
        if seq.is_empty() {
            continue;
        }
        if !first {
            out.push(Operation::literal(separator));
        }
        first = false;
        out.extend(seq);
    }

    if wrap {
        out.push(Operation::literal(")"));
    }
    out
}

/// Strip trailing whitespace from the last literal of a sequence.
pub(crate) fn trim_end(ops: &mut Vec<Operation>) {
    loop {
        let Some(Operation::Literal(text)) = ops.last() else {
            return;
        };
        let keep = text.trim_end().len();
        if keep == text.len() {
            return;
        }
        if keep == 0 {
            ops.pop();
            continue;
        }
        if let Some(Operation::Literal(text)) = ops.last_mut() {
            text.to_mut().truncate(keep);
        }
        return;
    }
}

/// Make sure the sequence ends with a space so another clause can follow.
pub(crate) fn ensure_trailing_space(ops: &mut Vec<Operation>) {
    match ops.last() {
        None => {}
        Some(last) if last.ends_with_space() => {}
        Some(_) => ops.push(Operation::literal(" ")),
    }
}
