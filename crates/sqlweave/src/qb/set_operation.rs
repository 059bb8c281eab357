//! UNION / INTERSECT / EXCEPT builder.

use crate::qb::operation::{Operation, ensure_trailing_space};
use crate::qb::traits::{SqlQb, Statement, StatementKind};

/// Compound select operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetOperator {
    Union,
    UnionAll,
    Intersect,
    Except,
}

impl SetOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            SetOperator::Union => "UNION",
            SetOperator::UnionAll => "UNION ALL",
            SetOperator::Intersect => "INTERSECT",
            SetOperator::Except => "EXCEPT",
        }
    }
}

/// Operands joined by one set operator.
///
/// An operand that is itself a set operation is wrapped in parentheses;
/// every other operand renders as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct SetOperationQb {
    operator: SetOperator,
    operands: Vec<Statement>,
}

impl SetOperationQb {
    pub fn new<I, S>(operator: SetOperator, operands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Statement>,
    {
        Self {
            operator,
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    /// Append another operand.
    pub fn operand(mut self, statement: impl Into<Statement>) -> Self {
        self.operands.push(statement.into());
        self
    }

    pub fn operator(&self) -> SetOperator {
        self.operator
    }
}

impl SqlQb for SetOperationQb {
    fn operations(&self) -> Vec<Operation> {
        let mut out = Vec::new();
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                out.push(Operation::literal(self.operator.as_str()));
                out.push(Operation::literal(" "));
            }

            if let Statement::SetOperation(nested) = operand {
                out.push(Operation::literal("( "));
                out.extend(nested.operations());
                ensure_trailing_space(&mut out);
                out.push(Operation::literal(") "));
            } else {
                out.extend(operand.operations());
                ensure_trailing_space(&mut out);
            }
        }
        out
    }

    fn kind(&self) -> StatementKind {
        StatementKind::SetOperation
    }
}
