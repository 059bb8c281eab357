//! ON CONFLICT clause builder, attached to INSERT.

use crate::qb::clauses::{Clauses, write_conjunction};
use crate::qb::expr::{Expression, excluded};
use crate::qb::falseable::Falseable;
use crate::qb::operation::{Operation, join};
use crate::qb::traits::{SqlQb, StatementKind};

/// `ON CONFLICT [(cols)] [WHERE target] DO NOTHING | DO UPDATE SET ... [WHERE ...]`
///
/// Without assignments the action falls back to `DO NOTHING`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConflictQb {
    clauses: Clauses,
    target: Vec<Expression>,
    do_nothing: bool,
}

impl ConflictQb {
    /// Create a conflict clause with no target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append conflict target columns.
    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Falseable,
    {
        for column in columns {
            self.clauses.push_column(column);
        }
        self
    }

    /// Add a condition on the conflict target (partial index predicate).
    pub fn target_where(mut self, condition: impl Falseable) -> Self {
        self.target.extend(condition.into_expression());
        self
    }

    /// Resolve with `DO NOTHING`, discarding any assignments.
    pub fn do_nothing(mut self) -> Self {
        self.do_nothing = true;
        self
    }

    // ==================== DO UPDATE ====================

    /// Append `column = expr` to the update action.
    pub fn set(mut self, column: &str, expr: impl Into<Expression>) -> Self {
        self.clauses.push_set(column, expr);
        self
    }

    /// Append an assignment only when the value is present.
    pub fn set_opt<T: Into<Expression>>(self, column: &str, expr: Option<T>) -> Self {
        match expr {
            Some(expr) => self.set(column, expr),
            None => self,
        }
    }

    /// Set column to the value proposed for insertion: `column = excluded.column`.
    pub fn set_excluded(self, column: &str) -> Self {
        self.set(column, excluded(column))
    }

    /// Add a condition on the update action.
    pub fn where_(mut self, condition: impl Falseable) -> Self {
        self.clauses.push_where(condition);
        self
    }
}

impl SqlQb for ConflictQb {
    fn operations(&self) -> Vec<Operation> {
        let mut out = vec![Operation::literal("ON CONFLICT ")];

        let columns = self.clauses.columns_list();
        if !columns.is_empty() {
            out.extend(join([columns], "", true));
            out.push(Operation::literal(" "));
        }
        write_conjunction("WHERE ", &self.target, &mut out);

        if self.do_nothing || self.clauses.sets.is_empty() {
            out.push(Operation::literal("DO NOTHING "));
        } else {
            out.push(Operation::literal("DO UPDATE "));
            self.clauses.write_set(&mut out);
            self.clauses.write_where(&mut out);
        }
        out
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Conflict
    }
}
