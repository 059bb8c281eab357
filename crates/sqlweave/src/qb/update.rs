//! UPDATE statement builder.

use crate::qb::clauses::{Bound, Clauses, Join, JoinKind};
use crate::qb::expr::Expression;
use crate::qb::falseable::Falseable;
use crate::qb::operation::Operation;
use crate::qb::traits::{SqlQb, StatementKind};

/// UPDATE statement builder.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateQb {
    clauses: Clauses,
}

impl UpdateQb {
    /// Create a new UPDATE builder for a table.
    pub fn new(table: impl Into<Expression>) -> Self {
        Self {
            clauses: Clauses {
                tables: vec![table.into()],
                ..Clauses::default()
            },
        }
    }

    // ==================== SET ====================

    /// Append `column = expr`.
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

    // ==================== JOIN ====================

    /// Add `INNER JOIN table AS alias`.
    pub fn join(self, table: impl Into<Expression>, alias: &str) -> Self {
        self.join_on(table, alias, Vec::<Expression>::new())
    }

    /// Add `INNER JOIN table AS alias ON conditions`.
    pub fn join_on<I, C>(mut self, table: impl Into<Expression>, alias: &str, conditions: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Falseable,
    {
        self.clauses
            .joins
            .push(Join::new(JoinKind::Inner, table, alias, conditions));
        self
    }

    /// Add `LEFT JOIN table AS alias`.
    pub fn join_left(self, table: impl Into<Expression>, alias: &str) -> Self {
        self.join_left_on(table, alias, Vec::<Expression>::new())
    }

    /// Add `LEFT JOIN table AS alias ON conditions`.
    pub fn join_left_on<I, C>(mut self, table: impl Into<Expression>, alias: &str, conditions: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Falseable,
    {
        self.clauses
            .joins
            .push(Join::new(JoinKind::Left, table, alias, conditions));
        self
    }

    // ==================== WHERE / LIMIT ====================

    /// Add a WHERE condition. All conditions are ANDed.
    pub fn where_(mut self, condition: impl Falseable) -> Self {
        self.clauses.push_where(condition);
        self
    }

    /// Set LIMIT.
    pub fn limit(mut self, limit: impl Into<Bound>) -> Self {
        self.clauses.limit = limit.into();
        self
    }

    /// Set OFFSET.
    pub fn offset(mut self, offset: impl Into<Bound>) -> Self {
        self.clauses.offset = offset.into();
        self
    }

    /// Set LIMIT and OFFSET together.
    pub fn limit_offset(self, limit: impl Into<Bound>, offset: impl Into<Bound>) -> Self {
        self.limit(limit).offset(offset)
    }

    /// Append RETURNING columns.
    pub fn returning<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Falseable,
    {
        for column in columns {
            self.clauses.push_returning(column);
        }
        self
    }
}

impl SqlQb for UpdateQb {
    fn operations(&self) -> Vec<Operation> {
        let mut out = vec![Operation::literal("UPDATE ")];
        out.extend(self.clauses.tables.iter().flat_map(Expression::operations));
        out.push(Operation::literal(" "));

        self.clauses.write_joins(&mut out);
        self.clauses.write_set(&mut out);
        self.clauses.write_where(&mut out);
        self.clauses.write_limit_offset(&mut out);
        self.clauses.write_returning(&mut out);
        out
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }
}
