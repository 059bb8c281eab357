//! SELECT statement builder.

use crate::qb::clauses::{
    Bound, Clauses, Join, JoinKind, Nulls, Order, OrderBy, write_conjunction, write_list,
    write_order_by,
};
use crate::qb::expr::Expression;
use crate::qb::falseable::Falseable;
use crate::qb::operation::Operation;
use crate::qb::traits::{SqlQb, StatementKind};

/// SELECT statement builder.
///
/// Without columns the statement selects `TRUE`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectQb {
    clauses: Clauses,
    distinct: bool,
    group_by: Vec<Expression>,
    having: Vec<Expression>,
    order_by: Vec<OrderBy>,
}

impl SelectQb {
    /// Create an empty SELECT builder.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== SELECT columns ====================

    /// Append columns. Omitted entries are skipped.
    pub fn select<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Falseable,
    {
        for column in columns {
            self.clauses.push_column(column);
        }
        self
    }

    /// Append one column.
    pub fn column(mut self, column: impl Falseable) -> Self {
        self.clauses.push_column(column);
        self
    }

    /// Append one column with an alias: `column AS alias`.
    pub fn select_aliased(mut self, column: impl Falseable, alias: &str) -> Self {
        self.clauses.push_column_aliased(column, alias);
        self
    }

    /// Toggle `SELECT DISTINCT`.
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    // ==================== FROM / JOIN ====================

    /// Append a FROM source.
    pub fn from(mut self, table: impl Falseable) -> Self {
        self.clauses.push_table(table);
        self
    }

    /// Append a FROM source with an alias.
    pub fn from_aliased(mut self, table: impl Falseable, alias: &str) -> Self {
        self.clauses.push_table_aliased(table, alias);
        self
    }

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

    // ==================== WHERE / GROUP BY / HAVING ====================

    /// Add a WHERE condition. All conditions are ANDed.
    pub fn where_(mut self, condition: impl Falseable) -> Self {
        self.clauses.push_where(condition);
        self
    }

    /// Append a GROUP BY term.
    pub fn group_by(mut self, expr: impl Falseable) -> Self {
        self.group_by.extend(expr.into_expression());
        self
    }

    /// Add a HAVING condition. All conditions are ANDed.
    pub fn having(mut self, condition: impl Falseable) -> Self {
        self.having.extend(condition.into_expression());
        self
    }

    // ==================== Ordering ====================

    /// Append an ORDER BY term.
    pub fn order_by(
        mut self,
        expr: impl Into<Expression>,
        order: impl Into<Option<Order>>,
        nulls: impl Into<Option<Nulls>>,
    ) -> Self {
        self.order_by.push(OrderBy {
            expression: expr.into(),
            order: order.into(),
            nulls: nulls.into(),
        });
        self
    }

    /// Append `expr ASC`.
    pub fn order_by_asc(self, expr: impl Into<Expression>) -> Self {
        self.order_by(expr, Order::Asc, None::<Nulls>)
    }

    /// Append `expr DESC`.
    pub fn order_by_desc(self, expr: impl Into<Expression>) -> Self {
        self.order_by(expr, Order::Desc, None::<Nulls>)
    }

    // ==================== Pagination ====================

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
}

impl SqlQb for SelectQb {
    fn operations(&self) -> Vec<Operation> {
        let mut out = vec![Operation::literal("SELECT ")];
        if self.distinct {
            out.push(Operation::literal("DISTINCT "));
        }

        let columns = self.clauses.columns_list();
        if columns.is_empty() {
            out.push(Operation::literal("TRUE"));
        } else {
            out.extend(columns);
        }
        out.push(Operation::literal(" "));

        self.clauses.write_from(&mut out);
        self.clauses.write_joins(&mut out);
        self.clauses.write_where(&mut out);
        write_list("GROUP BY ", &self.group_by, &mut out);
        write_conjunction("HAVING ", &self.having, &mut out);
        write_order_by(&self.order_by, &mut out);
        self.clauses.write_limit_offset(&mut out);
        out
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }
}
