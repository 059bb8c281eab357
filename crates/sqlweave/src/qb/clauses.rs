//! Clause state shared by the statement builders.
//!
//! Every clause writer appends its keyword, its body and one trailing space,
//! and writes nothing at all when the clause is empty.

use crate::ident::Ident;
use crate::qb::expr::Expression;
use crate::qb::falseable::Falseable;
use crate::qb::operation::{Operation, join};
use crate::qb::render::{render, render_group};

/// LIMIT / OFFSET value.
///
/// Counts of zero or less are treated as absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Bound {
    #[default]
    Omitted,
    Count(u64),
    Expr(Expression),
}

macro_rules! bound_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Bound {
            fn from(n: $ty) -> Self {
                match u64::try_from(n) {
                    Ok(0) | Err(_) => Bound::Omitted,
                    Ok(n) => Bound::Count(n),
                }
            }
        })*
    };
}

bound_from_signed!(i32, i64, u32, u64, usize);

impl From<Expression> for Bound {
    fn from(expr: Expression) -> Self {
        Bound::Expr(expr)
    }
}

impl<T: Into<Bound>> From<Option<T>> for Bound {
    fn from(bound: Option<T>) -> Self {
        bound.map_or(Bound::Omitted, Into::into)
    }
}

impl Bound {
    fn write(&self, keyword: &'static str, out: &mut Vec<Operation>) {
        match self {
            Bound::Omitted | Bound::Count(0) => {}
            Bound::Count(n) => {
                out.push(Operation::literal(keyword));
                out.push(Operation::literal(n.to_string()));
                out.push(Operation::literal(" "));
            }
            Bound::Expr(expr) => {
                out.push(Operation::literal(keyword));
                out.extend(render(expr));
                out.push(Operation::literal(" "));
            }
        }
    }
}

/// Join flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
}

impl JoinKind {
    fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN ",
            JoinKind::Left => "LEFT JOIN ",
        }
    }
}

/// `INNER JOIN table AS alias ON ...`
#[derive(Clone, Debug, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: Expression,
    pub alias: Ident,
    pub conditions: Vec<Expression>,
}

impl Join {
    pub(crate) fn new<I, C>(kind: JoinKind, table: impl Into<Expression>, alias: &str, conditions: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Falseable,
    {
        Self {
            kind,
            table: table.into(),
            alias: Ident::parse(alias),
            conditions: conditions
                .into_iter()
                .filter_map(Falseable::into_expression)
                .collect(),
        }
    }

    fn write(&self, out: &mut Vec<Operation>) {
        out.push(Operation::literal(self.kind.keyword()));
        out.extend(render(&self.table));
        out.push(Operation::literal(" AS "));
        out.push(Operation::literal(self.alias.to_sql()));

        let on = render_group(&self.conditions, " AND ", None);
        if !on.is_empty() {
            out.push(Operation::literal(" ON "));
            out.extend(on);
        }
        out.push(Operation::literal(" "));
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    Asc,
    Desc,
}

/// Placement of NULLs in a sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nulls {
    First,
    Last,
}

/// One ORDER BY term.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderBy {
    pub expression: Expression,
    pub order: Option<Order>,
    pub nulls: Option<Nulls>,
}

impl OrderBy {
    fn operations(&self) -> Vec<Operation> {
        let mut ops = render(&self.expression);
        match self.order {
            Some(Order::Asc) => ops.push(Operation::literal(" ASC")),
            Some(Order::Desc) => ops.push(Operation::literal(" DESC")),
            None => {}
        }
        match self.nulls {
            Some(Nulls::First) => ops.push(Operation::literal(" NULLS FIRST")),
            Some(Nulls::Last) => ops.push(Operation::literal(" NULLS LAST")),
            None => {}
        }
        ops
    }
}

/// Accumulated clause state.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Clauses {
    pub(crate) columns: Vec<Expression>,
    pub(crate) tables: Vec<Expression>,
    pub(crate) joins: Vec<Join>,
    pub(crate) sets: Vec<Expression>,
    pub(crate) wheres: Vec<Expression>,
    pub(crate) values: Vec<Vec<Expression>>,
    pub(crate) limit: Bound,
    pub(crate) offset: Bound,
    pub(crate) returning: Vec<Expression>,
}

impl Clauses {
    // ==================== Accumulation ====================

    pub(crate) fn push_column(&mut self, column: impl Falseable) {
        self.columns.extend(column.into_expression());
    }

    pub(crate) fn push_column_aliased(&mut self, column: impl Falseable, alias: &str) {
        if let Some(expr) = column.into_expression() {
            self.columns.push(Expression::Aliased {
                expression: Box::new(expr),
                alias: Some(Ident::parse(alias)),
            });
        }
    }

    pub(crate) fn push_table(&mut self, table: impl Falseable) {
        self.tables.extend(table.into_expression());
    }

    pub(crate) fn push_table_aliased(&mut self, table: impl Falseable, alias: &str) {
        if let Some(expr) = table.into_expression() {
            self.tables.push(Expression::Aliased {
                expression: Box::new(expr),
                alias: Some(Ident::parse(alias)),
            });
        }
    }

    pub(crate) fn push_where(&mut self, condition: impl Falseable) {
        self.wheres.extend(condition.into_expression());
    }

    pub(crate) fn push_set(&mut self, identifier: &str, expr: impl Into<Expression>) {
        self.sets.push(Expression::Set {
            identifier: Ident::parse(identifier),
            expression: Box::new(expr.into()),
        });
    }

    pub(crate) fn push_returning(&mut self, column: impl Falseable) {
        self.returning.extend(column.into_expression());
    }

    // ==================== Rendering ====================

    pub(crate) fn columns_list(&self) -> Vec<Operation> {
        list(&self.columns)
    }

    pub(crate) fn write_from(&self, out: &mut Vec<Operation>) {
        write_list("FROM ", &self.tables, out);
    }

    pub(crate) fn write_joins(&self, out: &mut Vec<Operation>) {
        for j in &self.joins {
            j.write(out);
        }
    }

    pub(crate) fn write_set(&self, out: &mut Vec<Operation>) {
        write_list("SET ", &self.sets, out);
    }

    pub(crate) fn write_where(&self, out: &mut Vec<Operation>) {
        write_conjunction("WHERE ", &self.wheres, out);
    }

    pub(crate) fn write_values(&self, out: &mut Vec<Operation>) {
        if self.values.is_empty() {
            return;
        }
        let rows = self.values.iter().map(|row| join(row.iter().map(render), ", ", true));
        out.push(Operation::literal("VALUES "));
        out.extend(join(rows, ", ", false));
        out.push(Operation::literal(" "));
    }

    pub(crate) fn write_limit_offset(&self, out: &mut Vec<Operation>) {
        self.limit.write("LIMIT ", out);
        self.offset.write("OFFSET ", out);
    }

    pub(crate) fn write_returning(&self, out: &mut Vec<Operation>) {
        write_list("RETURNING ", &self.returning, out);
    }
}

/// Render a comma separated list.
pub(crate) fn list(items: &[Expression]) -> Vec<Operation> {
    join(items.iter().map(render), ", ", false)
}

/// `KEYWORD a, b, c `, or nothing when the list renders empty.
pub(crate) fn write_list(keyword: &'static str, items: &[Expression], out: &mut Vec<Operation>) {
    let body = list(items);
    if !body.is_empty() {
        out.push(Operation::literal(keyword));
        out.extend(body);
        out.push(Operation::literal(" "));
    }
}

/// `KEYWORD a AND b `, without outer parentheses.
pub(crate) fn write_conjunction(keyword: &'static str, items: &[Expression], out: &mut Vec<Operation>) {
    let body = render_group(items, " AND ", Some(false));
    if !body.is_empty() {
        out.push(Operation::literal(keyword));
        out.extend(body);
        out.push(Operation::literal(" "));
    }
}

/// Render ORDER BY terms.
pub(crate) fn write_order_by(terms: &[OrderBy], out: &mut Vec<Operation>) {
    if terms.is_empty() {
        return;
    }
    out.push(Operation::literal("ORDER BY "));
    out.extend(join(terms.iter().map(OrderBy::operations), ", ", false));
    out.push(Operation::literal(" "));
}
