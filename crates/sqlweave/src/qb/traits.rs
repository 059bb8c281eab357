//! Trait definitions for statement builders.

use crate::qb::case::CaseQb;
use crate::qb::conflict::ConflictQb;
use crate::qb::delete::DeleteQb;
use crate::qb::expr::Expression;
use crate::qb::falseable::Falseable;
use crate::qb::insert::InsertQb;
use crate::qb::operation::Operation;
use crate::qb::param::{BuiltQuery, bind};
use crate::qb::select::SelectQb;
use crate::qb::set_operation::SetOperationQb;
use crate::qb::update::UpdateQb;
use std::fmt;

/// Kind of statement a builder produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Case,
    Conflict,
    SetOperation,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
            StatementKind::Case => "case",
            StatementKind::Conflict => "conflict",
            StatementKind::SetOperation => "set_operation",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base trait for all statement builders.
pub trait SqlQb {
    /// Assemble the clauses into one operation stream.
    fn operations(&self) -> Vec<Operation>;

    /// Kind of statement this builder produces.
    fn kind(&self) -> StatementKind;

    /// Build the SQL text and its parameter list.
    fn build(&self) -> BuiltQuery {
        let built = bind(&self.operations());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlweave.sql",
            kind = %self.kind(),
            param_count = built.parameters.len(),
            sql = %built.query,
            "built statement"
        );

        built
    }

    /// Debug helper to get the SQL string.
    fn to_sql(&self) -> String {
        self.build().query
    }

    /// Build and emit the SQL through a configured hook.
    #[cfg(feature = "tracing")]
    fn build_traced(&self, hook: &crate::trace::TracingSqlHook) -> BuiltQuery {
        let built = bind(&self.operations());
        hook.emit(self.kind(), &built);
        built
    }

    /// Apply `then` only when `condition` holds.
    ///
    /// ```
    /// use sqlweave::qb::{value, SqlQb};
    ///
    /// let admin = false;
    /// let qb = sqlweave::qb::SelectQb::new()
    ///     .conditional(admin, |qb| qb.where_(value(true)));
    /// assert_eq!(qb.to_sql(), "SELECT TRUE");
    /// ```
    fn conditional(self, condition: bool, then: impl FnOnce(Self) -> Self) -> Self
    where
        Self: Sized,
    {
        if condition { then(self) } else { self }
    }
}

/// Any builder, for positions that take a nested statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Select(SelectQb),
    Insert(InsertQb),
    Update(UpdateQb),
    Delete(DeleteQb),
    Case(CaseQb),
    Conflict(ConflictQb),
    SetOperation(SetOperationQb),
}

impl SqlQb for Statement {
    fn operations(&self) -> Vec<Operation> {
        match self {
            Statement::Select(qb) => qb.operations(),
            Statement::Insert(qb) => qb.operations(),
            Statement::Update(qb) => qb.operations(),
            Statement::Delete(qb) => qb.operations(),
            Statement::Case(qb) => qb.operations(),
            Statement::Conflict(qb) => qb.operations(),
            Statement::SetOperation(qb) => qb.operations(),
        }
    }

    fn kind(&self) -> StatementKind {
        match self {
            Statement::Select(_) => StatementKind::Select,
            Statement::Insert(_) => StatementKind::Insert,
            Statement::Update(_) => StatementKind::Update,
            Statement::Delete(_) => StatementKind::Delete,
            Statement::Case(_) => StatementKind::Case,
            Statement::Conflict(_) => StatementKind::Conflict,
            Statement::SetOperation(_) => StatementKind::SetOperation,
        }
    }
}

impl Falseable for Statement {
    fn into_expression(self) -> Option<Expression> {
        Some(self.into())
    }
}

macro_rules! builder_conversions {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Statement {
                fn from(qb: $ty) -> Self {
                    Statement::$variant(qb)
                }
            }

            impl From<$ty> for Expression {
                fn from(qb: $ty) -> Self {
                    Expression::Statement(Box::new(Statement::$variant(qb)))
                }
            }

            impl Falseable for $ty {
                fn into_expression(self) -> Option<Expression> {
                    Some(self.into())
                }
            }
        )*
    };
}

builder_conversions! {
    Select => SelectQb,
    Insert => InsertQb,
    Update => UpdateQb,
    Delete => DeleteQb,
    Case => CaseQb,
    Conflict => ConflictQb,
    SetOperation => SetOperationQb,
}
