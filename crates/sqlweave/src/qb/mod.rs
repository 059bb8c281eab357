//! Statement builders and the expression renderer.
//!
//! Statements are composed from [`Expression`] trees. Builders collect clause
//! state through chained calls and render it in one pass; parameters are bound
//! only in [`SqlQb::build`].
//!
//! # Conventions
//!
//! - Strings passed where an expression is expected are identifiers
//!   (`"users.id"` renders as `` `users`.`id` ``). Use [`value`] for bound
//!   parameters and [`static_value`] for inlined literals.
//! - Any argument accepting [`Falseable`] input may be `None`; it is dropped
//!   before it reaches the builder state.
//! - Equal values share one placeholder: `?1` is reused for every occurrence.
//!
//! # Usage
//!
//! ```
//! use sqlweave::qb::{self, SqlQb, eq, excluded, value};
//!
//! let built = qb::select(["id", "name"])
//!     .from("users")
//!     .where_(eq("status", value("active")))
//!     .order_by_desc("created_at")
//!     .limit(20)
//!     .build();
//! assert_eq!(
//!     built.query,
//!     "SELECT `id`, `name` FROM `users` WHERE `status` = ?1 ORDER BY `created_at` DESC LIMIT 20"
//! );
//!
//! let upsert = qb::insert("users", ["email", "name"])
//!     .values([value("a@b.c"), value("Alice")])
//!     .on_conflict(qb::conflict(["email"], None::<qb::Expression>).set("name", excluded("name")))
//!     .to_sql();
//! assert_eq!(
//!     upsert,
//!     "INSERT INTO `users` (`email`, `name`) VALUES (?1, ?2) ON CONFLICT (`email`) DO UPDATE SET `name` = `excluded`.`name`"
//! );
//! ```

mod case;
mod clauses;
mod conflict;
mod delete;
mod expr;
mod falseable;
pub mod functions;
mod insert;
mod operation;
mod param;
mod render;
mod select;
mod set_operation;
mod traits;
mod update;


pub use case::CaseQb;
pub use clauses::{Bound, Join, JoinKind, Nulls, Order, OrderBy};
pub use conflict::ConflictQb;
pub use delete::DeleteQb;
pub use expr::{
    CastType, Collation, CompareOp, Expression, LogicalOp, MathOp, aliased, and, and_with_parens,
    between, cast, collate, div, eq, excluded, exists, gt, gte, identifier, is_not_null, is_null,
    json_static_value, json_static_value_nullable, json_value, json_value_nullable, lt, lte,
    modulo, mul, neq, not, not_between, op, or, pow, raw, static_value, sub, subquery, sum,
    try_json_value, value,
};
pub use falseable::{Falseable, is_omitted};
pub use functions::{Arity, SqlFunction, call, custom_call};
pub use insert::{InsertOr, InsertQb};
pub use operation::{Operation, join};
pub use param::{BuiltQuery, ParamList, StaticValue, Value, bind};
pub use render::render;
pub use select::SelectQb;
pub use set_operation::{SetOperationQb, SetOperator};
pub use traits::{SqlQb, Statement, StatementKind};
pub use update::UpdateQb;

/// Create a SELECT builder with the given columns.
///
/// Pass an empty list to select `TRUE`.
pub fn select<I, C>(columns: I) -> SelectQb
where
    I: IntoIterator<Item = C>,
    C: Falseable,
{
    SelectQb::new().select(columns)
}

/// Create an INSERT builder for `table` with the given target columns.
pub fn insert<I, C>(table: impl Into<Expression>, columns: I) -> InsertQb
where
    I: IntoIterator<Item = C>,
    C: Falseable,
{
    InsertQb::new(table).columns(columns)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: impl Into<Expression>) -> UpdateQb {
    UpdateQb::new(table)
}

/// Create a DELETE builder for the given table.
pub fn delete(table: impl Into<Expression>) -> DeleteQb {
    DeleteQb::new(table)
}

/// Create a CASE builder. Pass `None` for a searched CASE.
///
/// # Example
/// ```
/// use sqlweave::qb::{case, static_value, value, SqlQb};
///
/// let qb = case("level").when(value(1), static_value("low")).else_(static_value("high"));
/// assert_eq!(qb.to_sql(), r#"CASE `level` WHEN ?1 THEN "low" ELSE "high" END"#);
/// ```
pub fn case(subject: impl Falseable) -> CaseQb {
    CaseQb::with_subject(subject)
}

/// Create an ON CONFLICT clause for `columns`, optionally restricted by a
/// target condition.
pub fn conflict<I, C>(columns: I, target: impl Falseable) -> ConflictQb
where
    I: IntoIterator<Item = C>,
    C: Falseable,
{
    ConflictQb::new().columns(columns).target_where(target)
}

/// `a UNION b UNION ...`
pub fn union<I, S>(statements: I) -> SetOperationQb
where
    I: IntoIterator<Item = S>,
    S: Into<Statement>,
{
    SetOperationQb::new(SetOperator::Union, statements)
}

/// `a UNION ALL b UNION ALL ...`
pub fn union_all<I, S>(statements: I) -> SetOperationQb
where
    I: IntoIterator<Item = S>,
    S: Into<Statement>,
{
    SetOperationQb::new(SetOperator::UnionAll, statements)
}

/// `a INTERSECT b INTERSECT ...`
pub fn intersect<I, S>(statements: I) -> SetOperationQb
where
    I: IntoIterator<Item = S>,
    S: Into<Statement>,
{
    SetOperationQb::new(SetOperator::Intersect, statements)
}

/// `a EXCEPT b EXCEPT ...`
pub fn except<I, S>(statements: I) -> SetOperationQb
where
    I: IntoIterator<Item = S>,
    S: Into<Statement>,
{
    SetOperationQb::new(SetOperator::Except, statements)
}
