//! Glob-importable set of builders and expression constructors.
//!
//! ```
//! use sqlweave::prelude::*;
//!
//! let sql = select(["*"]).from("users").where_(is_null("deleted_at")).to_sql();
//! assert_eq!(sql, "SELECT * FROM `users` WHERE `deleted_at` IS NULL");
//! ```

pub use crate::error::{SqlError, SqlResult};
pub use crate::qb::{
    BuiltQuery, CastType, Collation, Expression, Falseable, InsertOr, Nulls, Order, SqlFunction,
    SqlQb, StaticValue, Statement, Value, and, and_with_parens, between, call, case, cast,
    collate, conflict, custom_call, delete, eq, except, excluded, exists, gt, gte, insert,
    intersect, is_not_null, is_null, json_value, lt, lte, neq, not, not_between, or, raw, select,
    static_value, subquery, union, union_all, update, value,
};
