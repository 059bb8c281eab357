//! # sqlweave
//!
//! Compose SQL statements as expression trees and render them to
//! parameterized SQL.
//!
//! ## Features
//!
//! - **Expressions as data**: one closed [`Expression`](qb::Expression) enum, rendered by an exhaustive match
//! - **Optional input**: pass `None` anywhere a column, table or condition is accepted and it is dropped
//! - **Deduplicated parameters**: equal values share one `?N` placeholder
//! - **Correct grouping**: AND/OR groups and arithmetic are parenthesized only when needed
//! - **Statement logging**: built SQL is reported through `tracing` (feature `tracing`)
//!
//! ## Query Builder (qb)
//!
//! ```
//! use sqlweave::qb::{self, SqlQb, and, eq, gt, or, value};
//!
//! let built = qb::select(["id"])
//!     .from("users")
//!     .where_(or([eq("role", value("admin")), gt("karma", value(100))]))
//!     .where_(and([Some(eq("active", value(true))), None]))
//!     .build();
//!
//! assert_eq!(
//!     built.query,
//!     "SELECT `id` FROM `users` WHERE (`role` = ?1 OR `karma` > ?2) AND `active` = ?3"
//! );
//! assert_eq!(built.parameters.len(), 3);
//! ```

pub mod error;
pub mod ident;
pub mod prelude;
pub mod qb;

#[cfg(feature = "tracing")]
pub mod trace;

pub use error::{SqlError, SqlResult};
pub use ident::Ident;

// Re-export qb entry points for easy access
pub use qb::{
    BuiltQuery, CaseQb, ConflictQb, DeleteQb, Expression, InsertQb, SelectQb, SetOperationQb,
    SqlQb, Statement, UpdateQb, Value, case, conflict, delete, except, insert, intersect, select,
    union, union_all, update,
};

#[cfg(feature = "tracing")]
pub use trace::TracingSqlHook;
