//! INSERT statement builder.

use crate::qb::clauses::Clauses;
use crate::qb::conflict::ConflictQb;
use crate::qb::expr::Expression;
use crate::qb::falseable::Falseable;
use crate::qb::operation::{Operation, join};
use crate::qb::traits::{SqlQb, StatementKind};

/// Constraint conflict resolution for `INSERT OR ...`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsertOr {
    Abort,
    Fail,
    Ignore,
    Replace,
    Rollback,
}

impl InsertOr {
    pub fn as_str(self) -> &'static str {
        match self {
            InsertOr::Abort => "ABORT",
            InsertOr::Fail => "FAIL",
            InsertOr::Ignore => "IGNORE",
            InsertOr::Replace => "REPLACE",
            InsertOr::Rollback => "ROLLBACK",
        }
    }
}

/// INSERT statement builder.
#[derive(Clone, Debug, PartialEq)]
pub struct InsertQb {
    clauses: Clauses,
    or_clause: Option<InsertOr>,
    conflicts: Vec<ConflictQb>,
}

impl InsertQb {
    /// Create a new INSERT builder for a table.
    pub fn new(table: impl Into<Expression>) -> Self {
        Self {
            clauses: Clauses {
                tables: vec![table.into()],
                ..Clauses::default()
            },
            or_clause: None,
            conflicts: Vec::new(),
        }
    }

    /// Append target columns. Omitted entries are skipped.
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

    /// Append one row of values.
    pub fn values<I, T>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Expression>,
    {
        self.clauses
            .values
            .push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Use `INSERT OR <action>`.
    pub fn or_clause(mut self, action: InsertOr) -> Self {
        self.or_clause = Some(action);
        self
    }

    /// Append an ON CONFLICT clause. `None` is ignored.
    pub fn on_conflict(mut self, conflict: impl Into<Option<ConflictQb>>) -> Self {
        self.conflicts.extend(conflict.into());
        self
    }

    /// Append `ON CONFLICT DO NOTHING`.
    pub fn on_conflict_ignore(self) -> Self {
        self.on_conflict(ConflictQb::new().do_nothing())
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

impl SqlQb for InsertQb {
    fn operations(&self) -> Vec<Operation> {
        let mut out = vec![Operation::literal("INSERT ")];
        if let Some(action) = self.or_clause {
            out.push(Operation::literal(format!("OR {} ", action.as_str())));
        }
        out.push(Operation::literal("INTO "));
        out.extend(self.clauses.tables.iter().flat_map(Expression::operations));
        out.push(Operation::literal(" "));

        let columns = self.clauses.columns_list();
        let has_columns = !columns.is_empty();
        if has_columns {
            out.extend(join([columns], "", true));
            out.push(Operation::literal(" "));
        }

        if self.clauses.values.is_empty() {
            if !has_columns {
                out.push(Operation::literal("DEFAULT VALUES "));
            }
        } else {
            self.clauses.write_values(&mut out);
        }

        for conflict in &self.conflicts {
            out.extend(conflict.operations());
        }

        self.clauses.write_returning(&mut out);
        out
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }
}
