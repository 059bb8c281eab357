//! `tracing` output for built statements.

use crate::qb::{BuiltQuery, StatementKind};
use tracing::Level;

/// Emits built SQL as a `tracing` event at a configurable level.
///
/// [`SqlQb::build`](crate::qb::SqlQb::build) always logs at `TRACE`; pass a
/// hook to [`SqlQb::build_traced`](crate::qb::SqlQb::build_traced) to log at
/// another level or with different truncation.
///
/// Enable via the crate feature: `sqlweave = { features = ["tracing"] }`.
#[derive(Debug, Clone)]
pub struct TracingSqlHook {
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes, on a char boundary). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for TracingSqlHook {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }
}

impl TracingSqlHook {
    /// Create a new hook with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracing event level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    pub(crate) fn truncate_sql(&self, sql: &str) -> String {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }

    /// Emit one event describing `built`.
    pub fn emit(&self, kind: StatementKind, built: &BuiltQuery) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = self.truncate_sql(&built.query);
        emit_at_level!(
            self.level,
            target: "sqlweave.sql",
            kind = %kind,
            param_count = built.parameters.len(),
            sql = %sql,
        );
    }
}

fn truncate_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
