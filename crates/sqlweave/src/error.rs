//! Error types for sqlweave

use thiserror::Error;

/// Result type alias for sqlweave operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while composing statements.
///
/// Rendering itself never fails: every expression shape is known at compile
/// time. These errors come from the checked entry points around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// A catalogued function was called with the wrong number of arguments
    #[error("{function}() takes {expected} argument(s), got {got}")]
    Arity {
        function: &'static str,
        expected: String,
        got: usize,
    },

    /// A function name that is not in the built-in catalogue
    #[error("Unknown SQL function: {0}")]
    UnknownFunction(String),

    /// A value could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SqlError {
    /// Create an arity error from the accepted range.
    pub fn arity(function: &'static str, min: usize, max: Option<usize>, got: usize) -> Self {
        let expected = match max {
            Some(max) if max == min => min.to_string(),
            Some(max) => format!("{min} to {max}"),
            None => format!("at least {min}"),
        };
        Self::Arity {
            function,
            expected,
            got,
        }
    }

    /// Create an unknown function error
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction(name.into())
    }

    /// Check if this is an arity error
    pub fn is_arity(&self) -> bool {
        matches!(self, Self::Arity { .. })
    }

    /// Check if this is an unknown function error
    pub fn is_unknown_function(&self) -> bool {
        matches!(self, Self::UnknownFunction(_))
    }
}

impl From<serde_json::Error> for SqlError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
