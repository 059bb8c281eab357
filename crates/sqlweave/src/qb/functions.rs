//! Built-in SQL function catalogue.
//!
//! [`call`] checks the argument count against the catalogue before building
//! the expression. [`custom_call`] skips the check for user-defined or
//! extension functions.
//!
//! ```
//! use sqlweave::qb::{call, SqlFunction};
//! use sqlweave::qb::SqlQb;
//!
//! let lower = call(SqlFunction::Lower, ["name"]).unwrap();
//! assert_eq!(sqlweave::qb::select([lower]).to_sql(), "SELECT LOWER(`name`)");
//!
//! let err = call(SqlFunction::Lower, ["a", "b"]).unwrap_err();
//! assert!(err.is_arity());
//! ```

use crate::error::{SqlError, SqlResult};
use crate::qb::expr::Expression;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Accepted argument count of a function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    /// `None` means variadic.
    pub max: Option<usize>,
}

impl Arity {
    /// Whether `count` arguments are accepted.
    pub fn accepts(self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

macro_rules! sql_functions {
    ($( $variant:ident => $name:literal, $min:literal, $max:expr; )*) => {
        /// A function from the built-in catalogue.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum SqlFunction {
            $( $variant, )*
        }

        impl SqlFunction {
            /// Every catalogued function.
            pub const ALL: &'static [SqlFunction] = &[ $( SqlFunction::$variant, )* ];

            /// Canonical SQL name.
            pub const fn name(self) -> &'static str {
                match self {
                    $( SqlFunction::$variant => $name, )*
                }
            }

            /// Accepted argument count.
            pub const fn arity(self) -> Arity {
                match self {
                    $( SqlFunction::$variant => Arity { min: $min, max: $max }, )*
                }
            }
        }
    };
}

sql_functions! {
    // Core scalar functions
    Abs => "ABS", 1, Some(1);
    Changes => "CHANGES", 0, Some(0);
    Char => "CHAR", 0, None;
    Coalesce => "COALESCE", 0, None;
    Concat => "CONCAT", 0, None;
    ConcatWs => "CONCAT_WS", 1, None;
    Format => "FORMAT", 1, None;
    Glob => "GLOB", 2, Some(2);
    Hex => "HEX", 1, Some(1);
    If => "IF", 0, None;
    Ifnull => "IFNULL", 2, Some(2);
    Iif => "IIF", 0, None;
    Instr => "INSTR", 2, Some(2);
    LastInsertRowid => "LAST_INSERT_ROWID", 0, Some(0);
    Length => "LENGTH", 1, Some(1);
    Like => "LIKE", 2, Some(3);
    Likelihood => "LIKELIHOOD", 2, Some(2);
    Likely => "LIKELY", 1, Some(1);
    LoadExtension => "LOAD_EXTENSION", 1, Some(2);
    Lower => "LOWER", 1, Some(1);
    Ltrim => "LTRIM", 1, Some(2);
    Max => "MAX", 1, None;
    Min => "MIN", 1, None;
    Nullif => "NULLIF", 2, Some(2);
    OctetLength => "OCTET_LENGTH", 1, Some(1);
    Printf => "PRINTF", 0, None;
    Quote => "QUOTE", 1, Some(1);
    Random => "RANDOM", 0, Some(0);
    Randomblob => "RANDOMBLOB", 1, Some(1);
    Replace => "REPLACE", 3, Some(3);
    Round => "ROUND", 1, Some(2);
    Rtrim => "RTRIM", 1, Some(2);
    Sign => "SIGN", 1, Some(1);
    Soundex => "SOUNDEX", 1, Some(1);
    SqliteCompileoptionGet => "SQLITE_COMPILEOPTION_GET", 1, Some(1);
    SqliteCompileoptionUsed => "SQLITE_COMPILEOPTION_USED", 1, Some(1);
    SqliteOffset => "SQLITE_OFFSET", 1, Some(1);
    SqliteSourceId => "SQLITE_SOURCE_ID", 0, Some(0);
    SqliteVersion => "SQLITE_VERSION", 0, Some(0);
    Substr => "SUBSTR", 2, Some(3);
    Substring => "SUBSTRING", 2, Some(3);
    TotalChanges => "TOTAL_CHANGES", 0, Some(0);
    Trim => "TRIM", 1, Some(2);
    Typeof => "TYPEOF", 1, Some(1);
    Unhex => "UNHEX", 1, Some(2);
    Unicode => "UNICODE", 1, Some(1);
    Unistr => "UNISTR", 1, Some(1);
    UnistrQuote => "UNISTR_QUOTE", 1, Some(1);
    Unlikely => "UNLIKELY", 1, Some(1);
    Upper => "UPPER", 1, Some(1);
    Zeroblob => "ZEROBLOB", 1, Some(1);

    // Math functions
    Acos => "ACOS", 1, Some(1);
    Acosh => "ACOSH", 1, Some(1);
    Asin => "ASIN", 1, Some(1);
    Asinh => "ASINH", 1, Some(1);
    Atan => "ATAN", 1, Some(1);
    Atan2 => "ATAN2", 2, Some(2);
    Atanh => "ATANH", 1, Some(1);
    Ceil => "CEIL", 1, Some(1);
    Ceiling => "CEILING", 1, Some(1);
    Cos => "COS", 1, Some(1);
    Cosh => "COSH", 1, Some(1);
    Degrees => "DEGREES", 1, Some(1);
    Exp => "EXP", 1, Some(1);
    Floor => "FLOOR", 1, Some(1);
    Ln => "LN", 1, Some(1);
    Log => "LOG", 1, Some(2);
    Log10 => "LOG10", 1, Some(1);
    Log2 => "LOG2", 1, Some(1);
    Mod => "MOD", 2, Some(2);
    Pi => "PI", 0, Some(0);
    Pow => "POW", 2, Some(2);
    Power => "POWER", 2, Some(2);
    Radians => "RADIANS", 1, Some(1);
    Sin => "SIN", 1, Some(1);
    Sinh => "SINH", 1, Some(1);
    Sqrt => "SQRT", 1, Some(1);
    Tan => "TAN", 1, Some(1);
    Tanh => "TANH", 1, Some(1);
    Trunc => "TRUNC", 1, Some(1);

    // Date and time functions
    Date => "DATE", 0, None;
    Datetime => "DATETIME", 0, None;
    Julianday => "JULIANDAY", 0, None;
    Strftime => "STRFTIME", 1, None;
    Time => "TIME", 0, None;
    Timediff => "TIMEDIFF", 2, Some(2);
    UnixEpoch => "UNIXEPOCH", 0, None;

    // JSON functions
    Json => "JSON", 1, Some(1);
    Jsonb => "JSONB", 1, Some(1);
    JsonArray => "JSON_ARRAY", 0, None;
    JsonbArray => "JSONB_ARRAY", 0, None;
    JsonArrayLength => "JSON_ARRAY_LENGTH", 1, Some(2);
    JsonErrorPosition => "JSON_ERROR_POSITION", 1, Some(1);
    JsonExtract => "JSON_EXTRACT", 1, None;
    JsonbExtract => "JSONB_EXTRACT", 1, None;
    JsonInsert => "JSON_INSERT", 2, None;
    JsonbInsert => "JSONB_INSERT", 2, None;
    JsonObject => "JSON_OBJECT", 0, None;
    JsonbObject => "JSONB_OBJECT", 0, None;
    JsonPatch => "JSON_PATCH", 2, Some(2);
    JsonbPatch => "JSONB_PATCH", 2, Some(2);
    JsonPretty => "JSON_PRETTY", 1, Some(1);
    JsonQuote => "JSON_QUOTE", 1, Some(1);
    JsonRemove => "JSON_REMOVE", 1, None;
    JsonbRemove => "JSONB_REMOVE", 1, None;
    JsonReplace => "JSON_REPLACE", 1, None;
    JsonbReplace => "JSONB_REPLACE", 1, None;
    JsonSet => "JSON_SET", 1, None;
    JsonbSet => "JSONB_SET", 1, None;
    JsonType => "JSON_TYPE", 1, Some(2);
    JsonValid => "JSON_VALID", 1, Some(2);
    JsonGroupArray => "JSON_GROUP_ARRAY", 1, Some(1);
    JsonbGroupArray => "JSONB_GROUP_ARRAY", 1, Some(1);
    JsonGroupObject => "JSON_GROUP_OBJECT", 2, Some(2);
    JsonbGroupObject => "JSONB_GROUP_OBJECT", 2, Some(2);
    JsonEach => "JSON_EACH", 1, Some(2);
    JsonTree => "JSON_TREE", 1, Some(2);

    // Aggregate functions
    Avg => "AVG", 1, Some(1);
    Count => "COUNT", 0, Some(1);
    GroupConcat => "GROUP_CONCAT", 1, Some(2);
    StringAgg => "STRING_AGG", 1, Some(2);
    Sum => "SUM", 1, Some(1);
    Total => "TOTAL", 1, Some(1);
}

impl SqlFunction {
    /// Build a checked call to this function.
    pub fn call<I, T>(self, arguments: I) -> SqlResult<Expression>
    where
        I: IntoIterator<Item = T>,
        T: Into<Expression>,
    {
        call(self, arguments)
    }
}

impl fmt::Display for SqlFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SqlFunction {
    type Err = SqlError;

    /// Look up a function by name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SqlFunction::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SqlError::unknown_function(s))
    }
}

/// Call a catalogued function, checking the argument count.
pub fn call<I, T>(function: SqlFunction, arguments: I) -> SqlResult<Expression>
where
    I: IntoIterator<Item = T>,
    T: Into<Expression>,
{
    let arguments: Vec<Expression> = arguments.into_iter().map(Into::into).collect();
    let arity = function.arity();
    if !arity.accepts(arguments.len()) {
        return Err(SqlError::arity(
            function.name(),
            arity.min,
            arity.max,
            arguments.len(),
        ));
    }
    Ok(Expression::Call {
        name: Cow::Borrowed(function.name()),
        arguments,
    })
}

/// Call any function by name without checking arguments.
pub fn custom_call<I, T>(name: impl Into<Cow<'static, str>>, arguments: I) -> Expression
where
    I: IntoIterator<Item = T>,
    T: Into<Expression>,
{
    Expression::Call {
        name: name.into(),
        arguments: arguments.into_iter().map(Into::into).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qb::expr::value;
    use crate::qb::param::bind;
    use crate::qb::render::render;

    fn no_args() -> Vec<Expression> {
        Vec::new()
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = SqlFunction::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("json_quote".parse::<SqlFunction>(), Ok(SqlFunction::JsonQuote));
        assert_eq!("UnixEpoch".parse::<SqlFunction>(), Ok(SqlFunction::UnixEpoch));
        let err = "nope".parse::<SqlFunction>().unwrap_err();
        assert!(err.is_unknown_function());
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(SqlFunction::LastInsertRowid.to_string(), "LAST_INSERT_ROWID");
    }

    #[test]
    fn zero_arguments_still_render_parens() {
        let expr = call(SqlFunction::UnixEpoch, no_args()).unwrap();
        assert_eq!(bind(&render(&expr)).query, "UNIXEPOCH()");
    }

    #[test]
    fn arity_is_checked() {
        assert!(call(SqlFunction::Abs, no_args()).unwrap_err().is_arity());
        assert!(call(SqlFunction::Replace, ["a", "b"]).is_err());
        assert!(call(SqlFunction::Count, no_args()).is_ok());
        assert!(call(SqlFunction::Count, ["*"]).is_ok());
        assert!(call(SqlFunction::Count, ["a", "b"]).is_err());
        assert!(call(SqlFunction::JsonInsert, ["a"]).is_err());
        assert!(call(SqlFunction::Coalesce, ["a", "b", "c", "d"]).is_ok());
    }

    #[test]
    fn arguments_join_with_commas() {
        let expr = call(
            SqlFunction::JsonInsert,
            [value("{}"), value("$[#]"), value(123)],
        )
        .unwrap();
        let built = bind(&render(&expr));
        assert_eq!(built.query, "JSON_INSERT(?1, ?2, ?3)");
        assert_eq!(built.parameters.len(), 3);
    }

    #[test]
    fn custom_call_is_unchecked() {
        let expr = custom_call("XYZ", no_args());
        assert_eq!(bind(&render(&expr)).query, "XYZ()");
    }
}
