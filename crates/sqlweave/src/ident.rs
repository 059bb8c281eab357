//! SQL identifier handling.
//!
//! This module provides [`Ident`] which represents a SQL identifier (table/column),
//! supporting dotted notation and the `*` wildcard.
//!
//! Identifiers are delimited with backticks. Delimiter and escape characters
//! (`` ` `` and `\`) inside a name are stripped rather than escaped, so a name
//! that arrives already delimited is normalized instead of double-quoted.
//!
//! # Example
//! ```
//! use sqlweave::Ident;
//!
//! assert_eq!(Ident::parse("users.id").to_sql(), "`users`.`id`");
//! assert_eq!(Ident::parse("users.").to_sql(), "`users`.*");
//! assert_eq!(Ident::parse("`users`").to_sql(), "`users`");
//! ```

/// Identifier delimiter of the target dialect.
pub const QUOTE: char = '`';

/// A part of a SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentPart {
    /// `*`
    Wildcard,
    /// A delimited name, already stripped of delimiter characters.
    Name(String),
}

/// A SQL identifier (table or column name, possibly qualified).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

impl Ident {
    /// Parse an identifier string.
    ///
    /// - `*` is the wildcard
    /// - `table.column` splits at the first dot; the right side is parsed again
    /// - `table.` and `table.*` select every column of `table`
    pub fn parse(s: &str) -> Self {
        let mut parts = Vec::new();
        let mut rest = s;

        loop {
            if rest == "*" {
                parts.push(IdentPart::Wildcard);
                break;
            }

            match rest.split_once('.') {
                Some((left, right)) => {
                    parts.push(IdentPart::Name(strip_delimiters(left)));
                    if right.is_empty() {
                        parts.push(IdentPart::Wildcard);
                        break;
                    }
                    rest = right;
                }
                None => {
                    parts.push(IdentPart::Name(strip_delimiters(rest)));
                    break;
                }
            }
        }

        Self { parts }
    }

    /// Whether this identifier is the bare `*` wildcard.
    pub fn is_wildcard(&self) -> bool {
        matches!(self.parts.as_slice(), [IdentPart::Wildcard])
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        let mut cap = self.parts.len().saturating_sub(1);
        for part in &self.parts {
            match part {
                IdentPart::Wildcard => cap += 1,
                IdentPart::Name(s) => cap += s.len() + 2,
            }
        }
        let mut out = String::with_capacity(cap);
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Wildcard => out.push('*'),
                IdentPart::Name(s) => {
                    out.push(QUOTE);
                    out.push_str(s);
                    out.push(QUOTE);
                }
            }
        }
    }
}

fn strip_delimiters(name: &str) -> String {
    name.chars().filter(|&c| c != QUOTE && c != '\\').collect()
}
