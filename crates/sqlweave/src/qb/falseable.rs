//! Optional builder input.
//!
//! Builder methods accept anything [`Falseable`]: a plain expression-like
//! value is always present, an `Option` is omitted when `None`. This lets
//! callers write conditional pieces inline:
//!
//! ```
//! use sqlweave::qb::{eq, value, SqlQb};
//!
//! let name: Option<&str> = None;
//! let qb = sqlweave::qb::select(["id"])
//!     .from("users")
//!     .where_(name.map(|n| eq("name", value(n))));
//! assert_eq!(qb.to_sql(), "SELECT `id` FROM `users`");
//! ```

use crate::ident::Ident;
use crate::qb::expr::Expression;
use crate::qb::param::{StaticValue, Value};

/// Input that may be omitted.
pub trait Falseable {
    /// Whether this input is the omitted sentinel.
    fn is_omitted(&self) -> bool {
        false
    }

    /// Convert into an expression, or `None` when omitted.
    fn into_expression(self) -> Option<Expression>;
}

/// Whether `input` is omitted.
pub fn is_omitted<T: Falseable + ?Sized>(input: &T) -> bool {
    input.is_omitted()
}

impl<T: Into<Expression>> Falseable for Option<T> {
    fn is_omitted(&self) -> bool {
        self.is_none()
    }

    fn into_expression(self) -> Option<Expression> {
        self.map(Into::into)
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(impl Falseable for $ty {
            fn into_expression(self) -> Option<Expression> {
                Some(self.into())
            }
        })*
    };
}

always_present!(Expression, &str, String, &String, Ident, Value, StaticValue);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qb::expr::value;

    #[test]
    fn none_is_omitted() {
        assert!(is_omitted(&None::<Expression>));
        assert!(None::<&str>.into_expression().is_none());
    }

    #[test]
    fn present_values_are_kept() {
        assert!(!is_omitted(&"test"));
        assert!(!is_omitted(&Some(value(0))));
        assert_eq!(Some("a").into_expression(), Some(Expression::from("a")));
    }

    #[test]
    fn falsy_values_are_still_present() {
        // Only `None` omits; a bound `false` or empty string is real input.
        assert!(!is_omitted(&value(false)));
        assert!(!is_omitted(&value("")));
    }
}
