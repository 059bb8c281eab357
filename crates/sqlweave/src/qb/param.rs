//! Parameter values and the binding pass.
//!
//! [`Value`] is what ends up in the parameter list handed to a driver.
//! [`StaticValue`] is a literal that is inlined into the SQL text instead.
//! [`bind`] turns a rendered operation stream into a [`BuiltQuery`].

use crate::qb::operation::Operation;
use indexmap::IndexSet;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// A bindable parameter value.
///
/// Equality and hashing are by value so that identical parameters collapse
/// to one placeholder. Reals compare by canonical bit pattern: `0.0 == -0.0`
/// and every NaN equals every other NaN.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    /// Whether this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

fn canonical_bits(f: f64) -> u64 {
    if f == 0.0 {
        0
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Integer(i) => i.hash(state),
            Value::Real(f) => canonical_bits(*f).hash(state),
            Value::Text(s) => s.hash(state),
        }
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Integer(i64::from(v))
            }
        })*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Real(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

/// Booleans bind as `1` / `0`.
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A literal inlined into the SQL text (never parameterized).
#[derive(Debug, Clone, PartialEq)]
pub enum StaticValue {
    Null,
    Bool(bool),
    Integer(i64),
    BigInt(i128),
    Real(f64),
    Text(String),
}

impl StaticValue {
    /// Render as SQL literal text.
    pub fn to_sql(&self) -> String {
        match self {
            StaticValue::Null => "NULL".to_string(),
            StaticValue::Bool(true) => "TRUE".to_string(),
            StaticValue::Bool(false) => "FALSE".to_string(),
            StaticValue::Integer(i) => i.to_string(),
            StaticValue::BigInt(i) => i.to_string(),
            StaticValue::Real(f) => f.to_string(),
            StaticValue::Text(s) => quote_string(s),
        }
    }
}

/// Double-quote a string literal, doubling embedded quotes.
pub(crate) fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

macro_rules! static_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for StaticValue {
            fn from(v: $ty) -> Self {
                StaticValue::Integer(i64::from(v))
            }
        })*
    };
}

static_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for StaticValue {
    fn from(v: u64) -> Self {
        StaticValue::BigInt(i128::from(v))
    }
}

impl From<i128> for StaticValue {
    fn from(v: i128) -> Self {
        StaticValue::BigInt(v)
    }
}

impl From<f32> for StaticValue {
    fn from(v: f32) -> Self {
        StaticValue::Real(f64::from(v))
    }
}

impl From<f64> for StaticValue {
    fn from(v: f64) -> Self {
        StaticValue::Real(v)
    }
}

impl From<bool> for StaticValue {
    fn from(v: bool) -> Self {
        StaticValue::Bool(v)
    }
}

impl From<&str> for StaticValue {
    fn from(v: &str) -> Self {
        StaticValue::Text(v.to_string())
    }
}

impl From<String> for StaticValue {
    fn from(v: String) -> Self {
        StaticValue::Text(v)
    }
}

impl<T: Into<StaticValue>> From<Option<T>> for StaticValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(StaticValue::Null, Into::into)
    }
}

/// Parameters collected during binding, deduplicated by value.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    params: IndexSet<Value>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter and return its 1-based index.
    ///
    /// A value that is already present keeps its original index.
    pub fn push(&mut self, value: Value) -> usize {
        let (idx, _) = self.params.insert_full(value);
        idx + 1
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the distinct values in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.params.iter()
    }

    /// Consume into a plain vector, preserving order.
    pub fn into_vec(self) -> Vec<Value> {
        self.params.into_iter().collect()
    }
}

/// The result of building a statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltQuery {
    /// SQL text with `?1, ?2, ...` placeholders.
    pub query: String,
    /// Distinct parameter values; `parameters[n - 1]` binds `?n`.
    pub parameters: Vec<Value>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(query: String, parameters: Vec<Value>) -> Self {
        Self { query, parameters }
    }
}

/// Walk an operation stream once, left to right, and produce the final SQL.
pub fn bind(operations: &[Operation]) -> BuiltQuery {
    let mut query = String::new();
    let mut params = ParamList::new();

    for op in operations {
        match op {
            Operation::Literal(text) => query.push_str(text),
            Operation::Param(value) => {
                let idx = params.push(value.clone());
                query.push('?');
                query.push_str(&idx.to_string());
            }
        }
    }

    let trimmed = query.trim_end().len();
    query.truncate(trimmed);

    BuiltQuery::new(query, params.into_vec())
}
