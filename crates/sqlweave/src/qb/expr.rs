//! Expression tree for everything that can appear inside a statement.
//!
//! [`Expression`] is a closed enum: identifiers, bound values, inlined
//! literals, comparisons, AND/OR groups, arithmetic, function calls and
//! nested statements. It is turned into SQL by [`render`](crate::qb::render).
//!
//! Strings convert to identifiers, not values. Use [`value`] to bind data:
//!
//! ```
//! use sqlweave::qb::{eq, value, SqlQb};
//!
//! let qb = sqlweave::qb::select(["id"]).from("users").where_(eq("name", value("alice")));
//! assert_eq!(qb.to_sql(), "SELECT `id` FROM `users` WHERE `name` = ?1");
//! ```

use crate::ident::Ident;
use crate::qb::falseable::Falseable;
use crate::qb::param::{StaticValue, Value};
use crate::qb::traits::Statement;
use std::borrow::Cow;
use std::fmt;

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// Table or column name, possibly dotted or `*`.
    Identifier(Ident),

    /// Bound parameter.
    Value(Value),

    /// Literal inlined into the SQL text.
    Static(StaticValue),

    /// SQL fragment emitted verbatim.
    Raw(String),

    /// `left <op> right`
    Compare {
        op: CompareOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// AND/OR group. `None` operands are skipped when rendering.
    Logical {
        op: LogicalOp,
        operands: Vec<Option<Expression>>,
        parens: Option<bool>,
    },

    /// `(left <op> right)`, or `POW(left, right)` for exponentiation.
    Arithmetic {
        op: MathOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// `identifier BETWEEN from AND to`
    Between {
        identifier: Box<Expression>,
        from: Box<Expression>,
        to: Box<Expression>,
    },

    /// `identifier IS NULL`
    IsNull(Box<Expression>),

    /// `NOT expr`
    Not(Box<Expression>),

    /// `NAME(arg, ...)`
    Call {
        name: Cow<'static, str>,
        arguments: Vec<Expression>,
    },

    /// `CAST(expr AS TYPE)`
    Cast {
        expression: Box<Expression>,
        target: CastType,
    },

    /// `expr COLLATE NAME`
    Collate {
        expression: Box<Expression>,
        collation: Collation,
    },

    /// `EXISTS ( statement )`
    Exists(Box<Statement>),

    /// `(statement)` used as a derived table or scalar subquery.
    Subquery(Box<Statement>),

    /// `expr AS alias`
    Aliased {
        expression: Box<Expression>,
        alias: Option<Ident>,
    },

    /// `identifier = expr` (SET lists)
    Set {
        identifier: Ident,
        expression: Box<Expression>,
    },

    /// `` `excluded`.identifier ``
    Excluded(Ident),

    /// JSON document bound as one text parameter.
    Json(serde_json::Value),

    /// A nested statement rendered in place.
    Statement(Box<Statement>),
}

/// Comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Neq => "!=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
        }
    }
}

/// AND / OR
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Separator placed between operands.
    pub fn separator(self) -> &'static str {
        match self {
            LogicalOp::And => " AND ",
            LogicalOp::Or => " OR ",
        }
    }
}

/// Arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl MathOp {
    /// Operator symbol (`**` for [`MathOp::Pow`]).
    pub fn as_str(self) -> &'static str {
        match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Mul => "*",
            MathOp::Div => "/",
            MathOp::Mod => "%",
            MathOp::Pow => "**",
        }
    }
}

/// Target type of a `CAST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastType {
    Blob,
    Integer,
    Numeric,
    Real,
    Text,
}

impl CastType {
    pub fn as_str(self) -> &'static str {
        match self {
            CastType::Blob => "BLOB",
            CastType::Integer => "INTEGER",
            CastType::Numeric => "NUMERIC",
            CastType::Real => "REAL",
            CastType::Text => "TEXT",
        }
    }
}

/// Built-in collating sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Collation {
    #[default]
    Binary,
    NoCase,
    RTrim,
}

impl Collation {
    pub fn as_str(self) -> &'static str {
        match self {
            Collation::Binary => "BINARY",
            Collation::NoCase => "NOCASE",
            Collation::RTrim => "RTRIM",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(CompareOp, MathOp, CastType, Collation);

// ==================== Conversions ====================

impl From<&str> for Expression {
    fn from(name: &str) -> Self {
        Expression::Identifier(Ident::parse(name))
    }
}

impl From<String> for Expression {
    fn from(name: String) -> Self {
        Expression::Identifier(Ident::parse(&name))
    }
}

impl From<&String> for Expression {
    fn from(name: &String) -> Self {
        Expression::Identifier(Ident::parse(name))
    }
}

impl From<Ident> for Expression {
    fn from(ident: Ident) -> Self {
        Expression::Identifier(ident)
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::Value(value)
    }
}

impl From<StaticValue> for Expression {
    fn from(value: StaticValue) -> Self {
        Expression::Static(value)
    }
}

impl From<Statement> for Expression {
    fn from(statement: Statement) -> Self {
        Expression::Statement(Box::new(statement))
    }
}

fn boxed(expr: impl Into<Expression>) -> Box<Expression> {
    Box::new(expr.into())
}

// ==================== Leaves ====================

/// Create an identifier expression.
pub fn identifier(name: &str) -> Expression {
    Expression::Identifier(Ident::parse(name))
}

/// Bind a value as a parameter.
pub fn value(value: impl Into<Value>) -> Expression {
    Expression::Value(value.into())
}

/// Inline a literal into the SQL text.
pub fn static_value(value: impl Into<StaticValue>) -> Expression {
    Expression::Static(value.into())
}

/// Emit SQL text verbatim.
pub fn raw(sql: impl Into<String>) -> Expression {
    Expression::Raw(sql.into())
}

/// `expr AS alias`
pub fn aliased(expr: impl Into<Expression>, alias: &str) -> Expression {
    Expression::Aliased {
        expression: boxed(expr),
        alias: Some(Ident::parse(alias)),
    }
}

/// Reference the row proposed for insertion inside an upsert.
pub fn excluded(name: &str) -> Expression {
    Expression::Excluded(Ident::parse(name))
}

// ==================== Comparisons ====================

fn compare(op: CompareOp, left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    Expression::Compare {
        op,
        left: boxed(left),
        right: boxed(right),
    }
}

/// Create an equality condition: left = right
pub fn eq(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    compare(CompareOp::Eq, left, right)
}

/// Create an inequality condition: left != right
pub fn neq(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    compare(CompareOp::Neq, left, right)
}

/// Create a greater-than condition: left > right
pub fn gt(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    compare(CompareOp::Gt, left, right)
}

/// Create a greater-than-or-equal condition: left >= right
pub fn gte(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    compare(CompareOp::Gte, left, right)
}

/// Create a less-than condition: left < right
pub fn lt(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    compare(CompareOp::Lt, left, right)
}

/// Create a less-than-or-equal condition: left <= right
pub fn lte(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    compare(CompareOp::Lte, left, right)
}

/// Create a BETWEEN condition: identifier BETWEEN from AND to
pub fn between(
    identifier: impl Into<Expression>,
    from: impl Into<Expression>,
    to: impl Into<Expression>,
) -> Expression {
    Expression::Between {
        identifier: boxed(identifier),
        from: boxed(from),
        to: boxed(to),
    }
}

/// Create a negated BETWEEN condition: NOT identifier BETWEEN from AND to
pub fn not_between(
    identifier: impl Into<Expression>,
    from: impl Into<Expression>,
    to: impl Into<Expression>,
) -> Expression {
    not(between(identifier, from, to))
}

/// Create an IS NULL condition: identifier IS NULL
pub fn is_null(identifier: impl Into<Expression>) -> Expression {
    Expression::IsNull(boxed(identifier))
}

/// Create a negated IS NULL condition: NOT identifier IS NULL
pub fn is_not_null(identifier: impl Into<Expression>) -> Expression {
    not(is_null(identifier))
}

// ==================== Logical groups ====================

fn logical<I, T>(op: LogicalOp, operands: I, parens: Option<bool>) -> Expression
where
    I: IntoIterator<Item = T>,
    T: Falseable,
{
    Expression::Logical {
        op,
        operands: operands.into_iter().map(Falseable::into_expression).collect(),
        parens,
    }
}

/// Create an AND group. Omitted operands are skipped.
///
/// The group is parenthesized when more than one operand renders.
pub fn and<I, T>(operands: I) -> Expression
where
    I: IntoIterator<Item = T>,
    T: Falseable,
{
    logical(LogicalOp::And, operands, None)
}

/// Create an AND group with explicit control over the parentheses.
///
/// `false` never wraps; `true` wraps when more than one operand renders.
pub fn and_with_parens<I, T>(operands: I, parens: bool) -> Expression
where
    I: IntoIterator<Item = T>,
    T: Falseable,
{
    logical(LogicalOp::And, operands, Some(parens))
}

/// Create an OR group. Omitted operands are skipped.
pub fn or<I, T>(operands: I) -> Expression
where
    I: IntoIterator<Item = T>,
    T: Falseable,
{
    logical(LogicalOp::Or, operands, None)
}

/// Create a NOT expression.
pub fn not(expr: impl Into<Expression>) -> Expression {
    Expression::Not(boxed(expr))
}

// ==================== Arithmetic ====================

/// Create an arithmetic expression.
pub fn op(op: MathOp, left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    Expression::Arithmetic {
        op,
        left: boxed(left),
        right: boxed(right),
    }
}

/// `(left + right)`
pub fn sum(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    op(MathOp::Add, left, right)
}

/// `(left - right)`
pub fn sub(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    op(MathOp::Sub, left, right)
}

/// `(left * right)`
pub fn mul(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    op(MathOp::Mul, left, right)
}

/// `(left / right)`
pub fn div(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    op(MathOp::Div, left, right)
}

/// `(left % right)`
pub fn modulo(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    op(MathOp::Mod, left, right)
}

/// `POW(left, right)`
pub fn pow(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    op(MathOp::Pow, left, right)
}

// ==================== Modifiers ====================

/// `CAST(expr AS TYPE)`
pub fn cast(expr: impl Into<Expression>, target: CastType) -> Expression {
    Expression::Cast {
        expression: boxed(expr),
        target,
    }
}

/// `expr COLLATE NAME`, defaulting to `BINARY`.
pub fn collate(expr: impl Into<Expression>, collation: impl Into<Option<Collation>>) -> Expression {
    Expression::Collate {
        expression: boxed(expr),
        collation: collation.into().unwrap_or_default(),
    }
}

// ==================== Nested statements ====================

/// `EXISTS ( statement )`
pub fn exists(statement: impl Into<Statement>) -> Expression {
    Expression::Exists(Box::new(statement.into()))
}

/// `(statement)`
pub fn subquery(statement: impl Into<Statement>) -> Expression {
    Expression::Subquery(Box::new(statement.into()))
}

// ==================== JSON ====================

/// Bind a JSON document as its compact text.
pub fn json_value(json: impl Into<serde_json::Value>) -> Expression {
    Expression::Json(json.into())
}

/// Like [`json_value`], but JSON `null` binds SQL `NULL`.
pub fn json_value_nullable(json: impl Into<serde_json::Value>) -> Expression {
    match json.into() {
        serde_json::Value::Null => Expression::Value(Value::Null),
        json => Expression::Json(json),
    }
}

/// Serialize any value to JSON and bind it as text.
pub fn try_json_value<T: serde::Serialize + ?Sized>(json: &T) -> crate::SqlResult<Expression> {
    Ok(Expression::Json(serde_json::to_value(json)?))
}

/// Inline a JSON document as a quoted string literal.
pub fn json_static_value(json: impl Into<serde_json::Value>) -> Expression {
    Expression::Static(StaticValue::Text(json.into().to_string()))
}

/// Like [`json_static_value`], but JSON `null` renders `NULL`.
pub fn json_static_value_nullable(json: impl Into<serde_json::Value>) -> Expression {
    match json.into() {
        serde_json::Value::Null => Expression::Static(StaticValue::Null),
        json => json_static_value(json),
    }
}
