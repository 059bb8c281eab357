//! Expression-to-SQL rendering.
//!
//! Rendering is a pure walk over the tree that appends literal text and
//! parameter tokens. Placeholder numbering happens later, in
//! [`bind`](crate::qb::param::bind), so rendered fragments can be freely
//! combined.

use crate::qb::expr::{Expression, MathOp};
use crate::qb::operation::{Operation, join, trim_end};
use crate::qb::param::Value;
use crate::qb::traits::SqlQb;

/// Render an expression into an operation sequence.
pub fn render(expr: &Expression) -> Vec<Operation> {
    let mut out = Vec::new();
    render_into(expr, &mut out);
    out
}

impl Expression {
    /// Render this expression into an operation sequence.
    pub fn operations(&self) -> Vec<Operation> {
        render(self)
    }
}

/// Render a group of operands joined by `separator`.
///
/// Operands that render to nothing are dropped. The result is parenthesized
/// when more than one operand survives, unless `parens` is `Some(false)`.
pub(crate) fn render_group<'a, I>(operands: I, separator: &'static str, parens: Option<bool>) -> Vec<Operation>
where
    I: IntoIterator<Item = &'a Expression>,
{
    let parts: Vec<Vec<Operation>> = operands
        .into_iter()
        .map(render)
        .filter(|part| !part.is_empty())
        .collect();
    let wrap = parts.len() > 1 && parens != Some(false);
    join(parts, separator, wrap)
}

pub(crate) fn render_into(expr: &Expression, out: &mut Vec<Operation>) {
    match expr {
        Expression::Identifier(ident) => out.push(Operation::literal(ident.to_sql())),
        Expression::Value(value) => out.push(Operation::Param(value.clone())),
        Expression::Static(value) => out.push(Operation::literal(value.to_sql())),
        Expression::Raw(sql) => out.push(Operation::literal(sql.clone())),
        Expression::Compare { op, left, right } => {
            render_into(left, out);
            out.push(Operation::literal(format!(" {op} ")));
            render_into(right, out);
        }
        Expression::Logical {
            op,
            operands,
            parens,
        } => {
            out.extend(render_group(operands.iter().flatten(), op.separator(), *parens));
        }
        Expression::Arithmetic { op, left, right } => match op {
            MathOp::Pow => {
                out.push(Operation::literal("POW("));
                render_into(left, out);
                out.push(Operation::literal(", "));
                render_into(right, out);
                out.push(Operation::literal(")"));
            }
            _ => {
                out.push(Operation::literal("("));
                render_into(left, out);
                out.push(Operation::literal(format!(" {op} ")));
                render_into(right, out);
                out.push(Operation::literal(")"));
            }
        },
        Expression::Between {
            identifier,
            from,
            to,
        } => {
            render_into(identifier, out);
            out.push(Operation::literal(" BETWEEN "));
            render_into(from, out);
            out.push(Operation::literal(" AND "));
            render_into(to, out);
        }
        Expression::IsNull(identifier) => {
            render_into(identifier, out);
            out.push(Operation::literal(" IS NULL"));
        }
        Expression::Not(inner) => {
            out.push(Operation::literal("NOT "));
            render_into(inner, out);
        }
        Expression::Call { name, arguments } => {
            out.push(Operation::literal(name.clone()));
            out.extend(join(arguments.iter().map(render), ", ", true));
        }
        Expression::Cast { expression, target } => {
            out.push(Operation::literal("CAST("));
            render_into(expression, out);
            out.push(Operation::literal(format!(" AS {target})")));
        }
        Expression::Collate {
            expression,
            collation,
        } => {
            render_into(expression, out);
            out.push(Operation::literal(format!(" COLLATE {collation}")));
        }
        Expression::Exists(statement) => {
            out.push(Operation::literal("EXISTS ( "));
            out.extend(statement.operations());
            out.push(Operation::literal(")"));
        }
        Expression::Subquery(statement) => {
            let mut inner = statement.operations();
            trim_end(&mut inner);
            out.push(Operation::literal("("));
            out.extend(inner);
            out.push(Operation::literal(")"));
        }
        Expression::Aliased { expression, alias } => {
            render_into(expression, out);
            if let Some(alias) = alias {
                out.push(Operation::literal(" AS "));
                out.push(Operation::literal(alias.to_sql()));
            }
        }
        Expression::Set {
            identifier,
            expression,
        } => {
            out.push(Operation::literal(identifier.to_sql()));
            out.push(Operation::literal(" = "));
            render_into(expression, out);
        }
        Expression::Excluded(identifier) => {
            let mut sql = String::from("`excluded`.");
            identifier.write_sql(&mut sql);
            out.push(Operation::literal(sql));
        }
        Expression::Json(json) => out.push(Operation::Param(Value::Text(json.to_string()))),
        Expression::Statement(statement) => {
            let mut inner = statement.operations();
            trim_end(&mut inner);
            out.extend(inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qb::expr::*;
    use crate::qb::param::bind;
    use serde_json::json;

    fn sql(expr: Expression) -> String {
        bind(&render(&expr)).query
    }

    #[test]
    fn identifiers() {
        assert_eq!(sql("*".into()), "*");
        assert_eq!(sql("t.c".into()), "`t`.`c`");
        assert_eq!(sql("t.".into()), "`t`.*");
        assert_eq!(sql("`t\\`".into()), "`t`");
    }

    #[test]
    fn single_operand_group_is_not_wrapped() {
        assert_eq!(sql(or([eq("a", value(1))])), "`a` = ?1");
        assert_eq!(sql(or([None::<Expression>])), "");
    }

    #[test]
    fn group_wraps_only_rendered_operands() {
        let expr = and([Some(eq("a", value(1))), Some(or([None::<Expression>])), None]);
        assert_eq!(sql(expr), "`a` = ?1");

        let expr = and([eq("a", value(1)), eq("b", value(2))]);
        assert_eq!(sql(expr), "(`a` = ?1 AND `b` = ?2)");
    }

    #[test]
    fn parens_can_be_suppressed() {
        let expr = and_with_parens([eq("a", value(1)), eq("b", value(2))], false);
        assert_eq!(sql(expr), "`a` = ?1 AND `b` = ?2");
    }

    #[test]
    fn arithmetic_nests_parentheses() {
        let expr = sum(sub(value(1), value(2)), value(3));
        assert_eq!(sql(expr), "((?1 - ?2) + ?3)");
        assert_eq!(sql(pow(static_value(1), value(2))), "POW(1, ?1)");
        assert_eq!(sql(modulo(value(1), static_value(2))), "(?1 % 2)");
    }

    #[test]
    fn modifiers() {
        assert_eq!(sql(cast("test", CastType::Integer)), "CAST(`test` AS INTEGER)");
        assert_eq!(sql(collate("test", Collation::NoCase)), "`test` COLLATE NOCASE");
        assert_eq!(sql(not(not(is_null("a")))), "NOT NOT `a` IS NULL");
        assert_eq!(
            sql(not_between("a", value(1), value(1))),
            "NOT `a` BETWEEN ?1 AND ?1"
        );
    }

    #[test]
    fn excluded_and_alias() {
        assert_eq!(sql(excluded("id")), "`excluded`.`id`");
        assert_eq!(sql(aliased("test1", "test2")), "`test1` AS `test2`");
    }

    #[test]
    fn json_binds_compact_text() {
        let built = bind(&render(&json_value(json!({ "abc": 123 }))));
        assert_eq!(built.query, "?1");
        assert_eq!(built.parameters, vec![Value::Text(r#"{"abc":123}"#.into())]);
        assert_eq!(sql(json_static_value(json!({ "abc": 123 }))), r#""{""abc"":123}""#);
    }
}
