//! CASE expression builder.

use crate::qb::expr::Expression;
use crate::qb::falseable::Falseable;
use crate::qb::operation::Operation;
use crate::qb::traits::{SqlQb, StatementKind};

/// `CASE [subject] WHEN .. THEN .. [ELSE ..] END`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaseQb {
    subject: Option<Expression>,
    whens: Vec<(Expression, Expression)>,
    otherwise: Option<Expression>,
}

impl CaseQb {
    /// Create a searched CASE with no subject.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simple CASE comparing `subject` against each WHEN.
    pub fn with_subject(subject: impl Falseable) -> Self {
        Self {
            subject: subject.into_expression(),
            ..Self::default()
        }
    }

    /// Append a `WHEN condition THEN result` branch.
    pub fn when(mut self, condition: impl Into<Expression>, result: impl Into<Expression>) -> Self {
        self.whens.push((condition.into(), result.into()));
        self
    }

    /// Set the ELSE result, replacing any previous one.
    pub fn else_(mut self, result: impl Into<Expression>) -> Self {
        self.otherwise = Some(result.into());
        self
    }
}

impl SqlQb for CaseQb {
    fn operations(&self) -> Vec<Operation> {
        let mut out = vec![Operation::literal("CASE ")];
        if let Some(subject) = &self.subject {
            out.extend(subject.operations());
            out.push(Operation::literal(" "));
        }

        for (condition, result) in &self.whens {
            out.push(Operation::literal("WHEN "));
            out.extend(condition.operations());
            out.push(Operation::literal(" THEN "));
            out.extend(result.operations());
            out.push(Operation::literal(" "));
        }

        if let Some(result) = &self.otherwise {
            out.push(Operation::literal("ELSE "));
            out.extend(result.operations());
            out.push(Operation::literal(" "));
        }

        out.push(Operation::literal("END"));
        out
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Case
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qb::expr::{gt, static_value, value};

    #[test]
    fn test_empty_case() {
        assert_eq!(CaseQb::new().to_sql(), "CASE END");
    }

    #[test]
    fn test_simple_case() {
        let qb = CaseQb::with_subject("status")
            .when(value(1), static_value("on"))
            .when(value(0), static_value("off"))
            .else_(static_value(None::<i64>));
        let built = qb.build();
        assert_eq!(
            built.query,
            r#"CASE `status` WHEN ?1 THEN "on" WHEN ?2 THEN "off" ELSE NULL END"#
        );
        assert_eq!(built.parameters.len(), 2);
    }

    #[test]
    fn test_searched_case() {
        let qb = CaseQb::with_subject(None::<Expression>)
            .when(gt("age", value(17)), static_value("adult"))
            .else_(static_value("minor"));
        assert_eq!(
            qb.to_sql(),
            r#"CASE WHEN `age` > ?1 THEN "adult" ELSE "minor" END"#
        );
    }
}
