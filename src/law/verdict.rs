//! Outcome of evaluating one or more laws.
//!
//! Every check first produces a [`Verdict`]. Composite checks merge the verdicts of
//! their constituent laws, so a single violated law never hides another one; the
//! assertion happens once, at the end, and lists every violation.

use std::fmt::{self, Debug};

use serde::Serialize;
use thiserror::Error;

use super::operator::OperatorKind;
use super::report::{ReportConfig, render_verdict};

/// Every law the harness knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Law {
    /// `(a op b) op c == a op (b op c)`
    Associativity,
    /// `a op identity == identity op a`
    Neutrality,
    /// `a op identity == identity`
    RightNeutrality,
    /// `a op b == b op a`
    Commutativity,
    /// `a - a == identity`
    PartialInversion,
    /// `(identity - a) op a == identity`
    Inversion,
    /// `a & b` and `b & a` are contained in `a`
    IntersectionContainedness,
    /// `a` is contained in `a + b` and `b + a`
    UnionContainedness,
    /// the domain of a map is contained in the map
    DomainContainedness,
    /// `distance(x) == length(between(x))`
    LengthAsDistance,
    /// `length(x) + distance(x) == length(hull(x))`
    LengthComplementarity,
    /// `join(domain(x) + between(x)) == hull(x)`
    InnerComplementarity,
}

impl Law {
    /// Stable snake_case name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Associativity => "associativity",
            Self::Neutrality => "neutrality",
            Self::RightNeutrality => "right_neutrality",
            Self::Commutativity => "commutativity",
            Self::PartialInversion => "partial_inversion",
            Self::Inversion => "inversion",
            Self::IntersectionContainedness => "intersection_containedness",
            Self::UnionContainedness => "union_containedness",
            Self::DomainContainedness => "domain_containedness",
            Self::LengthAsDistance => "length_as_distance",
            Self::LengthComplementarity => "length_complementarity",
            Self::InnerComplementarity => "inner_complementarity",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One violated law.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Law that failed.
    pub law: Law,
    /// Operator the law was checked against, if the law is operator-generic.
    pub operator: Option<OperatorKind>,
    /// Enclosing checks, outermost first (structure name, permutation, ...).
    pub context: Vec<String>,
    /// Rendering of the offending values.
    pub detail: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.context.is_empty() {
            write!(f, "[{}] ", self.context.join(" / "))?;
        }
        write!(f, "{}", self.law)?;
        if let Some(operator) = self.operator {
            write!(f, " wrt {operator}")?;
        }
        write!(f, " violated: {}", self.detail)
    }
}

/// Accumulated result of one or more law evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[must_use = "a verdict does nothing unless asserted or inspected"]
pub struct Verdict {
    /// Number of individual law evaluations folded into this verdict.
    pub evaluated: usize,
    violations: Vec<Violation>,
}

impl Verdict {
    /// A single passing evaluation.
    pub fn pass() -> Self {
        Self {
            evaluated: 1,
            violations: Vec::new(),
        }
    }

    /// A single failing evaluation.
    pub fn fail(law: Law, operator: Option<OperatorKind>, detail: impl Into<String>) -> Self {
        let violation = Violation {
            law,
            operator,
            context: Vec::new(),
            detail: detail.into(),
        };
        log::debug!("law violation recorded: {violation}");
        Self {
            evaluated: 1,
            violations: vec![violation],
        }
    }

    /// Compare `left` and `right` with `equal`, producing a pass or a failure
    /// whose detail renders both sides.
    pub fn compare<T, E>(
        law: Law,
        operator: Option<OperatorKind>,
        equal: &E,
        left: &T,
        right: &T,
        statement: &str,
    ) -> Self
    where
        T: Debug,
        E: super::equality::Equality<T> + ?Sized,
    {
        if equal.equal(left, right) {
            Self::pass()
        } else {
            Self::fail(
                law,
                operator,
                format!("{statement}: left = {left:?}, right = {right:?}"),
            )
        }
    }

    /// Record a boolean condition.
    pub fn require(
        law: Law,
        operator: Option<OperatorKind>,
        condition: bool,
        detail: impl FnOnce() -> String,
    ) -> Self {
        if condition {
            Self::pass()
        } else {
            Self::fail(law, operator, detail())
        }
    }

    /// Fold `other` into `self`, keeping every violation.
    pub fn merge(mut self, other: Verdict) -> Self {
        self.evaluated += other.evaluated;
        self.violations.extend(other.violations);
        self
    }

    /// Prefix every violation's context with `label`.
    pub fn within(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        for violation in &mut self.violations {
            violation.context.insert(0, label.clone());
        }
        self
    }

    /// True if no evaluation failed.
    #[must_use]
    pub fn holds(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in evaluation order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True if some violation concerns `law`.
    #[must_use]
    pub fn violates(&self, law: Law) -> bool {
        self.violations.iter().any(|v| v.law == law)
    }

    /// Convert into a `Result`.
    pub fn into_result(self) -> Result<(), LawFailure> {
        if self.holds() {
            Ok(())
        } else {
            Err(LawFailure {
                evaluated: self.evaluated,
                violations: self.violations,
            })
        }
    }

    /// Panic with a report of every violation, rendered per [`ReportConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics if any law was violated.
    #[track_caller]
    pub fn assert(&self) {
        self.assert_with(&ReportConfig::from_env());
    }

    /// Panic with a report of every violation, rendered per `config`.
    ///
    /// # Panics
    ///
    /// Panics if any law was violated.
    #[track_caller]
    pub fn assert_with(&self, config: &ReportConfig) {
        if self.holds() {
            return;
        }
        let report = render_verdict(self, config);
        log::error!("{report}");
        panic!("{report}");
    }
}

impl FromIterator<Verdict> for Verdict {
    fn from_iter<I: IntoIterator<Item = Verdict>>(iter: I) -> Self {
        iter.into_iter().fold(Verdict::default(), Verdict::merge)
    }
}

/// Error form of a failing [`Verdict`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{} of {} law evaluation(s) failed: {}",
    .violations.len(),
    .evaluated,
    summarize(.violations)
)]
pub struct LawFailure {
    /// Number of evaluations performed.
    pub evaluated: usize,
    /// Every violation.
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::law::equality::NaturalEquality;

    #[test]
    fn merge_keeps_every_violation() {
        let verdict = Verdict::pass()
            .merge(Verdict::fail(Law::Associativity, Some(OperatorKind::Plus), "x"))
            .merge(Verdict::fail(Law::Neutrality, Some(OperatorKind::Plus), "y"));
        assert_eq!(verdict.evaluated, 3);
        assert_eq!(verdict.violations().len(), 2);
        assert!(verdict.violates(Law::Neutrality));
        assert!(!verdict.violates(Law::Commutativity));
    }

    #[test]
    fn within_prefixes_context() {
        let verdict = Verdict::fail(Law::Commutativity, Some(OperatorKind::Et), "z")
            .within("inner")
            .within("outer");
        assert_eq!(verdict.violations()[0].context, vec!["outer", "inner"]);
        assert_eq!(
            verdict.violations()[0].to_string(),
            "[outer / inner] commutativity wrt et (&) violated: z"
        );
    }

    #[test]
    fn compare_renders_both_sides() {
        let verdict = Verdict::compare(
            Law::Associativity,
            Some(OperatorKind::Minus),
            &NaturalEquality,
            &1_i32,
            &2_i32,
            "(a - b) - c == a - (b - c)",
        );
        assert_eq!(
            verdict.violations()[0].detail,
            "(a - b) - c == a - (b - c): left = 1, right = 2"
        );
    }

    #[test]
    fn into_result_wraps_violations() {
        assert!(Verdict::pass().into_result().is_ok());
        let error = Verdict::fail(Law::Inversion, None, "w")
            .into_result()
            .expect_err("failing verdict should be an error");
        assert_eq!(error.violations.len(), 1);
        assert_eq!(
            error.to_string(),
            "1 of 1 law evaluation(s) failed: inversion violated: w"
        );
    }

    #[test]
    fn collecting_verdicts_sums_evaluations() {
        let verdict: Verdict = (0..4).map(|_| Verdict::pass()).collect();
        assert_eq!(verdict.evaluated, 4);
        assert!(verdict.holds());
    }

    #[test]
    #[should_panic(expected = "associativity wrt plus (+) violated")]
    fn assert_panics_on_violation() {
        Verdict::fail(Law::Associativity, Some(OperatorKind::Plus), "boom")
            .assert_with(&ReportConfig::default());
    }
}
