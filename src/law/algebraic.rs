//! Primitive algebraic law checks.
//!
//! Every law comes in three forms:
//! - `verify_*` evaluates the law with an explicit [`Equality`] and returns a [`Verdict`];
//! - `check_*` asserts the law using `PartialEq`;
//! - `check_*_equal` asserts the law using a caller-supplied equality.
//!
//! All forms are generic over the operator tag, so a law is written once and holds the
//! same shape for `Plus`, `Pipe`, `Et`, `Caret` and custom operations.
//!
//! # Example
//!
//! ```rust
//! use algebraic_laws::law::algebraic::{check_associativity, check_commutativity};
//! use algebraic_laws::law::operator::{Plus, Caret};
//!
//! check_associativity(Plus, &3_i64, &5_i64, &7_i64);
//! check_commutativity(Caret, &0b1100_u8, &0b1010_u8);
//! ```

use std::fmt::Debug;
use std::ops::Sub;

use super::equality::{Equality, NaturalEquality};
use super::operator::{Applied, BinaryOperation, GroupOperator, Operator};
use super::verdict::{Law, Verdict};

/// Evaluate associativity: `(a op b) op c == a op (b op c)`.
///
/// `b` and `c` may have types other than `a`. Every result that combines with `a` is
/// converted into `a`'s type before it is combined further or compared.
pub fn verify_associativity<Op, E, T, B, C>(op: Op, equal: &E, a: &T, b: &B, c: &C) -> Verdict
where
    Op: BinaryOperation<T, B>
        + BinaryOperation<T, C>
        + BinaryOperation<B, C>
        + BinaryOperation<T, Applied<Op, B, C>>,
    Applied<Op, T, B>: Into<T>,
    Applied<Op, T, C>: Into<T>,
    Applied<Op, T, Applied<Op, B, C>>: Into<T>,
    E: Equality<T>,
    T: Clone + Debug,
    B: Clone,
    C: Clone,
{
    let ab: T = <Op as BinaryOperation<T, B>>::apply(op, a.clone(), b.clone()).into();
    let left: T = <Op as BinaryOperation<T, C>>::apply(op, ab, c.clone()).into();
    let bc = <Op as BinaryOperation<B, C>>::apply(op, b.clone(), c.clone());
    let right: T = <Op as BinaryOperation<T, Applied<Op, B, C>>>::apply(op, a.clone(), bc).into();
    let s = op.kind().symbol();
    Verdict::compare(
        Law::Associativity,
        Some(op.kind()),
        equal,
        &left,
        &right,
        &format!("(a {s} b) {s} c == a {s} (b {s} c)"),
    )
}

/// Assert associativity with `PartialEq`.
///
/// # Panics
///
/// Panics if `(a op b) op c != a op (b op c)`.
#[track_caller]
pub fn check_associativity<Op, T, B, C>(op: Op, a: &T, b: &B, c: &C)
where
    Op: BinaryOperation<T, B>
        + BinaryOperation<T, C>
        + BinaryOperation<B, C>
        + BinaryOperation<T, Applied<Op, B, C>>,
    Applied<Op, T, B>: Into<T>,
    Applied<Op, T, C>: Into<T>,
    Applied<Op, T, Applied<Op, B, C>>: Into<T>,
    T: Clone + Debug + PartialEq,
    B: Clone,
    C: Clone,
{
    verify_associativity(op, &NaturalEquality, a, b, c).assert();
}

/// Assert associativity with a custom equality.
///
/// # Panics
///
/// Panics if `equal` rejects `(a op b) op c` against `a op (b op c)`.
#[track_caller]
pub fn check_associativity_equal<Op, E, T, B, C>(op: Op, equal: &E, a: &T, b: &B, c: &C)
where
    Op: BinaryOperation<T, B>
        + BinaryOperation<T, C>
        + BinaryOperation<B, C>
        + BinaryOperation<T, Applied<Op, B, C>>,
    Applied<Op, T, B>: Into<T>,
    Applied<Op, T, C>: Into<T>,
    Applied<Op, T, Applied<Op, B, C>>: Into<T>,
    E: Equality<T>,
    T: Clone + Debug,
    B: Clone,
    C: Clone,
{
    verify_associativity(op, equal, a, b, c).assert();
}

/// Evaluate neutrality in its symmetric form: `a op identity == identity op a`.
pub fn verify_neutrality<Op, E, T>(op: Op, equal: &E, a: &T, identity: &T) -> Verdict
where
    Op: BinaryOperation<T, T, Output = T>,
    E: Equality<T>,
    T: Clone + Debug,
{
    let left = op.apply(a.clone(), identity.clone());
    let right = op.apply(identity.clone(), a.clone());
    let s = op.kind().symbol();
    Verdict::compare(
        Law::Neutrality,
        Some(op.kind()),
        equal,
        &left,
        &right,
        &format!("a {s} identity == identity {s} a"),
    )
}

/// Assert neutrality with `PartialEq`.
///
/// # Panics
///
/// Panics if `a op identity != identity op a`.
#[track_caller]
pub fn check_neutrality<Op, T>(op: Op, a: &T, identity: &T)
where
    Op: BinaryOperation<T, T, Output = T>,
    T: Clone + Debug + PartialEq,
{
    verify_neutrality(op, &NaturalEquality, a, identity).assert();
}

/// Assert neutrality with a custom equality.
///
/// # Panics
///
/// Panics if `equal` rejects `a op identity` against `identity op a`.
#[track_caller]
pub fn check_neutrality_equal<Op, E, T>(op: Op, equal: &E, a: &T, identity: &T)
where
    Op: BinaryOperation<T, T, Output = T>,
    E: Equality<T>,
    T: Clone + Debug,
{
    verify_neutrality(op, equal, a, identity).assert();
}

/// Evaluate right neutrality: `a op identity == identity`.
///
/// This is not the unit law. It states that applying the identity on the right
/// collapses the result onto the identity itself, which is what an absorbing
/// element does (`a & empty == empty`), and what a difference does when the
/// identity is the universe of the operation.
pub fn verify_right_neutrality<Op, E, T>(op: Op, equal: &E, a: &T, identity: &T) -> Verdict
where
    Op: BinaryOperation<T, T, Output = T>,
    E: Equality<T>,
    T: Clone + Debug,
{
    let left = op.apply(a.clone(), identity.clone());
    let s = op.kind().symbol();
    Verdict::compare(
        Law::RightNeutrality,
        Some(op.kind()),
        equal,
        &left,
        identity,
        &format!("a {s} identity == identity"),
    )
}

/// Assert right neutrality with `PartialEq`.
///
/// # Panics
///
/// Panics if `a op identity != identity`.
#[track_caller]
pub fn check_right_neutrality<Op, T>(op: Op, a: &T, identity: &T)
where
    Op: BinaryOperation<T, T, Output = T>,
    T: Clone + Debug + PartialEq,
{
    verify_right_neutrality(op, &NaturalEquality, a, identity).assert();
}

/// Assert right neutrality with a custom equality.
///
/// # Panics
///
/// Panics if `equal` rejects `a op identity` against `identity`.
#[track_caller]
pub fn check_right_neutrality_equal<Op, E, T>(op: Op, equal: &E, a: &T, identity: &T)
where
    Op: BinaryOperation<T, T, Output = T>,
    E: Equality<T>,
    T: Clone + Debug,
{
    verify_right_neutrality(op, equal, a, identity).assert();
}

/// Evaluate commutativity: `a op b == b op a`.
///
/// Both results are converted into `a`'s type, so `b` may be of another type whose
/// combination with `a` yields something else.
pub fn verify_commutativity<Op, E, T, B>(op: Op, equal: &E, a: &T, b: &B) -> Verdict
where
    Op: BinaryOperation<T, B> + BinaryOperation<B, T>,
    Applied<Op, T, B>: Into<T>,
    Applied<Op, B, T>: Into<T>,
    E: Equality<T>,
    T: Clone + Debug,
    B: Clone,
{
    let left: T = <Op as BinaryOperation<T, B>>::apply(op, a.clone(), b.clone()).into();
    let right: T = <Op as BinaryOperation<B, T>>::apply(op, b.clone(), a.clone()).into();
    let s = op.kind().symbol();
    Verdict::compare(
        Law::Commutativity,
        Some(op.kind()),
        equal,
        &left,
        &right,
        &format!("a {s} b == b {s} a"),
    )
}

/// Assert commutativity with `PartialEq`.
///
/// # Panics
///
/// Panics if `a op b != b op a`.
#[track_caller]
pub fn check_commutativity<Op, T, B>(op: Op, a: &T, b: &B)
where
    Op: BinaryOperation<T, B> + BinaryOperation<B, T>,
    Applied<Op, T, B>: Into<T>,
    Applied<Op, B, T>: Into<T>,
    T: Clone + Debug + PartialEq,
    B: Clone,
{
    verify_commutativity(op, &NaturalEquality, a, b).assert();
}

/// Assert commutativity with a custom equality.
///
/// # Panics
///
/// Panics if `equal` rejects `a op b` against `b op a`.
#[track_caller]
pub fn check_commutativity_equal<Op, E, T, B>(op: Op, equal: &E, a: &T, b: &B)
where
    Op: BinaryOperation<T, B> + BinaryOperation<B, T>,
    Applied<Op, T, B>: Into<T>,
    Applied<Op, B, T>: Into<T>,
    E: Equality<T>,
    T: Clone + Debug,
    B: Clone,
{
    verify_commutativity(op, equal, a, b).assert();
}

/// Evaluate partial inversion: `a - a == identity`.
///
/// The difference is always `std::ops::Sub`; `op` only attributes the law in reports.
pub fn verify_partial_inversion<Op, E, T>(op: Op, equal: &E, identity: &T, a: &T) -> Verdict
where
    Op: Operator,
    E: Equality<T>,
    T: Sub<Output = T> + Clone + Debug,
{
    let positive_difference = a.clone() - a.clone();
    Verdict::compare(
        Law::PartialInversion,
        Some(op.kind()),
        equal,
        &positive_difference,
        identity,
        "a - a == identity",
    )
}

/// Assert partial inversion with `PartialEq`.
///
/// # Panics
///
/// Panics if `a - a != identity`.
#[track_caller]
pub fn check_partial_inversion<Op, T>(op: Op, identity: &T, a: &T)
where
    Op: Operator,
    T: Sub<Output = T> + Clone + Debug + PartialEq,
{
    verify_partial_inversion(op, &NaturalEquality, identity, a).assert();
}

/// Assert partial inversion with a custom equality.
///
/// # Panics
///
/// Panics if `equal` rejects `a - a` against `identity`.
#[track_caller]
pub fn check_partial_inversion_equal<Op, E, T>(op: Op, equal: &E, identity: &T, a: &T)
where
    Op: Operator,
    E: Equality<T>,
    T: Sub<Output = T> + Clone + Debug,
{
    verify_partial_inversion(op, equal, identity, a).assert();
}

/// Evaluate inversion: partial inversion plus `(identity - a) op a == identity`.
pub fn verify_inversion<Op, E, T>(op: Op, equal: &E, identity: &T, a: &T) -> Verdict
where
    Op: GroupOperator + BinaryOperation<T, T, Output = T>,
    E: Equality<T>,
    T: Sub<Output = T> + Clone + Debug,
{
    let negative_difference = op.apply(identity.clone() - a.clone(), a.clone());
    let s = op.kind().symbol();
    verify_partial_inversion(op, equal, identity, a).merge(Verdict::compare(
        Law::Inversion,
        Some(op.kind()),
        equal,
        &negative_difference,
        identity,
        &format!("(identity - a) {s} a == identity"),
    ))
}

/// Assert inversion with `PartialEq`.
///
/// # Panics
///
/// Panics if `a - a != identity` or `(identity - a) op a != identity`.
#[track_caller]
pub fn check_inversion<Op, T>(op: Op, identity: &T, a: &T)
where
    Op: GroupOperator + BinaryOperation<T, T, Output = T>,
    T: Sub<Output = T> + Clone + Debug + PartialEq,
{
    verify_inversion(op, &NaturalEquality, identity, a).assert();
}

/// Assert inversion with a custom equality.
///
/// # Panics
///
/// Panics if `equal` rejects either difference against `identity`.
#[track_caller]
pub fn check_inversion_equal<Op, E, T>(op: Op, equal: &E, identity: &T, a: &T)
where
    Op: GroupOperator + BinaryOperation<T, T, Output = T>,
    E: Equality<T>,
    T: Sub<Output = T> + Clone + Debug,
{
    verify_inversion(op, equal, identity, a).assert();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::law::operator::{Caret, Custom, Et, Minus, OperatorKind, Pipe, Plus};

    #[test]
    fn integer_addition_satisfies_primitives() {
        check_associativity(Plus, &3_i64, &5_i64, &7_i64);
        check_neutrality(Plus, &3_i64, &0_i64);
        check_commutativity(Plus, &3_i64, &5_i64);
        check_partial_inversion(Plus, &0_i64, &3_i64);
        check_inversion(Plus, &0_i64, &3_i64);
    }

    #[test]
    fn bitwise_tags_satisfy_primitives() {
        let (a, b, c) = (0b1100_u16, 0b1010_u16, 0b0110_u16);
        check_associativity(Pipe, &a, &b, &c);
        check_associativity(Et, &a, &b, &c);
        check_associativity(Caret, &a, &b, &c);
        check_commutativity(Et, &a, &b);
        check_neutrality(Caret, &a, &0);
        check_partial_inversion(Pipe, &0_i32, &0b101_i32);
        assert!(
            verify_inversion(Pipe, &NaturalEquality, &0_i32, &0b101_i32).violates(Law::Inversion)
        );
    }

    #[test]
    fn subtraction_is_not_associative() {
        let verdict = verify_associativity(Minus, &NaturalEquality, &10_i32, &4_i32, &3_i32);
        assert!(!verdict.holds());
        assert!(verdict.violates(Law::Associativity));
        assert_eq!(
            verdict.violations()[0].detail,
            "(a - b) - c == a - (b - c): left = 3, right = 9"
        );
    }

    #[test]
    #[should_panic(expected = "commutativity wrt minus (-) violated")]
    fn subtraction_is_not_commutative() {
        check_commutativity(Minus, &5_i32, &3_i32);
    }

    #[test]
    fn right_neutrality_is_distinct_from_neutrality() {
        check_neutrality(Et, &0b1011_u8, &0);
        check_right_neutrality(Et, &0b1011_u8, &0);
        let verdict = verify_right_neutrality(Plus, &NaturalEquality, &4_i32, &0_i32);
        assert!(verdict.violates(Law::RightNeutrality));
        assert!(verify_neutrality(Plus, &NaturalEquality, &4_i32, &0_i32).holds());
    }

    #[test]
    fn inversion_reports_both_differences() {
        let verdict = verify_inversion(Pipe, &NaturalEquality, &1_i32, &9_i32);
        assert_eq!(verdict.evaluated, 2);
        assert_eq!(verdict.violations().len(), 2);
        assert!(verdict.violates(Law::PartialInversion));
        assert!(verdict.violates(Law::Inversion));
        assert_eq!(
            verdict.violations()[1].detail,
            "(identity - a) | a == identity: left = -7, right = 1"
        );
    }

    #[test]
    fn partial_inversion_only_attributes_the_operation() {
        let saturating = Custom::new("saturating_add", |a: u8, b: u8| a.saturating_add(b));
        assert!(verify_partial_inversion(saturating, &NaturalEquality, &0_u8, &9_u8).holds());
        let verdict = verify_partial_inversion(saturating, &NaturalEquality, &1_u8, &9_u8);
        assert_eq!(
            verdict.violations()[0].operator,
            Some(OperatorKind::Custom("saturating_add"))
        );
    }

    #[test]
    fn custom_equality_relaxes_comparison() {
        let modulo_ten = |l: &i32, r: &i32| l.rem_euclid(10) == r.rem_euclid(10);
        let skewed = Custom::new("skewed", |a: i32, b: i32| a + b + 10 * a.signum());
        check_commutativity_equal(skewed, &modulo_ten, &3, &-4);
        assert!(!verify_commutativity(skewed, &NaturalEquality, &3, &-4).holds());
    }

    #[test]
    fn relaxed_equality_applies_to_every_primitive() {
        let mod_six = |l: &i32, r: &i32| l.rem_euclid(6) == r.rem_euclid(6);
        check_associativity_equal(Minus, &mod_six, &10_i32, &4_i32, &3_i32);
        assert!(!verify_associativity(Minus, &NaturalEquality, &10_i32, &4_i32, &3_i32).holds());

        let same_magnitude = |l: &i32, r: &i32| l.abs() == r.abs();
        check_neutrality_equal(Minus, &same_magnitude, &7_i32, &0);
        assert!(!verify_neutrality(Minus, &NaturalEquality, &7_i32, &0).holds());

        let same_parity = |l: &i32, r: &i32| l.rem_euclid(2) == r.rem_euclid(2);
        check_right_neutrality_equal(Plus, &same_parity, &4_i32, &0);

        let mod_ten = |l: &i32, r: &i32| l.rem_euclid(10) == r.rem_euclid(10);
        check_partial_inversion_equal(Plus, &mod_ten, &10_i32, &3);
        assert!(!verify_partial_inversion(Plus, &NaturalEquality, &10_i32, &3).holds());

        let within_eight = |l: &i32, r: &i32| (l - r).abs() <= 8;
        check_inversion_equal(Pipe, &within_eight, &1_i32, &9);
    }

    #[test]
    fn checks_are_idempotent() {
        let first = verify_associativity(Minus, &NaturalEquality, &1_i32, &2_i32, &3_i32);
        let second = verify_associativity(Minus, &NaturalEquality, &1_i32, &2_i32, &3_i32);
        assert_eq!(first, second);
    }
}
