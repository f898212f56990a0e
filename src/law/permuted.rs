//! Permuted and instance variants of the structure checks.
//!
//! A permuted check runs a structure with every operand order that keeps `a` or `b`
//! as the subject:
//!
//! | Run | Subject | Operands | Identity |
//! |---|---|---|---|
//! | `(a, b, assoc)` | `a` | `b`, `assoc` | `A::identity_element()` |
//! | `(a, assoc, b)` | `a` | `assoc`, `b` | `A::identity_element()` |
//! | `(b, a, assoc)` | `b` | `a`, `assoc` | `B::identity_element()` |
//! | `(b, assoc, a)` | `b` | `assoc`, `a` | `B::identity_element()` |
//!
//! An instance check repeats the permuted check with `c`, then with two further
//! associated values, typically a segment and an element of the container under test.

use super::equality::{Equality, NaturalEquality};
use super::identity::IdentityElement;
use super::operator::Operator;
use super::structure::AlgebraicStructure;
use super::verdict::Verdict;

/// A structure that can be verified in all four operand orders.
///
/// Implemented automatically; it exists to keep the bounds of the permuted checks
/// readable.
pub trait PermutedStructure<Op, E, A, B, X>:
    AlgebraicStructure<Op, E, A, B, X>
    + AlgebraicStructure<Op, E, A, X, B>
    + AlgebraicStructure<Op, E, B, A, X>
    + AlgebraicStructure<Op, E, B, X, A>
{
}

impl<S, Op, E, A, B, X> PermutedStructure<Op, E, A, B, X> for S where
    S: AlgebraicStructure<Op, E, A, B, X>
        + AlgebraicStructure<Op, E, A, X, B>
        + AlgebraicStructure<Op, E, B, A, X>
        + AlgebraicStructure<Op, E, B, X, A>
{
}

/// Evaluate `structure` in all four operand orders.
pub fn verify_permuted<S, Op, E, A, B, X>(
    structure: S,
    op: Op,
    equal: &E,
    var_a: &A,
    var_b: &B,
    assoc: &X,
) -> Verdict
where
    S: PermutedStructure<Op, E, A, B, X>,
    Op: Operator,
    A: IdentityElement,
    B: IdentityElement,
{
    let identity_a = A::identity_element();
    let identity_b = B::identity_element();

    let runs = [
        (
            "(a, b, assoc)",
            <S as AlgebraicStructure<Op, E, A, B, X>>::verify(
                &structure,
                op,
                equal,
                &identity_a,
                var_a,
                var_b,
                assoc,
            ),
        ),
        (
            "(a, assoc, b)",
            <S as AlgebraicStructure<Op, E, A, X, B>>::verify(
                &structure,
                op,
                equal,
                &identity_a,
                var_a,
                assoc,
                var_b,
            ),
        ),
        (
            "(b, a, assoc)",
            <S as AlgebraicStructure<Op, E, B, A, X>>::verify(
                &structure,
                op,
                equal,
                &identity_b,
                var_b,
                var_a,
                assoc,
            ),
        ),
        (
            "(b, assoc, a)",
            <S as AlgebraicStructure<Op, E, B, X, A>>::verify(
                &structure,
                op,
                equal,
                &identity_b,
                var_b,
                assoc,
                var_a,
            ),
        ),
    ];

    runs.into_iter()
        .map(|(label, verdict)| verdict.within(label))
        .collect()
}

/// Assert `structure` in all four operand orders with `PartialEq`.
///
/// # Panics
///
/// Panics listing every violation of every run.
#[track_caller]
pub fn check_permuted<S, Op, A, B, X>(structure: S, op: Op, var_a: &A, var_b: &B, assoc: &X)
where
    S: PermutedStructure<Op, NaturalEquality, A, B, X>,
    Op: Operator,
    A: IdentityElement,
    B: IdentityElement,
{
    verify_permuted(structure, op, &NaturalEquality, var_a, var_b, assoc).assert();
}

/// Assert `structure` in all four operand orders with a custom equality.
///
/// `equal` is applied to whichever of `a` and `b` is the subject, so it must accept
/// both types.
///
/// # Panics
///
/// Panics listing every violation of every run.
#[track_caller]
pub fn check_permuted_equal<S, Op, E, A, B, X>(
    structure: S,
    op: Op,
    equal: &E,
    var_a: &A,
    var_b: &B,
    assoc: &X,
) where
    S: PermutedStructure<Op, E, A, B, X>,
    Op: Operator,
    E: Equality<A> + Equality<B>,
    A: IdentityElement,
    B: IdentityElement,
{
    verify_permuted(structure, op, equal, var_a, var_b, assoc).assert();
}

/// Evaluate the permuted check with `var_c`, then `ass_a`, then `ass_b` as the
/// associated value.
#[allow(clippy::too_many_arguments)]
pub fn verify_instance<S, Op, E, A, B, C, XA, XB>(
    structure: S,
    op: Op,
    equal: &E,
    var_a: &A,
    var_b: &B,
    var_c: &C,
    ass_a: &XA,
    ass_b: &XB,
) -> Verdict
where
    S: PermutedStructure<Op, E, A, B, C>
        + PermutedStructure<Op, E, A, B, XA>
        + PermutedStructure<Op, E, A, B, XB>,
    Op: Operator,
    A: IdentityElement,
    B: IdentityElement,
{
    verify_permuted(structure, op, equal, var_a, var_b, var_c)
        .within("assoc = c")
        .merge(verify_permuted(structure, op, equal, var_a, var_b, ass_a).within("assoc = ass_a"))
        .merge(verify_permuted(structure, op, equal, var_a, var_b, ass_b).within("assoc = ass_b"))
}

/// Assert the instance check with `PartialEq`.
///
/// # Panics
///
/// Panics listing every violation of every associated value and permutation.
#[track_caller]
pub fn check_instance<S, Op, A, B, C, XA, XB>(
    structure: S,
    op: Op,
    var_a: &A,
    var_b: &B,
    var_c: &C,
    ass_a: &XA,
    ass_b: &XB,
) where
    S: PermutedStructure<Op, NaturalEquality, A, B, C>
        + PermutedStructure<Op, NaturalEquality, A, B, XA>
        + PermutedStructure<Op, NaturalEquality, A, B, XB>,
    Op: Operator,
    A: IdentityElement,
    B: IdentityElement,
{
    verify_instance(
        structure,
        op,
        &NaturalEquality,
        var_a,
        var_b,
        var_c,
        ass_a,
        ass_b,
    )
    .assert();
}

/// Assert the instance check with a custom equality.
///
/// # Panics
///
/// Panics listing every violation of every associated value and permutation.
#[track_caller]
#[allow(clippy::too_many_arguments)]
pub fn check_instance_equal<S, Op, E, A, B, C, XA, XB>(
    structure: S,
    op: Op,
    equal: &E,
    var_a: &A,
    var_b: &B,
    var_c: &C,
    ass_a: &XA,
    ass_b: &XB,
) where
    S: PermutedStructure<Op, E, A, B, C>
        + PermutedStructure<Op, E, A, B, XA>
        + PermutedStructure<Op, E, A, B, XB>,
    Op: Operator,
    E: Equality<A> + Equality<B>,
    A: IdentityElement,
    B: IdentityElement,
{
    verify_instance(structure, op, equal, var_a, var_b, var_c, ass_a, ass_b).assert();
}
