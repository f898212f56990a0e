//! Algebraic structures composed from the primitive laws.
//!
//! | Structure | Composed from |
//! |---|---|
//! | [`Monoid`] | associativity + neutrality |
//! | [`AbelianMonoid`] | monoid + commutativity with `b` and with `c` |
//! | [`PartialInvertiveMonoid`] | abelian monoid + partial inversion |
//! | [`AbelianGroup`] | abelian monoid + inversion, for [`GroupOperator`]s only |
//!
//! Structures never re-implement a law: each one delegates to the structure below it
//! and to the primitives in [`crate::law::algebraic`]. A structure is also a value
//! that the permuted and instance checks can be parameterized with.

use std::fmt::Debug;
use std::ops::Sub;

use super::algebraic::{
    verify_associativity, verify_commutativity, verify_inversion, verify_neutrality,
    verify_partial_inversion,
};
use super::equality::{Equality, NaturalEquality};
use super::operator::{Applied, BinaryOperation, GroupOperator, Operator};
use super::verdict::Verdict;

/// A named algebraic structure.
pub trait Structure: Copy + Debug {
    /// Name used as report context.
    const NAME: &'static str;
}

/// A structure whose laws can be evaluated for operator `Op`, equality `E`, subject
/// `T` and further operands `B` and `C`.
pub trait AlgebraicStructure<Op, E, T, B = T, C = T>: Structure {
    /// Evaluate every law of the structure.
    fn verify(&self, op: Op, equal: &E, identity: &T, a: &T, b: &B, c: &C) -> Verdict;
}

/// Associative operation with a neutral element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Monoid;

/// Commutative monoid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbelianMonoid;

/// Commutative monoid where `a - a` is the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialInvertiveMonoid;

/// Commutative monoid with inverses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbelianGroup;

impl Structure for Monoid {
    const NAME: &'static str = "monoid";
}

impl Structure for AbelianMonoid {
    const NAME: &'static str = "abelian_monoid";
}

impl Structure for PartialInvertiveMonoid {
    const NAME: &'static str = "partial_invertive_monoid";
}

impl Structure for AbelianGroup {
    const NAME: &'static str = "abelian_group";
}

impl<Op, E, T, B, C> AlgebraicStructure<Op, E, T, B, C> for Monoid
where
    Op: BinaryOperation<T, B>
        + BinaryOperation<T, C>
        + BinaryOperation<B, C>
        + BinaryOperation<T, Applied<Op, B, C>>
        + BinaryOperation<T, T, Output = T>,
    Applied<Op, T, B>: Into<T>,
    Applied<Op, T, C>: Into<T>,
    Applied<Op, T, Applied<Op, B, C>>: Into<T>,
    E: Equality<T>,
    T: Clone + Debug,
    B: Clone,
    C: Clone,
{
    fn verify(&self, op: Op, equal: &E, identity: &T, a: &T, b: &B, c: &C) -> Verdict {
        verify_associativity(op, equal, a, b, c)
            .merge(verify_neutrality(op, equal, a, identity))
            .within(Self::NAME)
    }
}

impl<Op, E, T, B, C> AlgebraicStructure<Op, E, T, B, C> for AbelianMonoid
where
    Monoid: AlgebraicStructure<Op, E, T, B, C>,
    Op: BinaryOperation<T, B>
        + BinaryOperation<B, T>
        + BinaryOperation<T, C>
        + BinaryOperation<C, T>,
    Applied<Op, T, B>: Into<T>,
    Applied<Op, B, T>: Into<T>,
    Applied<Op, T, C>: Into<T>,
    Applied<Op, C, T>: Into<T>,
    E: Equality<T>,
    T: Clone + Debug,
    B: Clone,
    C: Clone,
{
    fn verify(&self, op: Op, equal: &E, identity: &T, a: &T, b: &B, c: &C) -> Verdict {
        <Monoid as AlgebraicStructure<Op, E, T, B, C>>::verify(
            &Monoid, op, equal, identity, a, b, c,
        )
        .merge(verify_commutativity(op, equal, a, b))
        .merge(verify_commutativity(op, equal, a, c))
        .within(Self::NAME)
    }
}

impl<Op, E, T, B, C> AlgebraicStructure<Op, E, T, B, C> for PartialInvertiveMonoid
where
    AbelianMonoid: AlgebraicStructure<Op, E, T, B, C>,
    Op: Operator,
    E: Equality<T>,
    T: Sub<Output = T> + Clone + Debug,
{
    fn verify(&self, op: Op, equal: &E, identity: &T, a: &T, b: &B, c: &C) -> Verdict {
        <AbelianMonoid as AlgebraicStructure<Op, E, T, B, C>>::verify(
            &AbelianMonoid,
            op,
            equal,
            identity,
            a,
            b,
            c,
        )
        .merge(verify_partial_inversion(op, equal, identity, a))
        .within(Self::NAME)
    }
}

impl<Op, E, T, B, C> AlgebraicStructure<Op, E, T, B, C> for AbelianGroup
where
    AbelianMonoid: AlgebraicStructure<Op, E, T, B, C>,
    Op: GroupOperator + BinaryOperation<T, T, Output = T>,
    E: Equality<T>,
    T: Sub<Output = T> + Clone + Debug,
{
    fn verify(&self, op: Op, equal: &E, identity: &T, a: &T, b: &B, c: &C) -> Verdict {
        <AbelianMonoid as AlgebraicStructure<Op, E, T, B, C>>::verify(
            &AbelianMonoid,
            op,
            equal,
            identity,
            a,
            b,
            c,
        )
        .merge(verify_inversion(op, equal, identity, a))
        .within(Self::NAME)
    }
}

macro_rules! structure_checks {
    ($(#[$doc:meta])* $structure:ident, $verify:ident, $check:ident, $check_equal:ident) => {
        $(#[$doc])*
        pub fn $verify<Op, E, T, B, C>(
            op: Op,
            equal: &E,
            identity: &T,
            a: &T,
            b: &B,
            c: &C,
        ) -> Verdict
        where
            $structure: AlgebraicStructure<Op, E, T, B, C>,
        {
            <$structure as AlgebraicStructure<Op, E, T, B, C>>::verify(
                &$structure,
                op,
                equal,
                identity,
                a,
                b,
                c,
            )
        }

        /// Assert the structure's laws with `PartialEq`.
        ///
        /// # Panics
        ///
        /// Panics listing every violated law.
        #[track_caller]
        pub fn $check<Op, T, B, C>(op: Op, identity: &T, a: &T, b: &B, c: &C)
        where
            $structure: AlgebraicStructure<Op, NaturalEquality, T, B, C>,
        {
            <$structure as AlgebraicStructure<Op, NaturalEquality, T, B, C>>::verify(
                &$structure,
                op,
                &NaturalEquality,
                identity,
                a,
                b,
                c,
            )
            .assert();
        }

        /// Assert the structure's laws with a custom equality.
        ///
        /// # Panics
        ///
        /// Panics listing every violated law.
        #[track_caller]
        pub fn $check_equal<Op, E, T, B, C>(
            op: Op,
            equal: &E,
            identity: &T,
            a: &T,
            b: &B,
            c: &C,
        ) where
            $structure: AlgebraicStructure<Op, E, T, B, C>,
        {
            <$structure as AlgebraicStructure<Op, E, T, B, C>>::verify(
                &$structure,
                op,
                equal,
                identity,
                a,
                b,
                c,
            )
            .assert();
        }
    };
}

structure_checks!(
    /// Evaluate associativity of `(a, b, c)` and neutrality of `a`.
    Monoid,
    verify_monoid,
    check_monoid,
    check_monoid_equal
);
structure_checks!(
    /// Evaluate the monoid laws plus commutativity of `a` with `b` and with `c`.
    AbelianMonoid,
    verify_abelian_monoid,
    check_abelian_monoid,
    check_abelian_monoid_equal
);
structure_checks!(
    /// Evaluate the abelian monoid laws plus `a - a == identity`.
    PartialInvertiveMonoid,
    verify_partial_invertive_monoid,
    check_partial_invertive_monoid,
    check_partial_invertive_monoid_equal
);
structure_checks!(
    /// Evaluate the abelian monoid laws plus both inversion laws.
    ///
    /// Only available for `Plus` and `Pipe`.
    AbelianGroup,
    verify_abelian_group,
    check_abelian_group,
    check_abelian_group_equal
);
