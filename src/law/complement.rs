//! Laws relating an interval container to its hull and the gaps between its parts.
//!
//! Each law returns a record holding the verdict together with every intermediate
//! value, so a failing test can inspect how far the container got.
//!
//! ```rust
//! use algebraic_laws::law::complement::{has_length_complementarity, verify_length_as_distance};
//! use algebraic_laws::reference::{Interval, IntervalSet};
//!
//! let set: IntervalSet = [Interval::new(2, 5), Interval::new(8, 10)].into_iter().collect();
//! let record = verify_length_as_distance(&set);
//! assert!(record.holds());
//! assert_eq!(record.obj_dist, 3);
//! assert!(has_length_complementarity(&set));
//! ```

use std::fmt::Debug;
use std::ops::Add;

use super::containment::Domain;
use super::equality::NaturalEquality;
use super::verdict::{Law, Verdict};

/// Length and distance of a container.
pub trait Measure {
    /// Type of lengths and distances.
    type Difference;

    /// Total length covered.
    fn length(&self) -> Self::Difference;

    /// Total length of the gaps between the covered parts.
    fn distance(&self) -> Self::Difference;
}

/// Smallest interval covering a container.
pub trait Hull {
    /// The covering interval type.
    type Output;

    /// The covering interval.
    fn hull(&self) -> Self::Output;
}

/// The gaps between the covered parts of a container.
pub trait Between {
    /// Set of gaps.
    type Gaps;

    /// The gaps, as a set.
    fn between(&self) -> Self::Gaps;
}

/// Coalescing of adjacent parts.
pub trait Join {
    /// Merge every pair of touching parts, in place.
    fn join(&mut self);
}

/// Intermediates of [`verify_length_as_distance`].
#[derive(Debug, Clone, PartialEq)]
pub struct LengthAsDistance<S, D> {
    /// `between(x)`.
    pub in_between: S,
    /// `length(between(x))`.
    pub between_len: D,
    /// `distance(x)`.
    pub obj_dist: D,
    /// Outcome.
    pub verdict: Verdict,
}

impl<S, D> LengthAsDistance<S, D> {
    /// True if the law held.
    pub fn holds(&self) -> bool {
        self.verdict.holds()
    }
}

/// Intermediates of [`verify_length_complementarity`].
#[derive(Debug, Clone, PartialEq)]
pub struct LengthComplementarity<D> {
    /// `length(x)`.
    pub obj_len: D,
    /// `distance(x)`.
    pub obj_dist: D,
    /// `length(hull(x))`.
    pub hull_len: D,
    /// Outcome.
    pub verdict: Verdict,
}

impl<D> LengthComplementarity<D> {
    /// True if the law held.
    pub fn holds(&self) -> bool {
        self.verdict.holds()
    }
}

/// Intermediates of [`verify_inner_complementarity`].
#[derive(Debug, Clone, PartialEq)]
pub struct InnerComplementarity<S> {
    /// `between(x)`.
    pub in_between: S,
    /// `join(domain(x) + between(x))`.
    pub lhs: S,
    /// `hull(x)` as a set.
    pub rhs: S,
    /// Outcome.
    pub verdict: Verdict,
}

impl<S> InnerComplementarity<S> {
    /// True if the law held.
    pub fn holds(&self) -> bool {
        self.verdict.holds()
    }
}

/// Evaluate `distance(x) == length(between(x))`.
pub fn verify_length_as_distance<T>(object: &T) -> LengthAsDistance<T::Gaps, T::Difference>
where
    T: Measure + Between,
    T::Gaps: Measure<Difference = T::Difference>,
    T::Difference: PartialEq + Debug,
{
    let in_between = object.between();
    let between_len = in_between.length();
    let obj_dist = object.distance();
    let verdict = Verdict::compare(
        Law::LengthAsDistance,
        None,
        &NaturalEquality,
        &obj_dist,
        &between_len,
        "distance(x) == length(between(x))",
    );
    LengthAsDistance {
        in_between,
        between_len,
        obj_dist,
        verdict,
    }
}

/// Assert `distance(x) == length(between(x))` and return the intermediates.
///
/// # Panics
///
/// Panics if the law does not hold.
#[track_caller]
pub fn check_length_as_distance<T>(object: &T) -> LengthAsDistance<T::Gaps, T::Difference>
where
    T: Measure + Between,
    T::Gaps: Measure<Difference = T::Difference>,
    T::Difference: PartialEq + Debug,
{
    let record = verify_length_as_distance(object);
    record.verdict.assert();
    record
}

/// `distance(x) == length(between(x))`, as a boolean.
pub fn has_length_as_distance<T>(object: &T) -> bool
where
    T: Measure + Between,
    T::Gaps: Measure<Difference = T::Difference>,
    T::Difference: PartialEq + Debug,
{
    verify_length_as_distance(object).holds()
}

/// Evaluate `length(x) + distance(x) == length(hull(x))`.
pub fn verify_length_complementarity<T>(object: &T) -> LengthComplementarity<T::Difference>
where
    T: Measure + Hull,
    <T as Hull>::Output: Measure<Difference = T::Difference>,
    T::Difference: Add<Output = T::Difference> + Clone + PartialEq + Debug,
{
    let obj_len = object.length();
    let obj_dist = object.distance();
    let hull_len = object.hull().length();
    let total = obj_len.clone() + obj_dist.clone();
    let verdict = Verdict::compare(
        Law::LengthComplementarity,
        None,
        &NaturalEquality,
        &total,
        &hull_len,
        "length(x) + distance(x) == length(hull(x))",
    );
    LengthComplementarity {
        obj_len,
        obj_dist,
        hull_len,
        verdict,
    }
}

/// Assert `length(x) + distance(x) == length(hull(x))` and return the intermediates.
///
/// # Panics
///
/// Panics if the law does not hold.
#[track_caller]
pub fn check_length_complementarity<T>(object: &T) -> LengthComplementarity<T::Difference>
where
    T: Measure + Hull,
    <T as Hull>::Output: Measure<Difference = T::Difference>,
    T::Difference: Add<Output = T::Difference> + Clone + PartialEq + Debug,
{
    let record = verify_length_complementarity(object);
    record.verdict.assert();
    record
}

/// `length(x) + distance(x) == length(hull(x))`, as a boolean.
pub fn has_length_complementarity<T>(object: &T) -> bool
where
    T: Measure + Hull,
    <T as Hull>::Output: Measure<Difference = T::Difference>,
    T::Difference: Add<Output = T::Difference> + Clone + PartialEq + Debug,
{
    verify_length_complementarity(object).holds()
}

/// Evaluate `join(domain(x) + between(x)) == hull(x)`, with the hull converted to the
/// domain's set type.
pub fn verify_inner_complementarity<T>(object: &T) -> InnerComplementarity<T::Set>
where
    T: Domain + Between<Gaps = <T as Domain>::Set> + Hull,
    T::Set: Add<Output = T::Set> + Join + From<<T as Hull>::Output> + Clone + PartialEq + Debug,
{
    let in_between = object.between();
    let mut lhs = object.domain() + in_between.clone();
    lhs.join();
    let rhs = <T::Set>::from(object.hull());
    let verdict = Verdict::compare(
        Law::InnerComplementarity,
        None,
        &NaturalEquality,
        &lhs,
        &rhs,
        "join(domain(x) + between(x)) == hull(x)",
    );
    InnerComplementarity {
        in_between,
        lhs,
        rhs,
        verdict,
    }
}

/// Assert `join(domain(x) + between(x)) == hull(x)` and return the intermediates.
///
/// # Panics
///
/// Panics if the law does not hold.
#[track_caller]
pub fn check_inner_complementarity<T>(object: &T) -> InnerComplementarity<T::Set>
where
    T: Domain + Between<Gaps = <T as Domain>::Set> + Hull,
    T::Set: Add<Output = T::Set> + Join + From<<T as Hull>::Output> + Clone + PartialEq + Debug,
{
    let record = verify_inner_complementarity(object);
    record.verdict.assert();
    record
}

/// `join(domain(x) + between(x)) == hull(x)`, as a boolean.
pub fn has_inner_complementarity<T>(object: &T) -> bool
where
    T: Domain + Between<Gaps = <T as Domain>::Set> + Hull,
    T::Set: Add<Output = T::Set> + Join + From<<T as Hull>::Output> + Clone + PartialEq + Debug,
{
    verify_inner_complementarity(object).holds()
}
