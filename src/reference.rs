//! Reference interval containers over `i64`.
//!
//! Small, deliberately simple containers that implement every collaborator trait
//! the interval laws need. They let the harness check its own laws and give
//! downstream suites a known-good baseline to compare their containers against.
//!
//! - [`Interval`] is half-open: `[lower, upper)`. Every empty interval is the same
//!   value, [`Interval::EMPTY`].
//! - [`IntervalSet`] keeps its segments sorted and merges overlapping ones, but keeps
//!   touching segments apart (`[1, 3)` and `[3, 5)` stay two segments). [`Join`]
//!   coalesces them, and [`IntervalSet::element_equal`] compares the covered points
//!   only.
//! - [`IntervalMap`] associates a value with each segment; a later insert overwrites
//!   the overlapped part of earlier ones.
//!
//! ```rust
//! use algebraic_laws::reference::{Interval, IntervalSet};
//!
//! let a: IntervalSet = [Interval::new(1, 3), Interval::new(3, 5)].into_iter().collect();
//! assert_eq!(a.segments().len(), 2);
//! assert!(a.element_equal(&IntervalSet::from(Interval::new(1, 5))));
//! ```

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Sub};

use serde::Serialize;

use crate::law::complement::{Between, Hull, Join, Measure};
use crate::law::containment::{Contains, Domain, ElementSet};
use crate::law::identity::IdentityElement;

/// Half-open interval `[lower, upper)` over `i64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Interval {
    lower: i64,
    upper: i64,
}

impl Interval {
    /// The empty interval.
    pub const EMPTY: Interval = Interval { lower: 0, upper: 0 };

    /// `[lower, upper)`, or [`Interval::EMPTY`] when `upper <= lower`.
    pub fn new(lower: i64, upper: i64) -> Self {
        if lower < upper {
            Self { lower, upper }
        } else {
            Self::EMPTY
        }
    }

    /// The single point `[x, x + 1)`.
    ///
    /// `i64::MAX` has no exclusive upper bound, so `point(i64::MAX)` is
    /// [`Interval::EMPTY`]; the largest representable point is `i64::MAX - 1`.
    pub fn point(x: i64) -> Self {
        Self::new(x, x.saturating_add(1))
    }

    /// Inclusive lower bound.
    pub fn lower(&self) -> i64 {
        self.lower
    }

    /// Exclusive upper bound.
    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// True if no point is covered.
    pub fn is_empty(&self) -> bool {
        self.lower >= self.upper
    }

    /// Number of covered points. Widened, since `[i64::MIN, i64::MAX)` covers more
    /// points than `i64` can count.
    pub fn len(&self) -> i128 {
        i128::from(self.upper) - i128::from(self.lower)
    }

    /// True if `x` lies in `[lower, upper)`.
    pub fn contains_point(&self, x: i64) -> bool {
        self.lower <= x && x < self.upper
    }

    /// Common part of both intervals.
    pub fn intersect(&self, other: &Interval) -> Interval {
        Interval::new(self.lower.max(other.lower), self.upper.min(other.upper))
    }

    /// True if both intervals share at least one point.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Smallest interval covering both.
    pub fn span(&self, other: &Interval) -> Interval {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => *other,
            (_, true) => *self,
            _ => Interval::new(self.lower.min(other.lower), self.upper.max(other.upper)),
        }
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("[)")
        } else {
            write!(f, "[{}, {})", self.lower, self.upper)
        }
    }
}

impl Measure for Interval {
    type Difference = i128;

    fn length(&self) -> i128 {
        self.len()
    }

    fn distance(&self) -> i128 {
        0
    }
}

/// Sorted set of non-overlapping, non-empty intervals.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct IntervalSet {
    segments: Vec<Interval>,
}

impl IntervalSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments in ascending order.
    pub fn segments(&self) -> &[Interval] {
        &self.segments
    }

    /// True if the set has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Add `interval`, merging it with every segment it overlaps.
    pub fn insert(&mut self, interval: Interval) {
        if interval.is_empty() {
            return;
        }
        let mut merged = interval;
        self.segments.retain(|segment| {
            if segment.overlaps(&merged) {
                merged = merged.span(segment);
                false
            } else {
                true
            }
        });
        let at = self
            .segments
            .partition_point(|segment| segment.lower < merged.lower);
        self.segments.insert(at, merged);
    }

    /// Remove every point of `interval`.
    pub fn remove(&mut self, interval: Interval) {
        if interval.is_empty() {
            return;
        }
        self.segments = self
            .segments
            .iter()
            .flat_map(|segment| {
                if segment.overlaps(&interval) {
                    [
                        Interval::new(segment.lower, interval.lower.min(segment.upper)),
                        Interval::new(interval.upper.max(segment.lower), segment.upper),
                    ]
                } else {
                    [*segment, Interval::EMPTY]
                }
            })
            .filter(|piece| !piece.is_empty())
            .collect();
    }

    /// True if some segment covers `x`.
    pub fn contains_point(&self, x: i64) -> bool {
        self.segments.iter().any(|segment| segment.contains_point(x))
    }

    /// True if every point of `interval` is covered, possibly by several touching
    /// segments.
    pub fn covers(&self, interval: &Interval) -> bool {
        if interval.is_empty() {
            return true;
        }
        let mut cursor = interval.lower;
        for segment in &self.segments {
            if segment.lower <= cursor && cursor < segment.upper {
                cursor = segment.upper;
            }
            if cursor >= interval.upper {
                return true;
            }
        }
        false
    }

    /// Union of both point sets.
    pub fn union(&self, other: &IntervalSet) -> IntervalSet {
        let mut out = self.clone();
        for segment in &other.segments {
            out.insert(*segment);
        }
        out
    }

    /// Points in both sets.
    pub fn intersection(&self, other: &IntervalSet) -> IntervalSet {
        let mut out = IntervalSet::new();
        for left in &self.segments {
            for right in &other.segments {
                out.insert(left.intersect(right));
            }
        }
        out
    }

    /// Points in `self` but not in `other`.
    pub fn difference(&self, other: &IntervalSet) -> IntervalSet {
        let mut out = self.clone();
        for segment in &other.segments {
            out.remove(*segment);
        }
        out
    }

    /// Points in exactly one of the sets.
    pub fn symmetric_difference(&self, other: &IntervalSet) -> IntervalSet {
        self.difference(other).union(&other.difference(self))
    }

    /// Copy with touching segments coalesced.
    pub fn joined(&self) -> IntervalSet {
        let mut out = self.clone();
        out.join();
        out
    }

    /// True if both sets cover the same points, regardless of segmentation.
    pub fn element_equal(&self, other: &IntervalSet) -> bool {
        self.joined() == other.joined()
    }
}

impl fmt::Debug for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.segments).finish()
    }
}

impl From<Interval> for IntervalSet {
    fn from(interval: Interval) -> Self {
        let mut set = IntervalSet::new();
        set.insert(interval);
        set
    }
}

impl From<i64> for IntervalSet {
    fn from(x: i64) -> Self {
        IntervalSet::from(Interval::point(x))
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut set = IntervalSet::new();
        for interval in iter {
            set.insert(interval);
        }
        set
    }
}

impl IdentityElement for IntervalSet {
    fn identity_element() -> Self {
        IntervalSet::new()
    }
}

macro_rules! set_operator {
    ($trait:ident, $method:ident, $combine:ident) => {
        impl<R: Into<IntervalSet>> $trait<R> for IntervalSet {
            type Output = IntervalSet;

            fn $method(self, rhs: R) -> IntervalSet {
                self.$combine(&rhs.into())
            }
        }

        impl $trait<IntervalSet> for Interval {
            type Output = IntervalSet;

            fn $method(self, rhs: IntervalSet) -> IntervalSet {
                IntervalSet::from(self).$combine(&rhs)
            }
        }

        impl $trait<IntervalSet> for i64 {
            type Output = IntervalSet;

            fn $method(self, rhs: IntervalSet) -> IntervalSet {
                IntervalSet::from(self).$combine(&rhs)
            }
        }
    };
}

set_operator!(Add, add, union);
set_operator!(BitOr, bitor, union);
set_operator!(BitAnd, bitand, intersection);
set_operator!(BitXor, bitxor, symmetric_difference);
set_operator!(Sub, sub, difference);

impl Contains<IntervalSet> for IntervalSet {
    fn contains(&self, rhs: &IntervalSet) -> bool {
        rhs.segments.iter().all(|segment| self.covers(segment))
    }
}

impl Contains<Interval> for IntervalSet {
    fn contains(&self, rhs: &Interval) -> bool {
        self.covers(rhs)
    }
}

impl Contains<i64> for IntervalSet {
    fn contains(&self, rhs: &i64) -> bool {
        self.contains_point(*rhs)
    }
}

impl Domain for IntervalSet {
    type Set = IntervalSet;

    fn domain(&self) -> IntervalSet {
        self.clone()
    }
}

impl ElementSet for IntervalSet {
    type Element = i64;

    fn first_element(&self) -> Option<i64> {
        self.segments.first().map(Interval::lower)
    }

    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Measure for IntervalSet {
    type Difference = i128;

    fn length(&self) -> i128 {
        self.segments.iter().map(Interval::len).sum()
    }

    fn distance(&self) -> i128 {
        self.segments
            .windows(2)
            .map(|pair| i128::from(pair[1].lower) - i128::from(pair[0].upper))
            .sum()
    }
}

impl Hull for IntervalSet {
    type Output = Interval;

    fn hull(&self) -> Interval {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => Interval::new(first.lower, last.upper),
            _ => Interval::EMPTY,
        }
    }
}

impl Between for IntervalSet {
    type Gaps = IntervalSet;

    fn between(&self) -> IntervalSet {
        self.segments
            .windows(2)
            .map(|pair| Interval::new(pair[0].upper, pair[1].lower))
            .collect()
    }
}

impl Join for IntervalSet {
    fn join(&mut self) {
        let mut joined: Vec<Interval> = Vec::with_capacity(self.segments.len());
        for segment in self.segments.drain(..) {
            match joined.last_mut() {
                Some(last) if last.upper == segment.lower => last.upper = segment.upper,
                _ => joined.push(segment),
            }
        }
        self.segments = joined;
    }
}

/// Sorted map from non-overlapping, non-empty intervals to values.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct IntervalMap<V> {
    segments: Vec<(Interval, V)>,
}

impl<V> Default for IntervalMap<V> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<V: Clone> IntervalMap<V> {
    /// The empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments and their values in ascending order.
    pub fn segments(&self) -> &[(Interval, V)] {
        &self.segments
    }

    /// True if the map has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Associate `value` with `interval`, overwriting the overlapped parts of
    /// existing segments.
    pub fn insert(&mut self, interval: Interval, value: V) {
        if interval.is_empty() {
            return;
        }
        let mut kept = Vec::with_capacity(self.segments.len() + 2);
        for (segment, existing) in self.segments.drain(..) {
            if !segment.overlaps(&interval) {
                kept.push((segment, existing));
                continue;
            }
            let left = Interval::new(segment.lower, interval.lower);
            let right = Interval::new(interval.upper, segment.upper);
            if !left.is_empty() {
                kept.push((left, existing.clone()));
            }
            if !right.is_empty() {
                kept.push((right, existing));
            }
        }
        let at = kept.partition_point(|(segment, _)| segment.lower < interval.lower);
        kept.insert(at, (interval, value));
        self.segments = kept;
    }

    /// Value at point `x`.
    pub fn get(&self, x: i64) -> Option<&V> {
        self.segments
            .iter()
            .find(|(segment, _)| segment.contains_point(x))
            .map(|(_, value)| value)
    }
}

impl<V: fmt::Debug> fmt::Debug for IntervalMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.segments.iter().map(|(segment, value)| (segment, value)))
            .finish()
    }
}

impl<V: Clone> FromIterator<(Interval, V)> for IntervalMap<V> {
    fn from_iter<I: IntoIterator<Item = (Interval, V)>>(iter: I) -> Self {
        let mut map = IntervalMap::new();
        for (interval, value) in iter {
            map.insert(interval, value);
        }
        map
    }
}

impl<V> IdentityElement for IntervalMap<V> {
    fn identity_element() -> Self {
        IntervalMap::default()
    }
}

/// Intersection that adds the values of overlapping segments.
///
/// `a & b` generally carries values found in neither operand, which is why
/// intersection containedness does not apply to such maps.
impl<V: Add<Output = V> + Clone> BitAnd for IntervalMap<V> {
    type Output = IntervalMap<V>;

    fn bitand(self, rhs: IntervalMap<V>) -> IntervalMap<V> {
        let mut out = IntervalMap::new();
        for (left, left_value) in &self.segments {
            for (right, right_value) in &rhs.segments {
                out.insert(
                    left.intersect(right),
                    left_value.clone() + right_value.clone(),
                );
            }
        }
        out
    }
}

impl<V> Domain for IntervalMap<V> {
    type Set = IntervalSet;

    fn domain(&self) -> IntervalSet {
        self.segments.iter().map(|(segment, _)| *segment).collect()
    }
}

impl<V> Contains<IntervalSet> for IntervalMap<V> {
    fn contains(&self, rhs: &IntervalSet) -> bool {
        self.domain().contains(rhs)
    }
}

impl<V> Contains<i64> for IntervalMap<V> {
    fn contains(&self, rhs: &i64) -> bool {
        self.segments
            .iter()
            .any(|(segment, _)| segment.contains_point(*rhs))
    }
}

/// Every segment of `rhs` is covered by segments of `self` carrying an equal value.
impl<V: PartialEq> Contains<IntervalMap<V>> for IntervalMap<V> {
    fn contains(&self, rhs: &IntervalMap<V>) -> bool {
        rhs.segments.iter().all(|(segment, value)| {
            let matching: IntervalSet = self
                .segments
                .iter()
                .filter(|(_, candidate)| candidate == value)
                .map(|(candidate, _)| *candidate)
                .collect();
            matching.covers(segment)
        })
    }
}

impl<V> Measure for IntervalMap<V> {
    type Difference = i128;

    fn length(&self) -> i128 {
        self.domain().length()
    }

    fn distance(&self) -> i128 {
        self.domain().distance()
    }
}

impl<V> Hull for IntervalMap<V> {
    type Output = Interval;

    fn hull(&self) -> Interval {
        self.domain().hull()
    }
}

impl<V> Between for IntervalMap<V> {
    type Gaps = IntervalSet;

    fn between(&self) -> IntervalSet {
        self.domain().between()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(intervals: &[(i64, i64)]) -> IntervalSet {
        intervals
            .iter()
            .map(|&(lower, upper)| Interval::new(lower, upper))
            .collect()
    }

    #[test]
    fn empty_intervals_are_canonical() {
        assert_eq!(Interval::new(5, 5), Interval::EMPTY);
        assert_eq!(Interval::new(7, 3), Interval::EMPTY);
        assert_eq!(format!("{:?}", Interval::new(2, 10)), "[2, 10)");
        assert_eq!(Interval::point(4).len(), 1);
    }

    #[test]
    fn insert_merges_overlaps_but_not_touches() {
        let s = set(&[(1, 3), (3, 5), (8, 9)]);
        assert_eq!(s.segments().len(), 3);
        let merged = s.clone() + Interval::new(2, 4);
        assert_eq!(merged, set(&[(1, 5), (8, 9)]));
        assert_eq!(format!("{merged:?}"), "{[1, 5), [8, 9)}");
    }

    #[test]
    fn join_coalesces_touching_segments() {
        let mut s = set(&[(1, 3), (3, 5), (6, 7)]);
        s.join();
        assert_eq!(s.segments(), &[Interval::new(1, 5), Interval::new(6, 7)]);
        assert!(set(&[(1, 3), (3, 5)]).element_equal(&set(&[(1, 5)])));
        assert_ne!(set(&[(1, 3), (3, 5)]), set(&[(1, 5)]));
    }

    #[test]
    fn set_operators_follow_point_semantics() {
        let a = set(&[(0, 10)]);
        let b = set(&[(5, 15)]);
        assert_eq!(a.clone() & b.clone(), set(&[(5, 10)]));
        assert_eq!(a.clone() - b.clone(), set(&[(0, 5)]));
        assert_eq!(a.clone() ^ b.clone(), set(&[(0, 5), (10, 15)]));
        assert_eq!(a.clone() | b.clone(), set(&[(0, 15)]));
        assert_eq!(3_i64 + IntervalSet::new(), set(&[(3, 4)]));
        assert_eq!(Interval::new(2, 4) & a.clone(), set(&[(2, 4)]));
        assert!((a.clone() - a).is_empty());
    }

    #[test]
    fn containment_ignores_segmentation() {
        let s = set(&[(1, 3), (3, 5)]);
        assert!(s.contains(&Interval::new(2, 4)));
        assert!(s.contains(&4_i64));
        assert!(!s.contains(&5_i64));
        assert!(s.contains(&IntervalSet::new()));
    }

    #[test]
    fn measures_of_a_gapped_set() {
        let s = set(&[(2, 5), (8, 10)]);
        assert_eq!(s.length(), 5);
        assert_eq!(s.distance(), 3);
        assert_eq!(s.hull(), Interval::new(2, 10));
        assert_eq!(s.between(), set(&[(5, 8)]));
        assert_eq!(s.first_element(), Some(2));
    }

    #[test]
    fn measures_span_the_whole_coordinate_range() {
        let ends = set(&[(i64::MIN, i64::MIN + 1), (i64::MAX - 1, i64::MAX)]);
        assert_eq!(ends.length(), 2);
        assert_eq!(ends.distance(), i128::from(u64::MAX) - 2);
        assert_eq!(ends.hull().len(), i128::from(u64::MAX));

        let halves = set(&[(i64::MIN, 0), (1, i64::MAX)]);
        assert_eq!(halves.length(), i128::from(u64::MAX) - 1);
        assert_eq!(halves.distance(), 1);
    }

    #[test]
    fn largest_coordinate_is_not_a_point() {
        assert_eq!(Interval::point(i64::MAX), Interval::EMPTY);
        assert_eq!(Interval::point(i64::MAX - 1).len(), 1);
        assert!((IntervalSet::new() + i64::MAX).is_empty());
        assert!((IntervalSet::new() + (i64::MAX - 1)).contains_point(i64::MAX - 1));
    }

    #[test]
    fn later_map_insert_wins() {
        let mut map = IntervalMap::new();
        map.insert(Interval::new(0, 10), 'a');
        map.insert(Interval::new(3, 6), 'b');
        assert_eq!(map.get(2), Some(&'a'));
        assert_eq!(map.get(4), Some(&'b'));
        assert_eq!(map.get(8), Some(&'a'));
        assert_eq!(map.get(10), None);
        assert_eq!(map.segments().len(), 3);
        assert_eq!(map.domain(), set(&[(0, 3), (3, 6), (6, 10)]));
    }

    #[test]
    fn value_adding_intersection_escapes_its_operand() {
        let a: IntervalMap<i32> = [(Interval::new(0, 4), 1)].into_iter().collect();
        let b: IntervalMap<i32> = [(Interval::new(2, 6), 2)].into_iter().collect();
        let both = a.clone() & b;
        assert_eq!(both.get(3), Some(&3));
        assert!(!a.contains(&both));
        assert!(a.contains(&a.clone()));
    }
}
