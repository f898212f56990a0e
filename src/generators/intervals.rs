//! Reference interval containers with small, overlapping coordinates.
//!
//! Coordinates are drawn from a narrow range so that generated operands overlap,
//! touch and nest often enough to exercise every merge path.

use proptest::prelude::*;

use crate::reference::{Interval, IntervalMap, IntervalSet};

/// Coordinate range used by every strategy in this module.
pub const COORDINATES: std::ops::Range<i64> = -20..20;

/// Non-empty interval within [`COORDINATES`].
pub fn interval() -> impl Strategy<Value = Interval> {
    (COORDINATES, 1_i64..8).prop_map(|(lower, len)| Interval::new(lower, lower + len))
}

/// Interval set built from up to `max_segments` random intervals.
pub fn interval_set(max_segments: usize) -> impl Strategy<Value = IntervalSet> {
    prop::collection::vec(interval(), 0..=max_segments)
        .prop_map(|intervals| intervals.into_iter().collect())
}

/// Interval map built from up to `max_segments` random inserts.
pub fn interval_map(max_segments: usize) -> impl Strategy<Value = IntervalMap<i32>> {
    prop::collection::vec((interval(), -3_i32..=3), 0..=max_segments)
        .prop_map(|entries| entries.into_iter().collect())
}
