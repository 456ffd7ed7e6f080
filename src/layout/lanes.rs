// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Reverse;

use serde::Serialize;
use smallvec::SmallVec;

use super::classify::Classification;
use crate::model::Interval;

/// Vertical lanes available in every row.
pub const LANE_COUNT: u8 = 3;

/// The contiguous lane run `[slot, slot + span)` an interval's box occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaneAssignment {
    slot: u8,
    span: u8,
}

impl LaneAssignment {
    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn span(&self) -> u8 {
        self.span
    }

    fn mask(&self) -> LaneMask {
        LaneMask::run(self.slot, self.span)
    }

    /// True when the two runs share at least one lane.
    pub fn shares_lane_with(&self, other: &LaneAssignment) -> bool {
        self.mask().intersects(other.mask())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneLayout {
    assignments: Vec<LaneAssignment>,
    collisions: Vec<usize>,
}

impl LaneLayout {
    /// Assignments index-aligned with the input intervals.
    pub fn assignments(&self) -> &[LaneAssignment] {
        &self.assignments
    }

    /// Indices of intervals that found no free run and were parked at slot 0.
    ///
    /// Their boxes may be drawn over another active interval. This only happens when more
    /// intervals are active at once than the lanes can hold, or when a two-lane box arrives
    /// while the middle lane is taken.
    pub fn collisions(&self) -> &[usize] {
        &self.collisions
    }

    pub fn into_assignments(self) -> Vec<LaneAssignment> {
        self.assignments
    }
}

/// Bit set over the lanes of a row, bit `n` = lane `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LaneMask(u8);

impl LaneMask {
    const NONE: Self = Self(0);

    fn run(first: u8, span: u8) -> Self {
        let bits = (1u16 << span) - 1;
        Self(((bits << first) & 0xff) as u8)
    }

    fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Greedy sweep colouring of a day's intervals into [`LANE_COUNT`] lanes.
///
/// Intervals are visited by start time, longer ones first on ties and input order after that,
/// and each takes the lowest free run of [`Classification::lane_span`] lanes among the intervals
/// still active at its start. When no run is free the interval falls back to slot 0 and is
/// reported in [`LaneLayout::collisions`]. The result is fully determined by the input.
///
/// # Panics
///
/// Panics if `classifications` is not index-aligned with `intervals`.
pub fn assign_lanes(intervals: &[Interval], classifications: &[Classification]) -> LaneLayout {
    assert_eq!(
        intervals.len(),
        classifications.len(),
        "classifications must be index-aligned with intervals"
    );

    let mut order = (0..intervals.len()).collect::<Vec<_>>();
    order.sort_by_key(|&idx| {
        let interval = &intervals[idx];
        (interval.start(), Reverse(interval.duration()), idx)
    });

    let mut assignments = vec![LaneAssignment { slot: 0, span: 1 }; intervals.len()];
    let mut collisions = Vec::<usize>::new();
    let mut active = SmallVec::<[usize; 8]>::new();

    for idx in order {
        let current = &intervals[idx];
        active.retain(|other| intervals[*other].end() > current.start());

        let occupied = active
            .iter()
            .fold(LaneMask::NONE, |mask, other| mask.union(assignments[*other].mask()));

        let span = classifications[idx].lane_span();
        let slot = match (0..=LANE_COUNT - span)
            .find(|&first| !LaneMask::run(first, span).intersects(occupied))
        {
            Some(slot) => slot,
            None => {
                collisions.push(idx);
                0
            }
        };

        assignments[idx] = LaneAssignment { slot, span };
        active.push(idx);
    }

    collisions.sort_unstable();
    LaneLayout { assignments, collisions }
}

#[cfg(test)]
mod tests {
    use super::{assign_lanes, LaneLayout};
    use crate::layout::classify::classify_intervals;
    use crate::model::Interval;

    fn lay_out(spans: &[(i32, i32)]) -> LaneLayout {
        let intervals = spans
            .iter()
            .enumerate()
            .map(|(idx, &(start, end))| {
                Interval::new(start, end, format!("e{idx}")).expect("interval")
            })
            .collect::<Vec<_>>();
        let classifications = classify_intervals(&intervals);
        assign_lanes(&intervals, &classifications)
    }

    fn slots(layout: &LaneLayout) -> Vec<(u8, u8)> {
        layout.assignments().iter().map(|a| (a.slot(), a.span())).collect()
    }

    #[test]
    fn full_interval_spans_every_lane() {
        let layout = lay_out(&[(0, 100)]);
        assert_eq!(slots(&layout), vec![(0, 3)]);
        assert!(layout.collisions().is_empty());
    }

    #[test]
    fn overlapping_pair_takes_two_lanes() {
        let layout = lay_out(&[(30, 90), (0, 60)]);
        assert_eq!(slots(&layout), vec![(1, 1), (0, 1)]);
    }

    #[test]
    fn longer_interval_is_placed_first_on_equal_start() {
        let layout = lay_out(&[(0, 30), (0, 90)]);
        assert_eq!(slots(&layout), vec![(1, 1), (0, 1)]);
    }

    #[test]
    fn expired_lanes_are_reused() {
        // The first third ends at 60, freeing lane 0 for the fourth interval.
        let layout = lay_out(&[(0, 60), (20, 80), (40, 100), (60, 120)]);
        assert_eq!(slots(&layout), vec![(0, 1), (1, 1), (2, 1), (0, 1)]);
        assert!(layout.collisions().is_empty());
    }

    #[test]
    fn promoted_box_takes_a_lane_pair_around_the_third() {
        let layout = lay_out(&[(0, 12), (10, 40), (12, 60), (20, 70)]);
        assert_eq!(slots(&layout), vec![(0, 2), (2, 1), (0, 1), (1, 1)]);
        assert!(layout.collisions().is_empty());
    }

    #[test]
    fn squeezed_promoted_boxes_share_the_row_without_fallback() {
        let layout = lay_out(&[
            (0, 100),
            (0, 100),
            (0, 150),
            (120, 200),
            (230, 400),
            (310, 400),
            (310, 400),
            (160, 300),
        ]);
        assert_eq!(
            slots(&layout),
            vec![(1, 1), (2, 1), (0, 1), (1, 1), (1, 1), (0, 1), (2, 1), (0, 1)]
        );
        assert!(layout.collisions().is_empty());
    }

    #[test]
    fn four_concurrent_intervals_fall_back_to_slot_zero() {
        let layout = lay_out(&[(0, 100), (10, 100), (20, 100), (30, 100)]);
        assert_eq!(slots(&layout), vec![(0, 1), (1, 1), (2, 1), (0, 1)]);
        assert_eq!(layout.collisions(), &[3]);
    }

    #[test]
    fn every_slot_stays_in_range() {
        let layout = lay_out(&[(0, 50), (0, 50), (0, 50), (0, 50), (0, 50), (10, 20)]);
        for assignment in layout.assignments() {
            assert!(assignment.slot() + assignment.span() <= super::LANE_COUNT);
        }
        assert_eq!(layout.collisions().len(), 3);
    }
}
