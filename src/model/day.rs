// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::DayId;
use super::interval::Interval;
use super::time::Minutes;

/// One timeline row: the intervals of a calendar date plus its tracked marker instants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    id: DayId,
    intervals: Vec<Interval>,
    markers: DayMarkers,
}

impl Day {
    pub fn new(id: DayId) -> Self {
        Self { id, intervals: Vec::new(), markers: DayMarkers::default() }
    }

    pub fn with_intervals(id: DayId, intervals: Vec<Interval>) -> Self {
        Self { id, intervals, markers: DayMarkers::default() }
    }

    pub fn id(&self) -> &DayId {
        &self.id
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn intervals_mut(&mut self) -> &mut Vec<Interval> {
        &mut self.intervals
    }

    pub fn markers(&self) -> &DayMarkers {
        &self.markers
    }

    pub fn markers_mut(&mut self) -> &mut DayMarkers {
        &mut self.markers
    }
}

/// Bare timestamps recorded for a day (no label, no duration).
///
/// The first marker is read as the wake-up instant and the last as the sleep instant; a single
/// marker is both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayMarkers {
    instants: Vec<Minutes>,
}

impl DayMarkers {
    pub fn new(instants: Vec<Minutes>) -> Self {
        Self { instants }
    }

    pub fn push(&mut self, instant: Minutes) {
        self.instants.push(instant);
    }

    pub fn instants(&self) -> &[Minutes] {
        &self.instants
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    pub fn wake(&self) -> Option<Minutes> {
        self.instants.first().copied()
    }

    pub fn sleep(&self) -> Option<Minutes> {
        self.instants.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{Day, DayMarkers};
    use crate::model::ids::DayId;
    use crate::model::interval::Interval;

    #[test]
    fn markers_read_first_as_wake_and_last_as_sleep() {
        let markers = DayMarkers::new(vec![420, 800, 1410]);
        assert_eq!(markers.wake(), Some(420));
        assert_eq!(markers.sleep(), Some(1410));

        let single = DayMarkers::new(vec![600]);
        assert_eq!(single.wake(), Some(600));
        assert_eq!(single.sleep(), Some(600));

        let empty = DayMarkers::default();
        assert_eq!(empty.wake(), None);
        assert_eq!(empty.sleep(), None);
    }

    #[test]
    fn day_keeps_intervals_in_insertion_order() {
        let mut day = Day::new(DayId::new("2026-01-05").expect("day id"));
        day.intervals_mut().push(Interval::new(600, 660, "b").expect("interval"));
        day.intervals_mut().push(Interval::new(540, 600, "a").expect("interval"));
        day.markers_mut().push(420);

        let labels = day.intervals().iter().map(Interval::label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["b", "a"]);
        assert_eq!(day.markers().wake(), Some(420));
    }
}
