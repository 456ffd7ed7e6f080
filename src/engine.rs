// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Day and multi-day drivers for the layout pipeline.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::layout::{
    assign_lanes, classify_intervals, interval_box, rest_blocks, BoxGeometry, Classification,
    HeightClass, LaneAssignment, RestBlock,
};
use crate::model::{Day, DayId, Minutes};

/// Everything derived for one interval, keyed by its index in the day's list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalLayout {
    index: usize,
    #[serde(flatten)]
    classification: Classification,
    #[serde(flatten)]
    lanes: LaneAssignment,
    geometry: BoxGeometry,
}

impl IntervalLayout {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn overlap_count(&self) -> usize {
        self.classification.overlap_count()
    }

    pub fn peak_concurrency(&self) -> usize {
        self.classification.peak_concurrency()
    }

    pub fn height_class(&self) -> HeightClass {
        self.classification.height_class()
    }

    pub fn is_squeezed(&self) -> bool {
        self.classification.is_squeezed()
    }

    pub fn slot(&self) -> u8 {
        self.lanes.slot()
    }

    pub fn slot_span(&self) -> u8 {
        self.lanes.span()
    }

    pub fn lanes(&self) -> &LaneAssignment {
        &self.lanes
    }

    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout {
    day_id: DayId,
    intervals: Vec<IntervalLayout>,
    rest_blocks: Vec<RestBlock>,
    collisions: Vec<usize>,
}

impl DayLayout {
    pub fn day_id(&self) -> &DayId {
        &self.day_id
    }

    /// Per-interval results, index-aligned with [`Day::intervals`].
    pub fn intervals(&self) -> &[IntervalLayout] {
        &self.intervals
    }

    pub fn rest_blocks(&self) -> &[RestBlock] {
        &self.rest_blocks
    }

    /// Intervals that could not get a free lane run (see [`crate::layout::LaneLayout`]).
    pub fn collisions(&self) -> &[usize] {
        &self.collisions
    }
}

/// Lays out a single day.
///
/// `prior_sleep` is the previous row's sleep marker on that row's own timeline; it only affects
/// the leading rest block.
pub fn layout_day(day: &Day, prior_sleep: Option<Minutes>, config: &LayoutConfig) -> DayLayout {
    let _span = tracing::debug_span!("layout_day", day = %day.id()).entered();

    let intervals = day.intervals();
    let classifications = classify_intervals(intervals);
    let lane_layout = assign_lanes(intervals, &classifications);

    if !lane_layout.collisions().is_empty() {
        tracing::warn!(
            day = %day.id(),
            collisions = ?lane_layout.collisions(),
            "no free lane run; boxes parked at slot 0 may overlap"
        );
    }

    let interval_layouts = intervals
        .iter()
        .zip(classifications)
        .zip(lane_layout.assignments())
        .enumerate()
        .map(|(index, ((interval, classification), lanes))| IntervalLayout {
            index,
            classification,
            lanes: *lanes,
            geometry: interval_box(
                interval.start(),
                interval.end(),
                &classification,
                *lanes,
                config,
            ),
        })
        .collect::<Vec<_>>();

    let rest_blocks = rest_blocks(prior_sleep, day.markers(), config).into_vec();

    tracing::debug!(
        intervals = interval_layouts.len(),
        rest_blocks = rest_blocks.len(),
        "laid out day"
    );

    DayLayout {
        day_id: day.id().clone(),
        intervals: interval_layouts,
        rest_blocks,
        collisions: lane_layout.collisions().to_vec(),
    }
}

/// Lays out consecutive days, linking each to the previous day's sleep marker.
///
/// Days are independent apart from that link, so they are laid out in parallel. The output is in
/// input order.
///
/// Dates are not inspected. The previous entry is always taken as the day before, so a gap in
/// the dates (a missing day) gives the later day a wrong leading rest block drawn from a sleep
/// marker that belongs to an earlier night. Pass one entry per calendar day, or split the input
/// at each gap.
pub fn layout_days(days: &[Day], config: &LayoutConfig) -> Vec<DayLayout> {
    let prior_sleeps = std::iter::once(None)
        .chain(days.iter().map(|day| day.markers().sleep()))
        .take(days.len())
        .collect::<Vec<_>>();

    tracing::debug!(days = days.len(), "laying out days");

    days.par_iter()
        .zip(prior_sleeps.par_iter())
        .map(|(day, prior_sleep)| layout_day(day, *prior_sleep, config))
        .collect()
}
