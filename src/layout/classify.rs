// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::model::{Interval, Minutes};

/// How much of the row's vertical budget an interval's box may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeightClass {
    /// Never shares an instant with another interval.
    Full,
    /// Shares instants with at most one other interval at a time.
    Half,
    /// Part of a group of three or more simultaneously active intervals.
    Third,
    /// A `Half` that meets a `Third` somewhere in its span; takes two stacked slots.
    PromotedBig,
}

impl HeightClass {
    /// Number of lanes (out of [`super::LANE_COUNT`]) a box of this class occupies.
    pub fn lane_span(self) -> u8 {
        match self {
            Self::Full => 3,
            Self::PromotedBig => 2,
            Self::Half | Self::Third => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::Third => "third",
            Self::PromotedBig => "promoted-big",
        }
    }
}

impl fmt::Display for HeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    overlap_count: usize,
    peak_concurrency: usize,
    height_class: HeightClass,
    squeezed: bool,
}

impl Classification {
    /// Distinct other intervals sharing at least one instant with this one.
    pub fn overlap_count(&self) -> usize {
        self.overlap_count
    }

    /// Largest number of *other* intervals active at a single instant inside this span.
    pub fn peak_concurrency(&self) -> usize {
        self.peak_concurrency
    }

    pub fn height_class(&self) -> HeightClass {
        self.height_class
    }

    /// A `Half` or `PromotedBig` that shares time with a `PromotedBig` box.
    ///
    /// A promoted box needs two of the three lanes, so whatever runs next to it only gets a
    /// third-height slot. Two promoted boxes meeting each other both shrink to a single lane.
    pub fn is_squeezed(&self) -> bool {
        self.squeezed
    }

    /// Lanes the box occupies: the class width, or one lane once squeezed.
    pub fn lane_span(&self) -> u8 {
        if self.squeezed {
            1
        } else {
            self.height_class.lane_span()
        }
    }
}

/// A clipped boundary inside the interval being measured. `delta` is `-1` for ends and `+1`
/// for starts, so sorting by `(at, delta)` visits ends before starts at the same minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Boundary {
    at: Minutes,
    delta: i8,
}

/// Classifies every interval of a day by its worst instantaneous overlap.
///
/// Results are index-aligned with `intervals` and do not depend on their order. Cost is
/// `O(n² log n)`, fine for the handful of entries a day holds.
pub fn classify_intervals(intervals: &[Interval]) -> Vec<Classification> {
    let measured = intervals
        .iter()
        .enumerate()
        .map(|(idx, interval)| measure(idx, interval, intervals))
        .collect::<Vec<_>>();

    let raw_classes = measured
        .iter()
        .map(|&(_, peak)| match peak + 1 {
            1 => HeightClass::Full,
            2 => HeightClass::Half,
            _ => HeightClass::Third,
        })
        .collect::<Vec<_>>();

    let classes = raw_classes
        .iter()
        .enumerate()
        .map(|(idx, &class)| {
            let promoted = class == HeightClass::Half
                && touches_class(idx, intervals, &raw_classes, HeightClass::Third);
            if promoted {
                HeightClass::PromotedBig
            } else {
                class
            }
        })
        .collect::<Vec<_>>();

    measured
        .iter()
        .zip(&classes)
        .enumerate()
        .map(|(idx, (&(overlap_count, peak_concurrency), &height_class))| Classification {
            overlap_count,
            peak_concurrency,
            height_class,
            squeezed: matches!(height_class, HeightClass::Half | HeightClass::PromotedBig)
                && touches_class(idx, intervals, &classes, HeightClass::PromotedBig),
        })
        .collect()
}

/// Returns `(overlap_count, peak_concurrency)` for `intervals[idx]`.
fn measure(idx: usize, target: &Interval, intervals: &[Interval]) -> (usize, usize) {
    let mut boundaries = SmallVec::<[Boundary; 16]>::new();
    let mut overlap_count = 0usize;

    for (other_idx, other) in intervals.iter().enumerate() {
        if other_idx == idx || !other.overlaps(target) {
            continue;
        }
        overlap_count += 1;
        boundaries.push(Boundary { at: other.start().max(target.start()), delta: 1 });
        boundaries.push(Boundary { at: other.end().min(target.end()), delta: -1 });
    }

    boundaries.sort_unstable();

    let mut active = 0i32;
    let mut peak = 0i32;
    for boundary in &boundaries {
        active += i32::from(boundary.delta);
        peak = peak.max(active);
    }

    (overlap_count, peak as usize)
}

fn touches_class(
    idx: usize,
    intervals: &[Interval],
    classes: &[HeightClass],
    wanted: HeightClass,
) -> bool {
    let target = &intervals[idx];
    intervals.iter().zip(classes).enumerate().any(|(other_idx, (other, class))| {
        other_idx != idx && *class == wanted && other.overlaps(target)
    })
}
