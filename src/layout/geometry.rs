// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;
use smallvec::SmallVec;

use super::classify::{Classification, HeightClass};
use super::lanes::{LaneAssignment, LANE_COUNT};
use crate::config::LayoutConfig;
use crate::model::{DayMarkers, Minutes, DAY_SPAN};

/// A box inside a day row.
///
/// `top`/`height` are pixels of the configured row height; `left_pct`/`width_pct` are percent of
/// the row width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxGeometry {
    top: f64,
    height: f64,
    left_pct: f64,
    width_pct: f64,
}

impl BoxGeometry {
    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn left_pct(&self) -> f64 {
        self.left_pct
    }

    pub fn width_pct(&self) -> f64 {
        self.width_pct
    }

    pub fn top_pct(&self, config: &LayoutConfig) -> f64 {
        self.top / config.row_height * 100.0
    }

    pub fn height_pct(&self, config: &LayoutConfig) -> f64 {
        self.height / config.row_height * 100.0
    }
}

/// Maps a classified, lane-assigned interval onto its box.
///
/// Squeezed intervals keep their class but are drawn at third height so they fit beside the
/// promoted box they share time with: the top third from slot 0, the bottom third from any other
/// slot.
pub fn interval_box(
    start: Minutes,
    end: Minutes,
    classification: &Classification,
    lanes: LaneAssignment,
    config: &LayoutConfig,
) -> BoxGeometry {
    let (top, height) = if classification.is_squeezed() {
        let slot = if lanes.slot() == 0 { 0 } else { LANE_COUNT - 1 };
        vertical_extent(HeightClass::Third, slot, config)
    } else {
        vertical_extent(classification.height_class(), lanes.slot(), config)
    };
    let (left_pct, width_pct) = horizontal_extent(start, end, config);
    BoxGeometry { top, height, left_pct, width_pct }
}

/// Returns `(top, height)` in pixels.
///
/// Half-class boxes only have an upper and a lower position: slot 0 is upper and any other slot
/// is lower. Two-lane boxes use the top pair for slot 0 and the bottom pair otherwise.
pub fn vertical_extent(class: HeightClass, slot: u8, config: &LayoutConfig) -> (f64, f64) {
    let n = config.row_height;
    let pad = config.pad();
    let gap = config.gap();

    match class {
        HeightClass::Full => (pad, n - 2.0 * pad),
        HeightClass::Half => {
            let height = (n - 2.0 * pad - gap) / 2.0;
            let top = if slot == 0 { pad } else { pad + height + gap };
            (top, height)
        }
        HeightClass::Third => {
            let slots = third_slots(config);
            slots[usize::from(slot.min(2))]
        }
        HeightClass::PromotedBig => {
            let slots = third_slots(config);
            let (upper, lower) = if slot == 0 { (slots[0], slots[1]) } else { (slots[1], slots[2]) };
            (upper.0, lower.0 + lower.1 - upper.0)
        }
    }
}

/// `(top, height)` of each third-class slot, top to bottom.
fn third_slots(config: &LayoutConfig) -> [(f64, f64); 3] {
    let n = config.row_height;
    let gap = config.gap();
    let heights = config.third_fracs.map(|frac| frac * n);

    let mut slots = [(0.0, 0.0); 3];
    let mut top = config.pad();
    for (slot, height) in slots.iter_mut().zip(heights) {
        *slot = (top, height);
        top += height + gap;
    }
    slots
}

/// Returns `(left_pct, width_pct)` for `[start, end)` relative to the row anchor.
pub fn horizontal_extent(start: Minutes, end: Minutes, config: &LayoutConfig) -> (f64, f64) {
    let span = f64::from(DAY_SPAN);
    let left = f64::from(start - config.anchor) / span * 100.0;
    let width = f64::from(end - start) / span * 100.0;
    (left, width)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestKind {
    /// From the previous night's sleep (or the row start) to this morning's wake-up.
    Leading,
    /// From tonight's sleep to the row end.
    Trailing,
}

/// A background block marking a rest period. Drawn under every interval at full row height and
/// never assigned a lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RestBlock {
    kind: RestKind,
    start: Minutes,
    end: Minutes,
    geometry: BoxGeometry,
}

impl RestBlock {
    pub fn kind(&self) -> RestKind {
        self.kind
    }

    pub fn start(&self) -> Minutes {
        self.start
    }

    pub fn end(&self) -> Minutes {
        self.end
    }

    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }
}

/// Computes the rest blocks of a row from its markers and the previous row's sleep instant.
///
/// `prior_sleep` is expressed on the previous row's timeline and is shifted back by one day.
/// Blocks are clipped to the row window and dropped when nothing remains.
pub fn rest_blocks(
    prior_sleep: Option<Minutes>,
    markers: &DayMarkers,
    config: &LayoutConfig,
) -> SmallVec<[RestBlock; 2]> {
    let window = config.window();
    let mut blocks = SmallVec::<[RestBlock; 2]>::new();

    let mut push = |kind: RestKind, start: Minutes, end: Minutes| {
        if let Some((start, end)) = window.clip(start, end) {
            let (left_pct, width_pct) = horizontal_extent(start, end, config);
            let geometry = BoxGeometry { top: 0.0, height: config.row_height, left_pct, width_pct };
            blocks.push(RestBlock { kind, start, end, geometry });
        }
    };

    if let Some(wake) = markers.wake() {
        let from = prior_sleep.map_or(window.start(), |sleep| sleep.saturating_sub(DAY_SPAN));
        push(RestKind::Leading, from, wake);
    }
    if let Some(sleep) = markers.sleep() {
        push(RestKind::Trailing, sleep, window.end());
    }

    blocks
}
