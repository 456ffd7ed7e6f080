// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Overlap-resolving layout for a single day row.
//!
//! The pipeline runs in three stages, each a pure function over the day's interval list:
//! [`classify`] measures instantaneous overlap and picks a height class, [`lanes`] assigns each
//! interval a run of the three vertical lanes, and [`geometry`] turns class and lane into a box.

pub mod classify;
pub mod geometry;
pub mod lanes;

pub use classify::{classify_intervals, Classification, HeightClass};
pub use geometry::{
    horizontal_extent, interval_box, rest_blocks, vertical_extent, BoxGeometry, RestBlock,
    RestKind,
};
pub use lanes::{assign_lanes, LaneAssignment, LaneLayout, LANE_COUNT};
