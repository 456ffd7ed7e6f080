// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Days own ordered interval lists on a normalized minute timeline. Everything the layout
//! engine derives lives in [`crate::layout`] records, never on these types.

pub mod day;
pub mod ids;
pub mod interval;
pub mod time;

pub use day::{Day, DayMarkers};
pub use ids::{DayId, IdError};
pub use interval::{Interval, IntervalError};
pub use time::{
    normalize_clock, parse_hhmm, ClockError, DayWindow, Minutes, DAY_SPAN, DEFAULT_ANCHOR,
    MIN_INTERVAL_WIDTH,
};
