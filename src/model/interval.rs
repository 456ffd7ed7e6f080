// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

use super::time::{Minutes, MIN_INTERVAL_WIDTH};

/// A labelled half-open time block `[start, end)` on the normalized timeline.
///
/// Intervals are caller-owned input. Layout results are returned as separate records indexed by
/// the interval's position in its day, so nothing here is ever rewritten by the engine.
///
/// Zero-length intervals (`start == end`) are accepted but their overlap classification is not
/// meaningful; upstream producers are expected to widen them (see [`Interval::point`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    start: Minutes,
    end: Minutes,
    label: SmolStr,
}

impl Interval {
    pub fn new(
        start: Minutes,
        end: Minutes,
        label: impl Into<SmolStr>,
    ) -> Result<Self, IntervalError> {
        if end < start {
            return Err(IntervalError::Inverted { start, end });
        }
        if end.checked_sub(start).is_none() {
            return Err(IntervalError::Overflow { start });
        }
        Ok(Self { start, end, label: label.into() })
    }

    /// An entry that only names its start time, widened to the minimum block width.
    pub fn point(start: Minutes, label: impl Into<SmolStr>) -> Result<Self, IntervalError> {
        let end = start.checked_add(MIN_INTERVAL_WIDTH).ok_or(IntervalError::Overflow { start })?;
        Self::new(start, end, label)
    }

    pub fn start(&self) -> Minutes {
        self.start
    }

    pub fn end(&self) -> Minutes {
        self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    /// True when the two blocks share at least one instant. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    Inverted { start: Minutes, end: Minutes },
    /// The end or the duration does not fit in [`Minutes`].
    Overflow { start: Minutes },
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { start, end } => {
                write!(f, "interval ends at {end} before it starts at {start}")
            }
            Self::Overflow { start } => {
                write!(f, "interval starting at {start} leaves the minute range")
            }
        }
    }
}

impl std::error::Error for IntervalError {}

#[cfg(test)]
mod tests {
    use super::{Interval, IntervalError};

    #[test]
    fn new_rejects_inverted_bounds() {
        assert_eq!(
            Interval::new(60, 30, "x").unwrap_err(),
            IntervalError::Inverted { start: 60, end: 30 }
        );
    }

    #[test]
    fn point_uses_minimum_width() {
        let interval = Interval::point(600, "call").expect("interval");
        assert_eq!((interval.start(), interval.end()), (600, 610));
        assert_eq!(interval.label(), "call");
    }

    #[test]
    fn bounds_past_the_minute_range_are_rejected() {
        assert_eq!(
            Interval::point(i32::MAX, "late").unwrap_err(),
            IntervalError::Overflow { start: i32::MAX }
        );
        assert_eq!(
            Interval::new(i32::MIN, i32::MAX, "all").unwrap_err(),
            IntervalError::Overflow { start: i32::MIN }
        );
        let widest = Interval::new(0, i32::MAX, "wide").expect("interval");
        assert_eq!(widest.duration(), i32::MAX);
    }

    #[test]
    fn overlaps_excludes_touching_endpoints() {
        let a = Interval::new(0, 60, "a").expect("interval");
        let b = Interval::new(60, 90, "b").expect("interval");
        let c = Interval::new(59, 61, "c").expect("interval");
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }
}
