// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Minutes on the normalized day timeline.
//!
//! A day row covers `[anchor, anchor + DAY_SPAN)`. Clock times earlier than the anchor belong to
//! the tail of the previous calendar day's row and are shifted by `+DAY_SPAN` so every row is a
//! contiguous increasing range.

use std::fmt;

/// Minutes since midnight of the row's calendar date, possibly `>= DAY_SPAN` after normalization.
pub type Minutes = i32;

/// Length of one day row in minutes.
pub const DAY_SPAN: Minutes = 1440;

/// Default start of the visible window (05:00).
pub const DEFAULT_ANCHOR: Minutes = 5 * 60;

/// Width given to an entry that only names a start time.
pub const MIN_INTERVAL_WIDTH: Minutes = 10;

/// Shifts a clock value that falls before `anchor` into the tail of the row.
pub fn normalize_clock(clock: Minutes, anchor: Minutes) -> Minutes {
    if clock < anchor {
        clock + DAY_SPAN
    } else {
        clock
    }
}

/// The half-open window `[anchor, anchor + DAY_SPAN)` a single row covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    anchor: Minutes,
}

impl DayWindow {
    pub fn new(anchor: Minutes) -> Self {
        Self { anchor }
    }

    pub fn start(&self) -> Minutes {
        self.anchor
    }

    pub fn end(&self) -> Minutes {
        self.anchor + DAY_SPAN
    }

    /// Clips `[start, end)` to the window, returning `None` when nothing remains.
    pub fn clip(&self, start: Minutes, end: Minutes) -> Option<(Minutes, Minutes)> {
        let start = start.max(self.start());
        let end = end.min(self.end());
        (end > start).then_some((start, end))
    }
}

impl Default for DayWindow {
    fn default() -> Self {
        Self::new(DEFAULT_ANCHOR)
    }
}

/// Parses a four-digit `HHMM` clock value into minutes since midnight.
pub fn parse_hhmm(raw: &str) -> Result<Minutes, ClockError> {
    let bytes = raw.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(ClockError::Malformed { raw: raw.to_owned() });
    }

    let digit = |idx: usize| Minutes::from(bytes[idx] - b'0');
    let hours = digit(0) * 10 + digit(1);
    let minutes = digit(2) * 10 + digit(3);
    if hours > 24 || minutes > 59 || (hours == 24 && minutes > 0) {
        return Err(ClockError::OutOfRange { raw: raw.to_owned() });
    }

    Ok(hours * 60 + minutes)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    Malformed { raw: String },
    OutOfRange { raw: String },
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { raw } => write!(f, "expected a four-digit HHMM time, got {raw:?}"),
            Self::OutOfRange { raw } => write!(f, "clock time {raw:?} is out of range"),
        }
    }
}

impl std::error::Error for ClockError {}

#[cfg(test)]
mod tests {
    use super::{normalize_clock, parse_hhmm, ClockError, DayWindow, DAY_SPAN, DEFAULT_ANCHOR};

    #[test]
    fn normalize_clock_shifts_only_times_before_the_anchor() {
        assert_eq!(normalize_clock(4 * 60 + 59, DEFAULT_ANCHOR), 4 * 60 + 59 + DAY_SPAN);
        assert_eq!(normalize_clock(DEFAULT_ANCHOR, DEFAULT_ANCHOR), DEFAULT_ANCHOR);
        assert_eq!(normalize_clock(23 * 60, DEFAULT_ANCHOR), 23 * 60);
    }

    #[test]
    fn parse_hhmm_accepts_clock_values() {
        assert_eq!(parse_hhmm("0000"), Ok(0));
        assert_eq!(parse_hhmm("0730"), Ok(450));
        assert_eq!(parse_hhmm("2400"), Ok(1440));
    }

    #[test]
    fn parse_hhmm_rejects_bad_input() {
        assert!(matches!(parse_hhmm("730"), Err(ClockError::Malformed { .. })));
        assert!(matches!(parse_hhmm("07:3"), Err(ClockError::Malformed { .. })));
        assert!(matches!(parse_hhmm("2460"), Err(ClockError::OutOfRange { .. })));
        assert!(matches!(parse_hhmm("2401"), Err(ClockError::OutOfRange { .. })));
    }

    #[test]
    fn window_clip_drops_empty_ranges() {
        let window = DayWindow::default();
        assert_eq!(window.clip(0, 400), Some((300, 400)));
        assert_eq!(window.clip(1700, 2000), Some((1700, 1740)));
        assert_eq!(window.clip(100, 300), None);
        assert_eq!(window.clip(500, 500), None);
    }
}
