// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON documents exchanged by the CLI.
//!
//! Input is a list of days, each with intervals and optional marker instants. Times are either
//! integers already on the normalized timeline or four-digit `HHMM` clock strings, which are
//! normalized against the configured anchor. An interval without `end` gets the minimum width.
//!
//! ```json
//! { "days": [
//!   { "date": "2026-01-05",
//!     "markers": ["0715", "2330"],
//!     "intervals": [ { "start": "0900", "end": "1030", "label": "lecture #eth" } ] }
//! ] }
//! ```

use std::fmt;
use std::io::{self, Read, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::engine::{DayLayout, IntervalLayout};
use crate::layout::RestBlock;
use crate::model::{
    normalize_clock, parse_hhmm, ClockError, Day, DayId, DayMarkers, IdError, Interval,
    IntervalError, Minutes, DAY_SPAN,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleDocument {
    pub days: Vec<DayRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayRecord {
    pub date: String,
    #[serde(default)]
    pub markers: Vec<TimeValue>,
    #[serde(default)]
    pub intervals: Vec<IntervalRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntervalRecord {
    pub start: TimeValue,
    #[serde(default)]
    pub end: Option<TimeValue>,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    /// Already on the normalized timeline.
    Minutes(Minutes),
    /// `HHMM` wall-clock time.
    Clock(String),
}

impl TimeValue {
    fn resolve(&self, anchor: Minutes) -> Result<Minutes, ClockError> {
        match self {
            Self::Minutes(minutes) => Ok(*minutes),
            Self::Clock(raw) => parse_hhmm(raw).map(|clock| normalize_clock(clock, anchor)),
        }
    }
}

/// Instants a day may reference: one day before its row up to the end of the following day.
fn accepted_range(anchor: Minutes) -> RangeInclusive<Minutes> {
    anchor.saturating_sub(DAY_SPAN)..=anchor.saturating_add(2 * DAY_SPAN)
}

impl ScheduleDocument {
    pub fn from_reader(reader: impl Read) -> Result<Self, DocumentError> {
        serde_json::from_reader(reader).map_err(|source| DocumentError::Json { source })
    }

    /// Converts the records into model days, normalizing clock strings against `anchor`.
    pub fn into_days(self, anchor: Minutes) -> Result<Vec<Day>, DocumentError> {
        self.days
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_day(index, anchor))
            .collect()
    }
}

impl DayRecord {
    fn into_day(self, index: usize, anchor: Minutes) -> Result<Day, DocumentError> {
        let id = DayId::new(&self.date)
            .map_err(|source| DocumentError::InvalidDay { index, value: self.date, source })?;

        let range = accepted_range(anchor);
        let resolve = |value: &TimeValue| -> Result<Minutes, DocumentError> {
            let minutes = value
                .resolve(anchor)
                .map_err(|source| DocumentError::InvalidClock { day: id.clone(), source })?;
            if !range.contains(&minutes) {
                return Err(DocumentError::TimeOutOfRange { day: id.clone(), value: minutes });
            }
            Ok(minutes)
        };

        let mut markers = DayMarkers::default();
        for marker in &self.markers {
            markers.push(resolve(marker)?);
        }

        let mut intervals = Vec::with_capacity(self.intervals.len());
        for (interval_index, record) in self.intervals.into_iter().enumerate() {
            let start = resolve(&record.start)?;
            let interval = match &record.end {
                Some(end) => Interval::new(start, resolve(end)?, record.label),
                None => Interval::point(start, record.label),
            }
            .map_err(|source| DocumentError::InvalidInterval {
                day: id.clone(),
                index: interval_index,
                source,
            })?;
            intervals.push(interval);
        }

        let mut day = Day::with_intervals(id, intervals);
        *day.markers_mut() = markers;
        Ok(day)
    }
}

/// Serialisable view joining the input days with their layouts.
#[derive(Debug, Serialize)]
pub struct LayoutDocument<'a> {
    row_height: f64,
    anchor: Minutes,
    days: Vec<DayOutput<'a>>,
}

#[derive(Debug, Serialize)]
struct DayOutput<'a> {
    date: &'a DayId,
    intervals: Vec<IntervalOutput<'a>>,
    rest_blocks: &'a [RestBlock],
    #[serde(skip_serializing_if = "<[usize]>::is_empty")]
    collisions: &'a [usize],
}

#[derive(Debug, Serialize)]
struct IntervalOutput<'a> {
    label: &'a str,
    start: Minutes,
    end: Minutes,
    #[serde(flatten)]
    layout: &'a IntervalLayout,
}

impl<'a> LayoutDocument<'a> {
    /// Pairs `days` with `layouts` positionally; both come from the same engine call.
    pub fn new(days: &'a [Day], layouts: &'a [DayLayout], config: &LayoutConfig) -> Self {
        let days = days
            .iter()
            .zip(layouts)
            .map(|(day, layout)| DayOutput {
                date: day.id(),
                intervals: day
                    .intervals()
                    .iter()
                    .zip(layout.intervals())
                    .map(|(interval, layout)| IntervalOutput {
                        label: interval.label(),
                        start: interval.start(),
                        end: interval.end(),
                        layout,
                    })
                    .collect(),
                rest_blocks: layout.rest_blocks(),
                collisions: layout.collisions(),
            })
            .collect();

        Self { row_height: config.row_height, anchor: config.anchor, days }
    }

    pub fn write_pretty(&self, writer: impl Write) -> Result<(), DocumentError> {
        serde_json::to_writer_pretty(writer, self).map_err(|source| DocumentError::Json { source })
    }
}

#[derive(Debug)]
pub enum DocumentError {
    Io { path: Option<PathBuf>, source: io::Error },
    Json { source: serde_json::Error },
    InvalidDay { index: usize, value: String, source: IdError },
    InvalidClock { day: DayId, source: ClockError },
    TimeOutOfRange { day: DayId, value: Minutes },
    InvalidInterval { day: DayId, index: usize, source: IntervalError },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path: Some(path), source } => {
                write!(f, "io error at {path:?}: {source}")
            }
            Self::Io { path: None, source } => write!(f, "io error: {source}"),
            Self::Json { source } => write!(f, "json error: {source}"),
            Self::InvalidDay { index, value, source } => {
                write!(f, "day #{index} has invalid date {value:?}: {source}")
            }
            Self::InvalidClock { day, source } => write!(f, "day {day}: {source}"),
            Self::TimeOutOfRange { day, value } => {
                write!(f, "day {day}: minute {value} is more than a day outside its row")
            }
            Self::InvalidInterval { day, index, source } => {
                write!(f, "day {day}, interval #{index}: {source}")
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source } => Some(source),
            Self::InvalidDay { source, .. } => Some(source),
            Self::InvalidClock { source, .. } => Some(source),
            Self::TimeOutOfRange { .. } => None,
            Self::InvalidInterval { source, .. } => Some(source),
        }
    }
}
