// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use daybands::model::{Day, DayId, DayMarkers, Interval, DEFAULT_ANCHOR};

pub mod days {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub days: usize,
        pub intervals_per_day: usize,
        /// Minutes between consecutive interval starts; smaller means more overlap.
        pub stride: i32,
    }

    impl Params {
        pub const fn new(days: usize, intervals_per_day: usize, stride: i32) -> Self {
            Self { days, intervals_per_day, stride }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        LargeDense,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::LargeDense => "large_dense",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(7, 6, 90),
                Self::Medium => Params::new(90, 12, 45),
                Self::LargeDense => Params::new(365, 24, 20),
            }
        }
    }

    // Cycles through short, medium and long entries so every height class shows up.
    fn duration(idx: usize) -> i32 {
        match idx % 5 {
            0 => 10,
            1 => 45,
            2 => 120,
            3 => 30,
            _ => 75,
        }
    }

    pub fn day(day_idx: usize, params: Params) -> Day {
        let id = DayId::new(format!("day-{day_idx:04}")).expect("valid day id");
        let first = DEFAULT_ANCHOR + 120 + (day_idx as i32 % 7) * 15;

        let intervals = (0..params.intervals_per_day)
            .map(|idx| {
                let start = first + idx as i32 * params.stride;
                let end = start + duration(idx + day_idx);
                Interval::new(start, end, format!("entry {idx:02}")).expect("valid interval")
            })
            .collect();

        let mut day = Day::with_intervals(id, intervals);
        let wake = DEFAULT_ANCHOR + 90 + (day_idx as i32 % 4) * 20;
        let sleep = DEFAULT_ANCHOR + 1080 + (day_idx as i32 % 6) * 30;
        *day.markers_mut() = DayMarkers::new(vec![wake, sleep]);
        day
    }

    pub fn fixture(case: Case) -> Vec<Day> {
        let params = case.params();
        (0..params.days).map(|day_idx| day(day_idx, params)).collect()
    }
}
