// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text preview of laid-out day rows.
//!
//! The preview maps each day row onto a small character grid: columns cover the 24-hour window
//! and rows cover the vertical pixel budget. It is a debugging aid for the CLI, not a styling
//! layer; boxes are filled according to their height class and labelled on their top row.

pub mod day;
mod grid;

pub use day::{render_day_text, render_days_text, DayRenderError, TextRenderOptions};
pub use grid::{CellGrid, CellRect, GridError};
