// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Daybands: day-row timeline layout.
//!
//! Each calendar day becomes one row covering 05:00→05:00. Intervals inside a row are classified
//! by how many others overlap them at once, packed into three vertical lanes, and mapped to
//! pixel/percent boxes. Days are laid out independently, apart from the rest block that carries
//! the previous night's sleep into the next row.

pub mod config;
pub mod engine;
pub mod format;
pub mod layout;
pub mod model;
pub mod render;

pub use config::{ConfigError, LayoutConfig};
pub use engine::{layout_day, layout_days, DayLayout, IntervalLayout};
