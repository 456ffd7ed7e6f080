// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Schedule document input and layout export.
//!
//! Currently this module only speaks JSON; the text schedule grammar is handled upstream.

pub mod json;

pub use json::{DayRecord, DocumentError, IntervalRecord, LayoutDocument, ScheduleDocument, TimeValue};
