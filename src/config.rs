// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Row geometry configuration.
//!
//! Defaults reproduce the classic 100 px row: 3% padding top and bottom, 6% between stacked
//! slots, and third-height slots of 27% / 28% / 27%. A JSON file may override any subset of the
//! fields; missing keys keep their defaults.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{DayWindow, Minutes, DAY_SPAN, DEFAULT_ANCHOR};

const FRACTION_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Vertical pixel budget `N` of one day row.
    pub row_height: f64,
    /// Padding above the first and below the last slot, as a fraction of `N`.
    pub pad_frac: f64,
    /// Gap between stacked slots, as a fraction of `N`.
    pub gap_frac: f64,
    /// Heights of the three third-class slots, top to bottom, as fractions of `N`.
    pub third_fracs: [f64; 3],
    /// Minute of day at which each row starts.
    pub anchor: Minutes,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_height: 100.0,
            pad_frac: 0.03,
            gap_frac: 0.06,
            third_fracs: [0.27, 0.28, 0.27],
            anchor: DEFAULT_ANCHOR,
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Json { path: None, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Json { path: Some(path.to_path_buf()), source })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the fractions describe a row that stacks without overflowing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(ConfigError::invalid("row_height", "must be a positive number"));
        }
        if !(self.pad_frac.is_finite() && (0.0..0.5).contains(&self.pad_frac)) {
            return Err(ConfigError::invalid("pad_frac", "must be in [0, 0.5)"));
        }
        if !(self.gap_frac.is_finite() && self.gap_frac >= 0.0) {
            return Err(ConfigError::invalid("gap_frac", "must be a non-negative number"));
        }
        if 1.0 - 2.0 * self.pad_frac - self.gap_frac <= 0.0 {
            return Err(ConfigError::invalid(
                "gap_frac",
                "padding and gap leave no room for half-height slots",
            ));
        }
        if self.third_fracs.iter().any(|frac| !(frac.is_finite() && *frac > 0.0)) {
            return Err(ConfigError::invalid("third_fracs", "every slot must be positive"));
        }

        let stacked = self.third_fracs.iter().sum::<f64>() + 2.0 * self.gap_frac;
        let budget = 1.0 - 2.0 * self.pad_frac;
        if (stacked - budget).abs() > FRACTION_TOLERANCE {
            return Err(ConfigError::invalid(
                "third_fracs",
                format!(
                    "three slots plus two gaps must fill the padded row ({stacked:.4} != {budget:.4})"
                ),
            ));
        }

        if !(0..DAY_SPAN).contains(&self.anchor) {
            return Err(ConfigError::invalid("anchor", "must be a minute of day in [0, 1440)"));
        }

        Ok(())
    }

    /// Padding `E` in pixels.
    pub fn pad(&self) -> f64 {
        self.row_height * self.pad_frac
    }

    /// Inter-slot gap `G` in pixels.
    pub fn gap(&self) -> f64 {
        self.row_height * self.gap_frac
    }

    pub fn window(&self) -> DayWindow {
        DayWindow::new(self.anchor)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json { path: Option<PathBuf>, source: serde_json::Error },
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid { field, reason: reason.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read config at {path:?}: {source}"),
            Self::Json { path: Some(path), source } => {
                write!(f, "invalid config json at {path:?}: {source}")
            }
            Self::Json { path: None, source } => write!(f, "invalid config json: {source}"),
            Self::Invalid { field, reason } => write!(f, "invalid config field {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}
