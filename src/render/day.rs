// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::grid::{CellGrid, CellRect, GridError};
use crate::config::LayoutConfig;
use crate::engine::DayLayout;
use crate::layout::{BoxGeometry, HeightClass};
use crate::model::{Day, DayId};

const REST_FILL: char = '░';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderOptions {
    /// Character columns covering the 24-hour window.
    pub columns: usize,
    /// Character rows covering the row's pixel budget.
    pub rows: usize,
    /// Prefix the output with an hour ruler.
    pub show_hours: bool,
}

impl Default for TextRenderOptions {
    fn default() -> Self {
        Self { columns: 96, rows: 6, show_hours: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayRenderError {
    EmptyGrid { columns: usize, rows: usize },
    LayoutMismatch { day: DayId },
    Grid(GridError),
}

impl fmt::Display for DayRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { columns, rows } => {
                write!(f, "text preview needs at least one column and row, got {columns}x{rows}")
            }
            Self::LayoutMismatch { day } => write!(f, "layout does not belong to day {day}"),
            Self::Grid(err) => write!(f, "preview grid: {err}"),
        }
    }
}

impl std::error::Error for DayRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::EmptyGrid { .. } | Self::LayoutMismatch { .. } => None,
        }
    }
}

impl From<GridError> for DayRenderError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

fn class_fill(class: HeightClass) -> char {
    match class {
        HeightClass::Full => '█',
        HeightClass::Half | HeightClass::PromotedBig => '▓',
        HeightClass::Third => '▒',
    }
}

/// Maps the fractional range `[start, end)` of a row onto `cells` grid cells.
///
/// Anything that is visible at all gets at least one cell.
fn cell_range(start: f64, end: f64, cells: usize) -> Option<(usize, usize)> {
    if end <= 0.0 || start >= 1.0 {
        return None;
    }
    let total = cells as f64;
    let first = (start * total).round().clamp(0.0, total) as usize;
    let last = (end * total).round().clamp(0.0, total) as usize;
    let last = last.max(first + 1).min(cells);
    (last > first).then_some((first, last))
}

fn box_cells(
    geometry: &BoxGeometry,
    config: &LayoutConfig,
    options: &TextRenderOptions,
) -> Option<CellRect> {
    let (x0, x1) = cell_range(
        geometry.left_pct() / 100.0,
        (geometry.left_pct() + geometry.width_pct()) / 100.0,
        options.columns,
    )?;
    let (y0, y1) = cell_range(
        geometry.top() / config.row_height,
        geometry.bottom() / config.row_height,
        options.rows,
    )?;
    Some(CellRect { x0, y0, x1, y1 })
}

fn draw_day(
    day: &Day,
    layout: &DayLayout,
    config: &LayoutConfig,
    options: &TextRenderOptions,
    gutter: usize,
) -> Result<Vec<String>, DayRenderError> {
    if layout.day_id() != day.id() || layout.intervals().len() != day.intervals().len() {
        return Err(DayRenderError::LayoutMismatch { day: day.id().clone() });
    }

    let mut grid = CellGrid::new(gutter + options.columns, options.rows)?;
    grid.label(0, 0, day.id().as_str(), gutter)?;

    for block in layout.rest_blocks() {
        if let Some(rect) = box_cells(block.geometry(), config, options) {
            grid.paint(rect.shifted(gutter), REST_FILL)?;
        }
    }

    for (interval, placed) in day.intervals().iter().zip(layout.intervals()) {
        let Some(rect) = box_cells(placed.geometry(), config, options) else {
            continue;
        };
        let rect = rect.shifted(gutter);
        grid.paint(rect, class_fill(placed.height_class()))?;
        grid.label(rect.x0, rect.y0, interval.label(), rect.width())?;
    }

    Ok(grid.into_lines())
}

fn hour_ruler(columns: usize, anchor_hour: i32) -> String {
    let mut line = vec![' '; columns];
    let mut next_free = 0usize;
    let mut digits = itoa::Buffer::new();

    for step in 0..24usize {
        let x = step * columns / 24;
        if x < next_free || x + 2 > columns {
            continue;
        }
        let hour = (anchor_hour + step as i32).rem_euclid(24);
        let formatted = digits.format(hour);
        let padded = if hour < 10 { format!("0{formatted}") } else { formatted.to_owned() };
        for (offset, ch) in padded.chars().enumerate() {
            line[x + offset] = ch;
        }
        next_free = x + 3;
    }

    line.into_iter().collect::<String>().trim_end().to_owned()
}

/// Renders one day row as text lines joined with `\n`.
pub fn render_day_text(
    day: &Day,
    layout: &DayLayout,
    config: &LayoutConfig,
    options: &TextRenderOptions,
) -> Result<String, DayRenderError> {
    render_days_text(std::slice::from_ref(day), std::slice::from_ref(layout), config, options)
}

/// Renders several rows under a shared hour ruler. `layouts` must be index-aligned with `days`.
pub fn render_days_text(
    days: &[Day],
    layouts: &[DayLayout],
    config: &LayoutConfig,
    options: &TextRenderOptions,
) -> Result<String, DayRenderError> {
    if options.columns == 0 || options.rows == 0 {
        return Err(DayRenderError::EmptyGrid { columns: options.columns, rows: options.rows });
    }
    if let Some(day) = days.get(layouts.len()) {
        return Err(DayRenderError::LayoutMismatch { day: day.id().clone() });
    }

    let gutter = days.iter().map(|day| day.id().as_str().chars().count() + 1).max().unwrap_or(0);

    let mut lines = Vec::<String>::new();
    if options.show_hours {
        let ruler = hour_ruler(options.columns, config.anchor / 60);
        lines.push(format!("{}{ruler}", " ".repeat(gutter)).trim_end().to_owned());
    }

    for (day, layout) in days.iter().zip(layouts) {
        lines.extend(draw_day(day, layout, config, options, gutter)?);
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{hour_ruler, render_day_text, render_days_text, DayRenderError, TextRenderOptions};
    use crate::config::LayoutConfig;
    use crate::engine::{layout_day, layout_days};
    use crate::model::{Day, DayId, DayMarkers, Interval};

    fn options(columns: usize, rows: usize) -> TextRenderOptions {
        TextRenderOptions { columns, rows, show_hours: false }
    }

    fn day(id: &str, intervals: Vec<Interval>, markers: &[i32]) -> Day {
        let mut day = Day::with_intervals(DayId::new(id).expect("day id"), intervals);
        *day.markers_mut() = DayMarkers::new(markers.to_vec());
        day
    }

    #[test]
    fn full_interval_is_filled_and_labelled() {
        let config = LayoutConfig::default();
        let day = day("d1", vec![Interval::new(540, 660, "study").expect("interval")], &[]);
        let layout = layout_day(&day, None, &config);

        let text = render_day_text(&day, &layout, &config, &options(24, 2)).expect("render");
        assert_eq!(text, "d1     s…\n       ██");
    }

    #[test]
    fn rest_blocks_are_drawn_under_intervals() {
        let config = LayoutConfig::default();
        let day =
            day("d1", vec![Interval::new(540, 660, "study").expect("interval")], &[420, 1380]);
        let layout = layout_day(&day, None, &config);

        let text = render_day_text(&day, &layout, &config, &options(24, 2)).expect("render");
        assert_eq!(text, "d1 ░░  s…            ░░░░░░\n   ░░  ██            ░░░░░░");
    }

    #[test]
    fn stacked_thirds_occupy_separate_rows() {
        let config = LayoutConfig::default();
        let day = day(
            "d1",
            vec![
                Interval::new(300, 660, "aaaaaa").expect("interval"),
                Interval::new(300, 600, "bbbbb").expect("interval"),
                Interval::new(300, 540, "cccc").expect("interval"),
            ],
            &[],
        );
        let layout = layout_day(&day, None, &config);

        let text = render_day_text(&day, &layout, &config, &options(24, 6)).expect("render");
        assert_eq!(text, "d1 aaaaaa\n   ▒▒▒▒▒▒\n   bbbbb\n   ▒▒▒▒▒\n   cccc\n   ▒▒▒▒");
    }

    #[test]
    fn hour_ruler_skips_labels_that_would_collide() {
        assert_eq!(hour_ruler(24, 5), "05 08 11 14 17 20 23 02");
        assert_eq!(hour_ruler(72, 5).split_whitespace().count(), 24);
    }

    #[test]
    fn ruler_and_gutter_align_across_days() {
        let config = LayoutConfig::default();
        let days = vec![day("d1", Vec::new(), &[]), day("day2", Vec::new(), &[])];
        let layouts = layout_days(&days, &config);
        let opts = TextRenderOptions { columns: 24, rows: 1, show_hours: true };

        let text = render_days_text(&days, &layouts, &config, &opts).expect("render");
        assert_eq!(text, "     05 08 11 14 17 20 23 02\nd1\nday2");
    }

    #[test]
    fn rejects_empty_grid_and_mismatched_layouts() {
        let config = LayoutConfig::default();
        let first = day("d1", Vec::new(), &[]);
        let second = day("d2", Vec::new(), &[]);
        let layout = layout_day(&first, None, &config);

        let err = render_day_text(&first, &layout, &config, &options(0, 1)).unwrap_err();
        assert!(matches!(err, DayRenderError::EmptyGrid { .. }));

        let err = render_day_text(&second, &layout, &config, &options(24, 1)).unwrap_err();
        assert!(matches!(err, DayRenderError::LayoutMismatch { .. }));
    }
}
