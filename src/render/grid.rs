// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Half-open cell rectangle `[x0, x1) × [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl CellRect {
    pub fn width(&self) -> usize {
        self.x1.saturating_sub(self.x0)
    }

    fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Moves the rectangle right by `dx` columns.
    pub fn shifted(self, dx: usize) -> Self {
        Self { x0: self.x0 + dx, x1: self.x1 + dx, ..self }
    }
}

/// Character cells for one day row of the preview. Later paints cover earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    columns: usize,
    rows: usize,
    cells: Vec<char>,
}

impl CellGrid {
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridError> {
        let len = columns.checked_mul(rows).ok_or(GridError::TooLarge { columns, rows })?;
        Ok(Self { columns, rows, cells: vec![' '; len] })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        (x < self.columns && y < self.rows).then(|| self.cells[y * self.columns + x])
    }

    /// Fills `rect` with `ch`. A rectangle reaching past the grid is rejected without painting.
    pub fn paint(&mut self, rect: CellRect, ch: char) -> Result<(), GridError> {
        if rect.is_empty() {
            return Ok(());
        }
        if rect.x1 > self.columns || rect.y1 > self.rows {
            return Err(GridError::OutsideGrid { rect, columns: self.columns, rows: self.rows });
        }

        for y in rect.y0..rect.y1 {
            let row = y * self.columns;
            self.cells[row + rect.x0..row + rect.x1].fill(ch);
        }
        Ok(())
    }

    /// Writes `text` at `(x, y)` in at most `width` cells, ending in `…` when it does not fit.
    /// Cells past the right edge are dropped.
    pub fn label(&mut self, x: usize, y: usize, text: &str, width: usize) -> Result<(), GridError> {
        if y >= self.rows {
            let rect = CellRect { x0: x, y0: y, x1: x + 1, y1: y + 1 };
            return Err(GridError::OutsideGrid { rect, columns: self.columns, rows: self.rows });
        }

        let fitted = fit_label(text, width);
        let row = y * self.columns;
        for (x, ch) in (x..self.columns).zip(fitted) {
            self.cells[row + x] = ch;
        }
        Ok(())
    }

    /// One string per grid row, trailing blanks removed.
    pub fn into_lines(self) -> Vec<String> {
        if self.columns == 0 {
            return vec![String::new(); self.rows];
        }
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().collect::<String>().trim_end_matches(' ').to_owned())
            .collect()
    }
}

fn fit_label(text: &str, width: usize) -> impl Iterator<Item = char> + '_ {
    let len = text.chars().count();
    let (keep, ellipsis) =
        if len <= width { (len, false) } else { (width.saturating_sub(1), width > 0) };
    text.chars().take(keep).chain(ellipsis.then_some('…'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    TooLarge { columns: usize, rows: usize },
    OutsideGrid { rect: CellRect, columns: usize, rows: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { columns, rows } => {
                write!(f, "grid of {columns}x{rows} cells is too large")
            }
            Self::OutsideGrid { rect, columns, rows } => write!(
                f,
                "cells [{}, {})x[{}, {}) fall outside the {columns}x{rows} grid",
                rect.x0, rect.x1, rect.y0, rect.y1
            ),
        }
    }
}

impl std::error::Error for GridError {}
