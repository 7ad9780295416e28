// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the Vantage demos.
//!
//! [`TextCanvas`] is a [`Surface`] that rasterizes into a character grid so
//! the demos can show frames in a terminal without a window system.
//! [`LoggingHost`] is an [`InputHost`] that only logs listener registration.

use std::fmt;

use kurbo::Rect;
use peniko::Color;
use vantage_present::Surface;
use vantage_viewport::{InputHost, ListenerKind};

/// Character-grid surface. Each cell covers `cell` x `cell` device pixels.
#[derive(Clone, Debug)]
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    cell: f64,
    cells: Vec<char>,
}

impl TextCanvas {
    /// Creates a blank canvas.
    pub fn new(cols: usize, rows: usize, cell: f64) -> Self {
        Self {
            cols,
            rows,
            cell: if cell > 0.0 { cell } else { 1.0 },
            cells: vec![' '; cols * rows],
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "Coordinates are clamped to the grid before conversion."
    )]
    fn span(&self, lo: f64, hi: f64, len: usize) -> (usize, usize) {
        let clamp = |v: f64| v.clamp(0.0, len as f64) as usize;
        (clamp((lo / self.cell).floor()), clamp((hi / self.cell).ceil()))
    }

    fn cells_of(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let (c0, c1) = self.span(rect.x0, rect.x1, self.cols);
        let (r0, r1) = self.span(rect.y0, rect.y1, self.rows);
        (c0, c1, r0, r1)
    }

    fn put(&mut self, col: usize, row: usize, ch: char) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }
}

impl Surface for TextCanvas {
    fn clear(&mut self, rect: Rect) {
        let (c0, c1, r0, r1) = self.cells_of(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, ' ');
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        // Thinner than a cell: a grid line.
        let ch = if rect.width() < self.cell || rect.height() < self.cell {
            '.'
        } else {
            '#'
        };
        let (c0, c1, r0, r1) = self.cells_of(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, ch);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, _color: Color, _width: f64) {
        let (c0, c1, r0, r1) = self.cells_of(rect);
        if c0 >= c1 || r0 >= r1 {
            return;
        }
        for col in c0..c1 {
            self.put(col, r0, '@');
            self.put(col, r1 - 1, '@');
        }
        for row in r0..r1 {
            self.put(c0, row, '@');
            self.put(c1 - 1, row, '@');
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().collect();
            writeln!(f, "|{}|", line.trim_end())?;
        }
        Ok(())
    }
}

/// Input host that logs attach and detach calls.
#[derive(Debug, Default)]
pub struct LoggingHost {
    next: u32,
}

impl InputHost for LoggingHost {
    type Handle = (u32, ListenerKind);
    type Error = std::convert::Infallible;

    fn attach(&mut self, kind: ListenerKind) -> Result<Self::Handle, Self::Error> {
        self.next += 1;
        log::info!("attach {kind:?} listener #{}", self.next);
        Ok((self.next, kind))
    }

    fn detach(&mut self, (id, kind): Self::Handle) {
        log::info!("detach {kind:?} listener #{id}");
    }
}
