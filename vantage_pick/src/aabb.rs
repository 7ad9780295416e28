// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Closed axis-aligned box in world space.
///
/// Invariant: `ax <= bx` and `ay <= by`. Zero-area boxes are allowed and only
/// contain points exactly on them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum x.
    pub ax: f64,
    /// Minimum y.
    pub ay: f64,
    /// Maximum x.
    pub bx: f64,
    /// Maximum y.
    pub by: f64,
}

impl Aabb {
    /// Creates a box from two corners, ordering each axis.
    #[must_use]
    pub fn new(ax: f64, ay: f64, bx: f64, by: f64) -> Self {
        Self {
            ax: ax.min(bx),
            ay: ay.min(by),
            bx: ax.max(bx),
            by: ay.max(by),
        }
    }

    /// Creates a box from its origin and extent. Negative extents are normalized.
    #[must_use]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Width (`bx - ax`).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bx - self.ax
    }

    /// Height (`by - ay`).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.by - self.ay
    }

    /// Closed containment on both axes.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.ax <= pt.x && pt.x <= self.bx && self.ay <= pt.y && pt.y <= self.by
    }

    /// The same box as a Kurbo rectangle.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(self.ax, self.ay, self.bx, self.by)
    }
}

impl From<Rect> for Aabb {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }
}

/// Returns the index of the first box containing `pt`.
///
/// Boxes are scanned in order, so for overlapping boxes the lowest index wins.
#[must_use]
pub fn hit_test(boxes: &[Aabb], pt: Point) -> Option<usize> {
    boxes.iter().position(|b| b.contains(pt))
}
