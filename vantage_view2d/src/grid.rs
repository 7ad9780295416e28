// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background grid for the node-graph canvas.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::camera::CameraState;

/// Grid line pattern in screen space for a given camera.
///
/// The pattern is anchored at the surface center and shifted by the camera
/// offset scaled to screen units, `(x * z, -y * z)`, so it pans and zooms with
/// the content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPattern {
    /// Screen distance between neighbouring lines.
    pub cell_size: f64,
    /// Screen thickness of a line.
    pub thickness: f64,
    /// Screen point one line of each axis passes through.
    pub origin: Point,
}

impl GridPattern {
    /// World spacing between grid lines.
    pub const BASE_SPACING: f64 = 50.0;
    /// World thickness of a grid line.
    pub const BASE_THICKNESS: f64 = 1.0;
    /// Below this screen spacing the grid is too dense to read and yields no lines.
    pub const MIN_CELL_SIZE: f64 = 4.0;

    /// Grid for `camera` on a surface whose center is `center`, using the
    /// default spacing and thickness.
    #[must_use]
    pub fn for_camera(camera: &CameraState, center: Point) -> Self {
        Self::with_spacing(camera, center, Self::BASE_SPACING, Self::BASE_THICKNESS)
    }

    /// Grid for `camera` with custom world spacing and thickness.
    #[must_use]
    pub fn with_spacing(camera: &CameraState, center: Point, spacing: f64, thickness: f64) -> Self {
        Self {
            cell_size: spacing * camera.z,
            thickness: thickness * camera.z,
            origin: center + Vec2::new(camera.x * camera.z, -camera.y * camera.z),
        }
    }

    /// Screen x positions of vertical lines crossing `0..=width`.
    #[must_use]
    pub fn vertical_lines(&self, width: f64) -> GridLines {
        GridLines::new(self.origin.x, self.cell_size, width)
    }

    /// Screen y positions of horizontal lines crossing `0..=height`.
    #[must_use]
    pub fn horizontal_lines(&self, height: f64) -> GridLines {
        GridLines::new(self.origin.y, self.cell_size, height)
    }
}

/// Iterator over line positions along one axis.
#[derive(Clone, Debug)]
pub struct GridLines {
    next: f64,
    step: f64,
    end: f64,
}

impl GridLines {
    fn new(phase: f64, step: f64, end: f64) -> Self {
        if !(step.is_finite() && step >= GridPattern::MIN_CELL_SIZE && phase.is_finite()) {
            return Self {
                next: 1.0,
                step: 1.0,
                end: 0.0,
            };
        }
        let next = phase - (phase / step).floor() * step;
        Self { next, step, end }
    }
}

impl Iterator for GridLines {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > self.end {
            return None;
        }
        let pos = self.next;
        self.next += self.step;
        Some(pos)
    }
}
