// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::limits::WheelModifiers;

/// Screen-space distance a single wheel step pans, before dividing by scale.
pub const WHEEL_PAN_STEP: f64 = 25.0;

/// Fractional scale change of a single zoom wheel step.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Pan/zoom camera over a world‑space plane.
///
/// `CameraState` is a plain value: every update returns a new state and leaves
/// the receiver untouched, so presenters and pickers can hold a copy without
/// being able to mutate the viewport's camera.
///
/// The fields are public. `z > 0` holds only for states built with
/// [`CameraState::new`], [`CameraState::IDENTITY`] or the `apply_*` updates;
/// writing `z` directly bypasses that check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// World‑space horizontal offset.
    pub x: f64,
    /// World‑space vertical offset (positive is up on screen).
    pub y: f64,
    /// Uniform scale factor; strictly positive when built through [`CameraState::new`].
    pub z: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CameraState {
    /// Zero offset at scale `1.0`.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Creates a camera state.
    ///
    /// A non-positive or non-finite scale falls back to `1.0`.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let z = if is_valid_scale(z) { z } else { 1.0 };
        Self { x, y, z }
    }

    /// Applies one wheel event.
    ///
    /// With `modifiers.zoom` the scale is multiplied by
    /// `1 - WHEEL_ZOOM_STEP * sign(delta_y)`. Otherwise the offset moves by
    /// `WHEEL_PAN_STEP * sign(delta) / z` on each axis, after exchanging the
    /// deltas when `modifiers.swap_axes` is set. Only the sign of the deltas is
    /// used; a zero delta is a no-op on its axis.
    #[must_use]
    pub fn apply_wheel(self, delta_x: f64, delta_y: f64, modifiers: WheelModifiers) -> Self {
        if modifiers.zoom {
            let z = self.z * (1.0 - WHEEL_ZOOM_STEP * step_sign(delta_y));
            return self.apply_pinch(z);
        }
        let (dx, dy) = if modifiers.swap_axes {
            (delta_y, delta_x)
        } else {
            (delta_x, delta_y)
        };
        Self {
            x: self.x - WHEEL_PAN_STEP * step_sign(dx) / self.z,
            y: self.y + WHEEL_PAN_STEP * step_sign(dy) / self.z,
            z: self.z,
        }
    }

    /// Pans by a screen-space delta.
    ///
    /// `x += dx / z` and `y -= dy / z`: screen y grows downwards while the
    /// offset's y grows upwards.
    #[must_use]
    pub fn apply_pan(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx / self.z,
            y: self.y - dy / self.z,
            z: self.z,
        }
    }

    /// Pans by a screen-space vector. See [`CameraState::apply_pan`].
    #[must_use]
    pub fn apply_pan_vec(self, delta: Vec2) -> Self {
        self.apply_pan(delta.x, delta.y)
    }

    /// Replaces the scale, leaving the offset unchanged.
    ///
    /// Content drifts relative to the pinch midpoint; see
    /// [`CameraState::apply_pinch_about`] for the anchored variant.
    /// Non-positive or non-finite scales are ignored.
    #[must_use]
    pub fn apply_pinch(self, new_scale: f64) -> Self {
        if !is_valid_scale(new_scale) {
            return self;
        }
        Self {
            z: new_scale,
            ..self
        }
    }

    /// Replaces the scale while keeping the world point under `anchor` fixed on screen.
    #[must_use]
    pub fn apply_pinch_about(self, new_scale: f64, anchor: Point) -> Self {
        if !is_valid_scale(new_scale) {
            return self;
        }
        let world = self.screen_to_world(anchor);
        Self {
            x: anchor.x / new_scale - world.x,
            y: world.y - anchor.y / new_scale,
            z: new_scale,
        }
    }

    /// World → screen transform.
    #[must_use]
    pub fn world_to_screen_affine(&self) -> Affine {
        Affine::scale(self.z) * Affine::translate((self.x, -self.y))
    }

    /// Screen → world transform; the exact inverse of [`CameraState::world_to_screen_affine`].
    #[must_use]
    pub fn screen_to_world_affine(&self) -> Affine {
        Affine::translate((-self.x, self.y)) * Affine::scale(1.0 / self.z)
    }

    /// Converts a world‑space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.world_to_screen_affine() * pt
    }

    /// Converts a screen‑space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.screen_to_world_affine() * pt
    }

    /// Converts a world‑space rectangle into screen coordinates.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        // Axis-aligned with positive scale, so the bbox is exact.
        self.world_to_screen_affine().transform_rect_bbox(rect)
    }

    /// Converts a screen‑space rectangle into world coordinates.
    #[must_use]
    pub fn screen_to_world_rect(&self, rect: Rect) -> Rect {
        self.screen_to_world_affine().transform_rect_bbox(rect)
    }

    /// World units covered by one screen unit.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.z
    }
}

fn is_valid_scale(z: f64) -> bool {
    z.is_finite() && z > 0.0
}

/// Sign of a wheel delta: `0.0` for zero and NaN.
fn step_sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
