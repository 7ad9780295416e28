// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::camera::CameraState;

/// Modifier state consulted by [`CameraState::apply_wheel`].
///
/// Hosts derive this from their own keyboard tracking; the camera never reads
/// global key state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelModifiers {
    /// Wheel zooms instead of panning (typically Ctrl).
    pub zoom: bool,
    /// Exchange the horizontal and vertical wheel deltas (typically Shift).
    pub swap_axes: bool,
}

impl WheelModifiers {
    /// Plain wheel: pan.
    pub const NONE: Self = Self {
        zoom: false,
        swap_axes: false,
    };
    /// Zoom modifier held.
    pub const ZOOM: Self = Self {
        zoom: true,
        swap_axes: false,
    };
    /// Axis-swap modifier held.
    pub const SWAP_AXES: Self = Self {
        zoom: false,
        swap_axes: true,
    };
}

/// Inclusive bounds for the camera scale.
///
/// The camera's own updates never clamp; a viewport applies these after each
/// update when it wants bounded zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl Default for ZoomLimits {
    /// `[1e-3, 1e3]`.
    fn default() -> Self {
        Self {
            min: 1e-3,
            max: 1e3,
        }
    }
}

impl ZoomLimits {
    /// Creates limits from two bounds.
    ///
    /// The range is normalized so that `min <= max`. Returns `None` when a bound
    /// is not a finite positive number.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Option<Self> {
        if !(a.is_finite() && b.is_finite() && a > 0.0 && b > 0.0) {
            return None;
        }
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Some(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps the scale of `state` into these limits; the offset is untouched.
    #[must_use]
    pub fn clamp(&self, state: CameraState) -> CameraState {
        CameraState {
            z: state.z.clamp(self.min, self.max),
            ..state
        }
    }
}
