// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing input records that are not pointer samples.

use vantage_view2d::WheelModifiers;

/// Keyboard modifier state, refreshed by the host on every key-down and key-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    /// Shift is held: wheel deltas swap axes.
    pub shift: bool,
    /// Ctrl is held: the wheel zooms.
    pub ctrl: bool,
}

impl KeyModifiers {
    /// Creates a modifier state.
    #[must_use]
    pub fn new(shift: bool, ctrl: bool) -> Self {
        Self { shift, ctrl }
    }

    /// The wheel behavior these keys select.
    #[must_use]
    pub fn wheel(self) -> WheelModifiers {
        WheelModifiers {
            zoom: self.ctrl,
            swap_axes: self.shift,
        }
    }
}

/// One wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInput {
    /// Horizontal delta as reported by the host.
    pub delta_x: f64,
    /// Vertical delta as reported by the host.
    pub delta_y: f64,
}

impl WheelInput {
    /// Creates a wheel event.
    #[must_use]
    pub fn new(delta_x: f64, delta_y: f64) -> Self {
        Self { delta_x, delta_y }
    }
}
