// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vantage_present::PresenterStyle;
use vantage_view2d::ZoomLimits;

/// How a viewport maps world space onto its surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// World units are logical pixels; pointer gestures and wheel input do not move the view.
    Inspector,
    /// World space goes through the pan/zoom camera.
    #[default]
    Camera,
}

/// Viewport configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// World-to-surface mapping.
    pub mode: ViewMode,
    /// Keep the pinch midpoint fixed on screen while pinching.
    ///
    /// Off by default: the scale changes around the surface origin and content
    /// drifts relative to the fingers.
    pub pinch_anchor: bool,
    /// Bounds applied to the camera scale after every update, if any.
    pub zoom_limits: Option<ZoomLimits>,
    /// Draw the background grid under the boxes (camera mode only).
    pub show_grid: bool,
    /// Colors and widths used when drawing.
    pub style: PresenterStyle,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            pinch_anchor: false,
            zoom_limits: Some(ZoomLimits::default()),
            show_grid: false,
            style: PresenterStyle::default(),
        }
    }
}

impl ViewportConfig {
    /// Configuration for the untransformed inspector canvas.
    #[must_use]
    pub fn inspector() -> Self {
        Self {
            mode: ViewMode::Inspector,
            ..Self::default()
        }
    }

    /// Configuration for the node-graph canvas: camera plus background grid.
    #[must_use]
    pub fn graph() -> Self {
        Self {
            mode: ViewMode::Camera,
            show_grid: true,
            ..Self::default()
        }
    }
}
