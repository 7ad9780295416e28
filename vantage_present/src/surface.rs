// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;

/// Size of a drawing surface in device pixels plus its device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    /// Width in device pixels.
    pub width: f64,
    /// Height in device pixels.
    pub height: f64,
    /// Device pixels per logical (CSS) pixel.
    pub device_pixel_ratio: f64,
}

impl SurfaceSize {
    /// Creates a size from device-pixel extents.
    ///
    /// A non-positive or non-finite ratio falls back to `1.0`.
    #[must_use]
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            device_pixel_ratio,
        }
    }

    /// Creates a size from logical (CSS) extents, as a resize observer reports them.
    #[must_use]
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let ratio = Self::new(0.0, 0.0, device_pixel_ratio).device_pixel_ratio;
        Self::new(css_width * ratio, css_height * ratio, ratio)
    }

    /// Width in logical pixels.
    #[must_use]
    pub fn css_width(&self) -> f64 {
        self.width / self.device_pixel_ratio
    }

    /// Height in logical pixels.
    #[must_use]
    pub fn css_height(&self) -> f64 {
        self.height / self.device_pixel_ratio
    }

    /// The full surface as a device-pixel rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for SurfaceSize {
    /// 300 x 300 device pixels at ratio `1.0`.
    fn default() -> Self {
        Self::new(300.0, 300.0, 1.0)
    }
}

/// Minimal 2D drawing surface. All coordinates are device pixels.
pub trait Surface {
    /// Clears `rect` to transparent.
    fn clear(&mut self, rect: Rect);

    /// Fills `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes the outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self, rect: Rect) {
        (**self).clear(rect);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        (**self).stroke_rect(rect, color, width);
    }
}

/// One call recorded by [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceCommand {
    /// [`Surface::clear`].
    Clear {
        /// Cleared area.
        rect: Rect,
    },
    /// [`Surface::fill_rect`].
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`Surface::stroke_rect`].
    StrokeRect {
        /// Outlined area.
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Stroke width in device pixels.
        width: f64,
    },
}

/// Surface that records every call instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in the order they were issued.
    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recording empty.
    pub fn take(&mut self) -> Vec<SurfaceCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Drops the recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, rect: Rect) {
        self.commands.push(SurfaceCommand::Clear { rect });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(SurfaceCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.commands
            .push(SurfaceCommand::StrokeRect { rect, color, width });
    }
}
