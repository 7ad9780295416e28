// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `CanvasRenderingContext2d` surface.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use kurbo::Rect;
use peniko::Color;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SurfaceError;
use crate::surface::Surface;

fn color_to_css(color: Color) -> String {
    // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
    color.to_rgba8().to_string()
}

/// Surface drawing into a DOM canvas through its 2D context.
pub struct WebCanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl fmt::Debug for WebCanvasSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebCanvasSurface { .. }")
    }
}

impl WebCanvasSurface {
    /// Acquires the 2D context of `canvas`.
    ///
    /// Returns [`SurfaceError::Unsupported`] when the browser offers no 2D
    /// context for this element.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| SurfaceError::Context(format!("{err:?}")))?
            .ok_or(SurfaceError::Unsupported)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Unsupported)?;
        Ok(Self { canvas, ctx })
    }

    /// The canvas element this surface draws into.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Resizes the canvas backing store to `width` x `height` device pixels.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Canvas backing stores are sized in whole, non-negative pixels."
    )]
    pub fn set_device_size(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }
}

impl Surface for WebCanvasSurface {
    fn clear(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color_to_css(color));
        self.ctx.set_line_width(width);
        self.ctx
            .stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }
}
