// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use peniko::Color;
use vantage_pick::Aabb;
use vantage_view2d::{CameraState, GridPattern};

use crate::surface::{Surface, SurfaceSize};

/// Colors and widths used by [`CanvasPresenter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresenterStyle {
    /// Fill of every box.
    pub fill: Color,
    /// Outline of the highlighted box.
    pub highlight: Color,
    /// Outline width in logical pixels; scaled by the device pixel ratio when drawn.
    pub highlight_width: f64,
    /// Background grid line color.
    pub grid: Color,
}

impl Default for PresenterStyle {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            highlight: Color::from_rgb8(0x1e, 0x90, 0xff),
            highlight_width: 2.0,
            grid: Color::from_rgb8(0xb4, 0xb4, 0xb4),
        }
    }
}

/// Issues the draw calls for one box snapshot.
///
/// The presenter holds no scene state; every call is a pure function of its
/// arguments, so drawing the same inputs twice produces the same commands.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasPresenter {
    style: PresenterStyle,
}

impl CanvasPresenter {
    /// Creates a presenter with the given style.
    #[must_use]
    pub fn new(style: PresenterStyle) -> Self {
        Self { style }
    }

    /// The active style.
    #[must_use]
    pub fn style(&self) -> &PresenterStyle {
        &self.style
    }

    /// Clears the surface, fills every box, then outlines `selected`.
    ///
    /// With `camera` set, boxes are mapped from world to screen space before
    /// the device pixel ratio is applied; without it, world units are logical
    /// pixels. A `selected` index outside `boxes` draws no outline.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        size: SurfaceSize,
        camera: Option<&CameraState>,
        boxes: &[Aabb],
        selected: Option<usize>,
    ) {
        surface.clear(size.bounds());
        self.paint_boxes(surface, size, camera, boxes);
        self.paint_highlight(surface, size, camera, boxes, selected);
    }

    /// Like [`CanvasPresenter::draw`], with the camera's background grid under the boxes.
    pub fn draw_with_grid<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        size: SurfaceSize,
        camera: &CameraState,
        boxes: &[Aabb],
        selected: Option<usize>,
    ) {
        surface.clear(size.bounds());
        self.paint_grid(surface, size, camera);
        self.paint_boxes(surface, size, Some(camera), boxes);
        self.paint_highlight(surface, size, Some(camera), boxes, selected);
    }

    /// Fills the grid lines of `camera` across the surface.
    ///
    /// The grid is anchored at the surface center; see [`GridPattern`].
    pub fn paint_grid<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        size: SurfaceSize,
        camera: &CameraState,
    ) {
        let center = Point::new(size.css_width() * 0.5, size.css_height() * 0.5);
        let grid = GridPattern::for_camera(camera, center);
        let dpr = size.device_pixel_ratio;
        let half = grid.thickness * 0.5;
        for x in grid.vertical_lines(size.css_width()) {
            let rect = Rect::new((x - half) * dpr, 0.0, (x + half) * dpr, size.height);
            surface.fill_rect(rect, self.style.grid);
        }
        for y in grid.horizontal_lines(size.css_height()) {
            let rect = Rect::new(0.0, (y - half) * dpr, size.width, (y + half) * dpr);
            surface.fill_rect(rect, self.style.grid);
        }
    }

    /// Fills every box in collection order.
    pub fn paint_boxes<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        size: SurfaceSize,
        camera: Option<&CameraState>,
        boxes: &[Aabb],
    ) {
        for aabb in boxes {
            let rect = device_rect(aabb, camera, size.device_pixel_ratio);
            surface.fill_rect(rect, self.style.fill);
        }
    }

    /// Outlines the box at `selected`, if it exists.
    pub fn paint_highlight<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        size: SurfaceSize,
        camera: Option<&CameraState>,
        boxes: &[Aabb],
        selected: Option<usize>,
    ) {
        let Some(aabb) = selected.and_then(|i| boxes.get(i)) else {
            return;
        };
        let dpr = size.device_pixel_ratio;
        let rect = device_rect(aabb, camera, dpr);
        surface.stroke_rect(rect, self.style.highlight, self.style.highlight_width * dpr);
    }
}

/// World box → device-pixel rectangle.
fn device_rect(aabb: &Aabb, camera: Option<&CameraState>, dpr: f64) -> Rect {
    let rect = aabb.to_rect();
    let rect = match camera {
        Some(camera) => camera.world_to_screen_rect(rect),
        None => rect,
    };
    rect.scale_from_origin(dpr)
}
