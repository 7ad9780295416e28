// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage View 2D: the pan/zoom camera of a Vantage viewport.
//!
//! This crate provides a small, headless camera model. It focuses on:
//! - Camera state: a world‑space offset plus a uniform scale factor.
//! - Pure updates from wheel steps, pan deltas and pinch scales.
//! - Coordinate conversion between screen space and world space.
//! - Optional zoom limits and a background grid derived from the camera.
//!
//! It does **not** interpret raw input. Callers are expected to:
//! - Track pointers with `vantage_pointer` (or their own recognizer).
//! - Feed the resulting pan deltas and pinch scales into [`CameraState`].
//! - Pass keyboard modifiers explicitly as [`WheelModifiers`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_view2d::{CameraState, WheelModifiers};
//!
//! let camera = CameraState::default();
//!
//! // Ctrl + wheel zooms by a fixed step, whatever the wheel magnitude.
//! let zoomed = camera.apply_wheel(0.0, 120.0, WheelModifiers::ZOOM);
//! assert!((zoomed.z - 0.9).abs() < 1e-12);
//!
//! // Dragging moves the offset by screen delta / scale; screen y points down.
//! let panned = zoomed.apply_pan(9.0, -18.0);
//!
//! // Convert a click into world space for hit testing.
//! let world = panned.screen_to_world(Point::new(100.0, 50.0));
//! let back = panned.world_to_screen(world);
//! assert!((back.x - 100.0).abs() < 1e-9 && (back.y - 50.0).abs() < 1e-9);
//! ```
//!
//! ## Conventions
//!
//! - `screen = ((world.x + x) * z, (world.y - y) * z)`: the world origin sits
//!   at the surface origin when the offset is zero.
//! - Panning adds `dx / z` to `x` and subtracts `dy / z` from `y`, so the
//!   offset's vertical axis points up.
//! - Wheel updates are sign based: only the direction of a wheel delta
//!   matters, which normalizes devices that report wildly different magnitudes.
//! - Pinch replaces the scale without touching the offset. Use
//!   [`CameraState::apply_pinch_about`] to keep a screen point fixed instead.
//! - The background grid is anchored at the surface center, shifted by
//!   `(x * z, -y * z)`; see [`GridPattern`].
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod grid;
mod limits;

pub use camera::{CameraState, WHEEL_PAN_STEP, WHEEL_ZOOM_STEP};
pub use grid::{GridLines, GridPattern};
pub use limits::{WheelModifiers, ZoomLimits};
