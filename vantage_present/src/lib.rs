// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Present: deterministic drawing of box snapshots onto 2D surfaces.
//!
//! [`CanvasPresenter`] turns a camera (or no camera, for the untransformed
//! inspector canvas), a box snapshot and an optional highlighted index into a
//! fixed sequence of [`Surface`] calls:
//!
//! 1. Clear the whole surface.
//! 2. Fill every box in collection order, in device pixels.
//! 3. Stroke the highlighted box last, so no later fill can cover its outline.
//!
//! The presenter reads the surface size and device pixel ratio from a
//! [`SurfaceSize`] it is handed; it never consults global display state.
//!
//! ## Surfaces
//!
//! - [`RecordingSurface`] records [`SurfaceCommand`]s. It does not rasterize and
//!   is intended for tests and debugging that assert on emitted commands.
//! - `WebCanvasSurface` (only on `wasm32`) draws into a
//!   `CanvasRenderingContext2d`.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_pick::BoxSet;
//! use vantage_present::{CanvasPresenter, RecordingSurface, SurfaceCommand, SurfaceSize};
//!
//! let boxes = BoxSet::from_quads(&[0.0, 0.0, 10.0, 10.0, 20.0, 0.0, 5.0, 5.0]);
//! let size = SurfaceSize::from_css(300.0, 150.0, 2.0);
//! let presenter = CanvasPresenter::default();
//! let mut surface = RecordingSurface::new();
//!
//! presenter.draw(&mut surface, size, None, &boxes, Some(1));
//!
//! let commands = surface.commands();
//! assert!(matches!(commands[0], SurfaceCommand::Clear { .. }));
//! assert!(matches!(commands[3], SurfaceCommand::StrokeRect { .. }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod presenter;
mod surface;
#[cfg(target_arch = "wasm32")]
mod web;

pub use error::SurfaceError;
pub use presenter::{CanvasPresenter, PresenterStyle};
pub use surface::{RecordingSurface, Surface, SurfaceCommand, SurfaceSize};
#[cfg(target_arch = "wasm32")]
pub use web::WebCanvasSurface;
