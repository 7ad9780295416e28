// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Viewport: an interactive 2D view over a box snapshot.
//!
//! A [`Viewport`] owns the pieces of one view and keeps them consistent:
//!
//! - a [`PointerTracker`](vantage_pointer::PointerTracker) turning pointer
//!   events into pan and pinch gestures,
//! - a [`CameraState`](vantage_view2d::CameraState) those gestures and wheel
//!   input update,
//! - a [`BoxSet`](vantage_pick::BoxSet) snapshot and the selection into it,
//! - a [`Surface`](vantage_present::Surface) it redraws after every change.
//!
//! Boxes arrive once from a [`BoxSource`]: [`Viewport::request_boxes`] hands
//! out the load future on the first call only, and the host installs its
//! result with [`Viewport::replace_boxes`].
//!
//! Input wiring is scoped: [`ListenerScope`] attaches the pointer and wheel
//! listeners to an [`InputHost`] and detaches them when dropped.
//! [`Viewport::attach_input`] ties such a scope to the viewport, giving an
//! [`AttachedViewport`] that detaches its listeners before the surface goes away.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_present::{RecordingSurface, SurfaceSize};
//! use vantage_viewport::{RandomBoxSource, Viewport, ViewportConfig};
//!
//! let mut viewport = Viewport::new(
//!     Ok(RecordingSurface::new()),
//!     SurfaceSize::from_css(800.0, 600.0, 1.0),
//!     ViewportConfig::graph(),
//! );
//!
//! let load = viewport.request_boxes(RandomBoxSource::new(1)).unwrap();
//! let boxes = pollster::block_on(load);
//! viewport.replace_boxes(boxes);
//! assert!(viewport.request_boxes(RandomBoxSource::new(1)).is_none());
//!
//! let _ = viewport.click(Point::new(100.0, 100.0));
//! println!("{}", viewport.inspector_text());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod attached;
mod config;
mod input;
mod listeners;
mod source;
mod viewport;

pub use attached::AttachedViewport;
pub use config::{ViewMode, ViewportConfig};
pub use input::{KeyModifiers, WheelInput};
pub use listeners::{InputHost, ListenerKind, ListenerScope};
pub use source::{BoxSource, RandomBoxSource};
pub use viewport::{FALLBACK_MESSAGE, Viewport};
