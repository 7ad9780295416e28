// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Pointer: multi-pointer tracking and gesture derivation.
//!
//! This crate owns the set of currently active pointers for one interaction
//! surface and turns each pointer event into a single logical [`Gesture`]:
//!
//! - [`Gesture::Pan`]: driven by the oldest (first-inserted) active pointer.
//! - [`Gesture::Pinch`]: selected whenever exactly two pointers are active.
//! - [`Gesture::None`]: nothing is pressed.
//!
//! It does not own a camera. Callers pass the live scale into each update so
//! the tracker can arm its pinch baseline, and then apply the resulting gesture
//! to whatever view model they keep (for example `vantage_view2d::CameraState`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use vantage_pointer::{Gesture, PointerKind, PointerSample, PointerTracker};
//!
//! let mut tracker = PointerTracker::new();
//!
//! // A single touch drags the view.
//! let down = PointerSample::new(1, PointerKind::Touch, Point::new(10.0, 10.0));
//! tracker.on_pointer_down(down, 1.0);
//!
//! let moved = PointerSample::new(1, PointerKind::Touch, Point::new(14.0, 7.0))
//!     .with_movement(Vec2::new(4.0, -3.0));
//! let update = tracker.on_pointer_move(moved, 1.0);
//! assert_eq!(update.gesture, Gesture::Pan { delta: Vec2::new(4.0, -3.0) });
//!
//! // A second finger turns it into a pinch.
//! let second = PointerSample::new(2, PointerKind::Touch, Point::new(34.0, 7.0));
//! let update = tracker.on_pointer_down(second, 1.0);
//! assert!(matches!(update.gesture, Gesture::Pinch { .. }));
//! assert_eq!(update.active.len(), 2);
//! ```
//!
//! ## Rules
//!
//! - Pen samples are never admitted; every entry point ignores them, reports
//!   the previous gesture unchanged and clears [`PointerUpdate::admitted`].
//! - A mouse move with the primary button released counts as a release. This
//!   covers a pointer that left the surface while pressed and came back after
//!   the button went up.
//! - The pinch scale is `initial_scale * distance / initial_distance`, where
//!   the initial values are captured when the pinch began. Whenever the active
//!   count leaves two, the baseline is re-armed from the live scale.
//!
//! This crate is `no_std`.

#![no_std]

mod gesture;
mod sample;
mod tracker;

pub use gesture::Gesture;
pub use sample::{PointerButtons, PointerId, PointerKind, PointerSample};
pub use tracker::{PointerTracker, PointerUpdate};
