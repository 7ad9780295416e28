// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Pick: box snapshots, hit testing and selection bookkeeping.
//!
//! - [`Aabb`]: a closed, axis-aligned world-space box.
//! - [`BoxSet`]: an immutable, cheaply clonable snapshot of boxes, decoded from
//!   the flat `(x, y, width, height)` quadruples a box source delivers.
//! - [`hit_test`]: linear first-match picking.
//! - [`Selection`] and [`SelectionRecord`]: the selected index and the text an
//!   inspector panel shows for it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_pick::{BoxSet, Selection, hit_test};
//!
//! let boxes = BoxSet::from_quads(&[0.0, 0.0, 10.0, 10.0, 5.0, 5.0, 10.0, 10.0]);
//! assert_eq!(boxes.len(), 2);
//!
//! // Overlapping boxes: the lowest index wins.
//! let hit = hit_test(&boxes, Point::new(7.0, 7.0));
//! assert_eq!(hit, Some(0));
//!
//! let mut selection = Selection::new();
//! selection.set(hit);
//! assert_eq!(selection.validated(boxes.len()), Some(0));
//!
//! // A smaller snapshot makes a stale index read as "no selection".
//! assert_eq!(selection.validated(0), None);
//! ```
//!
//! Collections are expected to hold tens of boxes, so picking is a plain scan
//! in collection order with no spatial index.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod aabb;
mod selection;
mod set;

pub use aabb::{Aabb, hit_test};
pub use selection::{EMPTY_DETAILS, MISS_DETAILS, Selection, SelectionRecord};
pub use set::BoxSet;
