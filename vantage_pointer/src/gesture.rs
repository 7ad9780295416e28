// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Logical gesture derived from the active pointer set for one event.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Gesture {
    /// No pointer is active.
    #[default]
    None,
    /// One pointer (or three or more) is active; the primary pointer drives panning.
    Pan {
        /// Screen-space movement of the primary pointer for this event.
        ///
        /// Zero when the event came from a non-primary pointer.
        delta: Vec2,
    },
    /// Exactly two pointers are active.
    Pinch {
        /// Screen-space movement of the primary pointer for this event.
        delta: Vec2,
        /// Current Euclidean distance between the two pointers.
        distance: f64,
        /// Scale captured when the pinch began.
        anchor_scale: f64,
        /// Scale implied by the current distance.
        scale: f64,
        /// Screen-space midpoint of the two pointers.
        midpoint: Point,
    },
}

impl Gesture {
    /// Primary-pointer movement carried by this gesture, if any.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        match *self {
            Self::None => Vec2::ZERO,
            Self::Pan { delta } | Self::Pinch { delta, .. } => delta,
        }
    }

    /// Returns the pinch scale when this is a pinch.
    #[must_use]
    pub fn pinch_scale(&self) -> Option<f64> {
        match *self {
            Self::Pinch { scale, .. } => Some(scale),
            _ => None,
        }
    }
}
