// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer samples as delivered by the host input layer.

use kurbo::{Point, Vec2};

/// Identifier the host assigns to a pointer for the duration of one contact.
pub type PointerId = u64;

/// Kind of device that produced a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or trackpad cursor.
    Mouse,
    /// Finger contact on a touch surface.
    Touch,
    /// Stylus. Never admitted into the active set.
    Pen,
}

bitflags::bitflags! {
    /// Buttons held while a pointer sample was produced.
    ///
    /// Bit values match the `buttons` mask of DOM pointer events.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u16 {
        /// Left mouse button, touch contact, or pen tip.
        const PRIMARY   = 0b0000_0001;
        /// Right mouse button or pen barrel button.
        const SECONDARY = 0b0000_0010;
        /// Middle mouse button.
        const AUXILIARY = 0b0000_0100;
        /// Browser "back" button.
        const BACK      = 0b0000_1000;
        /// Browser "forward" button.
        const FORWARD   = 0b0001_0000;
        /// Pen eraser.
        const ERASER    = 0b0010_0000;
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::PRIMARY
    }
}

/// One pointer event reduced to what the tracker needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Host pointer identifier.
    pub id: PointerId,
    /// Producing device.
    pub kind: PointerKind,
    /// Position in screen space.
    pub position: Point,
    /// Buttons held at the time of the event.
    pub buttons: PointerButtons,
    /// Movement since the previous event for this pointer, as reported by the host.
    pub movement: Vec2,
}

impl PointerSample {
    /// Creates a sample with the primary button held and no movement.
    #[must_use]
    pub fn new(id: PointerId, kind: PointerKind, position: Point) -> Self {
        Self {
            id,
            kind,
            position,
            buttons: PointerButtons::default(),
            movement: Vec2::ZERO,
        }
    }

    /// Replaces the button mask.
    #[must_use]
    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Replaces the reported movement.
    #[must_use]
    pub fn with_movement(mut self, movement: Vec2) -> Self {
        self.movement = movement;
        self
    }

    /// Returns `true` for pen samples, which the tracker never admits.
    #[must_use]
    pub fn is_pen(&self) -> bool {
        self.kind == PointerKind::Pen
    }

    /// Returns `true` when this is a mouse sample whose primary button is up.
    #[must_use]
    pub fn is_released_mouse(&self) -> bool {
        self.kind == PointerKind::Mouse && !self.buttons.contains(PointerButtons::PRIMARY)
    }
}
