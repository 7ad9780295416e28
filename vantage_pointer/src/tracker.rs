// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active pointer set and gesture derivation.
//!
//! ## Usage
//!
//! 1) Forward every pointer-down, pointer-move and pointer-up to the matching
//!    `on_pointer_*` method, together with the scale the view currently has.
//! 2) Apply the returned [`Gesture`] to your view: pan by `delta`, and on a
//!    pinch replace the scale with `scale`.
//! 3) Call [`PointerTracker::clear`] when the surface goes away.

use kurbo::Vec2;
use smallvec::SmallVec;

use crate::gesture::Gesture;
use crate::sample::{PointerId, PointerSample};

/// Result of feeding one event into a [`PointerTracker`].
#[derive(Clone, Copy, Debug)]
pub struct PointerUpdate<'a> {
    /// Active pointers in insertion order. The first entry is the primary pointer.
    pub active: &'a [PointerSample],
    /// Gesture derived for this event, or the previous one when the event was rejected.
    pub gesture: Gesture,
    /// `false` when the event was rejected (pen input) and changed nothing.
    pub admitted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PinchBaseline {
    /// Distance between the two pointers when the pinch began.
    distance: Option<f64>,
    /// View scale when the pinch began (or the live scale while no pinch runs).
    scale: f64,
}

impl Default for PinchBaseline {
    fn default() -> Self {
        Self {
            distance: None,
            scale: 1.0,
        }
    }
}

/// Multi-pointer cache for one interaction surface.
///
/// Pointers are kept in insertion order, keyed by id. The oldest active pointer
/// is the primary pointer: only its movement drives panning.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    active: SmallVec<[PointerSample; 4]>,
    baseline: PinchBaseline,
    last: Gesture,
}

impl PointerTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active pointers in insertion order.
    #[must_use]
    pub fn active(&self) -> &[PointerSample] {
        &self.active
    }

    /// The oldest active pointer, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&PointerSample> {
        self.active.first()
    }

    /// Gesture produced by the most recent admitted event.
    #[must_use]
    pub fn last_gesture(&self) -> Gesture {
        self.last
    }

    /// Returns `true` while a pinch baseline is armed.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.baseline.distance.is_some()
    }

    /// Handles a pointer-down.
    ///
    /// The sample is inserted, or overwritten in place if its id is already
    /// tracked so it keeps its position in the insertion order.
    pub fn on_pointer_down(
        &mut self,
        sample: PointerSample,
        current_scale: f64,
    ) -> PointerUpdate<'_> {
        if sample.is_pen() {
            return self.rejected();
        }
        self.upsert(sample);
        self.last = self.derive(None, current_scale);
        self.update()
    }

    /// Handles a pointer-move.
    ///
    /// A mouse sample without the primary button is handled as a release.
    /// A move for an untracked id admits the pointer.
    pub fn on_pointer_move(
        &mut self,
        sample: PointerSample,
        current_scale: f64,
    ) -> PointerUpdate<'_> {
        if sample.is_pen() {
            return self.rejected();
        }
        if sample.is_released_mouse() {
            self.remove(sample.id);
            self.last = self.derive(None, current_scale);
            return self.update();
        }
        self.upsert(sample);
        self.last = self.derive(Some(&sample), current_scale);
        self.update()
    }

    /// Handles a pointer-up. The pointer is removed whether or not it was tracked.
    pub fn on_pointer_up(&mut self, sample: PointerSample, current_scale: f64) -> PointerUpdate<'_> {
        if sample.is_pen() {
            return self.rejected();
        }
        self.remove(sample.id);
        self.last = self.derive(None, current_scale);
        self.update()
    }

    /// Drops every active pointer and the pinch baseline.
    pub fn clear(&mut self) {
        self.active.clear();
        self.baseline = PinchBaseline {
            distance: None,
            scale: self.baseline.scale,
        };
        self.last = Gesture::None;
    }

    fn update(&self) -> PointerUpdate<'_> {
        PointerUpdate {
            active: &self.active,
            gesture: self.last,
            admitted: true,
        }
    }

    fn rejected(&self) -> PointerUpdate<'_> {
        PointerUpdate {
            admitted: false,
            ..self.update()
        }
    }

    fn upsert(&mut self, sample: PointerSample) {
        if let Some(slot) = self.active.iter_mut().find(|p| p.id == sample.id) {
            *slot = sample;
        } else {
            self.active.push(sample);
        }
    }

    fn remove(&mut self, id: PointerId) {
        self.active.retain(|p| p.id != id);
    }

    fn derive(&mut self, moved: Option<&PointerSample>, current_scale: f64) -> Gesture {
        let delta = match (moved, self.active.first()) {
            (Some(moved), Some(primary)) if moved.id == primary.id => moved.movement,
            _ => Vec2::ZERO,
        };

        if let [a, b] = self.active.as_slice() {
            let (a, b) = (a.position, b.position);
            let distance = (a - b).hypot();
            let scale = self.pinch_scale(distance, current_scale);
            return Gesture::Pinch {
                delta,
                distance,
                anchor_scale: self.baseline.scale,
                scale,
                midpoint: a.midpoint(b),
            };
        }

        self.baseline = PinchBaseline {
            distance: None,
            scale: current_scale,
        };
        if self.active.is_empty() {
            Gesture::None
        } else {
            Gesture::Pan { delta }
        }
    }

    fn pinch_scale(&mut self, distance: f64, current_scale: f64) -> f64 {
        match self.baseline.distance {
            Some(initial) => {
                let scale = self.baseline.scale * (distance / initial);
                // Touching pointers cannot express a scale; keep the live one.
                if scale > 0.0 && scale.is_finite() {
                    scale
                } else {
                    current_scale
                }
            }
            None => {
                // Pinch begins here. A zero distance cannot anchor a ratio, so the
                // baseline stays unarmed until the pointers separate.
                self.baseline.scale = current_scale;
                if distance > 0.0 && distance.is_finite() {
                    self.baseline.distance = Some(distance);
                }
                current_scale
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::sample::{PointerButtons, PointerKind};

    fn touch(id: PointerId, x: f64, y: f64) -> PointerSample {
        PointerSample::new(id, PointerKind::Touch, Point::new(x, y))
    }

    #[test]
    fn down_preserves_insertion_order_on_overwrite() {
        let mut t = PointerTracker::new();
        t.on_pointer_down(touch(1, 0.0, 0.0), 1.0);
        t.on_pointer_down(touch(2, 5.0, 5.0), 1.0);
        t.on_pointer_down(touch(1, 9.0, 9.0), 1.0);

        let ids: SmallVec<[PointerId; 4]> = t.active().iter().map(|p| p.id).collect();
        assert_eq!(ids.as_slice(), &[1, 2]);
        assert_eq!(t.active()[0].position, Point::new(9.0, 9.0));
    }

    #[test]
    fn only_primary_pointer_pans() {
        let mut t = PointerTracker::new();
        t.on_pointer_down(touch(1, 0.0, 0.0), 1.0);
        t.on_pointer_down(touch(2, 10.0, 0.0), 1.0);
        t.on_pointer_down(touch(3, 20.0, 0.0), 1.0);

        let moved = touch(2, 11.0, 0.0).with_movement(Vec2::new(1.0, 0.0));
        let update = t.on_pointer_move(moved, 1.0);
        assert_eq!(update.gesture, Gesture::Pan { delta: Vec2::ZERO });

        let moved = touch(1, 3.0, 4.0).with_movement(Vec2::new(3.0, 4.0));
        let update = t.on_pointer_move(moved, 1.0);
        assert_eq!(
            update.gesture,
            Gesture::Pan {
                delta: Vec2::new(3.0, 4.0)
            }
        );
    }

    #[test]
    fn released_mouse_move_is_an_implicit_up() {
        let mut t = PointerTracker::new();
        let mouse = PointerSample::new(7, PointerKind::Mouse, Point::ORIGIN);
        t.on_pointer_down(mouse, 1.0);
        assert_eq!(t.active().len(), 1);

        let hover = mouse.with_buttons(PointerButtons::empty());
        let update = t.on_pointer_move(hover, 1.0);
        assert!(update.active.is_empty());
        assert_eq!(update.gesture, Gesture::None);
    }

    #[test]
    fn move_admits_untracked_pointer() {
        let mut t = PointerTracker::new();
        let update = t.on_pointer_move(touch(4, 1.0, 1.0).with_movement(Vec2::new(1.0, 1.0)), 1.0);
        assert_eq!(update.active.len(), 1);
        assert_eq!(update.gesture.delta(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn up_removes_unconditionally() {
        let mut t = PointerTracker::new();
        t.on_pointer_down(touch(1, 0.0, 0.0), 1.0);
        t.on_pointer_up(touch(99, 0.0, 0.0), 1.0);
        assert_eq!(t.active().len(), 1);
        let update = t.on_pointer_up(touch(1, 0.0, 0.0), 1.0);
        assert!(update.active.is_empty());
        assert_eq!(update.gesture, Gesture::None);
    }

    #[test]
    fn pinch_scale_follows_distance_ratio() {
        let mut t = PointerTracker::new();
        t.on_pointer_down(touch(1, 0.0, 0.0), 1.5);
        let update = t.on_pointer_down(touch(2, 10.0, 0.0), 1.5);
        assert_eq!(update.gesture.pinch_scale(), Some(1.5));
        assert!(t.is_pinching());

        let update = t.on_pointer_move(touch(2, 20.0, 0.0), 1.5);
        let scale = update.gesture.pinch_scale().unwrap();
        assert!((scale - 3.0).abs() < 1e-12);

        // The caller already applied 3.0; the baseline must not drift with it.
        let update = t.on_pointer_move(touch(2, 10.0, 0.0), 3.0);
        let scale = update.gesture.pinch_scale().unwrap();
        assert!((scale - 1.5).abs() < 1e-12);
    }

    #[test]
    fn leaving_pinch_rearms_with_live_scale() {
        let mut t = PointerTracker::new();
        t.on_pointer_down(touch(1, 0.0, 0.0), 1.0);
        t.on_pointer_down(touch(2, 10.0, 0.0), 1.0);
        t.on_pointer_move(touch(2, 40.0, 0.0), 1.0);
        t.on_pointer_up(touch(2, 40.0, 0.0), 4.0);
        assert!(!t.is_pinching());

        // New pinch starts from 4.0, not from the stale 1.0.
        let update = t.on_pointer_down(touch(3, 0.0, 5.0), 4.0);
        let Gesture::Pinch {
            anchor_scale,
            scale,
            distance,
            ..
        } = update.gesture
        else {
            panic!("expected pinch, got {:?}", update.gesture);
        };
        assert_eq!(anchor_scale, 4.0);
        assert_eq!(scale, 4.0);
        assert!((distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn zero_distance_pinch_keeps_scale() {
        let mut t = PointerTracker::new();
        t.on_pointer_down(touch(1, 5.0, 5.0), 2.0);
        let update = t.on_pointer_down(touch(2, 5.0, 5.0), 2.0);
        assert_eq!(update.gesture.pinch_scale(), Some(2.0));
        assert!(!t.is_pinching());

        // The first non-zero distance becomes the baseline.
        let update = t.on_pointer_move(touch(2, 15.0, 5.0), 2.0);
        assert_eq!(update.gesture.pinch_scale(), Some(2.0));
        let update = t.on_pointer_move(touch(2, 25.0, 5.0), 2.0);
        let scale = update.gesture.pinch_scale().unwrap();
        assert!((scale - 4.0).abs() < 1e-12);
    }

    #[test]
    fn touching_pointers_keep_live_scale() {
        let mut t = PointerTracker::new();
        t.on_pointer_down(touch(1, 0.0, 0.0), 1.0);
        t.on_pointer_down(touch(2, 10.0, 0.0), 1.0);
        assert!(t.is_pinching());

        let update = t.on_pointer_move(touch(2, 0.0, 0.0), 1.75);
        let Gesture::Pinch {
            distance, scale, ..
        } = update.gesture
        else {
            panic!("expected pinch, got {:?}", update.gesture);
        };
        assert_eq!(distance, 0.0);
        assert_eq!(scale, 1.75);

        // Separating again resumes the ratio against the original baseline.
        let update = t.on_pointer_move(touch(2, 20.0, 0.0), 1.75);
        let scale = update.gesture.pinch_scale().unwrap();
        assert!((scale - 2.0).abs() < 1e-12);
    }

    #[test]
    fn pen_leaves_state_untouched() {
        let mut t = PointerTracker::new();
        t.on_pointer_down(touch(1, 0.0, 0.0), 1.0);
        let before = t.on_pointer_move(touch(1, 2.0, 0.0).with_movement(Vec2::new(2.0, 0.0)), 1.0);
        let before_gesture = before.gesture;

        assert!(before.admitted);

        let pen = PointerSample::new(9, PointerKind::Pen, Point::new(50.0, 50.0));
        let down = t.on_pointer_down(pen, 1.0);
        assert!(!down.admitted);
        assert_eq!(down.gesture, before_gesture);
        let moved = t.on_pointer_move(pen, 1.0);
        assert!(!moved.admitted);
        assert_eq!(moved.gesture, before_gesture);
        let up = t.on_pointer_up(pen, 1.0);
        assert!(!up.admitted);
        assert_eq!(up.gesture, before_gesture);
        assert_eq!(t.active().len(), 1);
        assert_eq!(t.active()[0].id, 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut t = PointerTracker::new();
        t.on_pointer_down(touch(1, 0.0, 0.0), 1.0);
        t.on_pointer_down(touch(2, 3.0, 4.0), 1.0);
        t.clear();
        assert!(t.active().is_empty());
        assert!(!t.is_pinching());
        assert_eq!(t.last_gesture(), Gesture::None);
    }
}
