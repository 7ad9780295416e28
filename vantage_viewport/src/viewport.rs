// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::future::Future;

use kurbo::Point;
use vantage_pick::{BoxSet, EMPTY_DETAILS, MISS_DETAILS, Selection, SelectionRecord};
use vantage_pointer::{Gesture, PointerSample, PointerTracker};
use vantage_present::{CanvasPresenter, Surface, SurfaceError, SurfaceSize};
use vantage_view2d::CameraState;

use crate::attached::AttachedViewport;
use crate::config::{ViewMode, ViewportConfig};
use crate::input::{KeyModifiers, WheelInput};
use crate::listeners::InputHost;
use crate::source::BoxSource;

/// Message shown in place of the canvas when no 2D surface is available.
pub const FALLBACK_MESSAGE: &str = "2D canvas not available";

/// Result of the most recent click, as shown by the inspector panel.
#[derive(Clone, Debug, PartialEq)]
enum LastPick {
    None,
    Miss,
    Hit(SelectionRecord),
}

/// One interactive 2D view: pointer tracking, camera, box snapshot, selection
/// and a drawing surface.
///
/// Every state change redraws the surface before the handler returns. When
/// the surface could not be created the viewport still tracks input and
/// selection, draws nothing, and reports [`FALLBACK_MESSAGE`].
pub struct Viewport<S> {
    surface: Result<S, SurfaceError>,
    size: SurfaceSize,
    config: ViewportConfig,
    presenter: CanvasPresenter,
    tracker: PointerTracker,
    camera: CameraState,
    modifiers: KeyModifiers,
    boxes: BoxSet,
    selection: Selection,
    last_pick: LastPick,
    boxes_requested: bool,
}

impl<S> core::fmt::Debug for Viewport<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Viewport")
            .field("supported", &self.surface.is_ok())
            .field("size", &self.size)
            .field("mode", &self.config.mode)
            .field("camera", &self.camera)
            .field("boxes", &self.boxes.len())
            .field("selection", &self.selection.index())
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Viewport<S> {
    /// Creates a viewport over `surface` and draws the initial, empty frame.
    pub fn new(surface: Result<S, SurfaceError>, size: SurfaceSize, config: ViewportConfig) -> Self {
        if let Err(err) = &surface {
            log::warn!("viewport has no drawing surface: {err}");
        }
        let mut viewport = Self {
            surface,
            size,
            presenter: CanvasPresenter::new(config.style),
            config,
            tracker: PointerTracker::new(),
            camera: CameraState::IDENTITY,
            modifiers: KeyModifiers::default(),
            boxes: BoxSet::empty(),
            selection: Selection::new(),
            last_pick: LastPick::None,
            boxes_requested: false,
        };
        viewport.redraw();
        viewport
    }

    /// Binds the pointer and wheel listeners of `host` to this viewport.
    ///
    /// See [`AttachedViewport::attach`].
    pub fn attach_input<H: InputHost>(self, host: H) -> Result<AttachedViewport<S, H>, H::Error> {
        AttachedViewport::attach(self, host)
    }

    /// Returns `true` if a drawing surface is available.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.surface.is_ok()
    }

    /// Text to show instead of the canvas, when there is no surface.
    #[must_use]
    pub fn fallback_message(&self) -> Option<&'static str> {
        (!self.is_supported()).then_some(FALLBACK_MESSAGE)
    }

    /// The drawing surface, if available.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref().ok()
    }

    /// Mutable access to the drawing surface, if available.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut().ok()
    }

    /// The configuration this viewport was created with.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> CameraState {
        self.camera
    }

    /// Current box snapshot.
    #[must_use]
    pub fn boxes(&self) -> &BoxSet {
        &self.boxes
    }

    /// Selected index, if it is valid for the current snapshot.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selection.validated(self.boxes.len())
    }

    /// Pointer state.
    #[must_use]
    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    /// Current surface size.
    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Resizes the surface and redraws.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.redraw();
    }

    /// Replaces the camera and redraws.
    pub fn set_camera(&mut self, camera: CameraState) {
        self.camera = self.limited(camera);
        self.redraw();
    }

    /// Records the modifier keys reported by the latest key event.
    pub fn on_key(&mut self, modifiers: KeyModifiers) {
        self.modifiers = modifiers;
    }

    /// Handles a pointer-down.
    ///
    /// Each pointer handler returns the gesture it applied. Pen samples are
    /// rejected: nothing moves and [`Gesture::None`] is returned.
    pub fn on_pointer_down(&mut self, sample: PointerSample) -> Gesture {
        let update = self.tracker.on_pointer_down(sample, self.camera.z);
        let (admitted, gesture) = (update.admitted, update.gesture);
        self.admit(admitted, gesture)
    }

    /// Handles a pointer-move, panning or pinching the camera.
    pub fn on_pointer_move(&mut self, sample: PointerSample) -> Gesture {
        let update = self.tracker.on_pointer_move(sample, self.camera.z);
        let (admitted, gesture) = (update.admitted, update.gesture);
        self.admit(admitted, gesture)
    }

    /// Handles a pointer-up.
    pub fn on_pointer_up(&mut self, sample: PointerSample) -> Gesture {
        let update = self.tracker.on_pointer_up(sample, self.camera.z);
        let (admitted, gesture) = (update.admitted, update.gesture);
        self.admit(admitted, gesture)
    }

    /// Handles a wheel event: zoom with ctrl, pan otherwise, axes swapped with shift.
    pub fn on_wheel(&mut self, wheel: WheelInput) {
        if self.config.mode == ViewMode::Inspector {
            return;
        }
        let next = self
            .camera
            .apply_wheel(wheel.delta_x, wheel.delta_y, self.modifiers.wheel());
        self.update_camera(next);
    }

    /// Selects the topmost box under `point` (CSS pixels) and redraws.
    ///
    /// Returns the record for the hit box, or `None` on a miss, which also
    /// clears the selection.
    pub fn click(&mut self, point: Point) -> Option<SelectionRecord> {
        let world = match self.config.mode {
            ViewMode::Inspector => point,
            ViewMode::Camera => self.camera.screen_to_world(point),
        };
        let hit = self.boxes.hit_test(world);
        self.selection.set(hit);
        let record = hit.map(|index| SelectionRecord::new(index, &self.boxes[index]));
        self.last_pick = match &record {
            Some(record) => LastPick::Hit(record.clone()),
            None => LastPick::Miss,
        };
        log::debug!("click at {world:?} selected {hit:?}");
        self.redraw();
        record
    }

    /// Text for the inspector panel.
    #[must_use]
    pub fn inspector_text(&self) -> String {
        match &self.last_pick {
            LastPick::None => EMPTY_DETAILS.into(),
            LastPick::Miss => MISS_DETAILS.into(),
            LastPick::Hit(record) => record.details.clone(),
        }
    }

    /// Hands out the load of the box snapshot from `source`.
    ///
    /// Returns `Some` only on the first call for this viewport. The host drives
    /// the future and passes its output to [`Viewport::replace_boxes`].
    pub fn request_boxes<B: BoxSource>(
        &mut self,
        mut source: B,
    ) -> Option<impl Future<Output = BoxSet> + use<S, B>> {
        if self.boxes_requested {
            log::debug!("box snapshot already requested");
            return None;
        }
        self.boxes_requested = true;
        Some(async move {
            let quads = source.fetch().await;
            BoxSet::from_quads(&quads)
        })
    }

    /// Installs a new box snapshot, clears the selection and redraws.
    pub fn replace_boxes(&mut self, boxes: BoxSet) {
        log::debug!("replacing {} boxes with {}", self.boxes.len(), boxes.len());
        self.boxes = boxes;
        self.selection.clear();
        self.last_pick = LastPick::None;
        self.redraw();
    }

    /// Draws the current state onto the surface.
    pub fn redraw(&mut self) {
        let Ok(surface) = self.surface.as_mut() else {
            return;
        };
        let selected = self.selection.validated(self.boxes.len());
        match self.config.mode {
            ViewMode::Inspector => {
                self.presenter
                    .draw(surface, self.size, None, &self.boxes, selected);
            }
            ViewMode::Camera if self.config.show_grid => {
                self.presenter
                    .draw_with_grid(surface, self.size, &self.camera, &self.boxes, selected);
            }
            ViewMode::Camera => {
                self.presenter
                    .draw(surface, self.size, Some(&self.camera), &self.boxes, selected);
            }
        }
    }

    fn admit(&mut self, admitted: bool, gesture: Gesture) -> Gesture {
        if !admitted {
            return Gesture::None;
        }
        self.apply_gesture(gesture);
        gesture
    }

    fn apply_gesture(&mut self, gesture: Gesture) {
        if self.config.mode == ViewMode::Inspector {
            return;
        }
        let next = match gesture {
            Gesture::None => return,
            Gesture::Pan { delta } => self.camera.apply_pan_vec(delta),
            Gesture::Pinch {
                delta,
                scale,
                midpoint,
                ..
            } => {
                let zoomed = if self.config.pinch_anchor {
                    self.camera.apply_pinch_about(scale, midpoint)
                } else {
                    self.camera.apply_pinch(scale)
                };
                zoomed.apply_pan_vec(delta)
            }
        };
        self.update_camera(next);
    }

    fn update_camera(&mut self, next: CameraState) {
        let next = self.limited(next);
        if next == self.camera {
            return;
        }
        self.camera = next;
        self.redraw();
    }

    fn limited(&self, camera: CameraState) -> CameraState {
        match &self.config.zoom_limits {
            Some(limits) => limits.clamp(camera),
            None => camera,
        }
    }
}
