// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of `Viewport`.

use core::future::{Future, ready};

use kurbo::{Point, Vec2};
use vantage_pick::BoxSet;
use vantage_pointer::{Gesture, PointerKind, PointerSample};
use vantage_present::{RecordingSurface, Surface, SurfaceCommand, SurfaceError, SurfaceSize};
use vantage_view2d::CameraState;
use vantage_viewport::{
    BoxSource, KeyModifiers, ListenerScope, Viewport, ViewportConfig, WheelInput,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn graph_viewport() -> Viewport<RecordingSurface> {
    init_logging();
    Viewport::new(
        Ok(RecordingSurface::new()),
        SurfaceSize::from_css(640.0, 480.0, 1.0),
        ViewportConfig::default(),
    )
}

fn touch(id: u64, x: f64, y: f64) -> PointerSample {
    PointerSample::new(id, PointerKind::Touch, Point::new(x, y))
}

struct CountingSource {
    calls: usize,
    quads: Vec<f32>,
}

impl BoxSource for CountingSource {
    fn fetch(&mut self) -> impl Future<Output = Vec<f32>> {
        self.calls += 1;
        ready(self.quads.clone())
    }
}

#[test]
fn box_source_runs_once_per_viewport() {
    let mut vp = graph_viewport();
    let mut source = CountingSource {
        calls: 0,
        quads: vec![0.0, 0.0, 10.0, 10.0, 5.0],
    };

    let load = vp.request_boxes(&mut source).expect("first request");
    let boxes = pollster::block_on(load);
    vp.replace_boxes(boxes);
    assert!(vp.request_boxes(&mut source).is_none());

    assert_eq!(source.calls, 1);
    // The trailing partial record is dropped.
    assert_eq!(vp.boxes().len(), 1);
}

#[test]
fn replacing_boxes_drops_stale_highlight() {
    let mut vp = graph_viewport();
    vp.replace_boxes(BoxSet::from_quads(&[
        0.0, 0.0, 10.0, 10.0, //
        20.0, 0.0, 10.0, 10.0, //
        40.0, 0.0, 10.0, 10.0,
    ]));
    assert_eq!(vp.click(Point::new(45.0, 5.0)).map(|r| r.index), Some(2));

    vp.surface_mut().unwrap().reset();
    vp.replace_boxes(BoxSet::from_quads(&[
        0.0, 0.0, 10.0, 10.0, //
        20.0, 0.0, 10.0, 10.0,
    ]));

    assert_eq!(vp.selected(), None);
    let commands = vp.surface().unwrap().commands();
    assert!(!commands.is_empty());
    assert!(
        !commands
            .iter()
            .any(|c| matches!(c, SurfaceCommand::StrokeRect { .. }))
    );
}

#[test]
fn wheel_zooms_with_ctrl_and_pans_without() {
    let mut vp = graph_viewport();

    vp.on_key(KeyModifiers::new(false, true));
    vp.on_wheel(WheelInput::new(0.0, 120.0));
    assert!((vp.camera().z - 0.9).abs() < 1e-12);

    vp.set_camera(CameraState::IDENTITY);
    vp.on_key(KeyModifiers::default());
    vp.on_wheel(WheelInput::new(0.0, 120.0));
    assert_eq!(vp.camera(), CameraState::new(0.0, 25.0, 1.0));

    vp.set_camera(CameraState::IDENTITY);
    vp.on_key(KeyModifiers::new(true, false));
    vp.on_wheel(WheelInput::new(0.0, 120.0));
    assert_eq!(vp.camera(), CameraState::new(-25.0, 0.0, 1.0));
}

#[test]
fn pinch_scales_from_initial_distance() {
    let mut vp = graph_viewport();
    vp.on_pointer_down(touch(1, 100.0, 100.0));
    vp.on_pointer_down(touch(2, 200.0, 100.0));

    // Moving the second finger does not pan; distance 100 -> 200 doubles the scale.
    vp.on_pointer_move(touch(2, 300.0, 100.0).with_movement(Vec2::new(100.0, 0.0)));
    let camera = vp.camera();
    assert_eq!(camera.z, 2.0);
    assert_eq!((camera.x, camera.y), (0.0, 0.0));

    // Lifting a finger returns to panning at the new scale.
    vp.on_pointer_up(touch(2, 300.0, 100.0));
    vp.on_pointer_move(touch(1, 110.0, 100.0).with_movement(Vec2::new(10.0, 0.0)));
    assert_eq!(vp.camera(), CameraState::new(5.0, 0.0, 2.0));
}

#[test]
fn anchored_pinch_keeps_midpoint_in_place() {
    init_logging();
    let mut vp: Viewport<RecordingSurface> = Viewport::new(
        Ok(RecordingSurface::new()),
        SurfaceSize::from_css(640.0, 480.0, 1.0),
        ViewportConfig {
            pinch_anchor: true,
            ..ViewportConfig::default()
        },
    );
    vp.on_pointer_down(touch(1, 100.0, 100.0));
    vp.on_pointer_down(touch(2, 200.0, 100.0));
    vp.on_pointer_move(touch(2, 300.0, 100.0));

    let camera = vp.camera();
    assert_eq!(camera.z, 2.0);
    // The world point under the new midpoint (200, 100) before the move is still there.
    let world = CameraState::IDENTITY.screen_to_world(Point::new(200.0, 100.0));
    let screen = camera.world_to_screen(world);
    assert!((screen - Point::new(200.0, 100.0)).hypot() < 1e-9);
}

#[test]
fn pen_input_is_ignored() {
    let mut vp = graph_viewport();
    let pen = PointerSample::new(3, PointerKind::Pen, Point::new(10.0, 10.0));
    vp.on_pointer_down(pen);
    vp.on_pointer_move(pen.with_movement(Vec2::new(40.0, 40.0)));
    assert!(vp.tracker().active().is_empty());
    assert_eq!(vp.camera(), CameraState::IDENTITY);
}

#[test]
fn pen_after_pan_does_not_replay_the_pan() {
    let mut vp = graph_viewport();
    vp.on_pointer_down(touch(1, 0.0, 0.0));
    vp.on_pointer_move(touch(1, 10.0, 0.0).with_movement(Vec2::new(10.0, 0.0)));
    let panned = vp.camera();
    assert_eq!(panned, CameraState::new(10.0, 0.0, 1.0));

    vp.surface_mut().unwrap().reset();
    let pen = PointerSample::new(9, PointerKind::Pen, Point::new(50.0, 50.0));
    assert_eq!(vp.on_pointer_down(pen), Gesture::None);
    assert_eq!(
        vp.on_pointer_move(pen.with_movement(Vec2::new(5.0, 5.0))),
        Gesture::None
    );
    assert_eq!(vp.on_pointer_up(pen), Gesture::None);

    assert_eq!(vp.camera(), panned);
    assert!(vp.surface().unwrap().commands().is_empty());
}

mod host {
    use std::cell::RefCell;
    use std::rc::Rc;

    use vantage_viewport::{InputHost, ListenerKind};

    pub(super) type EventLog = Rc<RefCell<Vec<&'static str>>>;

    #[derive(Clone, Default)]
    pub(super) struct SharedHost {
        pub(super) live: Rc<RefCell<Vec<(usize, ListenerKind)>>>,
        pub(super) log: EventLog,
        next: usize,
    }

    impl InputHost for SharedHost {
        type Handle = usize;
        type Error = core::convert::Infallible;

        fn attach(&mut self, kind: ListenerKind) -> Result<usize, Self::Error> {
            self.next += 1;
            self.live.borrow_mut().push((self.next, kind));
            Ok(self.next)
        }

        fn detach(&mut self, handle: usize) {
            self.live.borrow_mut().retain(|(h, _)| *h != handle);
            self.log.borrow_mut().push("detach");
        }
    }
}

/// Surface that notes when it is dropped.
struct TrackedSurface(host::EventLog);

impl Surface for TrackedSurface {
    fn clear(&mut self, _rect: kurbo::Rect) {}
    fn fill_rect(&mut self, _rect: kurbo::Rect, _color: peniko::Color) {}
    fn stroke_rect(&mut self, _rect: kurbo::Rect, _color: peniko::Color, _width: f64) {}
}

impl Drop for TrackedSurface {
    fn drop(&mut self) {
        self.0.borrow_mut().push("surface dropped");
    }
}

#[test]
fn listeners_live_as_long_as_the_scope() {
    let host = host::SharedHost::default();
    let live = host.live.clone();

    let vp = graph_viewport();
    let Ok(scope) = ListenerScope::attach(host);
    assert_eq!(live.borrow().len(), 4);

    drop(scope);
    drop(vp);
    assert!(live.borrow().is_empty());
}

#[test]
fn attached_viewport_detaches_before_surface_drops() {
    let host = host::SharedHost::default();
    let live = host.live.clone();
    let log = host.log.clone();

    let surface: Result<TrackedSurface, SurfaceError> = Ok(TrackedSurface(log.clone()));
    let vp = Viewport::new(
        surface,
        SurfaceSize::from_css(100.0, 100.0, 1.0),
        ViewportConfig::default(),
    );
    let Ok(mut attached) = vp.attach_input(host);
    assert_eq!(attached.listeners().len(), 4);
    assert_eq!(live.borrow().len(), 4);

    // Input still reaches the viewport through the binding.
    attached.on_wheel(WheelInput::new(0.0, 1.0));
    assert_eq!(attached.camera(), CameraState::new(0.0, 25.0, 1.0));

    drop(attached);
    assert!(live.borrow().is_empty());
    assert_eq!(
        log.borrow().as_slice(),
        &["detach", "detach", "detach", "detach", "surface dropped"]
    );
}
