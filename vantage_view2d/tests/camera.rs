// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera laws for `vantage_view2d`.

use kurbo::Point;
use vantage_view2d::{CameraState, WheelModifiers, ZoomLimits};

const STATES: [CameraState; 4] = [
    CameraState::IDENTITY,
    CameraState {
        x: 12.5,
        y: -40.0,
        z: 3.0,
    },
    CameraState {
        x: -1.0e4,
        y: 2.5e3,
        z: 0.001,
    },
    CameraState {
        x: 0.3,
        y: 0.7,
        z: 917.0,
    },
];

const POINTS: [Point; 4] = [
    Point::ORIGIN,
    Point::new(640.0, 360.0),
    Point::new(-13.25, 7.5),
    Point::new(1.0e5, -2.0e5),
];

#[test]
fn screen_world_roundtrip() {
    for state in STATES {
        for p in POINTS {
            let back = state.world_to_screen(state.screen_to_world(p));
            let tol = 1e-9 * p.x.abs().max(p.y.abs()).max(1.0);
            assert!(
                (back.x - p.x).abs() <= tol && (back.y - p.y).abs() <= tol,
                "{state:?} {p:?} -> {back:?}"
            );
        }
    }
}

#[test]
fn pan_then_opposite_pan_restores_offset() {
    // Binary fractions keep every intermediate exact.
    let state = CameraState::new(1.5, -2.25, 4.0);
    let panned = state.apply_pan(10.0, -6.0);
    let restored = panned.apply_pan(-10.0, 6.0);
    assert_eq!(restored, state);
}

#[test]
fn zoom_wheel_scenario() {
    let state = CameraState::new(0.0, 0.0, 1.0);
    let next = state.apply_wheel(0.0, 5.0, WheelModifiers::ZOOM);
    assert!((next.z - 0.9).abs() < 1e-12);
    assert_eq!((next.x, next.y), (0.0, 0.0));
}

#[test]
fn pan_gesture_scenario() {
    let state = CameraState::new(0.0, 0.0, 2.0);
    let next = state.apply_pan(10.0, -20.0);
    assert_eq!((next.x, next.y), (5.0, 10.0));
}

#[test]
fn repeated_zoom_out_stays_positive() {
    let mut state = CameraState::IDENTITY;
    for _ in 0..10_000 {
        state = state.apply_wheel(0.0, 1.0, WheelModifiers::ZOOM);
        assert!(state.z > 0.0);
    }
    let limits = ZoomLimits::default();
    assert_eq!(limits.clamp(state).z, limits.min());
}
