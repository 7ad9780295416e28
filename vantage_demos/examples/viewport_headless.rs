// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless viewport session.
//!
//! Loads random boxes, pans and zooms the camera, clicks a box and prints each
//! frame as text along with the inspector panel.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p vantage_demos --example viewport_headless`

use kurbo::{Point, Vec2};
use vantage_demos::{LoggingHost, TextCanvas};
use vantage_pointer::{PointerKind, PointerSample};
use vantage_present::SurfaceSize;
use vantage_viewport::{
    KeyModifiers, RandomBoxSource, Viewport, ViewportConfig, WheelInput,
};

const CELL: f64 = 10.0;

fn show(title: &str, viewport: &Viewport<TextCanvas>) {
    println!("== {title} (camera {:?})", viewport.camera());
    if let Some(canvas) = viewport.surface() {
        print!("{canvas}");
    }
    println!("inspector: {}\n", viewport.inspector_text().replace('\n', " / "));
}

fn main() {
    env_logger::init();

    let size = SurfaceSize::from_css(800.0, 300.0, 1.0);
    let viewport = Viewport::new(
        Ok(TextCanvas::new(80, 30, CELL)),
        size,
        ViewportConfig::graph(),
    );
    let Ok(mut viewport) = viewport.attach_input(LoggingHost::default());

    if let Some(load) = viewport.request_boxes(RandomBoxSource::new(2025)) {
        viewport.replace_boxes(pollster::block_on(load));
    }
    show("loaded", &viewport);

    // Drag right and down with the mouse.
    let mouse = PointerSample::new(1, PointerKind::Mouse, Point::new(400.0, 150.0));
    viewport.on_pointer_down(mouse);
    viewport.on_pointer_move(
        PointerSample::new(1, PointerKind::Mouse, Point::new(450.0, 180.0))
            .with_movement(Vec2::new(50.0, 30.0)),
    );
    viewport.on_pointer_up(mouse);
    show("after drag", &viewport);

    // Ctrl + wheel zooms out one step.
    viewport.on_key(KeyModifiers::new(false, true));
    viewport.on_wheel(WheelInput::new(0.0, 100.0));
    viewport.on_key(KeyModifiers::default());
    show("after zoom", &viewport);

    let target = viewport
        .boxes()
        .first()
        .map(|b| viewport.camera().world_to_screen(b.to_rect().center()));
    if let Some(target) = target {
        match viewport.click(target) {
            Some(record) => log::info!("picked box {}", record.index),
            None => log::info!("nothing under {target:?}"),
        }
    }
    show("after click", &viewport);
}
