// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking and selection across box snapshots.

use kurbo::Point;
use vantage_pick::{Aabb, BoxSet, Selection, SelectionRecord, hit_test};

#[test]
fn overlapping_boxes_pick_lowest_index() {
    let boxes = BoxSet::from(vec![
        Aabb::new(0.0, 0.0, 10.0, 10.0),
        Aabb::new(5.0, 5.0, 15.0, 15.0),
    ]);
    assert_eq!(boxes.hit_test(Point::new(7.0, 7.0)), Some(0));
    assert_eq!(hit_test(&boxes, Point::new(15.0, 15.0)), Some(1));
}

#[test]
fn selection_does_not_survive_a_smaller_snapshot() {
    let three = BoxSet::from_quads(&[
        0.0, 0.0, 1.0, 1.0, //
        2.0, 0.0, 1.0, 1.0, //
        4.0, 0.0, 1.0, 1.0,
    ]);
    let mut selection = Selection::new();
    selection.set(three.hit_test(Point::new(4.5, 0.5)));
    assert_eq!(selection.validated(three.len()), Some(2));

    let two = BoxSet::from_quads(&[0.0, 0.0, 1.0, 1.0, 2.0, 0.0, 1.0, 1.0]);
    assert_eq!(selection.validated(two.len()), None);
}

#[test]
fn record_reflects_picked_box() {
    let boxes = BoxSet::from_quads(&[10.0, 20.0, 0.5, 0.25]);
    let index = boxes.hit_test(Point::new(10.25, 20.25)).unwrap();
    let record = SelectionRecord::new(index, &boxes[index]);
    assert_eq!(record.details, "ax 10.0000 ay 20.0000\nbx 10.5000 by 20.2500");
}
