// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Deref;

use kurbo::Point;

use crate::aabb::{Aabb, hit_test};

/// Immutable snapshot of a box collection.
///
/// Clones share storage. A snapshot is never edited in place; a new source
/// result replaces it wholesale.
#[derive(Clone, Debug, Default)]
pub struct BoxSet {
    boxes: Arc<[Aabb]>,
}

impl BoxSet {
    /// An empty snapshot.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decodes flat `(x, y, width, height)` quadruples.
    ///
    /// Each quadruple becomes `Aabb { ax: x, ay: y, bx: x + width, by: y + height }`.
    /// A trailing partial record is dropped.
    #[must_use]
    pub fn from_quads(quads: &[f32]) -> Self {
        let chunks = quads.chunks_exact(4);
        let rest = chunks.remainder().len();
        if rest != 0 {
            log::warn!(
                "box data has {} values, dropping {rest} trailing value(s) of a partial record",
                quads.len()
            );
        }
        chunks
            .map(|q| {
                Aabb::from_origin_size(
                    f64::from(q[0]),
                    f64::from(q[1]),
                    f64::from(q[2]),
                    f64::from(q[3]),
                )
            })
            .collect()
    }

    /// Boxes in collection order.
    #[must_use]
    pub fn as_slice(&self) -> &[Aabb] {
        &self.boxes
    }

    /// Index of the first box containing `pt`. See [`hit_test`].
    #[must_use]
    pub fn hit_test(&self, pt: Point) -> Option<usize> {
        hit_test(&self.boxes, pt)
    }

    /// Returns `true` if both snapshots share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.boxes, &other.boxes)
    }
}

impl Deref for BoxSet {
    type Target = [Aabb];

    fn deref(&self) -> &[Aabb] {
        &self.boxes
    }
}

impl From<Vec<Aabb>> for BoxSet {
    fn from(boxes: Vec<Aabb>) -> Self {
        Self {
            boxes: boxes.into(),
        }
    }
}

impl FromIterator<Aabb> for BoxSet {
    fn from_iter<I: IntoIterator<Item = Aabb>>(iter: I) -> Self {
        Self {
            boxes: iter.into_iter().collect(),
        }
    }
}
