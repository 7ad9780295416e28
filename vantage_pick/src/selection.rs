// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use crate::aabb::Aabb;

/// Inspector text shown before anything was clicked.
pub const EMPTY_DETAILS: &str = "select in 2D to get info";

/// Inspector text shown after a click that missed every box.
pub const MISS_DETAILS: &str = "Null";

/// Index of the selected box, if any.
///
/// The index refers to whatever box snapshot was current when it was set.
/// Readers go through [`Selection::validated`] so an index that outlived its
/// snapshot reads as "no selection".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
    revision: u64,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw selected index, without validation.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The selected index if it is valid for a collection of `len` boxes.
    #[must_use]
    pub fn validated(&self, len: usize) -> Option<usize> {
        self.index.filter(|&i| i < len)
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_none()
    }

    /// Monotonic counter bumped whenever the selected index changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the selected index with the outcome of a hit test.
    pub fn set(&mut self, index: Option<usize>) {
        if self.index != index {
            self.index = index;
            self.revision = self.revision.wrapping_add(1);
        }
    }

    /// Selects `index`.
    pub fn select(&mut self, index: usize) {
        self.set(Some(index));
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.set(None);
    }
}

/// Selection output consumed by an inspector panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionRecord {
    /// Index of the box in the snapshot it was picked from.
    pub index: usize,
    /// The box corners formatted to four decimal places.
    pub details: String,
}

impl SelectionRecord {
    /// Builds the record for `aabb` at `index`.
    #[must_use]
    pub fn new(index: usize, aabb: &Aabb) -> Self {
        Self {
            index,
            details: format_details(aabb),
        }
    }
}

fn format_details(b: &Aabb) -> String {
    format!(
        "ax {:.4} ay {:.4}\nbx {:.4} by {:.4}",
        b.ax, b.ay, b.bx, b.by
    )
}
