// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asynchronous box providers.

use alloc::vec::Vec;
use core::future::{Future, ready};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies the flat `[x, y, w, h, ...]` box sequence shown by a viewport.
///
/// Origins are top-left corners in world units. A trailing partial record is
/// ignored by the viewport.
pub trait BoxSource {
    /// Produces the box sequence.
    fn fetch(&mut self) -> impl Future<Output = Vec<f32>>;
}

impl<B: BoxSource + ?Sized> BoxSource for &mut B {
    fn fetch(&mut self) -> impl Future<Output = Vec<f32>> {
        (**self).fetch()
    }
}

/// Generates random boxes from a fixed seed.
///
/// Origins fall in `[-5, 700) x [-5, 200)` and sizes in `[10, 100)`. Records
/// come out newest first.
#[derive(Clone, Debug)]
pub struct RandomBoxSource {
    seed: u64,
    count: usize,
}

impl RandomBoxSource {
    /// Number of boxes produced by default.
    pub const DEFAULT_COUNT: usize = 10;

    const MIN_ORIGIN: f32 = -5.0;
    const MAX_X: f32 = 700.0;
    const MAX_Y: f32 = 200.0;
    const MIN_SIZE: f32 = 10.0;
    const MAX_SIZE: f32 = 100.0;

    /// Creates a source producing [`Self::DEFAULT_COUNT`] boxes.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: Self::DEFAULT_COUNT,
        }
    }

    /// Sets how many boxes to produce.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Generates the sequence synchronously.
    #[must_use]
    pub fn generate(&self) -> Vec<f32> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut records: Vec<[f32; 4]> = (0..self.count)
            .map(|_| {
                [
                    rng.random_range(Self::MIN_ORIGIN..Self::MAX_X),
                    rng.random_range(Self::MIN_ORIGIN..Self::MAX_Y),
                    rng.random_range(Self::MIN_SIZE..Self::MAX_SIZE),
                    rng.random_range(Self::MIN_SIZE..Self::MAX_SIZE),
                ]
            })
            .collect();
        records.reverse();
        records.into_iter().flatten().collect()
    }
}

impl BoxSource for RandomBoxSource {
    fn fetch(&mut self) -> impl Future<Output = Vec<f32>> {
        ready(self.generate())
    }
}
