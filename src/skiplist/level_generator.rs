// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use rand::RngCore;

use crate::{
    config::{
        validate_max_level,
        validate_probability,
        DEFAULT_MAX_LEVEL,
        DEFAULT_PROBABILITY,
    },
    errs::Error,
};

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// The total number of levels that are assumed to exist for this level
    /// generator.
    fn total(&self) -> usize;
    /// Generate a random height for a new node in the range `[1, total]`.
    ///
    /// This must never return `0` or a height that is `> self.total()`.
    fn height(&mut self) -> usize;
}

/// A level generator which will produce geometrically distributed heights.
///
/// The probability of generating height `n + 1` is `p` times the probability
/// of generating height `n`, with the tail folded into `total`. Each promotion
/// costs one `u64` draw from the injected source, so a seeded source always
/// yields the same sequence.
#[derive(Debug, Clone)]
pub struct GeometricalLevelGenerator<R> {
    total: usize,
    p: f64,
    // a draw strictly below this is a promotion
    threshold: u64,
    rng: R,
}

impl<R: RngCore> GeometricalLevelGenerator<R> {
    /// Create a new GeometricalLevelGenerator with `total` number of levels,
    /// and `p` as the probability that a given node is present in the next
    /// level.
    pub fn new(total: usize, p: f64, rng: R) -> Result<Self, Error> {
        validate_max_level(total)?;
        validate_probability(p)?;

        Ok(GeometricalLevelGenerator {
            total,
            p,
            threshold: promotion_threshold(p),
            rng,
        })
    }

    /// The generator behind a default-configured list.
    pub(crate) fn with_defaults(rng: R) -> Self {
        GeometricalLevelGenerator {
            total: DEFAULT_MAX_LEVEL,
            p: DEFAULT_PROBABILITY,
            threshold: promotion_threshold(DEFAULT_PROBABILITY),
            rng,
        }
    }

    pub fn probability(&self) -> f64 {
        self.p
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

// saturating cast, p < 1 keeps this below u64::MAX anyway
fn promotion_threshold(p: f64) -> u64 {
    (p * 2f64.powi(64)) as u64
}

impl<R: RngCore> LevelGenerator for GeometricalLevelGenerator<R> {
    #[inline]
    fn height(&mut self) -> usize {
        let mut h = 1;
        while h < self.total && self.rng.next_u64() < self.threshold {
            h += 1;
        }
        h
    }

    fn total(&self) -> usize {
        self.total
    }
}
