// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use getset::CopyGetters;

use crate::errs::Error;

/// The default number of levels a list may grow to. With `p = 0.5` this keeps
/// traversal logarithmic well past four billion entries.
pub const DEFAULT_MAX_LEVEL: usize = 32;

/// The hard ceiling on `max_level`.
pub const MAX_LEVEL_LIMIT: usize = 64;

/// The default chance of promoting a node one level higher.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// What an insert does when the key already exists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Overwrite the existing value in place. The element count is unchanged.
    #[default]
    Update,
    /// Always link a new node. Equal keys sit next to each other on level 0,
    /// newest first, and lookups and removals see the newest one.
    Allow,
}

/// How the list manages its active level count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LevelPolicy {
    /// Drop emptied top levels after every removal so searches never start
    /// above the tallest live node.
    #[default]
    Shrink,
    /// Reserve `max_level` head links up front and never give levels back.
    /// Searches may walk through empty top levels, at most `max_level` of
    /// them.
    GrowOnly,
}

/// Construction-time options for a [`SkipList`](crate::SkipList).
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SkipListOptions {
    /// Upper bound on node height and on the number of active levels.
    max_level: usize,
    /// Chance that a node reaching level `n` also reaches level `n + 1`.
    probability: f64,
    duplicates: DuplicatePolicy,
    levels: LevelPolicy,
}

impl Default for SkipListOptions {
    fn default() -> Self {
        SkipListOptions {
            max_level: DEFAULT_MAX_LEVEL,
            probability: DEFAULT_PROBABILITY,
            duplicates: DuplicatePolicy::default(),
            levels: LevelPolicy::default(),
        }
    }
}

impl SkipListOptions {
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn with_levels(mut self, levels: LevelPolicy) -> Self {
        self.levels = levels;
        self
    }

    /// Checks that the options describe a list that can be built.
    pub fn validate(&self) -> Result<(), Error> {
        validate_max_level(self.max_level)?;
        validate_probability(self.probability)
    }
}

pub(crate) fn validate_max_level(max_level: usize) -> Result<(), Error> {
    if max_level == 0 || max_level > MAX_LEVEL_LIMIT {
        return Err(Error::InvalidMaxLevel {
            max_level,
            limit: MAX_LEVEL_LIMIT,
        });
    }
    Ok(())
}

pub(crate) fn validate_probability(probability: f64) -> Result<(), Error> {
    // written this way so NaN is rejected too
    if !(probability > 0.0 && probability < 1.0) {
        return Err(Error::InvalidProbability(probability));
    }
    Ok(())
}
