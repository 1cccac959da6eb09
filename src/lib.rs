// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! An ordered map built on a [`skip list`].
//!
//! ```rust
//! use cesium_skiplist::SkipList;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut list = SkipList::with_rng(SmallRng::seed_from_u64(12345));
//! list.upsert(10, "a");
//! list.upsert(20, "b");
//! list.upsert(20, "c");
//!
//! assert!(list.contains(&10));
//! assert_eq!(list.get(&20), Some(&"c"));
//! assert!(list.remove(&20));
//! assert!(!list.remove(&999));
//! ```
//!
//! [`skip list`]: https://en.wikipedia.org/wiki/Skip_list

/// Key ordering.
pub mod comparator;
/// Construction-time options.
pub mod config;
pub mod errs;
/// The skip list itself.
pub mod skiplist;

pub use crate::{
    comparator::{
        Comparator,
        NaturalOrder,
        ReverseOrder,
    },
    config::{
        DuplicatePolicy,
        LevelPolicy,
        SkipListOptions,
        DEFAULT_MAX_LEVEL,
        MAX_LEVEL_LIMIT,
    },
    errs::Error,
    skiplist::{
        GeometricalLevelGenerator,
        IntoIter,
        Iter,
        Keys,
        LevelGenerator,
        SkipList,
        Values,
    },
};
