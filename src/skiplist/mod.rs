// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! A skiplist implementation which allows faster random access than a standard
//! linked list, without the rebalancing of a balanced tree.
//!
//! SkipLists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level `n > 0` will contain a random subset of the nodes on level `n - 1`.
//!
//! ```text
//! level 2:  HEAD ------------------> 30 ----------> END
//! level 1:  HEAD --------> 20 -----> 30 ----------> END
//! level 0:  HEAD -> 10 --> 20 -----> 30 --> 40 ---> END
//! ```
//!
//! Nodes live in an arena owned by the list and link to each other by index,
//! so the list is the only owner of every node. Node heights come from an
//! injected [`LevelGenerator`], which makes the shape of a list fully
//! reproducible from a seed.
//!
//! The list is single-threaded. Callers sharing one across threads must wrap
//! it in their own lock.

mod arena;
mod iter;
pub(crate) mod level_generator;
mod node;
mod search;

use std::fmt;

use rand::{
    rngs::SmallRng,
    RngCore,
    SeedableRng,
};
use tracing::{
    debug,
    instrument,
    trace,
};

pub use self::{
    iter::{
        IntoIter,
        Iter,
        Keys,
        Values,
    },
    level_generator::{
        GeometricalLevelGenerator,
        LevelGenerator,
    },
};
use self::{
    arena::Arena,
    node::{
        Link,
        Node,
    },
    search::Located,
};
use crate::{
    comparator::{
        Comparator,
        NaturalOrder,
    },
    config::{
        validate_max_level,
        DuplicatePolicy,
        LevelPolicy,
        SkipListOptions,
    },
    errs::Error,
};

/// A probabilistic ordered map.
///
/// Lookups, inserts and removals take expected `O(log n)` comparisons. Keys are
/// ordered by the comparator `C`, and node heights are drawn from `G`.
pub struct SkipList<K, V, C = NaturalOrder, G = GeometricalLevelGenerator<SmallRng>> {
    nodes: Arena<Node<K, V>>,
    /// Head sentinel links, one per active level. Never empty.
    head: Vec<Link>,
    comparator: C,
    generator: G,
    options: SkipListOptions,
}

impl<K: Ord, V> SkipList<K, V> {
    /// Creates an empty list in natural key order with default options, using
    /// a fast generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, R: RngCore> SkipList<K, V, NaturalOrder, GeometricalLevelGenerator<R>> {
    /// Creates an empty list in natural key order with default options. Lists
    /// built from equally seeded sources take the exact same shape.
    pub fn with_rng(rng: R) -> Self {
        let options = SkipListOptions::default();
        let generator = GeometricalLevelGenerator::with_defaults(rng);
        Self::from_parts(options, NaturalOrder, generator)
    }
}

impl<K, V, C, R> SkipList<K, V, C, GeometricalLevelGenerator<R>>
where
    C: Comparator<K>,
    R: RngCore,
{
    /// Creates an empty list from `options`, ordering keys with `comparator`
    /// and drawing promotions from `rng`.
    pub fn with_options(options: SkipListOptions, comparator: C, rng: R) -> Result<Self, Error> {
        options.validate()?;
        let generator =
            GeometricalLevelGenerator::new(options.max_level(), options.probability(), rng)?;
        Ok(Self::from_parts(options, comparator, generator))
    }
}

impl<K, V, C, G> SkipList<K, V, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    /// Creates an empty list around an existing level generator. The
    /// generator's `total` takes the place of `options.max_level` and must be
    /// in `[1, MAX_LEVEL_LIMIT]`.
    pub fn with_level_generator(
        options: SkipListOptions,
        comparator: C,
        generator: G,
    ) -> Result<Self, Error> {
        validate_max_level(generator.total())?;
        Ok(Self::from_parts(options, comparator, generator))
    }

    fn from_parts(options: SkipListOptions, comparator: C, generator: G) -> Self {
        let options = options.with_max_level(generator.total());
        let mut head = match options.levels() {
            | LevelPolicy::Shrink => Vec::new(),
            | LevelPolicy::GrowOnly => Vec::with_capacity(options.max_level()),
        };
        head.push(None);

        debug!(
            max_level = options.max_level(),
            duplicates = ?options.duplicates(),
            levels = ?options.levels(),
            "created skiplist"
        );

        SkipList {
            nodes: Arena::new(),
            head,
            comparator,
            generator,
            options,
        }
    }

    /// Draws the height for a new node, in `[1, max_level]`.
    pub fn choose_height(&mut self) -> usize {
        let height = self.generator.height();
        debug_assert!(
            (1..=self.max_level()).contains(&height),
            "level generator returned height {} outside [1, {}]",
            height,
            self.max_level()
        );
        height
    }

    /// Inserts `value` under `key`.
    ///
    /// If the key is already present and duplicates are not allowed, the
    /// existing value is overwritten in place and the length is unchanged.
    #[instrument(level = "trace", skip_all)]
    pub fn upsert(&mut self, key: K, value: V) {
        let Located {
            predecessors,
            found,
        } = self.locate(&key);

        if self.options.duplicates() == DuplicatePolicy::Update {
            if let Some(id) = found {
                trace!("key exists, updating value in place");
                self.nodes[id].value = value;
                return;
            }
        }

        let height = self.choose_height();
        let id = self.nodes.insert(Node::new(key, value, height));

        let spliced = height.min(predecessors.len());
        for (level, &pred) in predecessors.iter().enumerate().take(spliced) {
            let next = self.next_of(pred, level);
            self.nodes[id].set_next(level, next);
            self.set_next_of(pred, level, Some(id));
        }

        // levels above the old top only hold the new node
        if height > self.head.len() {
            trace!(from = self.head.len(), to = height, "growing active levels");
            self.head.resize(height, Some(id));
        }
    }

    /// Removes `key`, returning whether anything was removed.
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes `key` and hands back the stored key and value. With duplicates
    /// allowed, only the newest entry for `key` is removed.
    #[instrument(level = "trace", skip_all)]
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let Located {
            predecessors,
            found,
        } = self.locate(key);
        let id = found?;

        let height = self.nodes[id].height();
        for (level, &pred) in predecessors.iter().enumerate().take(height) {
            if self.next_of(pred, level) != Some(id) {
                break;
            }
            let next = self.nodes[id].next(level);
            self.set_next_of(pred, level, next);
        }
        let node = self.nodes.remove(id)?;

        if self.options.levels() == LevelPolicy::Shrink {
            let before = self.head.len();
            while self.head.len() > 1 && self.head.last() == Some(&None) {
                self.head.pop();
            }
            if self.head.len() != before {
                trace!(from = before, to = self.head.len(), "shrinking active levels");
            }
        }

        Some(node.into_entry())
    }
}

impl<K, V, C, G> SkipList<K, V, C, G>
where
    C: Comparator<K>,
{
    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|id| &self.nodes[id].value)
    }

    /// Returns the key and value stored under `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|id| {
            let node = &self.nodes[id];
            (node.key(), &node.value)
        })
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find(key)?;
        Some(&mut self.nodes[id].value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.last_node().map(|id| {
            let node = &self.nodes[id];
            (node.key(), &node.value)
        })
    }
}

impl<K, V, C, G> SkipList<K, V, C, G> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// The number of levels currently in use, in `[1, max_level]`.
    pub fn active_levels(&self) -> usize {
        self.head.len()
    }

    pub fn max_level(&self) -> usize {
        self.options.max_level()
    }

    pub fn options(&self) -> &SkipListOptions {
        &self.options
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.head[0].map(|id| {
            let node = &self.nodes[id];
            (node.key(), &node.value)
        })
    }

    /// Drops every entry and resets the list to a single active level.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head.truncate(1);
        self.head[0] = None;
    }

    /// Iterates over all entries in comparator order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.head[0])
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Keys reachable by following the links of one level.
    #[cfg(test)]
    pub(crate) fn level_keys(&self, level: usize) -> Vec<&K> {
        let mut keys = Vec::new();
        let mut next = self.head.get(level).copied().flatten();
        while let Some(id) = next {
            let node = &self.nodes[id];
            keys.push(node.key());
            next = node.next(level);
        }
        keys
    }
}

impl<'a, K, V, C, G> IntoIterator for &'a SkipList<K, V, C, G> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, C, G> IntoIterator for SkipList<K, V, C, G> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter::new(self.nodes, self.head[0])
    }
}

impl<K, V, C, G> Extend<(K, V)> for SkipList<K, V, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.upsert(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipList<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<K, V, C, G> fmt::Debug for SkipList<K, V, C, G>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
