// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! The shared descent used by every lookup and mutation.

use std::cmp::Ordering;

use crate::{
    comparator::Comparator,
    skiplist::{
        node::{
            Link,
            Position,
        },
        SkipList,
    },
};

/// The result of a full descent: the last position before `key` on every
/// active level, and the first level-0 node comparing equal to `key`.
#[derive(Debug)]
pub(crate) struct Located {
    /// Indexed by level, `predecessors.len() == active_levels`.
    pub(crate) predecessors: Vec<Position>,
    pub(crate) found: Link,
}

impl<K, V, C, G> SkipList<K, V, C, G> {
    #[inline]
    pub(crate) fn next_of(&self, pos: Position, level: usize) -> Link {
        match pos {
            | Position::Head => self.head[level],
            | Position::Node(id) => self.nodes[id].next(level),
        }
    }

    #[inline]
    pub(crate) fn set_next_of(&mut self, pos: Position, level: usize, link: Link) {
        match pos {
            | Position::Head => self.head[level] = link,
            | Position::Node(id) => self.nodes[id].set_next(level, link),
        }
    }

    /// The last node on level 0, found by running every level to its end.
    pub(crate) fn last_node(&self) -> Link {
        let mut cursor = Position::Head;
        for level in (0..self.head.len()).rev() {
            while let Some(next) = self.next_of(cursor, level) {
                cursor = Position::Node(next);
            }
        }
        match cursor {
            | Position::Head => None,
            | Position::Node(id) => Some(id),
        }
    }
}

impl<K, V, C, G> SkipList<K, V, C, G>
where
    C: Comparator<K>,
{
    /// Walks from the top active level down to level 0, moving right while
    /// the next key is strictly less than `key`. The cursor never moves
    /// backwards, and `visit` sees the cursor once per level as the walk
    /// drops down. Returns the level-0 predecessor.
    #[inline]
    fn descend<F>(&self, key: &K, mut visit: F) -> Position
    where
        F: FnMut(usize, Position),
    {
        let mut cursor = Position::Head;
        for level in (0..self.head.len()).rev() {
            while let Some(next) = self.next_of(cursor, level) {
                if self.comparator.compare(self.nodes[next].key(), key) != Ordering::Less {
                    break;
                }
                cursor = Position::Node(next);
            }
            visit(level, cursor);
        }
        cursor
    }

    /// The level-0 successor of `pred` if it compares equal to `key`.
    #[inline]
    fn match_after(&self, pred: Position, key: &K) -> Link {
        self.next_of(pred, 0)
            .filter(|&id| self.comparator.compare(self.nodes[id].key(), key) == Ordering::Equal)
    }

    /// Full descent recording the predecessor on every active level. Used by
    /// the mutating operations to splice or unlink.
    pub(crate) fn locate(&self, key: &K) -> Located {
        let mut predecessors = vec![Position::Head; self.head.len()];
        let pred = self.descend(key, |level, cursor| predecessors[level] = cursor);
        Located {
            found: self.match_after(pred, key),
            predecessors,
        }
    }

    /// Same walk as [`locate`](Self::locate) without recording anything.
    pub(crate) fn find(&self, key: &K) -> Link {
        let pred = self.descend(key, |_, _| {});
        self.match_after(pred, key)
    }
}
