// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::mem;

use crate::skiplist::node::NodeId;

/// Owning storage for the list's nodes. Links between nodes are [`NodeId`]s
/// into this arena, so nothing ever holds a reference into another node.
///
/// Freed slots are recycled before the backing vector grows.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn insert(&mut self, item: T) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            | Some(idx) => {
                debug_assert!(matches!(self.slots[idx], Slot::Vacant));
                self.slots[idx] = Slot::Occupied(item);
                NodeId(idx)
            },
            | None => {
                self.slots.push(Slot::Occupied(item));
                NodeId(self.slots.len() - 1)
            },
        }
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        match mem::replace(slot, Slot::Vacant) {
            | Slot::Occupied(item) => {
                self.free.push(id.0);
                self.len -= 1;
                Some(item)
            },
            | Slot::Vacant => None,
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            | Some(Slot::Occupied(item)) => Some(item),
            | _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            | Some(Slot::Occupied(item)) => Some(item),
            | _ => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<T> std::ops::Index<NodeId> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            | Some(item) => item,
            | None => panic!("dangling node id {:?}", id),
        }
    }
}

impl<T> std::ops::IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            | Some(item) => item,
            | None => panic!("dangling node id {:?}", id),
        }
    }
}
