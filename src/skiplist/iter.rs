// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::iter::FusedIterator;

use crate::skiplist::{
    arena::Arena,
    node::{
        Link,
        Node,
    },
};

/// Borrowing iterator over the entries of a [`SkipList`](crate::SkipList),
/// in comparator order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    nodes: &'a Arena<Node<K, V>>,
    next: Link,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(nodes: &'a Arena<Node<K, V>>, first: Link) -> Self {
        Iter {
            nodes,
            next: first,
            remaining: nodes.len(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.next?];
        self.next = node.next(0);
        self.remaining -= 1;
        Some((node.key(), &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over the entries of a [`SkipList`](crate::SkipList), in
/// comparator order.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    nodes: Arena<Node<K, V>>,
    next: Link,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(nodes: Arena<Node<K, V>>, first: Link) -> Self {
        IntoIter { nodes, next: first }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.remove(self.next?)?;
        self.next = node.next(0);
        Some(node.into_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nodes.len(), Some(self.nodes.len()))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// Iterator over the keys of a [`SkipList`](crate::SkipList).
#[derive(Debug)]
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`SkipList`](crate::SkipList).
#[derive(Debug)]
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::SmallRng,
        SeedableRng,
    };

    use crate::SkipList;

    #[test]
    fn test_iter_order_and_len() {
        let mut list = SkipList::with_rng(SmallRng::seed_from_u64(1));
        for k in [5, 3, 9, 1, 7] {
            list.upsert(k, k.to_string());
        }

        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some((&1, &"1".to_string())));
        assert_eq!(iter.len(), 4);

        let keys: Vec<_> = list.keys().copied().collect();
        assert_eq!(keys, vec![1, 3, 5, 7, 9]);

        let values: Vec<_> = list.values().cloned().collect();
        assert_eq!(values, vec!["1", "3", "5", "7", "9"]);
    }

    #[test]
    fn test_clone_without_clone_entries() {
        // neither key nor value is Clone
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Id(u32);
        struct Payload;

        let mut list = SkipList::with_rng(SmallRng::seed_from_u64(4));
        list.upsert(Id(2), Payload);
        list.upsert(Id(1), Payload);

        let mut keys = list.keys();
        assert_eq!(keys.next(), Some(&Id(1)));
        let rest = keys.clone();
        assert_eq!(rest.len(), 1);
        assert_eq!(keys.next(), Some(&Id(2)));

        let values = list.values();
        assert_eq!(values.clone().count(), 2);
        assert_eq!(values.count(), 2);
    }

    #[test]
    fn test_iter_empty() {
        let list: SkipList<u8, u8> = SkipList::new();
        let mut iter = list.iter();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(list.keys().len(), 0);
    }

    #[test]
    fn test_into_iter() {
        let mut list = SkipList::with_rng(SmallRng::seed_from_u64(2));
        for k in (0..100).rev() {
            list.upsert(k, k * 2);
        }
        list.remove(&50);

        let into_iter = list.into_iter();
        assert_eq!(into_iter.len(), 99);
        let entries: Vec<(i32, i32)> = into_iter.collect();
        let expected: Vec<(i32, i32)> = (0..100).filter(|&k| k != 50).map(|k| (k, k * 2)).collect();
        assert_eq!(entries, expected);
    }

    #[test]
    fn test_ref_into_iter() {
        let mut list = SkipList::with_rng(SmallRng::seed_from_u64(3));
        list.upsert("b", 2);
        list.upsert("a", 1);

        let mut seen = vec![];
        for (k, v) in &list {
            seen.push((*k, *v));
        }
        assert_eq!(seen, vec![("a", 1), ("b", 2)]);
    }
}
