// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

/// Index of a node inside the list's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// A successor link. `None` is the end of a level.
pub(crate) type Link = Option<NodeId>;

/// Where a traversal is standing: on the head sentinel or on a real node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    Head,
    Node(NodeId),
}

/// A key/value pair plus one successor link per level it participates in.
///
/// The key and height are fixed at construction. The node participates in
/// exactly the levels `[0, height)`.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    key: K,
    pub(crate) value: V,
    links: Box<[Link]>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V, height: usize) -> Self {
        debug_assert!(height >= 1, "a node must live on at least one level");
        Node {
            key,
            value,
            links: vec![None; height].into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub(crate) fn next(&self, level: usize) -> Link {
        self.links[level]
    }

    #[inline]
    pub(crate) fn set_next(&mut self, level: usize, link: Link) {
        self.links[level] = link;
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Node,
        NodeId,
    };

    #[test]
    fn test_node_links() {
        let mut node = Node::new(10, "a", 3);
        assert_eq!(node.height(), 3);
        assert_eq!(*node.key(), 10);
        for level in 0..3 {
            assert_eq!(node.next(level), None);
        }

        node.set_next(2, Some(NodeId(4)));
        assert_eq!(node.next(2), Some(NodeId(4)));
        assert_eq!(node.next(1), None);

        node.value = "b";
        assert_eq!(node.into_entry(), (10, "b"));
    }

    #[test]
    #[should_panic]
    fn test_link_out_of_height() {
        let node = Node::new(1, (), 2);
        node.next(2);
    }
}
