// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::cmp::Ordering;

/// Defines the order keys are kept in.
///
/// Implementations must be a strict, consistent total order for as long as the
/// list lives. An inconsistent comparator will not corrupt memory, but the
/// list's ordering guarantees no longer hold.
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys descending by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> Comparator<K> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{
        Comparator,
        NaturalOrder,
        ReverseOrder,
    };

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&7u8, &7u8), Ordering::Equal);
    }

    #[test]
    fn test_reverse_order() {
        assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
        assert_eq!(ReverseOrder.compare(&2, &1), Ordering::Less);
    }

    #[test]
    fn test_closure() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        assert_eq!(
            by_len.compare(&"aaa".to_string(), &"b".to_string()),
            Ordering::Greater
        );
    }
}
