// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Traversal of a [`RangeSet`]: ordered span iteration and ordered element
//! iteration.
//!
//! The element iterator is pull-style, so a consumer that stops early (or
//! is dropped) simply never observes the rest of the set; there is nothing
//! to cancel and the source set is untouched. Big contiguous runs are
//! walked one successor at a time, so iterating something like a universal
//! 64-bit set is possible but will naturally take a while.

use crate::{Element, RangeSet, Span};

impl<T: Element> RangeSet<T> {
    /// Iterates over the spans of the set in ascending order.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = Span<T>> + '_ {
        self.spans.iter().copied()
    }

    /// Iterates over the elements of the set in ascending order.
    #[must_use]
    pub fn iter(&self) -> Elements<'_, T> {
        Elements {
            spans: self.spans.iter(),
            current: None,
        }
    }
}

/// Iterator over the elements of a [`RangeSet`] in ascending order.
///
/// Returned by [`RangeSet::iter`].
#[derive(Clone)]
pub struct Elements<'s, T> {
    spans: std::slice::Iter<'s, Span<T>>,
    /// Next element to yield and the top of the span it came from.
    current: Option<(T, T)>,
}

impl<T: Element> Iterator for Elements<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some((e, top)) = self.current {
                // The bounds check happens after yielding, so a span whose
                // top wraps around to its bot (the universal span) still
                // walks the entire domain.
                let succ = e.wrapping_incr();
                self.current = (succ != top).then_some((succ, top));
                return Some(e);
            }
            let span = self.spans.next()?;
            self.current = Some((span.bot, span.top));
        }
    }
}

impl<'s, T: Element> IntoIterator for &'s RangeSet<T> {
    type Item = T;
    type IntoIter = Elements<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> FromIterator<T> for RangeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Element> Extend<T> for RangeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for e in iter {
            self.insert(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::RangeSet;

    #[test]
    fn elements_in_order() {
        let set: RangeSet<i32> = [8, 1, 6, 3, 7, 4].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), [1, 3, 4, 6, 7, 8]);
        assert_eq!(RangeSet::<i32>::new().iter().next(), None);
    }

    #[test]
    fn elements_cross_spans() {
        let mut set = RangeSet::<u8>::new();
        set.insert_range(250, 0); // 250 through 255, top wraps to the end mark
        set.insert(10);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            [10, 250, 251, 252, 253, 254, 255]
        );
    }

    #[test]
    fn universal_walks_whole_domain() {
        let all: Vec<u8> = RangeSet::<u8>::universal().iter().collect();
        assert_eq!(all.len(), 256);
        assert_eq!(all.first(), Some(&0));
        assert_eq!(all.last(), Some(&255));

        let all: Vec<i8> = RangeSet::<i8>::universal().iter().collect();
        assert_eq!(all.len(), 256);
        assert_eq!(all.first(), Some(&i8::MIN));
        assert_eq!(all.last(), Some(&i8::MAX));
    }

    #[test]
    fn early_stop_leaves_set_intact() {
        // stopping a pull-style walk is just dropping the iterator
        let set = RangeSet::<u64>::universal();
        let taken: Vec<u64> = set.iter().take(3).collect();
        assert_eq!(taken, [0, 1, 2]);
        assert!(set.is_universal());
    }

    #[test]
    fn spans_iteration() {
        let set: RangeSet<i32> = [1, 2, 3, 10].into_iter().collect();
        let spans: Vec<_> = set.spans().collect();
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].bot(), spans[0].top()), (1, 4));
        assert_eq!((spans[1].bot(), spans[1].top()), (10, 11));
        assert!(!spans[1].is_high_unbounded());
        assert_eq!(spans[0].element_count(), Some(3));
    }

    #[test]
    fn collect_via_for_loop() {
        let set: RangeSet<u16> = [5, 6, 7].into_iter().collect();
        let mut seen = Vec::new();
        for e in &set {
            seen.push(e);
        }
        assert_eq!(seen, [5, 6, 7]);
    }
}
