// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Set algebra over [`RangeSet`]s: union, intersection, difference and
//! complement.
//!
//! All of these are built on the range mutation primitives of
//! [`crate::set`], so they inherit the canonical-form invariants: the
//! result of any operation is again sorted, merged and duplicate-free,
//! which is what makes structural `==` a valid set equality.
//!
//! Binary operators are provided on references, as allocating a fresh set
//! per operation is the natural shape here:
//!
//! ```
//! use rangeset::RangeSet;
//!
//! let a = RangeSet::<i32>::from_range(1, 6);
//! let b = RangeSet::<i32>::from_range(4, 9);
//! assert_eq!(&a | &b, RangeSet::from_range(1, 9));
//! assert_eq!(&a & &b, RangeSet::from_range(4, 6));
//! assert_eq!((&(&a - &b) | &b), &a | &b);
//! assert_eq!(!&RangeSet::<i32>::new(), RangeSet::universal());
//! ```

use crate::{Element, RangeSet};
use std::ops::{BitAnd, BitOr, Not, Sub};

impl<T: Element> RangeSet<T> {
    /// The set of all elements of the domain not in `self`.
    ///
    /// Walks the spans in order, emitting the gaps between them; the gap
    /// below the first span is skipped when that span already starts at the
    /// domain minimum, and the gap above the last is skipped when that span
    /// is unbounded. Complement is its own inverse, and maps the empty set
    /// to the universal set and back.
    #[must_use]
    pub fn complement(&self) -> Self {
        let end_mark = T::MIN;
        if self.spans.is_empty() {
            return Self::universal();
        }
        let mut out = Self::new();
        let mut bot = end_mark;
        for (idx, span) in self.spans.iter().enumerate() {
            if idx > 0 || span.bot != end_mark {
                out.spans.push(crate::Span {
                    bot,
                    top: span.bot,
                });
            }
            bot = span.top;
        }
        if bot != end_mark {
            out.spans.push(crate::Span { bot, top: end_mark });
        }
        out
    }

    /// Adds every element of `other` to `self` (in-place union).
    pub fn union_with(&mut self, other: &Self) {
        for span in &other.spans {
            self.insert_range(span.bot, span.top);
        }
    }

    /// Removes every element of `other` from `self` (in-place difference).
    pub fn difference_with(&mut self, other: &Self) {
        for span in &other.spans {
            self.remove_range(span.bot, span.top);
        }
    }

    /// Removes from `self` every element *not* in `other` (in-place
    /// intersection).
    ///
    /// Deletes the gaps of `other` one by one: the region below its first
    /// span, the region between each pair of spans, and the region above
    /// its last span, with end-mark-aware handling at both extremes.
    pub fn intersect_with(&mut self, other: &Self) {
        let end_mark = T::MIN;
        let mut gap_bot = end_mark;
        for span in &other.spans {
            if gap_bot != end_mark || span.bot != end_mark {
                self.remove_range(gap_bot, span.bot);
            }
            gap_bot = span.top;
        }
        if other.spans.is_empty() || gap_bot != end_mark {
            self.remove_range(gap_bot, end_mark);
        }
    }
}

/// The union of any number of sets. Zero operands yield the empty set.
pub fn union<'s, T, I>(sets: I) -> RangeSet<T>
where
    T: Element + 's,
    I: IntoIterator<Item = &'s RangeSet<T>>,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return RangeSet::new();
    };
    let mut out = first.clone();
    for set in sets {
        out.union_with(set);
    }
    out
}

/// The intersection of any number of sets. Zero operands yield the empty
/// set.
pub fn intersection<'s, T, I>(sets: I) -> RangeSet<T>
where
    T: Element + 's,
    I: IntoIterator<Item = &'s RangeSet<T>>,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return RangeSet::new();
    };
    let mut out = first.clone();
    for set in sets {
        out.intersect_with(set);
    }
    out
}

impl<T: Element> BitOr for &RangeSet<T> {
    type Output = RangeSet<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.union_with(rhs);
        out
    }
}

impl<T: Element> BitAnd for &RangeSet<T> {
    type Output = RangeSet<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.intersect_with(rhs);
        out
    }
}

impl<T: Element> Sub for &RangeSet<T> {
    type Output = RangeSet<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.difference_with(rhs);
        out
    }
}

impl<T: Element> Not for &RangeSet<T> {
    type Output = RangeSet<T>;

    fn not(self) -> Self::Output {
        self.complement()
    }
}
