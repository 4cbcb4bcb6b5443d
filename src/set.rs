// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Span and RangeSet
//!
//! This module provides the core set representation: an ordered vector of
//! non-overlapping, non-adjacent [`Span`]s. A set of integers with large
//! contiguous runs takes O(spans) space instead of O(elements), and
//! membership, insertion and removal are O(log spans) plus splice cost.
//!
//! ## Bounds and the end mark
//!
//! A [`Span`] covers the half-open range `[bot, top)`. The minimum value of
//! the element type (the *end mark*) is overloaded when it appears as a
//! bound: a `top` equal to [`Element::MIN`] means the span extends through
//! the maximum of the domain, because "one past the maximum" wraps around
//! to the minimum. A `bot` equal to `MIN` in the first span starts at the
//! domain minimum. A single span with the end mark on both sides is the
//! universal set.
//!
//! Comparisons against a span's `top` must therefore special-case the end
//! mark: an unbounded top is never "below" any value, no matter what raw
//! `<` says about the wrapped bits.

use crate::Element;
use smallvec::SmallVec;
use std::fmt;

/// One maximal run of contiguous elements, stored as the half-open range
/// `[bot, top)`.
///
/// The raw bounds are exposed as-is: a `top` equal to [`Element::MIN`] flags
/// a span that extends through the top of the domain (see
/// [`Span::is_high_unbounded`]).
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub struct Span<T> {
    pub(crate) bot: T,
    pub(crate) top: T,
}

impl<T: Element> fmt::Debug for Span<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.bot, self.top)
    }
}

impl<T: Element> Span<T> {
    /// The first element of the span.
    #[must_use]
    pub fn bot(&self) -> T {
        self.bot
    }

    /// One past the last element of the span, except that [`Element::MIN`]
    /// means the span runs through [`Element::MAX`].
    #[must_use]
    pub fn top(&self) -> T {
        self.top
    }

    /// Whether the span extends through the maximum value of the domain.
    #[must_use]
    pub fn is_high_unbounded(&self) -> bool {
        self.top == T::MIN
    }

    /// The number of elements in the span, or `None` if it cannot be
    /// represented as `u64` (only possible for a full 64-bit domain).
    #[must_use]
    pub fn element_count(&self) -> Option<u64> {
        u64::try_from(self.count_u128()).ok()
    }

    pub(crate) fn count_u128(&self) -> u128 {
        match T::distance(self.bot, self.top) {
            // bot == top only ever describes the full domain
            0 => 1u128 << T::BITS,
            n => u128::from(n),
        }
    }
}

/// A set of integers stored as an ordered, duplicate-free, gap-merged
/// sequence of [`Span`]s.
///
/// The sequence always satisfies, in this order of spans:
///
/// 1. spans are sorted ascending by `bot`;
/// 2. adjacent spans neither overlap nor touch (`span[i].top <
///    span[i+1].bot`, touching runs have been merged);
/// 3. the end mark appears as `bot` only in the first span and as `top`
///    only in the last.
///
/// Every mutating method re-establishes these invariants before returning,
/// so the representation of a given element set is unique and `==` compares
/// sets structurally.
///
/// A single instance must not be mutated from more than one thread at a
/// time; shared `&` access is safe as for any plain data structure.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub struct RangeSet<T> {
    pub(crate) spans: SmallVec<[Span<T>; 2]>,
}

impl<T: Element> fmt::Debug for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.spans.iter()).finish()
    }
}

impl<T: Element> RangeSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spans: SmallVec::new(),
        }
    }

    /// Creates the set of all elements of the domain.
    #[must_use]
    pub fn universal() -> Self {
        let end_mark = T::MIN;
        let mut spans = SmallVec::new();
        spans.push(Span {
            bot: end_mark,
            top: end_mark,
        });
        Self { spans }
    }

    /// Creates a set holding the half-open range `[b, t)`.
    ///
    /// `t <= b` (with `t` not the end mark) yields the empty set, and a `t`
    /// equal to [`Element::MIN`] runs through the top of the domain, exactly
    /// as for [`RangeSet::insert_range`].
    #[must_use]
    pub fn from_range(b: T, t: T) -> Self {
        let mut set = Self::new();
        set.insert_range(b, t);
        set
    }

    /// Whether the set has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Whether the set contains every element of the domain.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        let end_mark = T::MIN;
        self.spans.len() == 1 && self.spans[0].bot == end_mark && self.spans[0].top == end_mark
    }

    /// The number of spans the set is stored as. O(1).
    #[must_use]
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// The number of elements in the set, or `None` when the true
    /// cardinality does not fit in `u64` (possible only for 64-bit element
    /// types with at or near the full domain covered). O(spans).
    #[must_use]
    pub fn element_count(&self) -> Option<u64> {
        let total: u128 = self.spans.iter().map(Span::count_u128).sum();
        u64::try_from(total).ok()
    }

    /// Whether the set contains `e`. O(log spans).
    #[must_use]
    pub fn contains(&self, e: T) -> bool {
        let idx = self.locate(e);
        idx > 0 && (e < self.spans[idx - 1].top || self.spans[idx - 1].top == T::MIN)
    }

    /// Returns the smallest index `idx` such that `e < spans[idx].bot`, or
    /// the span count if there is none. Equivalently, `idx - 1` is the span
    /// that would hold `e` if it is a member.
    ///
    /// Note that if the first span starts at the end mark this can never
    /// return 0, since no element is below the domain minimum.
    fn locate(&self, e: T) -> usize {
        self.spans.partition_point(|span| span.bot <= e)
    }

    /// Inserts a single element, returning `true` if the set changed.
    ///
    /// O(log spans) to locate, plus the shift when a new span must be
    /// spliced in.
    pub fn insert(&mut self, e: T) -> bool {
        let end_mark = T::MIN;
        let idx = self.locate(e);
        if idx == 0 || (e > self.spans[idx - 1].top && self.spans[idx - 1].top != end_mark) {
            // e falls in the gap before spans[idx], clear of spans[idx - 1]
            if idx < self.spans.len() && e == self.spans[idx].bot.wrapping_decr() {
                // extend spans[idx] down by one
                self.spans[idx].bot = e;
            } else {
                self.spans.insert(
                    idx,
                    Span {
                        bot: e,
                        top: e.wrapping_incr(),
                    },
                );
            }
            return true;
        }
        if e == self.spans[idx - 1].top && self.spans[idx - 1].top != end_mark {
            // e sits one past the end of spans[idx - 1]
            if idx < self.spans.len() && e == self.spans[idx].bot.wrapping_decr() {
                // e joins spans[idx - 1] and spans[idx] into one
                self.spans[idx].bot = self.spans[idx - 1].bot;
                self.spans.remove(idx - 1);
            } else {
                // extend spans[idx - 1] up by one
                self.spans[idx - 1].top = e.wrapping_incr();
            }
            return true;
        }
        // e is already covered by spans[idx - 1]
        false
    }

    /// Inserts every element of the half-open range `[b, t)`.
    ///
    /// The bounds are asymmetric: `t` is one past the highest element to
    /// add, and a `t` equal to [`Element::MIN`] adds everything from `b`
    /// through the top of the domain. `t <= b` (with `t` not the end mark)
    /// is a no-op.
    pub fn insert_range(&mut self, b: T, t: T) {
        let end_mark = T::MIN;
        if t <= b && t != end_mark {
            return;
        }

        // Locate the boundary spans. The added range may swallow any number
        // of existing spans, or fall in a gap and require a fresh one.
        let mut b_idx = self.locate(b);
        if b_idx == 0 || (b > self.spans[b_idx - 1].top && self.spans[b_idx - 1].top != end_mark) {
            // the range is clear of the span below, so it cannot widen it
            b_idx += 1;
        }
        let t_idx = if t == end_mark {
            self.spans.len()
        } else {
            self.locate(t)
        };

        // t_idx - b_idx is the number of spans subsumed by the new range:
        // -1 means the range lies strictly inside a gap, 0 means only span
        // ends need adjusting, more means whole spans are swallowed.
        if t_idx < b_idx {
            self.spans.insert(t_idx, Span { bot: b, top: t });
            return;
        }

        // keep the wider of the two tops (end-mark-aware)
        let mut t = t;
        if (t < self.spans[t_idx - 1].top && t != end_mark) || self.spans[t_idx - 1].top == end_mark
        {
            t = self.spans[t_idx - 1].top;
        }
        self.spans.drain(b_idx..t_idx);

        // widen the retained boundary span as needed
        if b_idx > 0 && b < self.spans[b_idx - 1].bot {
            self.spans[b_idx - 1].bot = b;
        }
        if b_idx > 0
            && (t > self.spans[b_idx - 1].top || t == end_mark)
            && self.spans[b_idx - 1].top != end_mark
        {
            self.spans[b_idx - 1].top = t;
        }
    }

    /// Removes a single element, returning `true` if it was present.
    ///
    /// O(log spans) to locate, plus the shift when a span must be deleted
    /// or split.
    pub fn remove(&mut self, e: T) -> bool {
        let end_mark = T::MIN;
        let idx = self.locate(e);
        if idx == 0 || (e >= self.spans[idx - 1].top && self.spans[idx - 1].top != end_mark) {
            return false; // outside any span
        }
        let span = self.spans[idx - 1];
        if e == span.bot && e == span.top.wrapping_decr() {
            // sole element of the span
            self.spans.remove(idx - 1);
        } else if e == span.bot {
            self.spans[idx - 1].bot = e.wrapping_incr();
        } else if e == span.top.wrapping_decr() {
            self.spans[idx - 1].top = e;
        } else {
            // strictly interior: split the span in two
            self.spans[idx - 1].top = e;
            self.spans.insert(
                idx,
                Span {
                    bot: e.wrapping_incr(),
                    top: span.top,
                },
            );
        }
        true
    }

    /// Removes every element of the half-open range `[b, t)`.
    ///
    /// Mirror of [`RangeSet::insert_range`]: same asymmetric bounds, same
    /// end-mark handling, and `t <= b` (with `t` not the end mark) is a
    /// no-op.
    pub fn remove_range(&mut self, b: T, t: T) {
        let end_mark = T::MIN;
        if t <= b && t != end_mark {
            return;
        }

        // The removed range may be interior to one span, cover several
        // whole spans, or clip the ends of the boundary spans.
        let mut b_idx = self.locate(b);
        let mut t_idx = self.locate(t);
        if b_idx > 0 && b == self.spans[b_idx - 1].bot {
            // nothing of the bottom span survives
            b_idx -= 1;
        }
        if t == end_mark {
            t_idx = self.spans.len();
        } else if t_idx > 0
            && (t < self.spans[t_idx - 1].top || self.spans[t_idx - 1].top == end_mark)
        {
            // part of the top span survives
            t_idx -= 1;
        }

        if t_idx < b_idx {
            // the removal falls strictly inside spans[t_idx]: split it
            let upper_top = self.spans[t_idx].top;
            self.spans[t_idx].top = b;
            self.spans.insert(
                b_idx,
                Span {
                    bot: t,
                    top: upper_top,
                },
            );
            return;
        }

        self.spans.drain(b_idx..t_idx);

        // clip the ends of the kept neighbours
        if b_idx < self.spans.len() && (t > self.spans[b_idx].bot || t == end_mark) {
            self.spans[b_idx].bot = t;
        }
        if b_idx > 0 && (b < self.spans[b_idx - 1].top || self.spans[b_idx - 1].top == end_mark) {
            self.spans[b_idx - 1].top = b;
        }
    }
}
