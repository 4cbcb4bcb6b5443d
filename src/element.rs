// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Element
//!
//! This module defines the capability contract a type must satisfy to serve
//! as the element type of a [`RangeSet`](crate::RangeSet): a fixed-width
//! integer with two's-complement wraparound arithmetic.
//!
//! The set machinery never derives type limits at runtime; everything it
//! needs is stated here once per type:
//!
//! - [`Element::MIN`], the smallest representable value. This value doubles
//!   as the *end mark*: a span whose upper bound is `MIN` extends through
//!   the top of the domain, because "one past the maximum" wraps around to
//!   the minimum.
//! - wrapping successor/predecessor, used for all boundary arithmetic so
//!   that the extremes of the domain behave uniformly.
//! - [`Element::distance`], the wrapped count of a half-open range, used
//!   for cardinality reporting.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer usable as the element type of a [`RangeSet`].
///
/// Implemented for the primitive signed and unsigned integers up to 64 bits
/// (including `isize`/`usize`). The trait is sealed: the span invariants rely
/// on two's-complement wraparound, which only holds for these types.
///
/// [`RangeSet`]: crate::RangeSet
pub trait Element: Copy + Ord + Eq + fmt::Debug + fmt::Display + sealed::Sealed {
    /// The smallest representable value, which is also the end mark used to
    /// flag an unbounded span boundary.
    const MIN: Self;

    /// The largest representable value. Always equal to `MIN - 1` under
    /// wraparound, for signed and unsigned types alike.
    const MAX: Self;

    /// Width of the type in bits.
    const BITS: u32;

    /// Whether the type is unsigned.
    const UNSIGNED: bool;

    /// The successor of `self`, wrapping from `MAX` to `MIN`.
    #[must_use]
    fn wrapping_incr(self) -> Self;

    /// The predecessor of `self`, wrapping from `MIN` to `MAX`.
    #[must_use]
    fn wrapping_decr(self) -> Self;

    /// The number of values in the half-open range `[lo, hi)`, computed with
    /// wraparound.
    ///
    /// Returns 0 when `lo == hi`, so a full-domain range is indistinguishable
    /// from an empty one here; callers disambiguate via [`Element::BITS`].
    #[must_use]
    fn distance(lo: Self, hi: Self) -> u64;

    /// Parses a decimal string, rejecting anything that does not fit the
    /// type (including, for unsigned types, a leading minus sign).
    fn parse_decimal(s: &str) -> Option<Self>;
}

macro_rules! impl_element {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const BITS: u32 = <$ty>::BITS;
                const UNSIGNED: bool = <$ty>::MIN == 0;

                #[inline]
                fn wrapping_incr(self) -> Self {
                    self.wrapping_add(1)
                }

                #[inline]
                fn wrapping_decr(self) -> Self {
                    self.wrapping_sub(1)
                }

                #[inline]
                fn distance(lo: Self, hi: Self) -> u64 {
                    hi.wrapping_sub(lo) as $unsigned as u64
                }

                fn parse_decimal(s: &str) -> Option<Self> {
                    s.parse().ok()
                }
            }
        )*
    };
}

impl_element! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_wrap() {
        assert_eq!(<i8 as Element>::MAX.wrapping_incr(), <i8 as Element>::MIN);
        assert_eq!(<i8 as Element>::MIN.wrapping_decr(), <i8 as Element>::MAX);
        assert_eq!(<u16 as Element>::MAX.wrapping_incr(), 0u16);
        assert_eq!(0u16.wrapping_decr(), u16::MAX);
        assert_eq!(<i64 as Element>::MAX, i64::MAX);
    }

    #[test]
    fn signedness() {
        assert!(!<i32 as Element>::UNSIGNED);
        assert!(<u32 as Element>::UNSIGNED);
        assert!(<usize as Element>::UNSIGNED);
    }

    #[test]
    fn distance() {
        assert_eq!(<i8 as Element>::distance(1, 4), 3);
        assert_eq!(<i8 as Element>::distance(4, 4), 0);
        // wraps through the top of the domain
        assert_eq!(<i8 as Element>::distance(i8::MAX, i8::MIN), 1);
        assert_eq!(<i8 as Element>::distance(i8::MIN, i8::MAX), 255);
        assert_eq!(<u8 as Element>::distance(0, 255), 255);
        // full-width ranges report 0; BITS disambiguates
        assert_eq!(<u64 as Element>::distance(0, 0), 0);
        assert_eq!(<u64 as Element>::BITS, 64);
    }

    #[test]
    fn parse_decimal() {
        assert_eq!(<i16 as Element>::parse_decimal("-32768"), Some(i16::MIN));
        assert_eq!(<i16 as Element>::parse_decimal("32768"), None);
        assert_eq!(<u8 as Element>::parse_decimal("-1"), None);
        assert_eq!(<u8 as Element>::parse_decimal("255"), Some(255));
        assert_eq!(<u8 as Element>::parse_decimal("1.2"), None);
        assert_eq!(<u8 as Element>::parse_decimal(""), None);
    }
}
