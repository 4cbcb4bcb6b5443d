// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # rangeset: A Compact Set Container for Integer Domains
//!
//! This crate provides [`RangeSet`], a set of integers stored as an ordered
//! sequence of non-overlapping, non-adjacent contiguous runs ("spans")
//! rather than as individual elements. Sets dominated by contiguous runs
//! (allocated id blocks, port ranges, codepoint classes, free lists) take
//! O(spans) space instead of O(elements), with O(log spans) membership,
//! insertion and removal.
//!
//! ## Representation
//!
//! A [`Span`] covers the half-open range `[bot, top)`. Adjacent and
//! overlapping runs are merged eagerly, so the span sequence is the unique
//! canonical representation of its element set and `==` on two sets is
//! plain structural comparison.
//!
//! The minimum value of the element type doubles as the *end mark*: since
//! integer arithmetic wraps, "one past the maximum" is bit-identical to the
//! minimum, and a span whose `top` is the end mark extends through the top
//! of the domain. A single span with the end mark on both sides is the
//! universal set. This gives unbounded-above sets (and the universal set) a
//! first-class representation without widening the element type:
//!
//! ```
//! use rangeset::RangeSet;
//!
//! let mut ports = RangeSet::<u16>::new();
//! ports.insert_range(1024, 0); // everything from 1024 up
//! assert!(ports.contains(u16::MAX));
//! assert_eq!(ports.to_string(), "{1024:65535}");
//! ```
//!
//! ## Element types
//!
//! The element type is any fixed-width primitive integer, signed or
//! unsigned, abstracted by the [`Element`] trait: ordering, wrapping
//! successor/predecessor, and the domain extremes are all the machinery
//! needs.
//!
//! ## Set algebra
//!
//! Union, intersection, difference and complement are built on the range
//! mutation primitives, as free functions over any number of operands
//! ([`union`], [`intersection`]), in-place methods, and operators on
//! references:
//!
//! ```
//! use rangeset::RangeSet;
//!
//! let a: RangeSet<i32> = "{1:5}".parse()?;
//! let b: RangeSet<i32> = "{4:8}".parse()?;
//! assert_eq!((&a | &b).to_string(), "{1:8}");
//! assert_eq!((&a & &b).to_string(), "{4:5}");
//! assert_eq!((!&a).complement(), a);
//! # Ok::<(), rangeset::ParseSetError>(())
//! ```
//!
//! ## Textual form
//!
//! [`std::fmt::Display`] writes the canonical form: `{}`, `{42}`,
//! `{1:3,8}`, with multi-element spans as inclusive `b:t` ranges.
//! [`std::str::FromStr`] accepts a superset (unordered, overlapping or
//! duplicate descriptors, `E` for the end of the domain, `{U}` for the
//! universal set) and normalizes while parsing. See [`ParseSetError`] for
//! the failure cases; everything else in this crate is infallible, with
//! no-ops and boolean outcomes instead of error channels.
//!
//! ## Concurrency
//!
//! There is none: a `RangeSet` is plain owned data. Mutation needs `&mut`,
//! shared reads are safe, and moving sets or elements across threads is the
//! caller's business.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Span`] and [`RangeSet`].
//! - `arbitrary`: implements `quickcheck::Arbitrary` for [`RangeSet`],
//!   useful for property-based testing.
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod element;
pub use element::Element;
mod set;
pub use set::{RangeSet, Span};
mod iter;
pub use iter::Elements;
mod ops;
pub use ops::{intersection, union};
mod string;
pub use string::ParseSetError;
#[cfg(any(test, feature = "arbitrary"))]
mod test_util;
