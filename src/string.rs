// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Textual encoding and decoding of a [`RangeSet`].
//!
//! The canonical form written by [`Display`] is `{` followed by
//! comma-separated span descriptors followed by `}`, with no whitespace. A
//! descriptor is a single integer `n` for a one-element span, or `b:t` for
//! the inclusive range `b..=t`. Bounds that reach the extremes of the
//! domain are written as their plain wrapped integer values, so the
//! canonical form of, say, a universal `i8` set is `{-128:127}`.
//!
//! [`FromStr`] accepts a superset of that: descriptors may be unordered,
//! overlapping or duplicated, a one-element range may be spelled `n:n`, the
//! letter `E` stands for the end of the domain (the minimum as a lower
//! bound, the maximum as an upper bound), and `{U}` alone is the universal
//! set (shorthand for `{E:E}`). Whatever is accepted is normalized through
//! the range insertion machinery, so decoding always yields canonical form
//! and `decode(encode(s)) == s` holds structurally for every set.

use crate::{Element, RangeSet};
use std::{error::Error, fmt, str::FromStr};

/// Error from decoding a malformed set string.
///
/// Each variant carries the comma-separated segment that failed, so the
/// offending part of a long input can be pinpointed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSetError {
    /// The input is not enclosed in `{`..`}`.
    NotBraced,
    /// A range descriptor has more than two colon-separated parts.
    ExtraColon {
        /// The offending descriptor.
        segment: String,
    },
    /// A bound did not parse as the element type.
    BadInteger {
        /// The offending descriptor.
        segment: String,
    },
    /// A range descriptor whose end is less than its start.
    InvertedRange {
        /// The offending descriptor.
        segment: String,
    },
}

impl fmt::Display for ParseSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBraced => write!(f, "set string is not enclosed in braces"),
            Self::ExtraColon { segment } => {
                write!(f, "too many parts in range {segment:?}")
            }
            Self::BadInteger { segment } => {
                write!(f, "invalid integer in range {segment:?}")
            }
            Self::InvertedRange { segment } => {
                write!(f, "invalid range {segment:?} (end < start)")
            }
        }
    }
}

impl Error for ParseSetError {}

impl<T: Element> fmt::Display for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, span) in self.spans.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", span.bot)?;
            if span.top != span.bot.wrapping_incr() {
                // multi-element span: emit the inclusive upper bound, which
                // wraps an end-mark top back to the domain maximum
                write!(f, ":{}", span.top.wrapping_decr())?;
            }
        }
        f.write_str("}")
    }
}

impl<T: Element> FromStr for RangeSet<T> {
    type Err = ParseSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(ParseSetError::NotBraced)?;
        let mut set = Self::new();
        if inner.is_empty() {
            return Ok(set);
        }
        let inner = if inner == "U" { "E:E" } else { inner };

        for segment in inner.split(',') {
            let (b, t) = match segment.split_once(':') {
                Some((lo, hi)) => {
                    if hi.contains(':') {
                        return Err(ParseSetError::ExtraColon {
                            segment: segment.to_owned(),
                        });
                    }
                    let b = parse_bound(lo, T::MIN, segment)?;
                    let t = parse_bound(hi, T::MIN.wrapping_decr(), segment)?;
                    (b, t)
                }
                None => {
                    // a lone E is not a value, only a range bound
                    let v = T::parse_decimal(segment).ok_or_else(|| ParseSetError::BadInteger {
                        segment: segment.to_owned(),
                    })?;
                    (v, v)
                }
            };
            if b > t {
                return Err(ParseSetError::InvertedRange {
                    segment: segment.to_owned(),
                });
            }
            // inclusive in the text, half-open in the store; an upper bound
            // at the domain maximum wraps to the end mark, as intended
            set.insert_range(b, t.wrapping_incr());
        }
        Ok(set)
    }
}

/// Parses one bound of a descriptor, mapping the literal `E` to the given
/// end-of-domain value.
fn parse_bound<T: Element>(s: &str, end: T, segment: &str) -> Result<T, ParseSetError> {
    if s == "E" {
        return Ok(end);
    }
    T::parse_decimal(s).ok_or_else(|| ParseSetError::BadInteger {
        segment: segment.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_normalizes() {
        // inputs beyond the canonical form are accepted and normalized
        let cases: &[(&str, &str)] = &[
            ("{}", "{}"),
            ("{-1}", "{-1}"),
            ("{1,2,4}", "{1:2,4}"),
            ("{1,3,4}", "{1,3:4}"),
            ("{1,2,3}", "{1:3}"),
            ("{5,2}", "{2,5}"),
            ("{2,1,2}", "{1:2}"),
            ("{3,1,8,2}", "{1:3,8}"),
            ("{1:2,5,2:3,8}", "{1:3,5,8}"),
            ("{7:7}", "{7}"),
            // i16 end marks
            ("{U}", "{-32768:32767}"),
            ("{E:E}", "{-32768:32767}"),
            ("{E:10}", "{-32768:10}"),
            ("{10:E}", "{10:32767}"),
            ("{-1,100:E}", "{-1,100:32767}"),
            ("{E:1,100}", "{-32768:1,100}"),
            ("{32767}", "{32767}"),
            (" {1:3} ", "{1:3}"),
        ];
        for (input, expected) in cases {
            let set: RangeSet<i16> = input.parse().unwrap_or_else(|err| {
                panic!("decoding {input:?} failed: {err}");
            });
            assert_eq!(set.to_string(), *expected, "decoding {input:?}");
        }
    }

    #[test]
    fn decode_unsigned() {
        let set: RangeSet<u8> = "{U}".parse().unwrap();
        assert!(set.is_universal());
        assert_eq!(set.to_string(), "{0:255}");
        let set: RangeSet<u8> = "{250:E}".parse().unwrap();
        assert_eq!(set.to_string(), "{250:255}");
        assert!("{-1}".parse::<RangeSet<u8>>().is_err());
    }

    #[test]
    fn decode_errors() {
        let bad = |segment: &str| ParseSetError::BadInteger {
            segment: segment.to_owned(),
        };
        let cases: &[(&str, ParseSetError)] = &[
            ("", ParseSetError::NotBraced),
            ("1:2", ParseSetError::NotBraced),
            ("1:2}", ParseSetError::NotBraced),
            ("{1:2", ParseSetError::NotBraced),
            ("{1.2:3}", bad("1.2:3")),
            ("{1:!}", bad("1:!")),
            ("{1:}", bad("1:")),
            ("{ABC}", bad("ABC")),
            ("{E}", bad("E")),
            ("{1:2,#}", bad("#")),
            ("{1;3:4}", bad("1;3:4")),
            ("{1,3-4}", bad("3-4")),
            ("{%89i:djsa.mdaja,esreiop}", bad("%89i:djsa.mdaja")),
            (
                "{2:1}",
                ParseSetError::InvertedRange {
                    segment: "2:1".to_owned(),
                },
            ),
            (
                "{1:2:3}",
                ParseSetError::ExtraColon {
                    segment: "1:2:3".to_owned(),
                },
            ),
        ];
        for (input, expected) in cases {
            let got = input.parse::<RangeSet<i16>>();
            assert_eq!(got, Err(expected.clone()), "decoding {input:?}");
        }
    }

    #[test]
    fn error_display_names_segment() {
        let err = "{1:2,#}".parse::<RangeSet<i32>>().unwrap_err();
        assert!(err.to_string().contains("\"#\""), "{err}");
        let err = "{9:5}".parse::<RangeSet<i32>>().unwrap_err();
        assert!(err.to_string().contains("\"9:5\""), "{err}");
    }

    #[test]
    fn encode_wrapped_bounds() {
        // encoding never writes E or U, only wrapped integers
        assert_eq!(RangeSet::<i8>::universal().to_string(), "{-128:127}");
        assert_eq!(RangeSet::<u8>::universal().to_string(), "{0:255}");
        assert_eq!(
            RangeSet::<i8>::from_range(100, i8::MIN).to_string(),
            "{100:127}"
        );
        // a single element at the domain maximum has a wrapped top
        let mut set = RangeSet::<i8>::new();
        set.insert(i8::MAX);
        assert_eq!(set.to_string(), "{127}");
    }

    #[quickcheck]
    fn qc_roundtrip(elems: Vec<u8>, ranges: Vec<(u8, u8)>) {
        let mut set: RangeSet<u8> = elems.into_iter().collect();
        for (b, t) in ranges {
            set.insert_range(b, t);
        }
        let decoded: RangeSet<u8> = set.to_string().parse().expect("canonical form decodes");
        assert_eq!(decoded, set);
    }

    #[quickcheck]
    fn qc_roundtrip_signed(elems: Vec<i8>) {
        let set: RangeSet<i8> = elems.into_iter().collect();
        let decoded: RangeSet<i8> = set.to_string().parse().expect("canonical form decodes");
        assert_eq!(decoded, set);
    }
}
