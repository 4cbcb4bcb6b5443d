// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! `quickcheck::Arbitrary` support for [`RangeSet`], for property-based
//! testing here and downstream (behind the `arbitrary` feature).

use crate::{Element, RangeSet};
use quickcheck::{Arbitrary, Gen};

impl<T> Arbitrary for RangeSet<T>
where
    T: Element + Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        // mix single elements and ranges so that merged multi-element spans
        // and (for narrow domains) unbounded tops actually occur
        let mut set: Self = Vec::<T>::arbitrary(g).into_iter().collect();
        for (b, t) in Vec::<(T, T)>::arbitrary(g) {
            set.insert_range(b, t);
        }
        set
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // shrink by dropping whole spans; shrinking through elements would
        // blow up on large contiguous runs
        let spans: Vec<_> = self.spans().collect();
        let smaller: Vec<Self> = (0..spans.len())
            .map(|skip| {
                let mut set = Self::new();
                for (idx, span) in spans.iter().enumerate() {
                    if idx != skip {
                        set.insert_range(span.bot(), span.top());
                    }
                }
                set
            })
            .collect();
        Box::new(smaller.into_iter())
    }
}
