// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Range Copy
//!
//! Forward copy of a source range into a sink, with the loop shape
//! selected at compile time from the source cursor's traversal
//! category.
//!
//! A single-step cursor cannot report how many elements remain without
//! consuming them, so its only safe loop bound is the sentinel
//! comparison `first != last`. A random-access cursor can compute the
//! distance up front, allowing a counted loop whose trip count is
//! known before the first iteration; backends optimize such loops more
//! aggressively. The two loops are required to produce identical
//! observable results, so the counted form is purely a performance
//! specialization.

use crate::cursor::category::{RandomAccess, SingleStep, Traversal};
use crate::cursor::traits::{Sink, Source, Span};

/// Selects the copy loop for a traversal category.
///
/// Implemented for the two category tags; the category set is sealed,
/// so these are the only loop shapes. The trait appears in [`copy`]'s
/// bounds and resolves during monomorphization: there is no runtime
/// branch between the tiers.
pub trait CopyPolicy<S, D>: Traversal
where
    S: Source,
    D: Sink<Item = S::Item>,
{
    /// Runs the category's loop, returning the advanced sink.
    fn copy_range(first: S, last: S, dest: D) -> D;
}

impl<S, D> CopyPolicy<S, D> for SingleStep
where
    S: Source<Category = SingleStep>,
    D: Sink<Item = S::Item>,
{
    #[inline]
    fn copy_range(mut first: S, last: S, mut dest: D) -> D {
        while first != last {
            dest.put(first.read());
            first.step();
        }
        dest
    }
}

impl<S, D> CopyPolicy<S, D> for RandomAccess
where
    S: Source<Category = RandomAccess> + Span,
    D: Sink<Item = S::Item>,
{
    #[inline]
    fn copy_range(mut first: S, last: S, mut dest: D) -> D {
        let mut n = first.distance_to(&last);
        while n > 0 {
            dest.put(first.read());
            first.step();
            n -= 1;
        }
        dest
    }
}

/// Copies `[first, last)` into `dest` in forward order.
///
/// Returns the sink advanced by the number of elements copied; for
/// [`crate::cursor::slice::SliceSink`] the unwritten tail is available
/// through `into_remainder`.
///
/// The loop shape is chosen at compile time from `S::Category`; see
/// the module documentation. Both tiers copy element by element via
/// `Source::read`, so non-`Copy` element types are cloned exactly once
/// per element.
///
/// # Contract
///
/// `last` must be reachable from `first`, and the sink must have
/// capacity for every element of the range. The destination must not
/// overlap the source range; with the cursors provided by this crate
/// that situation is unrepresentable (sources borrow shared, sinks
/// exclusive), but custom cursor implementations must uphold it
/// themselves.
///
/// # Examples
///
/// ```rust
/// use kedge::{copy, SliceSink, SliceSource};
///
/// let src = [1, 2, 3, 4, 5];
/// let mut dst = [0; 5];
///
/// let (first, last) = SliceSource::range(&src);
/// let rest = copy(first, last, SliceSink::new(&mut dst)).into_remainder();
/// assert!(rest.is_empty());
/// assert_eq!(dst, [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn copy<S, D>(first: S, last: S, dest: D) -> D
where
    S: Source,
    D: Sink<Item = S::Item>,
    S::Category: CopyPolicy<S, D>,
{
    <S::Category as CopyPolicy<S, D>>::copy_range(first, last, dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::adapter::StepOnly;
    use crate::cursor::slice::{SliceSink, SliceSource};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// A sink that appends to a vector, with no capacity bound.
    struct PushSink<T>(Vec<T>);

    impl<T> Sink for PushSink<T> {
        type Item = T;

        fn put(&mut self, value: T) {
            self.0.push(value);
        }
    }

    #[test]
    fn test_copies_five_integers_and_returns_advanced_sink() {
        let src = [1, 2, 3, 4, 5];
        let mut dst = [0; 5];

        let (first, last) = SliceSource::range(&src);
        let sink = copy(first, last, SliceSink::new(&mut dst));
        assert_eq!(sink.remaining(), 0);
        assert_eq!(dst, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_copy_into_larger_destination_leaves_tail_untouched() {
        let src = [9u8, 8];
        let mut dst = [0u8; 4];

        let (first, last) = SliceSource::range(&src);
        let rest = copy(first, last, SliceSink::new(&mut dst)).into_remainder();
        assert_eq!(rest.len(), 2);
        assert_eq!(dst, [9, 8, 0, 0]);
    }

    #[test]
    fn test_empty_range_copies_nothing() {
        let src: [u32; 0] = [];
        let mut dst = [7u32; 3];

        let (first, last) = SliceSource::range(&src);
        copy(first, last, SliceSink::new(&mut dst));
        assert_eq!(dst, [7, 7, 7]);
    }

    #[test]
    fn test_single_step_tier_matches_random_access_tier() {
        let src: Vec<u64> = (0u64..257).collect();

        let mut via_counted = vec![0u64; src.len()];
        let (first, last) = SliceSource::range(&src);
        copy(first, last, SliceSink::new(&mut via_counted));

        let mut via_sentinel = vec![0u64; src.len()];
        let (first, last) = StepOnly::pair(SliceSource::range(&src));
        copy(first, last, SliceSink::new(&mut via_sentinel));

        assert_eq!(via_counted, via_sentinel);
        assert_eq!(via_counted, src);
    }

    #[test]
    fn test_copy_clones_non_copy_elements() {
        let src = [String::from("a"), String::from("b")];
        let mut dst = [String::new(), String::new()];

        let (first, last) = SliceSource::range(&src);
        copy(first, last, SliceSink::new(&mut dst));

        assert_eq!(dst, src);
        // The source is intact; elements were cloned, not moved.
        assert_eq!(src[0], "a");
    }

    #[test]
    fn test_copy_into_unbounded_sink() {
        let src = [1i32, 2, 3];
        let (first, last) = SliceSource::range(&src);

        let sink = copy(first, last, PushSink(Vec::new()));
        assert_eq!(sink.0, vec![1, 2, 3]);
    }

    #[test]
    fn test_round_trip_over_random_buffers() {
        let mut rng = StdRng::seed_from_u64(0x6B65646765);

        for len in [0usize, 1, 2, 63, 64, 65, 513] {
            let src: Vec<u64> = (0..len).map(|_| rng.gen()).collect();
            let mut dst = vec![0u64; len];

            let (first, last) = SliceSource::range(&src);
            let rest = copy(first, last, SliceSink::new(&mut dst)).into_remainder();
            assert!(rest.is_empty());
            assert_eq!(dst, src);
        }
    }
}
