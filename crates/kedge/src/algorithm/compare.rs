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

//! # Range Comparison
//!
//! Equality and lexicographic ordering over ranges. All operations
//! here need only single-step traversal: they advance with `step` and
//! bound the loop with position inequality, so any source cursor
//! qualifies and no ordering between positions is ever required.

use core::cmp::Ordering;

use crate::cursor::traits::Source;

/// Compares `[first1, last1)` element-wise against the range starting
/// at `first2`.
///
/// Returns `false` at the first pair that is not equal under `==`, and
/// `true` when every paired element through the end of the first range
/// compares equal. The second range is assumed to be at least as long
/// as the first; a shorter second range is a contract violation (the
/// cursors provided by this crate panic on the out-of-range read).
///
/// # Examples
///
/// ```rust
/// use kedge::{equal, SliceSource};
///
/// let a = [1, 2, 3];
/// let b = [1, 2, 3, 4];
///
/// let (first, last) = SliceSource::range(&a);
/// assert!(equal(first, last, SliceSource::new(&b)));
/// ```
pub fn equal<A, B>(mut first1: A, last1: A, mut first2: B) -> bool
where
    A: Source,
    B: Source,
    A::Item: PartialEq<B::Item>,
{
    while first1 != last1 {
        if first1.read() != first2.read() {
            return false;
        }
        first1.step();
        first2.step();
    }
    true
}

/// [`equal`] with a caller-supplied predicate in place of `==`.
///
/// The predicate is evaluated left to right and the traversal
/// short-circuits on its first failure; elements beyond that point are
/// neither read nor tested.
///
/// # Examples
///
/// ```rust
/// use kedge::{equal_by, SliceSource};
///
/// let a = [1, 2, 3];
/// let b = [10, 20, 30];
///
/// let (first, last) = SliceSource::range(&a);
/// let same_magnitude = |x: &i32, y: &i32| x * 10 == *y;
/// assert!(equal_by(first, last, SliceSource::new(&b), same_magnitude));
/// ```
pub fn equal_by<A, B, F>(mut first1: A, last1: A, mut first2: B, mut pred: F) -> bool
where
    A: Source,
    B: Source,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    while first1 != last1 {
        if !pred(&first1.read(), &first2.read()) {
            return false;
        }
        first1.step();
        first2.step();
    }
    true
}

/// Lexicographic three-way comparison of `[first1, last1)` against
/// `[first2, last2)` under `<`.
///
/// The first position at which the elements differ decides the result.
/// If one range is a strict prefix of the other, the shorter range is
/// the lesser; two ranges that exhaust together are equal. Elements
/// that `<` cannot order (such as NaN against anything) are treated as
/// equivalent and skipped.
///
/// # Examples
///
/// ```rust
/// use core::cmp::Ordering;
/// use kedge::{lexicographical_compare, SliceSource};
///
/// let a = [1, 2];
/// let b = [1, 2, 3];
///
/// let (first1, last1) = SliceSource::range(&a);
/// let (first2, last2) = SliceSource::range(&b);
/// assert_eq!(
///     lexicographical_compare(first1, last1, first2, last2),
///     Ordering::Less
/// );
/// ```
pub fn lexicographical_compare<A, B>(
    mut first1: A,
    last1: A,
    mut first2: B,
    last2: B,
) -> Ordering
where
    A: Source,
    B: Source<Item = A::Item>,
    A::Item: PartialOrd,
{
    while first1 != last1 && first2 != last2 {
        let a = first1.read();
        let b = first2.read();
        if a < b {
            return Ordering::Less;
        }
        if b < a {
            return Ordering::Greater;
        }
        first1.step();
        first2.step();
    }

    match (first1 == last1, first2 == last2) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
