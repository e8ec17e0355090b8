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

use crate::cursor::category::SingleStep;
use crate::cursor::traits::Source;

/// Restricts a wrapped source cursor to single-step traversal.
///
/// The wrapper forwards `step`, `read`, and position equality to the
/// inner cursor but declares the `SingleStep` category, so
/// category-dispatched algorithms take their generic tier regardless
/// of what the inner cursor supports. The demotion is honored, never
/// bypassed: nothing unwraps the adapter to recover the inner
/// category.
///
/// Useful for exercising the generic tier against the fast tier over
/// the same data, and for handing random-access cursors to code that
/// must not rely on distance computation.
///
/// # Examples
///
/// ```rust
/// use kedge::{copy, SliceSink, SliceSource, StepOnly};
///
/// let src = [1, 2, 3];
/// let mut dst = [0; 3];
///
/// let (first, last) = StepOnly::pair(SliceSource::range(&src));
/// copy(first, last, SliceSink::new(&mut dst));
/// assert_eq!(dst, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StepOnly<S> {
    inner: S,
}

impl<S> StepOnly<S> {
    /// Wraps a single cursor.
    #[inline]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Wraps both endpoints of a range at once.
    #[inline]
    pub fn pair((first, last): (S, S)) -> (Self, Self) {
        (Self { inner: first }, Self { inner: last })
    }

    /// Returns the wrapped cursor.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Source> Source for StepOnly<S> {
    type Item = S::Item;
    type Category = SingleStep;

    #[inline(always)]
    fn step(&mut self) {
        self.inner.step();
    }

    #[inline(always)]
    fn read(&self) -> S::Item {
        self.inner.read()
    }
}
