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

//! # Slice Cursors
//!
//! Cursors over contiguous storage. [`SliceSource`] is the
//! random-access read cursor over a shared slice; [`SliceSink`] is the
//! advancing write head over an exclusive slice. Both are thin views:
//! no allocation, no bookkeeping beyond the remaining window.

use crate::cursor::category::RandomAccess;
use crate::cursor::traits::{Sink, Source, Span};

/// A read position into a shared slice.
///
/// The cursor is represented as the remaining suffix of the underlying
/// slice; stepping shrinks the suffix from the front. Two cursors into
/// the same slice compare equal exactly when they denote the same
/// position.
///
/// # Examples
///
/// ```rust
/// # use kedge::cursor::slice::SliceSource;
/// # use kedge::cursor::traits::{Source, Span};
/// let data = [10, 20, 30];
/// let (mut first, last) = SliceSource::range(&data);
///
/// assert_eq!(first.distance_to(&last), 3);
/// assert_eq!(first.read(), 10);
/// first.step();
/// assert_eq!(first.read(), 20);
/// ```
pub struct SliceSource<'a, T> {
    rest: &'a [T],
}

impl<'a, T> SliceSource<'a, T> {
    /// Creates a cursor positioned at the start of `slice`.
    #[inline]
    pub fn new(slice: &'a [T]) -> Self {
        Self { rest: slice }
    }

    /// Creates the `[first, last)` cursor pair spanning all of `slice`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use kedge::cursor::slice::SliceSource;
    /// let data = [1, 2];
    /// let (first, last) = SliceSource::range(&data);
    /// assert!(first != last);
    ///
    /// let empty: [i32; 0] = [];
    /// let (first, last) = SliceSource::range(&empty);
    /// assert!(first == last);
    /// ```
    #[inline]
    pub fn range(slice: &'a [T]) -> (Self, Self) {
        let end = &slice[slice.len()..];
        (Self { rest: slice }, Self { rest: end })
    }
}

impl<'a, T> Clone for SliceSource<'a, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceSource<'a, T> {}

impl<'a, T> PartialEq for SliceSource<'a, T> {
    /// Position equality: true when both cursors denote the same
    /// location of the same underlying slice.
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rest.as_ptr() == other.rest.as_ptr()
    }
}

impl<'a, T: Clone> Source for SliceSource<'a, T> {
    type Item = T;
    type Category = RandomAccess;

    #[inline(always)]
    fn step(&mut self) {
        debug_assert!(
            !self.rest.is_empty(),
            "SliceSource stepped past the end of its slice"
        );
        self.rest = &self.rest[1..];
    }

    #[inline(always)]
    fn read(&self) -> T {
        self.rest[0].clone()
    }
}

impl<'a, T: Clone> Span for SliceSource<'a, T> {
    #[inline(always)]
    fn distance_to(&self, last: &Self) -> usize {
        debug_assert!(
            self.rest.len() >= last.rest.len(),
            "`distance_to` called with an unreachable target position"
        );
        self.rest.len() - last.rest.len()
    }
}

/// An advancing write head over an exclusive slice.
///
/// Writing past the destination's end is a contract violation: debug
/// builds assert, release builds silently discard the value.
///
/// # Examples
///
/// ```rust
/// # use kedge::cursor::slice::SliceSink;
/// # use kedge::cursor::traits::Sink;
/// let mut buf = [0; 3];
/// let mut sink = SliceSink::new(&mut buf);
/// sink.put(5);
/// sink.put(6);
/// assert_eq!(sink.into_remainder().len(), 1);
/// assert_eq!(buf, [5, 6, 0]);
/// ```
pub struct SliceSink<'a, T> {
    slots: core::slice::IterMut<'a, T>,
}

impl<'a, T> SliceSink<'a, T> {
    /// Creates a write head at the start of `slice`.
    #[inline]
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            slots: slice.iter_mut(),
        }
    }

    /// Number of slots left before the head reaches the end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.slots.len()
    }

    /// Consumes the head, returning the not-yet-written tail of the
    /// destination. After a copy of `n` elements this is the
    /// destination advanced by `n`.
    #[inline]
    pub fn into_remainder(self) -> &'a mut [T] {
        self.slots.into_slice()
    }
}

impl<'a, T> Sink for SliceSink<'a, T> {
    type Item = T;

    #[inline(always)]
    fn put(&mut self, value: T) {
        if let Some(slot) = self.slots.next() {
            *slot = value;
        } else {
            debug_assert!(false, "SliceSink written past the end of its slice");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_endpoints_of_empty_slice_are_equal() {
        let empty: [u32; 0] = [];
        let (first, last) = SliceSource::range(&empty);
        assert!(first == last);
    }

    #[test]
    fn test_stepping_reaches_the_end_position() {
        let data = [1u8, 2, 3];
        let (mut first, last) = SliceSource::range(&data);

        let mut seen = Vec::new();
        while first != last {
            seen.push(first.read());
            first.step();
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(first == last);
    }

    #[test]
    fn test_distance_shrinks_with_each_step() {
        let data = [0i64; 5];
        let (mut first, last) = SliceSource::range(&data);

        assert_eq!(first.distance_to(&last), 5);
        first.step();
        first.step();
        assert_eq!(first.distance_to(&last), 3);
        assert_eq!(last.distance_to(&last), 0);
    }

    #[test]
    fn test_cursors_into_different_positions_are_unequal() {
        let data = [7u16, 8];
        let (first, last) = SliceSource::range(&data);
        let mut mid = first;
        mid.step();

        assert!(first != mid);
        assert!(mid != last);
    }

    #[test]
    fn test_sink_writes_in_order_and_exposes_remainder() {
        let mut buf = [0u32; 4];
        let mut sink = SliceSink::new(&mut buf);

        sink.put(1);
        sink.put(2);
        assert_eq!(sink.remaining(), 2);

        let rest = sink.into_remainder();
        assert_eq!(rest.len(), 2);
        rest[0] = 9;

        assert_eq!(buf, [1, 2, 9, 0]);
    }

    #[test]
    fn test_sink_over_non_copy_elements() {
        let mut buf = vec![String::new(), String::new()];
        let mut sink = SliceSink::new(&mut buf);

        sink.put(String::from("a"));
        sink.put(String::from("b"));
        assert_eq!(buf, vec!["a", "b"]);
    }
}
