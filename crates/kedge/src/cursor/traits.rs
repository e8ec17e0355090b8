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

use crate::cursor::category::Traversal;

/// A read position over a sequence.
///
/// Two cursors of the same type delimit a half-open range
/// `[first, last)`. Position equality is the only relation between
/// cursors the generic algorithms rely on; an ordering between
/// positions is deliberately not required, since single-step cursors
/// need not have one.
///
/// # Contract
///
/// For a range `[first, last)` handed to any algorithm in this crate,
/// `last` must be reachable from `first` by a finite, non-negative
/// number of `step` calls. This is never validated; violating it loops
/// until a cursor implementation panics or forever.
pub trait Source: Clone + PartialEq {
    /// Element type produced by this cursor.
    type Item;

    /// Compile-time traversal category of this cursor type.
    type Category: Traversal;

    /// Advances the cursor by one element.
    ///
    /// Must not be called on a past-the-end position.
    fn step(&mut self);

    /// Reads the element under the cursor.
    ///
    /// Must not be called on a past-the-end position.
    fn read(&self) -> Self::Item;
}

/// An advancing write head over a destination.
///
/// Each `put` stores one element and moves the head forward. Sinks do
/// not expose their bound; having capacity for every written element
/// is the caller's contract.
pub trait Sink {
    /// Element type accepted by this sink.
    type Item;

    /// Writes `value` at the current position and advances by one.
    fn put(&mut self, value: Self::Item);
}

/// Random-access capability of a source cursor.
///
/// Implemented by every cursor whose `Category` is
/// [`crate::cursor::category::RandomAccess`]. The distance is the trip
/// count the counted fast paths run with, so it must agree exactly
/// with the number of `step` calls separating the two positions.
pub trait Span: Source {
    /// Number of forward steps from `self` to `last`.
    ///
    /// `last` must be reachable from `self`.
    fn distance_to(&self, last: &Self) -> usize;
}
