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

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::SingleStep {}
    impl Sealed for super::RandomAccess {}
}

/// A traversal category tag.
///
/// Sealed: the library defines exactly two tiers and algorithms are
/// written against that closed set.
pub trait Traversal: sealed::Sealed {}

/// Category tag for cursors supporting only single forward steps and
/// position equality.
#[derive(Debug, Clone, Copy)]
pub struct SingleStep;

/// Category tag for cursors that can additionally compute the distance
/// between two positions in O(1).
///
/// A source cursor declaring this category must implement
/// [`crate::cursor::traits::Span`]; the counted fast paths are
/// unreachable without it.
#[derive(Debug, Clone, Copy)]
pub struct RandomAccess;

impl Traversal for SingleStep {}
impl Traversal for RandomAccess {}
