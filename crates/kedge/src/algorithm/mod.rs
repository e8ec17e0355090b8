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

//! # Sequence Algorithms
//!
//! The operations of the crate, grouped by family. Each family is
//! stateless and independent of the others; what they share is the
//! contract style (caller-enforced preconditions, debug-only
//! assertions) and the compile-time dispatch machinery defined next to
//! the operations that use it.
//!
//! ## Submodules
//!
//! - `minmax`: Reference-returning `min` / `max` and their comparator
//!   forms. Ties resolve to the first argument.
//! - `exchange`: In-place value exchange.
//! - `copy`: Forward range copy with category dispatch between a
//!   sentinel-compared loop and a counted loop.
//! - `fill`: Range and counted fill with assignment-mode dispatch,
//!   including the bulk byte-set path for one-byte elements.
//! - `compare`: Range equality, predicate equality, and lexicographic
//!   ordering over single-step traversal.

pub mod compare;
pub mod copy;
pub mod exchange;
pub mod fill;
pub mod minmax;
