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

//! # Traversal Model
//!
//! Cursors describe positions over sequences. A read range is a pair
//! of [`traits::Source`] cursors `[first, last)`: `first` must reach
//! `last` after finitely many forward steps, a contract the library
//! never validates. Write destinations are advancing
//! [`traits::Sink`] heads; under Rust's exclusive borrows a mutable
//! range is a single object, not a cursor pair.
//!
//! Every source cursor type carries a compile-time traversal category,
//! one of exactly two tiers:
//!
//! - `SingleStep`: single forward steps and position equality only.
//! - `RandomAccess`: additionally O(1) distance between positions,
//!   exposed through [`traits::Span`].
//!
//! Algorithms dispatch on the category tag at compile time; the tiers
//! must be observably identical and differ only in performance.
//!
//! ## Submodules
//!
//! - `category`: The sealed category tags.
//! - `traits`: The `Source`, `Sink`, and `Span` cursor traits.
//! - `slice`: Slice-backed cursors (`SliceSource`, `SliceSink`), the
//!   random-access tier over contiguous storage.
//! - `adapter`: `StepOnly`, a wrapper that demotes any source to the
//!   single-step tier.

pub mod adapter;
pub mod category;
pub mod slice;
pub mod traits;
