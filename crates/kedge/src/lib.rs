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

//! # Kedge
//!
//! Minimal sequence-algorithm primitives for freestanding targets. The
//! crate provides the small set of range operations that higher-level
//! containers and routines need when a full standard runtime is not
//! available: element comparison (`min`, `max`), value exchange
//! (`swap`), range copy (`copy`), range fill (`fill`, `fill_n`), and
//! range equality and ordering (`equal`, `equal_by`,
//! `lexicographical_compare`).
//!
//! The crate is `no_std`, never allocates, and reports no errors: all
//! preconditions are caller contracts, checked by debug assertions only.
//! Each operation picks its most efficient variant at compile time from
//! the traversal category of the cursors or the classification of the
//! element type. There is no runtime branching between variants and no
//! virtual dispatch; the selected tiers are required to produce
//! identical observable results, so the fast paths are pure
//! performance specializations.
//!
//! ## Modules
//!
//! - `cursor`: The traversal model. `Source`, `Sink`, and `Span`
//!   cursor traits, the `SingleStep` / `RandomAccess` category tags,
//!   slice-backed cursors, and the `StepOnly` demoting wrapper.
//! - `value`: Element classification. The `Value` trait reports, as a
//!   type-level fact, how a type may be assigned in bulk, and
//!   `ByteRepr` marks the one-byte-wide types eligible for bulk byte
//!   fills.
//! - `algorithm`: The operations themselves, one file per family,
//!   together with the policy traits that carry the compile-time
//!   dispatch.
//!
//! ## Usage
//!
//! ```rust
//! use kedge::{copy, equal, fill_n, SliceSink, SliceSource};
//!
//! let src = [1, 2, 3, 4, 5];
//! let mut dst = [0; 5];
//!
//! let (first, last) = SliceSource::range(&src);
//! let rest = copy(first, last, SliceSink::new(&mut dst)).into_remainder();
//! assert!(rest.is_empty());
//!
//! let (first, last) = SliceSource::range(&src);
//! assert!(equal(first, last, SliceSource::new(&dst)));
//!
//! let mut text = [b'.'; 6];
//! fill_n(&mut text, 4, b'x');
//! assert_eq!(&text, b"xxxx..");
//! ```

#![cfg_attr(not(test), no_std)]

pub mod algorithm;
pub mod cursor;
pub mod value;

pub use algorithm::compare::{equal, equal_by, lexicographical_compare};
pub use algorithm::copy::copy;
pub use algorithm::exchange::swap;
pub use algorithm::fill::{fill, fill_n};
pub use algorithm::minmax::{max, max_by, min, min_by};
pub use cursor::adapter::StepOnly;
pub use cursor::slice::{SliceSink, SliceSource};
pub use cursor::traits::{Sink, Source, Span};
pub use value::{ByteRepr, Value};
