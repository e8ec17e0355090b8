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

//! # Range Fill
//!
//! Assigns one value across a destination range, with the loop shape
//! selected at compile time from the element type's assignment mode:
//!
//! - `General`: one clone assignment per destination element, reading
//!   from the original value each time. Types whose assignment has
//!   observable effects see exactly one assignment per slot.
//! - `Scalar`: the value is materialized into a local once, before the
//!   loop, and plain copies are stored from there. Legal only because
//!   scalar assignment is trivial; it removes the per-iteration
//!   indirection through the source value.
//! - `ByteWide`: the loop disappears entirely. One-byte elements are
//!   written with a single bulk byte-set over the destination storage,
//!   using the value's byte representation as the fill byte.
//!
//! All three paths must produce bit-identical destinations for the
//! types they share; the narrower paths are performance
//! specializations, never behavior changes.

use crate::value::{AssignMode, ByteRepr, ByteWide, General, Scalar, Value};

/// Selects the fill loop for an assignment mode.
///
/// Implemented for the three sealed mode tags. The trait appears in
/// the bounds of [`fill`] and [`fill_n`] and resolves during
/// monomorphization; callers never select a path explicitly.
pub trait FillPolicy<T>: AssignMode
where
    T: Value,
{
    /// Assigns `value` to every slot of `dst`.
    fn fill_slice(dst: &mut [T], value: &T);
}

impl<T> FillPolicy<T> for General
where
    T: Value<Assign = General>,
{
    #[inline]
    fn fill_slice(dst: &mut [T], value: &T) {
        for slot in dst {
            slot.clone_from(value);
        }
    }
}

impl<T> FillPolicy<T> for Scalar
where
    T: Value<Assign = Scalar> + Copy,
{
    #[inline]
    fn fill_slice(dst: &mut [T], value: &T) {
        let tmp = *value;
        for slot in dst {
            *slot = tmp;
        }
    }
}

impl<T> FillPolicy<T> for ByteWide
where
    T: Value<Assign = ByteWide> + ByteRepr,
{
    #[inline]
    fn fill_slice(dst: &mut [T], value: &T) {
        // The bulk primitive is not defined for every empty-range
        // representation; an explicit guard is required here.
        if dst.is_empty() {
            return;
        }
        let byte = value.byte_repr();
        // SAFETY: `dst` is a valid exclusive slice, and `ByteRepr`
        // guarantees `T` occupies exactly one byte, so writing
        // `dst.len()` copies of `byte` starting at the base pointer
        // stays within the slice.
        unsafe {
            core::ptr::write_bytes(dst.as_mut_ptr(), byte, dst.len());
        }
    }
}

/// Assigns `value` to every element of `dst`.
///
/// The slice is the half-open destination range; an empty slice is a
/// no-op. The code path is chosen at compile time from `T`'s
/// assignment mode (see the module documentation), and the observable
/// result never depends on the path taken.
///
/// # Examples
///
/// ```rust
/// # use kedge::fill;
/// let mut buf = [0u8; 4];
/// fill(&mut buf, 7);
/// assert_eq!(buf, [7, 7, 7, 7]);
///
/// let mut none: [u8; 0] = [];
/// fill(&mut none, 7);
/// ```
#[inline]
pub fn fill<T>(dst: &mut [T], value: T)
where
    T: Value,
    T::Assign: FillPolicy<T>,
{
    <T::Assign as FillPolicy<T>>::fill_slice(dst, &value);
}

/// Assigns `value` to the first `n` elements of `dst` and returns the
/// remainder of the slice (the destination advanced by `n`).
///
/// `n == 0` writes nothing and returns the full slice. Dispatch is
/// identical to [`fill`].
///
/// # Panics
///
/// Panics if `n > dst.len()`; the count is a caller contract.
///
/// # Examples
///
/// ```rust
/// # use kedge::fill_n;
/// let mut text = [b'.'; 6];
/// let rest = fill_n(&mut text, 4, b'x');
/// assert_eq!(rest.len(), 2);
/// assert_eq!(&text[..4], b"xxxx");
/// ```
#[inline]
pub fn fill_n<T>(dst: &mut [T], n: usize, value: T) -> &mut [T]
where
    T: Value,
    T::Assign: FillPolicy<T>,
{
    let (head, tail) = dst.split_at_mut(n);
    <T::Assign as FillPolicy<T>>::fill_slice(head, &value);
    tail
}
