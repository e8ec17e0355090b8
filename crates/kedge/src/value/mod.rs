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

//! # Element Classification
//!
//! Type-level facts about element types, consumed by the bulk
//! operations in `algorithm` to select their code path at compile
//! time. A type's classification is an associated type, not a runtime
//! value, so the selection costs nothing and cannot be overridden per
//! call.
//!
//! ## Classification
//!
//! Every element type usable with the bulk operations implements
//! [`Value`] and names one of three sealed assignment-mode tags:
//!
//! - [`General`]: assignment may have observable effects (class-like
//!   types). Bulk operations must perform one real clone assignment
//!   per destination element.
//! - [`Scalar`]: assignment is a trivial, side-effect-free copy
//!   (numeric and pointer-like types). Bulk operations may read the
//!   source value once and then store plain copies.
//! - [`ByteWide`]: scalar and exactly one byte wide. Bulk fills may
//!   collapse to a single byte-set over the destination storage.
//!
//! All primitive numeric types, `bool`, `char`, and raw pointers are
//! classified here. Downstream element types opt in with a one-line
//! `impl`, picking the weakest tag their assignment semantics allow.
//!
//! ## Usage
//!
//! ```rust
//! use kedge::value::{General, Value};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Label(u32);
//!
//! impl Value for Label {
//!     type Assign = General;
//! }
//!
//! let mut labels = [Label(0), Label(0), Label(0)];
//! kedge::fill(&mut labels, Label(7));
//! assert_eq!(labels, [Label(7), Label(7), Label(7)]);
//! ```

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::General {}
    impl Sealed for super::Scalar {}
    impl Sealed for super::ByteWide {}
}

/// Assignment-mode tag for types whose assignment may have observable
/// effects.
///
/// Bulk operations over `General` elements invoke one clone assignment
/// per destination element and never cache the source value.
#[derive(Debug, Clone, Copy)]
pub struct General;

/// Assignment-mode tag for types with trivial, side-effect-free copy
/// assignment.
#[derive(Debug, Clone, Copy)]
pub struct Scalar;

/// Assignment-mode tag for trivially copyable types that occupy exactly
/// one storage byte.
///
/// Types carrying this tag must also implement [`ByteRepr`]; bulk fills
/// over them reduce to a byte-set over the destination storage.
#[derive(Debug, Clone, Copy)]
pub struct ByteWide;

/// A type-level assignment classification fact.
///
/// Implemented only by [`General`], [`Scalar`], and [`ByteWide`]; the
/// trait is sealed and the set of modes is fixed.
pub trait AssignMode: sealed::Sealed {}

impl AssignMode for General {}
impl AssignMode for Scalar {}
impl AssignMode for ByteWide {}

/// An element type usable with the bulk operations of this crate.
///
/// The associated `Assign` type names the assignment mode of the type.
/// It is a compile-time fact: the bulk operations resolve their code
/// path from it during monomorphization, with no runtime branch.
///
/// Picking a mode is a semantic promise. `Scalar` asserts that
/// assignment of the type is a plain copy with no observable effects;
/// `ByteWide` additionally asserts a one-byte representation (enforced
/// through the [`ByteRepr`] bound on the byte fill path). When in
/// doubt, `General` is always correct, only slower.
///
/// # Examples
///
/// ```rust
/// # use kedge::value::{General, Value};
/// #[derive(Clone)]
/// struct Audit(u64);
///
/// impl Value for Audit {
///     type Assign = General;
/// }
/// ```
pub trait Value: Clone {
    /// Compile-time assignment classification of this type.
    type Assign: AssignMode;
}

/// One-byte-wide values usable with bulk byte fills.
///
/// This is the narrower query layered on top of the scalar
/// classification: a type may be scalar without being byte-wide, but
/// every `ByteWide` type must provide its byte representation here.
///
/// # Safety
///
/// Implementors must occupy exactly one storage byte, and `byte_repr`
/// must return the value's exact representation. The bulk fill path
/// writes that byte over raw destination storage and relies on both
/// guarantees.
pub unsafe trait ByteRepr: Copy {
    /// The value's byte representation.
    fn byte_repr(self) -> u8;
}

unsafe impl ByteRepr for u8 {
    #[inline(always)]
    fn byte_repr(self) -> u8 {
        self
    }
}

unsafe impl ByteRepr for i8 {
    #[inline(always)]
    fn byte_repr(self) -> u8 {
        self as u8
    }
}

macro_rules! impl_scalar_value {
    ($t:ty) => {
        impl Value for $t {
            type Assign = Scalar;
        }
    };
}

macro_rules! impl_byte_value {
    ($t:ty) => {
        impl Value for $t {
            type Assign = ByteWide;
        }
    };
}

impl_byte_value!(u8);
impl_byte_value!(i8);

impl_scalar_value!(u16);
impl_scalar_value!(u32);
impl_scalar_value!(u64);
impl_scalar_value!(u128);
impl_scalar_value!(usize);

impl_scalar_value!(i16);
impl_scalar_value!(i32);
impl_scalar_value!(i64);
impl_scalar_value!(i128);
impl_scalar_value!(isize);

impl_scalar_value!(f32);
impl_scalar_value!(f64);

impl_scalar_value!(bool);
impl_scalar_value!(char);

impl<T> Value for *const T {
    type Assign = Scalar;
}

impl<T> Value for *mut T {
    type Assign = Scalar;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_repr_is_identity_for_u8() {
        assert_eq!(0x00u8.byte_repr(), 0x00);
        assert_eq!(0xABu8.byte_repr(), 0xAB);
        assert_eq!(u8::MAX.byte_repr(), 0xFF);
    }

    #[test]
    fn test_byte_repr_preserves_i8_bits() {
        assert_eq!(0i8.byte_repr(), 0x00);
        assert_eq!((-1i8).byte_repr(), 0xFF);
        assert_eq!(i8::MIN.byte_repr(), 0x80);
        assert_eq!(i8::MAX.byte_repr(), 0x7F);
    }

    #[test]
    fn test_classification_resolves_for_primitives() {
        // Compile-time checks: the named mode must match the impl.
        fn assert_mode<T: Value<Assign = M>, M: AssignMode>() {}

        assert_mode::<u8, ByteWide>();
        assert_mode::<i8, ByteWide>();
        assert_mode::<u64, Scalar>();
        assert_mode::<char, Scalar>();
        assert_mode::<*const u8, Scalar>();
    }
}
