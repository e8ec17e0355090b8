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

/// Exchanges the values stored in `a` and `b`.
///
/// Each location ends up holding the other's original value. The
/// exchange is performed in place through the exclusive borrows; no
/// `Clone` or `Copy` bound is required, and the two locations cannot
/// alias under Rust's borrowing rules.
///
/// # Examples
///
/// ```rust
/// # use kedge::swap;
/// let mut a = 1;
/// let mut b = 2;
/// swap(&mut a, &mut b);
/// assert_eq!((a, b), (2, 1));
/// ```
#[inline(always)]
pub fn swap<T>(a: &mut T, b: &mut T) {
    core::mem::swap(a, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_exchanges_values() {
        let mut a = 10u64;
        let mut b = 20u64;

        swap(&mut a, &mut b);
        assert_eq!(a, 20);
        assert_eq!(b, 10);
    }

    #[test]
    fn test_swap_of_equal_values_is_stable() {
        let mut a = 7;
        let mut b = 7;

        swap(&mut a, &mut b);
        assert_eq!(a, 7);
        assert_eq!(b, 7);
    }

    #[test]
    fn test_swap_of_non_copy_values() {
        let mut a = String::from("left");
        let mut b = String::from("right");

        swap(&mut a, &mut b);
        assert_eq!(a, "right");
        assert_eq!(b, "left");
    }

    #[test]
    fn test_swap_of_slice_elements() {
        let mut v = [1, 2, 3, 4];
        let (head, tail) = v.split_at_mut(2);

        swap(&mut head[0], &mut tail[1]);
        assert_eq!(v, [4, 2, 3, 1]);
    }
}
