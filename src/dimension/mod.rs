// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride arithmetic shared by the array and the primitives.

use num_integer::Integer;

use crate::error::{incompatible_shape, IndexError};
use crate::slice::Slice;
use crate::{Ix, Ixs};

pub use self::broadcast::{broadcast_shapes, co_broadcast};

mod broadcast;

/// Calculate offset from `Ix` stride converting sign properly
#[inline(always)]
pub fn stride_offset(n: Ix, stride: Ixs) -> isize
{
    (n as isize) * stride
}

/// Returns the number of elements of `shape`, checking that the product does
/// not overflow `isize`.
pub fn size_of_shape_checked(shape: &[Ix]) -> Result<usize, IndexError>
{
    let size = shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| incompatible_shape(shape, usize::MAX))?;
    if size > isize::MAX as usize {
        Err(incompatible_shape(shape, size))
    } else {
        Ok(size)
    }
}

/// Strides of a contiguous array in row-major ("C") order.
///
/// Shape (a, b, c) => strides (b * c, c, 1)
pub fn default_strides(shape: &[Ix]) -> Vec<Ixs>
{
    let mut strides = vec![0; shape.len()];
    // an empty array keeps all-zero strides
    if shape.iter().any(|&d| d == 0) {
        return strides;
    }
    let mut cum_prod = 1;
    for (s, &d) in strides.iter_mut().zip(shape).rev() {
        *s = cum_prod as Ixs;
        cum_prod *= d;
    }
    strides
}

/// Strides of a contiguous array in column-major ("F") order.
///
/// Shape (a, b, c) => strides (1, a, a * b)
pub fn fortran_strides(shape: &[Ix]) -> Vec<Ixs>
{
    let mut strides = vec![0; shape.len()];
    if shape.iter().any(|&d| d == 0) {
        return strides;
    }
    let mut cum_prod = 1;
    for (s, &d) in strides.iter_mut().zip(shape) {
        *s = cum_prod as Ixs;
        cum_prod *= d;
    }
    strides
}

/// Return `true` if `strides` describe a row-major contiguous layout of
/// `shape`. Axes of length 1 may have any stride.
pub fn is_layout_c(shape: &[Ix], strides: &[Ixs]) -> bool
{
    if shape.iter().any(|&d| d == 0) {
        return true;
    }
    let mut contig = 1;
    for (&d, &s) in shape.iter().zip(strides).rev() {
        if d != 1 && s != contig {
            return false;
        }
        contig *= d as Ixs;
    }
    true
}

/// Wrap a possibly negative `index` into `0..len`.
///
/// Returns `None` if the index is out of bounds after wrapping.
#[inline]
pub fn abs_index(len: Ix, index: Ixs) -> Option<Ix>
{
    let i = if index < 0 { index + len as Ixs } else { index };
    if i < 0 || i >= len as Ixs {
        None
    } else {
        Some(i as Ix)
    }
}

/// Resolve `slice` against an axis of length `len`, clamping its bounds the
/// way a Python slice does.
///
/// Returns `(start, count, step)`: the first selected index, the number of
/// selected elements and the step. `start` is 0 when nothing is selected.
///
/// **Panics** if the step is zero.
pub fn to_abs_slice(len: Ix, slice: Slice) -> (Ix, Ix, Ixs)
{
    let Slice { start, end, step } = slice;
    assert_ne!(step, 0, "Slice step must be nonzero");
    let n = len as Ixs;
    let (lower, upper) = if step < 0 { (-1, n - 1) } else { (0, n) };
    let clamp = |i: Ixs| {
        if i < 0 {
            (i + n).max(lower)
        } else {
            i.min(upper)
        }
    };
    let start = match start {
        Some(i) => clamp(i),
        None if step < 0 => upper,
        None => lower,
    };
    let stop = match end {
        Some(i) => clamp(i),
        None if step < 0 => lower,
        None => upper,
    };
    // both bounds lie in `-1..=n`, so the distance fits in `Ix`
    let count = if step > 0 && stop > start {
        Integer::div_ceil(&((stop - start) as Ix), &step.unsigned_abs())
    } else if step < 0 && start > stop {
        Integer::div_ceil(&((start - stop) as Ix), &step.unsigned_abs())
    } else {
        0
    };
    if count == 0 {
        (0, 0, step)
    } else {
        (start as Ix, count, step)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn strides()
    {
        assert_eq!(default_strides(&[3, 4, 5]), vec![20, 5, 1]);
        assert_eq!(fortran_strides(&[3, 4, 5]), vec![1, 3, 12]);
        assert_eq!(default_strides(&[3, 0, 5]), vec![0, 0, 0]);
        assert_eq!(default_strides(&[]), Vec::<isize>::new());
        assert!(is_layout_c(&[3, 1, 5], &[5, 100, 1]));
        assert!(!is_layout_c(&[3, 5], &[1, 3]));
    }

    #[test]
    fn size_overflow()
    {
        assert_eq!(size_of_shape_checked(&[2, 3, 4]).unwrap(), 24);
        assert_eq!(size_of_shape_checked(&[]).unwrap(), 1);
        assert!(size_of_shape_checked(&[usize::MAX, 2]).is_err());
    }

    #[test]
    fn wrap_index()
    {
        assert_eq!(abs_index(4, 3), Some(3));
        assert_eq!(abs_index(4, -4), Some(0));
        assert_eq!(abs_index(4, 4), None);
        assert_eq!(abs_index(4, -5), None);
        assert_eq!(abs_index(0, 0), None);
    }

    #[test]
    fn python_slices()
    {
        // a[1:]
        assert_eq!(to_abs_slice(5, Slice::from(1..)), (1, 4, 1));
        // a[-2:]
        assert_eq!(to_abs_slice(5, Slice::from(-2..)), (3, 2, 1));
        // a[::2]
        assert_eq!(to_abs_slice(5, Slice::from(..).step_by(2)), (0, 3, 2));
        // a[::-1]
        assert_eq!(to_abs_slice(5, Slice::from(..).step_by(-1)), (4, 5, -1));
        // a[3:0:-1]
        assert_eq!(to_abs_slice(5, Slice::new(Some(3), Some(0), -1)), (3, 3, -1));
        // a[10:20]
        assert_eq!(to_abs_slice(5, Slice::from(10..20)), (0, 0, 1));
        // a[-10:2]
        assert_eq!(to_abs_slice(5, Slice::from(-10..2)), (0, 2, 1));
        // a[::-1] on an empty axis
        assert_eq!(to_abs_slice(0, Slice::from(..).step_by(-1)), (0, 0, -1));
        // extreme steps and bounds
        assert_eq!(to_abs_slice(5, Slice::new(None, None, isize::MAX)), (0, 1, isize::MAX));
        assert_eq!(to_abs_slice(5, Slice::new(None, None, isize::MIN)), (4, 1, isize::MIN));
        assert_eq!(to_abs_slice(5, Slice::new(Some(isize::MIN), Some(isize::MAX), 2)), (0, 3, 2));
        assert_eq!(to_abs_slice(5, Slice::new(Some(isize::MAX), Some(isize::MIN), -2)), (4, 3, -2));
    }
}
