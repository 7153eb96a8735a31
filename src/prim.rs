// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The array primitives index resolution is built from.
//!
//! [`slice_axes`] and [`reorder`] only ever produce views of their input;
//! [`gather`] always copies into fresh storage.

use std::sync::Arc;

use tracing::trace;

use crate::dimension::{abs_index, broadcast_shapes, default_strides, stride_offset, to_abs_slice};
use crate::error::{dangling_axis, index_out_of_bounds, with_msg, ErrorKind, IndexError};
use crate::{indices, Array, Ix, Slice};

/// A slice or an index, as applied by [`slice_axes`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SliceOrIndex
{
    /// A range with step size.
    Slice(Slice),
    /// A single index; negative indices count from the back of the axis.
    Index(isize),
}

impl From<Slice> for SliceOrIndex
{
    #[inline]
    fn from(s: Slice) -> SliceOrIndex
    {
        SliceOrIndex::Slice(s)
    }
}

impl From<isize> for SliceOrIndex
{
    #[inline]
    fn from(i: isize) -> SliceOrIndex
    {
        SliceOrIndex::Index(i)
    }
}

/// Slice `array` along each axis of `dims` with the corresponding entry of
/// `slices`.
///
/// An index selects a single element and leaves an axis of length 1 in its
/// place; the number of axes never changes. The result is a view of `array`.
///
/// **Errors** if an index is out of bounds after negative wrap-around, or if a
/// slice has step zero.<br>
/// **Panics** if `dims` and `slices` differ in length or an axis is out of
/// bounds.
///
/// ```
/// use ndindex::Array;
/// use ndindex::prim::{slice_axes, SliceOrIndex};
/// use ndindex::Slice;
///
/// let t = Array::<f32>::zeros(vec![3, 4, 5]).unwrap();
/// let v = slice_axes(&t, &[0, 2], &[Slice::from(1..).into(), SliceOrIndex::Index(3)]).unwrap();
/// assert_eq!(v.shape(), &[2, 4, 1]);
/// ```
pub fn slice_axes<A>(array: &Array<A>, dims: &[usize], slices: &[SliceOrIndex]) -> Result<Array<A>, IndexError>
{
    assert_eq!(dims.len(), slices.len(), "slice_axes: one slice per axis");
    trace!(?dims, ?slices, "slice");
    let mut dim = array.shape().to_vec();
    let mut strides = array.strides().to_vec();
    let mut offset = array.offset() as isize;
    for (&axis, &slice) in dims.iter().zip(slices) {
        let len = dim[axis];
        let slice = match slice {
            SliceOrIndex::Index(i) => {
                let i = abs_index(len, i).ok_or_else(|| index_out_of_bounds(i, axis, len))? as isize;
                Slice::new(Some(i), Some(i + 1), 1)
            }
            SliceOrIndex::Slice(s) if s.step == 0 => {
                return Err(with_msg(ErrorKind::InvalidIndex, "slice step cannot be zero"));
            }
            SliceOrIndex::Slice(s) => s,
        };
        let (start, count, step) = to_abs_slice(len, slice);
        offset += stride_offset(start, strides[axis]);
        dim[axis] = count;
        // the stride of an axis with at most one element is never walked
        if count > 1 {
            strides[axis] = strides[axis]
                .checked_mul(step)
                .ok_or_else(|| with_msg(ErrorKind::InvalidIndex, "slice step overflows the axis stride"))?;
        }
    }
    Ok(array.with_layout(dim, strides, offset as usize))
}

/// Broadcast all `arrays` to their common shape, as views.
///
/// **Errors** if the shapes are not compatible.
pub fn broadcast_arrays<A>(arrays: &[Array<A>]) -> Result<Vec<Array<A>>, IndexError>
{
    let shape = broadcast_shapes(arrays.iter().map(|a| a.shape()))?;
    arrays.iter().map(|a| a.broadcast_to(&shape)).collect()
}

/// Return the coordinates of the `true` elements of `mask`: one array per
/// axis of the mask, each as long as there are `true` elements, in row major
/// order.
///
/// ```
/// use ndindex::Array;
/// use ndindex::prim::nonzero;
///
/// let m = Array::from_shape_vec(vec![2, 2], vec![false, true, true, false]).unwrap();
/// let c = nonzero(&m);
/// assert_eq!(c[0].to_vec(), vec![0, 1]);
/// assert_eq!(c[1].to_vec(), vec![1, 0]);
/// ```
pub fn nonzero(mask: &Array<bool>) -> Vec<Array<isize>>
{
    let mut coords = vec![Vec::new(); mask.ndim()];
    for (ix, &m) in indices(mask.shape()).zip(mask.iter()) {
        if m {
            for (c, &i) in coords.iter_mut().zip(&ix) {
                c.push(i as isize);
            }
        }
    }
    coords.into_iter().map(Array::from_vec).collect()
}

/// Gather elements of `array`: the coordinate arrays in `coords` select,
/// element by element, a position along the corresponding axis of `dims`.
///
/// The coordinate arrays are broadcast together to a shape `B`. The result
/// is a new array of shape `[*B, *kept]` where `kept` is the shape of `array`
/// with every gathered axis replaced by 1, so for each `b` in `B`:
///
/// ```text
/// result[b, ..] = array[.., coords[0][b], .., coords[1][b], ..]
/// ```
///
/// Coordinates may be negative, counting from the back of their axis.
///
/// **Errors** if the coordinate arrays can not be broadcast together, or a
/// coordinate is out of bounds.<br>
/// **Panics** if `dims` and `coords` differ in length or an axis is out of
/// bounds.
///
/// ```
/// use ndindex::Array;
/// use ndindex::prim::gather;
///
/// let t = Array::from_shape_vec(vec![2, 3], vec![0, 1, 2, 3, 4, 5]).unwrap();
/// let g = gather(&t, &[1], &[Array::from_vec(vec![2, 0])]).unwrap();
/// assert_eq!(g.shape(), &[2, 2, 1]);
/// assert_eq!(g.to_vec(), vec![2, 5, 0, 3]);
/// ```
pub fn gather<A>(array: &Array<A>, dims: &[usize], coords: &[Array<isize>]) -> Result<Array<A>, IndexError>
where A: Clone
{
    assert_eq!(dims.len(), coords.len(), "gather: one coordinate array per axis");
    let coords = broadcast_arrays(coords)?;
    let bshape: Vec<Ix> = match coords.first() {
        Some(c) => c.shape().to_vec(),
        None => Vec::new(),
    };
    trace!(?dims, broadcast_shape = ?bshape, "gather");

    let shape = array.shape();
    let strides = array.strides();
    let mut bases = Vec::new();
    for ix in indices(&bshape) {
        let mut off = array.offset() as isize;
        for (&axis, c) in dims.iter().zip(&coords) {
            let i = *c.uget(&ix);
            let len = shape[axis];
            let i = abs_index(len, i).ok_or_else(|| index_out_of_bounds(i, axis, len))?;
            off += stride_offset(i, strides[axis]);
        }
        bases.push(off);
    }

    let kept: Vec<Ix> = (0..array.ndim())
        .map(|axis| if dims.contains(&axis) { 1 } else { shape[axis] })
        .collect();
    let inner: Vec<isize> = indices(&kept)
        .map(|ix| ix.iter().zip(strides).map(|(&i, &s)| stride_offset(i, s)).sum())
        .collect();

    let mut data = Vec::with_capacity(bases.len() * inner.len());
    for &base in &bases {
        for &off in &inner {
            data.push(array.data[(base + off) as usize].clone());
        }
    }
    let mut out_shape = bshape;
    out_shape.extend(kept);
    let out_strides = default_strides(&out_shape);
    Ok(Array::from_parts(Arc::new(data), 0, out_shape, out_strides))
}

/// Reorder the axes of `array` like a permutation, where `order` lists the
/// source axis for each result axis, extended to add and remove axes of
/// length 1:
///
/// - a source axis missing from `order` must have length 1 and is dropped
/// - a `None` creates a new axis of length 1 (with stride 0)
///
/// The result is a view of `array`.
///
/// **Errors** if a missing axis does not have length 1, or if an axis
/// appears more than once in `order`.<br>
/// **Panics** if an axis in `order` is out of bounds.
///
/// ```
/// use ndindex::Array;
/// use ndindex::prim::reorder;
///
/// let t = Array::<f32>::zeros(vec![2, 1, 5, 3]).unwrap();
/// let r = reorder(&t, &[Some(0), Some(3), Some(2), None]).unwrap();
/// assert_eq!(r.shape(), &[2, 3, 5, 1]);
/// ```
pub fn reorder<A>(array: &Array<A>, order: &[Option<usize>]) -> Result<Array<A>, IndexError>
{
    trace!(?order, "reorder");
    let shape = array.shape();
    let strides = array.strides();
    let mut seen = vec![false; shape.len()];
    for &axis in order.iter().flatten() {
        if std::mem::replace(&mut seen[axis], true) {
            return Err(with_msg(
                ErrorKind::InvalidIndex,
                format!("axis {} repeated in the order {:?}", axis, order),
            ));
        }
    }
    for (axis, &len) in shape.iter().enumerate() {
        if len != 1 && !seen[axis] {
            return Err(dangling_axis(axis, len));
        }
    }
    let (dim, strides) = order
        .iter()
        .map(|&o| match o {
            Some(axis) => (shape[axis], strides[axis]),
            None => (1, 0),
        })
        .unzip();
    Ok(array.with_layout(dim, strides, array.offset()))
}
