// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::sync::Arc;

use crate::dimension::{co_broadcast, default_strides, is_layout_c, stride_offset};
use crate::error::{incompatible_broadcast, IndexError};
use crate::{Array, Ix, Ixs, Iter};

impl<A> Array<A>
{
    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize
    {
        self.dim.iter().product()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize
    {
        self.dim.len()
    }

    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[Ix]
    {
        &self.dim
    }

    /// Return the strides of the array as a slice, in elements.
    pub fn strides(&self) -> &[Ixs]
    {
        &self.strides
    }

    /// Return the position of the first element in the storage buffer.
    pub fn offset(&self) -> usize
    {
        self.offset
    }

    /// Return `true` if `self` and `other` are views of the same storage.
    ///
    /// ```
    /// use ndindex::{idx, Array};
    ///
    /// let a = Array::from_vec(vec![1, 2, 3]);
    /// let b = a.at(idx![1..]).unwrap();
    /// assert!(b.shares_storage(&a));
    /// ```
    pub fn shares_storage(&self, other: &Array<A>) -> bool
    {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    pub fn get(&self, index: &[Ix]) -> Option<&A>
    {
        if index.len() != self.ndim() || index.iter().zip(&self.dim).any(|(&i, &d)| i >= d) {
            return None;
        }
        Some(self.uget(index))
    }

    /// Element at `index`, which must be in bounds.
    #[inline]
    pub(crate) fn uget(&self, index: &[Ix]) -> &A
    {
        debug_assert!(index.len() == self.ndim());
        let off = index
            .iter()
            .zip(&self.strides)
            .fold(self.offset as isize, |acc, (&i, &s)| acc + stride_offset(i, s));
        &self.data[off as usize]
    }

    /// Return an iterator of references to the elements of the array, in
    /// logical row major order.
    pub fn iter(&self) -> Iter<'_, A>
    {
        Iter::new(self)
    }

    /// Return the elements in logical row major order.
    pub fn to_vec(&self) -> Vec<A>
    where A: Clone
    {
        self.iter().cloned().collect()
    }

    /// Call `f` by reference on each element and create a new, contiguous
    /// array with the new values.
    pub fn map<'a, B, F>(&'a self, f: F) -> Array<B>
    where F: FnMut(&'a A) -> B
    {
        let v = self.iter().map(f).collect();
        Array::from_parts(Arc::new(v), 0, self.dim.clone(), default_strides(&self.dim))
    }

    /// Return `true` if the array data is laid out in contiguous “C order” in
    /// memory (where the last index is the most rapidly varying).
    pub fn is_standard_layout(&self) -> bool
    {
        is_layout_c(&self.dim, &self.strides)
    }

    /// Return a copy of the array in standard layout, in a fresh buffer.
    pub fn to_standard_layout(&self) -> Array<A>
    where A: Clone
    {
        self.map(A::clone)
    }

    /// Return a view of the array broadcast to `shape`.
    ///
    /// Axes are matched from the back. An axis of length 1 is repeated with
    /// stride 0, and missing leading axes are added with stride 0.
    ///
    /// **Errors** if the array can not be broadcast to `shape`.
    pub fn broadcast_to(&self, shape: &[Ix]) -> Result<Array<A>, IndexError>
    {
        let common = co_broadcast(&self.dim, shape)?;
        if common != shape {
            return Err(incompatible_broadcast(&self.dim, shape));
        }
        let k = shape.len() - self.ndim();
        let mut strides = vec![0; shape.len()];
        for ((st, &d), (&sd, &ss)) in strides[k..]
            .iter_mut()
            .zip(&shape[k..])
            .zip(self.dim.iter().zip(&self.strides))
        {
            *st = if sd == d { ss } else { 0 };
        }
        Ok(self.with_layout(shape.to_vec(), strides, self.offset))
    }

    /// A view of the same storage with a new layout.
    pub(crate) fn with_layout(&self, dim: Vec<Ix>, strides: Vec<Ixs>, offset: usize) -> Array<A>
    {
        Array::from_parts(Arc::clone(&self.data), offset, dim, strides)
    }
}

impl<A, B> PartialEq<Array<B>> for Array<A>
where A: PartialEq<B>
{
    /// Return `true` if the array shapes and all elements of `self` and
    /// `rhs` are equal. Return `false` otherwise.
    fn eq(&self, rhs: &Array<B>) -> bool
    {
        self.shape() == rhs.shape() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Eq> Eq for Array<A> {}

impl<A: fmt::Debug> fmt::Debug for Array<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Array")
            .field("shape", &self.dim)
            .field("strides", &self.strides)
            .field("offset", &self.offset)
            .field("data", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
