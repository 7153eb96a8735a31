// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `Array`.

use std::sync::Arc;

use num_traits::Zero;

use crate::dimension::size_of_shape_checked;
use crate::error::{incompatible_shape, IndexError};
use crate::{indices, Array, Ix, Ixs, Order};

impl<A> Array<A>
{
    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// ```rust
    /// use ndindex::Array;
    ///
    /// let array = Array::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(array.shape(), &[4]);
    /// ```
    pub fn from_vec(v: Vec<A>) -> Self
    {
        let len = v.len();
        Self::from_parts(Arc::new(v), 0, vec![len], vec![1])
    }

    /// Create a one-dimensional array from an iterable.
    pub fn from_iter<I>(iterable: I) -> Self
    where I: IntoIterator<Item = A>
    {
        Self::from_vec(iterable.into_iter().collect())
    }

    /// Create an array with the given shape from a vector in row major
    /// order (no copying needed).
    ///
    /// **Errors** if the shape does not correspond to the number of elements
    /// in `v`.
    ///
    /// ```rust
    /// use ndindex::Array;
    ///
    /// let a = Array::from_shape_vec(vec![2, 2], vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a.get(&[1, 0]), Some(&3.));
    /// ```
    pub fn from_shape_vec(shape: Vec<Ix>, v: Vec<A>) -> Result<Self, IndexError>
    {
        Self::from_shape_vec_order(shape, v, Order::C)
    }

    /// Create an array with the given shape from a vector laid out in
    /// `order`.
    ///
    /// **Errors** if the shape does not correspond to the number of elements
    /// in `v`.
    pub fn from_shape_vec_order(shape: Vec<Ix>, v: Vec<A>, order: Order) -> Result<Self, IndexError>
    {
        let size = size_of_shape_checked(&shape)?;
        if size != v.len() {
            return Err(incompatible_shape(&shape, v.len()));
        }
        let strides = order.strides_for(&shape);
        Ok(Self::from_parts(Arc::new(v), 0, shape, strides))
    }

    /// Create an array with the given shape, calling `f` with each index in
    /// row major order.
    ///
    /// **Errors** if the number of elements overflows `isize`.
    pub fn from_shape_fn<F>(shape: Vec<Ix>, mut f: F) -> Result<Self, IndexError>
    where F: FnMut(&[Ix]) -> A
    {
        size_of_shape_checked(&shape)?;
        let v = indices(&shape).map(|ix| f(&ix)).collect();
        Self::from_shape_vec(shape, v)
    }

    /// Create an array with the given shape with every element set to
    /// `elem`.
    ///
    /// **Errors** if the number of elements overflows `isize`.
    pub fn from_elem(shape: Vec<Ix>, elem: A) -> Result<Self, IndexError>
    where A: Clone
    {
        let size = size_of_shape_checked(&shape)?;
        Self::from_shape_vec(shape, vec![elem; size])
    }

    /// Create an array of zeros with the given shape.
    ///
    /// **Errors** if the number of elements overflows `isize`.
    pub fn zeros(shape: Vec<Ix>) -> Result<Self, IndexError>
    where A: Clone + Zero
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create a zero-dimensional array holding `elem`.
    pub fn scalar(elem: A) -> Self
    {
        Self::from_parts(Arc::new(vec![elem]), 0, Vec::new(), Vec::new())
    }

    pub(crate) fn from_parts(data: Arc<Vec<A>>, offset: usize, dim: Vec<Ix>, strides: Vec<Ixs>) -> Self
    {
        debug_assert_eq!(dim.len(), strides.len());
        Array {
            data,
            offset,
            dim,
            strides,
        }
    }
}
