// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/ndindex/0.1/")]
#![allow(clippy::many_single_char_names, clippy::len_without_is_empty)]

//! The `ndindex` crate resolves NumPy style index expressions against
//! n-dimensional strided arrays.
//!
//! An index expression mixes integers, slices, [`Ellipsis`], [`NewAxis`],
//! boolean masks and integer coordinate arrays. Resolving it produces a new
//! [`Array`] that is a **view** sharing storage with the source when only
//! basic indices (integers, slices, ellipsis, new axes) are used, and a fresh
//! **copy** as soon as an advanced index (mask or coordinate array) is
//! involved.
//!
//! Resolution runs in three steps, always in this order:
//!
//! 1. [`prim::slice_axes`] applies integers and slices as a strided view,
//! 2. [`prim::gather`] copies the elements addressed by the broadcast
//!    coordinate arrays,
//! 3. [`prim::reorder`] permutes axes, dropping collapsed length-1 axes and
//!    inserting new ones, again as a view.
//!
//! ```
//! use ndindex::{idx, Array, Ellipsis, NewAxis};
//!
//! let t = Array::from_shape_vec(vec![3, 4, 5], (0..60).collect()).unwrap();
//!
//! // basic indexing is a view
//! let v = t.at(idx![1.., .., 3]).unwrap();
//! assert_eq!(v.shape(), &[2, 4]);
//! assert!(v.shares_storage(&t));
//!
//! // advanced indexing is a copy
//! let g = t.at(idx![Ellipsis, vec![0, 2], NewAxis]).unwrap();
//! assert_eq!(g.shape(), &[3, 4, 2, 1]);
//! assert!(!g.shares_storage(&t));
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default.
//! - `approx`: approximate equality of arrays through the `approx` traits.

use std::sync::Arc;

pub use crate::error::{ErrorKind, IndexError};
pub use crate::indexes::{indices, Indices};
pub use crate::iterators::Iter;
pub use crate::normalize::MAX_SEQUENCE_AS_TUPLE;
pub use crate::order::Order;
pub use crate::resolve::resolve;
pub use crate::slice::{Ellipsis, IndexElem, IndexExpr, NewAxis, Slice};

#[macro_use]
mod slice;
mod dimension;
mod error;
mod impl_constructors;
mod impl_methods;
mod indexes;
mod iterators;
mod mask;
mod normalize;
mod order;
mod plan;
pub mod prim;
mod resolve;

#[cfg(feature = "approx")]
mod array_approx;

/// Array index type
pub type Ix = usize;
/// Array index type (signed)
pub type Ixs = isize;

/// An n-dimensional strided array with shared, reference counted storage.
///
/// An `Array` is a shape, a list of strides (in elements, possibly negative
/// or zero) and an offset into a flat element buffer. Cloning an array, or
/// taking any view of it, shares the buffer; the elements are never mutated
/// once the buffer is shared.
///
/// ## Indexing
///
/// See [`Array::at`] and [`resolve`].
pub struct Array<A>
{
    data: Arc<Vec<A>>,
    offset: usize,
    dim: Vec<Ix>,
    strides: Vec<Ixs>,
}

impl<A> Clone for Array<A>
{
    /// Return an alias of the array, sharing its storage.
    fn clone(&self) -> Self
    {
        Array {
            data: Arc::clone(&self.data),
            offset: self.offset,
            dim: self.dim.clone(),
            strides: self.strides.clone(),
        }
    }
}
