// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error produced while resolving an index expression, or while
/// constructing an array.
#[derive(Clone, Debug)]
pub struct IndexError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
    msg: String,
}

impl IndexError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Return the context message of this error.
    pub fn message(&self) -> &str
    {
        &self.msg
    }
}

/// Error code for an error related to indexing.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind
{
    /// more index slots specified than the array has axes
    Rank,
    /// an integer index falls outside its axis after negative wrap-around
    OutOfBounds,
    /// a boolean mask does not match the shape of the axes it indexes
    ShapeMismatch,
    /// coordinate arrays can not be broadcast to a common shape
    Broadcast,
    /// an index element of an unsupported kind
    InvalidIndex,
    /// reorder was asked to drop an axis whose length is not 1
    DanglingAxis,
    /// data and shape do not agree when constructing an array
    IncompatibleShape,
}

impl ErrorKind
{
    fn description(self) -> &'static str
    {
        match self {
            ErrorKind::Rank => "too many indices for array",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::ShapeMismatch => "mask shape mismatch",
            ErrorKind::Broadcast => "shape mismatch: indexing arrays could not be broadcast together",
            ErrorKind::InvalidIndex => "invalid index",
            ErrorKind::DanglingAxis => "dropped axis does not have length 1",
            ErrorKind::IncompatibleShape => "incompatible shapes",
        }
    }
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> IndexError
{
    IndexError {
        repr: k,
        msg: String::new(),
    }
}

pub(crate) fn with_msg(k: ErrorKind, msg: impl Into<String>) -> IndexError
{
    let mut e = from_kind(k);
    e.msg = msg.into();
    e
}

impl PartialEq for IndexError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Error for IndexError {}

impl fmt::Display for IndexError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        if self.msg.is_empty() {
            f.write_str(self.repr.description())
        } else {
            write!(f, "{}: {}", self.repr.description(), self.msg)
        }
    }
}

pub(crate) fn too_many_indices(ndim: usize, specified: usize) -> IndexError
{
    with_msg(
        ErrorKind::Rank,
        format!("expected at most {} dimensions but found {}", ndim, specified),
    )
}

pub(crate) fn index_out_of_bounds(index: isize, axis: usize, len: usize) -> IndexError
{
    with_msg(
        ErrorKind::OutOfBounds,
        format!("index {} is out of bounds for axis {} with size {}", index, axis, len),
    )
}

pub(crate) fn mask_mismatch(mask: &[usize], axes: &[usize]) -> IndexError
{
    with_msg(
        ErrorKind::ShapeMismatch,
        format!("mask shape {:?} does not match array axes {:?}", mask, axes),
    )
}

pub(crate) fn incompatible_broadcast(a: &[usize], b: &[usize]) -> IndexError
{
    with_msg(ErrorKind::Broadcast, format!("shapes {:?} and {:?}", a, b))
}

pub(crate) fn invalid_index(got: &str) -> IndexError
{
    with_msg(
        ErrorKind::InvalidIndex,
        format!(
            "only integers, slices, ellipsis, new axis and integer or boolean arrays \
             are valid indices (got {})",
            got
        ),
    )
}

pub(crate) fn dangling_axis(axis: usize, len: usize) -> IndexError
{
    with_msg(
        ErrorKind::DanglingAxis,
        format!("axis {} of length {} is missing from the order", axis, len),
    )
}

pub(crate) fn incompatible_shape(shape: &[usize], len: usize) -> IndexError
{
    with_msg(
        ErrorKind::IncompatibleShape,
        format!("shape {:?} does not fit {} elements", shape, len),
    )
}
