// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use num_traits::{ToPrimitive, Zero};

use crate::Array;

/// Convert an integer index to `isize`, saturating values that do not fit.
///
/// A saturated index is out of bounds for every axis, and a saturated slice
/// bound clamps to the end of the axis.
#[inline]
pub(crate) fn saturating_isize<T>(x: T) -> isize
where T: ToPrimitive + PartialOrd + Zero
{
    x.to_isize().unwrap_or(if x < T::zero() { isize::MIN } else { isize::MAX })
}

/// A slice (range with step size), with the semantics of a Python slice.
///
/// Negative `start` or `end` indexes are counted from the back of the axis.
/// Bounds are clamped to the axis. If `start` is `None` the slice starts at
/// the first element in walking direction; if `end` is `None` the slice
/// extends to the end of the axis in walking direction.
///
/// ## Examples
///
/// `Slice::new(None, None, 1)` is the full range of an axis. It can also be
/// created with `Slice::from(..)`. The Python equivalent is `[:]`.
///
/// `Slice::new(Some(a), Some(b), 2)` is every second element from `a` until
/// `b`. It can also be created with `Slice::from(a..b).step_by(2)`. The Python
/// equivalent is `[a:b:2]`.
///
/// `Slice::new(Some(a), None, -1)` is every element from `a` back to the
/// start of the axis. It can also be created with `Slice::from(a..).step_by(-1)`.
/// The Python equivalent is `[a::-1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice
{
    /// start index; negative are counted from the back of the axis
    pub start: Option<isize>,
    /// end index; negative are counted from the back of the axis; when not present
    /// the default is the full length of the axis.
    pub end: Option<isize>,
    /// step size in elements; the default is 1, for every element.
    pub step: isize,
}

impl Slice
{
    /// Create a new `Slice` with the given extents.
    ///
    /// See also the `From` impls, converting from ranges; for example
    /// `Slice::from(i..)` or `Slice::from(j..k)`.
    ///
    /// A zero `step` is rejected when the slice is applied.
    pub fn new(start: Option<isize>, end: Option<isize>, step: isize) -> Slice
    {
        Slice { start, end, step }
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size, saturating at the bounds of `isize`).
    #[inline]
    pub fn step_by(self, step: isize) -> Self
    {
        Slice {
            step: self.step.saturating_mul(step),
            ..self
        }
    }

    /// Return `true` if this is the trivial full range `[:]`.
    #[inline]
    pub fn is_full(&self) -> bool
    {
        self.start.is_none() && self.end.is_none() && self.step == 1
    }
}

impl fmt::Display for Slice
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        if let Some(start) = self.start {
            write!(f, "{}", start)?;
        }
        write!(f, ":")?;
        if let Some(end) = self.end {
            write!(f, "{}", end)?;
        }
        if self.step != 1 {
            write!(f, ":{}", self.step)?;
        }
        Ok(())
    }
}

macro_rules! impl_slice_from_index_type {
    ($index:ty) => {
        impl From<Range<$index>> for Slice
        {
            #[inline]
            fn from(r: Range<$index>) -> Slice
            {
                Slice::new(Some(saturating_isize(r.start)), Some(saturating_isize(r.end)), 1)
            }
        }

        impl From<RangeInclusive<$index>> for Slice
        {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Slice
            {
                let end = saturating_isize(*r.end());
                // `..=-1` includes the last element
                let end = if end == -1 { None } else { Some(end.saturating_add(1)) };
                Slice::new(Some(saturating_isize(*r.start())), end, 1)
            }
        }

        impl From<RangeFrom<$index>> for Slice
        {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Slice
            {
                Slice::new(Some(saturating_isize(r.start)), None, 1)
            }
        }

        impl From<RangeTo<$index>> for Slice
        {
            #[inline]
            fn from(r: RangeTo<$index>) -> Slice
            {
                Slice::new(None, Some(saturating_isize(r.end)), 1)
            }
        }

        impl From<RangeToInclusive<$index>> for Slice
        {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> Slice
            {
                let end = saturating_isize(r.end);
                Slice::new(None, if end == -1 { None } else { Some(end.saturating_add(1)) }, 1)
            }
        }
    };
}

impl_slice_from_index_type!(isize);
impl_slice_from_index_type!(usize);
impl_slice_from_index_type!(i32);

impl From<RangeFull> for Slice
{
    #[inline]
    fn from(_: RangeFull) -> Slice
    {
        Slice::new(None, None, 1)
    }
}

/// Token to represent a new axis in an index expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NewAxis;

/// Token standing for as many full slices as needed to index every axis.
///
/// At most one `Ellipsis` may appear in an index expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ellipsis;

/// One element of an index expression.
///
/// Elements are usually created through the `From` conversions, for example
/// from integers, ranges, [`Slice`], [`NewAxis`], [`Ellipsis`], `bool`,
/// boolean and integer arrays, and vectors of elements (nested sequences).
#[derive(Clone, Debug)]
pub enum IndexElem
{
    /// A range with step size, which keeps its axis.
    Slice(Slice),
    /// A single index, which collapses its axis.
    Index(isize),
    /// Stands for as many full slices as needed.
    Ellipsis,
    /// Inserts an axis of length 1.
    NewAxis,
    /// A scalar boolean; acts as a zero-dimensional mask.
    Bool(bool),
    /// A boolean mask over as many axes as it has dimensions.
    Mask(Array<bool>),
    /// An array of integer coordinates along one axis.
    Coords(Array<isize>),
    /// A nested sequence, coerced into a mask or coordinate array.
    Seq(Vec<IndexElem>),
}

impl IndexElem
{
    /// A short name of the element kind, for error messages.
    pub fn kind_name(&self) -> &'static str
    {
        match self {
            IndexElem::Slice(_) => "slice",
            IndexElem::Index(_) => "integer",
            IndexElem::Ellipsis => "ellipsis",
            IndexElem::NewAxis => "new axis",
            IndexElem::Bool(_) => "bool",
            IndexElem::Mask(_) => "boolean array",
            IndexElem::Coords(_) => "integer array",
            IndexElem::Seq(_) => "sequence",
        }
    }
}

impl fmt::Display for IndexElem
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            IndexElem::Slice(s) => write!(f, "{}", s),
            IndexElem::Index(i) => write!(f, "{}", i),
            IndexElem::Ellipsis => write!(f, "..."),
            IndexElem::NewAxis => write!(f, "None"),
            IndexElem::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            IndexElem::Mask(m) => write!(f, "<bool array {:?}>", m.shape()),
            IndexElem::Coords(c) => write!(f, "<int array {:?}>", c.shape()),
            IndexElem::Seq(v) => {
                write!(f, "[")?;
                for (i, e) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", e)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A whole index expression: either an explicit tuple of per-axis elements,
/// or a single element.
///
/// A single `Seq` element may still be treated as a tuple, see
/// [`resolve`](crate::resolve).
#[derive(Clone, Debug)]
pub enum IndexExpr
{
    /// An explicit tuple of elements, one per consumed or inserted axis.
    Tuple(Vec<IndexElem>),
    /// A single element.
    Single(IndexElem),
}

impl From<IndexElem> for IndexExpr
{
    fn from(elem: IndexElem) -> IndexExpr
    {
        IndexExpr::Single(elem)
    }
}

impl<T> From<Vec<T>> for IndexElem
where T: Into<IndexElem>
{
    fn from(v: Vec<T>) -> IndexElem
    {
        IndexElem::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Vec<T>> for IndexExpr
where T: Into<IndexElem>
{
    fn from(v: Vec<T>) -> IndexExpr
    {
        IndexExpr::Single(v.into())
    }
}

// Each conversion into `IndexElem` is mirrored as a single element
// `IndexExpr`.
macro_rules! impl_index_elem_from {
    ($($t:ty => |$x:ident| $e:expr;)*) => {
        $(
            impl From<$t> for IndexElem
            {
                #[inline]
                fn from($x: $t) -> IndexElem
                {
                    $e
                }
            }

            impl From<$t> for IndexExpr
            {
                #[inline]
                fn from(x: $t) -> IndexExpr
                {
                    IndexExpr::Single(IndexElem::from(x))
                }
            }
        )*
    };
}

impl_index_elem_from! {
    Slice => |s| IndexElem::Slice(s);
    NewAxis => |_x| IndexElem::NewAxis;
    Ellipsis => |_x| IndexElem::Ellipsis;
    bool => |b| IndexElem::Bool(b);
    isize => |i| IndexElem::Index(i);
    i32 => |i| IndexElem::Index(i as isize);
    i64 => |i| IndexElem::Index(saturating_isize(i));
    usize => |i| IndexElem::Index(saturating_isize(i));
    RangeFull => |r| IndexElem::Slice(r.into());
    Array<bool> => |m| IndexElem::Mask(m);
    Array<isize> => |c| IndexElem::Coords(c);
    Array<u8> => |m| {
        tracing::warn!("indexing with a u8 mask is deprecated, use a bool mask instead");
        IndexElem::Mask(m.map(|&x| x != 0))
    };
}

macro_rules! impl_index_elem_from_ranges {
    ($($index:ty),*) => {
        impl_index_elem_from! {
            $(
                Range<$index> => |r| IndexElem::Slice(r.into());
                RangeInclusive<$index> => |r| IndexElem::Slice(r.into());
                RangeFrom<$index> => |r| IndexElem::Slice(r.into());
                RangeTo<$index> => |r| IndexElem::Slice(r.into());
                RangeToInclusive<$index> => |r| IndexElem::Slice(r.into());
            )*
        }
    };
}

impl_index_elem_from_ranges!(isize, usize, i32);

macro_rules! impl_index_elem_from_coords {
    ($($int:ty),*) => {
        impl_index_elem_from! {
            $(
                Array<$int> => |c| IndexElem::Coords(c.map(|&x| saturating_isize(x)));
            )*
        }
    };
}

impl_index_elem_from_coords!(i8, i16, i32, i64, u16, u32, u64, usize);

/// Build an index expression as a tuple of elements.
///
/// Each argument is anything that converts into an [`IndexElem`]: integers,
/// ranges, [`Slice`], [`NewAxis`], [`Ellipsis`], `bool`, arrays and vectors.
///
/// ```
/// use ndindex::{idx, Array, Ellipsis, NewAxis, Slice};
///
/// let a = Array::from_shape_vec(vec![4, 6], (0..24).collect()).unwrap();
/// let b = a.at(idx![Slice::from(..).step_by(2), NewAxis, Ellipsis, -1]).unwrap();
/// assert_eq!(b.shape(), &[2, 1]);
/// assert_eq!(b.to_vec(), vec![5, 17]);
/// ```
#[macro_export]
macro_rules! idx {
    ($($e:expr),* $(,)?) => {
        $crate::IndexExpr::Tuple(vec![$(<$crate::IndexElem as ::core::convert::From<_>>::from($e)),*])
    };
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn range_conversions()
    {
        assert_eq!(Slice::from(..), Slice::new(None, None, 1));
        assert_eq!(Slice::from(2..5), Slice::new(Some(2), Some(5), 1));
        assert_eq!(Slice::from(..=-1), Slice::new(None, None, 1));
        assert_eq!(Slice::from(1..=3), Slice::new(Some(1), Some(4), 1));
        assert_eq!(Slice::from(1..).step_by(-2).step_by(2), Slice::new(Some(1), None, -4));
        assert_eq!(Slice::from(0..=isize::MAX), Slice::new(Some(0), Some(isize::MAX), 1));
        assert_eq!(Slice::from(..usize::MAX), Slice::new(None, Some(isize::MAX), 1));
        assert_eq!(Slice::from(..).step_by(isize::MIN).step_by(-1).step, isize::MAX);
        assert!(Slice::from(..).is_full());
        assert!(!Slice::from(0..).is_full());
    }

    #[test]
    fn display()
    {
        assert_eq!(Slice::from(1..).to_string(), "1:");
        assert_eq!(Slice::from(..3).step_by(2).to_string(), ":3:2");
        let e: IndexElem = vec![IndexElem::from(1), NewAxis.into(), Ellipsis.into()].into();
        assert_eq!(e.to_string(), "[1, None, ...]");
    }

    #[test]
    fn wide_integers_saturate()
    {
        assert_eq!(saturating_isize(usize::MAX), isize::MAX);
        assert_eq!(saturating_isize(u64::MAX), isize::MAX);
        assert_eq!(saturating_isize(i64::MIN), isize::MIN);
        assert_eq!(saturating_isize(7u64), 7);
        match IndexElem::from(Array::from_vec(vec![u64::MAX, 1])) {
            IndexElem::Coords(c) => assert_eq!(c.to_vec(), vec![isize::MAX, 1]),
            other => panic!("unexpected {}", other),
        }
    }

    #[test]
    fn byte_mask_becomes_bool()
    {
        let m = Array::from_vec(vec![0u8, 3, 1]);
        match IndexElem::from(m) {
            IndexElem::Mask(m) => assert_eq!(m.to_vec(), vec![false, true, true]),
            other => panic!("unexpected {}", other),
        }
    }
}
