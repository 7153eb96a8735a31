use tracing::trace;

use crate::dimension::broadcast_shapes;
use crate::error::IndexError;
use crate::mask::{expand_masks, Expanded};
use crate::normalize::normalize;
use crate::plan::{build_plan, Plan};
use crate::prim::{gather, reorder, slice_axes};
use crate::{Array, IndexExpr};

/// Resolve the index expression `index` against `array`.
///
/// Integers, slices, [`NewAxis`](crate::NewAxis) and
/// [`Ellipsis`](crate::Ellipsis) give a view of `array`. Masks and coordinate
/// arrays (advanced indices) give a copy; their broadcast shape replaces the
/// axes they index, at the position of the first advanced index, or at the
/// front of the result when the advanced indices are separated by a slice or
/// a new axis.
///
/// A bare sequence (a `Vec` passed on its own) is read as a tuple of per-axis
/// elements when it is shorter than 32 elements and holds a slice, new axis,
/// ellipsis, array or nested sequence; otherwise it is one coordinate or
/// mask array.
///
/// The result is never `array` itself; an index that selects everything
/// returns an alias sharing storage.
///
/// **Errors** with
///
/// - [`ErrorKind::Rank`](crate::ErrorKind::Rank) if the expression indexes
///   more axes than `array` has
/// - [`ErrorKind::OutOfBounds`](crate::ErrorKind::OutOfBounds) if an integer
///   or coordinate is out of bounds
/// - [`ErrorKind::ShapeMismatch`](crate::ErrorKind::ShapeMismatch) if a mask
///   does not match the axes it covers
/// - [`ErrorKind::Broadcast`](crate::ErrorKind::Broadcast) if the advanced
///   indices can not be broadcast together
/// - [`ErrorKind::InvalidIndex`](crate::ErrorKind::InvalidIndex) for a second
///   ellipsis, a zero step or a malformed nested sequence
///
/// ```
/// use ndindex::{idx, resolve, Array};
///
/// let t = Array::from_shape_vec(vec![3, 4, 5], (0..60).collect()).unwrap();
/// let i = Array::from_vec(vec![0, 2]);
/// let r = resolve(&t, idx![i.clone(), .., i]).unwrap();
/// assert_eq!(r.shape(), &[2, 4]);
/// ```
pub fn resolve<A, I>(array: &Array<A>, index: I) -> Result<Array<A>, IndexError>
where
    A: Clone,
    I: Into<IndexExpr>,
{
    let slots = normalize(index.into(), array.ndim())?;
    let Expanded { slots, align } = expand_masks(slots, array.shape())?;
    let Plan {
        slice_dims,
        slices,
        gather_dims,
        gather_coords,
        mut permute,
        insert_point,
    } = build_plan(slots)?;

    // the latest intermediate; `None` until a primitive has run
    let mut result: Option<Array<A>> = None;
    if let Some(order) = align {
        trace!(?order, "align zero-dimensional masks");
        result = Some(reorder(array, &order)?);
    }
    if !slice_dims.is_empty() {
        let sliced = slice_axes(result.as_ref().unwrap_or(array), &slice_dims, &slices)?;
        result = Some(sliced);
    }
    if !gather_dims.is_empty() {
        let nd = broadcast_shapes(gather_coords.iter().map(|c| c.shape()))?.len();
        let gathered = gather(result.as_ref().unwrap_or(array), &gather_dims, &gather_coords)?;
        for axis in permute.iter_mut().flatten() {
            *axis += nd;
        }
        permute.splice(insert_point..insert_point, (0..nd).map(Some));
        result = Some(gathered);
    }

    let current = result.as_ref().unwrap_or(array);
    let identity = permute.len() == current.ndim() && permute.iter().enumerate().all(|(i, &p)| p == Some(i));
    if !identity {
        let reordered = reorder(current, &permute)?;
        result = Some(reordered);
    }
    Ok(result.unwrap_or_else(|| array.clone()))
}

impl<A: Clone> Array<A>
{
    /// Index the array with `index`; see [`resolve`].
    ///
    /// ```
    /// use ndindex::{idx, Array, NewAxis};
    ///
    /// let a = Array::from_shape_vec(vec![2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(a.at(1).unwrap().to_vec(), vec![4, 5, 6]);
    /// assert_eq!(a.at(idx![.., -1]).unwrap().to_vec(), vec![3, 6]);
    /// assert_eq!(a.at(idx![NewAxis, 0]).unwrap().shape(), &[1, 3]);
    /// ```
    pub fn at<I>(&self, index: I) -> Result<Array<A>, IndexError>
    where I: Into<IndexExpr>
    {
        resolve(self, index)
    }
}
