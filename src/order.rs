use crate::dimension::{default_strides, fortran_strides};
use crate::{Ix, Ixs};

/// Memory order of a flat element sequence laid out as an array.
///
/// Given a sequence like: 1, 2, 3, 4, 5, 6
///
/// If it is laid it out in a 2 x 3 array using row major ordering, it results in:
///
/// ```text
/// 1  2  3
/// 4  5  6
/// ```
///
/// If it is laid using column major ordering, it results in:
///
/// ```text
/// 1  3  5
/// 2  4  6
/// ```
///
/// Row major is called "C" order and column major "F" order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Order
{
    /// Row major or "C" order
    RowMajor,
    /// Column major or "F" order
    ColumnMajor,
}

impl Order
{
    /// "C" is an alias for row major ordering
    pub const C: Order = Order::RowMajor;

    /// "F" (for Fortran) is an alias for column major ordering
    pub const F: Order = Order::ColumnMajor;

    /// Contiguous strides of `shape` in this order.
    pub(crate) fn strides_for(self, shape: &[Ix]) -> Vec<Ixs>
    {
        match self {
            Order::RowMajor => default_strides(shape),
            Order::ColumnMajor => fortran_strides(shape),
        }
    }
}
