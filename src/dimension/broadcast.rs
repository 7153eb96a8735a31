use crate::error::{incompatible_broadcast, IndexError};
use crate::Ix;

/// Calculate the common shape for a pair of array shapes, that they can be broadcasted
/// to. Return an error if the shapes are not compatible.
///
/// Uses the [NumPy broadcasting rules]
//  (https://docs.scipy.org/doc/numpy/user/basics.broadcasting.html#general-broadcasting-rules).
pub fn co_broadcast(shape1: &[Ix], shape2: &[Ix]) -> Result<Vec<Ix>, IndexError>
{
    let (k, overflow) = shape1.len().overflowing_sub(shape2.len());
    // Swap the order if shape2 is longer.
    if overflow {
        return co_broadcast(shape2, shape1);
    }
    // The output should be the same length as shape1.
    let mut out = shape1.to_vec();
    for (out, &s2) in out[k..].iter_mut().zip(shape2) {
        if *out != s2 {
            if *out == 1 {
                *out = s2
            } else if s2 != 1 {
                return Err(incompatible_broadcast(shape1, shape2));
            }
        }
    }
    Ok(out)
}

/// Fold `co_broadcast` over all `shapes`; the empty list broadcasts to the
/// zero-dimensional shape.
pub fn broadcast_shapes<'a, I>(shapes: I) -> Result<Vec<Ix>, IndexError>
where I: IntoIterator<Item = &'a [Ix]>
{
    shapes
        .into_iter()
        .try_fold(Vec::new(), |acc, shape| co_broadcast(&acc, shape))
}
