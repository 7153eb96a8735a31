// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::Ix;

/// An iterator over the indexes of an array shape, in row major order.
///
/// Iterator element type is `Vec<Ix>`.
#[derive(Clone, Debug)]
pub struct Indices
{
    dim: Vec<Ix>,
    index: Option<Vec<Ix>>,
}

/// Create an iterable of the array shape `shape`.
///
/// ```
/// use ndindex::indices;
///
/// let ix: Vec<_> = indices(&[2, 2]).collect();
/// assert_eq!(ix, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
pub fn indices(shape: &[Ix]) -> Indices
{
    Indices {
        index: first_index(shape),
        dim: shape.to_vec(),
    }
}

fn first_index(dim: &[Ix]) -> Option<Vec<Ix>>
{
    if dim.iter().any(|&d| d == 0) {
        None
    } else {
        Some(vec![0; dim.len()])
    }
}

/// Step `index` to the next index of `dim`; return `false` when the
/// iteration wrapped around.
#[inline]
pub(crate) fn next_for(dim: &[Ix], index: &mut [Ix]) -> bool
{
    for (&d, i) in dim.iter().zip(index.iter_mut()).rev() {
        *i += 1;
        if *i < d {
            return true;
        }
        *i = 0;
    }
    false
}

impl Iterator for Indices
{
    type Item = Vec<Ix>;

    #[inline]
    fn next(&mut self) -> Option<Vec<Ix>>
    {
        let index = self.index.as_mut()?;
        let current = index.clone();
        if !next_for(&self.dim, index) {
            self.index = None;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let l = match self.index {
            None => 0,
            Some(ref ix) => {
                let mut gone = 0;
                let mut stride = 1;
                for (&d, &i) in self.dim.iter().zip(ix).rev() {
                    gone += i * stride;
                    stride *= d;
                }
                stride - gone
            }
        };
        (l, Some(l))
    }
}

impl ExactSizeIterator for Indices {}
