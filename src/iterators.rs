use crate::indexes::next_for;
use crate::{Array, Ix};

/// An iterator over the elements of an array, in logical row major order.
///
/// Created with [`Array::iter`].
pub struct Iter<'a, A>
{
    array: &'a Array<A>,
    index: Option<Vec<Ix>>,
    len: usize,
}

impl<'a, A> Iter<'a, A>
{
    pub(crate) fn new(array: &'a Array<A>) -> Self
    {
        let len = array.len();
        Iter {
            array,
            index: if len == 0 { None } else { Some(vec![0; array.ndim()]) },
            len,
        }
    }
}

impl<'a, A> Iterator for Iter<'a, A>
{
    type Item = &'a A;

    #[inline]
    fn next(&mut self) -> Option<&'a A>
    {
        let index = self.index.as_mut()?;
        let elt = self.array.uget(index);
        if !next_for(self.array.shape(), index) {
            self.index = None;
        }
        self.len -= 1;
        Some(elt)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.len, Some(self.len))
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> Clone for Iter<'a, A>
{
    fn clone(&self) -> Self
    {
        Iter {
            array: self.array,
            index: self.index.clone(),
            len: self.len,
        }
    }
}
