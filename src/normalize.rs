//! Turning a raw index expression into one slot per consumed or inserted
//! axis.

use crate::error::{invalid_index, too_many_indices, with_msg, ErrorKind, IndexError};
use crate::{Array, IndexElem, IndexExpr, Ix, Slice};

/// Sequences at least this long are never read as a tuple of per-axis
/// elements.
pub const MAX_SEQUENCE_AS_TUPLE: usize = 32;

/// Return `true` if a bare sequence is to be read as a tuple of per-axis
/// elements rather than as one coordinate or mask array.
///
/// This is NumPy's disambiguation rule: short sequences that hold a slice,
/// a new axis, an ellipsis, an array or another sequence are tuples.
pub(crate) fn treat_sequence_as_tuple(seq: &[IndexElem]) -> bool
{
    seq.len() < MAX_SEQUENCE_AS_TUPLE
        && seq.iter().any(|x| {
            matches!(
                x,
                IndexElem::NewAxis
                    | IndexElem::Ellipsis
                    | IndexElem::Slice(_)
                    | IndexElem::Mask(_)
                    | IndexElem::Coords(_)
                    | IndexElem::Seq(_)
            )
        })
}

pub(crate) fn wrap_tuple(index: IndexExpr) -> Vec<IndexElem>
{
    match index {
        IndexExpr::Tuple(v) => v,
        IndexExpr::Single(IndexElem::Seq(v)) if treat_sequence_as_tuple(&v) => v,
        IndexExpr::Single(elem) => vec![elem],
    }
}

/// Coerce nested sequences into arrays and scalar booleans into
/// zero-dimensional masks.
pub(crate) fn wrap_sequences(elem: IndexElem) -> Result<IndexElem, IndexError>
{
    match elem {
        IndexElem::Seq(v) => seq_to_array(v),
        IndexElem::Bool(b) => Ok(IndexElem::Mask(Array::scalar(b))),
        elem => Ok(elem),
    }
}

#[derive(Copy, Clone)]
enum Leaf
{
    Int(isize),
    Bool(bool),
}

#[derive(Default)]
struct Nested
{
    shape: Vec<Ix>,
    leaves: Vec<Leaf>,
    leaf_rank: Option<usize>,
}

fn ragged() -> IndexError
{
    with_msg(ErrorKind::InvalidIndex, "nested sequence is not rectangular")
}

impl Nested
{
    fn collect(&mut self, elems: Vec<IndexElem>, depth: usize) -> Result<(), IndexError>
    {
        if self.shape.len() == depth {
            self.shape.push(elems.len());
        } else if self.shape[depth] != elems.len() {
            return Err(ragged());
        }
        for elem in elems {
            let leaf = match elem {
                IndexElem::Seq(inner) => {
                    if self.leaf_rank.map_or(false, |r| r <= depth + 1) {
                        return Err(ragged());
                    }
                    self.collect(inner, depth + 1)?;
                    continue;
                }
                IndexElem::Index(i) => Leaf::Int(i),
                IndexElem::Bool(b) => Leaf::Bool(b),
                other => return Err(invalid_index(other.kind_name())),
            };
            match self.leaf_rank {
                None => self.leaf_rank = Some(depth + 1),
                Some(r) if r != depth + 1 => return Err(ragged()),
                Some(_) => {}
            }
            self.leaves.push(leaf);
        }
        Ok(())
    }
}

/// Convert a nested sequence into a mask (all leaves boolean) or a
/// coordinate array. An empty sequence is an empty coordinate array.
fn seq_to_array(v: Vec<IndexElem>) -> Result<IndexElem, IndexError>
{
    let mut nested = Nested::default();
    nested.collect(v, 0)?;
    let Nested { shape, leaves, leaf_rank } = nested;
    if leaf_rank.map_or(false, |r| r != shape.len()) {
        return Err(ragged());
    }
    let all_bool = !leaves.is_empty() && leaves.iter().all(|l| matches!(l, Leaf::Bool(_)));
    if all_bool {
        let v = leaves.into_iter().map(|l| matches!(l, Leaf::Bool(true))).collect();
        Ok(IndexElem::Mask(Array::from_shape_vec(shape, v)?))
    } else {
        let v = leaves
            .into_iter()
            .map(|l| match l {
                Leaf::Int(i) => i,
                Leaf::Bool(b) => b as isize,
            })
            .collect();
        Ok(IndexElem::Coords(Array::from_shape_vec(shape, v)?))
    }
}

/// Number of source axes an element consumes.
pub(crate) fn n_specified(elem: &IndexElem) -> usize
{
    match elem {
        IndexElem::NewAxis | IndexElem::Ellipsis | IndexElem::Bool(_) => 0,
        IndexElem::Mask(m) => m.ndim(),
        _ => 1,
    }
}

/// Replace the first ellipsis (or the end of the tuple) with as many full
/// slices as there are axes left unindexed.
pub(crate) fn expand_ellipsis(mut index: Vec<IndexElem>, ndim: usize) -> Result<Vec<IndexElem>, IndexError>
{
    let specified: usize = index.iter().map(n_specified).sum();
    if specified > ndim {
        return Err(too_many_indices(ndim, specified));
    }
    let to_pad = ndim - specified;
    let padding = (0..to_pad).map(|_| IndexElem::Slice(Slice::from(..)));
    match index.iter().position(|e| matches!(e, IndexElem::Ellipsis)) {
        Some(pos) => {
            index.splice(pos..=pos, padding);
        }
        None => index.extend(padding),
    }
    Ok(index)
}

/// Canonical slot sequence of `index` against an array of `ndim` axes.
pub(crate) fn normalize(index: IndexExpr, ndim: usize) -> Result<Vec<IndexElem>, IndexError>
{
    let index = wrap_tuple(index)
        .into_iter()
        .map(wrap_sequences)
        .collect::<Result<Vec<_>, _>>()?;
    expand_ellipsis(index, ndim)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{Ellipsis, NewAxis};

    fn kinds(slots: &[IndexElem]) -> Vec<&'static str>
    {
        slots.iter().map(IndexElem::kind_name).collect()
    }

    #[test]
    fn sequence_heuristic()
    {
        let plain: Vec<IndexElem> = vec![1.into(), 2.into()];
        assert!(!treat_sequence_as_tuple(&plain));
        let with_slice: Vec<IndexElem> = vec![1.into(), (..).into()];
        assert!(treat_sequence_as_tuple(&with_slice));
        let nested: Vec<IndexElem> = vec![vec![0, 1].into()];
        assert!(treat_sequence_as_tuple(&nested));
        let long: Vec<IndexElem> = (0..MAX_SEQUENCE_AS_TUPLE)
            .map(|_| IndexElem::from(NewAxis))
            .collect();
        assert!(!treat_sequence_as_tuple(&long));
    }

    #[test]
    fn plain_list_is_one_coordinate_array()
    {
        let slots = normalize(vec![0, 2, 1].into(), 2).unwrap();
        assert_eq!(kinds(&slots), ["integer array", "slice"]);
        match &slots[0] {
            IndexElem::Coords(c) => assert_eq!(c.to_vec(), vec![0, 2, 1]),
            other => panic!("unexpected {}", other),
        }
    }

    #[test]
    fn list_with_slice_is_a_tuple()
    {
        let expr = IndexExpr::from(vec![IndexElem::from(1), IndexElem::from(..)]);
        let slots = normalize(expr, 3).unwrap();
        assert_eq!(kinds(&slots), ["integer", "slice", "slice"]);
    }

    #[test]
    fn nested_sequences()
    {
        match wrap_sequences(vec![vec![true, false], vec![false, true]].into()).unwrap() {
            IndexElem::Mask(m) => assert_eq!(m.shape(), &[2, 2]),
            other => panic!("unexpected {}", other),
        }
        match wrap_sequences(Vec::<i32>::new().into()).unwrap() {
            IndexElem::Coords(c) => assert_eq!(c.shape(), &[0]),
            other => panic!("unexpected {}", other),
        }
        let ragged = wrap_sequences(vec![vec![1, 2], vec![3]].into()).unwrap_err();
        assert_eq!(ragged.kind(), ErrorKind::InvalidIndex);
        let mixed_depth = IndexElem::Seq(vec![1.into(), vec![2].into()]);
        assert!(wrap_sequences(mixed_depth).is_err());
        let bad = IndexElem::Seq(vec![IndexElem::from(1), IndexElem::from(1..2)]);
        assert_eq!(wrap_sequences(bad).unwrap_err().kind(), ErrorKind::InvalidIndex);
    }

    #[test]
    fn ellipsis_expansion()
    {
        let slots = normalize(idx![1, Ellipsis, NewAxis, 2], 4).unwrap();
        assert_eq!(kinds(&slots), ["integer", "slice", "slice", "new axis", "integer"]);
        let slots = normalize(idx![NewAxis], 2).unwrap();
        assert_eq!(kinds(&slots), ["new axis", "slice", "slice"]);
        // only the first ellipsis is expanded
        let slots = normalize(idx![Ellipsis, 0, Ellipsis], 2).unwrap();
        assert_eq!(kinds(&slots), ["slice", "integer", "ellipsis"]);
    }

    #[test]
    fn too_many_indices()
    {
        let e = normalize(idx![0, 0, 0], 2).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Rank);
        // a mask counts its own rank, a scalar bool counts nothing
        let mask = Array::from_elem(vec![2, 2], true).unwrap();
        assert!(normalize(idx![mask.clone(), 0], 2).is_err());
        assert!(normalize(idx![mask, true], 2).is_ok());
    }
}
