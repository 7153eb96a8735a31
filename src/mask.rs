//! Rewriting boolean masks into integer coordinate arrays.
//!
//! A mask of rank k consumes the next k source axes and becomes k coordinate
//! arrays. A zero-dimensional mask consumes no source axis: it stands for a
//! new axis of length 1, inserted into the source at the mask's position,
//! which is then indexed by `[0]` (`true`) or `[]` (`false`).

use std::ops::Range;

use crate::error::{mask_mismatch, IndexError};
use crate::normalize::n_specified;
use crate::prim::{nonzero, reorder};
use crate::{IndexElem, Ix};

/// Source axes covered by one slot.
#[derive(Clone, Debug, PartialEq)]
enum Span
{
    /// Consumes these axes of the source.
    Axes(Range<usize>),
    /// A zero-dimensional mask: an axis inserted into the source.
    Inserted,
    /// Consumes nothing (new axis, or an unexpanded ellipsis).
    Nothing,
}

fn spans(slots: &[IndexElem]) -> Vec<Span>
{
    let mut axis = 0;
    slots
        .iter()
        .map(|slot| match slot {
            IndexElem::Mask(m) if m.ndim() == 0 => Span::Inserted,
            slot => match n_specified(slot) {
                0 => Span::Nothing,
                k => {
                    axis += k;
                    Span::Axes(axis - k..axis)
                }
            },
        })
        .collect()
}

/// The slot sequence after mask expansion.
#[derive(Debug)]
pub(crate) struct Expanded
{
    pub slots: Vec<IndexElem>,
    /// Reorder to apply to the source first so that every consuming slot
    /// lines up with one source axis; present only when zero-dimensional
    /// masks inserted axes.
    pub align: Option<Vec<Option<usize>>>,
}

/// Expand every mask in `slots`, checking each against the source `shape`.
///
/// `slots` must already be padded to consume every source axis.
pub(crate) fn expand_masks(slots: Vec<IndexElem>, shape: &[Ix]) -> Result<Expanded, IndexError>
{
    let spans = spans(&slots);
    let mut align = Vec::with_capacity(shape.len() + slots.len());
    let mut inserted = false;
    let mut out = Vec::with_capacity(slots.len());
    for (slot, span) in slots.into_iter().zip(spans) {
        match span {
            Span::Nothing => out.push(slot),
            Span::Inserted => {
                align.push(None);
                inserted = true;
                if let IndexElem::Mask(mask) = slot {
                    let mask = reorder(&mask, &[None])?;
                    out.extend(nonzero(&mask).into_iter().map(IndexElem::Coords));
                }
            }
            Span::Axes(axes) => {
                match slot {
                    IndexElem::Mask(mask) => {
                        let dims = &shape[axes.clone()];
                        if mask.shape() != dims {
                            return Err(mask_mismatch(mask.shape(), dims));
                        }
                        out.extend(nonzero(&mask).into_iter().map(IndexElem::Coords));
                    }
                    slot => out.push(slot),
                }
                align.extend(axes.map(Some));
            }
        }
    }
    let consumed = align.iter().filter(|a| a.is_some()).count();
    align.extend((consumed..shape.len()).map(Some));
    Ok(Expanded {
        slots: out,
        align: if inserted { Some(align) } else { None },
    })
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::normalize::normalize;
    use crate::{Array, ErrorKind, NewAxis};

    fn expand(index: crate::IndexExpr, shape: &[Ix]) -> Result<Expanded, IndexError>
    {
        expand_masks(normalize(index, shape.len())?, shape)
    }

    #[test]
    fn span_table()
    {
        let mask = Array::from_elem(vec![2, 3], true).unwrap();
        let slots = normalize(idx![NewAxis, true, 0, mask, false], 3).unwrap();
        assert_eq!(
            spans(&slots),
            vec![
                Span::Nothing,
                Span::Inserted,
                Span::Axes(0..1),
                Span::Axes(1..3),
                Span::Inserted
            ]
        );
    }

    #[test]
    fn mask_becomes_coordinates()
    {
        let mask = Array::from_shape_vec(vec![2, 2], vec![true, false, true, true]).unwrap();
        let e = expand(idx![mask], &[2, 2, 5]).unwrap();
        assert!(e.align.is_none());
        let coords: Vec<_> = e
            .slots
            .iter()
            .filter_map(|s| match s {
                IndexElem::Coords(c) => Some(c.to_vec()),
                _ => None,
            })
            .collect();
        assert_eq!(coords, vec![vec![0, 1, 1], vec![0, 0, 1]]);
        assert_eq!(e.slots.len(), 3);
    }

    #[test]
    fn mask_shape_must_match()
    {
        let mask = Array::from_elem(vec![2, 3], true).unwrap();
        let e = expand(idx![0, mask], &[2, 3, 2]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn scalar_masks_insert_axes()
    {
        let e = expand(idx![true], &[3, 4]).unwrap();
        assert_eq!(e.align, Some(vec![None, Some(0), Some(1)]));
        let e = expand(idx![0, false, NewAxis, true], &[3, 4]).unwrap();
        assert_eq!(e.align, Some(vec![Some(0), None, None, Some(1)]));
        match &e.slots[1] {
            IndexElem::Coords(c) => assert_eq!(c.shape(), &[0]),
            other => panic!("unexpected {}", other),
        }
        match &e.slots[3] {
            IndexElem::Coords(c) => assert_eq!(c.to_vec(), vec![0]),
            other => panic!("unexpected {}", other),
        }
    }
}
