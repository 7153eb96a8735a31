//! Classifying expanded slots into the three execution plans.

use crate::error::{invalid_index, IndexError};
use crate::prim::SliceOrIndex;
use crate::{Array, IndexElem};

/// Execution plans for one resolution.
#[derive(Debug, Default)]
pub(crate) struct Plan
{
    /// Axes to slice, and the slice or index applied to each.
    pub slice_dims: Vec<usize>,
    pub slices: Vec<SliceOrIndex>,
    /// Axes to gather along, and their coordinate arrays.
    pub gather_dims: Vec<usize>,
    pub gather_coords: Vec<Array<isize>>,
    /// Final axis order; `None` is a new axis.
    pub permute: Vec<Option<usize>>,
    /// Output position of the broadcast coordinate axes.
    pub insert_point: usize,
}

/// Build the plans for `slots`, which must be mask-expanded and line up
/// with the source axes.
pub(crate) fn build_plan(slots: Vec<IndexElem>) -> Result<Plan, IndexError>
{
    let mut plan = Plan::default();
    let mut offset = 0;
    let mut seen = 0;
    let mut insert_point = None;
    for slot in slots {
        match slot {
            IndexElem::NewAxis => {
                plan.permute.push(None);
                seen += 1;
                continue;
            }
            IndexElem::Slice(s) => {
                if !s.is_full() {
                    plan.slice_dims.push(offset);
                    plan.slices.push(SliceOrIndex::Slice(s));
                }
                plan.permute.push(Some(offset));
                seen += 1;
            }
            IndexElem::Index(i) => {
                plan.slice_dims.push(offset);
                plan.slices.push(SliceOrIndex::Index(i));
            }
            IndexElem::Coords(coords) => {
                plan.gather_dims.push(offset);
                plan.gather_coords.push(coords);
                match insert_point {
                    None => insert_point = Some(seen),
                    // advanced indices split by a basic index go to the front
                    Some(p) if p != seen => insert_point = Some(0),
                    Some(_) => {}
                }
            }
            other => return Err(invalid_index(other.kind_name())),
        }
        offset += 1;
    }
    plan.insert_point = insert_point.unwrap_or(0);
    Ok(plan)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{ErrorKind, IndexElem, Slice};

    fn coords(v: Vec<isize>) -> IndexElem
    {
        IndexElem::Coords(Array::from_vec(v))
    }

    #[test]
    fn basic_slots()
    {
        let slots = vec![
            IndexElem::from(1..),
            IndexElem::NewAxis,
            IndexElem::from(..),
            IndexElem::from(3),
        ];
        let plan = build_plan(slots).unwrap();
        assert_eq!(plan.slice_dims, vec![0, 2]);
        assert_eq!(
            plan.slices,
            vec![SliceOrIndex::Slice(Slice::from(1..)), SliceOrIndex::Index(3)]
        );
        assert_eq!(plan.permute, vec![Some(0), None, Some(1)]);
        assert!(plan.gather_dims.is_empty());
    }

    #[test]
    fn adjacent_advanced_keep_position()
    {
        let slots = vec![IndexElem::from(..), coords(vec![0]), coords(vec![1]), IndexElem::from(..)];
        let plan = build_plan(slots).unwrap();
        assert_eq!(plan.gather_dims, vec![1, 2]);
        assert_eq!(plan.insert_point, 1);
        assert_eq!(plan.permute, vec![Some(0), Some(3)]);
    }

    #[test]
    fn split_advanced_move_to_front()
    {
        let slots = vec![coords(vec![0]), IndexElem::from(..), coords(vec![1])];
        let plan = build_plan(slots).unwrap();
        assert_eq!(plan.insert_point, 0);
        assert_eq!(plan.permute, vec![Some(1)]);

        // an integer between them does not add an output axis
        let slots = vec![IndexElem::from(..), coords(vec![0]), IndexElem::from(0), coords(vec![1])];
        assert_eq!(build_plan(slots).unwrap().insert_point, 1);
    }

    #[test]
    fn leftover_ellipsis_is_invalid()
    {
        let e = build_plan(vec![IndexElem::from(0), IndexElem::Ellipsis]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidIndex);
        assert!(e.to_string().contains("got ellipsis"));
    }
}
