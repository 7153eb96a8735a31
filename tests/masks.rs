use itertools::iproduct;

use ndindex::{idx, Array, Ellipsis, ErrorKind, NewAxis};
use ndindex_gen::array_builder::ArrayBuilder;

fn t345() -> Array<i32>
{
    ArrayBuilder::new([3, 4, 5]).build()
}

#[test]
fn full_mask_flattens()
{
    let t = Array::from_shape_fn(vec![3, 4, 5], |ix| ((ix[0] * 20 + ix[1] * 5 + ix[2]) * 7 % 60) as f64 / 60.).unwrap();
    let mask = t.map(|&x| x > 0.5);
    let n = mask.iter().filter(|&&m| m).count();
    let r = t.at(mask).unwrap();
    assert_eq!(r.shape(), &[n]);
    assert!(r.iter().all(|&x| x > 0.5));
    let expected: Vec<f64> = t.iter().cloned().filter(|&x| x > 0.5).collect();
    assert_eq!(r.to_vec(), expected);
}

#[test]
fn partial_mask_collapses_axes()
{
    let t = t345();
    let mask = Array::from_shape_fn(vec![3, 4], |ix| (ix[0] + ix[1]) % 3 == 0).unwrap();
    let n = mask.iter().filter(|&&m| m).count();
    let r = t.at(mask.clone()).unwrap();
    assert_eq!(r.shape(), &[n, 5]);

    let r = t.at(idx![.., mask.at(0).unwrap()]).unwrap();
    assert_eq!(r.shape(), &[3, 2, 5]);
    assert_eq!(r.get(&[1, 1, 2]), t.get(&[1, 3, 2]));

    let last = Array::from_shape_fn(vec![4, 5], |ix| ix[1] == 2).unwrap();
    let r = t.at(idx![Ellipsis, last]).unwrap();
    assert_eq!(r.shape(), &[3, 4]);
    for (a, b) in iproduct!(0..3, 0..4) {
        assert_eq!(r.get(&[a, b]), t.get(&[a, b, 2]));
    }
}

#[test]
fn mask_shape_mismatch()
{
    let t = t345();
    let mask = Array::from_elem(vec![4, 3], true).unwrap();
    let e = t.at(mask).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::ShapeMismatch);

    let mask = Array::from_elem(vec![4], false).unwrap();
    let e = t.at(mask).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn bool_sequences_are_masks()
{
    let t = t345();
    let r = t.at(idx![vec![true, false, true]]).unwrap();
    assert_eq!(r.shape(), &[2, 4, 5]);
    assert_eq!(r.get(&[1, 0, 0]), Some(&40));

    let r = t.at(idx![.., vec![vec![true, false, false, false, true]; 4]]).unwrap();
    assert_eq!(r.shape(), &[3, 8]);
}

#[test]
fn byte_mask()
{
    let t = t345();
    let m = Array::from_vec(vec![1u8, 0, 2]);
    let r = t.at(m).unwrap();
    assert_eq!(r.shape(), &[2, 4, 5]);
}

#[test]
fn scalar_masks()
{
    let t = t345();
    let r = t.at(true).unwrap();
    assert_eq!(r.shape(), &[1, 3, 4, 5]);
    assert_eq!(r.to_vec(), t.to_vec());
    assert!(!r.shares_storage(&t));

    let r = t.at(false).unwrap();
    assert_eq!(r.shape(), &[0, 3, 4, 5]);

    let r = t.at(idx![.., true]).unwrap();
    assert_eq!(r.shape(), &[3, 1, 4, 5]);
    assert_eq!(r.get(&[2, 0, 3, 4]), Some(&59));

    let r = t.at(idx![NewAxis, true]).unwrap();
    assert_eq!(r.shape(), &[1, 1, 3, 4, 5]);

    let r = t.at(idx![0, true]).unwrap();
    assert_eq!(r.shape(), &[1, 4, 5]);
    assert_eq!(r.get(&[0, 1, 1]), Some(&6));
}

#[test]
fn multiple_scalar_masks()
{
    let t = t345();
    let r = t.at(idx![true, true]).unwrap();
    assert_eq!(r.shape(), &[1, 3, 4, 5]);

    let r = t.at(idx![true, false]).unwrap();
    assert_eq!(r.shape(), &[0, 3, 4, 5]);

    let r = t.at(idx![.., true, .., true]).unwrap();
    assert_eq!(r.shape(), &[1, 3, 4, 5]);
    assert_eq!(r.get(&[0, 1, 2, 3]), t.get(&[1, 2, 3]));
}

#[test]
fn mixed_scalar_masks()
{
    let t2: Array<i32> = ArrayBuilder::new([3, 4]).build();
    let r = t2.at(idx![true, NewAxis, false]).unwrap();
    assert_eq!(r.shape(), &[0, 1, 3, 4]);

    let t = t345();
    let mask = Array::from_shape_fn(vec![3, 4], |ix| ix[0] == ix[1]).unwrap();
    let r = t.at(idx![true, mask]).unwrap();
    assert_eq!(r.shape(), &[3, 5]);
    for (a, b) in iproduct!(0..3, 0..5) {
        assert_eq!(r.get(&[a, b]), t.get(&[a, a, b]));
    }

    let r = t.at(idx![1, true, row_of_coords()]).unwrap();
    assert_eq!(r.shape(), &[1, 2, 5]);
    assert_eq!(r.get(&[0, 1, 4]), t.get(&[1, 3, 4]));
}

fn row_of_coords() -> Array<isize>
{
    Array::from_shape_vec(vec![1, 2], vec![0, 3]).unwrap()
}
