#![feature(test)]
#![allow(clippy::many_single_char_names)]

extern crate test;

use ndindex::{idx, Array, NewAxis, Slice};
use ndindex_gen::array_builder::ArrayBuilder;

use test::black_box;

fn a3() -> Array<f64>
{
    ArrayBuilder::new([16, 32, 64]).build()
}

#[bench]
fn basic_slice_view(bench: &mut test::Bencher)
{
    let a = black_box(a3());
    bench.iter(|| a.at(idx![1.., Slice::from(..).step_by(-2), 3]).unwrap());
}

#[bench]
fn new_axis_view(bench: &mut test::Bencher)
{
    let a = black_box(a3());
    bench.iter(|| a.at(idx![NewAxis, .., NewAxis]).unwrap());
}

#[bench]
fn gather_adjacent(bench: &mut test::Bencher)
{
    let a = black_box(a3());
    let i = Array::from_iter((0..32).rev().map(|x| x as isize));
    bench.iter(|| a.at(idx![.., i.clone()]).unwrap());
}

#[bench]
fn gather_separated(bench: &mut test::Bencher)
{
    let a = black_box(a3());
    let i = Array::from_iter((0..16).map(|x| x as isize));
    let j = Array::from_iter((0..16).map(|x| 4 * x as isize));
    bench.iter(|| a.at(idx![i.clone(), .., j.clone()]).unwrap());
}

#[bench]
fn full_mask(bench: &mut test::Bencher)
{
    let a = black_box(a3());
    let mask = a.map(|&x| x as i64 % 3 == 0);
    bench.iter(|| a.at(mask.clone()).unwrap());
}

#[bench]
fn scalar_mask(bench: &mut test::Bencher)
{
    let a = black_box(a3());
    bench.iter(|| a.at(idx![.., true]).unwrap());
}
