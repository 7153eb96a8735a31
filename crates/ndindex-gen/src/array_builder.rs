// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndindex::Array;
use ndindex::Ix;
use ndindex::Order;

use num_traits::Num;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    dim: Vec<Ix>,
    memory_order: Order,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    Sequential,
    Zero,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        Self::new(vec![0])
    }
}

impl ArrayBuilder
{
    pub fn new(dim: impl Into<Vec<Ix>>) -> Self
    {
        ArrayBuilder {
            dim: dim.into(),
            memory_order: Order::C,
            generator: ElementGenerator::Sequential,
        }
    }

    pub fn memory_order(mut self, order: Order) -> Self
    {
        self.memory_order = order;
        self
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    /// Build the array; elements count up from zero in `memory_order`
    /// unless the generator is `Zero`.
    pub fn build<T>(self) -> Array<T>
    where T: Num + Clone
    {
        let mut current = T::zero();
        let size = self.dim.iter().product::<Ix>();
        let use_zeros = self.generator == ElementGenerator::Zero;
        let data = (0..size)
            .map(|_| {
                let ret = current.clone();
                if !use_zeros {
                    current = ret.clone() + T::one();
                }
                ret
            })
            .collect();
        Array::from_shape_vec_order(self.dim, data, self.memory_order).unwrap()
    }
}

#[test]
fn test_order()
{
    let (m, n) = (12, 13);
    let c = ArrayBuilder::new([m, n])
        .memory_order(Order::C)
        .build::<i32>();
    let f = ArrayBuilder::new([m, n])
        .memory_order(Order::F)
        .build::<i32>();

    assert_eq!(c.shape(), &[m, n]);
    assert_eq!(f.shape(), &[m, n]);
    assert_eq!(c.strides(), &[n as isize, 1]);
    assert_eq!(f.strides(), &[1, m as isize]);
}

#[test]
fn test_zero()
{
    let z = ArrayBuilder::new(vec![2, 3])
        .generator(ElementGenerator::Zero)
        .build::<f64>();
    assert!(z.iter().all(|&x| x == 0.));
}
