// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    array::from_fn,
    hash::{Hash, Hasher},
    ops::{Add, Div, Index, IndexMut, Mul, Sub},
};

use crate::{
    geometry::vector::{Vector, VectorOps},
    numeric::scalar::{Scalar, hash_scalar},
};

#[derive(Clone, Copy, Debug)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub trait PointOps<T: Scalar, const N: usize>: Sized {
    type Vector: VectorOps<T>;

    fn as_vector(&self) -> Self::Vector;
    fn add_vector(&self, v: &Self::Vector) -> Self;
    fn vector_to(&self, other: &Self) -> Self::Vector;
    fn midpoint(&self, other: &Self) -> Self;
    fn scale(&self, s: T) -> Self;
    fn distance_to_origin(&self) -> T;
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Point { coords }
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<f64>,
    {
        Point {
            coords: vals.map(|v| T::from_literal(v.into())),
        }
    }

    pub fn origin() -> Self {
        Point {
            coords: [T::zero(); N],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl<T: Scalar> Point<T, 3> {
    pub fn xyz(x: T, y: T, z: T) -> Self {
        Point { coords: [x, y, z] }
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }

    pub fn z(&self) -> T {
        self.coords[2]
    }
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Self::origin()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: Point<T, N>) -> Self::Output {
        Point {
            coords: from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: Point<T, N>) -> Self::Output {
        Point {
            coords: from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Point<T, N> {
    type Output = Point<T, N>;
    fn mul(self, rhs: T) -> Self::Output {
        Point {
            coords: self.coords.map(|c| c * rhs),
        }
    }
}

impl<T: Scalar, const N: usize> Div<T> for Point<T, N> {
    type Output = Point<T, N>;
    fn div(self, rhs: T) -> Self::Output {
        Point {
            coords: self.coords.map(|c| c / rhs),
        }
    }
}

impl<T: Scalar, const N: usize> PointOps<T, N> for Point<T, N> {
    type Vector = Vector<T, N>;

    fn as_vector(&self) -> Self::Vector {
        Vector(*self)
    }

    fn add_vector(&self, v: &Self::Vector) -> Self {
        *self + v.0
    }

    fn vector_to(&self, other: &Self) -> Self::Vector {
        Vector(*other - *self)
    }

    // (a + b) / 2 is symmetric in a and b, so both faces sharing an edge
    // produce the bit-identical midpoint.
    fn midpoint(&self, other: &Self) -> Self {
        let two = T::two();
        Self {
            coords: from_fn(|i| (self.coords[i] + other.coords[i]) / two),
        }
    }

    fn scale(&self, s: T) -> Self {
        *self * s
    }

    fn distance_to_origin(&self) -> T {
        self.as_vector().norm()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(point: Point<T, N>) -> Self {
        point.coords
    }
}

impl<T: Scalar, const N: usize> Hash for Point<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for coord in &self.coords {
            hash_scalar(*coord, state);
        }
    }
}

impl<T: Scalar, const N: usize> PartialEq for Point<T, N> {
    fn eq(&self, other: &Self) -> bool {
        // Exact comparison. Shared lattice points are detected this way.
        for i in 0..N {
            if self.coords[i] != other.coords[i] {
                return false;
            }
        }
        true
    }
}

impl<T: Scalar, const N: usize> PartialOrd for Point<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        for i in 0..N {
            match self.coords[i].partial_cmp(&other.coords[i]) {
                Some(std::cmp::Ordering::Equal) => continue,
                Some(ordering) => return Some(ordering),
                None => return None,
            }
        }
        Some(std::cmp::Ordering::Equal)
    }
}

// Callers reject non-finite coordinates before points reach a hash map.
impl<T: Scalar, const N: usize> Eq for Point<T, N> {}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;
