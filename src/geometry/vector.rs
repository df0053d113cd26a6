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
    hash::{Hash, Hasher},
    ops::{Add, Index, Mul, Neg, Sub},
};

use crate::{geometry::point::Point, numeric::scalar::Scalar};

pub trait VectorOps<T>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn norm(&self) -> T;
    fn norm_squared(&self) -> T;
    fn normalized(&self) -> Self;
    /// `None` when the length is zero or not finite.
    fn try_normalized(&self) -> Option<Self>;
    fn scale(&self, s: T) -> Self;
}

pub trait Cross3<T> {
    fn cross(&self, other: &Self) -> Self;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub struct Vector<T: Scalar, const N: usize>(pub Point<T, N>);

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Vector(Point::new(coords))
    }

    pub fn zero() -> Self {
        Vector(Point::origin())
    }

    pub fn coords(&self) -> &[T; N] {
        &self.0.coords
    }

    pub fn as_point(&self) -> Point<T, N> {
        self.0
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn xyz(x: T, y: T, z: T) -> Self {
        Vector(Point::xyz(x, y, z))
    }
}

impl<T: Scalar, const N: usize> VectorOps<T> for Vector<T, N> {
    fn dot(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc = acc + self.0.coords[i] * other.0.coords[i];
        }
        acc
    }

    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    fn norm_squared(&self) -> T {
        self.dot(self)
    }

    fn normalized(&self) -> Self {
        let n = self.norm();
        Vector(self.0 / n)
    }

    fn try_normalized(&self) -> Option<Self> {
        let n = self.norm();
        if n.is_zero() || !n.is_finite() {
            return None;
        }
        Some(Vector(self.0 / n))
    }

    fn scale(&self, s: T) -> Self {
        Vector(self.0 * s)
    }
}

impl<T: Scalar> Cross3<T> for Vector<T, 3> {
    fn cross(&self, other: &Self) -> Self {
        let a = &self.0.coords;
        let b = &other.0.coords;
        Vector::xyz(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        )
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;
    fn add(self, rhs: Self) -> Self::Output {
        Vector(self.0 + rhs.0)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector(self.0 - rhs.0)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    fn mul(self, rhs: T) -> Self::Output {
        Vector(self.0 * rhs)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;
    fn neg(self) -> Self::Output {
        Vector(Point {
            coords: self.0.coords.map(|c| -c),
        })
    }
}

impl<T: Scalar, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
