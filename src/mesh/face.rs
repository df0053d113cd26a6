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

use smallvec::SmallVec;

use crate::{
    geometry::{CanonicalEdge, Point3, PointOps},
    numeric::scalar::Scalar,
};

/// Centroids are pushed slightly past the tile ring so the shell reads as
/// raised. Empirical, tunable through the params.
pub const CENTROID_INFLATION: f64 = 1.07;

/// Triangle of the subdivided icosahedron.
///
/// Neighbors are indices into the face arena the triangle lives in.
#[derive(Debug, Clone, PartialEq)]
pub struct Face<T: Scalar> {
    pub p1: Point3<T>,
    pub p2: Point3<T>,
    pub p3: Point3<T>,
    pub neighbors: SmallVec<[usize; 3]>,
    pub offset: T,
}

impl<T: Scalar> Face<T> {
    pub fn new(p1: Point3<T>, p2: Point3<T>, p3: Point3<T>) -> Self {
        Self {
            p1,
            p2,
            p3,
            neighbors: SmallVec::new(),
            offset: T::zero(),
        }
    }

    pub fn corners(&self) -> [Point3<T>; 3] {
        [self.p1, self.p2, self.p3]
    }

    pub fn corners_mut(&mut self) -> [&mut Point3<T>; 3] {
        [&mut self.p1, &mut self.p2, &mut self.p3]
    }

    /// Edges p1p2, p2p3, p3p1.
    pub fn edges(&self) -> [CanonicalEdge<T, 3>; 3] {
        [
            CanonicalEdge::new(&self.p1, &self.p2),
            CanonicalEdge::new(&self.p2, &self.p3),
            CanonicalEdge::new(&self.p3, &self.p1),
        ]
    }

    pub fn contains_point(&self, p: &Point3<T>) -> bool {
        self.p1 == *p || self.p2 == *p || self.p3 == *p
    }

    pub fn shares_edge_with(&self, other: &Face<T>) -> bool {
        let theirs = other.edges();
        self.edges().iter().any(|e| theirs.contains(e))
    }

    pub fn is_neighbor(&self, face: usize) -> bool {
        self.neighbors.contains(&face)
    }

    pub fn set_offset(&mut self, offset: T) {
        self.offset = offset;
    }

    /// Arithmetic mean of the corners, scaled by `inflation`.
    pub fn centroid(&self, inflation: T) -> Point3<T> {
        let sum = self.p1 + self.p2 + self.p3;
        (sum / T::three()).scale(inflation)
    }

    /// Splits the triangle into four through its edge midpoints.
    pub fn subdivide(&self) -> [Face<T>; 4] {
        let m1 = self.p1.midpoint(&self.p2);
        let m2 = self.p2.midpoint(&self.p3);
        let m3 = self.p3.midpoint(&self.p1);

        [
            Face::new(m1, self.p1, m3),
            Face::new(m3, self.p3, m2),
            Face::new(m2, m1, m3),
            Face::new(self.p2, m1, m2),
        ]
    }
}
