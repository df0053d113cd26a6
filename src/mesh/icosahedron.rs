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

//! Base lattice: a regular icosahedron built from a constant table.

use crate::{geometry::Point3, mesh::face::Face, numeric::scalar::Scalar};

pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

pub const ICOSAHEDRON_VERTEX_COUNT: usize = 12;
pub const ICOSAHEDRON_FACE_COUNT: usize = 20;

/// Unit coordinates of the three golden rectangles, before scaling.
const VERTICES: [[f64; 3]; ICOSAHEDRON_VERTEX_COUNT] = [
    [1.0, GOLDEN_RATIO, 0.0],
    [-1.0, GOLDEN_RATIO, 0.0],
    [1.0, -GOLDEN_RATIO, 0.0],
    [-1.0, -GOLDEN_RATIO, 0.0],
    [0.0, 1.0, GOLDEN_RATIO],
    [0.0, -1.0, GOLDEN_RATIO],
    [0.0, 1.0, -GOLDEN_RATIO],
    [0.0, -1.0, -GOLDEN_RATIO],
    [GOLDEN_RATIO, 0.0, 1.0],
    [-GOLDEN_RATIO, 0.0, 1.0],
    [GOLDEN_RATIO, 0.0, -1.0],
    [-GOLDEN_RATIO, 0.0, -1.0],
];

const FACES: [[usize; 3]; ICOSAHEDRON_FACE_COUNT] = [
    [0, 1, 4],
    [1, 9, 4],
    [4, 9, 5],
    [5, 9, 3],
    [2, 3, 7],
    [3, 2, 5],
    [7, 10, 2],
    [0, 8, 10],
    [0, 4, 8],
    [8, 2, 10],
    [8, 4, 5],
    [8, 5, 2],
    [1, 0, 6],
    [11, 1, 6],
    [3, 9, 11],
    [6, 10, 7],
    [3, 11, 7],
    [11, 6, 7],
    [6, 0, 10],
    [9, 1, 11],
];

pub struct IcosahedronBuilder;

impl IcosahedronBuilder {
    /// The 12 lattice points, each coordinate scaled by `radius`.
    ///
    /// The points are not on the sphere of that radius yet; projection happens
    /// after subdivision.
    pub fn vertices<T: Scalar>(radius: T) -> [Point3<T>; ICOSAHEDRON_VERTEX_COUNT] {
        VERTICES.map(|[x, y, z]| {
            Point3::xyz(
                T::from_literal(x) * radius,
                T::from_literal(y) * radius,
                T::from_literal(z) * radius,
            )
        })
    }

    pub fn face_indices() -> &'static [[usize; 3]; ICOSAHEDRON_FACE_COUNT] {
        &FACES
    }

    pub fn build<T: Scalar>(radius: T) -> Vec<Face<T>> {
        let vertices = Self::vertices(radius);
        FACES
            .iter()
            .map(|&[a, b, c]| Face::new(vertices[a], vertices[b], vertices[c]))
            .collect()
    }
}
