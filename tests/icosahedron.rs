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

use std::collections::HashMap;

use approx::assert_relative_eq;
use hexasphere::{
    geometry::{CanonicalEdge, PointOps},
    mesh::{
        face::Face,
        icosahedron::{GOLDEN_RATIO, IcosahedronBuilder},
    },
};

#[test]
fn test_icosahedron_counts() {
    let vertices = IcosahedronBuilder::vertices(1.0_f64);
    let faces = IcosahedronBuilder::build(1.0_f64);
    assert_eq!(vertices.len(), 12);
    assert_eq!(faces.len(), 20);
}

#[test]
fn test_vertices_scaled_by_radius() {
    let radius = 5.0_f64;
    let expected = radius * (1.0 + GOLDEN_RATIO * GOLDEN_RATIO).sqrt();
    for v in IcosahedronBuilder::vertices(radius) {
        assert_relative_eq!(v.distance_to_origin(), expected, max_relative = 1e-12);
    }
}

#[test]
fn test_every_vertex_touches_five_faces() {
    let mut arity = [0usize; 12];
    for face in IcosahedronBuilder::face_indices() {
        for &v in face {
            arity[v] += 1;
        }
    }
    assert!(arity.iter().all(|&n| n == 5), "{arity:?}");
}

#[test]
fn test_every_edge_is_shared_by_two_faces() {
    let faces: Vec<Face<f64>> = IcosahedronBuilder::build(1.0);
    let mut owners: HashMap<CanonicalEdge<f64, 3>, usize> = HashMap::new();
    for face in &faces {
        for edge in face.edges() {
            *owners.entry(edge).or_default() += 1;
        }
    }
    assert_eq!(owners.len(), 30);
    assert!(owners.values().all(|&n| n == 2));
}

#[test]
fn test_faces_share_one_winding() {
    // All outward or all inward; the table never mixes.
    let faces: Vec<Face<f64>> = IcosahedronBuilder::build(1.0);
    let outward = faces
        .iter()
        .filter(|f| {
            use hexasphere::geometry::{Cross3, VectorOps};
            let n = f.p1.vector_to(&f.p2).cross(&f.p1.vector_to(&f.p3));
            n.dot(&f.p1.as_vector()) > 0.0
        })
        .count();
    assert!(outward == 0 || outward == faces.len(), "{outward} outward faces");
}
