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

use hexasphere::{
    HexasphereError,
    geometry::Point3,
    mesh::{
        adjacency::{AdjacencyResolver, AdjacencyStrategy, BruteForceAdjacency, EdgeHashAdjacency},
        face::Face,
        icosahedron::IcosahedronBuilder,
        subdivide::FaceSubdivider,
    },
};

fn lattice(rounds: u32) -> Vec<Face<f32>> {
    FaceSubdivider::subdivide(IcosahedronBuilder::build(27.0_f32), rounds)
}

#[test]
fn test_every_face_has_three_neighbors() {
    for rounds in 0..=3 {
        let mut faces = lattice(rounds);
        EdgeHashAdjacency.resolve(&mut faces).unwrap();

        for (f, face) in faces.iter().enumerate() {
            assert_eq!(face.neighbors.len(), 3, "face {f} after {rounds} rounds");
            assert!(!face.is_neighbor(f));
            for &n in &face.neighbors {
                assert!(faces[n].is_neighbor(f), "{f} -> {n} is not symmetric");
                assert!(face.shares_edge_with(&faces[n]));
            }
        }
    }
}

#[test]
fn test_strategies_agree() {
    let mut brute = lattice(2);
    let mut hashed = brute.clone();

    BruteForceAdjacency.resolve(&mut brute).unwrap();
    EdgeHashAdjacency.resolve(&mut hashed).unwrap();

    for (a, b) in brute.iter().zip(&hashed) {
        assert_eq!(a.neighbors, b.neighbors);
    }
}

#[test]
fn test_neighbors_are_sorted() {
    let mut faces = lattice(1);
    AdjacencyStrategy::BruteForce.resolve(&mut faces).unwrap();
    for face in &faces {
        assert!(face.neighbors.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_isolated_faces_have_no_neighbors() {
    let mut faces = vec![
        Face::new(
            Point3::<f64>::xyz(0.0, 0.0, 0.0),
            Point3::xyz(1.0, 0.0, 0.0),
            Point3::xyz(0.0, 1.0, 0.0),
        ),
        Face::new(
            Point3::xyz(5.0, 0.0, 0.0),
            Point3::xyz(6.0, 0.0, 0.0),
            Point3::xyz(5.0, 1.0, 0.0),
        ),
    ];
    AdjacencyStrategy::EdgeHash.resolve(&mut faces).unwrap();
    assert!(faces.iter().all(|f| f.neighbors.is_empty()));
}

#[test]
fn test_overfull_edge_is_rejected() {
    let a = Point3::<f64>::xyz(0.0, 0.0, 0.0);
    let b = Point3::xyz(1.0, 0.0, 0.0);
    // Five triangles hinged on the same edge.
    let faces: Vec<Face<f64>> = (0..5)
        .map(|i| Face::new(a, b, Point3::xyz(0.5, 1.0, i as f64)))
        .collect();

    for strategy in [AdjacencyStrategy::BruteForce, AdjacencyStrategy::EdgeHash] {
        let mut faces = faces.clone();
        let result = strategy.resolve(&mut faces);
        assert!(
            matches!(result, Err(HexasphereError::TopologyInconsistency { .. })),
            "{strategy:?}: {result:?}"
        );
    }
}
