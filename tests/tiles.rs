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

use approx::assert_relative_eq;
use hexasphere::{
    Hexasphere, HexasphereError, HexasphereParams, TileKind,
    geometry::{Cross3, Point3, PointOps, Vector3, VectorOps},
    mesh::{
        adjacency::AdjacencyStrategy,
        face::Face,
        storage::DualVertexAggregator,
        tile::{Facing, Tile, TileSettings, detect_facing, order_ring},
    },
};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

fn sphere(radius: f64, subdivisions: u32, offset: f64) -> Hexasphere<f64> {
    Hexasphere::build(&HexasphereParams::new(radius, subdivisions, offset)).unwrap()
}

/// Six triangles fanned around (0, 0, 10), turning counter-clockwise seen
/// from +z when `ccw`, clockwise otherwise. Adjacency resolved.
fn hexagon_fan(ccw: bool) -> (Point3<f64>, Vec<Face<f64>>) {
    let center = Point3::xyz(0.0, 0.0, 10.0);
    let sign = if ccw { 1.0 } else { -1.0 };
    let ring: Vec<Point3<f64>> = (0..6)
        .map(|i| {
            let theta = sign * i as f64 * std::f64::consts::FRAC_PI_3;
            Point3::xyz(3.0 * theta.cos(), 3.0 * theta.sin(), 10.0)
        })
        .collect();

    let mut faces: Vec<Face<f64>> = (0..6)
        .map(|i| Face::new(center, ring[i], ring[(i + 1) % 6]))
        .collect();
    AdjacencyStrategy::EdgeHash.resolve(&mut faces).unwrap();
    for face in &mut faces {
        face.set_offset(1.0);
    }
    (center, faces)
}

fn triangle_normal(tri: &[Point3<f64>; 3]) -> Vector3<f64> {
    tri[0].vector_to(&tri[1]).cross(&tri[0].vector_to(&tri[2]))
}

#[test]
fn test_icosahedron_tiles_are_pentagons() {
    let sphere = sphere(60.0, 0, 6.0);
    assert_eq!(sphere.faces().len(), 20);
    assert_eq!(sphere.tiles().len(), 12);
    assert_eq!(sphere.pentagon_count(), 12);
    assert_eq!(sphere.hexagon_count(), 0);
}

#[test]
fn test_tile_counts_follow_euler() {
    for d in 0..=3u32 {
        let sphere = sphere(60.0, d, 6.0);
        let faces = 20 * 4usize.pow(d);
        assert_eq!(sphere.faces().len(), faces);
        assert_eq!(sphere.pentagon_count(), 12);
        // V = 10·4^D + 2, all but twelve of them hexagons.
        assert_eq!(sphere.hexagon_count(), 10 * (4usize.pow(d) - 1));

        let stats = sphere.stats();
        assert_eq!(stats.tiles(), faces / 2 + 2);
        assert_eq!(Some(stats.tiles()), sphere.params().expected_tiles());
    }
}

#[test]
fn test_rings_are_closed_walks() {
    let sphere = sphere(27.0, 2, 6.0);
    for tile in sphere.tiles() {
        assert_eq!(tile.ring().len(), tile.kind().arity());
        assert!(tile.is_closed_ring(sphere.faces()));
        for &f in tile.ring() {
            assert!(sphere.faces()[f].contains_point(tile.center()));
        }
    }
}

#[test]
fn test_ring_ordering_preserves_incident_faces() {
    let sphere = sphere(27.0, 2, 6.0);
    let storage = DualVertexAggregator::from_faces(sphere.faces());

    for (tile, (point, bag)) in sphere.tiles().iter().zip(storage.iter()) {
        assert_eq!(tile.center(), point);
        let mut ring = tile.ring().to_vec();
        let mut bag = bag.to_vec();
        ring.sort_unstable();
        bag.sort_unstable();
        assert_eq!(ring, bag);
    }
}

#[test]
fn test_shuffled_bags_still_close() {
    let sphere = sphere(27.0, 2, 6.0);
    let faces = sphere.faces();
    let settings = TileSettings::default();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for tile in sphere.tiles() {
        let mut bag = tile.ring().to_vec();
        bag.shuffle(&mut rng);

        let ring = order_ring(*tile.center(), &bag, faces).unwrap();
        assert_eq!(ring[0], bag[0]);
        let mut sorted = ring.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), bag.len());

        let rebuilt = Tile::assemble(*tile.center(), &bag, faces, &settings).unwrap();
        assert!(rebuilt.is_closed_ring(faces));
        assert_eq!(rebuilt.kind(), tile.kind());
    }
}

#[test]
fn test_normals_point_along_lattice_point() {
    let sphere = sphere(60.0, 1, 6.0);
    for tile in sphere.tiles() {
        assert_relative_eq!(tile.normal().norm(), 1.0, epsilon = 1e-12);
        let radial = tile.center().as_vector().normalized();
        assert_relative_eq!(tile.normal().dot(&radial), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_hand_built_hexagon_front() {
    let (center, faces) = hexagon_fan(true);
    let bag: Vec<usize> = (0..6).collect();
    let tile = Tile::assemble(center, &bag, &faces, &TileSettings::default()).unwrap();

    assert_eq!(tile.kind(), TileKind::Hexagon);
    assert_eq!(tile.ring(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(tile.facing(), Facing::Front);
    assert_eq!(tile.normal(), &Vector3::xyz(0.0, 0.0, 1.0));

    for tri in tile.triangles() {
        let n = triangle_normal(&tri).normalized();
        assert_relative_eq!(n.dot(tile.normal()), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_hand_built_hexagon_back() {
    let (center, faces) = hexagon_fan(false);
    let bag: Vec<usize> = (0..6).collect();
    let tile = Tile::assemble(center, &bag, &faces, &TileSettings::default()).unwrap();

    assert_eq!(tile.facing(), Facing::Back);
    for tri in tile.triangles() {
        let n = triangle_normal(&tri).normalized();
        assert_relative_eq!(n.dot(tile.normal()), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_offset_centroids_are_raised() {
    let (center, faces) = hexagon_fan(true);
    let bag: Vec<usize> = (0..6).collect();
    let settings = TileSettings::default();
    let tile = Tile::assemble(center, &bag, &faces, &settings).unwrap();

    for (vertex, &f) in tile.polygon().iter().zip(tile.ring()) {
        let centroid = faces[f].centroid(settings.centroid_inflation);
        assert_relative_eq!(vertex.z() - centroid.z(), 1.0, epsilon = 1e-12);
        assert_eq!(vertex.x(), centroid.x());
        assert_eq!(vertex.y(), centroid.y());
    }
}

#[test]
fn test_facing_threshold_is_strict() {
    let normal = Vector3::<f64>::xyz(0.0, 0.0, 1.0);
    // Positions 2, 1, 4 span a counter-clockwise triangle of doubled area 1.
    let mut polygon = vec![Point3::origin(); 5];
    polygon[2] = Point3::xyz(0.0, 0.0, 0.0);
    polygon[4] = Point3::xyz(1.0, 0.0, 0.0);
    polygon[1] = Point3::xyz(0.0, 1.0, 0.0);

    assert_eq!(detect_facing(&polygon, &normal, 0.3), Facing::Front);
    assert_eq!(detect_facing(&polygon, &normal, 1.0), Facing::Back);
    assert_eq!(detect_facing(&polygon, &(-normal), 0.3), Facing::Back);
}

#[test]
fn test_bad_arity_is_rejected() {
    let (center, faces) = hexagon_fan(true);
    let result = Tile::assemble(center, &[0, 1, 2, 3], &faces, &TileSettings::default());
    assert!(matches!(
        result,
        Err(HexasphereError::TopologyInconsistency { .. })
    ));
}

#[test]
fn test_stalled_walk_is_rejected() {
    let (center, mut faces) = hexagon_fan(true);
    for face in &mut faces {
        face.neighbors.clear();
    }
    let bag: Vec<usize> = (0..6).collect();
    let result = Tile::assemble(center, &bag, &faces, &TileSettings::default());
    match result {
        Err(HexasphereError::TopologyInconsistency { reason, .. }) => {
            assert!(reason.contains("stalled"), "{reason}");
        }
        other => panic!("expected topology error, got {other:?}"),
    }
}

#[test]
fn test_origin_center_is_degenerate() {
    let (_, mut faces) = hexagon_fan(true);
    let origin = Point3::origin();
    for face in &mut faces {
        face.p1 = origin;
    }
    let bag: Vec<usize> = (0..6).collect();
    let result = Tile::assemble(origin, &bag, &faces, &TileSettings::default());
    assert!(matches!(result, Err(HexasphereError::DegenerateGeometry(_))));
}
