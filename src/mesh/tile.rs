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

//! Pentagonal and hexagonal tiles of the dual mesh.
//!
//! A tile is built from the 5 or 6 faces that meet at one lattice point. The
//! faces are ordered into an edge-adjacent ring, their centroids are pushed
//! out along the tile normal, and the resulting polygon is fanned into
//! triangles with one of two fixed patterns depending on the ring direction.

use smallvec::SmallVec;

use crate::{
    error::{HexResult, HexasphereError},
    geometry::{Cross3, Point3, PointOps, Vector3, VectorOps},
    mesh::face::{CENTROID_INFLATION, Face},
    numeric::scalar::Scalar,
};

/// Minimum `dot(cross(P4 - P2, P1 - P2), normal)` for a ring to count as
/// front facing. Empirical and scale dependent: the probe grows with the
/// square of the tile size, so very small spheres need a lower threshold.
pub const WINDING_THRESHOLD: f64 = 0.3;

/// Ring positions sampled by the facing test.
pub const WINDING_PROBE: [usize; 3] = [2, 1, 4];

pub const HEXAGON_FRONT: [[usize; 3]; 4] = [[0, 1, 2], [2, 3, 0], [3, 4, 5], [5, 0, 3]];
pub const HEXAGON_BACK: [[usize; 3]; 4] = [[0, 5, 1], [5, 4, 3], [3, 2, 1], [1, 5, 3]];
pub const PENTAGON_FRONT: [[usize; 3]; 3] = [[0, 1, 2], [2, 3, 4], [4, 0, 2]];
pub const PENTAGON_BACK: [[usize; 3]; 3] = [[0, 4, 1], [4, 3, 2], [2, 1, 4]];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Pentagon,
    Hexagon,
}

impl TileKind {
    pub fn from_arity(arity: usize) -> Option<Self> {
        match arity {
            5 => Some(TileKind::Pentagon),
            6 => Some(TileKind::Hexagon),
            _ => None,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            TileKind::Pentagon => 5,
            TileKind::Hexagon => 6,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.arity() - 2
    }
}

/// Which of the two fan patterns a tile uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Front,
    Back,
}

pub fn triangulation(kind: TileKind, facing: Facing) -> &'static [[usize; 3]] {
    match (kind, facing) {
        (TileKind::Hexagon, Facing::Front) => &HEXAGON_FRONT,
        (TileKind::Hexagon, Facing::Back) => &HEXAGON_BACK,
        (TileKind::Pentagon, Facing::Front) => &PENTAGON_FRONT,
        (TileKind::Pentagon, Facing::Back) => &PENTAGON_BACK,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSettings<T: Scalar> {
    pub centroid_inflation: T,
    pub winding_threshold: T,
}

impl<T: Scalar> Default for TileSettings<T> {
    fn default() -> Self {
        Self {
            centroid_inflation: T::from_literal(CENTROID_INFLATION),
            winding_threshold: T::from_literal(WINDING_THRESHOLD),
        }
    }
}

pub type Ring = SmallVec<[usize; 6]>;

#[derive(Debug, Clone, PartialEq)]
pub struct Tile<T: Scalar> {
    center: Point3<T>,
    ring: Ring,
    normal: Vector3<T>,
    polygon: SmallVec<[Point3<T>; 6]>,
    facing: Facing,
    kind: TileKind,
}

impl<T: Scalar> Tile<T> {
    /// Builds the tile around `center` from the unordered faces touching it.
    pub fn assemble(
        center: Point3<T>,
        bag: &[usize],
        faces: &[Face<T>],
        settings: &TileSettings<T>,
    ) -> HexResult<Self> {
        let kind = TileKind::from_arity(bag.len()).ok_or_else(|| {
            HexasphereError::topology(
                center,
                format!("lattice point touches {} faces, expected 5 or 6", bag.len()),
            )
        })?;

        let ring = order_ring(center, bag, faces)?;

        // Projection is radial, so the lattice point's direction is the same
        // before and after it.
        let normal = center.as_vector().try_normalized().ok_or_else(|| {
            HexasphereError::DegenerateGeometry(format!("tile center {center:?} has no direction"))
        })?;

        let polygon: SmallVec<[Point3<T>; 6]> = ring
            .iter()
            .map(|&f| offset_centroid(&faces[f], &normal, settings.centroid_inflation))
            .collect();

        let facing = detect_facing(&polygon, &normal, settings.winding_threshold);

        Ok(Self {
            center,
            ring,
            normal,
            polygon,
            facing,
            kind,
        })
    }

    pub fn center(&self) -> &Point3<T> {
        &self.center
    }

    /// Face indices in ring order.
    pub fn ring(&self) -> &[usize] {
        &self.ring
    }

    pub fn normal(&self) -> &Vector3<T> {
        &self.normal
    }

    /// Offset centroids in ring order.
    pub fn polygon(&self) -> &[Point3<T>] {
        &self.polygon
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// Fan over ring positions.
    pub fn triangle_pattern(&self) -> &'static [[usize; 3]] {
        triangulation(self.kind, self.facing)
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Point3<T>; 3]> + '_ {
        self.triangle_pattern()
            .iter()
            .map(|&tri| tri.map(|i| self.polygon[i]))
    }

    /// Whether each ring face shares an edge with the next one, wrapping
    /// around at the end.
    pub fn is_closed_ring(&self, faces: &[Face<T>]) -> bool {
        let n = self.ring.len();
        (0..n).all(|i| {
            let a = &faces[self.ring[i]];
            let b = &faces[self.ring[(i + 1) % n]];
            a.shares_edge_with(b)
        })
    }
}

/// Walks the faces of `bag` through their neighbor links, starting at the
/// first one. Every face of the bag must be consumed.
pub fn order_ring<T: Scalar>(center: Point3<T>, bag: &[usize], faces: &[Face<T>]) -> HexResult<Ring> {
    let Some((&first, rest)) = bag.split_first() else {
        return Ok(Ring::new());
    };

    let mut remaining: Ring = rest.iter().copied().collect();
    let mut ring = Ring::new();
    ring.push(first);
    let mut current = first;

    while !remaining.is_empty() {
        let step = faces[current]
            .neighbors
            .iter()
            .find_map(|n| remaining.iter().position(|r| r == n));

        let Some(pos) = step else {
            return Err(HexasphereError::topology(
                center,
                format!(
                    "ring walk stalled at face {current} after {} of {} faces",
                    ring.len(),
                    bag.len()
                ),
            ));
        };

        current = remaining.remove(pos);
        ring.push(current);
    }

    debug_assert_eq!(ring.len(), bag.len());
    Ok(ring)
}

/// The face centroid pushed `face.offset` along `normal`.
pub fn offset_centroid<T: Scalar>(face: &Face<T>, normal: &Vector3<T>, inflation: T) -> Point3<T> {
    face.centroid(inflation).add_vector(&normal.scale(face.offset))
}

/// `polygon` needs at least five points.
///
/// Front when the sampled ring positions turn counter-clockwise around the
/// normal by more than `threshold`.
pub fn detect_facing<T: Scalar>(polygon: &[Point3<T>], normal: &Vector3<T>, threshold: T) -> Facing {
    let [p, q, r] = WINDING_PROBE.map(|i| polygon[i]);
    let pr = p.vector_to(&r);
    let pq = p.vector_to(&q);
    if pr.cross(&pq).dot(normal) > threshold {
        Facing::Front
    } else {
        Facing::Back
    }
}
