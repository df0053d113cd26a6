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

//! The generation pipeline.

use std::fmt;

use tracing::{debug, info};

use crate::{
    error::HexResult,
    mesh::{
        assembler::{Mesh, MeshAssembler},
        face::Face,
        icosahedron::IcosahedronBuilder,
        projection::RadiusProjector,
        storage::DualVertexAggregator,
        subdivide::FaceSubdivider,
        tile::{Tile, TileKind},
    },
    numeric::scalar::Scalar,
    params::HexasphereParams,
};

/// A generated hexasphere: the projected lattice faces and the tiles built
/// on top of them.
#[derive(Debug, Clone)]
pub struct Hexasphere<T: Scalar> {
    params: HexasphereParams<T>,
    faces: Vec<Face<T>>,
    tiles: Vec<Tile<T>>,
}

impl<T: Scalar> Hexasphere<T> {
    /// Runs the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parameters fail [`HexasphereParams::validate`]
    /// - A lattice point projects from the origin
    /// - The subdivided lattice does not tile into pentagons and hexagons
    pub fn build(params: &HexasphereParams<T>) -> HexResult<Self> {
        params.validate()?;

        debug!(
            "Building hexasphere: radius {}, {} subdivisions, offset {}",
            params.radius, params.subdivisions, params.offset
        );

        let base = IcosahedronBuilder::build(params.radius);
        let mut faces = FaceSubdivider::subdivide(base, params.subdivisions);

        // Adjacency runs on the exact midpoints, before projection rounds them.
        params.adjacency.resolve(&mut faces)?;

        RadiusProjector::new(params.radius).project_all(&mut faces)?;
        for face in &mut faces {
            face.set_offset(params.offset);
        }

        let storage = DualVertexAggregator::from_faces(&faces);
        let tiles = storage.find_shape_faces(&faces, &params.tile_settings())?;

        let sphere = Self {
            params: params.clone(),
            faces,
            tiles,
        };
        info!("Generated {}", sphere.stats());
        Ok(sphere)
    }

    pub fn params(&self) -> &HexasphereParams<T> {
        &self.params
    }

    /// Projected lattice faces, neighbors resolved.
    pub fn faces(&self) -> &[Face<T>] {
        &self.faces
    }

    pub fn tiles(&self) -> &[Tile<T>] {
        &self.tiles
    }

    pub fn pentagon_count(&self) -> usize {
        self.count_kind(TileKind::Pentagon)
    }

    pub fn hexagon_count(&self) -> usize {
        self.count_kind(TileKind::Hexagon)
    }

    fn count_kind(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind() == kind).count()
    }

    pub fn mesh(&self) -> HexResult<Mesh<T>> {
        MeshAssembler::assemble(&self.tiles)
    }

    pub fn stats(&self) -> HexasphereStats {
        HexasphereStats {
            subdivisions: self.params.subdivisions,
            faces: self.faces.len(),
            pentagons: self.pentagon_count(),
            hexagons: self.hexagon_count(),
        }
    }
}

/// Summary counts of a generated hexasphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexasphereStats {
    pub subdivisions: u32,
    pub faces: usize,
    pub pentagons: usize,
    pub hexagons: usize,
}

impl HexasphereStats {
    pub fn tiles(&self) -> usize {
        self.pentagons + self.hexagons
    }
}

impl fmt::Display for HexasphereStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hexasphere ({} subdivisions): {} faces → {} tiles ({} pentagons, {} hexagons)",
            self.subdivisions,
            self.faces,
            self.tiles(),
            self.pentagons,
            self.hexagons
        )
    }
}

/// Generates the render buffers for a hexasphere of lattice radius `radius`.
///
/// # Examples
///
/// ```
/// use hexasphere::generate_hexasphere;
///
/// let mesh = generate_hexasphere(60.0_f32, 2, 6.0)?;
/// assert_eq!(mesh.triangle_indices.len() % 3, 0);
/// assert_eq!(mesh.vertices.len(), mesh.normals.len());
/// # Ok::<(), hexasphere::HexasphereError>(())
/// ```
pub fn generate_hexasphere<T: Scalar>(radius: T, subdivisions: u32, offset: T) -> HexResult<Mesh<T>> {
    Hexasphere::build(&HexasphereParams::new(radius, subdivisions, offset))?.mesh()
}
