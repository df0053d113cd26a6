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

use ahash::AHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    error::{HexResult, HexasphereError},
    geometry::{Point3, Vector3},
    mesh::tile::Tile,
    numeric::scalar::Scalar,
};

/// Flat render buffers.
///
/// `normals[i]` belongs to `vertices[i]`; every three entries of
/// `triangle_indices` form one triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh<T: Scalar> {
    pub vertices: Vec<Point3<T>>,
    pub triangle_indices: Vec<u32>,
    pub normals: Vec<Vector3<T>>,
}

impl<T: Scalar> Mesh<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangle_indices: Vec::new(),
            normals: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle_indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangle_indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    pub fn vertex_array(&self) -> Vec<[T; 3]> {
        self.vertices.iter().map(|p| p.coords).collect()
    }

    pub fn normal_array(&self) -> Vec<[T; 3]> {
        self.normals.iter().map(|n| *n.coords()).collect()
    }

    /// Checks the buffer invariants a renderer relies on.
    pub fn validate(&self) -> HexResult<()> {
        if self.triangle_indices.len() % 3 != 0 {
            return Err(HexasphereError::topology(
                self.triangle_indices.len(),
                "index count is not a multiple of 3",
            ));
        }
        if self.normals.len() != self.vertices.len() {
            return Err(HexasphereError::topology(
                (self.vertices.len(), self.normals.len()),
                "normal count differs from vertex count",
            ));
        }
        if let Some(&bad) = self
            .triangle_indices
            .iter()
            .find(|&&i| i as usize >= self.vertices.len())
        {
            return Err(HexasphereError::topology(
                bad,
                format!("index out of bounds for {} vertices", self.vertices.len()),
            ));
        }
        Ok(())
    }
}

/// Flattens tiles into a [`Mesh`].
///
/// Each tile offsets the centroids of its ring faces along its own normal,
/// so neighboring tiles do not share vertices unless the offset is zero.
#[derive(Debug, Default)]
pub struct MeshAssembler<T: Scalar> {
    mesh: Mesh<T>,
    lookup: AHashMap<Point3<T>, u32>,
}

impl<T: Scalar> MeshAssembler<T> {
    pub fn new() -> Self {
        Self {
            mesh: Mesh::new(),
            lookup: AHashMap::new(),
        }
    }

    /// Index of `vertex`, appending it with `normal` the first time it is seen.
    fn vertex_index(&mut self, vertex: Point3<T>, normal: Vector3<T>) -> HexResult<u32> {
        if let Some(&idx) = self.lookup.get(&vertex) {
            return Ok(idx);
        }
        let idx = u32::try_from(self.mesh.vertices.len()).map_err(|_| {
            HexasphereError::InvalidConfiguration("mesh exceeds u32 vertex indices".into())
        })?;
        self.mesh.vertices.push(vertex);
        self.mesh.normals.push(normal);
        self.lookup.insert(vertex, idx);
        Ok(idx)
    }

    pub fn add_tile(&mut self, tile: &Tile<T>) -> HexResult<()> {
        let normal = *tile.normal();
        let mut local: SmallVec<[u32; 6]> = SmallVec::new();
        for vertex in tile.polygon() {
            local.push(self.vertex_index(*vertex, normal)?);
        }
        for tri in tile.triangle_pattern() {
            self.mesh
                .triangle_indices
                .extend(tri.iter().map(|&corner| local[corner]));
        }
        Ok(())
    }

    pub fn finish(self) -> Mesh<T> {
        self.mesh
    }

    pub fn assemble(tiles: &[Tile<T>]) -> HexResult<Mesh<T>> {
        let mut assembler = Self::new();
        for tile in tiles {
            assembler.add_tile(tile)?;
        }
        let mesh = assembler.finish();
        debug!(
            "Assembled mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }
}
