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
    error::HexResult,
    geometry::Point3,
    mesh::{
        face::Face,
        tile::{Tile, TileSettings},
    },
    numeric::scalar::Scalar,
};

pub type IncidentFaces = SmallVec<[usize; 6]>;

/// Groups faces by the lattice points they touch.
///
/// Points are kept in the order they are first registered, so the tiles
/// built from the storage come out in a deterministic order.
#[derive(Debug, Clone, Default)]
pub struct DualVertexAggregator<T: Scalar> {
    index: AHashMap<Point3<T>, usize>,
    entries: Vec<(Point3<T>, IncidentFaces)>,
}

impl<T: Scalar> DualVertexAggregator<T> {
    pub fn new() -> Self {
        Self {
            index: AHashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn add_point(&mut self, point: Point3<T>, face: usize) {
        match self.index.get(&point) {
            Some(&slot) => self.entries[slot].1.push(face),
            None => {
                self.index.insert(point, self.entries.len());
                let mut faces = IncidentFaces::new();
                faces.push(face);
                self.entries.push((point, faces));
            }
        }
    }

    pub fn add_face(&mut self, face_idx: usize, face: &Face<T>) {
        for corner in face.corners() {
            self.add_point(corner, face_idx);
        }
    }

    pub fn from_faces(faces: &[Face<T>]) -> Self {
        let mut storage = Self::new();
        for (f, face) in faces.iter().enumerate() {
            storage.add_face(f, face);
        }
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn incident_faces(&self, point: &Point3<T>) -> Option<&[usize]> {
        self.index
            .get(point)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Point3<T>, &[usize])> {
        self.entries.iter().map(|(p, faces)| (p, faces.as_slice()))
    }

    /// One tile per registered point. Fails on the first point whose arity is
    /// not 5 or 6, or whose ring cannot be walked.
    pub fn find_shape_faces(
        &self,
        faces: &[Face<T>],
        settings: &TileSettings<T>,
    ) -> HexResult<Vec<Tile<T>>> {
        let tiles = self
            .entries
            .iter()
            .map(|(point, bag)| Tile::assemble(*point, bag, faces, settings))
            .collect::<HexResult<Vec<_>>>()?;
        debug!("Assembled {} tiles from {} lattice points", tiles.len(), self.len());
        Ok(tiles)
    }
}
