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

//! Generation parameters.

use crate::{
    error::{HexResult, HexasphereError},
    mesh::{
        adjacency::AdjacencyStrategy,
        face::CENTROID_INFLATION,
        icosahedron::ICOSAHEDRON_FACE_COUNT,
        subdivide::FaceSubdivider,
        tile::{TileSettings, WINDING_THRESHOLD},
    },
    numeric::scalar::Scalar,
};

/// Outer size used by [`HexasphereParams::default`].
pub const DEFAULT_OUTER_SIZE: f64 = 60.0;
pub const DEFAULT_OFFSET: f64 = 6.0;
pub const DEFAULT_SUBDIVISIONS: u32 = 2;

/// 20 · 4⁷ faces.
pub const DEFAULT_MAX_FACES: usize = 327_680;

/// Parameters for hexasphere generation.
#[derive(Debug, Clone, PartialEq)]
pub struct HexasphereParams<T: Scalar> {
    /// Radius the subdivided lattice is projected onto.
    pub radius: T,

    /// Number of midpoint subdivision rounds.
    pub subdivisions: u32,

    /// Distance tile centroids are pushed out along the tile normal.
    pub offset: T,

    /// Scale applied to face centroids before offsetting.
    pub centroid_inflation: T,

    /// Facing test cutoff, see [`crate::mesh::tile::WINDING_THRESHOLD`].
    pub winding_threshold: T,

    /// How face adjacency is computed.
    pub adjacency: AdjacencyStrategy,

    /// Maximum faces allowed after subdivision (prevents memory issues).
    pub max_faces: usize,
}

impl<T: Scalar> Default for HexasphereParams<T> {
    fn default() -> Self {
        Self::from_outer_size(
            T::from_literal(DEFAULT_OUTER_SIZE),
            T::from_literal(DEFAULT_OFFSET),
        )
    }
}

impl<T: Scalar> HexasphereParams<T> {
    pub fn new(radius: T, subdivisions: u32, offset: T) -> Self {
        Self {
            radius,
            subdivisions,
            offset,
            centroid_inflation: T::from_literal(CENTROID_INFLATION),
            winding_threshold: T::from_literal(WINDING_THRESHOLD),
            adjacency: AdjacencyStrategy::default(),
            max_faces: DEFAULT_MAX_FACES,
        }
    }

    /// Engine-facing convention: an object of overall `size` whose tiles are
    /// raised by `offset` is generated with a lattice radius of
    /// `(size - offset) / 2`.
    pub fn from_outer_size(size: T, offset: T) -> Self {
        Self::new((size - offset) / T::two(), DEFAULT_SUBDIVISIONS, offset)
    }

    #[must_use]
    pub fn with_radius(mut self, radius: T) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: T) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_centroid_inflation(mut self, inflation: T) -> Self {
        self.centroid_inflation = inflation;
        self
    }

    #[must_use]
    pub fn with_winding_threshold(mut self, threshold: T) -> Self {
        self.winding_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_adjacency(mut self, adjacency: AdjacencyStrategy) -> Self {
        self.adjacency = adjacency;
        self
    }

    #[must_use]
    pub fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Face count after subdivision, `None` if it does not fit in `usize`.
    pub fn expected_faces(&self) -> Option<usize> {
        FaceSubdivider::expected_faces(ICOSAHEDRON_FACE_COUNT, self.subdivisions)
    }

    /// Lattice point count, `10 · 4^D + 2` (12 pentagons, the rest hexagons).
    pub fn expected_tiles(&self) -> Option<usize> {
        self.expected_faces().map(|faces| faces / 2 + 2)
    }

    pub fn tile_settings(&self) -> TileSettings<T> {
        TileSettings {
            centroid_inflation: self.centroid_inflation,
            winding_threshold: self.winding_threshold,
        }
    }

    /// Rejects parameters the pipeline cannot run with.
    pub fn validate(&self) -> HexResult<()> {
        if !self.radius.is_finite() || self.radius <= T::zero() {
            return Err(HexasphereError::InvalidConfiguration(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if !self.offset.is_finite() {
            return Err(HexasphereError::InvalidConfiguration(format!(
                "offset must be finite, got {}",
                self.offset
            )));
        }
        if !self.centroid_inflation.is_finite() || self.centroid_inflation <= T::zero() {
            return Err(HexasphereError::InvalidConfiguration(format!(
                "centroid inflation must be positive and finite, got {}",
                self.centroid_inflation
            )));
        }
        if !self.winding_threshold.is_finite() {
            return Err(HexasphereError::InvalidConfiguration(format!(
                "winding threshold must be finite, got {}",
                self.winding_threshold
            )));
        }

        let projected = self.expected_faces().unwrap_or(usize::MAX);
        if projected > self.max_faces {
            return Err(HexasphereError::TooManyFaces {
                projected,
                max: self.max_faces,
            });
        }
        Ok(())
    }
}
