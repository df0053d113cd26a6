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

//! Edge adjacency between the faces of the subdivided lattice.
//!
//! Two faces are neighbors when one of their edges matches exactly, endpoints
//! compared as an unordered pair. Every strategy leaves each face with its
//! neighbors in ascending arena order so results do not depend on the
//! strategy chosen.

use ahash::AHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    error::{HexResult, HexasphereError},
    geometry::CanonicalEdge,
    mesh::face::Face,
    numeric::scalar::Scalar,
};

pub const MAX_NEIGHBORS: usize = 3;

pub trait AdjacencyResolver<T: Scalar> {
    fn resolve(&self, faces: &mut [Face<T>]) -> HexResult<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdjacencyStrategy {
    /// All-pairs edge scan, O(F²).
    BruteForce,
    /// Edge-keyed hash index, O(F).
    #[default]
    EdgeHash,
}

impl AdjacencyStrategy {
    pub fn resolve<T: Scalar>(&self, faces: &mut [Face<T>]) -> HexResult<()> {
        debug!("Resolving adjacency for {} faces using {:?}", faces.len(), self);
        match self {
            AdjacencyStrategy::BruteForce => BruteForceAdjacency.resolve(faces),
            AdjacencyStrategy::EdgeHash => EdgeHashAdjacency.resolve(faces),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceAdjacency;

impl<T: Scalar> AdjacencyResolver<T> for BruteForceAdjacency {
    fn resolve(&self, faces: &mut [Face<T>]) -> HexResult<()> {
        let edges: Vec<[CanonicalEdge<T, 3>; 3]> = faces.iter().map(Face::edges).collect();

        for (f, own) in edges.iter().enumerate() {
            let mut neighbors: SmallVec<[usize; 3]> = SmallVec::new();
            for (g, theirs) in edges.iter().enumerate() {
                if f == g {
                    continue;
                }
                for e1 in theirs {
                    for e2 in own {
                        if e1 == e2 {
                            neighbors.push(g);
                        }
                    }
                }
            }
            if neighbors.len() > MAX_NEIGHBORS {
                return Err(HexasphereError::topology(
                    faces[f].corners(),
                    format!("face {f} has {} edge neighbors", neighbors.len()),
                ));
            }
            faces[f].neighbors = neighbors;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeHashAdjacency;

impl<T: Scalar> AdjacencyResolver<T> for EdgeHashAdjacency {
    fn resolve(&self, faces: &mut [Face<T>]) -> HexResult<()> {
        let mut edge_map: AHashMap<CanonicalEdge<T, 3>, SmallVec<[usize; 2]>> =
            AHashMap::with_capacity(faces.len() * 3 / 2);

        for (f, face) in faces.iter().enumerate() {
            for edge in face.edges() {
                edge_map.entry(edge).or_default().push(f);
            }
        }

        let mut neighbors: Vec<SmallVec<[usize; 3]>> = vec![SmallVec::new(); faces.len()];
        for (edge, owners) in &edge_map {
            if owners.len() > 2 {
                return Err(HexasphereError::topology(
                    (edge.a(), edge.b()),
                    format!("edge shared by {} faces", owners.len()),
                ));
            }
            for &f in owners {
                for &g in owners {
                    if f != g {
                        neighbors[f].push(g);
                    }
                }
            }
        }

        for (f, mut list) in neighbors.into_iter().enumerate() {
            if list.len() > MAX_NEIGHBORS {
                return Err(HexasphereError::topology(
                    faces[f].corners(),
                    format!("face {f} has {} edge neighbors", list.len()),
                ));
            }
            list.sort_unstable();
            faces[f].neighbors = list;
        }
        Ok(())
    }
}
