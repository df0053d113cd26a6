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

//! Geodesic hexasphere generation.
//!
//! An icosahedron is subdivided, projected onto a sphere, and converted into
//! its dual: one tile per lattice point, twelve pentagons and the rest
//! hexagons. Each tile is raised along its normal and triangulated, and the
//! result is flattened into vertex, index and normal buffers.
//!
//! ```
//! use hexasphere::{Hexasphere, HexasphereParams};
//!
//! let sphere = Hexasphere::build(&HexasphereParams::new(60.0_f64, 2, 6.0))?;
//! assert_eq!(sphere.pentagon_count(), 12);
//! assert_eq!(sphere.hexagon_count(), 150);
//!
//! let mesh = sphere.mesh()?;
//! mesh.validate()?;
//! # Ok::<(), hexasphere::HexasphereError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod hexasphere;
pub mod io;
pub mod mesh;
pub mod numeric;
pub mod params;

pub use error::{HexResult, HexasphereError};
pub use hexasphere::{Hexasphere, HexasphereStats, generate_hexasphere};
pub use mesh::{AdjacencyStrategy, Mesh, Tile, TileKind};
pub use numeric::Scalar;
pub use params::HexasphereParams;
