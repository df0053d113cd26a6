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

//! Error types for hexasphere generation.

use thiserror::Error;

/// Errors that can occur while generating a hexasphere.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexasphereError {
    /// A parameter is outside its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The requested subdivision count would exceed the face budget.
    #[error("Subdivision would exceed maximum face count ({projected} faces, max {max})")]
    TooManyFaces {
        /// Face count after subdivision, saturated at `usize::MAX`.
        projected: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Subdivision or adjacency produced a lattice the tiler cannot handle.
    #[error("Topology inconsistency at {point}: {reason}")]
    TopologyInconsistency {
        /// Lattice point (or face) the failure was detected at.
        point: String,
        /// What went wrong.
        reason: String,
    },

    /// A zero-length or non-finite vector where a direction was required.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

impl HexasphereError {
    pub(crate) fn topology(point: impl std::fmt::Debug, reason: impl Into<String>) -> Self {
        Self::TopologyInconsistency {
            point: format!("{point:?}"),
            reason: reason.into(),
        }
    }
}

/// Result type for hexasphere operations.
pub type HexResult<T> = std::result::Result<T, HexasphereError>;
