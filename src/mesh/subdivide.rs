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

use tracing::debug;

use crate::{mesh::face::Face, numeric::scalar::Scalar};

pub struct FaceSubdivider;

impl FaceSubdivider {
    /// Face count after `rounds` rounds starting from `faces`, or `None` on
    /// overflow.
    pub fn expected_faces(faces: usize, rounds: u32) -> Option<usize> {
        4usize
            .checked_pow(rounds)
            .and_then(|factor| factor.checked_mul(faces))
    }

    /// One round: every face is replaced by its four children, in order.
    pub fn subdivide_once<T: Scalar>(faces: &[Face<T>]) -> Vec<Face<T>> {
        let mut new_faces = Vec::with_capacity(faces.len() * 4);
        for face in faces {
            new_faces.extend(face.subdivide());
        }
        new_faces
    }

    pub fn subdivide<T: Scalar>(faces: Vec<Face<T>>, rounds: u32) -> Vec<Face<T>> {
        let mut current = faces;
        for round in 0..rounds {
            current = Self::subdivide_once(&current);
            debug!("Subdivision round {}: {} faces", round + 1, current.len());
        }
        current
    }
}
