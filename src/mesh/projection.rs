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

use crate::{
    error::{HexResult, HexasphereError},
    geometry::{Point3, PointOps},
    mesh::face::Face,
    numeric::scalar::Scalar,
};

/// Pushes face corners onto the sphere of a given radius.
#[derive(Debug, Clone, Copy)]
pub struct RadiusProjector<T: Scalar> {
    pub radius: T,
}

impl<T: Scalar> RadiusProjector<T> {
    pub fn new(radius: T) -> Self {
        Self { radius }
    }

    pub fn project_point(&self, p: &Point3<T>) -> HexResult<Point3<T>> {
        let distance = p.distance_to_origin();
        if distance.is_zero() || !distance.is_finite() {
            return Err(HexasphereError::DegenerateGeometry(format!(
                "cannot project {p:?} onto a sphere: distance to origin is {distance}"
            )));
        }
        Ok(p.scale(self.radius / distance))
    }

    pub fn project_face(&self, face: &mut Face<T>) -> HexResult<()> {
        for corner in face.corners_mut() {
            *corner = self.project_point(corner)?;
        }
        Ok(())
    }

    pub fn project_all(&self, faces: &mut [Face<T>]) -> HexResult<()> {
        faces.iter_mut().try_for_each(|face| self.project_face(face))
    }
}
