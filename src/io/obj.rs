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

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{mesh::assembler::Mesh, numeric::scalar::Scalar};

pub fn write_obj<T: Scalar, P: AsRef<Path>>(mesh: &Mesh<T>, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_obj_to(mesh, &mut out)?;
    out.flush()
}

/// Writes `v`, `vn` and `f` records. Normals share the vertex numbering, so
/// faces reference both with the same index.
pub fn write_obj_to<T: Scalar, W: Write>(mesh: &Mesh<T>, out: &mut W) -> io::Result<()> {
    // 1) write vertices
    for v in &mesh.vertices {
        writeln!(
            out,
            "v {:?} {:?} {:?}",
            v.x().to_f64_lossy(),
            v.y().to_f64_lossy(),
            v.z().to_f64_lossy()
        )?;
    }

    // 2) write normals
    for n in &mesh.normals {
        let c = n.coords();
        writeln!(
            out,
            "vn {:?} {:?} {:?}",
            c[0].to_f64_lossy(),
            c[1].to_f64_lossy(),
            c[2].to_f64_lossy()
        )?;
    }

    // 3) write faces (1-based indices)
    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }

    Ok(())
}
