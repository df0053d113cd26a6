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

use std::hash::{Hash, Hasher};

use crate::{geometry::point::Point, numeric::scalar::Scalar};

/// Unordered pair of points. The smaller point (lexicographically) is kept
/// in `a`, so `(p, q)` and `(q, p)` build equal edges with equal hashes.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalEdge<T: Scalar, const N: usize> {
    a: Point<T, N>,
    b: Point<T, N>,
}

impl<T: Scalar, const N: usize> CanonicalEdge<T, N> {
    pub fn new(p1: &Point<T, N>, p2: &Point<T, N>) -> Self {
        if p1 < p2 {
            Self { a: *p1, b: *p2 }
        } else {
            Self { a: *p2, b: *p1 }
        }
    }

    pub fn a(&self) -> &Point<T, N> {
        &self.a
    }

    pub fn b(&self) -> &Point<T, N> {
        &self.b
    }

    pub fn contains(&self, p: &Point<T, N>) -> bool {
        self.a == *p || self.b == *p
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

impl<T: Scalar, const N: usize> PartialEq for CanonicalEdge<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl<T: Scalar, const N: usize> Eq for CanonicalEdge<T, N> {}

impl<T: Scalar, const N: usize> Hash for CanonicalEdge<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.hash(state);
        self.b.hash(state);
    }
}
