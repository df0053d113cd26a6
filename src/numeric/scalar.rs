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
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{Float, FloatConst};

/// Floating point type the hexasphere pipeline is generic over.
///
/// Adjacency and aggregation rely on exact equality of coordinates, so a
/// scalar must also expose a bit pattern that is consistent with `==`.
pub trait Scalar: Float + FloatConst + Debug + Display + Default + Send + Sync + 'static {
    fn from_literal(value: f64) -> Self;

    /// Bits used for hashing. `0.0` and `-0.0` compare equal and must map to
    /// the same key.
    fn key_bits(self) -> u64;

    fn to_f64_lossy(self) -> f64;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn three() -> Self {
        Self::two() + Self::one()
    }
}

impl Scalar for f32 {
    #[inline(always)]
    fn from_literal(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn key_bits(self) -> u64 {
        if self == 0.0 { 0 } else { self.to_bits() as u64 }
    }

    #[inline(always)]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn from_literal(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn key_bits(self) -> u64 {
        if self == 0.0 { 0 } else { self.to_bits() }
    }

    #[inline(always)]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}

/// Hashes a scalar through its [`Scalar::key_bits`].
#[inline(always)]
pub fn hash_scalar<T: Scalar, H: std::hash::Hasher>(value: T, state: &mut H) {
    value.key_bits().hash(state);
}
