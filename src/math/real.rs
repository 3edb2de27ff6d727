// Copyright @yucwang 2026

use nalgebra::RealField;

/// Scalar lane type of the shading core. Implemented for `f32` and `f64`.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}

#[inline]
pub fn real<T: Real>(value: f64) -> T {
    nalgebra::convert(value)
}
