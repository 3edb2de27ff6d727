// Copyright @yucwang 2023

use crate::math::real::Real;
use crate::math::spectrum::Spectrum;
use nalgebra::Vector3;

/// Inputs of one material evaluation. Built right before a `shade` or
/// `sample` call and dropped right after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeRecord<T: Real> {
    pub geometric_normal: Vector3<T>,
    pub shading_normal: Vector3<T>,
    pub tex_color: Spectrum<T>,
    pub view_dir: Vector3<T>,
    pub light_dir: Vector3<T>,
    pub light_intensity: Spectrum<T>,
}

impl<T: Real> ShadeRecord<T> {
    /// Shading normal flipped into the hemisphere of `view_dir`.
    pub fn faced_normal(&self) -> Vector3<T> {
        if self.shading_normal.dot(&self.view_dir) < T::zero() {
            -self.shading_normal
        } else {
            self.shading_normal
        }
    }
}
