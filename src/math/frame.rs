// Copyright @yucwang 2023

use super::real::{ Real, real };
use nalgebra::Vector3;

/// Orthonormal shading frame; `z` is the normal.
#[derive(Debug, Clone, Copy)]
pub struct Frame<T: Real> {
    x: Vector3<T>,
    y: Vector3<T>,
    z: Vector3<T>
}

impl<T: Real> Frame<T> {
    pub fn from_normal(n: &Vector3<T>) -> Frame<T> {
        let up = if n.z.abs() < real(0.999) {
            Vector3::z()
        } else {
            Vector3::x()
        };
        let x = n.cross(&up).normalize();
        let y = n.cross(&x).normalize();

        Frame { x, y, z: *n }
    }

    pub fn to_local(&self, v: &Vector3<T>) -> Vector3<T> {
        Vector3::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    pub fn from_local(&self, v: &Vector3<T>) -> Vector3<T> {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
}
