// Copyright 2020 @TwoCookingMice

use super::constants::{ Float, Matrix4f, Vector3f, Vector4f };
use crate::core::error::ConfigError;

use nalgebra::{ Perspective3, Point3, Orthographic3 };

/// A projective transform together with its inverse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix4f,
    inv_matrix: Matrix4f
}

impl Default for Transform {
    fn default() -> Self {
        Self { matrix: Matrix4f::identity(),
               inv_matrix: Matrix4f::identity() }
    }
}

fn is_finite(m: &Matrix4f) -> bool {
    m.iter().all(|v| v.is_finite())
}

impl Transform {
    /// Inverts `matrix` once. `which` names the matrix in the error.
    pub fn try_new(matrix: Matrix4f, which: &'static str) -> Result<Self, ConfigError> {
        if !is_finite(&matrix) {
            return Err(ConfigError::NonFiniteMatrix { which });
        }

        match matrix.try_inverse() {
            Some(inv_matrix) if is_finite(&inv_matrix) => Ok(Self { matrix, inv_matrix }),
            _ => Err(ConfigError::SingularMatrix { which }),
        }
    }

    pub fn apply_point(&self, p: Vector3f) -> Vector3f {
        project(&self.matrix, p)
    }

    pub fn inv_apply_point(&self, p: Vector3f) -> Vector3f {
        project(&self.inv_matrix, p)
    }
}

fn project(m: &Matrix4f, p: Vector3f) -> Vector3f {
    let h = m * Vector4f::new(p.x, p.y, p.z, 1.0);
    Vector3f::new(h.x / h.w, h.y / h.w, h.z / h.w)
}

/// View and projection transforms of one frame, inverted once at frame setup.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraTransforms {
    view: Transform,
    proj: Transform,
}

impl CameraTransforms {
    pub fn try_new(view_matrix: Matrix4f, proj_matrix: Matrix4f) -> Result<Self, ConfigError> {
        Ok(Self {
            view: Transform::try_new(view_matrix, "view")?,
            proj: Transform::try_new(proj_matrix, "projection")?,
        })
    }

    pub fn identity() -> Self {
        Self { view: Transform::default(), proj: Transform::default() }
    }

    /// Maps a point in normalized device coordinates back to world space,
    /// through inverse(projection) and then inverse(view).
    pub fn unproject(&self, ndc: Vector3f) -> Vector3f {
        self.view.inv_apply_point(self.proj.inv_apply_point(ndc))
    }
}

pub fn look_at(eye: Vector3f, target: Vector3f, up: Vector3f) -> Matrix4f {
    Matrix4f::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
}

pub fn perspective(fov_y_radians: Float, aspect: Float, z_near: Float, z_far: Float) -> Matrix4f {
    Perspective3::new(aspect, fov_y_radians, z_near, z_far).to_homogeneous()
}

pub fn orthographic(left: Float, right: Float, bottom: Float, top: Float,
                    z_near: Float, z_far: Float) -> Matrix4f {
    Orthographic3::new(left, right, bottom, top, z_near, z_far).to_homogeneous()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_singular_matrix_is_rejected() {
        let err = Transform::try_new(Matrix4f::zeros(), "view").unwrap_err();
        assert_eq!(err, ConfigError::SingularMatrix { which: "view" });
    }

    #[test]
    fn test_non_finite_matrix_is_rejected() {
        let mut m = Matrix4f::identity();
        m[(0, 3)] = Float::NAN;
        let err = CameraTransforms::try_new(Matrix4f::identity(), m).unwrap_err();
        assert_eq!(err, ConfigError::NonFiniteMatrix { which: "projection" });
    }

    #[test]
    fn test_point_round_trip() {
        let m = look_at(Vector3f::new(1.0, 2.0, 3.0), Vector3f::zeros(), Vector3f::y());
        let t = Transform::try_new(m, "view").unwrap();
        let p = Vector3f::new(0.3, -0.7, 2.0);
        let q = t.inv_apply_point(t.apply_point(p));
        assert_relative_eq!(p, q, epsilon = 1e-5);
    }

    #[test]
    fn test_unproject_perspective_center() {
        let view = look_at(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), Vector3f::y());
        let proj = perspective(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let transforms = CameraTransforms::try_new(view, proj).unwrap();

        let near = transforms.unproject(Vector3f::new(0.0, 0.0, -1.0));
        let far = transforms.unproject(Vector3f::new(0.0, 0.0, 1.0));
        assert_relative_eq!(near, Vector3f::new(0.0, 0.0, -0.1), epsilon = 1e-4);
        assert_relative_eq!(far.z, -100.0, epsilon = 1e-1);
    }
}
