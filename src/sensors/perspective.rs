// Copyright @yucwang 2026

use crate::math::constants::{Float, Matrix4f, Vector3f};
use crate::math::transform::{look_at, perspective};

/// Pinhole camera described by eye, target and field of view. Produces the
/// view and projection matrices a scheduler consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    eye: Vector3f,
    target: Vector3f,
    up: Vector3f,
    fov_y: Float,
    aspect: Float,
    near_clip: Float,
    far_clip: Float,
}

impl PerspectiveCamera {
    pub fn new(eye: Vector3f,
               target: Vector3f,
               up: Vector3f,
               fov_y_radians: Float,
               aspect: Float,
               near_clip: Float,
               far_clip: Float) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y: fov_y_radians,
            aspect,
            near_clip,
            far_clip,
        }
    }

    pub fn view_matrix(&self) -> Matrix4f {
        look_at(self.eye, self.target, self.up)
    }

    pub fn proj_matrix(&self) -> Matrix4f {
        perspective(self.fov_y, self.aspect, self.near_clip, self.far_clip)
    }

    pub fn describe(&self) -> String {
        format!("PerspectiveCamera [eye={:?}, target={:?}, fov_y={}, aspect={}, near={}, far={}]",
                self.eye.as_slice(), self.target.as_slice(), self.fov_y, self.aspect,
                self.near_clip, self.far_clip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::Viewport;
    use crate::math::constants::Vector2f;
    use crate::math::transform::CameraTransforms;
    use crate::sensors::ray_generator::make_primary_ray;
    use approx::assert_relative_eq;

    #[test]
    fn test_perspective_camera_center_ray() {
        let origin = Vector3f::new(0.0, 0.0, 0.0);
        let target = Vector3f::new(0.0, 0.0, -1.0);
        let up = Vector3f::new(0.0, 1.0, 0.0);
        let cam = PerspectiveCamera::new(origin, target, up, std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let transforms = CameraTransforms::try_new(cam.view_matrix(), cam.proj_matrix()).unwrap();

        let ray = make_primary_ray(0, 0, &Vector2f::new(0.5, 0.5), &Viewport::from_size(1, 1), &transforms);
        let dir = ray.dir();

        assert_relative_eq!(dir.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(dir.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(dir.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_field_of_view_edges() {
        let cam = PerspectiveCamera::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), Vector3f::y(),
                                         std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let transforms = CameraTransforms::try_new(cam.view_matrix(), cam.proj_matrix()).unwrap();

        // Pixel corner at the right edge of a 90 degree frustum: 45 degrees off axis.
        let ray = make_primary_ray(0, 0, &Vector2f::new(1.0, 0.5), &Viewport::from_size(1, 1), &transforms);
        assert_relative_eq!(ray.dir().x, -ray.dir().z, epsilon = 1e-4);
        assert!(ray.dir().x > 0.0);
    }
}
