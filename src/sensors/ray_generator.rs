// Copyright @yucwang 2026

use crate::core::frame::Viewport;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::transform::CameraTransforms;

/// Normalized device coordinates of a jittered pixel position.
pub fn pixel_to_ndc(x: u32, y: u32, jitter: &Vector2f, viewport: &Viewport) -> Vector2f {
    let px = (x - viewport.x) as Float + jitter.x;
    let py = (y - viewport.y) as Float + jitter.y;
    Vector2f::new(
        2.0 * px / viewport.width as Float - 1.0,
        2.0 * py / viewport.height as Float - 1.0,
    )
}

/// Primary ray through pixel (x, y) offset by `jitter`. The origin is the
/// unprojected near-plane point, the direction points at the unprojected
/// far-plane point. Holds no state between calls.
pub fn make_primary_ray(x: u32,
                        y: u32,
                        jitter: &Vector2f,
                        viewport: &Viewport,
                        transforms: &CameraTransforms) -> Ray3f {
    let ndc = pixel_to_ndc(x, y, jitter, viewport);
    let near = transforms.unproject(Vector3f::new(ndc.x, ndc.y, -1.0));
    let far = transforms.unproject(Vector3f::new(ndc.x, ndc.y, 1.0));

    Ray3f::new(near, far - near, None, None)
}
