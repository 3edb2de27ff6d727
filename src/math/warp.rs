// Copyright @yucwang 2023

use super::real::{ Real, real };
use nalgebra::{ Vector2, Vector3 };

pub fn sample_uniform_disk_concentric<T: Real>(u: &Vector2<T>) -> Vector2<T> {
    let one = T::one();
    let two: T = real(2.0);
    let r1 = two * u.x - one;
    let r2 = two * u.y - one;

    if r1 == T::zero() && r2 == T::zero() {
        return Vector2::zeros();
    }

    let (r, phi) = if r1 * r1 > r2 * r2 {
        (r1, T::frac_pi_4() * (r2 / r1))
    } else {
        (r2, T::frac_pi_2() - T::frac_pi_4() * (r1 / r2))
    };

    let (sin_phi, cos_phi) = phi.sin_cos();
    Vector2::new(r * cos_phi, r * sin_phi)
}

/// Cosine weighted direction around +z.
pub fn sample_cosine_hemisphere<T: Real>(u: &Vector2<T>) -> Vector3<T> {
    let p = sample_uniform_disk_concentric(u);
    let z = (T::one() - p.x * p.x - p.y * p.y).max(T::zero()).sqrt();

    Vector3::new(p.x, p.y, z)
}

pub fn sample_cosine_hemisphere_pdf<T: Real>(cos_theta: T) -> T {
    cos_theta * T::frac_1_pi()
}
