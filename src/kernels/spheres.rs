// Copyright @yucwang 2026

use crate::core::frame::PixelContext;
use crate::core::kernel::Kernel;
use crate::core::sampler::Sampler;
use crate::core::surface::ShadingSurface;
use crate::core::texture::Texture;
use crate::materials::Material;
use crate::math::constants::{Float, Vector2f, Vector3f, EPSILON, INV_PI};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use std::sync::Arc;

pub struct Sphere {
    pub center: Vector3f,
    pub radius: Float,
    pub material: Material<Float>,
    pub texture: Option<Arc<dyn Texture>>,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float, material: Material<Float>) -> Self {
        Self { center, radius, material, texture: None }
    }

    pub fn with_texture(mut self, texture: Arc<dyn Texture>) -> Self {
        self.texture = Some(texture);
        self
    }

    fn intersect(&self, ray: &Ray3f) -> Option<Float> {
        let oc = ray.origin() - self.center;
        let half_b = oc.dot(&ray.dir());
        let c = oc.norm_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        [-half_b - sqrt_d, -half_b + sqrt_d]
            .into_iter()
            .find(|t| ray.test_segment(*t))
    }

    fn uv(&self, n: &Vector3f) -> Vector2f {
        let u = 0.5 + n.z.atan2(n.x) * 0.5 * INV_PI;
        let v = (-n.y).clamp(-1.0, 1.0).acos() * INV_PI;
        Vector2f::new(u, v)
    }
}

struct Hit<'a> {
    p: Vector3f,
    sphere: &'a Sphere,
}

/// Demo kernel: a list of spheres lit by one directional light, with
/// `max_depth` sampled bounces. Brute force intersection.
pub struct SphereKernel {
    spheres: Vec<Sphere>,
    light_dir: Vector3f,
    light_intensity: RGBSpectrum,
    background: RGBSpectrum,
    max_depth: u32,
}

impl SphereKernel {
    pub fn new(light_dir: Vector3f, light_intensity: RGBSpectrum) -> Self {
        Self {
            spheres: Vec::new(),
            light_dir: light_dir.normalize(),
            light_intensity,
            background: RGBSpectrum::default(),
            max_depth: 0,
        }
    }

    pub fn with_background(mut self, background: RGBSpectrum) -> Self {
        self.background = background;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    fn closest_hit(&self, ray: &Ray3f) -> Option<Hit<'_>> {
        self.spheres.iter()
            .filter_map(|s| s.intersect(ray).map(|t| (t, s)))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(t, sphere)| Hit { p: ray.at(t), sphere })
    }

    fn radiance<S: Sampler>(&self, ray: &Ray3f, sampler: &mut S, depth: u32) -> RGBSpectrum {
        let hit = match self.closest_hit(ray) {
            Some(h) => h,
            None => return self.background,
        };

        let n = (hit.p - hit.sphere.center) / hit.sphere.radius;
        let mut surf = ShadingSurface::new(n, n, hit.sphere.material);
        if let Some(texture) = &hit.sphere.texture {
            surf = surf.with_tex_color(texture.eval(hit.sphere.uv(&n)));
        }

        let wo = -ray.dir();
        let mut l = surf.ambient() + surf.shade(&wo, &self.light_dir, &self.light_intensity);

        if depth < self.max_depth {
            let sample = surf.sample(&wo, sampler);
            if sample.is_valid() && sample.reflection_dir != Vector3f::zeros() {
                let cos_theta = sample.reflection_dir.dot(&n).abs();
                let bounce = Ray3f::new(hit.p, sample.reflection_dir, Some(EPSILON), None);
                let li = self.radiance(&bounce, sampler, depth + 1);
                l += sample.value * li * (cos_theta / sample.pdf);
            }
        }

        l
    }
}

impl Kernel for SphereKernel {
    fn trace<S: Sampler>(&self, ray: &Ray3f, _ctx: &PixelContext, sampler: &mut S) -> RGBSpectrum {
        self.radiance(ray, sampler, 0)
    }
}
