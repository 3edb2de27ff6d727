// Copyright @yucwang 2023

use crate::core::sampler::Sampler;
use crate::core::shade_record::ShadeRecord;
use crate::core::shading::{SampleResult, Shading};
use crate::math::frame::Frame;
use crate::math::real::{Real, real};
use crate::math::spectrum::Spectrum;
use crate::math::warp::{sample_cosine_hemisphere, sample_cosine_hemisphere_pdf};
use nalgebra::Vector2;

/// Lambertian reflector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matte<T: Real> {
    ambient_color: Spectrum<T>,
    diffuse_color: Spectrum<T>,
    diffuse_scale: T,
}

impl<T: Real> Matte<T> {
    pub fn new(diffuse_color: Spectrum<T>, diffuse_scale: T) -> Self {
        Self {
            ambient_color: Spectrum::default(),
            diffuse_color,
            diffuse_scale,
        }
    }

    pub fn with_ambient(mut self, ambient_color: Spectrum<T>) -> Self {
        self.ambient_color = ambient_color;
        self
    }

    pub fn ambient_color(&self) -> Spectrum<T> {
        self.ambient_color
    }

    pub fn diffuse_color(&self) -> Spectrum<T> {
        self.diffuse_color
    }

    pub fn set_diffuse_color(&mut self, color: Spectrum<T>) {
        self.diffuse_color = color;
    }

    pub fn diffuse_scale(&self) -> T {
        self.diffuse_scale
    }

    pub fn set_diffuse_scale(&mut self, scale: T) {
        self.diffuse_scale = scale;
    }

    fn albedo(&self, record: &ShadeRecord<T>) -> Spectrum<T> {
        record.tex_color * self.diffuse_color * self.diffuse_scale
    }
}

impl<T: Real> Shading<T> for Matte<T> {
    fn ambient(&self) -> Spectrum<T> {
        self.ambient_color * self.diffuse_scale
    }

    fn shade(&self, record: &ShadeRecord<T>) -> Spectrum<T> {
        let n = record.faced_normal();
        let cos_theta = n.dot(&record.light_dir);
        if cos_theta <= T::zero() {
            return Spectrum::default();
        }

        self.albedo(record) * record.light_intensity * (cos_theta * T::frac_1_pi())
    }

    fn sample<S: Sampler>(&self, record: &ShadeRecord<T>, sampler: &mut S) -> SampleResult<T> {
        let u = sampler.next_2d();
        let u = Vector2::new(real::<T>(u.x as f64), real::<T>(u.y as f64));

        let frame = Frame::from_normal(&record.faced_normal());
        let local = sample_cosine_hemisphere(&u);
        let pdf = sample_cosine_hemisphere_pdf(local.z);
        if pdf <= T::zero() {
            return SampleResult::invalid();
        }

        let value = self.albedo(record) * T::frac_1_pi();
        if value.is_black() {
            return SampleResult::invalid();
        }

        SampleResult::new(value, frame.from_local(&local), pdf)
    }
}
