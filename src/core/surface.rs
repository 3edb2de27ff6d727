// Copyright @yucwang 2023

use crate::core::sampler::Sampler;
use crate::core::shade_record::ShadeRecord;
use crate::core::shading::{SampleResult, Shading};
use crate::materials::Material;
use crate::math::real::Real;
use crate::math::spectrum::Spectrum;
use nalgebra::Vector3;

/// Shading data of one hit, bound to the material of the hit object.
///
/// Built by a kernel at an intersection and dropped once that hit is done.
/// The material is held by value; two surfaces never share one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingSurface<T: Real> {
    pub geometric_normal: Vector3<T>,
    pub shading_normal: Vector3<T>,
    pub tex_color: Option<Spectrum<T>>,
    pub material: Material<T>,
}

impl<T: Real> ShadingSurface<T> {
    pub fn new(geometric_normal: Vector3<T>,
               shading_normal: Vector3<T>,
               material: Material<T>) -> Self {
        Self { geometric_normal, shading_normal, tex_color: None, material }
    }

    pub fn with_tex_color(mut self, tex_color: Spectrum<T>) -> Self {
        self.tex_color = Some(tex_color);
        self
    }

    fn tex_color_or_white(&self) -> Spectrum<T> {
        self.tex_color.unwrap_or_else(|| Spectrum::splat(T::one()))
    }

    fn record(&self, view_dir: Vector3<T>, light_dir: Vector3<T>,
              light_intensity: Spectrum<T>) -> ShadeRecord<T> {
        ShadeRecord {
            geometric_normal: self.geometric_normal,
            shading_normal: self.shading_normal,
            tex_color: self.tex_color_or_white(),
            view_dir,
            light_dir,
            light_intensity,
        }
    }

    pub fn ambient(&self) -> Spectrum<T> {
        self.material.ambient()
    }

    /// Response to one light. Callable once per light without side effects.
    pub fn shade(&self, view_dir: &Vector3<T>, light_dir: &Vector3<T>,
                 light_intensity: &Spectrum<T>) -> Spectrum<T> {
        let record = self.record(*view_dir, *light_dir, *light_intensity);
        self.material.shade(&record)
    }

    /// Stochastic contribution. Only the sampler state changes.
    pub fn sample<S: Sampler>(&self, view_dir: &Vector3<T>, sampler: &mut S) -> SampleResult<T> {
        let record = self.record(*view_dir, Vector3::zeros(), Spectrum::default());
        self.material.sample(&record, sampler)
    }
}
