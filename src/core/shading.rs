// Copyright @yucwang 2023

use crate::core::sampler::Sampler;
use crate::core::shade_record::ShadeRecord;
use crate::math::real::Real;
use crate::math::spectrum::Spectrum;
use nalgebra::Vector3;

/// Outcome of `Shading::sample`. A zero `pdf` means no valid sample; in that
/// case `value` is zero as well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleResult<T: Real> {
    pub value: Spectrum<T>,
    pub reflection_dir: Vector3<T>,
    pub pdf: T,
}

impl<T: Real> SampleResult<T> {
    pub fn new(value: Spectrum<T>, reflection_dir: Vector3<T>, pdf: T) -> Self {
        Self { value, reflection_dir, pdf }
    }

    pub fn invalid() -> Self {
        Self {
            value: Spectrum::default(),
            reflection_dir: Vector3::zeros(),
            pdf: T::zero(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.pdf > T::zero()
    }
}

/// Three-operation contract every material variant honors.
pub trait Shading<T: Real> {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn ambient(&self) -> Spectrum<T>;

    fn shade(&self, record: &ShadeRecord<T>) -> Spectrum<T>;

    /// Must write `reflection_dir` in every case; variants that do not
    /// scatter write the zero vector.
    fn sample<S: Sampler>(&self, record: &ShadeRecord<T>, sampler: &mut S) -> SampleResult<T>;
}
