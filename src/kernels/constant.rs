// Copyright @yucwang 2026

use crate::core::frame::PixelContext;
use crate::core::kernel::Kernel;
use crate::core::sampler::Sampler;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Returns the same contribution for every ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantKernel {
    value: RGBSpectrum,
}

impl ConstantKernel {
    pub fn new(value: RGBSpectrum) -> Self {
        Self { value }
    }
}

impl Kernel for ConstantKernel {
    fn trace<S: Sampler>(&self, _ray: &Ray3f, _ctx: &PixelContext, _sampler: &mut S) -> RGBSpectrum {
        self.value
    }
}
