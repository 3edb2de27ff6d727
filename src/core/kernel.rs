// Copyright @yucwang 2026

use crate::core::frame::PixelContext;
use crate::core::sampler::Sampler;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Caller-supplied per-ray work: intersect, build shading surfaces on hits,
/// and return the contribution of the ray. Must not fail for a well formed
/// ray; a miss returns the zero spectrum or a background value.
///
/// A kernel never sees the render target. The scheduler writes the returned
/// value at `(ctx.x, ctx.y)`, once per sub-sample.
pub trait Kernel: Sync {
    fn trace<S: Sampler>(&self, ray: &Ray3f, ctx: &PixelContext, sampler: &mut S) -> RGBSpectrum;
}
