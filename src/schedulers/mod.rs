// Copyright @yucwang 2021

pub mod simple;
pub mod tiled;

use crate::core::error::ConfigError;
use crate::core::frame::{FrameParams, FrameStats, PixelContext, Viewport};
use crate::core::kernel::Kernel;
use crate::core::pixel_sampler::PixelSampling;
use crate::core::render_target::RenderTarget;
use crate::core::sampler::{pixel_seed, Sampler};
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::CameraTransforms;
use crate::sensors::ray_generator::make_primary_ray;

pub use self::simple::SimpleScheduler;
pub use self::tiled::TiledScheduler;

/// Drives one frame: one primary ray per pixel and sub-sample, one kernel
/// call per ray, one render-target write per kernel result.
pub trait Scheduler {
    fn render_frame<K: Kernel, P: PixelSampling, R: RenderTarget>(
        &self,
        kernel: &K,
        params: FrameParams<'_, P, R>,
        frame_num: u32,
    ) -> Result<FrameStats, ConfigError>;
}

/// Frame setup shared by all schedulers. Runs before the render target is
/// notified, so a rejected frame fires no lifecycle hook.
fn prepare_frame<P: PixelSampling, R: RenderTarget>(
    params: &FrameParams<'_, P, R>,
) -> Result<CameraTransforms, ConfigError> {
    let transforms = CameraTransforms::try_new(params.view_matrix, params.proj_matrix)
        .map_err(|e| {
            log::warn!("rejecting frame: {}", e);
            e
        })?;

    let (width, height) = params.target.dimensions();
    let vp = params.viewport;
    if !vp.is_empty() && !vp.fits(width, height) {
        let err = ConfigError::ViewportOutOfBounds {
            x: vp.x,
            y: vp.y,
            width: vp.width,
            height: vp.height,
            target_width: width,
            target_height: height,
        };
        log::warn!("rejecting frame: {}", err);
        return Err(err);
    }

    Ok(transforms)
}

/// Per-pixel body. Reseeds `sampler` from the pixel identity so the result
/// does not depend on traversal order or on the thread that runs it.
#[allow(clippy::too_many_arguments)]
fn render_pixel<K, P, S, F>(kernel: &K,
                            pixel_sampler: &P,
                            sampler: &mut S,
                            x: u32,
                            y: u32,
                            frame_num: u32,
                            base_seed: u64,
                            viewport: &Viewport,
                            transforms: &CameraTransforms,
                            mut emit: F)
where
    K: Kernel,
    P: PixelSampling,
    S: Sampler,
    F: FnMut(RGBSpectrum),
{
    sampler.reseed(pixel_seed(base_seed, frame_num, x, y));

    for sample_index in 0..pixel_sampler.samples_per_pixel() {
        let jitter = pixel_sampler.jitter(sampler);
        let ray = make_primary_ray(x, y, &jitter, viewport, transforms);
        let ctx = PixelContext {
            x,
            y,
            frame_num,
            sample_index,
            pixel_sampler: pixel_sampler.kind(),
            viewport: *viewport,
            transforms,
        };

        let value = kernel.trace(&ray, &ctx, sampler);
        debug_assert!(!value.has_nans(), "NaN radiance value for pixel ({}, {})", x, y);
        emit(value);
    }
}
