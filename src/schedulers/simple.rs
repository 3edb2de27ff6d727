// Copyright @yucwang 2021

use super::{prepare_frame, render_pixel, Scheduler};
use crate::core::error::ConfigError;
use crate::core::frame::{FrameParams, FrameStats};
use crate::core::kernel::Kernel;
use crate::core::pixel_sampler::PixelSampling;
use crate::core::render_target::{FrameGuard, RenderTarget};
use crate::core::sampler::{pixel_seed, RandomSampler};
use std::time::Instant;

/// Sequential reference scheduler. Visits the viewport row by row, columns
/// inside rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleScheduler {
    seed: u64,
}

impl SimpleScheduler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Scheduler for SimpleScheduler {
    fn render_frame<K: Kernel, P: PixelSampling, R: RenderTarget>(
        &self,
        kernel: &K,
        params: FrameParams<'_, P, R>,
        frame_num: u32,
    ) -> Result<FrameStats, ConfigError> {
        let transforms = prepare_frame(&params)?;
        let start = Instant::now();
        let FrameParams { viewport, pixel_sampler, target, .. } = params;

        let mut guard = FrameGuard::begin(target);
        // Starts on the stream of the first pixel; every pixel reseeds it.
        let mut sampler = RandomSampler::new(pixel_seed(self.seed, frame_num, viewport.x, viewport.y));
        let mut samples = 0u64;

        if !viewport.is_empty() {
            for row in 0..viewport.height {
                let y = viewport.y + row;
                for column in 0..viewport.width {
                    let x = viewport.x + column;
                    render_pixel(kernel, &pixel_sampler, &mut sampler, x, y, frame_num,
                                 self.seed, &viewport, &transforms, |value| {
                        guard.write(x as usize, y as usize, value);
                        samples += 1;
                    });
                }
            }
        }
        drop(guard);

        let stats = FrameStats {
            frame_num,
            pixels: viewport.pixel_count(),
            samples,
            elapsed: start.elapsed(),
        };
        log::info!("frame {} done: {} pixels, {} samples in {:.3?}",
                   stats.frame_num, stats.pixels, stats.samples, stats.elapsed);
        Ok(stats)
    }
}
