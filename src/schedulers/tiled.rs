// Copyright @yucwang 2021

use super::{prepare_frame, render_pixel, Scheduler};
use crate::core::error::ConfigError;
use crate::core::frame::{FrameParams, FrameStats};
use crate::core::kernel::Kernel;
use crate::core::pixel_sampler::PixelSampling;
use crate::core::render_target::{FrameGuard, RenderTarget};
use crate::core::sampler::{pixel_seed, RandomSampler};
use crate::math::spectrum::RGBSpectrum;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

struct Block {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    // `samples_per_pixel` values per pixel, pixels in row-major order.
    values: Vec<RGBSpectrum>,
}

/// Multi-threaded scheduler. Workers pull square blocks of the viewport from
/// a shared counter and send finished blocks back; the calling thread does
/// every render-target write. Output is identical to `SimpleScheduler` with
/// the same seed.
#[derive(Debug, Clone, Copy)]
pub struct TiledScheduler {
    seed: u64,
    block_size: u32,
    threads: usize,
    show_progress: bool,
}

impl Default for TiledScheduler {
    fn default() -> Self {
        Self::new(0)
    }
}

impl TiledScheduler {
    pub fn new(seed: u64) -> Self {
        let threads = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            seed,
            block_size: 32,
            threads,
            show_progress: false,
        }
    }

    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.block_size = block_size.max(1);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn progress_bar(&self, total_blocks: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let progress = ProgressBar::new(total_blocks as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress
    }
}

impl Scheduler for TiledScheduler {
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

        let block_size = self.block_size;
        let blocks_x = viewport.width.div_ceil(block_size) as usize;
        let blocks_y = viewport.height.div_ceil(block_size) as usize;
        let total_blocks = blocks_x * blocks_y;
        let spp = pixel_sampler.samples_per_pixel() as usize;
        let x_end = viewport.x.saturating_add(viewport.width);
        let y_end = viewport.y.saturating_add(viewport.height);
        let mut samples = 0u64;

        if !viewport.is_empty() {
            let progress = self.progress_bar(total_blocks);
            let next_block = AtomicUsize::new(0);
            let worker_count = self.threads.min(total_blocks);
            let (tx, rx) = mpsc::channel::<Block>();

            thread::scope(|scope| {
                for _ in 0..worker_count {
                    let next_block = &next_block;
                    let transforms = &transforms;
                    let tx = tx.clone();
                    scope.spawn(move || {
                        // Every pixel reseeds the sampler, so its starting stream is irrelevant.
                        let mut sampler = RandomSampler::new(pixel_seed(self.seed, frame_num, viewport.x, viewport.y));
                        loop {
                            let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                            if block_index >= total_blocks {
                                break;
                            }

                            let bx = (block_index % blocks_x) as u32;
                            let by = (block_index / blocks_x) as u32;
                            let x0 = viewport.x + bx * block_size;
                            let y0 = viewport.y + by * block_size;
                            let x1 = x0.saturating_add(block_size).min(x_end);
                            let y1 = y0.saturating_add(block_size).min(y_end);

                            let pixel_count = ((x1 - x0) * (y1 - y0)) as usize;
                            let mut values = Vec::with_capacity(pixel_count * spp);
                            for y in y0..y1 {
                                for x in x0..x1 {
                                    render_pixel(kernel, &pixel_sampler, &mut sampler, x, y, frame_num,
                                                 self.seed, &viewport, transforms,
                                                 |value| values.push(value));
                                }
                            }
                            if tx.send(Block { x0, y0, x1, y1, values }).is_err() {
                                break;
                            }
                        }
                    });
                }

                drop(tx);
                for block in rx.iter() {
                    let mut values = block.values.iter();
                    for y in block.y0..block.y1 {
                        for x in block.x0..block.x1 {
                            for value in values.by_ref().take(spp) {
                                guard.write(x as usize, y as usize, *value);
                                samples += 1;
                            }
                        }
                    }
                    progress.inc(1);
                }
            });
            progress.finish_and_clear();
        }
        drop(guard);

        let stats = FrameStats {
            frame_num,
            pixels: viewport.pixel_count(),
            samples,
            elapsed: start.elapsed(),
        };
        log::info!("frame {} done: {} pixels, {} samples in {:.3?} on {} threads",
                   stats.frame_num, stats.pixels, stats.samples, stats.elapsed, self.threads);
        Ok(stats)
    }
}
