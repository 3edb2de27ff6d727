// Copyright @yucwang 2026

use crate::core::render_target::{PixelSink, RenderTarget};
use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;
use crate::math::spectrum::RGBSpectrum;

#[derive(Debug, Clone)]
struct Accumulator {
    sum: Bitmap,
    counts: Vec<u32>,
}

impl PixelSink for Accumulator {
    fn write(&mut self, x: usize, y: usize, value: RGBSpectrum) {
        self.sum[(x, y)] += value;
        self.counts[x + self.sum.width() * y] += 1;
    }
}

/// Progressive accumulation: every pixel holds the mean of all samples
/// written to it since the last `reset`, across sub-samples and frames.
/// The resolved image is refreshed at `end_frame`.
#[derive(Debug, Clone)]
pub struct AccumulationBuffer {
    acc: Accumulator,
    resolved: Bitmap,
    frames_completed: u32,
}

impl AccumulationBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            acc: Accumulator {
                sum: Bitmap::new(width, height),
                counts: vec![0; width * height],
            },
            resolved: Bitmap::new(width, height),
            frames_completed: 0,
        }
    }

    pub fn reset(&mut self) {
        self.acc.sum.fill(RGBSpectrum::default());
        self.acc.counts.iter_mut().for_each(|c| *c = 0);
        self.resolved.fill(RGBSpectrum::default());
        self.frames_completed = 0;
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.resolved
    }

    pub fn sample_count(&self, x: usize, y: usize) -> u32 {
        self.acc.counts[x + self.acc.sum.width() * y]
    }

    pub fn frames_completed(&self) -> u32 {
        self.frames_completed
    }

    fn resolve(&mut self) {
        let width = self.resolved.width();
        for y in 0..self.resolved.height() {
            for x in 0..width {
                let count = self.acc.counts[x + width * y];
                self.resolved[(x, y)] = if count > 0 {
                    self.acc.sum[(x, y)] / (count as Float)
                } else {
                    RGBSpectrum::default()
                };
            }
        }
    }
}

impl RenderTarget for AccumulationBuffer {
    fn begin_frame(&mut self) {}

    fn end_frame(&mut self) {
        self.resolve();
        self.frames_completed += 1;
    }

    fn pixel_ref(&mut self) -> &mut dyn PixelSink {
        &mut self.acc
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.resolved.width(), self.resolved.height())
    }
}
