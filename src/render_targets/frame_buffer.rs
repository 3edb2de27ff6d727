// Copyright @yucwang 2026

use crate::core::render_target::{PixelSink, RenderTarget};
use crate::math::bitmap::Bitmap;
use crate::math::spectrum::RGBSpectrum;

impl PixelSink for Bitmap {
    fn write(&mut self, x: usize, y: usize, value: RGBSpectrum) {
        self[(x, y)] = value;
    }
}

/// Last write wins. Cleared at the start of every frame.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    bitmap: Bitmap,
    frames_completed: u32,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { bitmap: Bitmap::new(width, height), frames_completed: 0 }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn frames_completed(&self) -> u32 {
        self.frames_completed
    }
}

impl RenderTarget for FrameBuffer {
    fn begin_frame(&mut self) {
        self.bitmap.fill(RGBSpectrum::default());
    }

    fn end_frame(&mut self) {
        self.frames_completed += 1;
    }

    fn pixel_ref(&mut self) -> &mut dyn PixelSink {
        &mut self.bitmap
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.bitmap.width(), self.bitmap.height())
    }
}

#[cfg(test)]
mod tests {
    use super::FrameBuffer;
    use crate::core::render_target::RenderTarget;
    use crate::math::spectrum::RGBSpectrum;

    #[test]
    fn test_overwrite_and_clear() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.begin_frame();
        fb.pixel_ref().write(1, 0, RGBSpectrum::splat(1.0));
        fb.pixel_ref().write(1, 0, RGBSpectrum::splat(2.0));
        fb.end_frame();
        assert_eq!(fb.bitmap()[(1, 0)], RGBSpectrum::splat(2.0));
        assert_eq!(fb.frames_completed(), 1);

        fb.begin_frame();
        assert!(fb.bitmap()[(1, 0)].is_black());
    }
}
