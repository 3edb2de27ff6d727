// Copyright @yucwang 2026

use crate::math::spectrum::RGBSpectrum;

/// Writable per-pixel slot of a render target.
pub trait PixelSink {
    fn write(&mut self, x: usize, y: usize, value: RGBSpectrum);
}

/// Destination of a frame. How writes to the same pixel combine (overwrite,
/// average, tonemapping) is up to the implementation.
pub trait RenderTarget {
    fn begin_frame(&mut self);

    fn end_frame(&mut self);

    fn pixel_ref(&mut self) -> &mut dyn PixelSink;

    fn dimensions(&self) -> (usize, usize);
}

/// Brackets a frame: `begin_frame` on creation, `end_frame` on drop, so every
/// exit path (including unwinding out of a kernel) closes the frame.
pub struct FrameGuard<'a, R: RenderTarget + ?Sized> {
    target: &'a mut R,
}

impl<'a, R: RenderTarget + ?Sized> FrameGuard<'a, R> {
    pub fn begin(target: &'a mut R) -> Self {
        log::debug!("begin frame");
        target.begin_frame();
        Self { target }
    }

    pub fn write(&mut self, x: usize, y: usize, value: RGBSpectrum) {
        self.target.pixel_ref().write(x, y, value);
    }
}

impl<'a, R: RenderTarget + ?Sized> Drop for FrameGuard<'a, R> {
    fn drop(&mut self) {
        self.target.end_frame();
        log::debug!("end frame");
    }
}
