// Copyright @yucwang 2026

use crate::core::pixel_sampler::{PixelSamplerKind, PixelSampling};
use crate::core::render_target::RenderTarget;
use crate::math::constants::Matrix4f;
use crate::math::transform::CameraTransforms;
use std::time::Duration;

/// Pixel rectangle rendered by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the rectangle lies inside a `width` x `height` target. Its far
    /// edge must also be addressable as a `u32` pixel coordinate.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        match (self.x.checked_add(self.width), self.y.checked_add(self.height)) {
            (Some(x_end), Some(y_end)) => x_end as u64 <= width as u64 && y_end as u64 <= height as u64,
            _ => false,
        }
    }
}

/// Per-frame inputs of a scheduler. Supplied fresh for every frame.
pub struct FrameParams<'a, P: PixelSampling, R: RenderTarget> {
    pub view_matrix: Matrix4f,
    pub proj_matrix: Matrix4f,
    pub viewport: Viewport,
    pub pixel_sampler: P,
    pub target: &'a mut R,
}

impl<'a, P: PixelSampling, R: RenderTarget> FrameParams<'a, P, R> {
    pub fn new(view_matrix: Matrix4f, proj_matrix: Matrix4f, viewport: Viewport,
               pixel_sampler: P, target: &'a mut R) -> Self {
        Self { view_matrix, proj_matrix, viewport, pixel_sampler, target }
    }
}

/// Read-only context of the pixel a kernel is working on.
#[derive(Debug, Clone, Copy)]
pub struct PixelContext<'a> {
    pub x: u32,
    pub y: u32,
    pub frame_num: u32,
    pub sample_index: u32,
    pub pixel_sampler: PixelSamplerKind,
    pub viewport: Viewport,
    pub transforms: &'a CameraTransforms,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub frame_num: u32,
    pub pixels: u64,
    pub samples: u64,
    pub elapsed: Duration,
}
