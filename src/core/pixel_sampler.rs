// Copyright @yucwang 2026

use crate::core::error::ConfigError;
use crate::core::sampler::Sampler;
use crate::math::constants::Vector2f;

/// Tag of the pixel-sampling strategy, handed to kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelSamplerKind {
    Center,
    Jittered,
    Supersample(u32),
}

/// Setup-time pixel-sampling strategy. Schedulers are generic over it, so the
/// choice is resolved at compile time rather than per pixel.
pub trait PixelSampling: Copy + Send + Sync {
    fn kind(&self) -> PixelSamplerKind;

    fn samples_per_pixel(&self) -> u32;

    /// Sub-pixel offset in [0, 1)^2 for the next sub-sample.
    fn jitter<S: Sampler>(&self, sampler: &mut S) -> Vector2f;
}

/// One sample through the pixel center.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterSampling;

impl PixelSampling for CenterSampling {
    fn kind(&self) -> PixelSamplerKind {
        PixelSamplerKind::Center
    }

    fn samples_per_pixel(&self) -> u32 {
        1
    }

    fn jitter<S: Sampler>(&self, _sampler: &mut S) -> Vector2f {
        Vector2f::new(0.5, 0.5)
    }
}

/// One uniformly jittered sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct JitteredSampling;

impl PixelSampling for JitteredSampling {
    fn kind(&self) -> PixelSamplerKind {
        PixelSamplerKind::Jittered
    }

    fn samples_per_pixel(&self) -> u32 {
        1
    }

    fn jitter<S: Sampler>(&self, sampler: &mut S) -> Vector2f {
        sampler.next_2d()
    }
}

/// `n` jittered samples per pixel.
#[derive(Debug, Clone, Copy)]
pub struct Supersampling {
    samples: u32,
}

impl Supersampling {
    pub fn new(samples: u32) -> Result<Self, ConfigError> {
        if samples == 0 {
            return Err(ConfigError::InvalidSampleCount(samples));
        }
        Ok(Self { samples })
    }
}

impl PixelSampling for Supersampling {
    fn kind(&self) -> PixelSamplerKind {
        PixelSamplerKind::Supersample(self.samples)
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples
    }

    fn jitter<S: Sampler>(&self, sampler: &mut S) -> Vector2f {
        sampler.next_2d()
    }
}
