// Copyright @yucwang 2021

pub extern crate nalgebra as na;

pub mod core;
pub mod io;
pub mod kernels;
pub mod materials;
pub mod math;
pub mod render_targets;
pub mod schedulers;
pub mod sensors;
pub mod textures;

pub use self::core::error::{ConfigError, OutputError, TextureError};
pub use self::core::frame::{FrameParams, FrameStats, PixelContext, Viewport};
pub use self::core::kernel::Kernel;
pub use self::core::pixel_sampler::{CenterSampling, JitteredSampling, PixelSamplerKind, PixelSampling, Supersampling};
pub use self::core::render_target::{PixelSink, RenderTarget};
pub use self::core::sampler::{RandomSampler, Sampler};
pub use self::core::shading::{SampleResult, Shading};
pub use self::core::surface::ShadingSurface;
pub use self::materials::{Emissive, Material, Matte};
pub use self::math::spectrum::{RGBSpectrum, Spectrum};
pub use self::schedulers::{Scheduler, SimpleScheduler, TiledScheduler};
