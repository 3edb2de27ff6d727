// Copyright @yucwang 2021

pub mod error;
pub mod frame;
pub mod kernel;
pub mod pixel_sampler;
pub mod render_target;
pub mod sampler;
pub mod shade_record;
pub mod shading;
pub mod surface;
pub mod texture;
