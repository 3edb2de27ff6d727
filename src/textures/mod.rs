// Copyright @yucwang 2026

pub mod constant;
pub mod image;

pub use self::constant::ConstantTexture;
pub use self::image::{AddressMode, FilterMode, ImageTexture};
