// Copyright @yucwang 2026

pub mod constant;
pub mod spheres;

pub use self::constant::ConstantKernel;
pub use self::spheres::{Sphere, SphereKernel};
