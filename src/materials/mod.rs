// Copyright @yucwang 2026

pub mod emissive;
pub mod matte;

use crate::core::sampler::Sampler;
use crate::core::shade_record::ShadeRecord;
use crate::core::shading::{SampleResult, Shading};
use crate::math::real::Real;
use crate::math::spectrum::Spectrum;

pub use self::emissive::Emissive;
pub use self::matte::Matte;

/// Closed set of materials. Dispatch is a match on the variant, resolved
/// without virtual calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material<T: Real> {
    Emissive(Emissive<T>),
    Matte(Matte<T>),
}

impl<T: Real> From<Emissive<T>> for Material<T> {
    fn from(m: Emissive<T>) -> Self {
        Material::Emissive(m)
    }
}

impl<T: Real> From<Matte<T>> for Material<T> {
    fn from(m: Matte<T>) -> Self {
        Material::Matte(m)
    }
}

impl<T: Real> Shading<T> for Material<T> {
    fn name(&self) -> &'static str {
        match self {
            Material::Emissive(m) => m.name(),
            Material::Matte(m) => m.name(),
        }
    }

    fn ambient(&self) -> Spectrum<T> {
        match self {
            Material::Emissive(m) => m.ambient(),
            Material::Matte(m) => m.ambient(),
        }
    }

    fn shade(&self, record: &ShadeRecord<T>) -> Spectrum<T> {
        match self {
            Material::Emissive(m) => m.shade(record),
            Material::Matte(m) => m.shade(record),
        }
    }

    fn sample<S: Sampler>(&self, record: &ShadeRecord<T>, sampler: &mut S) -> SampleResult<T> {
        match self {
            Material::Emissive(m) => m.sample(record, sampler),
            Material::Matte(m) => m.sample(record, sampler),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Emissive, Material, Matte};
    use crate::core::sampler::RandomSampler;
    use crate::core::shade_record::ShadeRecord;
    use crate::core::shading::Shading;
    use crate::math::spectrum::Spectrum;
    use nalgebra::Vector3;

    fn record() -> ShadeRecord<f32> {
        ShadeRecord {
            geometric_normal: Vector3::z(),
            shading_normal: Vector3::z(),
            tex_color: Spectrum::splat(1.0),
            view_dir: Vector3::z(),
            light_dir: Vector3::z(),
            light_intensity: Spectrum::splat(1.0),
        }
    }

    #[test]
    fn test_enum_dispatch_matches_variant() {
        let emissive = Emissive::new(Spectrum::new(1.0, 2.0, 3.0), 0.5);
        let matte = Matte::new(Spectrum::splat(0.5), 1.0);
        let rec = record();

        let a: Material<f32> = emissive.into();
        let b: Material<f32> = matte.into();
        assert_eq!(a.shade(&rec), emissive.shade(&rec));
        assert_eq!(b.shade(&rec), matte.shade(&rec));
        assert_eq!(a.ambient(), emissive.ambient());
        assert!(a.name().contains("Emissive"));
        assert!(b.name().contains("Matte"));
    }

    #[test]
    fn test_every_variant_honors_pdf_contract() {
        let materials: [Material<f32>; 3] = [
            Emissive::new(Spectrum::splat(1.0), 1.0).into(),
            Matte::new(Spectrum::splat(0.7), 1.0).into(),
            Matte::new(Spectrum::default(), 1.0).into(),
        ];
        let mut sampler = RandomSampler::new(42);
        for mat in materials.iter() {
            for _ in 0..64 {
                let sample = mat.sample(&record(), &mut sampler);
                assert!(sample.pdf >= 0.0);
                if !sample.value.is_black() {
                    assert!(sample.pdf > 0.0, "{} returned energy with zero pdf", mat.name());
                }
            }
        }
    }
}
