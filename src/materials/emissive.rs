// Copyright @yucwang 2026

use crate::core::sampler::Sampler;
use crate::core::shade_record::ShadeRecord;
use crate::core::shading::{SampleResult, Shading};
use crate::math::real::Real;
use crate::math::spectrum::Spectrum;
use nalgebra::Vector3;

/// Light source surface. Emits `emission_color * emission_scale`, modulated
/// by the texture color, and reflects nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emissive<T: Real> {
    emission_color: Spectrum<T>,
    emission_scale: T,
}

impl<T: Real> Default for Emissive<T> {
    fn default() -> Self {
        Self {
            emission_color: Spectrum::splat(T::one()),
            emission_scale: T::one(),
        }
    }
}

impl<T: Real> Emissive<T> {
    pub fn new(emission_color: Spectrum<T>, emission_scale: T) -> Self {
        Self { emission_color, emission_scale }
    }

    pub fn emission_color(&self) -> Spectrum<T> {
        self.emission_color
    }

    pub fn set_emission_color(&mut self, color: Spectrum<T>) {
        self.emission_color = color;
    }

    pub fn emission_scale(&self) -> T {
        self.emission_scale
    }

    pub fn set_emission_scale(&mut self, scale: T) {
        self.emission_scale = scale;
    }
}

impl<T: Real> Shading<T> for Emissive<T> {
    fn ambient(&self) -> Spectrum<T> {
        Spectrum::default()
    }

    fn shade(&self, record: &ShadeRecord<T>) -> Spectrum<T> {
        record.tex_color * self.emission_color * self.emission_scale
    }

    fn sample<S: Sampler>(&self, record: &ShadeRecord<T>, _sampler: &mut S) -> SampleResult<T> {
        SampleResult::new(self.shade(record), Vector3::zeros(), T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::Emissive;
    use crate::core::sampler::RandomSampler;
    use crate::core::shade_record::ShadeRecord;
    use crate::core::shading::Shading;
    use crate::math::spectrum::Spectrum;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn record(view_dir: Vector3<f32>, light_dir: Vector3<f32>, light: Spectrum<f32>) -> ShadeRecord<f32> {
        ShadeRecord {
            geometric_normal: Vector3::z(),
            shading_normal: Vector3::z(),
            tex_color: Spectrum::new(0.5, 1.0, 0.25),
            view_dir,
            light_dir,
            light_intensity: light,
        }
    }

    #[test]
    fn test_shade_ignores_light_and_view() {
        let mat = Emissive::new(Spectrum::new(1.0, 0.5, 2.0), 4.0);
        let expected = Spectrum::new(0.5 * 1.0 * 4.0, 1.0 * 0.5 * 4.0, 0.25 * 2.0 * 4.0);

        let dirs = [
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.6, 0.0, 0.8),
            Vector3::new(-0.36, 0.48, -0.8),
        ];
        for view_dir in dirs.iter() {
            for light_dir in dirs.iter() {
                for light in [Spectrum::default(), Spectrum::splat(10.0), Spectrum::new(0.0, 3.0, 1.0)] {
                    let value = mat.shade(&record(*view_dir, *light_dir, light));
                    assert_eq!(value, expected);
                }
            }
        }
    }

    #[test]
    fn test_sample_matches_shade() {
        let mat = Emissive::new(Spectrum::new(0.2, 0.4, 0.8), 2.5);
        let mut sampler = RandomSampler::new(99);
        let rec = record(Vector3::new(0.0, 0.6, 0.8), Vector3::zeros(), Spectrum::default());

        for _ in 0..4 {
            let sample = mat.sample(&rec, &mut sampler);
            assert_eq!(sample.pdf, 1.0);
            assert_eq!(sample.value, mat.shade(&rec));
            assert_eq!(sample.reflection_dir, Vector3::zeros());
        }
        assert_eq!(sampler.draws(), 0);
    }

    #[test]
    fn test_ambient_is_zero() {
        let mut mat = Emissive::<f64>::default();
        assert!(mat.ambient().is_black());
        mat.set_emission_color(Spectrum::splat(3.0));
        mat.set_emission_scale(7.0);
        assert!(mat.ambient().is_black());
        assert_relative_eq!(mat.emission_scale(), 7.0);
        assert_eq!(mat.emission_color(), Spectrum::splat(3.0));
    }
}
