// Copyright 2020 @TwoCookingMice

use super::constants::Float;
use super::real::Real;
use nalgebra::Vector3;

use std::ops;

/// Three channel radiometric sample. The zero value means "no contribution".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spectrum<T: Real> {
    rgb: Vector3<T>
}

pub type RGBSpectrum = Spectrum<Float>;

impl<T: Real> Default for Spectrum<T> {
    fn default() -> Self {
        Self { rgb: Vector3::zeros() }
    }
}

impl<T: Real> Spectrum<T> {
    pub fn new(r: T, g: T, b: T) -> Self {
        Self { rgb: Vector3::new(r, g, b) }
    }

    pub fn splat(v: T) -> Self {
        Self { rgb: Vector3::new(v, v, v) }
    }

    pub fn as_vector(&self) -> &Vector3<T> {
        &self.rgb
    }

    pub fn is_black(&self) -> bool {
        self.rgb.iter().all(|c| *c == T::zero())
    }

    pub fn has_nans(&self) -> bool {
        self.rgb.iter().any(|c| c.partial_cmp(c).is_none())
    }

    pub fn max_component(&self) -> T {
        self.rgb.max()
    }
}

impl<T: Real> ops::Index<usize> for Spectrum<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.rgb[index]
    }
}

impl<T: Real> ops::Add for Spectrum<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { rgb: self.rgb + rhs.rgb }
    }
}

impl<T: Real> ops::AddAssign for Spectrum<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.rgb += rhs.rgb;
    }
}

// Component-wise product.
impl<T: Real> ops::Mul for Spectrum<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { rgb: self.rgb.component_mul(&rhs.rgb) }
    }
}

impl<T: Real> ops::Mul<T> for Spectrum<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self { rgb: self.rgb * rhs }
    }
}

impl<T: Real> ops::MulAssign<T> for Spectrum<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.rgb *= rhs;
    }
}

impl<T: Real> ops::Div<T> for Spectrum<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self { rgb: self.rgb / rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::RGBSpectrum;

    #[test]
    fn test_default_is_black() {
        let s = RGBSpectrum::default();
        assert!(s.is_black());
        assert!(!RGBSpectrum::new(0.0, 0.1, 0.0).is_black());
    }

    #[test]
    fn test_arithmetic() {
        let a = RGBSpectrum::new(1.0, 2.0, 3.0);
        let b = RGBSpectrum::new(0.5, 0.5, 2.0);
        assert_eq!(a + b, RGBSpectrum::new(1.5, 2.5, 5.0));
        assert_eq!(a * b, RGBSpectrum::new(0.5, 1.0, 6.0));
        assert_eq!(a * 2.0, RGBSpectrum::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, RGBSpectrum::new(0.5, 1.0, 1.5));
        assert_eq!(a.max_component(), 3.0);
    }

    #[test]
    fn test_has_nans() {
        assert!(RGBSpectrum::new(f32::NAN, 0.0, 0.0).has_nans());
        assert!(!RGBSpectrum::splat(1.0).has_nans());
    }
}
