// Copyright @yucwang 2026

use crate::core::error::OutputError;
use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;

fn linear_to_srgb(v: Float) -> Float {
    if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// Exposure scale, clamp to [0, 1] and sRGB encode.
pub fn tonemap(v: Float, exposure: Float) -> u8 {
    let c = linear_to_srgb((v * exposure).clamp(0.0, 1.0));
    (c * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

pub fn to_rgb8(bitmap: &Bitmap, exposure: Float) -> image::RgbImage {
    image::RgbImage::from_fn(bitmap.width() as u32, bitmap.height() as u32, |x, y| {
        let p = bitmap[(x as usize, y as usize)];
        image::Rgb([tonemap(p[0], exposure), tonemap(p[1], exposure), tonemap(p[2], exposure)])
    })
}

pub fn write_png_to_file(bitmap: &Bitmap, file_path: &str, exposure: Float) -> Result<(), OutputError> {
    log::info!("Starting writing png image: {}.", file_path);

    to_rgb8(bitmap, exposure)
        .save(file_path)
        .map_err(|source| OutputError::Image { path: file_path.to_string(), source })?;

    log::info!("PNG written to: {}.", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::spectrum::RGBSpectrum;

    #[test]
    fn test_tonemap_endpoints() {
        assert_eq!(tonemap(0.0, 1.0), 0);
        assert_eq!(tonemap(1.0, 1.0), 255);
        assert_eq!(tonemap(10.0, 1.0), 255);
        assert_eq!(tonemap(-1.0, 1.0), 0);
        assert_eq!(tonemap(0.5, 2.0), 255);
    }

    #[test]
    fn test_to_rgb8_layout() {
        let mut bitmap = Bitmap::new(2, 1);
        bitmap[(1, 0)] = RGBSpectrum::new(1.0, 0.0, 0.0);
        let img = to_rgb8(&bitmap, 1.0);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0]);
    }
}
