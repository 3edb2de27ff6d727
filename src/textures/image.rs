// Copyright @yucwang 2026

use crate::core::error::TextureError;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;
use image::io::Reader as ImageReader;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressMode {
    Clamp,
    Wrap,
    Mirror,
}

/// RGB texture. Texel (0, 0) sits at uv (0, 0); rows run along v.
pub struct ImageTexture {
    width: usize,
    height: usize,
    texels: Vec<RGBSpectrum>,
    filter_mode: FilterMode,
    address_mode: [AddressMode; 2],
}

fn srgb_to_linear(v: Float) -> Float {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

// Texel coordinates beyond this are folded back before the integer cast, so
// neighbor lookups never overflow.
const MAX_TEXEL_COORD: Float = 1.0e9;

fn texel_coord(v: Float) -> isize {
    v.floor().clamp(-MAX_TEXEL_COORD, MAX_TEXEL_COORD) as isize
}

fn address(idx: isize, size: usize, mode: AddressMode) -> usize {
    let n = size as isize;
    match mode {
        AddressMode::Clamp => idx.clamp(0, n - 1) as usize,
        AddressMode::Wrap => idx.rem_euclid(n) as usize,
        AddressMode::Mirror => {
            let i = idx.rem_euclid(2 * n);
            if i >= n {
                (2 * n - 1 - i) as usize
            } else {
                i as usize
            }
        }
    }
}

impl ImageTexture {
    pub fn from_texels(width: usize, height: usize, texels: Vec<RGBSpectrum>) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::Empty);
        }
        if texels.len() != width * height {
            return Err(TextureError::SizeMismatch { expected: width * height, actual: texels.len() });
        }

        Ok(Self {
            width,
            height,
            texels,
            filter_mode: FilterMode::Linear,
            address_mode: [AddressMode::Wrap; 2],
        })
    }

    /// Loads a PNG or JPEG file. With `srgb` set, texels are decoded to
    /// linear values.
    pub fn from_file(path: &str, srgb: bool) -> Result<Self, TextureError> {
        log::info!("Loading texture from: {}.", path);

        let img = ImageReader::open(path)
            .map_err(|source| TextureError::Io { path: path.to_string(), source })?
            .decode()
            .map_err(|source| TextureError::Decode { path: path.to_string(), source })?;

        let rgb = img.to_rgb32f();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        let texels = rgb.pixels()
            .map(|p| {
                if srgb {
                    RGBSpectrum::new(srgb_to_linear(p[0]), srgb_to_linear(p[1]), srgb_to_linear(p[2]))
                } else {
                    RGBSpectrum::new(p[0], p[1], p[2])
                }
            })
            .collect();

        log::info!("Texture loaded, width = {}, height = {}.", width, height);
        Self::from_texels(width, height, texels)
    }

    pub fn with_filter_mode(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }

    pub fn with_address_mode(mut self, address_mode: AddressMode) -> Self {
        self.address_mode = [address_mode; 2];
        self
    }

    /// Separate addressing along u and v.
    pub fn with_address_modes(mut self, address_u: AddressMode, address_v: AddressMode) -> Self {
        self.address_mode = [address_u, address_v];
        self
    }

    fn texel(&self, x: isize, y: isize) -> RGBSpectrum {
        let xi = address(x, self.width, self.address_mode[0]);
        let yi = address(y, self.height, self.address_mode[1]);
        self.texels[xi + self.width * yi]
    }

    fn sample_nearest(&self, uv: Vector2f) -> RGBSpectrum {
        let x = texel_coord(uv.x * self.width as Float);
        let y = texel_coord(uv.y * self.height as Float);
        self.texel(x, y)
    }

    fn sample_linear(&self, uv: Vector2f) -> RGBSpectrum {
        let x = uv.x * self.width as Float - 0.5;
        let y = uv.y * self.height as Float - 0.5;
        let (tx, ty) = (x - x.floor(), y - y.floor());
        let (x0, y0) = (texel_coord(x), texel_coord(y));

        let top = self.texel(x0, y0) * (1.0 - tx) + self.texel(x0 + 1, y0) * tx;
        let bottom = self.texel(x0, y0 + 1) * (1.0 - tx) + self.texel(x0 + 1, y0 + 1) * tx;
        top * (1.0 - ty) + bottom * ty
    }
}

impl Texture for ImageTexture {
    fn eval(&self, uv: Vector2f) -> RGBSpectrum {
        match self.filter_mode {
            FilterMode::Nearest => self.sample_nearest(uv),
            FilterMode::Linear => self.sample_linear(uv),
        }
    }

    fn describe(&self) -> String {
        format!("ImageTexture [{}x{}, filter={:?}, address={:?}]",
                self.width, self.height, self.filter_mode, self.address_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn red() -> RGBSpectrum {
        RGBSpectrum::new(1.0, 0.0, 0.0)
    }

    fn green() -> RGBSpectrum {
        RGBSpectrum::new(0.0, 1.0, 0.0)
    }

    fn strip() -> ImageTexture {
        ImageTexture::from_texels(2, 1, vec![red(), green()]).unwrap()
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert!(matches!(ImageTexture::from_texels(0, 1, vec![]), Err(TextureError::Empty)));
        assert!(matches!(ImageTexture::from_texels(2, 2, vec![red()]),
                         Err(TextureError::SizeMismatch { expected: 4, actual: 1 })));
    }

    #[test]
    fn test_nearest_addressing() {
        let tex = strip().with_filter_mode(FilterMode::Nearest);
        assert_eq!(tex.eval(Vector2f::new(0.25, 0.5)), red());
        assert_eq!(tex.eval(Vector2f::new(0.75, 0.5)), green());

        let wrap = strip().with_filter_mode(FilterMode::Nearest).with_address_mode(AddressMode::Wrap);
        assert_eq!(wrap.eval(Vector2f::new(1.25, 0.5)), red());

        let clamp = strip().with_filter_mode(FilterMode::Nearest).with_address_mode(AddressMode::Clamp);
        assert_eq!(clamp.eval(Vector2f::new(1.25, 0.5)), green());
        assert_eq!(clamp.eval(Vector2f::new(-0.5, 0.5)), red());

        let mirror = strip().with_filter_mode(FilterMode::Nearest).with_address_mode(AddressMode::Mirror);
        assert_eq!(mirror.eval(Vector2f::new(1.25, 0.5)), green());
        assert_eq!(mirror.eval(Vector2f::new(1.75, 0.5)), red());
    }

    #[test]
    fn test_linear_filter() {
        let tex = strip().with_filter_mode(FilterMode::Linear).with_address_mode(AddressMode::Clamp);
        assert_eq!(tex.eval(Vector2f::new(0.25, 0.5)), red());
        let mid = tex.eval(Vector2f::new(0.5, 0.5));
        assert_relative_eq!(mid[0], 0.5, epsilon = 1e-6);
        assert_relative_eq!(mid[1], 0.5, epsilon = 1e-6);
        assert_relative_eq!(mid[2], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_linear_wrap_blends_across_edge() {
        let tex = strip().with_filter_mode(FilterMode::Linear).with_address_mode(AddressMode::Wrap);
        let edge = tex.eval(Vector2f::new(0.0, 0.5));
        assert_relative_eq!(edge[0], 0.5, epsilon = 1e-6);
        assert_relative_eq!(edge[1], 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_per_axis_address_modes() {
        let column = ImageTexture::from_texels(1, 2, vec![red(), green()]).unwrap()
            .with_filter_mode(FilterMode::Nearest)
            .with_address_modes(AddressMode::Wrap, AddressMode::Clamp);
        // u wraps, v clamps to the last row.
        assert_eq!(column.eval(Vector2f::new(3.5, 0.25)), red());
        assert_eq!(column.eval(Vector2f::new(3.5, 1.75)), green());
        assert_eq!(column.eval(Vector2f::new(-2.5, -4.0)), red());
    }

    #[test]
    fn test_huge_coordinates_do_not_overflow() {
        for mode in [AddressMode::Clamp, AddressMode::Wrap, AddressMode::Mirror] {
            let tex = strip().with_filter_mode(FilterMode::Linear).with_address_mode(mode);
            for uv in [Vector2f::new(1.0e30, 0.5), Vector2f::new(-1.0e30, 0.5),
                       Vector2f::new(1.0e30, -1.0e30)] {
                let value = tex.eval(uv);
                assert!(value.max_component() <= 1.0 + 1e-6);
            }
            let nearest = strip().with_filter_mode(FilterMode::Nearest).with_address_mode(mode);
            nearest.eval(Vector2f::new(Float::MAX, -Float::MAX));
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ImageTexture::from_file("/nonexistent/texture.png", true).err();
        assert!(matches!(err, Some(TextureError::Io { .. })));
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_relative_eq!(srgb_to_linear(0.0), 0.0);
        assert_relative_eq!(srgb_to_linear(1.0), 1.0, epsilon = 1e-6);
    }
}
