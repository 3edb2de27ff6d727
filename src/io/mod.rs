// Copyright 2020 @TwoCookingMice

pub mod exr_utils;
pub mod png_utils;

use crate::core::error::OutputError;
use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;
use std::path::Path;

/// Writes `bitmap` as EXR (linear) or PNG (tonemapped), chosen by extension.
pub fn write_image(bitmap: &Bitmap, file_path: &str, exposure: Float) -> Result<(), OutputError> {
    let ext = Path::new(file_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "exr" => exr_utils::write_exr_to_file(bitmap, file_path),
        "png" => png_utils::write_png_to_file(bitmap, file_path, exposure),
        _ => Err(OutputError::UnsupportedFormat(ext)),
    }
}
