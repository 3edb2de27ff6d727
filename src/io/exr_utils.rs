/* Copyright 2020 @TwoCookingMice */

use crate::core::error::OutputError;
use crate::math::bitmap::Bitmap;

use exr::prelude::*;

// Write linear radiance to an EXR file
pub fn write_exr_to_file(bitmap: &Bitmap, file_path: &str) -> std::result::Result<(), OutputError> {
    log::info!("Starting writing openexr images: {}.", file_path);

    write_rgb_file(file_path, bitmap.width(), bitmap.height(), |x, y| {
        let p = bitmap[(x, y)];
        (p[0], p[1], p[2])
    })
    .map_err(|source| OutputError::Exr { path: file_path.to_string(), source })?;

    log::info!("EXR written to: {}.", file_path);
    Ok(())
}
