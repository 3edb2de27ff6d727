// Copyright @yucwang 2026

//! Error types. Configuration faults are reported at frame setup; the
//! per-pixel path has no error channel.

/// Rejected frame or scheduler configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{which} matrix is not invertible")]
    SingularMatrix { which: &'static str },

    #[error("{which} matrix has non-finite entries")]
    NonFiniteMatrix { which: &'static str },

    #[error("invalid samples per pixel: {0}")]
    InvalidSampleCount(u32),

    #[error("viewport {x},{y} {width}x{height} does not fit the render target ({target_width}x{target_height})")]
    ViewportOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        target_width: usize,
        target_height: usize,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("failed to read texture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode texture {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("texel buffer holds {actual} texels, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("texture has zero size")]
    Empty,
}

#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to write exr {path}: {source}")]
    Exr {
        path: String,
        #[source]
        source: exr::error::Error,
    },

    #[error("failed to write image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
}
