//! Output side of the thumbnail pipeline.
//!
//! This module provides functionality for:
//! - Encoding RGBA rasters to JPEG with configurable quality
//! - Encoding RGBA rasters to PNG
//!
//! # Examples
//!
//! ```ignore
//! use thumbnailer_core::decode::{OutputFormat, Raster};
//! use thumbnailer_core::encode::encode;
//!
//! let raster = Raster::blank(100, 100);
//! let png_bytes = encode(&raster, OutputFormat::Png, 75).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod jpeg;
mod png;

use thiserror::Error;

use crate::decode::{OutputFormat, Raster};

pub use jpeg::{encode_jpeg, DEFAULT_JPEG_QUALITY};
pub use png::encode_png;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec rejected the image
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// Encode a raster in the given format.
///
/// `jpeg_quality` is ignored for PNG output.
pub fn encode(
    raster: &Raster,
    format: OutputFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Jpeg => encode_jpeg(raster, jpeg_quality),
        OutputFormat::Png => encode_png(raster),
    }
}

/// Shared validation for both encoders.
fn validate(raster: &Raster) -> Result<(), EncodeError> {
    if raster.width == 0 || raster.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: raster.width,
            height: raster.height,
        });
    }

    let expected = raster.pixel_count() * Raster::CHANNELS;
    if raster.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: raster.pixels.len(),
        });
    }

    Ok(())
}
