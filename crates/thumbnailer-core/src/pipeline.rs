//! The thumbnail pipeline.
//!
//! A single linear pass per call:
//!
//! ```text
//! Start -> MimeChecked -> FormatResolved -> Decoded -> OrientationCorrected
//!       -> Sized -> Scaled -> Encoded
//! ```
//!
//! Nothing is retried, and nothing is written back to the configuration:
//! the computed thumbnail size is returned with the encoded bytes.

use tracing::debug;

use crate::decode::{decode_raster, read_orientation, ContentType, Dimensions, OutputFormat};
use crate::encode::encode;
use crate::scale::{fits_target_limit, scale};
use crate::transform::apply_orientation;
use crate::{Image, ThumbnailConfig, ThumbnailError};

/// An encoded thumbnail and what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Encoded image data, in the same format as the input.
    pub bytes: Vec<u8>,
    /// Size of the encoded thumbnail.
    pub dimensions: Dimensions,
    pub format: OutputFormat,
    /// Size of the decoded source, before orientation correction.
    pub source: Dimensions,
    /// EXIF orientation code that was applied (1 if none).
    pub orientation: u32,
}

/// Compute the thumbnail size for an upright `width` x `height` source.
///
/// The height is always the configured height; the width is the configured
/// width scaled by the source aspect ratio, truncated.
///
/// # Errors
///
/// Returns `ThumbnailError::InvalidDimensions` if the source has a zero side,
/// the computed width truncates to zero or does not fit in a `u32`, or the
/// thumbnail would exceed [`MAX_TARGET_PIXELS`](crate::scale::MAX_TARGET_PIXELS).
pub fn compute_target_dimensions(
    width: u32,
    height: u32,
    config: &ThumbnailConfig,
) -> Result<Dimensions, ThumbnailError> {
    if width == 0 || height == 0 {
        return Err(ThumbnailError::InvalidDimensions { width, height });
    }

    let scaled_width = u64::from(config.width()) * u64::from(width) / u64::from(height);
    let invalid = || ThumbnailError::InvalidDimensions {
        width: u32::try_from(scaled_width).unwrap_or(u32::MAX),
        height: config.height(),
    };

    let target_width = u32::try_from(scaled_width).map_err(|_| invalid())?;
    if target_width == 0 || !fits_target_limit(target_width, config.height()) {
        return Err(invalid());
    }

    Ok(Dimensions::new(target_width, config.height()))
}

/// Generate a thumbnail for `image`.
///
/// # Errors
///
/// - `InvalidMimeType` if the image content type is `application/octet-stream`
/// - `UnsupportedFormat` for image types other than JPEG and PNG
/// - `Decode` if the bytes cannot be decoded
/// - `InvalidDimensions` if the computed size is empty or too large
/// - `Encode` if the thumbnail cannot be encoded
pub fn create_thumbnail(
    image: &Image,
    config: &ThumbnailConfig,
) -> Result<Thumbnail, ThumbnailError> {
    let content_type = image.content_type();
    if *content_type == ContentType::Unrecognized {
        return Err(ThumbnailError::InvalidMimeType);
    }

    let format = content_type
        .output_format()
        .ok_or_else(|| ThumbnailError::UnsupportedFormat(content_type.mime_type().to_string()))?;

    let raster = decode_raster(image.data(), format)?;
    let source = raster.dimensions();
    debug!(
        content_type = %content_type,
        bytes = image.size(),
        width = source.width,
        height = source.height,
        "decoded source image"
    );

    let orientation = read_orientation(image.data());
    let upright = apply_orientation(raster, orientation);
    debug!(
        orientation,
        width = upright.width,
        height = upright.height,
        "applied orientation"
    );

    let target = compute_target_dimensions(upright.width, upright.height, config)?;
    let scaled = scale(&upright, target, config.scaler())?;
    let bytes = encode(&scaled, format, config.jpeg_quality())?;
    debug!(
        scaler = %config.scaler(),
        width = target.width,
        height = target.height,
        bytes = bytes.len(),
        "encoded thumbnail"
    );

    Ok(Thumbnail {
        bytes,
        dimensions: target,
        format,
        source,
        orientation,
    })
}

/// A configuration bound to the operations that use it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generator {
    config: ThumbnailConfig,
}

impl Generator {
    pub fn new(config: ThumbnailConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThumbnailConfig {
        &self.config
    }

    /// Wrap bytes as an [`Image`], sniffing the content type.
    pub fn image_from_bytes(&self, data: Vec<u8>) -> Image {
        Image::from_bytes(data, &self.config)
    }

    pub fn create_thumbnail(&self, image: &Image) -> Result<Thumbnail, ThumbnailError> {
        create_thumbnail(image, &self.config)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
