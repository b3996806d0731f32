//! JPEG encoding for thumbnails.
//!
//! JPEG has no alpha channel, so the alpha of each pixel is dropped and the
//! colour channels are written as-is.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{validate, EncodeError};
use crate::decode::Raster;

/// Quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Encode a raster to JPEG bytes.
///
/// # Arguments
///
/// * `raster` - RGBA raster to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, large files
/// * 70-90: Good quality, recommended for thumbnails
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(raster: &Raster, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate(raster)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let rgb: Vec<u8> = raster
        .pixels
        .chunks_exact(Raster::CHANNELS)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(&rgb, raster.width, raster.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=40, 1u32..=40)
    }

    proptest! {
        /// Property: any well-formed raster encodes to a decodable JPEG of the same size.
        #[test]
        fn prop_valid_raster_produces_valid_jpeg(
            (width, height) in dimensions_strategy(),
            quality in 1u8..=100,
            fill in any::<u8>(),
        ) {
            let raster = Raster::new(width, height, vec![fill; (width * height * 4) as usize]);

            let jpeg = encode_jpeg(&raster, quality);
            prop_assert!(jpeg.is_ok(), "Valid input should produce valid output");
            let jpeg = jpeg.unwrap();

            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8], "Should have SOI marker");
            let decoded = image::load_from_memory_with_format(&jpeg, image::ImageFormat::Jpeg);
            prop_assert!(decoded.is_ok());
            let decoded = decoded.unwrap();
            prop_assert_eq!((decoded.width(), decoded.height()), (width, height));
        }

        /// Property: same input always produces same output.
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in 1u8..=100,
        ) {
            let raster = Raster::new(width, height, vec![100u8; (width * height * 4) as usize]);

            let first = encode_jpeg(&raster, quality).unwrap();
            let second = encode_jpeg(&raster, quality).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
