//! Raster decoding through the `image` crate.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, Dimensions, OutputFormat, Raster};

/// Decode image bytes of a known format into an RGBA raster.
///
/// EXIF orientation is not applied here; see
/// [`apply_orientation`](crate::transform::apply_orientation).
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes are not a valid image
/// of the given format.
pub fn decode_raster(bytes: &[u8], format: OutputFormat) -> Result<Raster, DecodeError> {
    let reader = ImageReader::with_format(Cursor::new(bytes), format.to_image_format());

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(Raster::from_rgba_image(img.into_rgba8()))
}

/// Read the pixel size from the image header without decoding pixel data.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the header cannot be parsed as
/// the given format.
pub fn read_dimensions(bytes: &[u8], format: OutputFormat) -> Result<Dimensions, DecodeError> {
    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .into_dimensions()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(Dimensions::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{encode_test_jpeg, encode_test_png};

    #[test]
    fn test_decode_jpeg() {
        let raster = decode_raster(&encode_test_jpeg(40, 30), OutputFormat::Jpeg).unwrap();
        assert_eq!(raster.width, 40);
        assert_eq!(raster.height, 30);
        assert_eq!(raster.pixels.len(), 40 * 30 * 4);
    }

    #[test]
    fn test_decode_png_keeps_alpha() {
        let raster = decode_raster(&encode_test_png(5, 7), OutputFormat::Png).unwrap();
        assert_eq!((raster.width, raster.height), (5, 7));
        // Test PNGs carry a non-opaque alpha in the bottom-right pixel.
        assert_eq!(raster.pixel(4, 6)[3], 128);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_raster(&[0x00, 0x01, 0x02, 0x03], OutputFormat::Jpeg);
        match result {
            Err(DecodeError::CorruptedFile(_)) => {}
            Ok(_) => panic!("Expected error, got success"),
        }
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_raster(&[], OutputFormat::Png).is_err());
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let jpeg = encode_test_jpeg(16, 16);
        assert!(decode_raster(&jpeg[..20], OutputFormat::Jpeg).is_err());
    }

    #[test]
    fn test_read_dimensions_matches_decode() {
        let jpeg = encode_test_jpeg(40, 30);
        let png = encode_test_png(5, 7);
        assert_eq!(
            read_dimensions(&jpeg, OutputFormat::Jpeg).unwrap(),
            decode_raster(&jpeg, OutputFormat::Jpeg).unwrap().dimensions()
        );
        assert_eq!(
            read_dimensions(&png, OutputFormat::Png).unwrap(),
            Dimensions::new(5, 7)
        );
    }

    #[test]
    fn test_read_dimensions_invalid_header() {
        assert!(matches!(
            read_dimensions(&[0x00, 0x01], OutputFormat::Png),
            Err(DecodeError::CorruptedFile(_))
        ));
        assert!(read_dimensions(&[], OutputFormat::Jpeg).is_err());
    }

    #[test]
    fn test_decode_png_declared_as_jpeg_fails() {
        let png = encode_test_png(4, 4);
        assert!(decode_raster(&png, OutputFormat::Jpeg).is_err());
    }
}
