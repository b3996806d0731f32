//! Error type for the thumbnail pipeline.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors returned by thumbnail generation and configuration.
///
/// None of these are retryable with the same input.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// The input was sniffed as `application/octet-stream`.
    #[error("invalid mimetype")]
    InvalidMimeType,

    /// The input is an image, but not JPEG or PNG.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The codec could not parse the input.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The scaler name matched none of the known interpolation strategies.
    #[error("invalid scaler: {0:?}")]
    InvalidScaler(String),

    /// The codec could not serialize the thumbnail.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// A configured or computed size has a zero side.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ThumbnailError::InvalidMimeType.to_string(), "invalid mimetype");
        assert_eq!(
            ThumbnailError::InvalidScaler(String::new()).to_string(),
            "invalid scaler: \"\""
        );
        assert_eq!(
            ThumbnailError::UnsupportedFormat("image/gif".to_string()).to_string(),
            "unsupported image format: image/gif"
        );
        assert_eq!(
            ThumbnailError::InvalidDimensions {
                width: 0,
                height: 300
            }
            .to_string(),
            "invalid dimensions: 0x300"
        );
    }

    #[test]
    fn test_decode_error_is_transparent() {
        let err: ThumbnailError = DecodeError::CorruptedFile("bad huffman".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Corrupted or incomplete image file: bad huffman"
        );
    }
}
