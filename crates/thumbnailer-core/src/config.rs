//! Thumbnail generator configuration.
//!
//! A [`ThumbnailConfig`] is validated when it is built and never changes
//! afterwards, so a single value can serve any number of requests, from any
//! number of threads.

use serde::{Deserialize, Serialize};

use crate::decode::Dimensions;
use crate::encode::DEFAULT_JPEG_QUALITY;
use crate::scale::Scaler;
use crate::ThumbnailError;

/// Default target width and height, in pixels.
pub const DEFAULT_SIDE: u32 = 300;

/// Settings shared by every thumbnail produced from one generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawThumbnailConfig")]
pub struct ThumbnailConfig {
    width: u32,
    height: u32,
    scaler: Scaler,
    jpeg_quality: u8,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self::from_scaler(Scaler::default())
    }
}

impl ThumbnailConfig {
    /// A 300x300 configuration using the named scaler.
    ///
    /// # Errors
    ///
    /// Returns `ThumbnailError::InvalidScaler` unless `scaler` is exactly one
    /// of `NearestNeighbor`, `ApproxBiLinear`, `BiLinear` or `CatmullRom`.
    pub fn new(scaler: &str) -> Result<Self, ThumbnailError> {
        Ok(Self::from_scaler(scaler.parse()?))
    }

    /// A 300x300 configuration using an already-parsed scaler.
    pub fn from_scaler(scaler: Scaler) -> Self {
        Self {
            width: DEFAULT_SIDE,
            height: DEFAULT_SIDE,
            scaler,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Replace the target size.
    ///
    /// # Errors
    ///
    /// Returns `ThumbnailError::InvalidDimensions` if either side is zero.
    pub fn with_size(self, width: u32, height: u32) -> Result<Self, ThumbnailError> {
        if width == 0 || height == 0 {
            return Err(ThumbnailError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            ..self
        })
    }

    /// Replace the JPEG quality, clamped to 1-100.
    pub fn with_jpeg_quality(self, quality: u8) -> Self {
        Self {
            jpeg_quality: quality.clamp(1, 100),
            ..self
        }
    }

    /// Target width; the baseline for aspect-ratio correction.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Target height; thumbnails always come out this tall.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scaler(&self) -> Scaler {
        self.scaler
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    /// The configured size as a `Dimensions` value.
    pub fn target(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Unvalidated wire form of [`ThumbnailConfig`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawThumbnailConfig {
    #[serde(default = "default_side")]
    width: u32,
    #[serde(default = "default_side")]
    height: u32,
    scaler: String,
    #[serde(default = "default_jpeg_quality")]
    jpeg_quality: u8,
}

fn default_side() -> u32 {
    DEFAULT_SIDE
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

impl TryFrom<RawThumbnailConfig> for ThumbnailConfig {
    type Error = ThumbnailError;

    fn try_from(raw: RawThumbnailConfig) -> Result<Self, Self::Error> {
        Ok(ThumbnailConfig::new(&raw.scaler)?
            .with_size(raw.width, raw.height)?
            .with_jpeg_quality(raw.jpeg_quality))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = ThumbnailConfig::new("CatmullRom").unwrap();
        assert_eq!(config.width(), 300);
        assert_eq!(config.height(), 300);
        assert_eq!(config.scaler(), Scaler::CatmullRom);
        assert_eq!(config.jpeg_quality(), 75);
        assert_eq!(config.target(), Dimensions::new(300, 300));
    }

    #[test]
    fn test_new_rejects_unknown_scaler() {
        assert!(matches!(
            ThumbnailConfig::new(""),
            Err(ThumbnailError::InvalidScaler(_))
        ));
        assert!(matches!(
            ThumbnailConfig::new("Lanczos"),
            Err(ThumbnailError::InvalidScaler(_))
        ));
    }

    #[test]
    fn test_with_size() {
        let config = ThumbnailConfig::default().with_size(200, 100).unwrap();
        assert_eq!((config.width(), config.height()), (200, 100));
    }

    #[test]
    fn test_with_size_rejects_zero() {
        let config = ThumbnailConfig::default();
        assert!(matches!(
            config.with_size(0, 100),
            Err(ThumbnailError::InvalidDimensions { width: 0, height: 100 })
        ));
        assert!(config.with_size(100, 0).is_err());
    }

    #[test]
    fn test_jpeg_quality_clamped() {
        let config = ThumbnailConfig::default();
        assert_eq!(config.with_jpeg_quality(0).jpeg_quality(), 1);
        assert_eq!(config.with_jpeg_quality(250).jpeg_quality(), 100);
        assert_eq!(config.with_jpeg_quality(90).jpeg_quality(), 90);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ThumbnailConfig = serde_json::from_str(r#"{"scaler":"BiLinear"}"#).unwrap();
        assert_eq!(config, ThumbnailConfig::from_scaler(Scaler::BiLinear));
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let config: ThumbnailConfig = serde_json::from_str(
            r#"{"width":120,"height":80,"scaler":"NearestNeighbor","jpegQuality":60}"#,
        )
        .unwrap();
        assert_eq!(config.target(), Dimensions::new(120, 80));
        assert_eq!(config.scaler(), Scaler::NearestNeighbor);
        assert_eq!(config.jpeg_quality(), 60);
    }

    #[test]
    fn test_deserialize_validates() {
        let parse = |json: &str| serde_json::from_str::<ThumbnailConfig>(json);
        assert!(parse(r#"{"scaler":"bilinear"}"#).is_err());
        assert!(parse(r#"{"scaler":""}"#).is_err());
        assert!(parse(r#"{"scaler":"BiLinear","width":0}"#).is_err());
        assert!(parse(r#"{"width":100}"#).is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = ThumbnailConfig::new("ApproxBiLinear")
            .unwrap()
            .with_size(120, 80)
            .unwrap()
            .with_jpeg_quality(60);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""scaler":"ApproxBiLinear""#));
        assert!(json.contains(r#""jpegQuality":60"#));

        let back: ThumbnailConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
