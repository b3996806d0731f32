//! Thumbnail input records.

use std::path::{Path, PathBuf};

use crate::decode::{ContentType, Dimensions};
use crate::ThumbnailConfig;

/// Raw image bytes plus what is known about them before decoding.
///
/// An `Image` is never modified by the pipeline; the decoded size is reported
/// on the resulting [`Thumbnail`](crate::Thumbnail) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    path: Option<PathBuf>,
    content_type: ContentType,
    data: Vec<u8>,
    current: Dimensions,
    future: Dimensions,
}

impl Image {
    /// Wrap image bytes, sniffing the content type from the leading bytes.
    pub fn from_bytes(data: Vec<u8>, config: &ThumbnailConfig) -> Self {
        let content_type = ContentType::sniff(&data);
        Self::with_content_type(data, content_type, config)
    }

    /// Wrap image bytes whose content type is already known.
    pub fn with_content_type(
        data: Vec<u8>,
        content_type: ContentType,
        config: &ThumbnailConfig,
    ) -> Self {
        Self {
            path: None,
            content_type,
            data,
            current: Dimensions::default(),
            future: config.target(),
        }
    }

    /// Record where the bytes came from. Not read by the pipeline.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..self
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Length of the image data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Size of the stored raster; zero until decoded.
    pub fn current(&self) -> Dimensions {
        self.current
    }

    /// Requested thumbnail size, as configured when the image was created.
    pub fn future(&self) -> Dimensions {
        self.future
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{encode_test_jpeg, encode_test_png};

    #[test]
    fn test_from_bytes_sniffs_jpeg() {
        let config = ThumbnailConfig::default();
        let image = Image::from_bytes(encode_test_jpeg(8, 8), &config);

        assert_eq!(image.content_type(), &ContentType::Jpeg);
        assert_eq!(image.size(), image.data().len());
        assert_eq!(image.current(), Dimensions::default());
        assert_eq!(image.future(), Dimensions::new(300, 300));
        assert!(image.path().is_none());
    }

    #[test]
    fn test_from_bytes_sniffs_png() {
        let config = ThumbnailConfig::default();
        let image = Image::from_bytes(encode_test_png(8, 8), &config);
        assert_eq!(image.content_type(), &ContentType::Png);
    }

    #[test]
    fn test_from_bytes_short_buffer() {
        let config = ThumbnailConfig::default();
        let image = Image::from_bytes(vec![1, 2, 3], &config);
        assert_eq!(image.content_type(), &ContentType::Unrecognized);
        assert_eq!(image.size(), 3);
    }

    #[test]
    fn test_future_follows_config() {
        let config = ThumbnailConfig::default().with_size(64, 32).unwrap();
        let image = Image::with_content_type(vec![], ContentType::Png, &config);
        assert_eq!(image.future(), Dimensions::new(64, 32));
    }

    #[test]
    fn test_with_path() {
        let config = ThumbnailConfig::default();
        let image = Image::from_bytes(vec![], &config).with_path("photos/cat.jpg");
        assert_eq!(image.path(), Some(Path::new("photos/cat.jpg")));
    }
}
