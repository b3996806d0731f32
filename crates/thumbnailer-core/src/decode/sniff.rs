//! Content-type detection from leading bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of leading bytes inspected when sniffing a buffer.
pub const SNIFF_LEN: usize = 512;

/// MIME type reported for buffers that match no known signature.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type of an input buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// `image/jpeg`
    Jpeg,
    /// `image/png`
    Png,
    /// A recognized image type this crate does not thumbnail (GIF, WebP, ...).
    Other(String),
    /// No known signature matched; reported as `application/octet-stream`.
    Unrecognized,
}

impl ContentType {
    /// Classify a buffer by its leading bytes.
    ///
    /// Only the first [`SNIFF_LEN`] bytes are inspected. Shorter buffers are
    /// sniffed as-is.
    pub fn sniff(bytes: &[u8]) -> Self {
        let head = &bytes[..bytes.len().min(SNIFF_LEN)];
        match image::guess_format(head) {
            Ok(image::ImageFormat::Jpeg) => ContentType::Jpeg,
            Ok(image::ImageFormat::Png) => ContentType::Png,
            Ok(format) => ContentType::Other(format.to_mime_type().to_string()),
            Err(_) => ContentType::Unrecognized,
        }
    }

    /// Parse a MIME type supplied by the caller.
    ///
    /// Parameters such as `; charset=...` are ignored and matching is
    /// case-insensitive, as MIME types are.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "image/jpeg" => ContentType::Jpeg,
            "image/png" => ContentType::Png,
            "" | OCTET_STREAM => ContentType::Unrecognized,
            _ => ContentType::Other(essence),
        }
    }

    /// The MIME string for this content type.
    pub fn mime_type(&self) -> &str {
        match self {
            ContentType::Jpeg => "image/jpeg",
            ContentType::Png => "image/png",
            ContentType::Other(mime) => mime,
            ContentType::Unrecognized => OCTET_STREAM,
        }
    }

    /// The output format for this content type, if thumbnails can be made.
    pub fn output_format(&self) -> Option<OutputFormat> {
        match self {
            ContentType::Jpeg => Some(OutputFormat::Jpeg),
            ContentType::Png => Some(OutputFormat::Png),
            ContentType::Other(_) | ContentType::Unrecognized => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Formats a thumbnail can be decoded from and encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }

    pub(crate) fn to_image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Png => image::ImageFormat::Png,
        }
    }
}
