//! WASM-compatible wrapper types.

use serde::Serialize;
use thumbnailer_core::Thumbnail;
use wasm_bindgen::prelude::*;

/// A generated thumbnail for JavaScript.
///
/// The encoded bytes stay in WASM memory until `bytes()` copies them out as a
/// `Uint8Array`.
#[wasm_bindgen]
pub struct JsThumbnail {
    width: u32,
    height: u32,
    mime_type: &'static str,
    orientation: u32,
    bytes: Vec<u8>,
}

#[wasm_bindgen]
impl JsThumbnail {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `image/jpeg` or `image/png`, matching the input.
    #[wasm_bindgen(getter, js_name = mimeType)]
    pub fn mime_type(&self) -> String {
        self.mime_type.to_string()
    }

    /// EXIF orientation code that was corrected for (1 if none).
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> u32 {
        self.orientation
    }

    #[wasm_bindgen(getter, js_name = byteLength)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the encoded image as a Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl From<Thumbnail> for JsThumbnail {
    fn from(thumb: Thumbnail) -> Self {
        Self {
            width: thumb.dimensions.width,
            height: thumb.dimensions.height,
            mime_type: thumb.format.mime_type(),
            orientation: thumb.orientation,
            bytes: thumb.bytes,
        }
    }
}

/// What `inspect_image` reports, serialized to a plain JS object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub content_type: String,
    pub orientation: u32,
}
