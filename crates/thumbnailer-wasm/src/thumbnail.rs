//! Thumbnail WASM bindings.
//!
//! # Functions
//!
//! - [`create_thumbnail`] - Generate a thumbnail from JPEG or PNG bytes
//! - [`detect_content_type`] - Sniff the MIME type of a byte buffer
//! - [`read_orientation`] - Read the EXIF orientation code of a JPEG
//! - [`inspect_image`] - Both of the above as one object
//!
//! # Example
//!
//! ```typescript
//! import { create_thumbnail } from '@thumbnailer/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const thumb = create_thumbnail(bytes, { scaler: 'CatmullRom', height: 200 });
//! const blob = new Blob([thumb.bytes()], { type: thumb.mimeType });
//! ```

use crate::types::{ImageInfo, JsThumbnail};
use thumbnailer_core::{ContentType, Image, ThumbnailConfig, ThumbnailError};
use wasm_bindgen::prelude::*;

/// Generate a thumbnail.
///
/// # Arguments
///
/// * `bytes` - JPEG or PNG file bytes as a `Uint8Array`
/// * `config` - `{ scaler, width?, height?, jpegQuality? }`; `scaler` is one
///   of `NearestNeighbor`, `ApproxBiLinear`, `BiLinear`, `CatmullRom`
///
/// # Errors
///
/// Returns an error string if the config is invalid, the bytes are not a
/// JPEG or PNG image, or decoding fails.
#[wasm_bindgen]
pub fn create_thumbnail(bytes: &[u8], config: JsValue) -> Result<JsThumbnail, JsValue> {
    let config: ThumbnailConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("invalid config: {}", e)))?;

    thumbnail_with(bytes, &config).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Sniff the MIME type from the first 512 bytes.
///
/// Returns `application/octet-stream` for anything that is not an image.
#[wasm_bindgen]
pub fn detect_content_type(bytes: &[u8]) -> String {
    ContentType::sniff(bytes).mime_type().to_string()
}

/// Read the EXIF orientation code (1-8). Returns 1 for PNGs, JPEGs without
/// the tag, and unreadable metadata.
#[wasm_bindgen]
pub fn read_orientation(bytes: &[u8]) -> u32 {
    thumbnailer_core::read_orientation(bytes)
}

/// Returns `{ contentType, orientation }`.
#[wasm_bindgen]
pub fn inspect_image(bytes: &[u8]) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&image_info(bytes)).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn thumbnail_with(bytes: &[u8], config: &ThumbnailConfig) -> Result<JsThumbnail, ThumbnailError> {
    let image = Image::from_bytes(bytes.to_vec(), config);
    thumbnailer_core::create_thumbnail(&image, config).map(JsThumbnail::from)
}

fn image_info(bytes: &[u8]) -> ImageInfo {
    ImageInfo {
        content_type: detect_content_type(bytes),
        orientation: read_orientation(bytes),
    }
}
