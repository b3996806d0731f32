//! Thumbnailer WASM - WebAssembly bindings for thumbnailer-core
//!
//! This crate exposes thumbnail generation to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for thumbnails
//! - `thumbnail` - Thumbnail generation and image inspection bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { create_thumbnail } from '@thumbnailer/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const thumb = create_thumbnail(bytes, { scaler: 'CatmullRom' });
//! console.log(`Thumbnail ${thumb.width}x${thumb.height} (${thumb.mimeType})`);
//! ```

use wasm_bindgen::prelude::*;

mod thumbnail;
mod types;

pub use thumbnail::{create_thumbnail, detect_content_type, inspect_image, read_orientation};
pub use types::{ImageInfo, JsThumbnail};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    thumbnailer_core::VERSION.to_string()
}
