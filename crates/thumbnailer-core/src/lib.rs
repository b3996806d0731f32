//! Thumbnailer Core - EXIF-aware thumbnail generation
//!
//! This crate turns JPEG and PNG bytes into fixed-height thumbnails. The
//! source is decoded, rotated or flipped upright according to its EXIF
//! orientation tag, resized with a configurable interpolation strategy, and
//! re-encoded in its original format.
//!
//! # Example
//!
//! ```ignore
//! use thumbnailer_core::{create_thumbnail, Image, ThumbnailConfig};
//!
//! let config = ThumbnailConfig::new("CatmullRom")?;
//! let image = Image::from_bytes(std::fs::read("photo.jpg")?, &config);
//! let thumb = create_thumbnail(&image, &config)?;
//! std::fs::write("thumb_photo.jpg", &thumb.bytes)?;
//! ```

pub mod config;
pub mod decode;
pub mod encode;
mod error;
pub mod pipeline;
pub mod scale;
mod source;
pub mod transform;

#[cfg(test)]
mod test_helpers;

pub use config::{ThumbnailConfig, DEFAULT_SIDE};
pub use decode::{
    read_orientation, read_orientation_with, ContentType, Dimensions, ExifParser, KamadakExif,
    Orientation, OutputFormat, Raster, TagTable,
};
pub use encode::{encode_jpeg, encode_png};
pub use error::ThumbnailError;
pub use pipeline::{compute_target_dimensions, create_thumbnail, Generator, Thumbnail};
pub use scale::{scale, Scaler};
pub use source::Image;
pub use transform::{
    apply_orientation, flip_horizontal, flip_vertical, rotate180, rotate270_ccw, rotate90_ccw,
};

/// Crate version, as reported to bindings and the command line.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
