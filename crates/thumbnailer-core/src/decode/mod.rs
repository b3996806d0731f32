//! Input side of the thumbnail pipeline.
//!
//! This module provides functionality for:
//! - Sniffing the content type of a byte buffer
//! - Reading the EXIF orientation tag from JPEG data
//! - Decoding JPEG and PNG data into RGBA rasters, or reading just their size
//!
//! All operations are synchronous and never touch the filesystem.
//!
//! # Examples
//!
//! ```ignore
//! use thumbnailer_core::decode::{decode_raster, read_orientation, ContentType};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let format = ContentType::sniff(&bytes).output_format().unwrap();
//! let raster = decode_raster(&bytes, format).unwrap();
//! println!("{}x{}, orientation {}", raster.width, raster.height, read_orientation(&bytes));
//! ```

mod codec;
mod orientation;
mod sniff;
mod types;

pub use codec::{decode_raster, read_dimensions};
pub use orientation::{
    read_orientation, read_orientation_with, ExifError, ExifParser, KamadakExif, TagTable,
    IDENTITY_ORIENTATION, ORIENTATION_TAG,
};
pub use sniff::{ContentType, OutputFormat, OCTET_STREAM, SNIFF_LEN};
pub use types::{DecodeError, Dimensions, Orientation, Raster};
