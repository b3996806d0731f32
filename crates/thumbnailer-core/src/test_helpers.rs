//! Shared test fixtures, built in memory.
//!
//! Encoded test images come from this crate's own encoders, and EXIF-tagged
//! JPEGs are made by splicing a minimal APP1 segment after the SOI marker.

use crate::decode::Raster;
use crate::encode::{encode_jpeg, encode_png};

/// A raster whose pixels are all distinct: each pixel holds its row-major
/// index as little-endian bytes.
pub fn numbered_raster(width: u32, height: u32) -> Raster {
    let pixels = (0..width * height).flat_map(u32::to_le_bytes).collect();
    Raster::new(width, height, pixels)
}

/// An opaque red/green gradient.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x * 255) / width.max(1)) as u8);
            pixels.push(((y * 255) / height.max(1)) as u8);
            pixels.push(128);
            pixels.push(255);
        }
    }
    Raster::new(width, height, pixels)
}

/// A JPEG without EXIF metadata.
pub fn encode_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode_jpeg(&gradient_raster(width, height), 90).unwrap()
}

/// A PNG whose bottom-right pixel is half transparent.
pub fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let mut raster = gradient_raster(width, height);
    let last = raster.pixels.len() - 1;
    raster.pixels[last] = 128;
    encode_png(&raster).unwrap()
}

/// An APP1 segment holding a big-endian TIFF header and a single IFD with
/// one SHORT orientation entry.
pub fn exif_app1_segment(orientation: u16) -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(b"Exif\0\0");
    payload.extend_from_slice(b"MM\x00\x2A");
    payload.extend_from_slice(&8u32.to_be_bytes()); // IFD0 offset
    payload.extend_from_slice(&1u16.to_be_bytes()); // entry count
    payload.extend_from_slice(&0x0112u16.to_be_bytes()); // Orientation
    payload.extend_from_slice(&3u16.to_be_bytes()); // SHORT
    payload.extend_from_slice(&1u32.to_be_bytes()); // count
    payload.extend_from_slice(&orientation.to_be_bytes());
    payload.extend_from_slice(&[0, 0]); // value padding
    payload.extend_from_slice(&0u32.to_be_bytes()); // no next IFD

    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    segment.extend_from_slice(&payload);
    segment
}

/// A `width` x `height` JPEG tagged with the given EXIF orientation.
pub fn jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let jpeg = encode_test_jpeg(width, height);
    let mut tagged = jpeg[..2].to_vec();
    tagged.extend_from_slice(&exif_app1_segment(orientation));
    tagged.extend_from_slice(&jpeg[2..]);
    tagged
}
