//! EXIF orientation correction.
//!
//! Five primitive pixel-grid transforms, each a bijection from source to
//! destination coordinates, and the dispatch table that composes them for
//! the eight EXIF orientation codes.
//!
//! Every primitive writes into a freshly allocated raster; rotations change
//! the bounding dimensions so nothing is done in place.

use crate::decode::{Orientation, Raster};

/// Copy every source pixel to the destination position given by `map`.
///
/// `map` receives source coordinates and returns destination coordinates
/// inside an `out_width` x `out_height` raster.
fn remap<F>(image: &Raster, out_width: u32, out_height: u32, map: F) -> Raster
where
    F: Fn(u32, u32) -> (u32, u32),
{
    let mut output = Raster::blank(out_width, out_height);

    for y in 0..image.height {
        for x in 0..image.width {
            let (dst_x, dst_y) = map(x, y);
            let src_idx = image.offset(x, y);
            let dst_idx = output.offset(dst_x, dst_y);
            output.pixels[dst_idx..dst_idx + Raster::CHANNELS]
                .copy_from_slice(&image.pixels[src_idx..src_idx + Raster::CHANNELS]);
        }
    }

    output
}

/// Mirror left-to-right: `(x, y) -> (W-1-x, y)`.
pub fn flip_horizontal(image: &Raster) -> Raster {
    let w = image.width;
    remap(image, image.width, image.height, |x, y| (w - 1 - x, y))
}

/// Mirror top-to-bottom: `(x, y) -> (x, H-1-y)`.
pub fn flip_vertical(image: &Raster) -> Raster {
    let h = image.height;
    remap(image, image.width, image.height, |x, y| (x, h - 1 - y))
}

/// Rotate half a turn: `(x, y) -> (W-1-x, H-1-y)`.
pub fn rotate180(image: &Raster) -> Raster {
    let (w, h) = (image.width, image.height);
    remap(image, w, h, |x, y| (w - 1 - x, h - 1 - y))
}

/// Rotate 90 degrees counter-clockwise: `(x, y) -> (y, W-1-x)`, output is H x W.
pub fn rotate90_ccw(image: &Raster) -> Raster {
    let w = image.width;
    remap(image, image.height, image.width, |x, y| (y, w - 1 - x))
}

/// Rotate 270 degrees counter-clockwise (90 clockwise): `(x, y) -> (H-1-y, x)`,
/// output is H x W.
pub fn rotate270_ccw(image: &Raster) -> Raster {
    let h = image.height;
    remap(image, image.height, image.width, |x, y| (h - 1 - y, x))
}

/// Apply the transform for an EXIF orientation code.
///
/// Codes outside 1-8 are treated like code 1 and return the input unchanged.
/// Composite codes apply the flip first, then the rotation.
pub fn apply_orientation(image: Raster, code: u32) -> Raster {
    match Orientation::from_code(code) {
        Some(orientation) => apply(image, orientation),
        None => image,
    }
}

/// Apply a typed orientation.
pub fn apply(image: Raster, orientation: Orientation) -> Raster {
    match orientation {
        Orientation::Normal => image,
        Orientation::FlipHorizontal => flip_horizontal(&image),
        Orientation::Rotate180 => rotate180(&image),
        Orientation::FlipVertical => flip_vertical(&image),
        Orientation::Transpose => rotate90_ccw(&flip_horizontal(&image)),
        Orientation::Rotate90CW => rotate270_ccw(&image),
        Orientation::Transverse => rotate270_ccw(&flip_horizontal(&image)),
        Orientation::Rotate90CCW => rotate90_ccw(&image),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
