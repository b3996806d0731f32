//! Scaling engine.
//!
//! Maps the full bounds of a source raster onto a target rectangle anchored
//! at the origin, using one of four interpolation strategies:
//! - **NearestNeighbor**: nearest source sample, fastest
//! - **ApproxBiLinear**: bilinear blend of the four pixels around each target
//!   pixel centre; cheap, but aliases when shrinking a lot
//! - **BiLinear**: triangle filter whose support widens on downscale
//! - **CatmullRom**: cubic convolution, best quality
//!
//! The scaled image is drawn "source over destination" onto a transparent
//! canvas of the target size.

use std::fmt;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use serde::{Deserialize, Serialize};

use crate::decode::{Dimensions, Raster};
use crate::ThumbnailError;

/// Largest target area accepted, in pixels (256 MiB of RGBA).
pub const MAX_TARGET_PIXELS: u64 = 1 << 26;

/// True when a `width` x `height` RGBA canvas stays within [`MAX_TARGET_PIXELS`].
pub fn fits_target_limit(width: u32, height: u32) -> bool {
    u64::from(width) * u64::from(height) <= MAX_TARGET_PIXELS
}

/// Interpolation strategy for scaling.
///
/// Parsed by exact, case-sensitive name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scaler {
    NearestNeighbor,
    ApproxBiLinear,
    BiLinear,
    #[default]
    CatmullRom,
}

impl Scaler {
    /// Every scaler, fastest first.
    pub const ALL: [Scaler; 4] = [
        Scaler::NearestNeighbor,
        Scaler::ApproxBiLinear,
        Scaler::BiLinear,
        Scaler::CatmullRom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scaler::NearestNeighbor => "NearestNeighbor",
            Scaler::ApproxBiLinear => "ApproxBiLinear",
            Scaler::BiLinear => "BiLinear",
            Scaler::CatmullRom => "CatmullRom",
        }
    }

    /// The `image` crate filter, for scalers that delegate to it.
    fn to_image_filter(self) -> Option<FilterType> {
        match self {
            Scaler::NearestNeighbor => Some(FilterType::Nearest),
            Scaler::BiLinear => Some(FilterType::Triangle),
            Scaler::CatmullRom => Some(FilterType::CatmullRom),
            Scaler::ApproxBiLinear => None,
        }
    }
}

impl FromStr for Scaler {
    type Err = ThumbnailError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Scaler::ALL
            .into_iter()
            .find(|scaler| scaler.name() == name)
            .ok_or_else(|| ThumbnailError::InvalidScaler(name.to_string()))
    }
}

impl fmt::Display for Scaler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scale a raster onto a `target.width` x `target.height` canvas.
///
/// The target offset is ignored; the canvas always starts at (0, 0).
///
/// # Errors
///
/// Returns `ThumbnailError::InvalidDimensions` if the target or the source
/// is empty, or the target exceeds [`MAX_TARGET_PIXELS`].
pub fn scale(image: &Raster, target: Dimensions, scaler: Scaler) -> Result<Raster, ThumbnailError> {
    if target.is_empty()
        || image.is_empty()
        || !fits_target_limit(target.width, target.height)
    {
        return Err(ThumbnailError::InvalidDimensions {
            width: target.width,
            height: target.height,
        });
    }

    let source = image
        .to_rgba_image()
        .ok_or(ThumbnailError::InvalidDimensions {
            width: image.width,
            height: image.height,
        })?;

    let scaled = match scaler.to_image_filter() {
        Some(filter) => imageops::resize(&source, target.width, target.height, filter),
        None => approx_bilinear(image, target.width, target.height),
    };

    let mut canvas = image::RgbaImage::new(target.width, target.height);
    imageops::overlay(&mut canvas, &scaled, 0, 0);

    Ok(Raster::from_rgba_image(canvas))
}

/// Map a target coordinate to the two nearest source coordinates and the
/// weight of the second one.
#[inline]
fn source_span(dst: u32, dst_len: u32, src_len: u32) -> (u32, u32, f64) {
    // (dst + 0.5) * src_len / dst_len - 0.5, kept exact for integer inputs
    let centre = (2 * dst as u64 + 1) as f64 * src_len as f64 / (2 * dst_len as u64) as f64;
    let pos = (centre - 0.5).clamp(0.0, (src_len - 1) as f64);
    let lo = pos.floor() as u32;
    let hi = (lo + 1).min(src_len - 1);
    (lo, hi, pos - lo as f64)
}

/// Bilinear sampling at each target pixel centre.
fn approx_bilinear(image: &Raster, width: u32, height: u32) -> image::RgbaImage {
    let mut output = image::RgbaImage::new(width, height);

    for dst_y in 0..height {
        let (y0, y1, fy) = source_span(dst_y, height, image.height);
        for dst_x in 0..width {
            let (x0, x1, fx) = source_span(dst_x, width, image.width);

            let p00 = image.pixel(x0, y0);
            let p10 = image.pixel(x1, y0);
            let p01 = image.pixel(x0, y1);
            let p11 = image.pixel(x1, y1);

            let mut pixel = [0u8; 4];
            for c in 0..Raster::CHANNELS {
                let top = p00[c] as f64 * (1.0 - fx) + p10[c] as f64 * fx;
                let bottom = p01[c] as f64 * (1.0 - fx) + p11[c] as f64 * fx;
                let value = top * (1.0 - fy) + bottom * fy;
                pixel[c] = value.round().clamp(0.0, 255.0) as u8;
            }
            output.put_pixel(dst_x, dst_y, image::Rgba(pixel));
        }
    }

    output
}
