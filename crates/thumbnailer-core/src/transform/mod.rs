//! Geometric transforms applied between decode and scaling.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - `x` grows to the right, `y` grows downwards
//! - Rotation names follow the visual direction (CCW = counter-clockwise)

mod orientation;

pub use orientation::{
    apply, apply_orientation, flip_horizontal, flip_vertical, rotate180, rotate270_ccw,
    rotate90_ccw,
};
