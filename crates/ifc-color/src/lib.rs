//! ifc-color - Color rendering for imaging flow cytometry frames
//!
//! This crate renders single-channel intensity frames as tinted color
//! images:
//!
//! - **Color space conversion** ([`colorspace`]): HSV -> RGB for one color
//! - **Coloring** ([`coloring`]): tint a whole matrix with a fixed hue and
//!   saturation, using each element as the HSV value

pub mod coloring;
pub mod colorspace;
pub mod error;

// Re-export core types
pub use ifc_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use coloring::matrix_hsv_to_rgb;
pub use colorspace::{Hsv, Rgb, hsv_to_rgb};
