//! ifc - Frame geometry and color mapping for imaging flow cytometry
//!
//! Imaging flow cytometry produces one small frame per cell and channel,
//! each with its own size. This crate family normalizes those frames to a
//! common size and renders intensity channels as tinted color images.
//!
//! # Overview
//!
//! - Centered crop, constant or noise padding, and crop-then-pad resize
//!   ([`transform`])
//! - HSV -> RGB conversion and whole-frame tinting ([`color`])
//!
//! # Example
//!
//! ```
//! use ifc::{Channel, Matrix};
//! use ifc::color::matrix_hsv_to_rgb;
//! use ifc::transform::{GaussianNoise, ResizeOptions, resize_with_options};
//!
//! // A 40x25 frame normalized to [0, 1]
//! let frame = Matrix::from_fn(40, 25, |r, c| ((r + c) % 10) as f64 / 9.0).unwrap();
//!
//! // Bring it to 32x32, padding with background noise
//! let opts = ResizeOptions::new(32, 32).noise(0.05, 0.01);
//! let sized = resize_with_options(&frame, &opts, &mut GaussianNoise::seeded(1)).unwrap();
//! assert_eq!(sized.dimensions(), (32, 32));
//!
//! // Render a central crop with a green tint
//! let center = ifc::transform::crop(&sized, 20, 20).unwrap();
//! let rgb = matrix_hsv_to_rgb(&center, 1.0 / 3.0, 1.0).unwrap();
//! assert_eq!(rgb.shape(), (20, 20, 3));
//! assert_eq!(rgb.plane(Channel::Red), &[0.0; 400][..]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ifc_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ifc_color as color;
pub use ifc_transform as transform;
