//! ifc-transform - Frame geometry for imaging flow cytometry
//!
//! This crate brings frames of arbitrary size to a common shape without
//! interpolation:
//!
//! - Centered cropping ([`crop`])
//! - Centered padding with a constant background ([`expand_without_noise`])
//! - Centered padding with normally distributed noise
//!   ([`expand_with_noise`], [`expand_row_with_noise`], [`expand_col_with_noise`])
//! - Crop-then-pad resizing to an exact target shape ([`resize`],
//!   [`resize_with_options`])
//!
//! Whenever an axis shrinks or grows, the removed or added margin is split
//! evenly with the odd element going to the trailing (bottom/right) edge.
//! A target of `0` leaves an axis unchanged.

pub mod crop;
mod error;
pub mod expand;
pub mod margin;
pub mod noise;
pub mod resize;

pub use crop::crop;
pub use error::{TransformError, TransformResult};
pub use expand::{
    expand_col_with_noise, expand_row_with_noise, expand_with_noise, expand_without_noise,
};
pub use margin::Margins;
pub use noise::{GaussianNoise, NoiseSource};
pub use resize::{PadFill, ResizeOptions, resize, resize_with_options};
