//! ifc-core - Basic data structures for imaging flow cytometry frames
//!
//! This crate provides the value types exchanged between the geometry and
//! color crates:
//!
//! - [`Matrix`] - Single-channel `f64` frame (row-major)
//! - [`Mask`] - Opaque side-channel payload carried alongside a matrix
//! - [`ColorVolume`] - Three-plane RGB rendering of a matrix
//! - [`Channel`] - Plane selector for [`ColorVolume`]

pub mod error;
pub mod matrix;
pub mod volume;

pub use error::{Error, Result};
pub use matrix::{Mask, Matrix};
pub use volume::{Channel, ColorVolume};
