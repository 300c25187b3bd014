//! Image comparison module
//!
//! This module reports how close two rasters are, as the percentage of
//! pixels whose intensities differ by no more than a tolerance.

mod similarity;

pub use similarity::{compare, similarity, Comparison, DEFAULT_TOLERANCE};
