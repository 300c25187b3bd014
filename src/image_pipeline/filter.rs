//! Median filtering module
//!
//! This module provides the noise-reduction engine that replaces each pixel
//! with the median of its square neighborhood.

mod median;

pub use median::MedianFilter;
