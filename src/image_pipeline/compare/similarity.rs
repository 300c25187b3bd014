use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::pgm::types::GrayImage;

/// Default maximum absolute intensity difference treated as "similar".
pub const DEFAULT_TOLERANCE: u16 = 5;

/// Pixel-wise comparison counts for two rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Pairs whose absolute difference is within the tolerance
    pub similar: usize,
    /// Total pairs compared (the overlapping region)
    pub total: usize,
    /// Largest absolute difference seen
    pub max_diff: u16,
}

impl Comparison {
    /// Share of similar pairs as a 0-100 percentage.
    pub fn percent(&self) -> f64 {
        (self.similar as f64 * 100.0) / self.total as f64
    }
}

/// Compare two rasters pixel by pixel under `tolerance`.
///
/// Only the overlapping top-left `min(height) x min(width)` subgrid is
/// compared; differing shapes are not an error. An empty overlap is reported
/// as [`PipelineError::EmptyOverlap`] so the percentage is always well
/// defined.
pub fn compare(a: &GrayImage, b: &GrayImage, tolerance: u16) -> Result<Comparison> {
    let rows = a.height.min(b.height);
    let cols = a.width.min(b.width);
    if rows == 0 || cols == 0 {
        return Err(PipelineError::EmptyOverlap);
    }

    let mut similar = 0usize;
    let mut max_diff = 0u16;
    for row in 0..rows {
        for col in 0..cols {
            let diff = a.get(row, col).abs_diff(b.get(row, col));
            if diff <= tolerance {
                similar += 1;
            }
            max_diff = max_diff.max(diff);
        }
    }

    Ok(Comparison {
        similar,
        total: rows * cols,
        max_diff,
    })
}

/// Percentage of overlapping pixels within `tolerance`, in 0-100.
pub fn similarity(a: &GrayImage, b: &GrayImage, tolerance: u16) -> Result<f64> {
    compare(a, b, tolerance).map(|c| c.percent())
}
