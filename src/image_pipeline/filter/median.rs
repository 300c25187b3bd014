use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::pgm::types::GrayImage;
use crate::image_pipeline::report::{NullProgress, ProgressSink};

/// Median noise-reduction filter over a square pixel neighborhood.
///
/// Every interior pixel of the output is the median of the `window x window`
/// block centred on it in the source. Pixels within `window / 2` of a border
/// have no complete neighborhood and are copied from the source unchanged;
/// border handling is deliberately that simple.
pub struct MedianFilter {
    window: usize,
}

impl MedianFilter {
    /// Validate the window size and build the filter.
    ///
    /// The window must be odd so the neighborhood has an exact middle sample.
    /// Even or zero sizes are rejected with [`PipelineError::InvalidWindow`].
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 || window % 2 == 0 {
            return Err(PipelineError::InvalidWindow(window));
        }
        Ok(Self { window })
    }

    /// Side length of the square neighborhood.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Filter `source` into a new image, discarding progress events.
    pub fn apply(&self, source: &GrayImage) -> GrayImage {
        self.apply_with_progress(source, &mut NullProgress)
    }

    /// Filter `source` into a new image.
    ///
    /// The source is never mutated. After each completed interior row the
    /// sink receives one event; the engine itself performs no I/O. Same
    /// source and window always produce the same output.
    pub fn apply_with_progress(
        &self,
        source: &GrayImage,
        progress: &mut dyn ProgressSink,
    ) -> GrayImage {
        let offset = self.window / 2;
        // Border pixels keep their source values, so start from a copy.
        let mut filtered = source.clone();

        if source.height <= 2 * offset || source.width <= 2 * offset {
            debug!(
                "image {}x{} has no interior for a {} window, output is a copy",
                source.width, source.height, self.window
            );
            return filtered;
        }

        // One scratch buffer for the whole pass instead of an allocation
        // per pixel.
        let mut neighborhood = Vec::with_capacity(self.window * self.window);

        for row in offset..source.height - offset {
            for col in offset..source.width - offset {
                neighborhood.clear();
                for wrow in row - offset..=row + offset {
                    for wcol in col - offset..=col + offset {
                        neighborhood.push(source.get(wrow, wcol));
                    }
                }
                neighborhood.sort_unstable();
                // window * window is odd, so this index is the exact median.
                filtered.set(row, col, neighborhood[neighborhood.len() / 2]);
            }
            progress.row_filtered(row, source.height);
        }

        filtered
    }
}
