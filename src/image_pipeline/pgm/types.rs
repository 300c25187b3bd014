//! Grayscale raster types

/// An owned grayscale raster with samples stored in one contiguous
/// row-major buffer.
///
/// `Clone` produces a deep copy with independent storage; two live images
/// never alias the same buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Declared maximum sample intensity from the PGM header
    pub max_value: u16,
    /// Sample values in row-major order, `height * width` entries.
    /// Each value is in `[0, max_value]` by convention; this is not enforced.
    pub data: Vec<u16>,
}

impl GrayImage {
    /// Zero-filled raster of the given shape.
    pub fn new(width: usize, height: usize, max_value: u16) -> Self {
        Self {
            width,
            height,
            max_value,
            data: vec![0; width * height],
        }
    }

    /// Wrap an existing sample buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, max_value: u16, data: Vec<u16>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "sample count must match width * height"
        );
        Self {
            width,
            height,
            max_value,
            data,
        }
    }

    /// Convert `(row, col)` to a linear index into `data`.
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Sample value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u16 {
        self.data[self.idx(row, col)]
    }

    /// Overwrite the sample at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u16) {
        let i = self.idx(row, col);
        self.data[i] = value;
    }

    /// Total number of samples.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Tab-separated block of the top-left `rows x cols` samples, clipped to
    /// the image bounds. One line per row.
    pub fn preview(&self, rows: usize, cols: usize) -> String {
        let mut block = String::new();
        for row in 0..rows.min(self.height) {
            let cells: Vec<String> = (0..cols.min(self.width))
                .map(|col| self.get(row, col).to_string())
                .collect();
            block.push_str(&cells.join("\t"));
            block.push('\n');
        }
        block
    }
}
