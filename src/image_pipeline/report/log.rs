use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};

const LOG_HEADER: &str = "Image;Filter;Window_Size;Similarity_%";

/// One comparison result destined for the log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    pub image: String,
    pub filter: String,
    pub window: usize,
    pub similarity: f64,
}

impl LogRow {
    /// Semicolon-delimited form, e.g. `photo.pgm;Median;3x3;96.00`.
    pub fn to_csv(&self) -> String {
        format!(
            "{};{};{}x{};{:.2}",
            self.image, self.filter, self.window, self.window, self.similarity
        )
    }
}

/// Append-only comparison log shared by every run.
///
/// The header line is written exactly once, when the file is created or still
/// empty; later appends only add rows, so results accumulate across runs.
pub struct ComparisonLog {
    path: PathBuf,
}

impl ComparisonLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, row: &LogRow) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", self.path.display(), e))
            })?;

        let is_empty = file
            .metadata()
            .map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", self.path.display(), e))
            })?
            .len()
            == 0;
        if is_empty {
            writeln!(file, "{}", LOG_HEADER)?;
        }

        writeln!(file, "{}", row.to_csv())?;
        debug!("Appended comparison row to {}", self.path.display());
        Ok(())
    }
}
