use std::path::PathBuf;

/// Result of comparing one filtered image against the original.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOutcome {
    pub window: usize,
    pub similarity: f64,
    pub max_diff: u16,
}

/// Everything a run produced, for callers that want to report on it.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub image_name: String,
    pub comparisons: Vec<ComparisonOutcome>,
    pub images_saved: usize,
    pub failed_outputs: Vec<PathBuf>,
    pub skipped_windows: Vec<usize>,
}

impl RunSummary {
    pub fn new(image_name: impl Into<String>) -> Self {
        Self {
            image_name: image_name.into(),
            ..Self::default()
        }
    }

    /// True when every output destination was written.
    pub fn is_clean(&self) -> bool {
        self.failed_outputs.is_empty() && self.skipped_windows.is_empty()
    }
}
