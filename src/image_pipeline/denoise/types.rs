use std::path::PathBuf;

use crate::image_pipeline::compare::DEFAULT_TOLERANCE;

#[derive(Debug, Clone)]
pub struct DenoiseConfig {
    pub window_sizes: Vec<usize>,
    pub tolerance: u16,
    pub output_dir: PathBuf,
    pub log_path: PathBuf,
    pub preview: bool,
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            window_sizes: vec![3, 5],
            tolerance: DEFAULT_TOLERANCE,
            output_dir: PathBuf::from("photo"),
            log_path: PathBuf::from("results.csv"),
            preview: true,
        }
    }
}

impl DenoiseConfig {
    pub fn builder() -> DenoiseConfigBuilder {
        DenoiseConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct DenoiseConfigBuilder {
    window_sizes: Option<Vec<usize>>,
    tolerance: Option<u16>,
    output_dir: Option<PathBuf>,
    log_path: Option<PathBuf>,
    preview: Option<bool>,
}

impl DenoiseConfigBuilder {
    pub fn window_sizes(mut self, window_sizes: Vec<usize>) -> Self {
        self.window_sizes = Some(window_sizes);
        self
    }

    pub fn tolerance(mut self, tolerance: u16) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(log_path.into());
        self
    }

    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = Some(preview);
        self
    }

    pub fn build(self) -> DenoiseConfig {
        let default = DenoiseConfig::default();
        DenoiseConfig {
            window_sizes: self.window_sizes.unwrap_or(default.window_sizes),
            tolerance: self.tolerance.unwrap_or(default.tolerance),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            log_path: self.log_path.unwrap_or(default.log_path),
            preview: self.preview.unwrap_or(default.preview),
        }
    }
}
