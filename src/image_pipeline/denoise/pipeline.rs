use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::{
    common::error::{PipelineError, Result},
    compare,
    filter::MedianFilter,
    pgm::{GrayImage, PgmReader, PgmWriter, PlainPgmReader, PlainPgmWriter},
    report::{ComparisonLog, LogRow, TracingProgress},
};

use super::summary::{ComparisonOutcome, RunSummary};
use super::types::DenoiseConfig;

const FILTER_NAME: &str = "Median";
const PREVIEW_ROWS: usize = 5;
const PREVIEW_COLS: usize = 5;

pub struct DenoisePipeline<R: PgmReader, W: PgmWriter> {
    reader: R,
    writer: W,
    config: DenoiseConfig,
}

impl DenoisePipeline<PlainPgmReader, PlainPgmWriter> {
    pub fn new(config: DenoiseConfig) -> Self {
        Self {
            reader: PlainPgmReader,
            writer: PlainPgmWriter,
            config,
        }
    }
}

impl<R: PgmReader, W: PgmWriter> DenoisePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: DenoiseConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn run(&self, input_data: &[u8], image_name: &str) -> Result<RunSummary> {
        info!("Starting denoise run");

        let original = {
            let _span = tracing::info_span!("decode_pgm").entered();
            self.reader.read_pgm(input_data)?
        };

        info!(
            width = original.width,
            height = original.height,
            max_value = original.max_value,
            "Loaded image ({} samples)",
            original.pixel_count()
        );
        if self.config.preview {
            info!(
                "First {}x{} block:\n{}",
                PREVIEW_ROWS,
                PREVIEW_COLS,
                original.preview(PREVIEW_ROWS, PREVIEW_COLS)
            );
        }

        let mut summary = RunSummary::new(image_name);
        let log = ComparisonLog::new(&self.config.log_path);

        self.persist(
            &original,
            format!("original_{}", image_name),
            &mut summary,
        );

        for &window in &self.config.window_sizes {
            let filter = match MedianFilter::new(window) {
                Ok(filter) => filter,
                Err(e) => {
                    warn!("Skipping window {}: {}", window, e);
                    summary.skipped_windows.push(window);
                    continue;
                }
            };

            let filtered = {
                let _span = tracing::info_span!("median_filter", window = window).entered();
                filter.apply_with_progress(&original, &mut TracingProgress::default())
            };

            let comparison = {
                let _span = tracing::info_span!("compare", window = window).entered();
                compare::compare(&original, &filtered, self.config.tolerance)?
            };
            info!(
                "Similarity for {}x{} window: {:.2}%",
                window,
                window,
                comparison.percent()
            );

            if let Err(e) = log.append(&LogRow {
                image: image_name.to_string(),
                filter: FILTER_NAME.to_string(),
                window,
                similarity: comparison.percent(),
            }) {
                warn!("Failed to update comparison log: {}", e);
                summary.failed_outputs.push(self.config.log_path.clone());
            }

            self.persist(
                &filtered,
                format!("filtered_{}x{}_{}", window, window, image_name),
                &mut summary,
            );

            summary.comparisons.push(ComparisonOutcome {
                window,
                similarity: comparison.percent(),
                max_diff: comparison.max_diff,
            });
        }

        info!(
            saved = summary.images_saved,
            comparisons = summary.comparisons.len(),
            "Denoise run complete"
        );
        Ok(summary)
    }

    #[instrument(skip(self, input_path))]
    pub fn run_file<P: AsRef<Path>>(&self, input_path: P) -> Result<RunSummary> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Processing file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let image_name = input_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input_path.display().to_string());

        self.run(&input_data, &image_name)
    }

    pub fn config(&self) -> &DenoiseConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DenoiseConfig) {
        self.config = config;
    }

    fn persist(&self, image: &GrayImage, file_name: String, summary: &mut RunSummary) {
        let path = self.config.output_dir.join(file_name);
        match self.write_to(image, &path) {
            Ok(()) => {
                summary.images_saved += 1;
                debug!("Saved {}", path.display());
            }
            Err(e) => {
                warn!("Failed to save {}: {}", path.display(), e);
                summary.failed_outputs.push(path);
            }
        }
    }

    fn write_to(&self, image: &GrayImage, path: &Path) -> Result<()> {
        let _span = tracing::info_span!("write_output").entered();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PipelineError::OutputWriteError(format!("{}: {}", parent.display(), e))
                })?;
            }
        }

        let mut file = std::fs::File::create(path).map_err(|e| {
            PipelineError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        self.writer.write_pgm(image, &mut file)
    }
}
