#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::tempdir;

    use crate::image_pipeline::common::error::{PipelineError, Result};
    use crate::image_pipeline::denoise::pipeline::DenoisePipeline;
    use crate::image_pipeline::denoise::types::DenoiseConfig;
    use crate::image_pipeline::pgm::{GrayImage, PgmReader, PgmWriter, PlainPgmReader};

    struct MockReader {
        should_fail: bool,
        mock_image: Option<GrayImage>,
    }

    impl PgmReader for MockReader {
        fn read_pgm(&self, _data: &[u8]) -> Result<GrayImage> {
            if self.should_fail {
                return Err(PipelineError::DecodeError("Mock decode error".to_string()));
            }
            Ok(self.mock_image.clone().unwrap_or_else(outlier_image))
        }
    }

    struct MockWriter {
        should_fail: bool,
        written: std::sync::Arc<std::sync::Mutex<Vec<GrayImage>>>,
    }

    impl PgmWriter for MockWriter {
        fn write_pgm(&self, image: &GrayImage, _output: &mut dyn Write) -> Result<()> {
            if self.should_fail {
                return Err(PipelineError::EncodeError("Mock encode error".to_string()));
            }
            self.written.lock().unwrap().push(image.clone());
            Ok(())
        }
    }

    // 5x5 constant 100 with one dark outlier in the middle. Both default
    // window sizes smooth it away, leaving 24 of 25 pixels within
    // tolerance: 96.00%.
    fn outlier_image() -> GrayImage {
        let mut image = GrayImage::from_raw(5, 5, 255, vec![100; 25]);
        image.set(2, 2, 0);
        image
    }

    fn config_in(dir: &std::path::Path) -> DenoiseConfig {
        DenoiseConfig::builder()
            .output_dir(dir.join("photo"))
            .log_path(dir.join("results.csv"))
            .preview(false)
            .build()
    }

    #[test]
    fn test_config_builder() {
        let config = DenoiseConfig::builder()
            .window_sizes(vec![7])
            .tolerance(0)
            .output_dir("out")
            .log_path("log.csv")
            .preview(false)
            .build();

        assert_eq!(config.window_sizes, vec![7]);
        assert_eq!(config.tolerance, 0);
        assert_eq!(config.output_dir, std::path::PathBuf::from("out"));
        assert_eq!(config.log_path, std::path::PathBuf::from("log.csv"));
        assert!(!config.preview);
    }

    #[test]
    fn test_config_defaults() {
        let config = DenoiseConfig::builder().build();

        assert_eq!(config.window_sizes, vec![3, 5]);
        assert_eq!(config.tolerance, 5);
        assert_eq!(config.output_dir, std::path::PathBuf::from("photo"));
        assert_eq!(config.log_path, std::path::PathBuf::from("results.csv"));
        assert!(config.preview);
    }

    #[test]
    fn test_successful_run() {
        let dir = tempdir().unwrap();
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: false, mock_image: None };
        let writer = MockWriter { should_fail: false, written: written.clone() };

        let pipeline = DenoisePipeline::with_custom(reader, writer, config_in(dir.path()));
        let summary = pipeline.run(b"unused", "photo.pgm").unwrap();

        assert_eq!(summary.image_name, "photo.pgm");
        assert_eq!(summary.images_saved, 3);
        assert_eq!(summary.comparisons.len(), 2);
        assert!(summary.is_clean());
        assert_eq!(written.lock().unwrap().len(), 3);

        for outcome in &summary.comparisons {
            assert_eq!(outcome.similarity, 96.0);
        }

        let log = std::fs::read_to_string(dir.path().join("results.csv")).unwrap();
        assert_eq!(
            log,
            "Image;Filter;Window_Size;Similarity_%\n\
             photo.pgm;Median;3x3;96.00\n\
             photo.pgm;Median;5x5;96.00\n"
        );
    }

    #[test]
    fn test_reader_failure() {
        let dir = tempdir().unwrap();
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: true, mock_image: None };
        let writer = MockWriter { should_fail: false, written: written.clone() };

        let pipeline = DenoisePipeline::with_custom(reader, writer, config_in(dir.path()));
        let result = pipeline.run(b"unused", "photo.pgm");

        assert!(matches!(result.unwrap_err(), PipelineError::DecodeError(_)));
        assert!(written.lock().unwrap().is_empty());
        assert!(!dir.path().join("results.csv").exists());
    }

    #[test]
    fn test_writer_failure_keeps_the_run_alive() {
        let dir = tempdir().unwrap();
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: false, mock_image: None };
        let writer = MockWriter { should_fail: true, written };

        let pipeline = DenoisePipeline::with_custom(reader, writer, config_in(dir.path()));
        let summary = pipeline.run(b"unused", "photo.pgm").unwrap();

        assert_eq!(summary.images_saved, 0);
        assert_eq!(summary.failed_outputs.len(), 3);
        assert_eq!(summary.comparisons.len(), 2);
        assert!(!summary.is_clean());

        // Comparison rows do not depend on the image writer.
        let log = std::fs::read_to_string(dir.path().join("results.csv")).unwrap();
        assert_eq!(log.lines().count(), 3);
    }

    #[test]
    fn test_even_window_is_skipped() {
        let dir = tempdir().unwrap();
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: false, mock_image: None };
        let writer = MockWriter { should_fail: false, written };

        let config = DenoiseConfig::builder()
            .window_sizes(vec![3, 4])
            .output_dir(dir.path().join("photo"))
            .log_path(dir.path().join("results.csv"))
            .preview(false)
            .build();

        let pipeline = DenoisePipeline::with_custom(reader, writer, config);
        let summary = pipeline.run(b"unused", "photo.pgm").unwrap();

        assert_eq!(summary.skipped_windows, vec![4]);
        assert_eq!(summary.comparisons.len(), 1);
        assert_eq!(summary.images_saved, 2);
        assert!(!summary.is_clean());
    }

    #[test]
    fn test_rejects_non_pgm_input() {
        let dir = tempdir().unwrap();
        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let writer = MockWriter { should_fail: false, written };

        let pipeline = DenoisePipeline::with_custom(PlainPgmReader, writer, config_in(dir.path()));
        let result = pipeline.run(b"P5\n2 2\n255\n", "photo.pgm");

        assert!(matches!(result.unwrap_err(), PipelineError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempdir().unwrap();
        let pipeline = DenoisePipeline::new(config_in(dir.path()));

        let result = pipeline.run_file(dir.path().join("missing.pgm"));
        assert!(matches!(result.unwrap_err(), PipelineError::InputReadError(_)));
    }

    #[test]
    fn test_results_accumulate_across_runs() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("photo.pgm");
        let pgm = "P2\n# noisy scan\n5 5\n255\n\
                   100 100 100 100 100\n\
                   100 100 100 100 100\n\
                   100 100 0 100 100\n\
                   100 100 100 100 100\n\
                   100 100 100 100 100\n";
        std::fs::write(&input_path, pgm).unwrap();

        let pipeline = DenoisePipeline::new(config_in(dir.path()));
        pipeline.run_file(&input_path).unwrap();
        let summary = pipeline.run_file(&input_path).unwrap();

        assert!(summary.is_clean());
        assert!(dir.path().join("photo/original_photo.pgm").exists());
        assert!(dir.path().join("photo/filtered_3x3_photo.pgm").exists());
        assert!(dir.path().join("photo/filtered_5x5_photo.pgm").exists());

        let log = std::fs::read_to_string(dir.path().join("results.csv")).unwrap();
        assert_eq!(log.lines().filter(|l| l.starts_with("Image;")).count(), 1);
        assert_eq!(log.lines().count(), 5);
    }
}
