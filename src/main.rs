use anyhow::Context;
use despeckle_rs::image_pipeline::{DenoiseConfig, DenoisePipeline};
use despeckle_rs::logger;

use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting despeckle...");

    let input = std::env::args()
        .nth(1)
        .context("usage: despeckle_rs <image.pgm>")?;

    let config = DenoiseConfig::builder().build();
    let pipeline = DenoisePipeline::new(config);

    info!("Denoise pipeline initialized");
    info!("Window sizes: {:?}", pipeline.config().window_sizes);
    info!("Similarity tolerance: {}", pipeline.config().tolerance);
    info!("Output directory: {}", pipeline.config().output_dir.display());

    match pipeline.run_file(&input) {
        Ok(summary) => {
            if summary.is_clean() {
                info!("Processing successful!");
            } else {
                warn!(
                    "Processing finished with {} failed output(s)",
                    summary.failed_outputs.len()
                );
            }
            for outcome in &summary.comparisons {
                info!(
                    "{}x{} median: {:.2}% similar to the original",
                    outcome.window, outcome.window, outcome.similarity
                );
            }
        }
        Err(e) => {
            error!("Processing failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
