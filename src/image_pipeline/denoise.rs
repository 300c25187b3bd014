mod types;
mod summary;
mod pipeline;

#[cfg(test)]
mod tests;

pub use types::{DenoiseConfig, DenoiseConfigBuilder};
pub use summary::{ComparisonOutcome, RunSummary};
pub use pipeline::DenoisePipeline;
