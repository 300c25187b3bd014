//! Despeckle pipeline module
//!
//! This module provides a structured approach to median-filter noise removal
//! on plain PGM images, with separate modules for PGM reading and writing,
//! filtering, comparison, reporting, and run orchestration.

pub mod pgm;
pub mod filter;
pub mod compare;
pub mod report;
pub mod denoise;
pub mod common;

pub use common::{
    PipelineError,
    Result,
};

pub use pgm::{
    GrayImage,
    PgmReader,
    PlainPgmReader,
    PgmWriter,
    PlainPgmWriter,
};

pub use filter::MedianFilter;

pub use compare::{
    Comparison,
    DEFAULT_TOLERANCE,
    similarity,
};

pub use report::{
    ComparisonLog,
    LogRow,
    NullProgress,
    ProgressSink,
    TracingProgress,
};

pub use denoise::{
    ComparisonOutcome,
    DenoiseConfig,
    DenoiseConfigBuilder,
    DenoisePipeline,
    RunSummary,
};
