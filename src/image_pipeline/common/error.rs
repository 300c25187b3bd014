use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode PGM image: {0}")]
    DecodeError(String),

    #[error("Failed to encode PGM image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Unsupported format: expected plain PGM magic \"P2\", found {0:?}")]
    UnsupportedFormat(String),

    #[error("Median window size must be odd and positive, got {0}")]
    InvalidWindow(usize),

    #[error("Images have no overlapping pixels to compare")]
    EmptyOverlap,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
