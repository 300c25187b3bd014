//! Plain PGM reader implementation.
//!
//! Parses the ASCII "P2" PGM variant: a two-character magic token, then
//! whitespace-delimited width, height and maximum sample value tokens, then
//! `width * height` sample values in row-major order. Comment lines starting
//! with `#` may appear between tokens.

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::pgm::reader::PgmReader;
use crate::image_pipeline::pgm::types::GrayImage;

/// Magic token identifying the plain-text grayscale variant.
const MAGIC: &str = "P2";

/// Reader for the plain (ASCII) PGM format.
///
/// Only the "P2" variant is supported; the binary "P5" variant and other
/// netpbm formats are rejected with [`PipelineError::UnsupportedFormat`].
/// Sample values are parsed as `u16` and are not checked against the
/// declared maximum.
pub struct PlainPgmReader;

impl PgmReader for PlainPgmReader {
    fn read_pgm(&self, data: &[u8]) -> Result<GrayImage> {
        debug!("Decoding plain PGM, {} bytes", data.len());

        let magic = data.get(..2).unwrap_or(data);
        let magic = String::from_utf8_lossy(magic);
        if magic != MAGIC {
            return Err(PipelineError::UnsupportedFormat(magic.into_owned()));
        }

        let mut tokens = TokenStream::new(&data[MAGIC.len()..]);

        let width = tokens.next_number::<u32>("width")? as usize;
        let height = tokens.next_number::<u32>("height")? as usize;
        let max_value = tokens.next_number::<u16>("maximum sample value")?;

        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        let pixel_count = width * height;
        let mut samples = Vec::with_capacity(pixel_count);
        for index in 0..pixel_count {
            let token = tokens.next_token().ok_or_else(|| {
                PipelineError::DecodeError(format!(
                    "sample data truncated after {} of {} values",
                    index, pixel_count
                ))
            })?;
            samples.push(parse_sample(token, index)?);
        }

        debug!(
            "Decoded image: {}x{}, max value {}",
            width, height, max_value
        );

        Ok(GrayImage::from_raw(width, height, max_value, samples))
    }
}

fn parse_sample(token: &[u8], index: usize) -> Result<u16> {
    let text = std::str::from_utf8(token)
        .map_err(|_| PipelineError::DecodeError(format!("sample {} is not ASCII text", index)))?;
    text.parse::<u16>()
        .map_err(|e| PipelineError::DecodeError(format!("bad sample {} {:?}: {}", index, text, e)))
}

/// Whitespace- and comment-aware token scanner over the PGM body.
struct TokenStream<'a> {
    rest: &'a [u8],
}

impl<'a> TokenStream<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { rest: data }
    }

    /// Next non-comment token, or `None` at end of input.
    fn next_token(&mut self) -> Option<&'a [u8]> {
        loop {
            match self.rest.first().copied() {
                Some(b'#') => {
                    // Comment runs to the end of the line.
                    let end = self
                        .rest
                        .iter()
                        .position(|&b| b == b'\n')
                        .map(|i| i + 1)
                        .unwrap_or(self.rest.len());
                    self.rest = &self.rest[end..];
                }
                Some(b) if b.is_ascii_whitespace() => {
                    self.rest = &self.rest[1..];
                }
                Some(_) => break,
                None => return None,
            }
        }

        let end = self
            .rest
            .iter()
            .position(|&b| b.is_ascii_whitespace() || b == b'#')
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    fn next_number<T>(&mut self, what: &'static str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let token = self
            .next_token()
            .ok_or_else(|| PipelineError::DecodeError(format!("missing {}", what)))?;
        let text = std::str::from_utf8(token)
            .map_err(|_| PipelineError::DecodeError(format!("{} is not ASCII text", what)))?;
        text.parse::<T>()
            .map_err(|e| PipelineError::DecodeError(format!("bad {} {:?}: {}", what, text, e)))
    }
}
