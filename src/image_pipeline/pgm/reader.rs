use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::pgm::types::GrayImage;

pub trait PgmReader {
    fn read_pgm(&self, data: &[u8]) -> Result<GrayImage>;
}
