use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::pgm::types::GrayImage;

pub trait PgmWriter {
    fn write_pgm(&self, image: &GrayImage, output: &mut dyn Write) -> Result<()>;
}
