use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::pgm::types::GrayImage;
use crate::image_pipeline::pgm::writer::PgmWriter;

/// Comment line written into every produced file.
const OUTPUT_COMMENT: &str = "# Processed image";

/// Writer producing the plain (ASCII) PGM layout: magic, a fixed comment
/// line, dimensions, maximum value, then one line of samples per image row.
pub struct PlainPgmWriter;

impl PgmWriter for PlainPgmWriter {
    fn write_pgm(&self, image: &GrayImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding plain PGM image: {}x{}", image.width, image.height);

        let mut buffer = String::new();
        buffer.push_str("P2\n");
        buffer.push_str(OUTPUT_COMMENT);
        buffer.push('\n');
        buffer.push_str(&format!("{} {}\n", image.width, image.height));
        buffer.push_str(&format!("{}\n", image.max_value));

        for row in 0..image.height {
            let cells: Vec<String> = (0..image.width)
                .map(|col| image.get(row, col).to_string())
                .collect();
            buffer.push_str(&cells.join(" "));
            buffer.push('\n');
        }

        output.write_all(buffer.as_bytes())?;

        debug!("PGM encoding complete");
        Ok(())
    }
}
