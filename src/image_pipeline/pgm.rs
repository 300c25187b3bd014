//! Plain PGM codec module
//!
//! This module provides reading and writing of the plain (ASCII, "P2")
//! variant of the PGM grayscale format.

mod reader;
mod plain_reader;
mod writer;
mod plain_writer;
pub mod types;

pub use reader::PgmReader;
pub use plain_reader::PlainPgmReader;
pub use writer::PgmWriter;
pub use plain_writer::PlainPgmWriter;
pub use types::GrayImage;
