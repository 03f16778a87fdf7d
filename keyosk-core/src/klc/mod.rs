//! The .klc layout-file reader: byte decoding, section extraction, and the
//! line classifiers that turn the semi-structured text into typed tables.

mod encoding;
mod error;
mod parser;

pub use encoding::decode_layout_bytes;
pub use error::{KlcError, Result};
pub use parser::KlcParser;
