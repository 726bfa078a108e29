//! Output of adjusted blocks.
//!
//! - [`writer`] - Plain text (one block per line) or JSON to a file or stdout

mod writer;

pub use writer::{write_blocks, write_blocks_to, BlockSink, OutputFormat};
