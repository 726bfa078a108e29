//! Reading network blocks.
//!
//! Blocks come from a comma separated argument or from a file (or stdin)
//! with one block per line.

mod reader;

pub use reader::{
    get_blocks, read_blocks, read_blocks_from_args, read_blocks_from_file,
    read_blocks_from_reader, BlockSource,
};
