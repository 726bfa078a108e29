//! Block readers.

use crate::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where to read network blocks from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockSource {
    /// Comma separated list, e.g. `"1.0.0.0/8,1.0.0.0/9"`.
    Args(String),
    /// One block per line on stdin.
    Stdin,
    /// One block per line in a file.
    File(PathBuf),
}

impl BlockSource {
    /// Source for an input file argument, where `-` means stdin.
    pub fn from_input_arg(path: &Path) -> BlockSource {
        if path == Path::new("-") {
            BlockSource::Stdin
        } else {
            BlockSource::File(path.to_path_buf())
        }
    }
}

/// Trim each candidate block and drop the empty ones.
pub fn get_blocks<I, S>(iter: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    iter.into_iter()
        .map(|candidate| candidate.as_ref().trim().to_string())
        .filter(|candidate| !candidate.is_empty())
        .collect()
}

/// Split a comma separated list of blocks.
pub fn read_blocks_from_args(blocks: &str) -> Vec<String> {
    get_blocks(blocks.split(','))
}

/// Read one block per line.
pub fn read_blocks_from_reader<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(get_blocks(lines))
}

/// Read one block per line from the file at `path`.
pub fn read_blocks_from_file(path: &Path) -> Result<Vec<String>> {
    log::info!("Reading blocks from file: {}", path.display());
    let file = File::open(path)?;
    read_blocks_from_reader(BufReader::new(file))
}

/// Read all blocks from `source`.
pub fn read_blocks(source: &BlockSource) -> Result<Vec<String>> {
    let blocks = match source {
        BlockSource::Args(blocks) => read_blocks_from_args(blocks),
        BlockSource::Stdin => {
            log::info!("Reading blocks from stdin");
            read_blocks_from_reader(io::stdin().lock())?
        }
        BlockSource::File(path) => read_blocks_from_file(path)?,
    };
    log::debug!("Read {} blocks", blocks.len());
    Ok(blocks)
}
