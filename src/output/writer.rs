//! Block writers.

use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// How adjusted blocks are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One block per line.
    #[default]
    Text,
    /// A JSON array of blocks.
    Json,
}

/// Where adjusted blocks are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockSink {
    Stdout,
    File(PathBuf),
}

impl BlockSink {
    /// Sink for an optional output file argument, where `-` means stdout.
    pub fn from_output_arg(path: Option<&Path>) -> BlockSink {
        match path {
            Some(path) if path != Path::new("-") => BlockSink::File(path.to_path_buf()),
            _ => BlockSink::Stdout,
        }
    }
}

/// Write `blocks` to `writer` in the given format.
pub fn write_blocks_to<W: Write>(
    mut writer: W,
    blocks: &[String],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for block in blocks {
                writeln!(writer, "{block}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, blocks)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write `blocks` to `sink` in the given format.
pub fn write_blocks(sink: &BlockSink, blocks: &[String], format: OutputFormat) -> Result<()> {
    match sink {
        BlockSink::Stdout => write_blocks_to(io::stdout().lock(), blocks, format),
        BlockSink::File(path) => {
            log::info!("Writing {} blocks to file: {}", blocks.len(), path.display());
            let file = File::create(path)?;
            write_blocks_to(BufWriter::new(file), blocks, format)
        }
    }
}
