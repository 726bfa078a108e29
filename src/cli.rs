//! Command line arguments.

use crate::input::BlockSource;
use crate::output::{BlockSink, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Given a list of networks, reorganise them so that no host is represented
/// in more than one range and that the most specific sub-networks are
/// preserved.
///
/// For example, the list [1.0.0.0/8, 1.128.0.0/9, 1.192.0.0/10] will be
/// adjusted so that the entire /8 of hosts are represented just once and the
/// /10 is preserved, resulting in [1.0.0.0/9, 1.128.0.0/10, 1.192.0.0/10].
#[derive(Parser, Debug)]
#[command(name = "blockadjust")]
#[command(about = "IP block adjustment")]
#[command(version)]
pub struct Cli {
    /// Comma separated list of IP network blocks, e.g. "1.0.0.0/8,1.0.0.0/9"
    #[arg(
        value_name = "BLOCKS",
        required_unless_present = "input",
        conflicts_with = "input"
    )]
    pub blocks: Option<String>,

    /// File from which to read blocks to adjust, one block per line ("-" for stdin)
    #[arg(short, long, value_name = "INPUTFILE")]
    pub input: Option<PathBuf>,

    /// File to which to output adjusted blocks ("-" for stdout)
    #[arg(short, long, value_name = "OUTPUTFILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print debug statements to STDERR
    #[arg(short, long)]
    pub debug: bool,

    /// log4rs YAML config replacing the built-in STDERR logger
    #[arg(long, env = "BLOCKADJUST_LOG_CONFIG", value_name = "FILE")]
    pub log_config: Option<PathBuf>,
}

impl Cli {
    /// Where the blocks come from.
    pub fn source(&self) -> BlockSource {
        match (&self.blocks, &self.input) {
            (Some(blocks), _) => BlockSource::Args(blocks.clone()),
            (None, Some(path)) => BlockSource::from_input_arg(path),
            (None, None) => BlockSource::Stdin,
        }
    }

    /// Where the adjusted blocks go.
    pub fn sink(&self) -> BlockSink {
        BlockSink::from_output_arg(self.output.as_deref())
    }
}
