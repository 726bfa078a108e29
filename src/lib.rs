//! blockadjust -- IP block adjustment
//!
//! Given a list of networks, reorganise them so that no host is represented
//! in more than one block and the most specific sub-networks are preserved.
//!
//! ```
//! let adjusted = blockadjust::adjust_blocks(&["1.0.0.0/8", "1.128.0.0/10"]).unwrap();
//! assert_eq!(adjusted, vec!["1.0.0.0/9", "1.128.0.0/10", "1.192.0.0/10"]);
//! ```

pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod trie;

pub use error::{Error, Result};
pub use models::{Family, Prefix};
pub use processing::adjust;
pub use trie::PrefixTrie;

use cli::Cli;

/// Adjust `blocks`, treating an empty input or an empty result as an error.
///
/// # Errors
/// * [`Error::NoBlocks`] if `blocks` is empty
/// * [`Error::NoResult`] if no block was valid
pub fn adjust_blocks<S: AsRef<str>>(blocks: &[S]) -> Result<Vec<String>> {
    if blocks.is_empty() {
        return Err(Error::NoBlocks);
    }
    let adjusted = adjust(blocks);
    if adjusted.is_empty() {
        return Err(Error::NoResult);
    }
    Ok(adjusted)
}

/// Read, adjust and write the blocks described by `cli`.
pub fn run(cli: &Cli) -> Result<()> {
    let blocks = input::read_blocks(&cli.source())?;
    let adjusted = adjust_blocks(&blocks)?;
    log::debug!("Adjusted into {} blocks", adjusted.len());
    output::write_blocks(&cli.sink(), &adjusted, cli.format)
}
