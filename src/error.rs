//! Error types for blockadjust

use thiserror::Error;

/// Result type alias for blockadjust operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, adjusting or writing blocks
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid address in network block: {0}")]
    InvalidAddress(String),

    #[error("Invalid prefix length in network block: {0}")]
    InvalidLength(String),

    #[error("Prefix length {len} is too long for {token} (max {max})")]
    LengthTooLong { token: String, len: u32, max: u8 },

    #[error("Cannot split {prefix} into /{new_len} subnets")]
    InvalidSplit { prefix: String, new_len: u8 },

    #[error("No network blocks to adjust")]
    NoBlocks,

    #[error("No valid network blocks after adjustment")]
    NoResult,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Empty input and empty output both exit with 2, everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::NoBlocks | Error::NoResult => 2,
            _ => 1,
        }
    }
}
