//! Logging setup.
//!
//! Warnings (such as skipped blocks) go to stderr through log4rs. A log4rs
//! YAML file replaces the built-in console logger entirely.

use crate::error::{Error, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const STDERR_APPENDER: &str = "stderr";

/// Level for the built-in logger.
pub fn level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Console config printing `LEVEL message` lines to stderr.
pub fn console_config(level: LevelFilter) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {m}{n}")))
        .build();

    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install the global logger.
///
/// With `config_file` the level and appenders come from that file and
/// `debug` is ignored.
pub fn init(debug: bool, config_file: Option<&Path>) -> Result<()> {
    match config_file {
        Some(path) => {
            log4rs::init_file(path, Default::default())
                .map_err(|e| Error::Logging(format!("{}: {e}", path.display())))?;
            log::info!("Logging configured from {}", path.display());
        }
        None => {
            log4rs::init_config(console_config(level(debug))?)
                .map_err(|e| Error::Logging(e.to_string()))?;
        }
    }
    Ok(())
}
