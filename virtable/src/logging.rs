//! File logging for hosts that want to see what the engine is doing.
//!
//! The engine only talks to the `log` facade. Terminal UIs cannot print to
//! stdout without corrupting the screen, so the usual setup is a
//! `simplelog::WriteLogger` pointed at a file.

use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::Result;

/// Install a global file logger at `path`.
///
/// Fails if the file cannot be created or a logger is already installed.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<()> {
    let file = File::create(path.as_ref())?;
    WriteLogger::init(level, Config::default(), file)?;
    log::debug!("[logging] file logger installed at {:?}", path.as_ref());
    Ok(())
}
