//! Error types for table setup.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while configuring a table.
///
/// Everything that can go wrong after setup (zero-width containers, empty
/// data, missing cell values) degrades gracefully instead of erroring.
#[derive(Debug, Error)]
pub enum TableError {
    /// Tree mode was enabled without any way to key rows.
    #[error("a row key is required when tree mode is enabled")]
    MissingRowKey,

    /// A column is missing its header cell or its body cell.
    #[error("column {index} requires both a header cell and a body cell")]
    MissingCellPair {
        /// Declaration index of the offending column.
        index: usize,
    },

    /// A configuration document could not be parsed.
    #[error("invalid table configuration: {0}")]
    Config(String),

    /// The log file could not be created.
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed.
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
