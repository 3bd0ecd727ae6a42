use std::path::PathBuf;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Errors raised by the command line front end.
#[derive(Debug, Error)]
pub enum ReplError {
    /// The line editor failed to start or to read a line.
    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),
    /// A script file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        /// The file that was requested.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}
