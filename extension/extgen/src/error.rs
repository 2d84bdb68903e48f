//! CLI errors.

use std::io;
use std::path::PathBuf;

use ext_gen::GenError;

/// Error reported by the `extgen` command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Invalid generator configuration.
    #[error(transparent)]
    Gen(#[from] GenError),

    /// Writing output failed.
    #[error("cannot write `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed command line.
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Gen(_) | CliError::Io { .. } => 1,
        }
    }
}
