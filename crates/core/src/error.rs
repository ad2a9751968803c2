use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for version extraction.
///
/// Every variant is terminal for a run; callers map them to exit codes with
/// [`ExtractError::exit_code`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The header could not be opened or read.
    ///
    /// `dir_missing` is set when the header's include directory does not exist
    /// either, which usually means the root itself is wrong.
    #[error(
        "Could not read {} in {}{}",
        .header.display(),
        .root.display(),
        missing_dir_note(.dir_missing)
    )]
    FileAccess {
        header: PathBuf,
        root: PathBuf,
        dir_missing: bool,
        #[source]
        source: io::Error,
    },

    /// The header was read to the end without a matching `#define` line.
    #[error(
        "Could not extract API version from {macro_name} in {} in {}",
        .header.display(),
        .root.display()
    )]
    NotFound { macro_name: String, header: PathBuf, root: PathBuf },

    /// No source root was given and the current directory is unavailable.
    #[error("Failed to get current directory")]
    CurrentDir(#[source] io::Error),
}

impl ExtractError {
    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExtractError::NotFound { .. } => 1,
            ExtractError::FileAccess { .. } | ExtractError::CurrentDir(_) => 2,
        }
    }
}

fn missing_dir_note(dir_missing: &bool) -> &'static str {
    if *dir_missing {
        " (include directory does not exist)"
    } else {
        ""
    }
}

/// Convenience result type for extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;
