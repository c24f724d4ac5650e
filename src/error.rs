//! Error types for the conversion pipeline.
//!
//! Every failure is fatal: stages return [`AsciiError`] and the binary
//! reports it once before exiting.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::pixels::DecodeError;

/// Errors that can occur while converting an image to ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// Missing or malformed command-line arguments
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// The configuration file named with `--config` could not be used
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The input is not a decodable image
    #[error("failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    /// The image cannot be resized to the requested width
    #[error("cannot resize image to width {width}: {reason}")]
    Resize { width: i64, reason: String },

    /// The image has no pixel rows to render
    #[error("empty image")]
    EmptyImage,

    /// The input file could not be opened
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input stream failed while being read
    #[error("failed to read image data: {0}")]
    Read(#[source] std::io::Error),

    /// The output file could not be created or written
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AsciiError {
    /// Process exit status for this error.
    ///
    /// Usage errors follow clap's convention (2); everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AsciiError::Usage(e) => e.exit_code(),
            _ => 1,
        }
    }
}
