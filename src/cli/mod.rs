//! Command-line interface: argument parsing and validation.
//!
//! Parsing is pure. [`Invocation::resolve`] merges the parsed arguments
//! with an optional configuration file into the parameters the driver
//! runs with.

mod args;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub use args::Args;

use crate::config::Config;
use crate::error::AsciiError;

/// Parse a full argument list (including the program name).
///
/// # Errors
/// [`AsciiError::Usage`] when no image path is given, the width is not an
/// integer, or an option is malformed.
pub fn parse_args<I, T>(argv: I) -> Result<Args, AsciiError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Args::try_parse_from(argv)?)
}

/// Validated parameters for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Image to read
    pub image: PathBuf,
    /// Target width; zero or negative means no resize
    pub width: i64,
    /// File the text is written to
    pub output: PathBuf,
}

impl Invocation {
    /// Combine arguments with a configuration. Command-line values win.
    pub fn with_config(args: &Args, config: &Config) -> Self {
        Self {
            image: args.image.clone(),
            width: args.width.unwrap_or(config.resize.width),
            output: args
                .output
                .clone()
                .unwrap_or_else(|| config.output.path.clone()),
        }
    }

    /// Build the invocation, loading `--config` if one was given.
    pub fn resolve(args: &Args) -> Result<Self, AsciiError> {
        let config = match &args.config {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Config::load(path)?
            }
            None => Config::default(),
        };
        Ok(Self::with_config(args, &config))
    }
}
