//! CLI argument parsing with clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Convert an image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "imagetoascii")]
#[command(version, about = "Convert an image to ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Render at native size into ./ascii.txt
    imagetoascii photo.png

    # Resize to 120 pixels wide first
    imagetoascii photo.png 120

    # Write somewhere else
    imagetoascii photo.png 80 -o art.txt")]
pub struct Args {
    /// Image file (png, jpeg, gif or bmp; detected from content)
    pub image: PathBuf,

    /// Target width in pixels (0 or omitted keeps the native width)
    #[arg(allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Output file [default: ascii.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level selected by `-v` / `-q`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
