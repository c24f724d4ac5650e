//! End-to-end conversion: read the image, render it, write the text.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::ascii;
use crate::cli::Invocation;
use crate::error::AsciiError;
use crate::pixels;

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Characters per line
    pub columns: u32,
    /// Number of lines written
    pub lines: u32,
    /// Where the text was written
    pub output: PathBuf,
}

/// Convert an encoded image stream to ASCII text.
///
/// No I/O beyond reading `reader`.
pub fn convert<R: Read>(
    reader: R,
    width: i64,
) -> Result<(String, pixels::PixelGrid), AsciiError> {
    let grid = pixels::extract_pixels(reader, width)?;
    log::debug!("Pixel grid: {}x{}", grid.width(), grid.height());
    let text = ascii::render(&grid)?;
    Ok((text, grid))
}

/// Run one conversion described by `invocation`.
///
/// The input file is closed before the output is written. Nothing is
/// written unless rendering succeeded.
pub fn run(invocation: &Invocation) -> Result<Summary, AsciiError> {
    let (text, grid) = {
        let file = File::open(&invocation.image).map_err(|source| AsciiError::Open {
            path: invocation.image.clone(),
            source,
        })?;
        convert(BufReader::new(file), invocation.width)?
    };

    write_output(&invocation.output, &text)?;
    log::info!(
        "Wrote {} lines of {} characters to {}",
        grid.height(),
        grid.width(),
        invocation.output.display()
    );

    Ok(Summary {
        columns: grid.width(),
        lines: grid.height(),
        output: invocation.output.clone(),
    })
}

/// Write `text` to `path`, replacing any existing file.
pub fn write_output(path: &Path, text: &str) -> Result<(), AsciiError> {
    std::fs::write(path, text).map_err(|source| AsciiError::Write {
        path: path.to_path_buf(),
        source,
    })
}
