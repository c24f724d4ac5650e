//! Pixel extraction: decode an image stream into a grid of RGBA samples.
//!
//! The pipeline is:
//!
//! 1. **Sniff** - pick a decoder from the stream's magic number
//! 2. **Decode** - produce a 16-bit RGBA buffer
//! 3. **Premultiply** - scale color channels by alpha
//! 4. **Resize** - optional bilinear resize to a target width
//! 5. **Sample** - normalize every pixel to 8 bits, row-major

mod format;
mod grid;
mod resize;

use std::io::Read;

pub use format::{decode, DecodeError, SupportedFormat};
pub use grid::{Pixel, PixelGrid, CHANNEL_DIVISOR};
pub use resize::{resize_to_width, target_dimensions, Rgba16Image};

use crate::error::AsciiError;

/// Decode an image from `reader` and sample it into a [`PixelGrid`].
///
/// `width > 0` requests a resize to that many pixels wide (height derived
/// from the aspect ratio); zero or negative keeps the native size.
///
/// # Errors
/// - [`AsciiError::Read`] if the stream cannot be read
/// - [`AsciiError::Decode`] if the data is not a supported image
/// - [`AsciiError::Resize`] if the requested width is unusable
pub fn extract_pixels<R: Read>(mut reader: R, width: i64) -> Result<PixelGrid, AsciiError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(AsciiError::Read)?;

    let (format, img) = decode(&bytes)?;
    log::debug!(
        "Decoded {} image: {}x{}, {:?}",
        format,
        img.width(),
        img.height(),
        img.color()
    );

    let mut img = img.to_rgba16();
    premultiply_alpha(&mut img);
    let img = resize_to_width(img, width)?;
    Ok(sample(&img))
}

/// Scale each color channel by its pixel's alpha, in place.
///
/// Transparent pixels become black, so a transparent background renders
/// as blank space. Opaque pixels are unchanged.
pub fn premultiply_alpha(img: &mut Rgba16Image) {
    for p in img.pixels_mut() {
        let a = p.0[3] as u32;
        for c in &mut p.0[..3] {
            *c = (*c as u32 * a / u16::MAX as u32) as u16;
        }
    }
}

/// Normalize every pixel of `img` in row-major order.
pub fn sample(img: &Rgba16Image) -> PixelGrid {
    let (width, height) = img.dimensions();
    let pixels: Vec<Pixel> = img.pixels().map(|p| Pixel::from_rgba16(p.0)).collect();

    // ImageBuffer always holds exactly width * height pixels
    PixelGrid::from_pixels(width, height, pixels).unwrap_or_default()
}
