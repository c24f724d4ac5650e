//! Per-pixel brightness as the unweighted RGB average.

use crate::pixels::Pixel;

/// Average of the red, green and blue channels, floored. Alpha is ignored.
///
/// Unlike a perceptual luminance formula, all three channels carry equal
/// weight.
#[inline]
pub fn brightness(pixel: &Pixel) -> u8 {
    let sum = pixel.r as u16 + pixel.g as u16 + pixel.b as u16;
    (sum / 3) as u8
}
