//! Brightness to character mapping.

use super::brightness::brightness;
use super::charset::{BUCKET_SIZE, RAMP, RAMP_LEVELS};
use crate::pixels::Pixel;

/// Map a brightness value (0-255) to its ramp symbol.
///
/// Each symbol covers a span of 16 values: 0-15 map to `' '`, 16-31 to
/// `'.'`, and so on up to 240-255 for `'█'`.
#[inline]
pub fn char_for_brightness(value: u8) -> char {
    let idx = (value / BUCKET_SIZE) as usize;
    RAMP[idx.min(RAMP_LEVELS - 1)]
}

/// Map a pixel to its ramp symbol via its average brightness.
#[inline]
pub fn char_for_pixel(pixel: &Pixel) -> char {
    char_for_brightness(brightness(pixel))
}
