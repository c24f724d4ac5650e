//! Width-driven, aspect-preserving bilinear resize.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba};

use crate::error::AsciiError;

/// 16-bit RGBA buffer the extractor works on.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Bias added before truncating the derived height.
const HEIGHT_ROUNDING_BIAS: f64 = 0.7;

/// Bytes per pixel of the resized RGBA u16 buffer.
const OUTPUT_BYTES_PER_PIXEL: u64 = 8;

/// Bytes per pixel of the resizer's intermediate RGBA f32 buffer.
const SCRATCH_BYTES_PER_PIXEL: u64 = 16;

/// Largest buffer a resize may allocate, matching the decoder's limit.
fn max_alloc() -> u64 {
    image::Limits::default().max_alloc.unwrap_or(u64::MAX)
}

/// Bytes needed for a `width` x `height` buffer, `None` on overflow.
fn buffer_bytes(width: u32, height: u32, bytes_per_pixel: u64) -> Option<u64> {
    (width as u64)
        .checked_mul(height as u64)?
        .checked_mul(bytes_per_pixel)
}

/// Decide the dimensions to resize to, if any.
///
/// Returns `Ok(None)` when no resize should happen: `width <= 0`, the
/// width already matches, or the source has zero area. Otherwise the
/// height is derived from the source aspect ratio.
///
/// # Errors
/// [`AsciiError::Resize`] if the width does not fit in `u32`, the
/// derived height would be zero, or the resize would need more memory
/// than the decoder is allowed.
pub fn target_dimensions(
    src_width: u32,
    src_height: u32,
    width: i64,
) -> Result<Option<(u32, u32)>, AsciiError> {
    if width <= 0 || width == src_width as i64 || src_width == 0 || src_height == 0 {
        return Ok(None);
    }

    let target_width = u32::try_from(width).map_err(|_| AsciiError::Resize {
        width,
        reason: format!("width exceeds the maximum of {}", u32::MAX),
    })?;

    let derived = HEIGHT_ROUNDING_BIAS + src_height as f64 * width as f64 / src_width as f64;
    if derived < 1.0 {
        return Err(AsciiError::Resize {
            width,
            reason: format!(
                "a {}x{} image would be less than one pixel tall",
                src_width, src_height
            ),
        });
    }
    if derived >= u32::MAX as f64 {
        return Err(AsciiError::Resize {
            width,
            reason: "derived height is too large".to_string(),
        });
    }

    let target_height = derived as u32;
    check_allocation(src_width, src_height, target_width, target_height)
        .map_err(|reason| AsciiError::Resize { width, reason })?;

    Ok(Some((target_width, target_height)))
}

/// Reject resizes whose output or intermediate buffers exceed the limit.
fn check_allocation(
    src_width: u32,
    src_height: u32,
    width: u32,
    height: u32,
) -> Result<(), String> {
    let limit = max_alloc();
    let buffers = [
        buffer_bytes(width, height, OUTPUT_BYTES_PER_PIXEL),
        buffer_bytes(width, src_height, SCRATCH_BYTES_PER_PIXEL),
        buffer_bytes(src_width, height, SCRATCH_BYTES_PER_PIXEL),
    ];
    match buffers.iter().try_fold(0u64, |max, b| b.map(|b| max.max(b))) {
        Some(bytes) if bytes <= limit => Ok(()),
        Some(bytes) => Err(format!(
            "a {}x{} result needs {} bytes, over the {} byte limit",
            width, height, bytes, limit
        )),
        None => Err(format!("a {}x{} result is too large", width, height)),
    }
}

/// Resize to `width` pixels wide, keeping the aspect ratio.
///
/// The image is returned unchanged when [`target_dimensions`] says no
/// resize is needed.
pub fn resize_to_width(img: Rgba16Image, width: i64) -> Result<Rgba16Image, AsciiError> {
    let (src_width, src_height) = img.dimensions();
    match target_dimensions(src_width, src_height, width)? {
        Some((w, h)) => {
            log::debug!(
                "Resizing {}x{} -> {}x{} (bilinear)",
                src_width,
                src_height,
                w,
                h
            );
            Ok(imageops::resize(&img, w, h, FilterType::Triangle))
        }
        None => {
            log::debug!("Keeping native size {}x{}", src_width, src_height);
            Ok(img)
        }
    }
}
