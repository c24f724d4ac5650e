//! Assembly of the final text from a pixel grid.

use super::mapping::char_for_pixel;
use crate::error::AsciiError;
use crate::pixels::PixelGrid;

/// Line terminator appended after every row.
pub const LINE_TERMINATOR: char = '\n';

/// Render a pixel grid as text, one line per row.
///
/// Every row yields one character per pixel followed by
/// [`LINE_TERMINATOR`], rows in top-to-bottom order.
///
/// # Errors
/// [`AsciiError::EmptyImage`] if the grid has no rows.
pub fn render(grid: &PixelGrid) -> Result<String, AsciiError> {
    if grid.is_empty() {
        return Err(AsciiError::EmptyImage);
    }

    // '█' is 3 bytes in UTF-8, so reserve for the worst case
    let capacity = (grid.width() as usize * 3 + 1) * grid.height() as usize;
    let mut text = String::with_capacity(capacity);

    for row in grid.rows() {
        text.extend(row.iter().map(char_for_pixel));
        text.push(LINE_TERMINATOR);
    }

    Ok(text)
}
