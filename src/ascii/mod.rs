//! ASCII renderer module for converting pixel grids to text.
//!
//! Rendering is a pure function of the grid:
//!
//! 1. **Brightness** - unweighted average of R, G and B
//! 2. **Character mapping** - bucket the brightness into the 16-level ramp
//! 3. **Assembly** - one character per pixel, one line per row

mod brightness;
mod charset;
mod mapping;
mod render;

pub use brightness::brightness;
pub use charset::{BUCKET_SIZE, RAMP, RAMP_LEVELS};
pub use mapping::{char_for_brightness, char_for_pixel};
pub use render::{render, LINE_TERMINATOR};
