//! Normalized pixel samples and the row-major grid that holds them.

/// Divisor mapping a 16-bit channel [0, 65535] onto 8 bits [0, 255].
pub const CHANNEL_DIVISOR: u16 = 257;

/// One RGBA sample with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalize 16-bit channels to 8 bits using floor division by 257.
    ///
    /// Floor (not round-to-nearest) keeps output byte-compatible with
    /// earlier renderings.
    pub fn from_rgba16(channels: [u16; 4]) -> Self {
        let [r, g, b, a] = channels.map(|c| (c / CHANNEL_DIVISOR) as u8);
        Self { r, g, b, a }
    }
}

/// Dense pixel grid stored row-major.
///
/// Every row has exactly `width` pixels and there are exactly `height`
/// rows. A zero-area grid has zero rows and zero width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Build a grid from row-major samples.
    ///
    /// Returns `None` if `pixels.len()` does not equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Option<Self> {
        if pixels.len() as u64 != width as u64 * height as u64 {
            return None;
        }
        if width == 0 || height == 0 {
            return Some(Self::default());
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from a list of rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Option<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        if rows.iter().any(|r| r.len() as u32 != width) {
            return None;
        }
        Self::from_pixels(width, height, rows.into_iter().flatten().collect())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }
}
