//! The brightness ramp used for rendering.

/// Number of symbols in [`RAMP`].
pub const RAMP_LEVELS: usize = 16;

/// Brightness span covered by each ramp symbol.
pub const BUCKET_SIZE: u8 = 16;

/// Fixed 16-level density ramp.
/// Characters ordered from darkest (space) to brightest (full block).
pub const RAMP: [char; RAMP_LEVELS] = [
    ' ', '.', ':', ';', '=', '+', '*', '!', '?', '^', '&', '#', '$', '%', '@', '█',
];
