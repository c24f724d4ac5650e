//! imagetoascii library crate.
//!
//! Converts a raster image into ASCII art:
//! decode, optional resize, per-pixel brightness, character lookup, text.
//! The binary wires these stages together; the modules are exposed for
//! integration testing.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod pixels;

pub use error::AsciiError;
