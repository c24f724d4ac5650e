//! Supported image formats and content sniffing.
//!
//! The decoder set is closed and known at compile time. Which decoder runs
//! is decided purely from the leading bytes of the input, never from the
//! file extension.

use std::fmt;

use image::{DynamicImage, ImageFormat};

/// Magic-number table, checked in order.
const SIGNATURES: &[(&[u8], SupportedFormat)] = &[
    (b"\x89PNG\r\n\x1a\n", SupportedFormat::Png),
    (b"\xff\xd8\xff", SupportedFormat::Jpeg),
    (b"GIF87a", SupportedFormat::Gif),
    (b"GIF89a", SupportedFormat::Gif),
    (b"BM", SupportedFormat::Bmp),
];

/// Image formats this tool can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl SupportedFormat {
    /// Identify the format from the first bytes of an encoded image.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        SIGNATURES
            .iter()
            .find(|(magic, _)| bytes.starts_with(magic))
            .map(|&(_, format)| format)
    }

    /// Get a human-readable name for the format.
    pub fn name(&self) -> &'static str {
        match self {
            SupportedFormat::Png => "png",
            SupportedFormat::Jpeg => "jpeg",
            SupportedFormat::Gif => "gif",
            SupportedFormat::Bmp => "bmp",
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            SupportedFormat::Png => ImageFormat::Png,
            SupportedFormat::Jpeg => ImageFormat::Jpeg,
            SupportedFormat::Gif => ImageFormat::Gif,
            SupportedFormat::Bmp => ImageFormat::Bmp,
        }
    }

    /// Decode `bytes` with this format's decoder.
    ///
    /// For GIF only the first frame is decoded.
    pub fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
        image::load_from_memory_with_format(bytes, self.image_format()).map_err(|source| {
            DecodeError::Malformed {
                format: *self,
                source,
            }
        })
    }
}

impl fmt::Display for SupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while decoding an image.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// No known signature at the start of the input
    #[error("unrecognized image format (supported: png, jpeg, gif, bmp)")]
    UnrecognizedFormat,

    /// Signature matched but the data is truncated or corrupt
    #[error("invalid {format} data: {source}")]
    Malformed {
        format: SupportedFormat,
        #[source]
        source: image::ImageError,
    },
}

/// Sniff and decode an encoded image.
pub fn decode(bytes: &[u8]) -> Result<(SupportedFormat, DynamicImage), DecodeError> {
    let format = SupportedFormat::sniff(bytes).ok_or(DecodeError::UnrecognizedFormat)?;
    let img = format.decode(bytes)?;
    Ok((format, img))
}
