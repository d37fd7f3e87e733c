use alloc::string::String;
use enough::StopReason;

use crate::bmp::HeaderField;

/// Errors from indexed BMP decoding, transforming and remapping.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unsupported BMP: {field} is {value}")]
    UnsupportedFormat { field: HeaderField, value: u32 },

    #[error("malformed pixel data: {0}")]
    MalformedPixelData(String),

    #[error("remap table has {actual} entries, expected {expected}")]
    InvalidLutSize { expected: usize, actual: usize },

    #[error("remap table entry {index} maps to {value}, which does not fit the bit depth")]
    InvalidLutEntry { index: usize, value: u8 },

    #[error("no lookup table entry for byte {value:#04x}")]
    LutLookupMiss { value: u8 },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
