//! Bit depth and scanline geometry of an indexed pixel buffer.

use crate::error::BmpError;

/// Row alignment used when none is configured.
///
/// Rows are padded to a multiple of 8 bytes, which is what the bitmaps this
/// crate round-trips were written with. Canonical BMP writers align rows to
/// 4 bytes; pass `4` to [`RowGeometry::with_alignment`] or
/// [`crate::DecodeRequest::with_row_alignment`] for those.
pub const DEFAULT_ROW_ALIGNMENT: usize = 8;

/// Supported bits per pixel.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// Two pixel indices per byte, high nibble first.
    Four,
    /// One pixel index per byte.
    Eight,
}

impl BitDepth {
    /// Map a header `bits_per_pixel` value, if supported.
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            4 => Some(Self::Four),
            8 => Some(Self::Eight),
            _ => None,
        }
    }

    pub fn bits(self) -> u16 {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Number of distinct pixel indices (`2^bits`).
    pub fn index_count(self) -> usize {
        1 << self.bits()
    }
}

/// Byte layout of one scanline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowGeometry {
    depth: BitDepth,
    unpadded: usize,
    padding: usize,
}

impl RowGeometry {
    /// Geometry for `width` pixels with [`DEFAULT_ROW_ALIGNMENT`].
    pub fn new(width: u32, depth: BitDepth) -> Result<Self, BmpError> {
        Self::with_alignment(width, depth, DEFAULT_ROW_ALIGNMENT)
    }

    /// Geometry for `width` pixels with rows padded to a multiple of
    /// `alignment` bytes. An alignment of 0 is treated as 1 (no padding).
    ///
    /// A half-filled last byte at odd 4-bpp widths counts toward the row, so
    /// files whose writer truncated it (a 7-byte stride for 3 pixels at
    /// 8-byte alignment, where this gives 8) will not partition identically.
    pub fn with_alignment(width: u32, depth: BitDepth, alignment: usize) -> Result<Self, BmpError> {
        let alignment = alignment.max(1);
        let unpadded = (width as usize)
            .checked_mul(usize::from(depth.bits()))
            .map(|bits| bits.div_ceil(8))
            .ok_or(BmpError::DimensionsTooLarge { width, height: 0 })?;
        let padding = (alignment - unpadded % alignment) % alignment;
        unpadded
            .checked_add(padding)
            .ok_or(BmpError::DimensionsTooLarge { width, height: 0 })?;
        Ok(Self {
            depth,
            unpadded,
            padding,
        })
    }

    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Bytes holding pixel indices at the start of each row.
    pub fn unpadded_row_bytes(&self) -> usize {
        self.unpadded
    }

    /// Trailing alignment bytes at the end of each row.
    pub fn padding_bytes(&self) -> usize {
        self.padding
    }

    /// Total bytes per row, padding included.
    pub fn stride(&self) -> usize {
        self.unpadded + self.padding
    }
}
