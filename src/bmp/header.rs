//! File header + BITMAPINFOHEADER parsing and validation.

use core::fmt;

use crate::error::BmpError;
use crate::geometry::BitDepth;

/// Size of the file header plus the 40-byte DIB header.
pub(crate) const HEADER_LEN: usize = 54;

const INFO_HEADER_SIZE: u32 = 40;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let end = self.pos.checked_add(N).ok_or(BmpError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.data.get(self.pos..end).ok_or(BmpError::UnexpectedEof)?);
        self.pos = end;
        Ok(buf)
    }

    fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        self.pos = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(BmpError::UnexpectedEof)?;
        Ok(())
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }
}

// ── Validated header ────────────────────────────────────────────────

/// Header field named by [`BmpError::UnsupportedFormat`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderField {
    Signature,
    DibHeaderSize,
    ColorsInPalette,
    Compression,
    ColorPlanes,
    BitsPerPixel,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Signature => "signature",
            Self::DibHeaderSize => "DIB header size",
            Self::ColorsInPalette => "colors in palette",
            Self::Compression => "compression",
            Self::ColorPlanes => "color planes",
            Self::BitsPerPixel => "bits per pixel",
        })
    }
}

/// Metadata decoded from a supported indexed BMP header.
///
/// Only `width`, `bits_per_pixel` and `pixel_data_offset` drive the
/// transforms; the rest is carried for inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BmpDescriptor {
    /// File size as declared at offset 2 (not checked against the input).
    pub file_size: u32,
    pub pixel_data_offset: u32,
    pub width: u32,
    pub height: u32,
    pub color_planes: u16,
    pub bits_per_pixel: BitDepth,
    pub compression: u32,
    pub raw_bitmap_size: u32,
    pub print_width: u32,
    pub print_height: u32,
    pub colors_in_palette: u32,
    pub important_colors: u32,
}

impl fmt::Display for BmpDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "width: {}", self.width)?;
        writeln!(f, "height: {}", self.height)?;
        writeln!(f, "color planes: {}", self.color_planes)?;
        writeln!(f, "bits per pixel: {}", self.bits_per_pixel.bits())?;
        writeln!(f, "compression: {}", self.compression)?;
        writeln!(f, "raw bitmap size: {}", self.raw_bitmap_size)?;
        writeln!(f, "print width: {}", self.print_width)?;
        writeln!(f, "print height: {}", self.print_height)?;
        writeln!(f, "colors in palette: {}", self.colors_in_palette)?;
        write!(f, "important colors: {}", self.important_colors)
    }
}

fn unsupported(field: HeaderField, value: u32) -> BmpError {
    BmpError::UnsupportedFormat { field, value }
}

/// Parse and validate the fixed 54-byte header.
///
/// Every field is read before any check runs, so a short input reports
/// `UnexpectedEof` rather than a validation failure.
pub(crate) fn parse_header(data: &[u8]) -> Result<BmpDescriptor, BmpError> {
    let mut cur = Cursor::new(data);

    let signature = cur.read_fixed_bytes::<2>()?;
    let file_size = cur.get_u32_le()?;
    cur.skip(4)?; // reserved
    let pixel_data_offset = cur.get_u32_le()?;
    let dib_header_size = cur.get_u32_le()?;
    let width = cur.get_u32_le()?;
    let height = cur.get_u32_le()?;
    let color_planes = cur.get_u16_le()?;
    let bpp = cur.get_u16_le()?;
    let compression = cur.get_u32_le()?;
    let raw_bitmap_size = cur.get_u32_le()?;
    let print_width = cur.get_u32_le()?;
    let print_height = cur.get_u32_le()?;
    let colors_in_palette = cur.get_u32_le()?;
    let important_colors = cur.get_u32_le()?;
    debug_assert_eq!(cur.pos, HEADER_LEN);

    if &signature != b"BM" {
        return Err(unsupported(
            HeaderField::Signature,
            u32::from(u16::from_le_bytes(signature)),
        ));
    }
    if dib_header_size != INFO_HEADER_SIZE {
        return Err(unsupported(HeaderField::DibHeaderSize, dib_header_size));
    }
    if colors_in_palette != 0 {
        return Err(unsupported(HeaderField::ColorsInPalette, colors_in_palette));
    }
    if compression != 0 {
        return Err(unsupported(HeaderField::Compression, compression));
    }
    if color_planes != 1 {
        return Err(unsupported(HeaderField::ColorPlanes, u32::from(color_planes)));
    }
    let bits_per_pixel = BitDepth::from_bits(bpp)
        .ok_or_else(|| unsupported(HeaderField::BitsPerPixel, u32::from(bpp)))?;

    Ok(BmpDescriptor {
        file_size,
        pixel_data_offset,
        width,
        height,
        color_planes,
        bits_per_pixel,
        compression,
        raw_bitmap_size,
        print_width,
        print_height,
        colors_in_palette,
        important_colors,
    })
}
