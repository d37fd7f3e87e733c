//! Loaded indexed bitmap: header bytes, descriptor and pixel buffer.
//!
//! An [`IndexedBmp`] is an immutable value. Each transform returns a new
//! bitmap with a fresh pixel buffer of the same length that shares the
//! original header bytes.

mod encode;
pub(crate) mod header;

pub use header::{BmpDescriptor, HeaderField};

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use enough::{Stop, Unstoppable};

use crate::decode::DecodeRequest;
use crate::error::BmpError;
use crate::geometry::RowGeometry;
use crate::remap::PaletteLut;
use crate::transform;

/// A decoded 4 or 8 bpp BMP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedBmp {
    descriptor: BmpDescriptor,
    geometry: RowGeometry,
    header: Arc<[u8]>,
    pixels: Vec<u8>,
}

impl IndexedBmp {
    pub(crate) fn from_parts(
        descriptor: BmpDescriptor,
        geometry: RowGeometry,
        header: Arc<[u8]>,
        pixels: Vec<u8>,
    ) -> Self {
        Self {
            descriptor,
            geometry,
            header,
            pixels,
        }
    }

    /// Decode with default settings (8-byte row alignment, no limits).
    pub fn decode(data: &[u8]) -> Result<Self, BmpError> {
        DecodeRequest::new(data).decode(Unstoppable)
    }

    pub fn descriptor(&self) -> &BmpDescriptor {
        &self.descriptor
    }

    pub fn geometry(&self) -> &RowGeometry {
        &self.geometry
    }

    /// Everything before the pixel data offset, exactly as read.
    pub fn header_bytes(&self) -> &[u8] {
        &self.header
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Scanlines of the pixel buffer; see [`crate::partition_rows`].
    pub fn rows(&self) -> Result<core::slice::Chunks<'_, u8>, BmpError> {
        crate::rows::partition_rows(&self.pixels, &self.geometry)
    }

    fn with_pixels(&self, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Self {
            descriptor: self.descriptor,
            geometry: self.geometry,
            header: Arc::clone(&self.header),
            pixels,
        }
    }

    pub fn vertical_flip(&self, stop: impl Stop) -> Result<Self, BmpError> {
        log::debug!("vertical flip of {} pixel bytes", self.pixels.len());
        let pixels = transform::vertical_flip_impl(&self.pixels, &self.geometry, &stop)?;
        Ok(self.with_pixels(pixels))
    }

    /// See [`crate::horizontal_flip`]; row order is reversed too.
    pub fn horizontal_flip(&self, stop: impl Stop) -> Result<Self, BmpError> {
        log::debug!("horizontal flip of {} pixel bytes", self.pixels.len());
        let pixels = transform::horizontal_flip_impl(&self.pixels, &self.geometry, &stop)?;
        Ok(self.with_pixels(pixels))
    }

    pub fn mirror(&self, stop: impl Stop) -> Result<Self, BmpError> {
        log::debug!("mirror of {} pixel bytes", self.pixels.len());
        let flipped = transform::horizontal_flip_impl(&self.pixels, &self.geometry, &stop)?;
        let pixels = transform::vertical_flip_impl(&flipped, &self.geometry, &stop)?;
        Ok(self.with_pixels(pixels))
    }

    /// Remap pixel indices: `indices[i]` replaces index `i`.
    ///
    /// The table must have one entry per index of this bitmap's bit depth.
    pub fn remap(&self, indices: &[u8], stop: impl Stop) -> Result<Self, BmpError> {
        let lut = PaletteLut::build(indices, self.descriptor.bits_per_pixel)?;
        self.remap_with(&lut, stop)
    }

    /// Remap with a prebuilt table, e.g. one shared across many files.
    pub fn remap_with(&self, lut: &PaletteLut, stop: impl Stop) -> Result<Self, BmpError> {
        log::debug!("remapping {} pixel bytes", self.pixels.len());
        let pixels = lut.apply_impl(&self.pixels, &stop)?;
        Ok(self.with_pixels(pixels))
    }

    /// Serialized bytes: header (when `include_header`) then pixel buffer.
    pub fn dump(&self, include_header: bool) -> Vec<u8> {
        encode::encode(include_header.then_some(&*self.header), &self.pixels)
    }

    /// Decimal text dump, each byte followed by `delimiter`.
    pub fn dump_text(&self, include_header: bool, delimiter: &str) -> String {
        encode::encode_text(include_header.then_some(&*self.header), &self.pixels, delimiter)
    }
}

impl fmt::Display for IndexedBmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.descriptor)?;
        write!(f, "pixel data: {} bytes", self.pixels.len())
    }
}

#[cfg(feature = "std")]
impl IndexedBmp {
    /// Read and decode a whole file with [`DEFAULT_ROW_ALIGNMENT`] and no
    /// limits. For 4-byte-aligned files or untrusted input, read the bytes
    /// and use [`DecodeRequest`] with `with_row_alignment` / `with_limits`.
    ///
    /// [`DEFAULT_ROW_ALIGNMENT`]: crate::DEFAULT_ROW_ALIGNMENT
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, BmpError> {
        let data = std::fs::read(path)?;
        Self::decode(&data)
    }

    /// Write [`dump`](Self::dump) output to `path`.
    pub fn write(
        &self,
        path: impl AsRef<std::path::Path>,
        include_header: bool,
    ) -> Result<(), BmpError> {
        std::fs::write(path, self.dump(include_header))?;
        Ok(())
    }

    /// Write [`dump_text`](Self::dump_text) output to `path`.
    pub fn write_text(
        &self,
        path: impl AsRef<std::path::Path>,
        include_header: bool,
        delimiter: &str,
    ) -> Result<(), BmpError> {
        std::fs::write(path, self.dump_text(include_header, delimiter))?;
        Ok(())
    }
}
