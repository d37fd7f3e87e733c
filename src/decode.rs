use alloc::sync::Arc;

use enough::Stop;

use crate::bmp::{IndexedBmp, header};
use crate::error::BmpError;
use crate::geometry::{DEFAULT_ROW_ALIGNMENT, RowGeometry};
use crate::limits::Limits;

/// Decode builder: input bytes plus optional limits and row alignment.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    row_alignment: usize,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            row_alignment: DEFAULT_ROW_ALIGNMENT,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Pad rows to a multiple of `alignment` bytes instead of
    /// [`DEFAULT_ROW_ALIGNMENT`].
    pub fn with_row_alignment(mut self, alignment: usize) -> Self {
        self.row_alignment = alignment;
        self
    }

    /// Validate the header and split the input into header and pixel bytes.
    pub fn decode(self, stop: impl Stop) -> Result<IndexedBmp, BmpError> {
        let desc = header::parse_header(self.data)?;

        let offset = desc.pixel_data_offset as usize;
        if offset > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        let (head, pixels) = self.data.split_at(offset);

        if let Some(limits) = self.limits {
            limits.check(&desc, pixels.len())?;
        }
        stop.check()?;

        let geometry =
            RowGeometry::with_alignment(desc.width, desc.bits_per_pixel, self.row_alignment)
                .map_err(|_| BmpError::DimensionsTooLarge {
                    width: desc.width,
                    height: desc.height,
                })?;

        log::debug!(
            "decoded {}x{} {}-bpp bitmap: {} header bytes, {} pixel bytes, stride {}",
            desc.width,
            desc.height,
            desc.bits_per_pixel.bits(),
            head.len(),
            pixels.len(),
            geometry.stride()
        );

        Ok(IndexedBmp::from_parts(
            desc,
            geometry,
            Arc::from(head),
            pixels.to_vec(),
        ))
    }
}
