//! Row transforms over a padded, possibly nibble-packed pixel buffer.
//!
//! All transforms are pure: they read one buffer and return a new one of the
//! same length. Row padding never moves relative to its row.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::geometry::{BitDepth, RowGeometry};
use crate::rows::partition_rows;

/// Rows processed between cancellation checks.
const ROWS_PER_STOP_CHECK: usize = 16;

/// Swap the two 4-bit pixels packed in `b`.
#[inline]
pub fn swap_nibbles(b: u8) -> u8 {
    b.rotate_left(4)
}

/// Reverse the order of rows. Row contents, padding included, are untouched.
pub fn vertical_flip(
    pixels: &[u8],
    geometry: &RowGeometry,
    stop: impl Stop,
) -> Result<Vec<u8>, BmpError> {
    vertical_flip_impl(pixels, geometry, &stop)
}

/// Reverse the pixel order within each row, keeping each row's padding at
/// its tail.
///
/// Row order is reversed as well, so on a bottom-up bitmap this also turns
/// the image upside down. At 4 bpp the bytes are reversed and each byte's
/// nibbles swapped, so packed pixel pairs stay in the right order.
pub fn horizontal_flip(
    pixels: &[u8],
    geometry: &RowGeometry,
    stop: impl Stop,
) -> Result<Vec<u8>, BmpError> {
    horizontal_flip_impl(pixels, geometry, &stop)
}

/// `vertical_flip(horizontal_flip(pixels))`.
///
/// Because [`horizontal_flip`] already reverses row order, the composition
/// restores the original row order and only pixel order within rows changes.
pub fn mirror(pixels: &[u8], geometry: &RowGeometry, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
    let flipped = horizontal_flip_impl(pixels, geometry, &stop)?;
    vertical_flip_impl(&flipped, geometry, &stop)
}

pub(crate) fn vertical_flip_impl(
    pixels: &[u8],
    geometry: &RowGeometry,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    let mut out = Vec::with_capacity(pixels.len());
    for (i, row) in partition_rows(pixels, geometry)?.rev().enumerate() {
        if i % ROWS_PER_STOP_CHECK == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }
    Ok(out)
}

pub(crate) fn horizontal_flip_impl(
    pixels: &[u8],
    geometry: &RowGeometry,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    let padding = geometry.padding_bytes();
    let rows = partition_rows(pixels, geometry)?;
    let row_count = rows.len();
    let mut out = Vec::with_capacity(pixels.len());

    for (i, row) in rows.rev().enumerate() {
        if i % ROWS_PER_STOP_CHECK == 0 {
            stop.check()?;
        }
        let split = row.len().checked_sub(padding).ok_or_else(|| {
            BmpError::MalformedPixelData(alloc::format!(
                "row {} is {} bytes, shorter than its {padding} padding bytes",
                row_count - 1 - i,
                row.len()
            ))
        })?;
        let (indices, pad) = row.split_at(split);
        match geometry.depth() {
            BitDepth::Eight => out.extend(indices.iter().rev()),
            BitDepth::Four => out.extend(indices.iter().rev().map(|&b| swap_nibbles(b))),
        }
        out.extend_from_slice(pad);
    }
    Ok(out)
}
