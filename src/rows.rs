use core::slice::Chunks;

use crate::error::BmpError;
use crate::geometry::RowGeometry;

/// Split a flat pixel buffer into scanlines of `geometry.stride()` bytes.
///
/// The final row is shorter when the buffer length is not a multiple of the
/// stride; that is not an error here. A zero stride over a non-empty buffer
/// can't be partitioned and is reported as malformed.
pub fn partition_rows<'a>(
    pixels: &'a [u8],
    geometry: &RowGeometry,
) -> Result<Chunks<'a, u8>, BmpError> {
    let stride = geometry.stride();
    if stride == 0 && !pixels.is_empty() {
        return Err(BmpError::MalformedPixelData(alloc::format!(
            "{} pixel bytes but rows are zero bytes wide",
            pixels.len()
        )));
    }
    let remainder = pixels.len() % stride.max(1);
    if remainder != 0 {
        log::warn!(
            "pixel buffer of {} bytes ends with a {remainder}-byte partial row (stride {stride})",
            pixels.len()
        );
    }
    log::trace!("partitioning {} bytes into {stride}-byte rows", pixels.len());
    Ok(pixels.chunks(stride.max(1)))
}
