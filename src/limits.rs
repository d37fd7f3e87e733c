use crate::bmp::BmpDescriptor;
use crate::error::BmpError;

/// Resource limits applied while decoding.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the owned pixel buffer, in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a validated header and the size of the pixel region it would
    /// copy out of the file.
    pub(crate) fn check(&self, desc: &BmpDescriptor, pixel_bytes: usize) -> Result<(), BmpError> {
        let width = u64::from(desc.width);
        let height = u64::from(desc.height);
        let checks = [
            (self.max_width, width, "width"),
            (self.max_height, height, "height"),
            (self.max_pixels, width * height, "pixel count"),
            (self.max_memory_bytes, pixel_bytes as u64, "pixel buffer bytes"),
        ];
        for (limit, actual, what) in checks {
            if let Some(max) = limit {
                if actual > max {
                    return Err(BmpError::LimitExceeded(alloc::format!(
                        "{what} {actual} exceeds limit {max}"
                    )));
                }
            }
        }
        Ok(())
    }
}
