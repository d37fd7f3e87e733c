//! Palette index remapping through a byte lookup table.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::geometry::BitDepth;

/// Bytes remapped between cancellation checks.
const BYTES_PER_STOP_CHECK: usize = 64 * 1024;

/// Byte-to-byte lookup table applied to a whole pixel buffer.
///
/// The table works on stored bytes, not on pixels: at 4 bpp each entry maps
/// a pair of packed indices. Row padding bytes are mapped too, which is
/// harmless while padding is zero and the table maps 0 to 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteLut {
    table: [u8; 256],
    /// Number of leading entries that are populated.
    len: usize,
}

impl PaletteLut {
    /// Build a complete byte table from a per-index remap table.
    ///
    /// `indices[i]` is the replacement for pixel index `i`; the table must
    /// have exactly `2^bits` entries. At 4 bpp every entry must fit in a
    /// nibble and the table is expanded so both packed pixels of a byte are
    /// remapped independently.
    pub fn build(indices: &[u8], depth: BitDepth) -> Result<Self, BmpError> {
        let expected = depth.index_count();
        if indices.len() != expected {
            return Err(BmpError::InvalidLutSize {
                expected,
                actual: indices.len(),
            });
        }

        let mut table = [0u8; 256];
        match depth {
            BitDepth::Eight => table.copy_from_slice(indices),
            BitDepth::Four => {
                if let Some((index, &value)) =
                    indices.iter().enumerate().find(|(_, v)| **v > 0x0F)
                {
                    return Err(BmpError::InvalidLutEntry { index, value });
                }
                for (b, slot) in table.iter_mut().enumerate() {
                    let high = indices[b >> 4];
                    let low = indices[b & 0x0F];
                    *slot = (high << 4) | low;
                }
            }
        }
        log::debug!("built {}-bpp remap table", depth.bits());
        Ok(Self { table, len: 256 })
    }

    /// Wrap an explicit byte map. Bytes at or past `map.len()` have no entry
    /// and make [`apply`](Self::apply) fail with [`BmpError::LutLookupMiss`].
    pub fn from_byte_map(map: &[u8]) -> Result<Self, BmpError> {
        if map.len() > 256 {
            return Err(BmpError::InvalidLutSize {
                expected: 256,
                actual: map.len(),
            });
        }
        let mut table = [0u8; 256];
        table[..map.len()].copy_from_slice(map);
        Ok(Self {
            table,
            len: map.len(),
        })
    }

    /// Table mapping every index to itself.
    pub fn identity() -> Self {
        let mut table = [0u8; 256];
        for (b, slot) in table.iter_mut().enumerate() {
            *slot = b as u8;
        }
        Self { table, len: 256 }
    }

    /// Look up a single stored byte.
    #[inline]
    pub fn get(&self, byte: u8) -> Option<u8> {
        self.table[..self.len].get(usize::from(byte)).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.len == 256
    }

    /// Map every byte of `pixels` through the table.
    pub fn apply(&self, pixels: &[u8], stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        self.apply_impl(pixels, &stop)
    }

    pub(crate) fn apply_impl(&self, pixels: &[u8], stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
        let mut out = Vec::with_capacity(pixels.len());
        for chunk in pixels.chunks(BYTES_PER_STOP_CHECK) {
            stop.check()?;
            if self.is_complete() {
                out.extend(chunk.iter().map(|&b| self.table[usize::from(b)]));
            } else {
                for &b in chunk {
                    out.push(self.get(b).ok_or(BmpError::LutLookupMiss { value: b })?);
                }
            }
        }
        Ok(out)
    }
}
