#![allow(dead_code)]

/// Build a BMP with a 54-byte header and the given (already padded) pixel
/// bytes. Header fields that the loader validates can be overridden after
/// the fact with [`patch_u16`] / [`patch_u32`].
pub fn synth_bmp(width: u32, height: u32, bpp: u16, pixels: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(54 + pixels.len());
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&((54 + pixels.len()) as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset

    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&bpp.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixels.len() as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors in palette
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
    assert_eq!(out.len(), 54);

    out.extend_from_slice(pixels);
    out
}

pub fn patch_u16(bmp: &mut [u8], offset: usize, value: u16) {
    bmp[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

pub fn patch_u32(bmp: &mut [u8], offset: usize, value: u32) {
    bmp[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Deterministic pseudo-random bytes.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

/// `height` rows of `unpadded` noise bytes, each followed by `padding`
/// zero bytes.
pub fn padded_rows(unpadded: usize, padding: usize, height: usize, seed: u32) -> Vec<u8> {
    let pixels = noise(unpadded * height, seed);
    let mut out = Vec::new();
    for row in pixels.chunks(unpadded.max(1)).take(height) {
        out.extend_from_slice(row);
        out.extend(std::iter::repeat_n(0u8, padding));
    }
    out
}
