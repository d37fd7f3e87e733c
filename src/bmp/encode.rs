//! Serialization: verbatim header bytes followed by the pixel buffer.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

/// Concatenate `header` (if any) and `pixels`.
///
/// Header fields are never re-derived; the caller's bytes are trusted as-is.
pub(crate) fn encode(header: Option<&[u8]>, pixels: &[u8]) -> Vec<u8> {
    let header = header.unwrap_or_default();
    let mut out = Vec::with_capacity(header.len() + pixels.len());
    out.extend_from_slice(header);
    out.extend_from_slice(pixels);
    out
}

/// Debug text form: each byte as a decimal number followed by `delimiter`.
pub(crate) fn encode_text(header: Option<&[u8]>, pixels: &[u8], delimiter: &str) -> String {
    let header = header.unwrap_or_default();
    let mut out = String::with_capacity((header.len() + pixels.len()) * (3 + delimiter.len()));
    for byte in header.iter().chain(pixels) {
        // Writing into a String cannot fail.
        let _ = write!(out, "{byte}{delimiter}");
    }
    out
}
