//! # indexbmp
//!
//! Loader and transforms for palette-indexed Windows bitmaps.
//!
//! ## Supported Files
//!
//! - `BM` signature with a 40-byte BITMAPINFOHEADER
//! - 4 or 8 bits per pixel, one color plane, no compression
//! - no color table (`colors in palette` must be 0); pixel values are
//!   treated as opaque indices
//!
//! ## Transforms
//!
//! - [`vertical_flip`]: reverse row order
//! - [`horizontal_flip`]: reverse pixels within each row, keeping row
//!   padding in place (nibble-aware at 4 bpp; also reverses row order)
//! - [`mirror`]: `vertical_flip(horizontal_flip(..))`
//! - [`PaletteLut`]: remap pixel indices through a lookup table
//!
//! Every transform returns a new buffer of the same length; the original
//! header bytes are written back verbatim.
//!
//! ## Row Padding
//!
//! Rows are padded to [`DEFAULT_ROW_ALIGNMENT`] (8) bytes, matching the files
//! this crate was built to process. Canonical BMP rows are 4-byte aligned;
//! use [`DecodeRequest::with_row_alignment`] for those.
//!
//! ## Non-Goals
//!
//! - RLE4/RLE8 compression
//! - 16/24/32 bpp true color
//! - Color table interpretation or writing new headers
//!
//! ## Usage
//!
//! ```no_run
//! use indexbmp::{DecodeRequest, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let bmp = DecodeRequest::new(data).decode(Unstoppable)?;
//! println!("{}", bmp.descriptor());
//!
//! let mirrored = bmp.mirror(Unstoppable)?;
//! let reverse: Vec<u8> = (0..16).rev().collect();
//! let inverted = mirrored.remap(&reverse, Unstoppable)?;
//! let out: Vec<u8> = inverted.dump(true);
//! # Ok::<(), indexbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod decode;
mod error;
mod geometry;
mod limits;
mod remap;
mod rows;
mod transform;

// Re-exports
pub use bmp::{BmpDescriptor, HeaderField, IndexedBmp};
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use geometry::{BitDepth, DEFAULT_ROW_ALIGNMENT, RowGeometry};
pub use limits::Limits;
pub use remap::PaletteLut;
pub use rows::partition_rows;
pub use transform::{horizontal_flip, mirror, swap_nibbles, vertical_flip};
