//! Capacity arithmetic: one bit per color channel, three per pixel.

use crate::framer::TERMINATOR;
use crate::{PixelLayout, Result, StegError};

/// Payload bits carried by each pixel.
pub const BITS_PER_PIXEL: usize = 3;

/// Maximum number of bits a carrier of `pixels` pixels can hold.
#[inline]
pub const fn capacity_bits(pixels: usize) -> usize {
    pixels * BITS_PER_PIXEL
}

/// Bits needed to hide a message of `chars` characters, terminator included.
#[inline]
pub const fn required_bits(chars: usize) -> usize {
    (chars + TERMINATOR.len()) * 8
}

/// Longest message, in characters, that fits in `pixels` pixels.
pub const fn max_message_len(pixels: usize) -> usize {
    (capacity_bits(pixels) / 8).saturating_sub(TERMINATOR.len())
}

/// Number of whole pixels in a buffer of `len` bytes.
///
/// Fails if `len` is not a multiple of the layout's pixel size.
pub fn pixel_count(len: usize, layout: PixelLayout) -> Result<usize> {
    let bytes_per_pixel = layout.bytes_per_pixel();
    if len % bytes_per_pixel != 0 {
        return Err(StegError::BufferSizeMismatch {
            len,
            bytes_per_pixel,
        });
    }
    Ok(len / bytes_per_pixel)
}
