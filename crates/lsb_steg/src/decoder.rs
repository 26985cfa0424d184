//! LSB decoder: reads the low bit of every color channel until the
//! terminator shows up.

use crate::capacity::pixel_count;
use crate::framer::decode_from_bits;
use crate::{Result, StegOptions};

/// Recover a message hidden with [`lsb_encode`](crate::lsb_encode).
///
/// Channel bits are extracted lazily and handed straight to the framer, so
/// only as many pixels are visited as the hidden message occupies.
///
/// # Errors
/// * [`StegError::BufferSizeMismatch`](crate::StegError::BufferSizeMismatch)
///   if `pixels` is not a whole number of pixels
/// * [`StegError::NoHiddenMessage`](crate::StegError::NoHiddenMessage) if the
///   terminator never appears. An untouched image, a corrupted one and one
///   written with a different format version all look the same.
pub fn lsb_decode(pixels: &[u8], opts: &StegOptions) -> Result<String> {
    pixel_count(pixels.len(), opts.layout)?;
    let offsets = opts.channel_order.offsets();
    let bits = pixels
        .chunks_exact(opts.layout.bytes_per_pixel())
        .flat_map(move |pixel| offsets.into_iter().map(move |offset| pixel[offset] & 1 == 1));
    decode_from_bits(bits)
}

/// Recover a message from tightly packed RGB data with the default channel order.
#[inline]
pub fn lsb_decode_default(rgb: &[u8]) -> Result<String> {
    lsb_decode(rgb, &StegOptions::default())
}
