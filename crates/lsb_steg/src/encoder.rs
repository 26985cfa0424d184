//! LSB encoder: writes the framed message into the low bit of successive
//! color channels.

use crate::capacity::{capacity_bits, pixel_count};
use crate::framer::{frame, msb_first};
use crate::{Result, StegError, StegOptions};

/// Hide `message` in a copy of `pixels`.
///
/// # Arguments
/// * `pixels` - Interleaved pixel data in raster order, packed as `opts.layout`
/// * `message` - Text to hide; every character must be in U+0000..=U+00FF
/// * `opts` - Pixel layout and channel order
///
/// # Returns
/// A new buffer of the same length. Only the least significant bit of the
/// first `8 * (chars + TERMINATOR.len())` color channels may differ from
/// `pixels`; every other byte, alpha included, is copied unchanged.
///
/// # Errors
/// * [`StegError::BufferSizeMismatch`] if `pixels` is not a whole number of pixels
/// * [`StegError::CodePointOutOfRange`] if a character needs more than 8 bits
/// * [`StegError::CapacityExceeded`] if the carrier has too few channels
///
/// # Example
/// ```
/// use lsb_steg::{lsb_encode, StegOptions, PixelLayout};
///
/// let rgba = vec![200u8; 40 * 4];
/// let encoded = lsb_encode(&rgba, "ok", &StegOptions::new(PixelLayout::Rgba8))?;
/// assert_eq!(encoded.len(), rgba.len());
/// # Ok::<(), lsb_steg::StegError>(())
/// ```
#[must_use = "this returns the encoded pixel buffer"]
pub fn lsb_encode(pixels: &[u8], message: &str, opts: &StegOptions) -> Result<Vec<u8>> {
    let available = capacity_bits(pixel_count(pixels.len(), opts.layout)?);
    let payload = frame(message)?;
    let required = payload.len() * 8;
    if required > available {
        return Err(StegError::CapacityExceeded {
            required,
            available,
        });
    }

    let mut out = pixels.to_vec();
    let mut bits = msb_first(payload);
    let offsets = opts.channel_order.offsets();

    'pixels: for pixel in out.chunks_exact_mut(opts.layout.bytes_per_pixel()) {
        for &offset in &offsets {
            let Some(bit) = bits.next() else {
                break 'pixels;
            };
            pixel[offset] = (pixel[offset] & !1) | bit as u8;
        }
    }

    Ok(out)
}

/// Hide `message` in tightly packed RGB data with the default channel order.
#[inline]
#[must_use = "this returns the encoded pixel buffer"]
pub fn lsb_encode_default(rgb: &[u8], message: &str) -> Result<Vec<u8>> {
    lsb_encode(rgb, message, &StegOptions::default())
}
