//! # lsb_steg
//!
//! A small least-significant-bit steganography codec. Text is hidden in the
//! low bit of the red, green and blue channels of a raster image, three bits
//! per pixel, and recovered by reading those bits back in the same order.
//!
//! ## Quick Start
//!
//! ### Hiding a message
//!
//! ```
//! use lsb_steg::{lsb_encode_default, lsb_decode_default};
//!
//! // 64 RGB pixels (3 bytes per pixel) of mid-grey
//! let carrier = vec![128u8; 64 * 3];
//! let encoded = lsb_encode_default(&carrier, "hi")?;
//! assert_eq!(encoded.len(), carrier.len());
//!
//! let message = lsb_decode_default(&encoded)?;
//! assert_eq!(message, "hi");
//! # Ok::<(), lsb_steg::StegError>(())
//! ```
//!
//! ## Format
//!
//! Each character of the message, followed by [`TERMINATOR`], is written as
//! eight bits, most significant bit first. Only characters in U+0000..=U+00FF
//! fit in eight bits; anything above is rejected with
//! [`StegError::CodePointOutOfRange`].
//!
//! The hidden bits only survive lossless storage. Saving an encoded image as
//! JPEG re-compresses it and destroys the payload.

use thiserror::Error;

pub mod capacity;
pub mod decoder;
pub mod encoder;
pub mod framer;
mod pixel;

pub use capacity::{capacity_bits, max_message_len, pixel_count, required_bits};
pub use decoder::{lsb_decode, lsb_decode_default};
pub use encoder::{lsb_encode, lsb_encode_default};
pub use framer::{decode_from_bits, encode_to_bits, Unframer, TERMINATOR};
pub use pixel::{ChannelOrder, PixelLayout, StegOptions};

/// Version of the on-image format.
///
/// Bump this whenever [`TERMINATOR`], the bit order or the channel walk
/// changes: images written by one version cannot be read by another.
pub const FORMAT_VERSION: u8 = 1;

/// Errors that can occur while hiding or recovering a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StegError {
    /// The framed message needs more bits than the carrier has channels
    #[error("message too long for this image: needs {required} bits, carrier holds {available}")]
    CapacityExceeded { required: usize, available: usize },

    /// The carrier was exhausted without finding the terminator
    #[error("no hidden message found or corrupted image")]
    NoHiddenMessage,

    /// A character does not fit in a single byte
    #[error("character {ch:?} at position {index} is outside U+0000..=U+00FF")]
    CodePointOutOfRange { ch: char, index: usize },

    /// Pixel buffer length is not a whole number of pixels
    #[error("buffer size mismatch: {len} bytes is not a multiple of {bytes_per_pixel}")]
    BufferSizeMismatch { len: usize, bytes_per_pixel: usize },
}

/// Result type for steganography operations.
pub type Result<T> = core::result::Result<T, StegError>;
