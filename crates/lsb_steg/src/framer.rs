//! Conversion between message text and the self-terminated bit stream.
//!
//! A message is framed as its characters followed by [`TERMINATOR`], each
//! written as one byte, most significant bit first. The terminator is not
//! escaped: a message that contains it, or ends in a way that overlaps with
//! its start (`"abc#####END"`), is cut short on decode.

use crate::{Result, StegError};

/// End-of-message marker appended to every payload.
///
/// This is part of the on-image format. Changing it makes every previously
/// encoded image unreadable.
pub const TERMINATOR: &str = "#####END#####";

/// Convert `text` plus the terminator into a bit sequence, MSB first.
///
/// The output has `8 * (chars + TERMINATOR.len())` bits. Characters above
/// U+00FF are truncated to their low byte and will not decode back to the
/// same text; use [`frame`] to reject them instead.
pub fn encode_to_bits(text: &str) -> Vec<bool> {
    let bytes = text.chars().map(|ch| ch as u32 as u8);
    let mut bits = Vec::with_capacity((text.len() + TERMINATOR.len()) * 8);
    bits.extend(msb_first(bytes.chain(TERMINATOR.bytes())));
    bits
}

/// Frame `text` into payload bytes followed by the terminator.
///
/// Fails on the first character that does not fit in a single byte.
pub fn frame(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() + TERMINATOR.len());
    for (index, ch) in text.chars().enumerate() {
        let byte = u8::try_from(ch).map_err(|_| StegError::CodePointOutOfRange { ch, index })?;
        out.push(byte);
    }
    out.extend_from_slice(TERMINATOR.as_bytes());
    Ok(out)
}

/// Expand bytes into bits, most significant bit first.
pub(crate) fn msb_first<I>(bytes: I) -> impl Iterator<Item = bool>
where
    I: IntoIterator<Item = u8>,
{
    bytes
        .into_iter()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
}

/// Reassemble text from a bit sequence and cut it at the terminator.
///
/// Bits are consumed only until the terminator is complete; the rest of the
/// iterator is never touched. A trailing group of fewer than eight bits is
/// discarded.
pub fn decode_from_bits<I>(bits: I) -> Result<String>
where
    I: IntoIterator<Item = bool>,
{
    let mut unframer = Unframer::new();
    for bit in bits {
        if unframer.push_bit(bit) {
            break;
        }
    }
    unframer.into_message()
}

/// Incremental decoder for the framed bit stream.
///
/// Feed bits with [`push_bit`](Self::push_bit) until it reports completion,
/// then take the text with [`into_message`](Self::into_message).
#[derive(Debug, Clone, Default)]
pub struct Unframer {
    bytes: Vec<u8>,
    current: u8,
    filled: u8,
    complete: bool,
}

impl Unframer {
    /// An empty decoder waiting for its first bit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one bit. Returns `true` once the terminator has been seen.
    ///
    /// Bits pushed after completion are ignored.
    pub fn push_bit(&mut self, bit: bool) -> bool {
        if self.complete {
            return true;
        }
        self.current = (self.current << 1) | bit as u8;
        self.filled += 1;
        if self.filled == 8 {
            self.bytes.push(self.current);
            self.current = 0;
            self.filled = 0;
            self.complete = self.bytes.ends_with(TERMINATOR.as_bytes());
        }
        self.complete
    }

    /// Whether the terminator has been seen.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of whole bytes assembled so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no whole byte has been assembled yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The text before the terminator, or [`StegError::NoHiddenMessage`] if
    /// it was never seen.
    pub fn into_message(self) -> Result<String> {
        if !self.complete {
            return Err(StegError::NoHiddenMessage);
        }
        let end = self.bytes.len() - TERMINATOR.len();
        Ok(self.bytes[..end].iter().copied().map(char::from).collect())
    }
}
