//! Pixel buffer layout and channel walk order.

/// How pixels are packed in the flat byte buffer handed to the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelLayout {
    /// 3 bytes per pixel: R, G, B
    #[default]
    Rgb8,
    /// 4 bytes per pixel: R, G, B, A. Alpha is never read or modified.
    Rgba8,
}

impl PixelLayout {
    /// Number of bytes one pixel occupies.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelLayout::Rgb8 => 3,
            PixelLayout::Rgba8 => 4,
        }
    }
}

/// Order in which the color channels of a pixel carry payload bits.
///
/// The encoder and decoder must use the same order. [`ChannelOrder::Rgb`] is
/// the format convention; images written with any other order are unreadable
/// by default readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Bgr,
}

impl ChannelOrder {
    /// Byte offsets within a pixel, in walk order.
    #[inline]
    pub(crate) const fn offsets(self) -> [usize; 3] {
        match self {
            ChannelOrder::Rgb => [0, 1, 2],
            ChannelOrder::Bgr => [2, 1, 0],
        }
    }
}

/// Options shared by [`lsb_encode`](crate::lsb_encode) and
/// [`lsb_decode`](crate::lsb_decode).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StegOptions {
    /// Packing of the pixel buffer.
    pub layout: PixelLayout,
    /// Channel walk order. Must match between encode and decode.
    pub channel_order: ChannelOrder,
}

impl StegOptions {
    /// Options for `layout` with the default channel order.
    pub fn new(layout: PixelLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_format_convention() {
        let opts = StegOptions::default();
        assert_eq!(opts.layout, PixelLayout::Rgb8);
        assert_eq!(opts.channel_order, ChannelOrder::Rgb);
    }

    #[test]
    fn test_offsets_stay_inside_color_channels() {
        for order in [ChannelOrder::Rgb, ChannelOrder::Bgr] {
            let mut offsets = order.offsets();
            offsets.sort_unstable();
            assert_eq!(offsets, [0, 1, 2]);
        }
    }
}
