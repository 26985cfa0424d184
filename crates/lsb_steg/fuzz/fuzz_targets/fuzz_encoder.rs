#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lsb_steg::{lsb_encode, ChannelOrder, PixelLayout, StegOptions};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    pixels: Vec<u8>,
    message: String,
    rgba: bool,
    bgr: bool,
}

fuzz_target!(|input: FuzzInput| {
    let opts = StegOptions {
        layout: if input.rgba { PixelLayout::Rgba8 } else { PixelLayout::Rgb8 },
        channel_order: if input.bgr { ChannelOrder::Bgr } else { ChannelOrder::Rgb },
    };

    // The encoder should never panic, and never change the buffer size
    if let Ok(encoded) = lsb_encode(&input.pixels, &input.message, &opts) {
        assert_eq!(encoded.len(), input.pixels.len());
    }
});
