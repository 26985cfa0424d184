#![no_main]

use libfuzzer_sys::fuzz_target;
use lsb_steg::{lsb_decode, PixelLayout, StegOptions};

fuzz_target!(|data: &[u8]| {
    // The decoder should never panic, regardless of input
    let _ = lsb_decode(data, &StegOptions::new(PixelLayout::Rgb8));
    let _ = lsb_decode(data, &StegOptions::new(PixelLayout::Rgba8));
});
