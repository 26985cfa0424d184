#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lsb_steg::{lsb_decode_default, lsb_encode_default, TERMINATOR};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    pixels: Vec<u8>,
    message: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let message: String = input.message.iter().copied().map(char::from).collect();

    // The terminator is not escaped, so the decoder stops at its first
    // occurrence, which may start inside the message itself
    let framed = format!("{message}{TERMINATOR}");
    let expected = &framed[..framed.find(TERMINATOR).unwrap_or(message.len())];

    let len = input.pixels.len() - input.pixels.len() % 3;
    let pixels = &input.pixels[..len];

    let encoded = match lsb_encode_default(pixels, &message) {
        Ok(e) => e,
        Err(_) => return,
    };

    let decoded = lsb_decode_default(&encoded).expect("encoded image must decode");
    assert_eq!(decoded, expected);
});
