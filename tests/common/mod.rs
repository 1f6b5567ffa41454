#![allow(dead_code)]

use iris_archive::constants::{FRAME_SIZE, LEADING_WORDS, WORD_SIZE};

/// Encode `value` as a legacy IBM System/360 float word.
///
/// Only meant for values whose base-16 fraction fits in 24 bits; other values
/// are truncated.
pub fn ibm_word(value: f64) -> [u8; 4] {
    if value == 0.0 {
        return [0; 4];
    }
    let sign = if value < 0.0 { 0x80u32 } else { 0 };
    let mut fraction = value.abs();
    let mut exponent = 64i32;
    while fraction >= 1.0 {
        fraction /= 16.0;
        exponent += 1;
    }
    while fraction < 1.0 / 16.0 {
        fraction *= 16.0;
        exponent -= 1;
    }
    let mantissa = (fraction * f64::from(1u32 << 24)) as u32;
    (((sign | exponent as u32) << 24) | mantissa).to_be_bytes()
}

/// Builder for one synthetic archive frame, addressed in record words.
pub struct FrameBuilder {
    bytes: Vec<u8>,
}

impl FrameBuilder {
    pub fn new(tag: u32) -> Self {
        let mut bytes = vec![0u8; FRAME_SIZE];
        // leading block holds garbage the decoder must skip
        bytes[..LEADING_WORDS * WORD_SIZE].fill(0xA5);
        let mut builder = FrameBuilder { bytes };
        builder.uint(0, tag);
        builder
    }

    pub fn word(&mut self, index: usize, bytes: [u8; 4]) -> &mut Self {
        let start = (LEADING_WORDS + index) * WORD_SIZE;
        self.bytes[start..start + WORD_SIZE].copy_from_slice(&bytes);
        self
    }

    pub fn uint(&mut self, index: usize, value: u32) -> &mut Self {
        self.word(index, value.to_be_bytes())
    }

    pub fn float(&mut self, index: usize, value: f64) -> &mut Self {
        self.word(index, ibm_word(value))
    }

    pub fn orbits(&mut self, index: usize, start: u16, end: u16) -> &mut Self {
        let [a, b] = start.to_be_bytes();
        let [c, d] = end.to_be_bytes();
        self.word(index, [a, b, c, d])
    }

    pub fn build(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}
