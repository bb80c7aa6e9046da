// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! 7-bit ASCII encoding.

use crate::types::*;

/**
 * ASCII, also known as ISO/IEC 646:US.
 *
 * It is both a basis and a lowest common denominator of many other encodings
 * including UTF-8, which Rust internally assumes.
 */
#[derive(Clone, Copy)]
pub struct ASCIIEncoding;

impl Encoding for ASCIIEncoding {
    fn name(&self) -> &'static str { "ascii" }
    fn raw_encoder(&self) -> Box<dyn RawEncoder> { ASCIIEncoder::new() }
    fn raw_decoder(&self) -> Box<dyn RawDecoder> { ASCIIDecoder::new() }
}

/// An encoder for ASCII.
#[derive(Clone, Copy)]
pub struct ASCIIEncoder;

impl ASCIIEncoder {
    pub fn new() -> Box<dyn RawEncoder> { Box::new(ASCIIEncoder) }
}

impl RawEncoder for ASCIIEncoder {
    fn from_self(&self) -> Box<dyn RawEncoder> { ASCIIEncoder::new() }
    fn is_ascii_compatible(&self) -> bool { true }

    fn raw_feed(&mut self, input: &mut CharReader, output: &mut ByteWriter) -> CoderResult {
        while let Some(ch) = input.peek() {
            if ch > '\u{7f}' {
                return CoderResult::Unmappable(1);
            }
            if !output.has_room(1) {
                return CoderResult::Overflow;
            }
            output.write(ch as u8);
            input.advance(1);
        }
        CoderResult::Underflow
    }

    fn can_encode(&self, ch: char) -> bool {
        ch <= '\u{7f}'
    }
}

/// A decoder for ASCII.
#[derive(Clone, Copy)]
pub struct ASCIIDecoder;

impl ASCIIDecoder {
    pub fn new() -> Box<dyn RawDecoder> { Box::new(ASCIIDecoder) }
}

impl RawDecoder for ASCIIDecoder {
    fn from_self(&self) -> Box<dyn RawDecoder> { ASCIIDecoder::new() }
    fn is_ascii_compatible(&self) -> bool { true }

    fn raw_feed(&mut self, input: &mut ByteReader, output: &mut CharWriter) -> CoderResult {
        while let Some(b) = input.peek() {
            if b > 0x7f {
                return CoderResult::Malformed(1);
            }
            if !output.has_room(1) {
                return CoderResult::Overflow;
            }
            output.write(b as char);
            input.advance(1);
        }
        CoderResult::Underflow
    }
}
