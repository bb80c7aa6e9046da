// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! A placeholder encoder that returns an error for every character.

use crate::types::*;

/// An encoder for decode-only encodings. Every character is unmappable.
#[derive(Clone, Copy)]
pub struct ErrorEncoder;

impl ErrorEncoder {
    pub fn new() -> Box<dyn RawEncoder> { Box::new(ErrorEncoder) }
}

impl RawEncoder for ErrorEncoder {
    fn from_self(&self) -> Box<dyn RawEncoder> { ErrorEncoder::new() }

    fn raw_feed(&mut self, input: &mut CharReader, _output: &mut ByteWriter) -> CoderResult {
        if input.is_empty() {
            CoderResult::Underflow
        } else {
            CoderResult::Unmappable(1)
        }
    }

    fn can_encode(&self, _ch: char) -> bool {
        false
    }

    fn is_legal_replacement(&self, _repl: &[u8]) -> bool {
        false
    }
}
