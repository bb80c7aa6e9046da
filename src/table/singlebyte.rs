// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Mapping tables for single-byte encodings.

use std::sync::OnceLock;

use super::reverse::{ReverseIndex, ReverseIndexBuilder, UNMAPPABLE_ENCODING};
use super::UNMAPPABLE_DECODING;

const UNMAPPED: u16 = UNMAPPABLE_DECODING as u16;

/// Where the 256 decoded values of a single-byte table come from.
#[derive(Clone, Copy)]
pub enum SingleByteSource {
    /// Bytes 00..7F are ASCII, and `forward(b)` gives the rest (`0xffff` if none).
    /// `forward` takes the raw byte `80..FF` and does any offsetting itself,
    /// as the `encoding-index-singlebyte` tables do.
    AsciiUpper(fn(u8) -> u16),
    /// `forward(b)` gives every byte (`0xffff` if none), e.g. for EBCDIC.
    Full(fn(u8) -> u16),
}

/// A dense single-byte mapping table with a lazily built two-level reverse index.
/// Both directions are built at most once and shared by every codec using the table.
pub struct SingleByteTable {
    source: SingleByteSource,
    decode: OnceLock<Box<[u16; 256]>>,
    encode: OnceLock<ReverseIndex>,
}

impl SingleByteTable {
    pub const fn new(source: SingleByteSource) -> SingleByteTable {
        SingleByteTable { source, decode: OnceLock::new(), encode: OnceLock::new() }
    }

    fn decode_table(&self) -> &[u16; 256] {
        self.decode.get_or_init(|| {
            let mut table = Box::new([UNMAPPED; 256]);
            for (b, slot) in table.iter_mut().enumerate() {
                let b = b as u8;
                let ch = match self.source {
                    SingleByteSource::AsciiUpper(_) if b < 0x80 => b as u16,
                    SingleByteSource::AsciiUpper(forward) => forward(b),
                    SingleByteSource::Full(forward) => forward(b),
                };
                if ch != 0xffff {
                    *slot = ch;
                }
            }
            table
        })
    }

    fn encode_table(&self) -> &ReverseIndex {
        self.encode.get_or_init(|| {
            let mut builder = ReverseIndexBuilder::new();
            for (b, &ch) in self.decode_table().iter().enumerate() {
                if ch != UNMAPPED {
                    builder.insert(ch as u32, b as u16);
                }
            }
            builder.finish()
        })
    }

    /// Returns the code point for given byte, or `UNMAPPABLE_DECODING`.
    #[inline]
    pub fn decode(&self, b: u8) -> u32 {
        self.decode_table()[b as usize] as u32
    }

    /// Returns the byte for given code point, or `None`.
    #[inline]
    pub fn encode(&self, ch: u32) -> Option<u8> {
        match self.encode_table().lookup(ch) {
            UNMAPPABLE_ENCODING => None,
            code => Some(code as u8),
        }
    }

    /// Returns true if bytes 00..7F map to U+0000..U+007F.
    pub fn is_ascii_compatible(&self) -> bool {
        self.decode_table()[..0x80].iter().enumerate().all(|(b, &ch)| ch == b as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin1(code: u8) -> u16 {
        code as u16
    }

    fn sparse(code: u8) -> u16 {
        match code {
            0x80 => 0x20ac,
            0x81 => 0x0410,
            0x82 => 0x20ac,
            _ => 0xffff,
        }
    }

    fn inverted(code: u8) -> u16 {
        0xff - code as u16
    }

    #[test]
    fn test_ascii_upper() {
        static TABLE: SingleByteTable = SingleByteTable::new(SingleByteSource::AsciiUpper(latin1));
        assert_eq!(TABLE.decode(0x41), 0x41);
        assert_eq!(TABLE.decode(0xe9), 0xe9);
        assert_eq!(TABLE.encode(0xe9), Some(0xe9));
        assert_eq!(TABLE.encode(0x100), None);
        assert!(TABLE.is_ascii_compatible());
    }

    #[test]
    fn test_unmapped_and_duplicates() {
        static TABLE: SingleByteTable = SingleByteTable::new(SingleByteSource::AsciiUpper(sparse));
        assert_eq!(TABLE.decode(0x80), 0x20ac);
        assert_eq!(TABLE.decode(0x82), 0x20ac);
        assert_eq!(TABLE.decode(0x83), UNMAPPABLE_DECODING);
        assert_eq!(TABLE.decode(0xff), UNMAPPABLE_DECODING);
        assert_eq!(TABLE.encode(0x20ac), Some(0x80)); // the first one
        assert_eq!(TABLE.encode(0x410), Some(0x81));
        assert_eq!(TABLE.encode(0xfffd), None);
    }

    #[test]
    fn test_full() {
        static TABLE: SingleByteTable = SingleByteTable::new(SingleByteSource::Full(inverted));
        assert_eq!(TABLE.decode(0x00), 0xff);
        assert_eq!(TABLE.encode(0x00), Some(0xff));
        assert!(!TABLE.is_ascii_compatible());
    }
}
