// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Mapping tables for double-byte encodings.
 *
 * The decode direction is a sparse array of rows, one per lead byte,
 * each covering the configured trail byte range.
 * A row is allocated on its first use, and a lead byte without any mapping never gets one.
 * The encode direction is a two-level `ReverseIndex` built from the rows on first use.
 */

use std::sync::OnceLock;

use super::reverse::{ReverseIndex, ReverseIndexBuilder, UNMAPPABLE_ENCODING};
use super::UNMAPPABLE_DECODING;
use crate::util::INDEX_NONE;

/// A character repertoire with single-byte and double-byte codes.
///
/// Decoded values are code points or `UNMAPPABLE_DECODING`.
/// Encoded values are either a single byte (`<= 0xff`) or a lead and trail byte
/// packed as `lead << 8 | trail`, or `UNMAPPABLE_ENCODING`.
pub trait Repertoire: Sync {
    /// Decodes a byte standing for a character on its own.
    fn decode_single(&self, b: u8) -> u32;

    /// Decodes a lead and trail byte pair.
    fn decode_double(&self, lead: u8, trail: u8) -> u32;

    /// Encodes a code point.
    fn encode_char(&self, ch: u32) -> u16;

    /// Returns true if `b` starts at least one valid double-byte sequence.
    fn is_lead(&self, b: u8) -> bool;
}

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_ROW: OnceLock<Option<Box<[u32]>>> = OnceLock::new();

/// A double-byte mapping table.
pub struct DoubleByteTable {
    b1_min: u8,
    b1_max: u8,
    b2_min: u8,
    b2_max: u8,
    single: fn(u8) -> u32,
    double: fn(u8, u8) -> u32,
    decode_only: &'static [(u16, u16)],
    encode_only: &'static [(char, u16)],
    rows: [OnceLock<Option<Box<[u32]>>>; 256],
    encode: OnceLock<ReverseIndex>,
}

impl DoubleByteTable {
    /// Creates a table for leads `b1_min..=b1_max` and trails `b2_min..=b2_max`.
    /// `single` and `double` give the decoded values, using `0xffff` for missing entries,
    /// and are called at most once for every byte or byte pair.
    pub const fn new(b1: (u8, u8), b2: (u8, u8),
                     single: fn(u8) -> u32, double: fn(u8, u8) -> u32) -> DoubleByteTable {
        DoubleByteTable {
            b1_min: b1.0,
            b1_max: b1.1,
            b2_min: b2.0,
            b2_max: b2.1,
            single,
            double,
            decode_only: &[],
            encode_only: &[],
            rows: [EMPTY_ROW; 256],
            encode: OnceLock::new(),
        }
    }

    /// Excludes the codes in given inclusive ranges from the reverse index.
    /// They still decode, but their code points encode elsewhere (or nowhere).
    pub const fn with_decode_only(mut self, ranges: &'static [(u16, u16)]) -> DoubleByteTable {
        self.decode_only = ranges;
        self
    }

    /// Adds mappings only used for encoding, overriding the reverse index.
    /// These do not roundtrip: the code decodes to some other character.
    pub const fn with_encode_only(mut self, mappings: &'static [(char, u16)]) -> DoubleByteTable {
        self.encode_only = mappings;
        self
    }

    /// The encode-only mappings of this table.
    pub fn encode_only(&self) -> &'static [(char, u16)] {
        self.encode_only
    }

    /// Returns true if the code is excluded from the reverse index.
    pub fn is_decode_only(&self, code: u16) -> bool {
        self.decode_only.iter().any(|&(lo, hi)| lo <= code && code <= hi)
    }

    #[inline]
    fn in_lead_range(&self, b: u8) -> bool {
        self.b1_min <= b && b <= self.b1_max
    }

    #[inline]
    fn in_trail_range(&self, b: u8) -> bool {
        self.b2_min <= b && b <= self.b2_max
    }

    fn row(&self, lead: u8) -> Option<&[u32]> {
        if !self.in_lead_range(lead) {
            return None;
        }
        self.rows[lead as usize]
            .get_or_init(|| {
                let row: Box<[u32]> = (self.b2_min..=self.b2_max)
                    .map(|trail| match (self.double)(lead, trail) {
                        INDEX_NONE => UNMAPPABLE_DECODING,
                        ch => ch,
                    })
                    .collect();
                if row.iter().all(|&ch| ch == UNMAPPABLE_DECODING) {
                    None
                } else {
                    log::trace!("allocated a row for lead byte {:#04x}", lead);
                    Some(row)
                }
            })
            .as_deref()
    }

    fn encode_table(&self) -> &ReverseIndex {
        self.encode.get_or_init(|| {
            let mut builder = ReverseIndexBuilder::new();
            for b in 0..=0xffu8 {
                let ch = self.decode_single(b);
                if ch != UNMAPPABLE_DECODING {
                    builder.insert(ch, b as u16);
                }
            }
            for lead in self.b1_min..=self.b1_max {
                let row = match self.row(lead) {
                    Some(row) => row,
                    None => continue,
                };
                for (trail, &ch) in (self.b2_min..=self.b2_max).zip(row.iter()) {
                    let code = (lead as u16) << 8 | trail as u16;
                    if ch != UNMAPPABLE_DECODING && !self.is_decode_only(code) {
                        builder.insert(ch, code);
                    }
                }
            }
            for &(ch, code) in self.encode_only {
                builder.force(ch as u32, code);
            }
            builder.finish()
        })
    }
}

impl Repertoire for DoubleByteTable {
    #[inline]
    fn decode_single(&self, b: u8) -> u32 {
        match (self.single)(b) {
            INDEX_NONE => UNMAPPABLE_DECODING,
            ch => ch,
        }
    }

    #[inline]
    fn decode_double(&self, lead: u8, trail: u8) -> u32 {
        if !self.in_trail_range(trail) {
            return UNMAPPABLE_DECODING;
        }
        match self.row(lead) {
            Some(row) => row[(trail - self.b2_min) as usize],
            None => UNMAPPABLE_DECODING,
        }
    }

    #[inline]
    fn encode_char(&self, ch: u32) -> u16 {
        self.encode_table().lookup(ch)
    }

    #[inline]
    fn is_lead(&self, b: u8) -> bool {
        self.row(b).is_some()
    }
}

/// Single bytes of the ASCII-based double-byte encodings.
pub fn ascii_single(b: u8) -> u32 {
    if b < 0x80 { b as u32 } else { INDEX_NONE }
}

/// No single bytes at all, for extension tables.
pub fn no_single(_b: u8) -> u32 {
    INDEX_NONE
}

/// Returns true if `code` is a double-byte code rather than a single byte.
#[inline]
pub fn is_double(code: u16) -> bool {
    code > 0xff && code != UNMAPPABLE_ENCODING
}
