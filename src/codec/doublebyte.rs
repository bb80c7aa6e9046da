// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Common codec implementation for double-byte encodings.
 *
 * Every encoding here is a mix of single bytes and lead-trail byte pairs
 * described by a `Repertoire`, optionally with a third plane invoked by the
 * `0x8F` single shift as in EUC-JP.
 * The codecs are stateless: an incomplete sequence at the end of the input is left unconsumed.
 */

use crate::table::doublebyte::{is_double, Repertoire};
use crate::table::{UNMAPPABLE_DECODING, UNMAPPABLE_ENCODING};
use crate::types::*;
use crate::util::{as_char, is_gr94};

/// The EUC single shift invoking G3 for the next character.
pub const SS3: u8 = 0x8f;

/// A double-byte encoding over given repertoire.
#[derive(Clone, Copy)]
pub struct DoubleByteEncoding {
    pub name: &'static str,
    pub repertoire: &'static dyn Repertoire,
    /// The G3 plane, with codes in `[A1-FE] [A1-FE]` preceded by `SS3`.
    pub g3: Option<&'static dyn Repertoire>,
}

impl DoubleByteEncoding {
    pub const fn new(name: &'static str, repertoire: &'static dyn Repertoire) -> DoubleByteEncoding {
        DoubleByteEncoding { name, repertoire, g3: None }
    }

    pub const fn with_g3(mut self, g3: &'static dyn Repertoire) -> DoubleByteEncoding {
        self.g3 = Some(g3);
        self
    }
}

impl Encoding for DoubleByteEncoding {
    fn name(&self) -> &'static str { self.name }
    fn raw_encoder(&self) -> Box<dyn RawEncoder> { DoubleByteEncoder::new(self.repertoire, self.g3) }
    fn raw_decoder(&self) -> Box<dyn RawDecoder> { DoubleByteDecoder::new(self.repertoire, self.g3) }
}

fn is_ascii_compatible(repertoire: &dyn Repertoire) -> bool {
    (0..0x80u8).all(|b| repertoire.decode_single(b) == b as u32)
}

/// An encoder for double-byte encodings.
#[derive(Clone, Copy)]
pub struct DoubleByteEncoder {
    repertoire: &'static dyn Repertoire,
    g3: Option<&'static dyn Repertoire>,
}

impl DoubleByteEncoder {
    pub fn new(repertoire: &'static dyn Repertoire,
               g3: Option<&'static dyn Repertoire>) -> Box<dyn RawEncoder> {
        Box::new(DoubleByteEncoder { repertoire, g3 })
    }

    /// Returns the encoded bytes (1 to 3) of `ch` and their count, if any.
    fn encode(&self, ch: char) -> Option<([u8; 3], usize)> {
        let code = self.repertoire.encode_char(ch as u32);
        if code != UNMAPPABLE_ENCODING {
            return if is_double(code) {
                Some(([(code >> 8) as u8, code as u8, 0], 2))
            } else {
                Some(([code as u8, 0, 0], 1))
            };
        }
        let code = self.g3?.encode_char(ch as u32);
        if is_double(code) {
            Some(([SS3, (code >> 8) as u8, code as u8], 3))
        } else {
            None
        }
    }
}

impl RawEncoder for DoubleByteEncoder {
    fn from_self(&self) -> Box<dyn RawEncoder> { DoubleByteEncoder::new(self.repertoire, self.g3) }
    fn is_ascii_compatible(&self) -> bool { is_ascii_compatible(self.repertoire) }

    fn raw_feed(&mut self, input: &mut CharReader, output: &mut ByteWriter) -> CoderResult {
        while let Some(ch) = input.peek() {
            let (bytes, len) = match self.encode(ch) {
                Some(encoded) => encoded,
                None => return CoderResult::Unmappable(1),
            };
            if !output.has_room(len) {
                return CoderResult::Overflow;
            }
            output.write_all(&bytes[..len]);
            input.advance(1);
        }
        CoderResult::Underflow
    }

    fn can_encode(&self, ch: char) -> bool {
        self.encode(ch).is_some()
    }

    /// A single byte or a byte pair is legal as long as it decodes.
    fn is_legal_replacement(&self, repl: &[u8]) -> bool {
        match *repl {
            [b] => self.repertoire.decode_single(b) != UNMAPPABLE_DECODING,
            [lead, trail] => self.repertoire.decode_double(lead, trail) != UNMAPPABLE_DECODING,
            _ => false,
        }
    }
}

/// A decoder for double-byte encodings.
#[derive(Clone, Copy)]
pub struct DoubleByteDecoder {
    repertoire: &'static dyn Repertoire,
    g3: Option<&'static dyn Repertoire>,
}

impl DoubleByteDecoder {
    pub fn new(repertoire: &'static dyn Repertoire,
               g3: Option<&'static dyn Repertoire>) -> Box<dyn RawDecoder> {
        Box::new(DoubleByteDecoder { repertoire, g3 })
    }

    /// Reports a failed byte pair. When the trail byte can start a sequence by itself,
    /// only the lead byte is skipped so that the trail byte gets decoded on its own.
    fn malformed_or_unmappable(&self, trail: u8) -> CoderResult {
        if self.repertoire.is_lead(trail) ||
           self.repertoire.decode_single(trail) != UNMAPPABLE_DECODING {
            CoderResult::Malformed(1)
        } else {
            CoderResult::Unmappable(2)
        }
    }
}

impl RawDecoder for DoubleByteDecoder {
    fn from_self(&self) -> Box<dyn RawDecoder> { DoubleByteDecoder::new(self.repertoire, self.g3) }
    fn is_ascii_compatible(&self) -> bool { is_ascii_compatible(self.repertoire) }

    fn raw_feed(&mut self, input: &mut ByteReader, output: &mut CharWriter) -> CoderResult {
        while let Some(lead) = input.peek() {
            if !output.has_room(1) {
                return CoderResult::Overflow;
            }

            let ch = self.repertoire.decode_single(lead);
            if ch != UNMAPPABLE_DECODING {
                output.write(as_char(ch));
                input.advance(1);
                continue;
            }

            if let (SS3, Some(g3)) = (lead, self.g3) {
                let (b2, b3) = match (input.peek_at(1), input.peek_at(2)) {
                    (Some(b2), _) if !is_gr94(b2) => return CoderResult::Malformed(1),
                    (Some(b2), Some(b3)) => (b2, b3),
                    _ => return CoderResult::Underflow,
                };
                if !is_gr94(b3) {
                    return CoderResult::Malformed(1);
                }
                let ch = g3.decode_double(b2, b3);
                if ch == UNMAPPABLE_DECODING {
                    return CoderResult::Unmappable(3);
                }
                output.write(as_char(ch));
                input.advance(3);
                continue;
            }

            if !self.repertoire.is_lead(lead) {
                return CoderResult::Malformed(1);
            }
            let trail = match input.peek_at(1) {
                Some(trail) => trail,
                None => return CoderResult::Underflow,
            };
            let ch = self.repertoire.decode_double(lead, trail);
            if ch == UNMAPPABLE_DECODING {
                return self.malformed_or_unmappable(trail);
            }
            output.write(as_char(ch));
            input.advance(2);
        }
        CoderResult::Underflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::doublebyte::{ascii_single, no_single, DoubleByteTable};
    use crate::util::INDEX_NONE;

    // a toy repertoire: leads 81..82, trails A1..FE with a hole at 82FE
    fn toy_double(lead: u8, trail: u8) -> u32 {
        match (lead, trail) {
            (0x82, 0xfe) => INDEX_NONE,
            (0x81..=0x82, 0xa1..=0xfe) => 0x4e00 + (lead as u32 - 0x81) * 94 + (trail as u32 - 0xa1),
            _ => INDEX_NONE,
        }
    }

    fn toy_g3(lead: u8, trail: u8) -> u32 {
        match (lead, trail) {
            (0xa2, 0xa1) => 0x2c6,
            _ => INDEX_NONE,
        }
    }

    static TOY: DoubleByteTable =
        DoubleByteTable::new((0x81, 0x82), (0xa1, 0xfe), ascii_single, toy_double);
    static TOY_G3: DoubleByteTable =
        DoubleByteTable::new((0xa1, 0xfe), (0xa1, 0xfe), no_single, toy_g3);
    static TOY_ENCODING: DoubleByteEncoding =
        DoubleByteEncoding::new("toy", &TOY).with_g3(&TOY_G3);

    #[test]
    fn test_encoder() {
        let mut e = TOY_ENCODING.raw_encoder();
        assert!(e.is_ascii_compatible());
        assert_feed_ok!(e, "A", "", [0x41]);
        assert_feed_ok!(e, "\u{4e00}\u{4e5e}", "", [0x81, 0xa1, 0x82, 0xa1]);
        assert_feed_ok!(e, "\u{2c6}", "", [0x8f, 0xa2, 0xa1]);
        assert_feed_err!(e, "A", "\u{ac00}", "B", [0x41]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_checks_room_first() {
        let mut e = TOY_ENCODING.raw_encoder();
        let input = ['A', '\u{4e00}'];
        let mut reader = CharReader::new(&input);
        let mut buf = [0u8; 2];
        let mut writer = ByteWriter::new(&mut buf);
        assert_eq!(e.raw_feed(&mut reader, &mut writer), CoderResult::Overflow);
        assert_eq!(reader.position(), 1);
        assert_eq!(writer.written(), &[0x41]);
    }

    #[test]
    fn test_decoder_valid() {
        let mut d = TOY_ENCODING.raw_decoder();
        assert_feed_ok!(d, [0x41, 0x81, 0xa1], [], "A\u{4e00}");
        assert_feed_ok!(d, [0x8f, 0xa2, 0xa1], [], "\u{2c6}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_partial() {
        let mut d = TOY_ENCODING.raw_decoder();
        assert_feed_ok!(d, [0x41], [0x81], "A");
        assert_feed_ok!(d, [], [0x8f], "");
        assert_feed_ok!(d, [], [0x8f, 0xa2], "");
        assert_feed_last_err!(d, [0x41], [0x81], "A");
        assert_feed_last_err!(d, [], [0x8f, 0xa2], "");
    }

    #[test]
    fn test_decoder_invalid() {
        let mut d = TOY_ENCODING.raw_decoder();
        // not a lead byte at all
        assert_feed_err!(d, [0x41], [0x80], [0x42], "A");
        assert_feed_err!(d, [], [0xc0], [0xa1], "");
        // the trail byte is ASCII, which should be decoded again
        assert_feed_err!(d, [], [0x81], [0x41], "");
        // the trail byte is another lead, outside the trail range
        assert_feed_err!(d, [], [0x81], [0x82, 0xa1], "");
        assert_feed_err!(d, [0x81, 0xa1], [0x82], [0x81, 0xa1], "\u{4e00}");
        // well-formed but unmapped
        assert_feed_result!(d, [0x82, 0xfe, 0x41], CoderResult::Unmappable(2), 0, "");
        assert_feed_result!(d, [0x8f, 0xa2, 0xa2], CoderResult::Unmappable(3), 0, "");
        assert_feed_err!(d, [], [0x8f], [0x41], "");
        assert_feed_err!(d, [], [0x8f], [0xa2, 0x41], "");
    }

    #[test]
    fn test_legal_replacement() {
        let e = TOY_ENCODING.raw_encoder();
        assert!(e.is_legal_replacement(b"?"));
        assert!(e.is_legal_replacement(&[0x81, 0xa1]));
        assert!(!e.is_legal_replacement(&[0x82, 0xfe]));
        assert!(!e.is_legal_replacement(&[0x8f, 0xa2, 0xa1]));
        assert!(!e.is_legal_replacement(&[]));
    }

    #[test]
    fn test_chunked_decoding() {
        let input = [0x41, 0x81, 0xa1, 0x8f, 0xa2, 0xa1, 0x82, 0xa2, 0x42];
        for chunk in 1..input.len() {
            let mut d = TOY_ENCODING.raw_decoder();
            assert_eq!(crate::testutils::decode_in_chunks(&mut *d, &input, chunk),
                       Ok("A\u{4e00}\u{2c6}\u{4e5f}B".to_string()));
        }
    }
}
