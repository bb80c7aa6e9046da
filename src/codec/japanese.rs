// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Legacy Japanese encodings based on JIS X 0201, JIS X 0208 and JIS X 0212.
 *
 * - JIS X 0201, which lower half is ISO/IEC 646:JP (US-ASCII with yen sign and overline)
 *   and upper half contains legacy half-width Katakanas.
 * - JIS X 0208, a primary graphic character set (94x94).
 * - JIS X 0212, a supplementary graphic character set (94x94).
 *
 * The tables here are shared by the stateless encodings (Shift_JIS, Windows code page 932,
 * EUC-JP) and the escape-based ISO-2022-JP family.
 */

use encoding_index_japanese as index;

use crate::codec::iso2022::{Charset, Designator, EncoderClasses, Invocation, Iso2022Encoding, Slot};
use crate::codec::singlebyte::tables::{ISO_8859_1, ISO_8859_7};
use crate::codec::simpchinese::GB2312_TABLE;
use crate::codec::korean::EUC_KR_TABLE;
use crate::table::doublebyte::{ascii_single, no_single, DoubleByteTable};
use crate::table::fallback::Fallback;
use crate::util::INDEX_NONE;

/// Characters encoded to JIS X 0201 Roman positions, which decode to ASCII in return.
pub static JIS_ROMAN_ENCODE_ONLY: [(char, u16); 2] = [('\u{a5}', 0x5c), ('\u{203e}', 0x7e)];

fn sjis_single(b: u8) -> u32 {
    match b {
        0x00..=0x7f => b as u32,
        0xa1..=0xdf => 0xff61 + (b as u32 - 0xa1),
        _ => INDEX_NONE,
    }
}

/// The JIS X 0208 pointer of a Shift_JIS byte pair.
fn sjis_pointer(lead: u8, trail: u8) -> Option<u16> {
    let lead_offset = match lead {
        0x81..=0x9f => 0x81,
        0xe0..=0xfc => 0xc1,
        _ => return None,
    };
    let trail_offset = match trail {
        0x40..=0x7e => 0x40,
        0x80..=0xfc => 0x41,
        _ => return None,
    };
    Some((lead as u16 - lead_offset) * 188 + (trail as u16 - trail_offset))
}

fn sjis_double(lead: u8, trail: u8) -> u32 {
    match sjis_pointer(lead, trail) {
        Some(pointer) => index::jis0208::forward(pointer),
        None => INDEX_NONE,
    }
}

/// Shift_JIS: JIS X 0201 in single bytes and JIS X 0208 in byte pairs.
///
/// The NEC-selected IBM extensions (`ED40` through `EEFC`) decode,
/// but the same characters are encoded as the IBM extensions (`FA40` through `FC4B`).
/// The yen sign and overline are encoded to `5C` and `7E` without roundtrip.
pub static SHIFT_JIS_TABLE: DoubleByteTable =
    DoubleByteTable::new((0x81, 0xfc), (0x40, 0xfc), sjis_single, sjis_double)
        .with_decode_only(&[(0xed40, 0xeefc)])
        .with_encode_only(&JIS_ROMAN_ENCODE_ONLY);

fn sjis_user_defined(lead: u8, trail: u8) -> u32 {
    match (lead, trail) {
        (0xf0..=0xf9, 0x40..=0x7e) | (0xf0..=0xf9, 0x80..=0xfc) => {
            let offset = if trail < 0x7f { 0x40 } else { 0x41 };
            0xe000 + (lead as u32 - 0xf0) * 188 + (trail as u32 - offset)
        }
        _ => INDEX_NONE,
    }
}

/// The user-defined area of Windows code page 932, mapped to the Private Use Area.
pub static SJIS_USER_DEFINED_TABLE: DoubleByteTable =
    DoubleByteTable::new((0xf0, 0xf9), (0x40, 0xfc), no_single, sjis_user_defined);

/// Windows code page 932: Shift_JIS plus the user-defined area.
pub static WINDOWS_31J_TABLE: Fallback = Fallback::new(&SJIS_USER_DEFINED_TABLE, &SHIFT_JIS_TABLE);

fn euc_pointer(lead: u8, trail: u8) -> Option<u16> {
    match (lead, trail) {
        (0xa1..=0xfe, 0xa1..=0xfe) => Some((lead as u16 - 0xa1) * 94 + (trail as u16 - 0xa1)),
        _ => None,
    }
}

fn eucjp_double(lead: u8, trail: u8) -> u32 {
    match (lead, trail) {
        (0x8e, 0xa1..=0xdf) => 0xff61 + (trail as u32 - 0xa1),
        _ => match euc_pointer(lead, trail) {
            Some(pointer) => index::jis0208::forward(pointer),
            None => INDEX_NONE,
        },
    }
}

/// EUC-JP without G3: ASCII, JIS X 0208 in `[A1-FE] [A1-FE]`
/// and half-width Katakanas in `8E [A1-DF]`.
pub static EUC_JP_TABLE: DoubleByteTable =
    DoubleByteTable::new((0x8e, 0xfe), (0xa1, 0xfe), ascii_single, eucjp_double)
        .with_encode_only(&JIS_ROMAN_ENCODE_ONLY);

fn jis0212_double(lead: u8, trail: u8) -> u32 {
    match euc_pointer(lead, trail) {
        Some(pointer) => index::jis0212::forward(pointer),
        None => INDEX_NONE,
    }
}

/// JIS X 0212 in the EUC form `[A1-FE] [A1-FE]`.
pub static JIS0212_TABLE: DoubleByteTable =
    DoubleByteTable::new((0xa1, 0xfe), (0xa1, 0xfe), no_single, jis0212_double);

static ISO_2022_JP_DESIGNATORS: [Designator; 6] = [
    Designator { escape: b"(B", slot: Slot::ShiftOut, charset: Charset::Ascii },
    Designator { escape: b"(J", slot: Slot::ShiftOut, charset: Charset::Roman },
    Designator { escape: b"(I", slot: Slot::ShiftOut, charset: Charset::Katakana },
    Designator { escape: b"$@", slot: Slot::ShiftOut, charset: Charset::Double(&EUC_JP_TABLE) },
    Designator { escape: b"$B", slot: Slot::ShiftOut, charset: Charset::Double(&EUC_JP_TABLE) },
    Designator { escape: b"$(D", slot: Slot::ShiftOut, charset: Charset::Double(&JIS0212_TABLE) },
];

/**
 * ISO-2022-JP, as in RFC 1468 with JIS X 0201 Katakana.
 *
 * All character sets are designated into G0 and invoked at once,
 * and a line feed or carriage return returns to ASCII.
 * JIS X 0212 (`ESC $ ( D`) and the older JIS C 6226 (`ESC $ @`) are decoded but never encoded.
 */
pub static ISO_2022_JP: Iso2022Encoding = Iso2022Encoding {
    name: "iso-2022-jp",
    invocation: Invocation::Designation,
    designators: &ISO_2022_JP_DESIGNATORS,
    repertoire: &EUC_JP_TABLE,
    g3: None,
    classes: EncoderClasses { roman: Some(1), main: Some(4), ss2: Some(2), ss3: None },
};

static ISO_2022_JP_2_DESIGNATORS: [Designator; 10] = [
    Designator { escape: b"(B", slot: Slot::ShiftOut, charset: Charset::Ascii },
    Designator { escape: b"(J", slot: Slot::ShiftOut, charset: Charset::Roman },
    Designator { escape: b"(I", slot: Slot::ShiftOut, charset: Charset::Katakana },
    Designator { escape: b"$@", slot: Slot::ShiftOut, charset: Charset::Double(&EUC_JP_TABLE) },
    Designator { escape: b"$B", slot: Slot::ShiftOut, charset: Charset::Double(&EUC_JP_TABLE) },
    Designator { escape: b"$(D", slot: Slot::ShiftOut, charset: Charset::Double(&JIS0212_TABLE) },
    Designator { escape: b"$A", slot: Slot::ShiftOut, charset: Charset::Double(&GB2312_TABLE) },
    Designator { escape: b"$(C", slot: Slot::ShiftOut, charset: Charset::Double(&EUC_KR_TABLE) },
    Designator { escape: b".A", slot: Slot::SingleShift2, charset: Charset::Upper96(&ISO_8859_1) },
    Designator { escape: b".F", slot: Slot::SingleShift2, charset: Charset::Upper96(&ISO_8859_7) },
];

/**
 * ISO-2022-JP-2 (RFC 1554), decoding the Chinese, Korean and ISO 8859 upper half
 * designations in addition to ISO-2022-JP. Only Japanese character sets are encoded,
 * with JIS X 0212 used for characters missing in JIS X 0208.
 */
pub static ISO_2022_JP_2: Iso2022Encoding = Iso2022Encoding {
    name: "iso-2022-jp-2",
    invocation: Invocation::Designation,
    designators: &ISO_2022_JP_2_DESIGNATORS,
    repertoire: &EUC_JP_TABLE,
    g3: Some(&JIS0212_TABLE),
    classes: EncoderClasses { roman: Some(1), main: Some(4), ss2: Some(2), ss3: Some(5) },
};



#[cfg(test)]
mod iso2022jp_tests {
    use crate::all::{ISO_2022_JP, ISO_2022_JP_2};
    use crate::types::*;

    #[test]
    fn test_encoder_valid() {
        let mut e = ISO_2022_JP.raw_encoder();
        assert_feed_ok!(e, "A", "", [0x41]);
        assert_feed_ok!(e, "BC", "", [0x42, 0x43]);
        assert_feed_ok!(e, "", "", []);
        assert_feed_ok!(e, "\u{a5}", "", [0x1b, 0x28, 0x4a, 0x5c]);
        assert_feed_ok!(e, "\u{203e}", "", [0x7e]);
        assert_feed_ok!(e, "\u{306b}\u{307b}\u{3093}", "", [0x1b, 0x24, 0x42,
                                                           0x24, 0x4b, 0x24, 0x5b, 0x24, 0x73]);
        assert_feed_ok!(e, "\u{65e5}\u{672c}", "", [0x46, 0x7c, 0x4b, 0x5c]);
        assert_feed_ok!(e, "\u{ff86}\u{ff8e}\u{ff9d}", "", [0x1b, 0x28, 0x49,
                                                           0x46, 0x4e, 0x5d]);
        assert_feed_ok!(e, "XYZ", "", [0x1b, 0x28, 0x42,
                                       0x58, 0x59, 0x5a]);
        assert_finish_ok!(e, []);

        // one ASCII character and two similarly looking characters:
        // - A: U+0020 SPACE (requires ASCII state)
        // - B: U+30CD KATAKANA LETTER NE (requires JIS X 0208 state)
        // - C: U+FF88 HALFWIDTH KATAKANA LETTER NE (requires Katakana state)
        // a (3,2) De Bruijn near-sequence "ABCACBA" is used to test all possible cases.
        const AD: &str = "\x20";
        const BD: &str = "\u{30cd}";
        const CD: &str = "\u{ff88}";
        const AE: &[u8] = &[0x1b, 0x28, 0x42, 0x20];
        const BE: &[u8] = &[0x1b, 0x24, 0x42, 0x25, 0x4d];
        const CE: &[u8] = &[0x1b, 0x28, 0x49, 0x48];
        let mut e = ISO_2022_JP.raw_encoder();
        let decoded = ["\x20", BD, CD, AD, CD, BD, AD].concat();
        let encoded = [&[0x20][..], BE, CE, AE, CE, BE, AE].concat();
        assert_feed_ok!(e, decoded, "", encoded);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_returns_to_ascii_before_line_end() {
        let mut e = ISO_2022_JP.raw_encoder();
        assert_feed_ok!(e, "\u{306b}\r\n\u{306b}", "",
                        [0x1b, 0x24, 0x42, 0x24, 0x4b, 0x1b, 0x28, 0x42, 0x0d, 0x0a,
                         0x1b, 0x24, 0x42, 0x24, 0x4b]);
        assert_finish_ok!(e, [0x1b, 0x28, 0x42]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_invalid() {
        let mut e = ISO_2022_JP.raw_encoder();
        assert_feed_err!(e, "", "\u{ffff}", "", []);
        assert_feed_err!(e, "?", "\u{ffff}", "!", [0x3f]);
        // JIS X 0212 is only decoded
        assert_feed_err!(e, "", "\u{736c}", "\u{8c78}", []);
        assert!(!e.can_encode('\u{736c}'));
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_decoder_valid() {
        let mut d = ISO_2022_JP.raw_decoder();
        assert_feed_ok!(d, [0x41], [], "A");
        assert_feed_ok!(d, [0x42, 0x43], [], "BC");
        assert_feed_ok!(d, [0x5c], [], "\\");
        assert_feed_ok!(d, [0x7e], [], "~");
        assert_feed_ok!(d, [0x1b, 0x28, 0x4a,
                            0x44, 0x45, 0x46], [], "DEF");
        assert_feed_ok!(d, [], [], "");
        assert_feed_ok!(d, [0x5c], [], "\u{a5}");
        assert_feed_ok!(d, [0x7e], [], "\u{203e}");
        assert_feed_ok!(d, [0x1b, 0x24, 0x42,
                            0x24, 0x4b,
                            0x1b, 0x24, 0x42,
                            0x24, 0x5b, 0x24, 0x73], [], "\u{306b}\u{307b}\u{3093}");
        assert_feed_ok!(d, [0x46, 0x7c, 0x4b, 0x5c], [], "\u{65e5}\u{672c}");
        assert_feed_ok!(d, [0x1b, 0x28, 0x49,
                            0x46, 0x4e, 0x5d], [], "\u{ff86}\u{ff8e}\u{ff9d}");
        assert_feed_ok!(d, [0x1b, 0x24, 0x28, 0x44,
                            0x4b, 0x46,
                            0x1b, 0x24, 0x40,
                            0x6c, 0x38], [], "\u{736c}\u{8c78}");
        assert_feed_ok!(d, [0x1b, 0x28, 0x42,
                            0x58, 0x59, 0x5a], [], "XYZ");
        assert_finish_ok!(d, "");

        // one ASCII character and three similarly looking characters:
        // - A: U+0020 SPACE (requires ASCII state)
        // - B: U+30CD KATAKANA LETTER NE (requires JIS X 0208 state)
        // - C: U+FF88 HALFWIDTH KATAKANA LETTER NE (requires Katakana state)
        // - D: U+793B CJK UNIFIED IDEOGRAPH-793B (requires JIS X 0212 state)
        // a (4,2) De Bruijn sequence "AABBCCACBADDBDCDA" is used to test all possible cases.
        const AD: &str = "\x20";
        const BD: &str = "\u{30cd}";
        const CD: &str = "\u{ff88}";
        const DD: &str = "\u{793b}";
        const AE: &[u8] = &[0x1b, 0x28, 0x42,       0x20];
        const BE: &[u8] = &[0x1b, 0x24, 0x42,       0x25, 0x4d];
        const CE: &[u8] = &[0x1b, 0x28, 0x49,       0x48];
        const DE: &[u8] = &[0x1b, 0x24, 0x28, 0x44, 0x50, 0x4b];
        let mut d = ISO_2022_JP.raw_decoder();
        let decoded = ["\x20", AD, BD, BD, CD, CD, AD, CD, BD, AD, DD, DD, BD, DD, CD, DD, AD].concat();
        let encoded = [&[0x20][..], AE, BE, BE, CE, CE, AE, CE, BE, AE, DE, DE, BE, DE, CE, DE, AE]
                      .concat();
        assert_feed_ok!(d, encoded, [], decoded);
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_line_end_returns_to_ascii() {
        let mut d = ISO_2022_JP.raw_decoder();
        assert_feed_ok!(d, [0x1b, 0x24, 0x42, 0x24, 0x4b, 0x0a, 0x24, 0x4b], [], "\u{306b}\n$K");
        assert_feed_ok!(d, [0x1b, 0x28, 0x49, 0x46, 0x0d, 0x46], [], "\u{ff86}\rF");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_invalid() {
        let mut d = ISO_2022_JP.raw_decoder();
        assert_feed_err!(d, [], [0x80], [], "");
        assert_feed_err!(d, [], [0x1b, 0x24], [0x41, 0x56, 0x50], ""); // GB 2312 needs ISO-2022-JP-2
        assert_feed_err!(d, [0x1b, 0x28, 0x49], [0x60], [], "");
        assert_feed_err!(d, [0x1b, 0x24, 0x42], [0x24], [0x80], "");
        assert_feed_err!(d, [], [0x29, 0x21], [], ""); // unassigned in JIS X 0208
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_feed_after_last() {
        let mut d = ISO_2022_JP.raw_decoder();
        assert_feed_ok!(d, [0x24, 0x22,
                            0x1b, 0x24, 0x42,
                            0x24, 0x22], [0x24], "\x24\x22\u{3042}");
        assert_feed_last_err!(d, [], [0x24], "");
        d.reset();
        assert_feed_ok!(d, [0x24, 0x22,
                            0x1b, 0x24, 0x42,
                            0x24, 0x22], [], "\x24\x22\u{3042}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_in_chunks() {
        let encoded = [0x41, 0x1b, 0x24, 0x42, 0x24, 0x4b, 0x24, 0x5b,
                       0x1b, 0x28, 0x49, 0x46, 0x1b, 0x28, 0x42, 0x42];
        for chunk in 1..encoded.len() {
            let mut d = ISO_2022_JP.raw_decoder();
            assert_eq!(crate::testutils::decode_in_chunks(&mut *d, &encoded, chunk),
                       Ok("A\u{306b}\u{307b}\u{ff86}B".to_string()));
        }
    }

    #[test]
    fn test_iso_2022_jp_2_decoder() {
        let mut d = ISO_2022_JP_2.raw_decoder();
        assert_feed_ok!(d, [0x1b, 0x24, 0x41, 0x56, 0x50], [], "\u{4e2d}");
        assert_feed_ok!(d, [0x1b, 0x24, 0x28, 0x43, 0x30, 0x21], [], "\u{ac00}");
        assert_feed_ok!(d, [0x1b, 0x28, 0x42, 0x1b, 0x2e, 0x41, 0x1b, 0x4e, 0x69, 0x41], [],
                        "\u{e9}A");
        assert_feed_ok!(d, [0x1b, 0x2e, 0x46, 0x1b, 0x4e, 0x61], [], "\u{3b1}");
        assert_finish_ok!(d, "");

        let mut d = ISO_2022_JP_2.raw_decoder();
        assert_feed_err!(d, [], [0x1b, 0x4e], [0x69], "");
        assert_feed_ok!(d, [0x1b, 0x2e, 0x41], [0x1b, 0x4e], "");
    }

    #[test]
    fn test_iso_2022_jp_2_encoder() {
        let mut e = ISO_2022_JP_2.raw_encoder();
        assert_feed_ok!(e, "\u{736c}\u{8c78}", "",
                        [0x1b, 0x24, 0x28, 0x44, 0x4b, 0x46, 0x1b, 0x24, 0x42, 0x6c, 0x38]);
        assert_finish_ok!(e, [0x1b, 0x28, 0x42]);
        // the other designations are only decoded
        assert_feed_err!(e, "", "\u{ac00}", "", []);
    }
}
