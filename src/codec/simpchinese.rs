// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Legacy simplified Chinese encodings based on GB 2312 and GBK.
 *
 * Both tables are views of the one- and two-byte part of the GB 18030 index,
 * which spans the region `[81-FE] [40-7E 80-FE]`.
 * GB 2312 occupies `[A1-F7] [A1-FE]` of it,
 * and GBK (as in Windows code page 936) is everything else plus `80` for the euro sign.
 */

use encoding_index_simpchinese as index;

use crate::codec::iso2022::{Charset, Designator, EncoderClasses, Invocation, Iso2022Encoding, Slot};
use crate::table::doublebyte::{ascii_single, DoubleByteTable};
use crate::table::fallback::Fallback;
use crate::util::INDEX_NONE;

fn gbk_pointer(lead: u8, trail: u8) -> Option<u16> {
    let trail_offset = match trail {
        0x40..=0x7e => 0x40,
        0x80..=0xfe => 0x41,
        _ => return None,
    };
    match lead {
        0x81..=0xfe => Some((lead as u16 - 0x81) * 190 + (trail as u16 - trail_offset)),
        _ => None,
    }
}

fn is_gb2312(lead: u8, trail: u8) -> bool {
    matches!((lead, trail), (0xa1..=0xf7, 0xa1..=0xfe))
}

fn gb2312_double(lead: u8, trail: u8) -> u32 {
    if !is_gb2312(lead, trail) {
        return INDEX_NONE;
    }
    match gbk_pointer(lead, trail) {
        Some(pointer) => index::gb18030::forward(pointer),
        None => INDEX_NONE,
    }
}

/// GB 2312 in the EUC form `[A1-F7] [A1-FE]`, also known as EUC-CN.
pub static GB2312_TABLE: DoubleByteTable =
    DoubleByteTable::new((0xa1, 0xf7), (0xa1, 0xfe), ascii_single, gb2312_double);

fn gbk_single(b: u8) -> u32 {
    match b {
        0x80 => 0x20ac,
        _ => INDEX_NONE,
    }
}

fn gbk_double(lead: u8, trail: u8) -> u32 {
    if is_gb2312(lead, trail) {
        return INDEX_NONE;
    }
    match gbk_pointer(lead, trail) {
        Some(pointer) => index::gb18030::forward(pointer),
        None => INDEX_NONE,
    }
}

/// The GBK region outside GB 2312, and the single byte `80` for the euro sign.
pub static GBK_EXTENSION_TABLE: DoubleByteTable =
    DoubleByteTable::new((0x81, 0xfe), (0x40, 0xfe), gbk_single, gbk_double);

/// GBK, as in Windows code page 936.
pub static GBK_TABLE: Fallback = Fallback::new(&GBK_EXTENSION_TABLE, &GB2312_TABLE);

static ISO_2022_CN_GB_DESIGNATORS: [Designator; 1] = [
    Designator { escape: b"$)A", slot: Slot::ShiftOut, charset: Charset::Double(&GB2312_TABLE) },
];

/// The GB 2312 subset of ISO-2022-CN (RFC 1922), switching with `SO` and `SI`.
pub static ISO_2022_CN_GB: Iso2022Encoding = Iso2022Encoding {
    name: "x-iso-2022-cn-gb",
    invocation: Invocation::ShiftControls,
    designators: &ISO_2022_CN_GB_DESIGNATORS,
    repertoire: &GB2312_TABLE,
    g3: None,
    classes: EncoderClasses { roman: None, main: Some(0), ss2: None, ss3: None },
};


#[cfg(test)]
mod gbk_tests {
    use crate::all::GBK;
    use crate::types::*;

    #[test]
    fn test_encoder_valid() {
        let mut e = GBK.raw_encoder();
        assert_feed_ok!(e, "A", "", [0x41]);
        assert_feed_ok!(e, "\u{4e2d}\u{534e}\u{4eba}\u{6c11}\u{5171}\u{548c}\u{56fd}", "",
                        [0xd6, 0xd0, 0xbb, 0xaa, 0xc8, 0xcb, 0xc3, 0xf1,
                         0xb9, 0xb2, 0xba, 0xcd, 0xb9, 0xfa]);
        assert_feed_ok!(e, "\u{4e02}", "", [0x81, 0x40]);
        // the extension comes first
        assert_feed_ok!(e, "1\u{20ac}/m", "", [0x31, 0x80, 0x2f, 0x6d]);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_encoder_invalid() {
        let mut e = GBK.raw_encoder();
        assert_feed_err!(e, "", "\u{ffff}", "", []);
        assert_feed_err!(e, "?", "\u{ffff}", "!", [0x3f]);
        // beyond the two-byte part of GB 18030
        assert_feed_err!(e, "", "\u{1f4a9}", "", []);
        assert_finish_ok!(e, []);
    }

    #[test]
    fn test_decoder_valid() {
        let mut d = GBK.raw_decoder();
        assert_feed_ok!(d, [0x41], [], "A");
        assert_feed_ok!(d, [0xd6, 0xd0, 0x81, 0x40], [], "\u{4e2d}\u{4e02}");
        assert_feed_ok!(d, [0x80, 0xa2, 0xe3], [], "\u{20ac}\u{20ac}");
        assert_finish_ok!(d, "");
    }

    #[test]
    fn test_decoder_invalid() {
        let mut d = GBK.raw_decoder();
        assert_feed_err!(d, [], [0xff], [], "");
        assert_feed_err!(d, [], [0x81], [0x7f], ""); // no trail 7F
        assert_feed_err!(d, [], [0x81], [0x20], "");
        assert_feed_ok!(d, [0x41], [0x81], "A");
        assert_feed_last_err!(d, [], [0x81], "");
    }
}
