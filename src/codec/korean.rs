// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy Korean encodings based on KS X 1001.

use encoding_index_korean as index;

use crate::codec::iso2022::{Charset, Designator, EncoderClasses, Invocation, Iso2022Encoding, Slot};
use crate::table::doublebyte::{ascii_single, no_single, DoubleByteTable};
use crate::table::fallback::Fallback;
use crate::util::INDEX_NONE;

/// The pointer into the unified Hangul code index.
/// The index covers leads `81-FE` and trails `41-FE`, being 190 codes per lead.
fn uhc_pointer(lead: u8, trail: u8) -> u16 {
    (lead as u16 - 0x81) * 190 + (trail as u16 - 0x41)
}

fn ksx1001_double(lead: u8, trail: u8) -> u32 {
    match (lead, trail) {
        (0xa1..=0xfe, 0xa1..=0xfe) => index::euc_kr::forward(uhc_pointer(lead, trail)),
        _ => INDEX_NONE,
    }
}

/// EUC-KR: ASCII and KS X 1001 in `[A1-FE] [A1-FE]`.
pub static EUC_KR_TABLE: DoubleByteTable =
    DoubleByteTable::new((0xa1, 0xfe), (0xa1, 0xfe), ascii_single, ksx1001_double);

fn uhc_double(lead: u8, trail: u8) -> u32 {
    match (lead, trail) {
        (0xa1..=0xfe, 0xa1..=0xfe) => INDEX_NONE,
        (0x81..=0xfe, 0x41..=0x5a) | (0x81..=0xfe, 0x61..=0x7a) | (0x81..=0xfe, 0x81..=0xfe) => {
            index::euc_kr::forward(uhc_pointer(lead, trail))
        }
        _ => INDEX_NONE,
    }
}

/// Unified Hangul Code, i.e. the 8,822 Hangul syllables missing in KS X 1001.
pub static UHC_TABLE: DoubleByteTable =
    DoubleByteTable::new((0x81, 0xfe), (0x41, 0xfe), no_single, uhc_double);

/// Windows code page 949: EUC-KR extended with Unified Hangul Code.
pub static WINDOWS_949_TABLE: Fallback = Fallback::new(&UHC_TABLE, &EUC_KR_TABLE);

static ISO_2022_KR_DESIGNATORS: [Designator; 1] = [
    Designator { escape: b"$)C", slot: Slot::ShiftOut, charset: Charset::Double(&EUC_KR_TABLE) },
];

/// ISO-2022-KR (RFC 1557), switching to KS X 1001 with `SO` and back with `SI`.
/// The designation is repeated at the first use in every line.
pub static ISO_2022_KR: Iso2022Encoding = Iso2022Encoding {
    name: "iso-2022-kr",
    invocation: Invocation::ShiftControls,
    designators: &ISO_2022_KR_DESIGNATORS,
    repertoire: &EUC_KR_TABLE,
    g3: None,
    classes: EncoderClasses { roman: None, main: Some(0), ss2: None, ss3: None },
};
