// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy traditional Chinese encodings.

use encoding_index_tradchinese as index;

use crate::table::doublebyte::{ascii_single, no_single, DoubleByteTable};
use crate::table::fallback::Fallback;
use crate::util::INDEX_NONE;

fn big5_double(lead: u8, trail: u8) -> u32 {
    let trail_offset = match trail {
        0x40..=0x7e => 0x40,
        0xa1..=0xfe => 0x62,
        _ => return INDEX_NONE,
    };
    match lead {
        0x81..=0xfe => index::big5::forward((lead as u16 - 0x81) * 157 + (trail as u16 - trail_offset)),
        _ => INDEX_NONE,
    }
}

/**
 * Big5-2003 with the ETEN extensions, in `[A1-F9] [40-7E A1-FE]`.
 *
 * This is a traditional Chinese encoding originally made by the consortium of five companies.
 * The Republic of China government standardized Big5-2003 in an appendix of CNS 11643
 * so that CNS 11643 plane 1 and plane 2 have
 * an almost identical set of characters as Big5 (but with a different mapping).
 */
pub static BIG5_TABLE: DoubleByteTable =
    DoubleByteTable::new((0xa1, 0xf9), (0x40, 0xfe), ascii_single, big5_double);

fn hkscs_double(lead: u8, trail: u8) -> u32 {
    match lead {
        0x87..=0xa0 | 0xfa..=0xfe => big5_double(lead, trail),
        _ => INDEX_NONE,
    }
}

/// The Hong Kong Supplementary Character Set in the rows around Big5 (`87-A0` and `FA-FE`).
pub static HKSCS_EXTENSION_TABLE: DoubleByteTable =
    DoubleByteTable::new((0x87, 0xfe), (0x40, 0xfe), no_single, hkscs_double);

/// Big5 with HKSCS-2008.
pub static BIG5_HKSCS_TABLE: Fallback = Fallback::new(&HKSCS_EXTENSION_TABLE, &BIG5_TABLE);
