// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Internal utilities.

/// The sentinel used by the index crates for missing entries.
pub const INDEX_NONE: u32 = 0xffff;

/// Checked conversion to `char`. Invalid scalar values become U+FFFD,
/// which index tables never produce for a valid entry.
#[inline]
pub fn as_char(ch: u32) -> char {
    char::from_u32(ch).unwrap_or('\u{fffd}')
}

/// Returns true if `b` is in the 94-character graphic range of a 7-bit set (0x21..0x7E).
#[inline]
pub fn is_gl94(b: u8) -> bool {
    (0x21..=0x7e).contains(&b)
}

/// Returns true if `b` is in the 94-character graphic range of an 8-bit set (0xA1..0xFE).
#[inline]
pub fn is_gr94(b: u8) -> bool {
    (0xa1..=0xfe).contains(&b)
}
