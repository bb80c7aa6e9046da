// This is a part of rust-encoding.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/
//
// DO NOT EDIT. Generated from IBM character data tables for CCSID 500.

//! IBM code page 500 (EBCDIC, International Latin-1).

#[rustfmt::skip]
const FORWARD_TABLE: &[u16] = &[
    0, 1, 2, 3, 156, 9, 134, 127, // 00
    151, 141, 142, 11, 12, 13, 14, 15, // 08
    16, 17, 18, 19, 157, 133, 8, 135, // 10
    24, 25, 146, 143, 28, 29, 30, 31, // 18
    128, 129, 130, 131, 132, 10, 23, 27, // 20
    136, 137, 138, 139, 140, 5, 6, 7, // 28
    144, 145, 22, 147, 148, 149, 150, 4, // 30
    152, 153, 154, 155, 20, 21, 158, 26, // 38
    32, 160, 226, 228, 224, 225, 227, 229, // 40
    231, 241, 91, 46, 60, 40, 43, 33, // 48
    38, 233, 234, 235, 232, 237, 238, 239, // 50
    236, 223, 93, 36, 42, 41, 59, 94, // 58
    45, 47, 194, 196, 192, 193, 195, 197, // 60
    199, 209, 166, 44, 37, 95, 62, 63, // 68
    248, 201, 202, 203, 200, 205, 206, 207, // 70
    204, 96, 58, 35, 64, 39, 61, 34, // 78
    216, 97, 98, 99, 100, 101, 102, 103, // 80
    104, 105, 171, 187, 240, 253, 254, 177, // 88
    176, 106, 107, 108, 109, 110, 111, 112, // 90
    113, 114, 170, 186, 230, 184, 198, 164, // 98
    181, 126, 115, 116, 117, 118, 119, 120, // A0
    121, 122, 161, 191, 208, 221, 222, 174, // A8
    162, 163, 165, 183, 169, 167, 182, 188, // B0
    189, 190, 172, 124, 175, 168, 180, 215, // B8
    123, 65, 66, 67, 68, 69, 70, 71, // C0
    72, 73, 173, 244, 246, 242, 243, 245, // C8
    125, 74, 75, 76, 77, 78, 79, 80, // D0
    81, 82, 185, 251, 252, 249, 250, 255, // D8
    92, 247, 83, 84, 85, 86, 87, 88, // E0
    89, 90, 178, 212, 214, 210, 211, 213, // E8
    48, 49, 50, 51, 52, 53, 54, 55, // F0
    56, 57, 179, 219, 220, 217, 218, 159, // F8
];

/// Returns the index code point for given byte, or `0xffff` if none.
/// Every byte is mapped in this table.
#[inline]
pub fn forward(code: u8) -> u16 {
    FORWARD_TABLE[code as usize]
}

/// Returns the byte for given code point, or `0xffff` if none.
/// This is a linear scan and meant for tests and table construction only.
pub fn backward(code: u32) -> u16 {
    FORWARD_TABLE
        .iter()
        .position(|&c| c as u32 == code)
        .map_or(0xffff, |i| i as u16)
}

#[cfg(test)]
encoding_index_tests::single_byte_tests!();
