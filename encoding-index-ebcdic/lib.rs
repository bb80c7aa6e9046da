// This is a part of rust-encoding.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! EBCDIC index tables for
//! [rust-encoding](https://github.com/lifthrasiir/rust-encoding).
//!
//! Unlike the ASCII-based single-byte indices, these tables cover the whole byte range:
//! `forward` is keyed by the raw byte and `backward` returns a raw byte (or `0xffff`).

/// IBM code page 037.
pub mod ibm037;

/// IBM code page 500.
pub mod ibm500;
