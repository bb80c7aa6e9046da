// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Common codec implementation for single-byte encodings.

use crate::table::singlebyte::SingleByteTable;
use crate::table::UNMAPPABLE_DECODING;
use crate::types::*;
use crate::util::as_char;

/// A single-byte encoding specified by a `SingleByteTable`.
#[derive(Clone, Copy)]
pub struct SingleByteEncoding {
    pub name: &'static str,
    pub table: &'static SingleByteTable,
}

impl SingleByteEncoding {
    pub const fn new(name: &'static str, table: &'static SingleByteTable) -> SingleByteEncoding {
        SingleByteEncoding { name, table }
    }
}

impl Encoding for SingleByteEncoding {
    fn name(&self) -> &'static str { self.name }
    fn raw_encoder(&self) -> Box<dyn RawEncoder> { SingleByteEncoder::new(self.table) }
    fn raw_decoder(&self) -> Box<dyn RawDecoder> { SingleByteDecoder::new(self.table) }
}

/// An encoder for single-byte encodings based on `SingleByteTable`.
#[derive(Clone, Copy)]
pub struct SingleByteEncoder {
    table: &'static SingleByteTable,
}

impl SingleByteEncoder {
    pub fn new(table: &'static SingleByteTable) -> Box<dyn RawEncoder> {
        Box::new(SingleByteEncoder { table })
    }
}

impl RawEncoder for SingleByteEncoder {
    fn from_self(&self) -> Box<dyn RawEncoder> { SingleByteEncoder::new(self.table) }
    fn is_ascii_compatible(&self) -> bool { self.table.is_ascii_compatible() }

    fn raw_feed(&mut self, input: &mut CharReader, output: &mut ByteWriter) -> CoderResult {
        while let Some(ch) = input.peek() {
            let b = match self.table.encode(ch as u32) {
                Some(b) => b,
                None => return CoderResult::Unmappable(1),
            };
            if !output.has_room(1) {
                return CoderResult::Overflow;
            }
            output.write(b);
            input.advance(1);
        }
        CoderResult::Underflow
    }

    fn can_encode(&self, ch: char) -> bool {
        self.table.encode(ch as u32).is_some()
    }

    /// Any single byte that decodes is a legal replacement.
    fn is_legal_replacement(&self, repl: &[u8]) -> bool {
        match *repl {
            [b] => self.table.decode(b) != UNMAPPABLE_DECODING,
            _ => false,
        }
    }
}

/// A decoder for single-byte encodings based on `SingleByteTable`.
#[derive(Clone, Copy)]
pub struct SingleByteDecoder {
    table: &'static SingleByteTable,
}

impl SingleByteDecoder {
    pub fn new(table: &'static SingleByteTable) -> Box<dyn RawDecoder> {
        Box::new(SingleByteDecoder { table })
    }
}

impl RawDecoder for SingleByteDecoder {
    fn from_self(&self) -> Box<dyn RawDecoder> { SingleByteDecoder::new(self.table) }
    fn is_ascii_compatible(&self) -> bool { self.table.is_ascii_compatible() }

    fn raw_feed(&mut self, input: &mut ByteReader, output: &mut CharWriter) -> CoderResult {
        while let Some(b) = input.peek() {
            let ch = self.table.decode(b);
            if ch == UNMAPPABLE_DECODING {
                return CoderResult::Unmappable(1);
            }
            if !output.has_room(1) {
                return CoderResult::Overflow;
            }
            output.write(as_char(ch));
            input.advance(1);
        }
        CoderResult::Underflow
    }
}

/// Algorithmic mapping for ISO/IEC 8859-1.
pub fn iso_8859_1_forward(code: u8) -> u16 {
    code as u16
}

/// Shared mapping tables for single-byte encodings.
/// Other codecs refer to these as well, e.g. ISO-2022-JP-2 for the ISO 8859 upper halves.
pub mod tables {
    use encoding_index_ebcdic as ebcdic;
    use encoding_index_singlebyte as index;

    use crate::table::singlebyte::{SingleByteSource, SingleByteTable};

    macro_rules! ascii_upper(
        ($($var:ident = $forward:path;)*) => ($(
            pub static $var: SingleByteTable =
                SingleByteTable::new(SingleByteSource::AsciiUpper($forward));
        )*)
    );

    ascii_upper! {
        ISO_8859_1 = super::iso_8859_1_forward;
        IBM866 = index::ibm866::forward;
        ISO_8859_2 = index::iso_8859_2::forward;
        ISO_8859_3 = index::iso_8859_3::forward;
        ISO_8859_4 = index::iso_8859_4::forward;
        ISO_8859_5 = index::iso_8859_5::forward;
        ISO_8859_6 = index::iso_8859_6::forward;
        ISO_8859_7 = index::iso_8859_7::forward;
        ISO_8859_8 = index::iso_8859_8::forward;
        ISO_8859_10 = index::iso_8859_10::forward;
        ISO_8859_13 = index::iso_8859_13::forward;
        ISO_8859_14 = index::iso_8859_14::forward;
        ISO_8859_15 = index::iso_8859_15::forward;
        ISO_8859_16 = index::iso_8859_16::forward;
        KOI8_R = index::koi8_r::forward;
        KOI8_U = index::koi8_u::forward;
        MACINTOSH = index::macintosh::forward;
        X_MAC_CYRILLIC = index::x_mac_cyrillic::forward;
        WINDOWS_874 = index::windows_874::forward;
        WINDOWS_1250 = index::windows_1250::forward;
        WINDOWS_1251 = index::windows_1251::forward;
        WINDOWS_1252 = index::windows_1252::forward;
        WINDOWS_1253 = index::windows_1253::forward;
        WINDOWS_1254 = index::windows_1254::forward;
        WINDOWS_1255 = index::windows_1255::forward;
        WINDOWS_1256 = index::windows_1256::forward;
        WINDOWS_1257 = index::windows_1257::forward;
        WINDOWS_1258 = index::windows_1258::forward;
    }

    // EBCDIC tables cover every byte.
    pub static IBM037: SingleByteTable = SingleByteTable::new(SingleByteSource::Full(ebcdic::ibm037::forward));
    pub static IBM500: SingleByteTable = SingleByteTable::new(SingleByteSource::Full(ebcdic::ibm500::forward));
}
