// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Common codec implementation for the ISO/IEC 2022 family of stateful encodings.
 *
 * An ISO-2022 stream is 7-bit.
 * Escape sequences designate character sets into slots, and the designated sets are
 * invoked either with the Shift Out (`SO`) and Shift In (`SI`) controls
 * or, as in ISO-2022-JP, immediately by the designation itself.
 * The single shifts `ESC N` and `ESC O` invoke the second and third slots
 * for exactly one character.
 *
 * The encoder looks characters up in an EUC form of the repertoire,
 * and chooses the character set from the shape of the resulting code:
 * `8E xx` goes to the second slot, the G3 repertoire to the third slot,
 * and other byte pairs to the primary set.
 * A designation is written only once per line for each slot.
 */

use crate::table::doublebyte::{is_double, Repertoire};
use crate::table::singlebyte::SingleByteTable;
use crate::table::{UNMAPPABLE_DECODING, UNMAPPABLE_ENCODING};
use crate::types::*;
use crate::util::{as_char, is_gl94};

pub const ESC: u8 = 0x1b;
pub const SO: u8 = 0x0e;
pub const SI: u8 = 0x0f;

/// A character set which can be designated.
#[derive(Clone, Copy)]
pub enum Charset {
    /// ISO/IEC 646:US.
    Ascii,
    /// JIS X 0201 Roman, which has the yen sign at `5C` and the overline at `7E`.
    Roman,
    /// JIS X 0201 Katakana in `21` through `5F`.
    Katakana,
    /// A 94x94 set, looked up in the GR form (`[A1-FE] [A1-FE]`) of given repertoire.
    Double(&'static dyn Repertoire),
    /// A 96-character set, being the upper half of given single-byte table.
    Upper96(&'static SingleByteTable),
}

impl Charset {
    /// The number of bytes per character.
    pub fn width(&self) -> usize {
        match *self {
            Charset::Double(_) => 2,
            _ => 1,
        }
    }

    /// Decodes a character. The high bits of the bytes are ignored,
    /// and `b2` is only used for double-byte sets.
    fn decode(&self, b1: u8, b2: u8) -> u32 {
        let (b1, b2) = (b1 & 0x7f, b2 & 0x7f);
        match *self {
            Charset::Ascii => b1 as u32,
            Charset::Roman => match b1 {
                0x5c => 0xa5,
                0x7e => 0x203e,
                _ => b1 as u32,
            },
            Charset::Katakana => match b1 {
                0x21..=0x5f => 0xff61 + (b1 as u32 - 0x21),
                _ => UNMAPPABLE_DECODING,
            },
            Charset::Double(repertoire) => {
                if is_gl94(b1) && is_gl94(b2) {
                    repertoire.decode_double(b1 | 0x80, b2 | 0x80)
                } else {
                    UNMAPPABLE_DECODING
                }
            }
            Charset::Upper96(table) => table.decode(b1 | 0x80),
        }
    }
}

/// The slot a designator designates into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Slot {
    /// The set invoked by `SO`, or the G0 set in the `Designation` mode.
    ShiftOut,
    /// The set invoked by `ESC N`.
    SingleShift2,
    /// The set invoked by `ESC O`.
    SingleShift3,
}

/// How the `ShiftOut` slot gets invoked.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Invocation {
    /// `SO` and `SI` switch between ASCII and the designated set (ISO-2022-KR, ISO-2022-CN).
    ShiftControls,
    /// The designation invokes the set at once, and `ESC ( B` returns to ASCII (ISO-2022-JP).
    /// Line breaks also return to ASCII.
    Designation,
}

/// An escape sequence designating a character set.
pub struct Designator {
    /// The bytes after `ESC`.
    pub escape: &'static [u8],
    pub slot: Slot,
    pub charset: Charset,
}

/// Indices of the designators the encoder uses for each class of codes.
/// `None` makes the class unmappable.
#[derive(Clone, Copy, Debug)]
pub struct EncoderClasses {
    /// Single bytes below `80` for non-ASCII characters (e.g. the yen sign).
    pub roman: Option<usize>,
    /// Byte pairs.
    pub main: Option<usize>,
    /// Codes prefixed by `8E`.
    pub ss2: Option<usize>,
    /// Codes from the G3 repertoire.
    pub ss3: Option<usize>,
}

/// An ISO-2022 encoding.
#[derive(Clone, Copy)]
pub struct Iso2022Encoding {
    pub name: &'static str,
    pub invocation: Invocation,
    pub designators: &'static [Designator],
    /// The EUC form of the encodable repertoire.
    pub repertoire: &'static dyn Repertoire,
    /// The encodable G3 repertoire in the EUC form, if any.
    pub g3: Option<&'static dyn Repertoire>,
    pub classes: EncoderClasses,
}

/// The result of matching an escape sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Escape {
    Designate(usize),
    SingleShift(Slot),
    Partial,
    Invalid,
}

/// A character ready to be written in a given set.
struct Encoded {
    designator: usize,
    bytes: [u8; 2],
    len: usize,
}

impl Iso2022Encoding {
    fn first_designator(&self, slot: Slot) -> Option<usize> {
        self.designators.iter().position(|d| d.slot == slot)
    }

    /// Matches `rest`, the bytes after `ESC`, against the designators.
    /// The longest designator wins, then the earlier one in the order of slots.
    fn match_escape(&self, rest: &[u8]) -> Escape {
        if rest.is_empty() {
            return Escape::Partial;
        }

        let mut best: Option<(usize, usize)> = None;
        let mut partial = false;
        for slot in [Slot::ShiftOut, Slot::SingleShift2, Slot::SingleShift3] {
            for (i, d) in self.designators.iter().enumerate().filter(|&(_, d)| d.slot == slot) {
                if rest.starts_with(d.escape) {
                    if best.map_or(true, |(_, len)| d.escape.len() > len) {
                        best = Some((i, d.escape.len()));
                    }
                } else if d.escape.len() > rest.len() && d.escape.starts_with(rest) {
                    partial = true;
                }
            }
        }

        match (best, partial) {
            (_, true) => Escape::Partial,
            (Some((i, _)), false) => Escape::Designate(i),
            (None, false) => match rest[0] {
                b'N' => Escape::SingleShift(Slot::SingleShift2),
                b'O' => Escape::SingleShift(Slot::SingleShift3),
                _ => Escape::Invalid,
            },
        }
    }

    /// Finds the set and 7-bit bytes for a non-ASCII character.
    fn classify(&self, ch: char) -> Option<Encoded> {
        let code = self.repertoire.encode_char(ch as u32);
        let (class, bytes, len) = if code == UNMAPPABLE_ENCODING {
            let code = self.g3?.encode_char(ch as u32);
            if !is_double(code) {
                return None;
            }
            (self.classes.ss3, [(code >> 8) as u8, code as u8], 2)
        } else if code < 0x80 {
            (self.classes.roman, [code as u8, 0], 1)
        } else if !is_double(code) {
            return None;
        } else {
            match (code >> 8) as u8 {
                0x8e => (self.classes.ss2, [code as u8, 0], 1),
                0x8f => return None,
                lead => (self.classes.main, [lead, code as u8], 2),
            }
        };

        let designator = class?;
        if self.designators.get(designator)?.charset.width() != len {
            return None;
        }
        Some(Encoded { designator, bytes: [bytes[0] & 0x7f, bytes[1] & 0x7f], len })
    }
}

impl Encoding for Iso2022Encoding {
    fn name(&self) -> &'static str { self.name }
    fn raw_encoder(&self) -> Box<dyn RawEncoder> { Iso2022Encoder::new(*self) }
    fn raw_decoder(&self) -> Box<dyn RawDecoder> { Iso2022Decoder::new(*self) }
}

/// An encoder for ISO-2022 encodings.
///
/// The state records the designators already written in the current line,
/// and whether the `ShiftOut` slot is currently invoked.
#[derive(Clone, Copy)]
pub struct Iso2022Encoder {
    scheme: Iso2022Encoding,
    shifted: bool,
    so: Option<usize>,
    ss2: Option<usize>,
    ss3: Option<usize>,
}

impl Iso2022Encoder {
    pub fn new(scheme: Iso2022Encoding) -> Box<dyn RawEncoder> {
        Box::new(Iso2022Encoder { scheme, shifted: false, so: None, ss2: None, ss3: None })
    }

    fn shift_in(&self) -> &'static [u8] {
        match self.scheme.invocation {
            Invocation::ShiftControls => &[SI],
            Invocation::Designation => b"\x1b(B",
        }
    }

    fn leave_shifted(&mut self) {
        self.shifted = false;
        if self.scheme.invocation == Invocation::Designation {
            self.so = None;
        }
    }
}

impl RawEncoder for Iso2022Encoder {
    fn from_self(&self) -> Box<dyn RawEncoder> { Iso2022Encoder::new(self.scheme) }

    fn raw_feed(&mut self, input: &mut CharReader, output: &mut ByteWriter) -> CoderResult {
        while let Some(ch) = input.peek() {
            if ch < '\u{80}' {
                let shift_in: &[u8] = if self.shifted { self.shift_in() } else { &[] };
                if !output.has_room(shift_in.len() + 1) {
                    return CoderResult::Overflow;
                }
                output.write_all(shift_in);
                if self.shifted {
                    self.leave_shifted();
                }
                output.write(ch as u8);
                if ch == '\n' {
                    self.so = None;
                    self.ss2 = None;
                    self.ss3 = None;
                }
                input.advance(1);
                continue;
            }

            let encoded = match self.scheme.classify(ch) {
                Some(encoded) => encoded,
                None => return CoderResult::Unmappable(1),
            };
            let index = encoded.designator;
            let designator = &self.scheme.designators[index];

            let (designated, invoke): (bool, &[u8]) = match designator.slot {
                Slot::ShiftOut => {
                    let invoke: &[u8] = match self.scheme.invocation {
                        Invocation::ShiftControls if !self.shifted => &[SO],
                        _ => &[],
                    };
                    (self.so == Some(index), invoke)
                }
                Slot::SingleShift2 => (self.ss2 == Some(index), b"\x1bN"),
                Slot::SingleShift3 => (self.ss3 == Some(index), b"\x1bO"),
            };
            let designation_len = if designated { 0 } else { 1 + designator.escape.len() };
            if !output.has_room(designation_len + invoke.len() + encoded.len) {
                return CoderResult::Overflow;
            }

            if !designated {
                output.write(ESC);
                output.write_all(designator.escape);
            }
            output.write_all(invoke);
            output.write_all(&encoded.bytes[..encoded.len]);
            match designator.slot {
                Slot::ShiftOut => {
                    self.so = Some(index);
                    self.shifted = true;
                }
                Slot::SingleShift2 => self.ss2 = Some(index),
                Slot::SingleShift3 => self.ss3 = Some(index),
            }
            input.advance(1);
        }
        CoderResult::Underflow
    }

    fn raw_finish(&mut self, output: &mut ByteWriter) -> CoderResult {
        if self.shifted {
            let shift_in = self.shift_in();
            if !output.has_room(shift_in.len()) {
                return CoderResult::Overflow;
            }
            output.write_all(shift_in);
            self.leave_shifted();
        }
        CoderResult::Underflow
    }

    fn reset(&mut self) {
        self.shifted = false;
        self.so = None;
        self.ss2 = None;
        self.ss3 = None;
    }

    fn can_encode(&self, ch: char) -> bool {
        ch < '\u{80}' || self.scheme.classify(ch).is_some()
    }
}

/// A decoder for ISO-2022 encodings.
#[derive(Clone, Copy)]
pub struct Iso2022Decoder {
    scheme: Iso2022Encoding,
    shifted: bool,
    so: Option<usize>,
    ss2: Option<usize>,
    ss3: Option<usize>,
}

impl Iso2022Decoder {
    pub fn new(scheme: Iso2022Encoding) -> Box<dyn RawDecoder> {
        Box::new(Iso2022Decoder {
            so: scheme.first_designator(Slot::ShiftOut),
            scheme,
            shifted: false,
            ss2: None,
            ss3: None,
        })
    }

    fn designate(&mut self, index: usize) {
        let designator = &self.scheme.designators[index];
        match designator.slot {
            Slot::ShiftOut => {
                self.so = Some(index);
                if self.scheme.invocation == Invocation::Designation {
                    self.shifted = !matches!(designator.charset, Charset::Ascii);
                }
            }
            Slot::SingleShift2 => self.ss2 = Some(index),
            Slot::SingleShift3 => self.ss3 = Some(index),
        }
    }

    fn charset(&self, index: Option<usize>) -> Option<Charset> {
        index.and_then(|i| self.scheme.designators.get(i)).map(|d| d.charset)
    }

    fn decode_escape(&mut self, input: &mut ByteReader, output: &mut CharWriter) -> CoderResult {
        let rest = &input.as_slice()[1..];
        match self.scheme.match_escape(rest) {
            Escape::Partial => CoderResult::Underflow,
            Escape::Invalid => CoderResult::Malformed(2),
            Escape::Designate(index) => {
                self.designate(index);
                input.advance(1 + self.scheme.designators[index].escape.len());
                CoderResult::Underflow
            }
            Escape::SingleShift(slot) => {
                let current = if slot == Slot::SingleShift2 { self.ss2 } else { self.ss3 };
                let charset = match self.charset(current) {
                    Some(charset) => charset,
                    None => return CoderResult::Malformed(2),
                };
                let width = charset.width();
                let bytes = &rest[1..];
                if bytes.len() < width {
                    return CoderResult::Underflow;
                }
                if !output.has_room(1) {
                    return CoderResult::Overflow;
                }
                let ch = charset.decode(bytes[0], if width > 1 { bytes[1] } else { 0 });
                if ch == UNMAPPABLE_DECODING {
                    return CoderResult::Unmappable(2 + width);
                }
                output.write(as_char(ch));
                input.advance(2 + width);
                CoderResult::Underflow
            }
        }
    }
}

impl RawDecoder for Iso2022Decoder {
    fn from_self(&self) -> Box<dyn RawDecoder> { Iso2022Decoder::new(self.scheme) }

    fn raw_feed(&mut self, input: &mut ByteReader, output: &mut CharWriter) -> CoderResult {
        let shift_controls = self.scheme.invocation == Invocation::ShiftControls;

        while let Some(b) = input.peek() {
            match b {
                ESC => {
                    let before = input.position();
                    let result = self.decode_escape(input, output);
                    if result != CoderResult::Underflow || input.position() == before {
                        return result;
                    }
                }
                SO if shift_controls => {
                    if self.so.is_none() {
                        return CoderResult::Malformed(1);
                    }
                    self.shifted = true;
                    input.advance(1);
                }
                SI if shift_controls => {
                    self.shifted = false;
                    input.advance(1);
                }
                0x80..=0xff => return CoderResult::Malformed(1),
                _ if !self.shifted || b <= 0x20 || b == 0x7f => {
                    if !output.has_room(1) {
                        return CoderResult::Overflow;
                    }
                    output.write(b as char);
                    input.advance(1);
                    if !shift_controls && (b == b'\n' || b == b'\r') {
                        self.shifted = false;
                    }
                }
                _ => {
                    let charset = match self.charset(self.so) {
                        Some(charset) => charset,
                        None => return CoderResult::Malformed(1),
                    };
                    let width = charset.width();
                    let trail = if width > 1 {
                        match input.peek_at(1) {
                            Some(trail) if is_gl94(trail) => trail,
                            Some(_) => return CoderResult::Malformed(1),
                            None => return CoderResult::Underflow,
                        }
                    } else {
                        0
                    };
                    if !output.has_room(1) {
                        return CoderResult::Overflow;
                    }
                    match charset.decode(b, trail) {
                        UNMAPPABLE_DECODING if width > 1 => return CoderResult::Unmappable(2),
                        UNMAPPABLE_DECODING => return CoderResult::Malformed(1),
                        ch => output.write(as_char(ch)),
                    }
                    input.advance(width);
                }
            }
        }
        CoderResult::Underflow
    }

    fn reset(&mut self) {
        self.shifted = false;
        self.so = self.scheme.first_designator(Slot::ShiftOut);
        self.ss2 = None;
        self.ss3 = None;
    }
}
