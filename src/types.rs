// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Interface to the character encoding.
 *
 * # Raw incremental interface
 *
 * Methods which name starts with `raw_` constitute the raw incremental interface,
 * the lowest-available API for encoders and decoders.
 * A raw conversion reads from a cursor over the input buffer and writes into a cursor
 * over a *bounded* output buffer, advancing both, and stops at the first of:
 *
 * - `Underflow`: the input is exhausted, or only an incomplete sequence is left.
 *   The incomplete sequence is *not* consumed; the caller should feed it again
 *   together with the subsequent input.
 * - `Overflow`: there is no more room in the output.
 *   The caller should drain the output and call again.
 * - `Malformed(n)`: the next `n` input units cannot be a valid sequence at this position.
 * - `Unmappable(n)`: the next `n` input units are well-formed but have no representation
 *   on the other side.
 *
 * On errors the input cursor points to the first offending unit, so the caller can skip
 * `n` units (possibly after writing some substitution) and continue.
 * The codec itself never substitutes anything; see `DecoderTrap` and `EncoderTrap`
 * for the policies implemented by `Encoding::decode` and `Encoding::encode`.
 *
 * Decoders count input units in bytes, encoders count them in `char`s.
 */

use std::borrow::Cow;

/// The result of a single raw conversion call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CoderResult {
    /// More input is needed.
    Underflow,
    /// More output room is needed.
    Overflow,
    /// The given number of input units is an invalid sequence.
    Malformed(usize),
    /// The given number of input units is valid but cannot be represented.
    Unmappable(usize),
}

impl CoderResult {
    /// Returns true for `Malformed` and `Unmappable`.
    pub fn is_error(&self) -> bool {
        matches!(*self, CoderResult::Malformed(_) | CoderResult::Unmappable(_))
    }

    /// Returns the length of the offending sequence, if this is an error.
    pub fn error_len(&self) -> Option<usize> {
        match *self {
            CoderResult::Malformed(n) | CoderResult::Unmappable(n) => Some(n),
            CoderResult::Underflow | CoderResult::Overflow => None,
        }
    }

    /// A human-readable cause, used for `CodecError`.
    pub fn cause(&self) -> &'static str {
        match *self {
            CoderResult::Underflow => "incomplete sequence",
            CoderResult::Overflow => "insufficient output",
            CoderResult::Malformed(_) => "invalid sequence",
            CoderResult::Unmappable(_) => "unrepresentable character",
        }
    }
}

/// Error information from either encoder or decoder.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("{cause} at offset {upto}")]
pub struct CodecError {
    /// The byte position of the offending sequence in the input given to
    /// `Encoding::encode` or `Encoding::decode`.
    pub upto: usize,
    /// A human-readable cause of the error.
    pub cause: Cow<'static, str>,
}

impl CodecError {
    fn new(upto: usize, result: CoderResult) -> CodecError {
        CodecError { upto, cause: Cow::Borrowed(result.cause()) }
    }
}

/// A read cursor over an input buffer.
#[derive(Debug)]
pub struct Reader<'a, T> {
    buf: &'a [T],
    pos: usize,
}

impl<'a, T: Copy> Reader<'a, T> {
    pub fn new(buf: &'a [T]) -> Reader<'a, T> {
        Reader { buf, pos: 0 }
    }

    /// The number of units consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Returns the next unit without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        self.buf.get(self.pos).copied()
    }

    /// Returns the unit `offset` units after the next one, without consuming anything.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<T> {
        self.buf.get(self.pos + offset).copied()
    }

    /// The unconsumed part of the buffer.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.buf[self.pos..]
    }

    /// Consumes `n` units, or everything left if there are fewer.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.buf.len());
    }
}

/// A write cursor over a bounded output buffer.
#[derive(Debug)]
pub struct Writer<'a, T> {
    buf: &'a mut [T],
    pos: usize,
}

impl<'a, T: Copy> Writer<'a, T> {
    pub fn new(buf: &'a mut [T]) -> Writer<'a, T> {
        Writer { buf, pos: 0 }
    }

    /// The number of units written so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn has_room(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    /// Writes a single unit. The caller should have checked `has_room` beforehand.
    #[inline]
    pub fn write(&mut self, v: T) {
        self.buf[self.pos] = v;
        self.pos += 1;
    }

    /// Writes a number of units. The caller should have checked `has_room` beforehand.
    #[inline]
    pub fn write_all(&mut self, v: &[T]) {
        self.buf[self.pos..self.pos + v.len()].copy_from_slice(v);
        self.pos += v.len();
    }

    /// The units written so far.
    pub fn written(&self) -> &[T] {
        &self.buf[..self.pos]
    }
}

pub type ByteReader<'a> = Reader<'a, u8>;
pub type CharReader<'a> = Reader<'a, char>;
pub type ByteWriter<'a> = Writer<'a, u8>;
pub type CharWriter<'a> = Writer<'a, char>;

/// Encoder converting a Unicode string into a byte sequence.
/// This is a lower level interface, and normally `Encoding::encode` should be used instead.
pub trait RawEncoder: Send + 'static {
    /// Creates a fresh `RawEncoder` instance which parameters are same as `self`.
    fn from_self(&self) -> Box<dyn RawEncoder>;

    /// Returns true if this encoding is compatible to ASCII,
    /// i.e. U+0000 through U+007F always map to bytes 00 through 7F and nothing else.
    fn is_ascii_compatible(&self) -> bool {
        false
    }

    /// Encodes as many characters from `input` into `output` as possible.
    fn raw_feed(&mut self, input: &mut CharReader, output: &mut ByteWriter) -> CoderResult;

    /// Finishes the encoder, writing any pending sequence (e.g. a shift back to ASCII).
    /// Only `Underflow` or `Overflow` is returned; on `Overflow` it should be called again.
    fn raw_finish(&mut self, _output: &mut ByteWriter) -> CoderResult {
        CoderResult::Underflow
    }

    /// Resets the encoder to its initial state.
    fn reset(&mut self) {}

    /// Returns true if `ch` can be encoded from the initial state.
    /// This never changes the state of the encoder.
    fn can_encode(&self, ch: char) -> bool;

    /// Returns true if `repl` is a legal byte sequence to substitute for unmappable input.
    fn is_legal_replacement(&self, repl: &[u8]) -> bool {
        repl == b"?"
    }

    /// Same as `raw_feed` but also knows if this is the last input.
    /// For encoders every `char` is complete, so this only forwards to `raw_feed`.
    fn feed(&mut self, input: &mut CharReader, output: &mut ByteWriter, _last: bool) -> CoderResult {
        self.raw_feed(input, output)
    }

    /// Normalizes the input for testing. Internal use only.
    #[cfg(test)]
    fn test_norm_input<'r>(&self, input: &'r str) -> &'r str {
        input
    }

    /// Normalizes the output for testing. Internal use only.
    #[cfg(test)]
    fn test_norm_output<'r>(&self, output: &'r [u8]) -> &'r [u8] {
        output
    }

    /// Counts the input units in given input. Internal use only.
    #[cfg(test)]
    fn test_units(&self, input: &str) -> usize {
        input.chars().count()
    }

    /// A test-friendly interface to `feed`. Internal use only.
    #[cfg(test)]
    fn test_feed(&mut self, input: &str, last: bool) -> (CoderResult, usize, Vec<u8>) {
        let chars: Vec<char> = input.chars().collect();
        let mut reader = CharReader::new(&chars);
        let mut buf = vec![0u8; chars.len() * 8 + 16];
        let mut writer = ByteWriter::new(&mut buf);
        let result = self.feed(&mut reader, &mut writer, last);
        (result, reader.position(), writer.written().to_vec())
    }

    /// A test-friendly interface to `raw_finish`. Internal use only.
    #[cfg(test)]
    fn test_finish(&mut self) -> (CoderResult, Vec<u8>) {
        let mut buf = [0u8; 16];
        let mut writer = ByteWriter::new(&mut buf);
        let result = self.raw_finish(&mut writer);
        (result, writer.written().to_vec())
    }

    /// Concatenates two input sequences into one. Internal use only.
    #[cfg(test)]
    fn test_concat(&self, a: &str, b: &str) -> String {
        let mut s = a.to_string();
        s.push_str(b);
        s
    }
}

/// Decoder converting a byte sequence into a Unicode string.
/// This is a lower level interface, and normally `Encoding::decode` should be used instead.
pub trait RawDecoder: Send + 'static {
    /// Creates a fresh `RawDecoder` instance which parameters are same as `self`.
    fn from_self(&self) -> Box<dyn RawDecoder>;

    /// Returns true if this encoding is compatible to ASCII,
    /// i.e. bytes 00 through 7F always map to U+0000 through U+007F and nothing else.
    fn is_ascii_compatible(&self) -> bool {
        false
    }

    /// Decodes as many bytes from `input` into `output` as possible.
    /// An incomplete sequence at the end of `input` is left unconsumed with `Underflow`.
    fn raw_feed(&mut self, input: &mut ByteReader, output: &mut CharWriter) -> CoderResult;

    /// Finishes the decoder, writing any pending output.
    /// Only `Underflow` or `Overflow` is returned; on `Overflow` it should be called again.
    fn raw_finish(&mut self, _output: &mut CharWriter) -> CoderResult {
        CoderResult::Underflow
    }

    /// Resets the decoder to its initial state.
    fn reset(&mut self) {}

    /// Same as `raw_feed` but also knows if this is the last input.
    /// An incomplete sequence left at the end of the last input is malformed.
    fn feed(&mut self, input: &mut ByteReader, output: &mut CharWriter, last: bool) -> CoderResult {
        match self.raw_feed(input, output) {
            CoderResult::Underflow if last && !input.is_empty() => {
                CoderResult::Malformed(input.remaining())
            }
            result => result,
        }
    }

    /// Normalizes the input for testing. Internal use only.
    #[cfg(test)]
    fn test_norm_input<'r>(&self, input: &'r [u8]) -> &'r [u8] {
        input
    }

    /// Normalizes the output for testing. Internal use only.
    #[cfg(test)]
    fn test_norm_output<'r>(&self, output: &'r str) -> &'r str {
        output
    }

    /// Counts the input units in given input. Internal use only.
    #[cfg(test)]
    fn test_units(&self, input: &[u8]) -> usize {
        input.len()
    }

    /// A test-friendly interface to `feed`. Internal use only.
    #[cfg(test)]
    fn test_feed(&mut self, input: &[u8], last: bool) -> (CoderResult, usize, String) {
        let mut reader = ByteReader::new(input);
        let mut buf = vec!['\0'; input.len() + 16];
        let mut writer = CharWriter::new(&mut buf);
        let result = self.feed(&mut reader, &mut writer, last);
        (result, reader.position(), writer.written().iter().collect())
    }

    /// A test-friendly interface to `raw_finish`. Internal use only.
    #[cfg(test)]
    fn test_finish(&mut self) -> (CoderResult, String) {
        let mut buf = ['\0'; 16];
        let mut writer = CharWriter::new(&mut buf);
        let result = self.raw_finish(&mut writer);
        (result, writer.written().iter().collect())
    }

    /// Concatenates two input sequences into one. Internal use only.
    #[cfg(test)]
    fn test_concat(&self, a: &[u8], b: &[u8]) -> Vec<u8> {
        let mut v = Vec::with_capacity(a.len() + b.len());
        v.extend_from_slice(a);
        v.extend_from_slice(b);
        v
    }
}

/// A trait object using dynamic dispatch which is a sendable reference to the encoding,
/// for code where the encoding is not known at compile-time.
pub type EncodingRef = &'static (dyn Encoding + Send + Sync);

/// The size of intermediate buffers used by the whole-buffer interface.
const CHUNK: usize = 1024;

/// Character encoding.
pub trait Encoding {
    /// Returns the canonical name of given encoding.
    fn name(&self) -> &'static str;

    /// Creates a new encoder.
    fn raw_encoder(&self) -> Box<dyn RawEncoder>;

    /// Creates a new decoder.
    fn raw_decoder(&self) -> Box<dyn RawDecoder>;

    /// Returns true if `ch` can be encoded in this encoding.
    fn can_encode(&self, ch: char) -> bool {
        self.raw_encoder().can_encode(ch)
    }

    /// An easy-to-use interface to `RawEncoder`.
    /// On the encoder error `trap` is called,
    /// which may write a replacement sequence to continue processing,
    /// or a failure to return the error.
    fn encode(&self, input: &str, trap: EncoderTrap) -> Result<Vec<u8>, CodecError> {
        let chars: Vec<char> = input.chars().collect();
        let byte_offset = |pos: usize| input.char_indices().nth(pos).map_or(input.len(), |(i, _)| i);

        let mut encoder = self.raw_encoder();
        let mut reader = CharReader::new(&chars);
        let mut ret = Vec::with_capacity(input.len());
        let mut buf = [0u8; CHUNK];

        loop {
            let mut writer = ByteWriter::new(&mut buf);
            let result = encoder.feed(&mut reader, &mut writer, true);
            ret.extend_from_slice(writer.written());
            match result {
                CoderResult::Underflow => break,
                CoderResult::Overflow => {}
                CoderResult::Malformed(n) | CoderResult::Unmappable(n) => {
                    let start = reader.position();
                    let problem = &chars[start..(start + n).min(chars.len())];
                    if !trap.trap(&mut *encoder, problem, &mut ret) {
                        return Err(CodecError::new(byte_offset(start), result));
                    }
                    reader.advance(n);
                }
            }
        }

        loop {
            let mut writer = ByteWriter::new(&mut buf);
            let result = encoder.raw_finish(&mut writer);
            ret.extend_from_slice(writer.written());
            match result {
                CoderResult::Overflow => {}
                CoderResult::Underflow => return Ok(ret),
                err => return Err(CodecError::new(input.len(), err)),
            }
        }
    }

    /// An easy-to-use interface to `RawDecoder`.
    /// On the decoder error `trap` is called,
    /// which may write a replacement string to continue processing,
    /// or a failure to return the error.
    fn decode(&self, input: &[u8], trap: DecoderTrap) -> Result<String, CodecError> {
        let mut decoder = self.raw_decoder();
        let mut reader = ByteReader::new(input);
        let mut ret = String::with_capacity(input.len());
        let mut buf = ['\0'; CHUNK];

        loop {
            let mut writer = CharWriter::new(&mut buf);
            let result = decoder.feed(&mut reader, &mut writer, true);
            ret.extend(writer.written());
            match result {
                CoderResult::Underflow => break,
                CoderResult::Overflow => {}
                CoderResult::Malformed(n) | CoderResult::Unmappable(n) => {
                    let start = reader.position();
                    let problem = &input[start..(start + n).min(input.len())];
                    if !trap.trap(&mut *decoder, problem, &mut ret) {
                        return Err(CodecError::new(start, result));
                    }
                    reader.advance(n);
                }
            }
        }

        loop {
            let mut writer = CharWriter::new(&mut buf);
            let result = decoder.raw_finish(&mut writer);
            ret.extend(writer.written());
            match result {
                CoderResult::Overflow => {}
                CoderResult::Underflow => return Ok(ret),
                err => return Err(CodecError::new(input.len(), err)),
            }
        }
    }
}

/// A type of the bare function in `EncoderTrap` values.
pub type EncoderTrapFunc =
    fn(encoder: &mut dyn RawEncoder, input: &[char], output: &mut Vec<u8>) -> bool;

/// A type of the bare function in `DecoderTrap` values.
pub type DecoderTrapFunc =
    fn(decoder: &mut dyn RawDecoder, input: &[u8], output: &mut String) -> bool;

/// Trap, which handles decoder errors.
#[derive(Clone, Copy)]
pub enum DecoderTrap {
    /// Immediately fails on errors.
    Strict,
    /// Replaces an error with a U+FFFD.
    Replace,
    /// Silently ignores an error, effectively replacing it with an empty sequence.
    Ignore,
    /// Calls given function to handle decoder errors.
    /// The function is given the current decoder, input and output writer,
    /// and should return true only when it is fine to keep going.
    Call(DecoderTrapFunc),
}

impl DecoderTrap {
    /// Handles a decoder error. May write to the output writer.
    /// Returns true only when it is fine to keep going.
    fn trap(&self, decoder: &mut dyn RawDecoder, input: &[u8], output: &mut String) -> bool {
        match *self {
            DecoderTrap::Strict => false,
            DecoderTrap::Replace => {
                output.push('\u{fffd}');
                true
            }
            DecoderTrap::Ignore => true,
            DecoderTrap::Call(func) => func(decoder, input, output),
        }
    }
}

/// Trap, which handles encoder errors.
#[derive(Clone, Copy)]
pub enum EncoderTrap {
    /// Immediately fails on errors.
    Strict,
    /// Replaces an error with `?` in given encoding.
    /// Note that this fails when `?` cannot be represented in given encoding.
    Replace,
    /// Silently ignores an error, effectively replacing it with an empty sequence.
    Ignore,
    /// Replaces an error with XML numeric character references (e.g. `&#1234;`).
    /// The encoder trap fails when NCRs cannot be represented in given encoding.
    NcrEscape,
    /// Writes given raw bytes, provided that the encoder accepts them
    /// as a legal replacement (see `RawEncoder::is_legal_replacement`).
    Substitute(&'static [u8]),
    /// Calls given function to handle encoder errors.
    /// The function is given the current encoder, input and output writer,
    /// and should return true only when it is fine to keep going.
    Call(EncoderTrapFunc),
}

impl EncoderTrap {
    /// Handles an encoder error. May write to the output writer.
    /// Returns true only when it is fine to keep going.
    fn trap(&self, encoder: &mut dyn RawEncoder, input: &[char], output: &mut Vec<u8>) -> bool {
        fn reencode(encoder: &mut dyn RawEncoder, input: &[char], output: &mut Vec<u8>) -> bool {
            if encoder.is_ascii_compatible() {
                // optimization!
                output.extend(input.iter().map(|&ch| ch as u8));
                return true;
            }
            let mut reader = CharReader::new(input);
            let mut buf = [0u8; CHUNK];
            loop {
                let mut writer = ByteWriter::new(&mut buf);
                let result = encoder.raw_feed(&mut reader, &mut writer);
                output.extend_from_slice(writer.written());
                match result {
                    CoderResult::Underflow => return true,
                    CoderResult::Overflow => {}
                    _ => return false,
                }
            }
        }

        match *self {
            EncoderTrap::Strict => false,
            EncoderTrap::Replace => reencode(encoder, &['?'], output),
            EncoderTrap::Ignore => true,
            EncoderTrap::NcrEscape => {
                let escapes: Vec<char> = input
                    .iter()
                    .flat_map(|&ch| format!("&#{};", ch as u32).chars().collect::<Vec<_>>())
                    .collect();
                reencode(encoder, &escapes, output)
            }
            EncoderTrap::Substitute(repl) => {
                if encoder.is_legal_replacement(repl) {
                    output.extend_from_slice(repl);
                    true
                } else {
                    false
                }
            }
            EncoderTrap::Call(func) => func(encoder, input, output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a contrived encoding example: same as ASCII, but inserts `prepend` between each character
    // within two "e"s (so that `widespread` becomes `wide*s*p*r*ead` and `eeeeasel` becomes
    // `e*ee*ease*l` where `*` is substituted by `prepend`) and prohibits `prohibit` character.
    struct MyEncoder {
        flag: bool,
        prohibit: char,
        prepend: &'static str,
        toggle: bool,
    }

    impl RawEncoder for MyEncoder {
        fn from_self(&self) -> Box<dyn RawEncoder> {
            Box::new(MyEncoder {
                flag: self.flag,
                prohibit: self.prohibit,
                prepend: self.prepend,
                toggle: false,
            })
        }
        fn is_ascii_compatible(&self) -> bool {
            self.flag
        }
        fn raw_feed(&mut self, input: &mut CharReader, output: &mut ByteWriter) -> CoderResult {
            while let Some(ch) = input.peek() {
                if ch > '\u{7f}' || ch == self.prohibit {
                    return CoderResult::Unmappable(1);
                }
                let extra = if self.toggle { self.prepend.len() } else { 0 };
                if !output.has_room(extra + 1) {
                    return CoderResult::Overflow;
                }
                if self.toggle {
                    output.write_all(self.prepend.as_bytes());
                }
                output.write(ch as u8);
                if ch == 'e' {
                    self.toggle = !self.toggle;
                }
                input.advance(1);
            }
            CoderResult::Underflow
        }
        fn can_encode(&self, ch: char) -> bool {
            ch <= '\u{7f}' && ch != self.prohibit
        }
    }

    struct MyEncoding {
        flag: bool,
        prohibit: char,
        prepend: &'static str,
    }

    impl Encoding for MyEncoding {
        fn name(&self) -> &'static str {
            "my encoding"
        }
        fn raw_encoder(&self) -> Box<dyn RawEncoder> {
            Box::new(MyEncoder {
                flag: self.flag,
                prohibit: self.prohibit,
                prepend: self.prepend,
                toggle: false,
            })
        }
        fn raw_decoder(&self) -> Box<dyn RawDecoder> {
            crate::codec::ascii::ASCIIEncoding.raw_decoder()
        }
    }

    #[test]
    fn test_reencoding_trap_with_ascii_compatible_encoding() {
        static COMPAT: MyEncoding = MyEncoding { flag: true, prohibit: '\u{80}', prepend: "" };
        static INCOMPAT: MyEncoding = MyEncoding { flag: false, prohibit: '\u{80}', prepend: "" };

        assert_eq!(COMPAT.encode("Hello\u{203d} I'm fine.", EncoderTrap::NcrEscape),
                   Ok(b"Hello&#8253; I'm fine.".to_vec()));
        assert_eq!(INCOMPAT.encode("Hello\u{203d} I'm fine.", EncoderTrap::NcrEscape),
                   Ok(b"Hello&#8253; I'm fine.".to_vec()));
    }

    #[test]
    fn test_reencoding_trap_with_ascii_incompatible_encoding() {
        static COMPAT: MyEncoding = MyEncoding { flag: true, prohibit: '\u{80}', prepend: "*" };
        static INCOMPAT: MyEncoding = MyEncoding { flag: false, prohibit: '\u{80}', prepend: "*" };

        // this should behave incorrectly as the encoding broke the assumption.
        assert_eq!(COMPAT.encode("Hello\u{203d} I'm fine.", EncoderTrap::NcrEscape),
                   Ok(b"He*l*l*o&#8253;* *I*'*m* *f*i*n*e.".to_vec()));
        assert_eq!(INCOMPAT.encode("Hello\u{203d} I'm fine.", EncoderTrap::NcrEscape),
                   Ok(b"He*l*l*o*&*#*8*2*5*3*;* *I*'*m* *f*i*n*e.".to_vec()));
    }

    #[test]
    fn test_reencoding_trap_can_fail() {
        static FAIL: MyEncoding = MyEncoding { flag: false, prohibit: '&', prepend: "" };

        // this should fail as this contrived encoding does not support `&` at all
        let err = FAIL.encode("Hello\u{203d} I'm fine.", EncoderTrap::NcrEscape).unwrap_err();
        assert_eq!(err.upto, 5);
        assert_eq!(err.cause, "unrepresentable character");
    }

    #[test]
    fn test_substitute_trap_checks_legality() {
        static ENC: MyEncoding = MyEncoding { flag: true, prohibit: '\u{80}', prepend: "" };
        assert_eq!(ENC.encode("a\u{e9}b", EncoderTrap::Substitute(b"?")), Ok(b"a?b".to_vec()));
        assert!(ENC.encode("a\u{e9}b", EncoderTrap::Substitute(b"??")).is_err());
    }

    #[test]
    fn test_error_offset_is_in_bytes() {
        static ENC: MyEncoding = MyEncoding { flag: true, prohibit: '\u{80}', prepend: "" };
        let err = ENC.encode("\u{e9}\u{e9}", EncoderTrap::Strict).unwrap_err();
        assert_eq!(err.upto, 0);
        assert_eq!(err.to_string(), "unrepresentable character at offset 0");
    }

    #[test]
    fn test_cursors() {
        let input = [1u8, 2, 3];
        let mut reader = ByteReader::new(&input);
        assert_eq!(reader.peek_at(2), Some(3));
        assert_eq!(reader.peek_at(3), None);
        reader.advance(2);
        assert_eq!(reader.as_slice(), &[3]);
        reader.advance(5);
        assert!(reader.is_empty());

        let mut buf = [0u8; 2];
        let mut writer = ByteWriter::new(&mut buf);
        assert!(writer.has_room(2));
        writer.write_all(&[7, 8]);
        assert!(!writer.has_room(1));
        assert_eq!(writer.written(), &[7, 8]);
    }
}
