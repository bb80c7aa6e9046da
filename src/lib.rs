// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!

# Encoding-legacy

A conversion engine for legacy character encodings:
table-driven single-byte and double-byte codecs, the escape-based ISO-2022 family,
and an auto-detecting decoder for Japanese text.

## Simple Usage

To encode a string:

~~~~ {.rust}
use encoding_legacy::{Encoding, EncoderTrap};
use encoding_legacy::all::ISO_8859_1;

assert_eq!(ISO_8859_1.encode("caf\u{e9}", EncoderTrap::Strict),
           Ok(vec![99, 97, 102, 233]));
~~~~

To encode a string with unrepresentable characters:

~~~~ {.rust}
use encoding_legacy::{Encoding, EncoderTrap};
use encoding_legacy::all::ISO_8859_2;

assert!(ISO_8859_2.encode("Acme\u{a9}", EncoderTrap::Strict).is_err());
assert_eq!(ISO_8859_2.encode("Acme\u{a9}", EncoderTrap::Replace),
           Ok(vec![65, 99, 109, 101, 63]));
assert_eq!(ISO_8859_2.encode("Acme\u{a9}", EncoderTrap::Ignore),
           Ok(vec![65, 99, 109, 101]));
assert_eq!(ISO_8859_2.encode("Acme\u{a9}", EncoderTrap::NcrEscape),
           Ok(vec![65, 99, 109, 101, 38, 35, 49, 54, 57, 59]));
~~~~

To decode a byte sequence:

~~~~ {.rust}
use encoding_legacy::{Encoding, DecoderTrap};
use encoding_legacy::all::ISO_8859_1;

assert_eq!(ISO_8859_1.decode(&[99, 97, 102, 233], DecoderTrap::Strict),
           Ok("caf\u{e9}".to_string()));
~~~~

To decode a byte sequence with invalid sequences:

~~~~ {.rust}
use encoding_legacy::{Encoding, DecoderTrap};
use encoding_legacy::all::ISO_8859_6;

assert!(ISO_8859_6.decode(&[65, 99, 109, 101, 169], DecoderTrap::Strict).is_err());
assert_eq!(ISO_8859_6.decode(&[65, 99, 109, 101, 169], DecoderTrap::Replace),
           Ok("Acme\u{fffd}".to_string()));
assert_eq!(ISO_8859_6.decode(&[65, 99, 109, 101, 169], DecoderTrap::Ignore),
           Ok("Acme".to_string()));
~~~~

A practical example of custom encoder traps:

~~~~ {.rust}
use encoding_legacy::{Encoding, RawEncoder, EncoderTrap, DecoderTrap};
use encoding_legacy::all::ASCII;

// hexadecimal numeric character reference replacement
fn hex_ncr_escape(_encoder: &mut dyn RawEncoder, input: &[char], output: &mut Vec<u8>) -> bool {
    let escapes: String = input.iter().map(|&ch| format!("&#x{:x};", ch as u32)).collect();
    output.extend_from_slice(escapes.as_bytes());
    true
}
static HEX_NCR_ESCAPE: EncoderTrap = EncoderTrap::Call(hex_ncr_escape);

let orig = "Hello, \u{4e16}\u{754c}!";
let encoded = ASCII.encode(orig, HEX_NCR_ESCAPE).unwrap();
assert_eq!(ASCII.decode(&encoded, DecoderTrap::Strict),
           Ok("Hello, &#x4e16;&#x754c;!".to_string()));
~~~~

Stateful encodings finish their output with a shift back to ASCII:

~~~~ {.rust}
use encoding_legacy::{Encoding, EncoderTrap, DecoderTrap};
use encoding_legacy::all::{ISO_2022_JP, JIS_AUTODETECT};

let encoded = ISO_2022_JP.encode("\u{306b}\u{307b}\u{3093}", EncoderTrap::Strict).unwrap();
assert_eq!(encoded, b"\x1b$B$K$[$s\x1b(B".to_vec());
assert_eq!(JIS_AUTODETECT.decode(&encoded, DecoderTrap::Strict),
           Ok("\u{306b}\u{307b}\u{3093}".to_string()));
~~~~

## Detailed Usage

**`Encoding`** is a single character encoding.
It contains `encode` and `decode` methods for converting `&str` to `Vec<u8>` and vice versa.
For the error handling, they receive **traps** (`EncoderTrap` and `DecoderTrap` respectively)
which replace any error with some string (e.g. `U+FFFD`) or sequence (e.g. `?`).
You can also use the `Strict` traps to stop on an error.
`encoding_legacy::all` has a static item for every supported encoding.

**`RawEncoder`** and **`RawDecoder`** are the incremental interface.
They convert from a `Reader` cursor into a bounded `Writer` cursor and stop
at the first of four conditions (`CoderResult`):
more input needed, more output room needed, a malformed sequence, or an unmappable one.
The codecs never substitute anything on their own; that policy belongs to the caller.
See the `types` module for details.

## Supported Encodings

* 7-bit strict ASCII (`ascii`) and ISO 8859-1 (`iso-8859-1`)
* Single byte encodings from the WHATWG Encoding Standard indices:
    * IBM code page 866
    * ISO 8859-{2,3,4,5,6,7,8,10,13,14,15,16}
    * KOI8-R, KOI8-U
    * MacRoman (`macintosh`), Macintosh Cyrillic encoding (`x-mac-cyrillic`)
    * Windows code pages 874, 1250, 1251, 1252, 1253, 1254, 1255, 1256, 1257, 1258
* EBCDIC code pages 037 and 500
* Japanese: Shift_JIS, Windows code page 932 (`windows-31j`), EUC-JP with JIS X 0212,
  ISO-2022-JP, ISO-2022-JP-2 and the auto-detecting `x-jis-autodetect`
* Korean: EUC-KR, Windows code page 949 and ISO-2022-KR
* Simplified Chinese: GB 2312, GBK and ISO-2022-CN (GB 2312 only)
* Traditional Chinese: Big5 and Big5-HKSCS

Many legacy character encodings lack the proper specification,
and even those that have a specification are highly dependent of the actual implementation.
Some mappings therefore do not roundtrip; they are listed with each encoding.

*/

pub use self::types::{CoderResult, CodecError, Reader, Writer,
                      ByteReader, CharReader, ByteWriter, CharWriter,
                      RawEncoder, RawDecoder, EncodingRef, Encoding,
                      EncoderTrapFunc, DecoderTrapFunc, DecoderTrap, EncoderTrap}; // reexport

#[cfg(test)] #[macro_use] mod testutils;
mod util;

pub mod types;

/// Mapping tables. Semi-internal.
///
/// Tables are plain values with lazily derived lookup structures,
/// shared by every codec instance of the encodings using them.
pub mod table {
    /// The decoded value for bytes without a mapping.
    /// It is never a valid result of a table lookup, as no legacy table maps to U+FFFD.
    pub const UNMAPPABLE_DECODING: u32 = 0xfffd;

    pub use self::reverse::UNMAPPABLE_ENCODING;

    pub mod reverse;
    pub mod singlebyte;
    pub mod doublebyte;
    pub mod fallback;
}

/// Codec implementations.
pub mod codec {
    pub mod error;
    pub mod ascii;
    pub mod singlebyte;
    pub mod doublebyte;
    pub mod iso2022;
    pub mod autodetect;
    pub mod japanese;
    pub mod korean;
    pub mod simpchinese;
    pub mod tradchinese;
}

pub mod all;
