// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * A decoder detecting one of the Japanese encodings: ISO-2022-JP, EUC-JP or Shift_JIS.
 *
 * The decoder passes ASCII through until it sees an escape or a byte with the high bit set.
 * The bytes available at that point are then decoded by every candidate,
 * and the decoder commits to one of them for the rest of the stream.
 * Candidates are pruned by the per-byte masks before any trial decoding.
 */

use crate::all::{EUC_JP, ISO_2022_JP, SHIFT_JIS};
use crate::codec::error::ErrorEncoder;
use crate::codec::iso2022::ESC;
use crate::types::*;

const PLAIN_ASCII: u8 = 0b001;
const EUC_JP_BYTE: u8 = 0b010;
const SHIFT_JIS_BYTE: u8 = 0b100;

const fn candidate_masks() -> [u8; 256] {
    let mut masks = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        let mut mask = 0;
        if b < 0x80 && b != ESC {
            mask |= PLAIN_ASCII;
        }
        if b < 0x80 || b == 0x8e || b == 0x8f || (b >= 0xa1 && b <= 0xfe) {
            mask |= EUC_JP_BYTE;
        }
        if b < 0xfd {
            mask |= SHIFT_JIS_BYTE;
        }
        masks[i] = mask;
        i += 1;
    }
    masks
}

/// The candidates each byte can belong to.
static CANDIDATE_MASKS: [u8; 256] = candidate_masks();

/// The auto-detecting encoding for Japanese. Decode only.
#[derive(Clone, Copy)]
pub struct JisAutodetectEncoding;

impl Encoding for JisAutodetectEncoding {
    fn name(&self) -> &'static str { "x-jis-autodetect" }
    fn raw_encoder(&self) -> Box<dyn RawEncoder> { ErrorEncoder::new() }
    fn raw_decoder(&self) -> Box<dyn RawDecoder> { JisAutodetectDecoder::new() }
}

/// The outcome of decoding the available bytes with one candidate.
struct Trial {
    consumed: usize,
    output: Vec<char>,
}

/// Decodes `input` with a fresh decoder, returning `None` on any error.
fn trial(encoding: &dyn Encoding, input: &[u8]) -> Option<Trial> {
    let mut decoder = encoding.raw_decoder();
    // no candidate writes more than one char per byte
    let mut buf = vec!['\0'; input.len() + 1];
    let mut reader = ByteReader::new(input);
    let mut writer = CharWriter::new(&mut buf);
    match decoder.raw_feed(&mut reader, &mut writer) {
        CoderResult::Underflow => {
            Some(Trial { consumed: reader.position(), output: writer.written().to_vec() })
        }
        _ => None,
    }
}

/// True if the text has more than one Hiragana, or more than one half-width Katakana.
fn looks_japanese(output: &[char]) -> bool {
    let hiragana = output.iter().filter(|&&c| ('\u{3040}'..='\u{309f}').contains(&c)).count();
    let katakana = output.iter().filter(|&&c| ('\u{ff65}'..='\u{ff9f}').contains(&c)).count();
    hiragana > 1 || katakana > 1
}

enum Detection {
    Commit(EncodingRef, &'static str),
    Undecided,
    Failed,
}

fn detect(input: &[u8]) -> Detection {
    if input.first() == Some(&ESC) && trial(&ISO_2022_JP, input).is_some() {
        return Detection::Commit(&ISO_2022_JP, "escape sequence");
    }

    let candidates = input.iter().fold(EUC_JP_BYTE | SHIFT_JIS_BYTE, |acc, &b| acc & CANDIDATE_MASKS[b as usize]);
    let euc = if candidates & EUC_JP_BYTE != 0 { trial(&EUC_JP, input) } else { None };
    let sjis = if candidates & SHIFT_JIS_BYTE != 0 { trial(&SHIFT_JIS, input) } else { None };

    match (euc, sjis) {
        (None, None) => Detection::Failed,
        (Some(_), None) => Detection::Commit(&EUC_JP, "only EUC-JP decodes"),
        (None, Some(_)) => Detection::Commit(&SHIFT_JIS, "only Shift_JIS decodes"),
        (Some(euc), Some(sjis)) => {
            if euc.consumed > sjis.consumed {
                Detection::Commit(&EUC_JP, "EUC-JP decodes more")
            } else if sjis.consumed > euc.consumed {
                Detection::Commit(&SHIFT_JIS, "Shift_JIS decodes more")
            } else if euc.consumed == 0 {
                Detection::Undecided
            } else if looks_japanese(&euc.output) {
                Detection::Commit(&EUC_JP, "EUC-JP output looks Japanese")
            } else if looks_japanese(&sjis.output) {
                Detection::Commit(&SHIFT_JIS, "Shift_JIS output looks Japanese")
            } else {
                Detection::Commit(&SHIFT_JIS, "ambiguous, defaulting to Shift_JIS")
            }
        }
    }
}

/// A decoder for `x-jis-autodetect`.
pub struct JisAutodetectDecoder {
    detected: Option<Box<dyn RawDecoder>>,
}

impl JisAutodetectDecoder {
    pub fn new() -> Box<dyn RawDecoder> {
        Box::new(JisAutodetectDecoder { detected: None })
    }
}

impl RawDecoder for JisAutodetectDecoder {
    fn from_self(&self) -> Box<dyn RawDecoder> { JisAutodetectDecoder::new() }

    fn raw_feed(&mut self, input: &mut ByteReader, output: &mut CharWriter) -> CoderResult {
        if let Some(decoder) = self.detected.as_mut() {
            return decoder.raw_feed(input, output);
        }

        while let Some(b) = input.peek() {
            if CANDIDATE_MASKS[b as usize] & PLAIN_ASCII == 0 {
                break;
            }
            if !output.has_room(1) {
                return CoderResult::Overflow;
            }
            output.write(b as char);
            input.advance(1);
        }
        if input.is_empty() {
            return CoderResult::Underflow;
        }

        match detect(input.as_slice()) {
            Detection::Commit(encoding, reason) => {
                log::debug!("x-jis-autodetect: detected {} ({})", encoding.name(), reason);
                let mut decoder = encoding.raw_decoder();
                let result = decoder.raw_feed(input, output);
                self.detected = Some(decoder);
                result
            }
            Detection::Undecided => CoderResult::Underflow,
            Detection::Failed => {
                log::debug!("x-jis-autodetect: no candidate decodes {} bytes", input.remaining());
                CoderResult::Malformed(1)
            }
        }
    }

    fn raw_finish(&mut self, output: &mut CharWriter) -> CoderResult {
        match self.detected.as_mut() {
            Some(decoder) => decoder.raw_finish(output),
            None => CoderResult::Underflow,
        }
    }

    fn reset(&mut self) {
        self.detected = None;
    }
}
