// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Composition of an extension repertoire over a base repertoire.

use super::doublebyte::Repertoire;
use super::reverse::UNMAPPABLE_ENCODING;
use super::UNMAPPABLE_DECODING;

/// A repertoire that consults `extension` first and `base` only when the extension has nothing.
///
/// This expresses a superset repertoire as "the base standard plus additional mappings"
/// without duplicating the base table. The extension should not redefine codes of the base,
/// as extension mappings always take precedence in both directions.
/// Layers can be stacked by using another `Fallback` as either side.
pub struct Fallback {
    extension: &'static dyn Repertoire,
    base: &'static dyn Repertoire,
}

impl Fallback {
    pub const fn new(extension: &'static dyn Repertoire, base: &'static dyn Repertoire) -> Fallback {
        Fallback { extension, base }
    }

    pub fn extension(&self) -> &'static dyn Repertoire {
        self.extension
    }

    pub fn base(&self) -> &'static dyn Repertoire {
        self.base
    }
}

impl Repertoire for Fallback {
    fn decode_single(&self, b: u8) -> u32 {
        match self.extension.decode_single(b) {
            UNMAPPABLE_DECODING => self.base.decode_single(b),
            ch => ch,
        }
    }

    fn decode_double(&self, lead: u8, trail: u8) -> u32 {
        match self.extension.decode_double(lead, trail) {
            UNMAPPABLE_DECODING => self.base.decode_double(lead, trail),
            ch => ch,
        }
    }

    fn encode_char(&self, ch: u32) -> u16 {
        match self.extension.encode_char(ch) {
            UNMAPPABLE_ENCODING => self.base.encode_char(ch),
            code => code,
        }
    }

    fn is_lead(&self, b: u8) -> bool {
        self.extension.is_lead(b) || self.base.is_lead(b)
    }
}
