// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Two-level reverse index from code points to encoded values.
 *
 * The Basic Multilingual Plane is cut into 256 blocks of 256 code points.
 * `index1[hi]` is the number of the block holding `index2` entries for code points `hi:00..hi:FF`,
 * and identical blocks are stored only once. Block 0 is reserved and holds nothing but
 * `UNMAPPABLE_ENCODING`, so every high byte without any mapping simply points there.
 * Supplementary planes are rare in legacy encodings and go to a small sorted list instead.
 */

use std::collections::HashMap;

/// The encoded value returned for code points without a mapping.
/// No single- or double-byte code can ever be 0xFFFD, since 0xFF is never a lead byte.
pub const UNMAPPABLE_ENCODING: u16 = 0xfffd;

const BLOCK: usize = 256;

/// A compressed reverse index. Values are 1-byte codes (`<= 0xff`) or 2-byte codes.
#[derive(Clone, Debug)]
pub struct ReverseIndex {
    index1: [u16; 256],
    index2: Vec<u16>,
    supplementary: Vec<(u32, u16)>,
}

impl ReverseIndex {
    /// Looks up the encoded value for given code point, or `UNMAPPABLE_ENCODING`.
    #[inline]
    pub fn lookup(&self, ch: u32) -> u16 {
        if ch < 0x10000 {
            let block = self.index1[(ch >> 8) as usize] as usize;
            self.index2[block * BLOCK + (ch & 0xff) as usize]
        } else {
            match self.supplementary.binary_search_by_key(&ch, |&(c, _)| c) {
                Ok(i) => self.supplementary[i].1,
                Err(_) => UNMAPPABLE_ENCODING,
            }
        }
    }

    /// The number of distinct blocks in the second-level table, including the reserved one.
    pub fn block_count(&self) -> usize {
        self.index2.len() / BLOCK
    }

    /// Visits every mapping in the code point order.
    pub fn for_each<F: FnMut(u32, u16)>(&self, mut f: F) {
        for (hi, &block) in self.index1.iter().enumerate() {
            if block == 0 {
                continue;
            }
            let base = block as usize * BLOCK;
            for (lo, &code) in self.index2[base..base + BLOCK].iter().enumerate() {
                if code != UNMAPPABLE_ENCODING {
                    f(((hi << 8) | lo) as u32, code);
                }
            }
        }
        for &(ch, code) in &self.supplementary {
            f(ch, code);
        }
    }
}

/// Collects mappings for a `ReverseIndex`.
pub struct ReverseIndexBuilder {
    blocks: Vec<Option<Box<[u16; BLOCK]>>>,
    supplementary: HashMap<u32, u16>,
}

impl Default for ReverseIndexBuilder {
    fn default() -> ReverseIndexBuilder {
        ReverseIndexBuilder::new()
    }
}

impl ReverseIndexBuilder {
    pub fn new() -> ReverseIndexBuilder {
        ReverseIndexBuilder { blocks: vec![None; 256], supplementary: HashMap::new() }
    }

    fn slot(&mut self, ch: u32) -> &mut u16 {
        let block = self.blocks[(ch >> 8) as usize]
            .get_or_insert_with(|| Box::new([UNMAPPABLE_ENCODING; BLOCK]));
        &mut block[(ch & 0xff) as usize]
    }

    /// Adds a mapping unless `ch` is already mapped. The first occurrence wins.
    pub fn insert(&mut self, ch: u32, code: u16) {
        if ch < 0x10000 {
            let slot = self.slot(ch);
            if *slot == UNMAPPABLE_ENCODING {
                *slot = code;
            }
        } else if ch <= 0x10ffff {
            self.supplementary.entry(ch).or_insert(code);
        }
    }

    /// Adds a mapping, replacing any existing one.
    /// This is how encode-only (non-roundtrip) mappings are applied.
    pub fn force(&mut self, ch: u32, code: u16) {
        if ch < 0x10000 {
            *self.slot(ch) = code;
        } else if ch <= 0x10ffff {
            self.supplementary.insert(ch, code);
        }
    }

    /// Deduplicates the blocks and freezes the index.
    pub fn finish(self) -> ReverseIndex {
        let mut index1 = [0u16; 256];
        let mut index2 = vec![UNMAPPABLE_ENCODING; BLOCK];
        let mut seen: HashMap<Box<[u16; BLOCK]>, u16> = HashMap::new();
        seen.insert(Box::new([UNMAPPABLE_ENCODING; BLOCK]), 0);

        for (hi, block) in self.blocks.into_iter().enumerate() {
            let block = match block {
                Some(block) => block,
                None => continue,
            };
            let next = (index2.len() / BLOCK) as u16;
            let number = *seen.entry(block.clone()).or_insert_with(|| {
                index2.extend_from_slice(&block[..]);
                next
            });
            index1[hi] = number;
        }

        let mut supplementary: Vec<(u32, u16)> = self.supplementary.into_iter().collect();
        supplementary.sort_unstable();

        log::trace!("built a reverse index with {} distinct blocks and {} supplementary entries",
                    index2.len() / BLOCK, supplementary.len());
        ReverseIndex { index1, index2, supplementary }
    }
}
