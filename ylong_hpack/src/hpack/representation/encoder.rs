// Copyright (c) 2023 Huawei Device Co., Ltd.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{CompressionCause, HpackError};
use crate::hpack::integer::{IntegerEncoder, INTEGER_LIMIT};
use crate::hpack::representation::{PrefixBit, PrefixIndexMask};
use crate::huffman::{huffman_encode, huffman_encoded_len};

/// Longest encoding of an integer below `2^16`, whatever its prefix.
const MAX_INTEGER_LEN: usize = 4;

/// `BlockWriter` appends representations to the end of a buffer, starting
/// at its current length. The written part is bounded by `max_len`.
pub(crate) struct BlockWriter<'a> {
    dst: &'a mut Vec<u8>,
    start: usize,
    max_len: usize,
}

impl<'a> BlockWriter<'a> {
    pub(crate) fn new(dst: &'a mut Vec<u8>, max_len: usize) -> Self {
        let start = dst.len();
        Self {
            dst,
            start,
            max_len,
        }
    }

    /// Number of octets written so far.
    pub(crate) fn written(&self) -> usize {
        self.dst.len() - self.start
    }

    /// Drops everything written by this writer.
    pub(crate) fn rollback(self) {
        self.dst.truncate(self.start);
    }

    /// Writes the indexed representation with index 0, which empties the
    /// reference set.
    pub(crate) fn clear_reference_set(&mut self) -> Result<(), HpackError> {
        log::trace!("emit clear reference set");
        self.integer(0, PrefixIndexMask::INDEXED, PrefixBit::INDEXED)
    }

    /// Writes an indexed representation of `index`.
    pub(crate) fn indexed(&mut self, index: usize) -> Result<(), HpackError> {
        log::trace!("emit indexed {index}");
        self.integer(index + 1, PrefixIndexMask::INDEXED, PrefixBit::INDEXED)
    }

    /// Writes a literal whose name refers to `index`.
    pub(crate) fn indexed_name(
        &mut self,
        index: usize,
        value: &[u8],
        incremental: bool,
    ) -> Result<(), HpackError> {
        log::trace!("emit literal with indexed name {index}, incremental {incremental}");
        self.integer(index + 1, PrefixIndexMask::LITERAL, literal_prefix(incremental))?;
        self.string(value)
    }

    /// Writes a literal with a new name.
    pub(crate) fn new_name(
        &mut self,
        name: &[u8],
        value: &[u8],
        incremental: bool,
    ) -> Result<(), HpackError> {
        log::trace!("emit literal with new name, incremental {incremental}");
        self.reserve(1)?;
        self.dst.push(literal_prefix(incremental).bits());
        self.string(name)?;
        self.string(value)
    }

    fn integer(
        &mut self,
        value: usize,
        mask: PrefixIndexMask,
        pre: PrefixBit,
    ) -> Result<(), HpackError> {
        if value >= INTEGER_LIMIT {
            return Err(CompressionCause::InvalidInteger.into());
        }
        let mut octets = [0u8; MAX_INTEGER_LEN];
        let mut len = 0;
        for byte in IntegerEncoder::new(value, mask.0, pre.bits()) {
            octets[len] = byte;
            len += 1;
        }
        self.reserve(len)?;
        self.dst.extend_from_slice(&octets[..len]);
        Ok(())
    }

    /// Writes a string literal, Huffman encoded only when that is shorter.
    fn string(&mut self, octets: &[u8]) -> Result<(), HpackError> {
        let encoded_len = huffman_encoded_len(octets);
        if encoded_len < octets.len() {
            self.length(encoded_len, true)?;
            self.reserve(encoded_len)?;
            huffman_encode(octets, self.dst);
        } else {
            self.length(octets.len(), false)?;
            self.reserve(octets.len())?;
            self.dst.extend_from_slice(octets);
        }
        Ok(())
    }

    fn length(&mut self, len: usize, is_huffman: bool) -> Result<(), HpackError> {
        let pre = if is_huffman { 0x80 } else { 0x00 };
        self.integer(len, PrefixIndexMask::STRING_LENGTH, PrefixBit(pre))
    }

    fn reserve(&mut self, additional: usize) -> Result<(), HpackError> {
        if self.written() + additional > self.max_len {
            return Err(CompressionCause::BlockTooLarge.into());
        }
        self.dst.try_reserve(additional)?;
        Ok(())
    }
}

fn literal_prefix(incremental: bool) -> PrefixBit {
    match incremental {
        true => PrefixBit::LITERAL_WITH_INDEXING,
        false => PrefixBit::LITERAL_WITHOUT_INDEXING,
    }
}
