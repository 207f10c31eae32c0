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

//! [Huffman coding] of header string literals.
//!
//! [Huffman Coding]: https://en.wikipedia.org/wiki/Huffman_coding
//!
//! # Huffman code in header compression
//! String literals of a header block may be encoded with a static, canonical
//! Huffman code which was generated from statistics obtained on a large
//! sample of HTTP headers. Symbols are 5 to 30 bits long, and the last octet
//! of an encoded string is padded with the most significant bits of the
//! `EOS` symbol (all ones).
//!
//! The encoder only uses the code when it makes a string shorter, so
//! [`huffman_encoded_len`] is used to decide before anything is written.

mod consts;

use std::collections::TryReserveError;

use consts::{HUFFMAN_DECODE, HUFFMAN_ENCODE};

const MAYBE_EOS: u8 = 0x1;
const DECODED: u8 = 0x2;
const ERROR: u8 = 0x4;

/// Returns the length in octets of `src` once Huffman encoded, padding
/// included.
pub(crate) fn huffman_encoded_len(src: &[u8]) -> usize {
    let bits = src
        .iter()
        .map(|byte| HUFFMAN_ENCODE[*byte as usize].0 as usize)
        .sum::<usize>();
    (bits + 7) >> 3
}

/// Converts a string to a Huffman code, and then appends it to `dst`.
pub(crate) fn huffman_encode(src: &[u8], dst: &mut Vec<u8>) {
    // `state` holds at most 7 pending bits between two symbols, and no
    // symbol is longer than 30 bits, so it never overflows.
    let mut state = 0u64;
    let mut pending = 0u32;

    for byte in src.iter() {
        let (nbits, code) = HUFFMAN_ENCODE[*byte as usize];
        state = (state << nbits) | code;
        pending += nbits as u32;
        while pending >= 8 {
            pending -= 8;
            dst.push((state >> pending) as u8);
        }
        state &= (1u64 << pending) - 1;
    }

    // Pads the last octet with the prefix of `EOS`.
    if pending > 0 {
        let pad = 8 - pending;
        dst.push(((state << pad) as u8) | ((1u8 << pad) - 1));
    }
}

/// Converts a Huffman code into a literal string. Users can split the
/// encoded string into multiple slices and pass them in one after another.
///
/// The decoding automaton consumes 4 bits at a time, the algorithm comes
/// from crate [h2].
///
/// [h2]: https://crates.io/crates/h2
pub(crate) struct HuffmanDecoder {
    state: u8,
    flags: u8,
    vec: Vec<u8>,
}

impl HuffmanDecoder {
    /// Creates a new, empty `HuffmanDecoder`.
    pub(crate) fn new() -> Self {
        Self {
            state: 0,
            flags: 0,
            vec: Vec::new(),
        }
    }

    /// Number of octets decoded so far.
    pub(crate) fn len(&self) -> usize {
        self.vec.len()
    }

    /// Decodes input string. Stop when the `src` is used up.
    pub(crate) fn decode(&mut self, src: &[u8]) -> Result<(), HuffmanDecodeError> {
        // Every symbol is at least 5 bits long.
        self.vec.try_reserve(src.len() * 8 / 5 + 1)?;

        for byte in src.iter() {
            for nibble in [byte >> 4, byte & 0xf] {
                let (state, decoded, flags) = HUFFMAN_DECODE[self.state as usize][nibble as usize];
                if flags & ERROR == ERROR {
                    return Err(HuffmanDecodeError::InvalidHuffmanCode);
                }
                if flags & DECODED == DECODED {
                    self.vec.push(decoded);
                }
                self.state = state;
                self.flags = flags;
            }
        }
        Ok(())
    }

    /// Finishes decoding and gets the decoded result.
    ///
    /// Decoding succeeds when every bit has been consumed by a symbol, or the
    /// remaining bits are a padding of at most 7 ones.
    pub(crate) fn finish(self) -> Result<Vec<u8>, HuffmanDecodeError> {
        if self.state != 0 && (self.flags & MAYBE_EOS) == 0 {
            return Err(HuffmanDecodeError::InvalidHuffmanCode);
        }
        Ok(self.vec)
    }
}

/// Possible errors in Huffman decoding operations.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum HuffmanDecodeError {
    InvalidHuffmanCode,
    OutOfMemory,
}

impl From<TryReserveError> for HuffmanDecodeError {
    fn from(_err: TryReserveError) -> Self {
        HuffmanDecodeError::OutOfMemory
    }
}
